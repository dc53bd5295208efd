use crate::analyzer::{
    classify, detect_helper_import, detect_navigation_pattern, extract_blocks,
    extract_import_header, partition_blocks, SpecStructure, StructuralBlock,
};
use crate::registry::ReferenceRegistry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Owns the reference registry and a per-path structure cache.
///
/// Single-threaded by design: parse, classify, and partition run to
/// completion before the caller gets a result. The cache holds at most one
/// structure per resolved path and is never invalidated; callers that need
/// to observe file changes create a fresh analyzer.
pub struct SpecAnalyzer {
    registry: ReferenceRegistry,
    cache: HashMap<PathBuf, Rc<SpecStructure>>,
}

impl SpecAnalyzer {
    pub fn new(registry: ReferenceRegistry) -> Self {
        Self {
            registry,
            cache: HashMap::new(),
        }
    }

    /// Pure existence check against the registry keys.
    pub fn has_reference(&self, key: &str) -> bool {
        self.registry.contains_key(key)
    }

    /// Parse one reference file, memoized by resolved absolute path.
    ///
    /// Returns `None` when the file is missing or unreadable; repeated
    /// calls for the same path return the same cached value.
    pub fn parse_spec(&mut self, path: &Path) -> Option<Rc<SpecStructure>> {
        let resolved = path.canonicalize().ok()?;

        if let Some(cached) = self.cache.get(&resolved) {
            return Some(Rc::clone(cached));
        }

        let text = fs::read_to_string(&resolved).ok()?;
        let structure = Rc::new(build_structure(&text, resolved.clone()));
        self.cache.insert(resolved, Rc::clone(&structure));
        Some(structure)
    }

    /// Return the first registered candidate for `key` that exists and
    /// parses, or `None` when the key is unknown or every candidate fails.
    /// An unknown key involves no file-system access at all.
    pub fn find_best_reference(&mut self, key: &str) -> Option<Rc<SpecStructure>> {
        let candidates: Vec<PathBuf> = self
            .registry
            .candidates(key)?
            .iter()
            .map(|c| self.registry.resolve(c))
            .collect();

        for candidate in candidates {
            if !candidate.exists() {
                continue;
            }
            if let Some(structure) = self.parse_spec(&candidate) {
                return Some(structure);
            }
        }

        None
    }
}

/// Run the full pipeline over one file's text: header, blocks,
/// classification, buckets, whole-file flags.
fn build_structure(text: &str, source_file: PathBuf) -> SpecStructure {
    let imports = extract_import_header(text);

    let classified: Vec<StructuralBlock> = extract_blocks(text)
        .into_iter()
        .map(|raw| {
            let category = classify(&raw.name, &raw.code);
            StructuralBlock {
                name: raw.name,
                code: raw.code,
                category,
                step_numbers: None,
            }
        })
        .collect();

    let buckets = partition_blocks(classified);

    SpecStructure {
        imports,
        precondition_blocks: buckets.preconditions,
        test_step_blocks: buckets.test_steps,
        validation_blocks: buckets.validations,
        navigation_pattern: detect_navigation_pattern(text),
        helper_import: detect_helper_import(text),
        source_file,
    }
}
