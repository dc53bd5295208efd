use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maps a category key (a template-family label such as `dfb` or
/// `commission`, distinct from a block's category) to an ordered list of
/// candidate reference files, relative to `root`.
///
/// An explicit configuration value, constructed once and handed to the
/// analyzer; there is no module-level registry.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferenceRegistry {
    root: PathBuf,
    entries: HashMap<String, Vec<PathBuf>>,
}

impl ReferenceRegistry {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: HashMap::new(),
        }
    }

    /// Load a registry from a JSON config file of the shape
    /// `{ "root": "...", "entries": { "<key>": ["path", ...] } }`.
    pub fn from_json_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Register (or replace) the candidate list for one category key.
    pub fn register(&mut self, key: &str, candidates: Vec<PathBuf>) {
        self.entries.insert(key.to_string(), candidates);
    }

    /// Pure key-existence check; never touches the file system.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Candidate paths for a key, in declared order.
    pub fn candidates(&self, key: &str) -> Option<&[PathBuf]> {
        self.entries.get(key).map(|v| v.as_slice())
    }

    /// Resolve a candidate path against the registry root.
    pub fn resolve(&self, candidate: &Path) -> PathBuf {
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.root.join(candidate)
        }
    }
}

/// Built-in golden references for the known template families.
pub fn default_registry(root: impl Into<PathBuf>) -> ReferenceRegistry {
    let mut registry = ReferenceRegistry::new(root);
    registry.register(
        "dfb",
        vec![
            PathBuf::from("tests/dfb/create-load-dfb.spec.ts"),
            PathBuf::from("tests/dfb/create-load-dfb-smoke.spec.ts"),
        ],
    );
    registry.register(
        "commission",
        vec![PathBuf::from("tests/commission/agent-commission.spec.ts")],
    );
    registry
}
