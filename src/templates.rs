use crate::analyzer::{BlockCategory, SpecStructure};

/// Split the stored import header into trimmed lines, dropping blanks and
/// duplicates. A line seen twice keeps its first occurrence's position.
pub fn template_imports(structure: &SpecStructure) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for line in structure.imports.lines() {
        let t = line.trim();
        if t.is_empty() {
            continue;
        }
        if !out.iter().any(|seen| seen == t) {
            out.push(t.to_string());
        }
    }
    out
}

/// `(step name, code)` pairs from the precondition bucket, excluding login
/// blocks. Login is framework-level setup, not template material.
pub fn template_preconditions(structure: &SpecStructure) -> Vec<(&str, &str)> {
    structure
        .precondition_blocks
        .iter()
        .filter(|b| b.category != BlockCategory::Login)
        .map(|b| (b.name.as_str(), b.code.as_str()))
        .collect()
}

/// `(step name, code)` pairs from the validation bucket, unfiltered.
pub fn template_validation(structure: &SpecStructure) -> Vec<(&str, &str)> {
    structure
        .validation_blocks
        .iter()
        .map(|b| (b.name.as_str(), b.code.as_str()))
        .collect()
}
