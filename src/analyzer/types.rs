use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Closed set of semantic tags a structural block can carry.
///
/// The partitioner matches exhaustively over this enum, so adding a
/// category forces every consumer to be updated at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockCategory {
    Login,
    AgentEmailCapture,
    OfficeConfig,
    CarrierSearch,
    CarrierVisibility,
    DmeCarrierToggle,
    CustomerSearchCreate,
    FormFill,
    CreateLoadRate,
    CarrierTab,
    SaveAlert,
    ViewModeValidate,
    PostLoad,
    DmeVerify,
    TnxVerify,
    BtmsFinalVerify,
    Other,
}

/// One named, brace-delimited region extracted from a reference spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuralBlock {
    pub name: String,
    /// Trimmed body text between the block's braces, closing brace excluded.
    pub code: String,
    pub category: BlockCategory,
    /// Ordering hints reserved for callers; never populated by the analyzer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_numbers: Option<Vec<u32>>,
}

/// Whole-file signal: how the reference file reaches its target screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationPattern {
    UrlBased,
    ClickHome,
}

/// Whole-file signal: which helper-module convention the file uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HelperImport {
    #[serde(rename = "commissionHelper")]
    CommissionHelper,
    #[serde(rename = "dfbHelpers")]
    DfbHelpers,
}

/// Parsed representation of one reference spec file.
///
/// Read-only after construction. The analyzer caches one structure per
/// resolved path for its whole lifetime; there is no invalidation when the
/// underlying file changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecStructure {
    /// Raw leading import header; deduplication happens in the assembler.
    pub imports: String,
    pub precondition_blocks: Vec<StructuralBlock>,
    pub test_step_blocks: Vec<StructuralBlock>,
    pub validation_blocks: Vec<StructuralBlock>,
    pub navigation_pattern: NavigationPattern,
    pub helper_import: HelperImport,
    /// Resolved absolute path the structure was parsed from (cache key).
    pub source_file: PathBuf,
}
