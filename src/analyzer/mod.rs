mod blocks;
mod classify;
mod imports;
mod partition;
mod types;

pub use blocks::{extract_blocks, RawBlock};
pub use classify::classify;
pub use imports::extract_import_header;
pub use partition::{
    detect_helper_import, detect_navigation_pattern, partition_blocks, PartitionedBlocks,
};
pub use types::{BlockCategory, HelperImport, NavigationPattern, SpecStructure, StructuralBlock};
