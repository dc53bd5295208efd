use super::types::{BlockCategory, HelperImport, NavigationPattern, StructuralBlock};

/// Navigation idiom that marks a page reached directly via URL.
const URL_NAVIGATION_MARKER: &str = "page.goto(";
/// Helper module identifier distinguishing the commission convention.
const COMMISSION_HELPER_MARKER: &str = "commissionHelper";

/// The three disjoint bucket lists; together they hold every block
/// extracted from one file.
#[derive(Debug, Default)]
pub struct PartitionedBlocks {
    pub preconditions: Vec<StructuralBlock>,
    pub test_steps: Vec<StructuralBlock>,
    pub validations: Vec<StructuralBlock>,
}

/// Assign every classified block to exactly one bucket.
///
/// Membership is a function of category alone, never of block order or
/// name. No block is dropped or duplicated.
pub fn partition_blocks(blocks: Vec<StructuralBlock>) -> PartitionedBlocks {
    let mut out = PartitionedBlocks::default();

    for block in blocks {
        match block.category {
            BlockCategory::Login
            | BlockCategory::AgentEmailCapture
            | BlockCategory::OfficeConfig
            | BlockCategory::CarrierSearch
            | BlockCategory::CarrierVisibility
            | BlockCategory::DmeCarrierToggle => out.preconditions.push(block),
            BlockCategory::BtmsFinalVerify => out.validations.push(block),
            BlockCategory::CustomerSearchCreate
            | BlockCategory::FormFill
            | BlockCategory::CreateLoadRate
            | BlockCategory::CarrierTab
            | BlockCategory::SaveAlert
            | BlockCategory::ViewModeValidate
            | BlockCategory::PostLoad
            | BlockCategory::DmeVerify
            | BlockCategory::TnxVerify
            | BlockCategory::Other => out.test_steps.push(block),
        }
    }

    out
}

/// Whole-file check for the URL-origin navigation idiom.
pub fn detect_navigation_pattern(text: &str) -> NavigationPattern {
    if text.contains(URL_NAVIGATION_MARKER) {
        NavigationPattern::UrlBased
    } else {
        NavigationPattern::ClickHome
    }
}

/// Whole-file check for which helper-module convention the file imports.
pub fn detect_helper_import(text: &str) -> HelperImport {
    if text.contains(COMMISSION_HELPER_MARKER) {
        HelperImport::CommissionHelper
    } else {
        HelperImport::DfbHelpers
    }
}
