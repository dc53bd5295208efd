use super::types::BlockCategory;

/// Predicate over the lower-cased block name and lower-cased body text.
type RulePredicate = fn(&str, &str) -> bool;

/// Phrase marking a switch into the DME application.
const DME_SWITCH: &str = "switchtodme";
/// Phrase marking a switch into the TNX application.
const TNX_SWITCH: &str = "switchtotnx";
/// Phrase marking a refresh-and-validate-booked call.
const REFRESH_VALIDATE_BOOKED: &str = "refreshandvalidatebooked";

fn carrier_visibility_wording(name: &str) -> bool {
    name.contains("carrier")
        && (name.contains("visibility") || name.contains("loadboard") || name.contains("toggle"))
}

/// Ordered name-based rule chain, first match wins.
///
/// The order is load-bearing: later rules are narrower and would misfire
/// on names already matched by earlier, broader rules. Never reorder, and
/// never switch to a "most specific" policy.
const NAME_RULES: &[(RulePredicate, BlockCategory)] = &[
    (
        |n, _| n.contains("login") && !n.contains("dme") && !n.contains("tnx"),
        BlockCategory::Login,
    ),
    (
        |n, _| n.contains("agent") && n.contains("email"),
        BlockCategory::AgentEmailCapture,
    ),
    (|n, _| n.contains("office"), BlockCategory::OfficeConfig),
    (
        |n, _| n.contains("carrier") && n.contains("search") && !n.contains("dme"),
        BlockCategory::CarrierSearch,
    ),
    // Visibility wording splits on the body: a DME-switch call makes it a
    // DME toggle step rather than plain carrier visibility.
    (
        |n, c| carrier_visibility_wording(n) && c.contains(DME_SWITCH),
        BlockCategory::DmeCarrierToggle,
    ),
    (
        |n, _| carrier_visibility_wording(n),
        BlockCategory::CarrierVisibility,
    ),
    (
        |n, _| n.contains("dme") && n.contains("carrier"),
        BlockCategory::DmeCarrierToggle,
    ),
    (
        |n, _| n.contains("customer"),
        BlockCategory::CustomerSearchCreate,
    ),
    (
        |n, _| n.contains("fill") || n.contains("form"),
        BlockCategory::FormFill,
    ),
    (
        |n, _| n.contains("load") && (n.contains("create") || n.contains("rate")),
        BlockCategory::CreateLoadRate,
    ),
    (
        |n, _| n.contains("carrier") && n.contains("tab"),
        BlockCategory::CarrierTab,
    ),
    (
        |n, _| n.contains("save") || n.contains("alert"),
        BlockCategory::SaveAlert,
    ),
    (
        |n, _| n.contains("view mode"),
        BlockCategory::ViewModeValidate,
    ),
    (|n, _| n.contains("post"), BlockCategory::PostLoad),
    (
        |n, _| n.contains("dme") && n.contains("verify"),
        BlockCategory::DmeVerify,
    ),
    (|n, _| n.contains("tnx"), BlockCategory::TnxVerify),
    (
        |n, _| n.contains("verify") && (n.contains("btms") || n.contains("booked")),
        BlockCategory::BtmsFinalVerify,
    ),
];

/// Content-based fallback pass, applied only when no name rule fires.
const BODY_RULES: &[(&str, BlockCategory)] = &[
    (DME_SWITCH, BlockCategory::DmeVerify),
    (TNX_SWITCH, BlockCategory::TnxVerify),
    (REFRESH_VALIDATE_BOOKED, BlockCategory::BtmsFinalVerify),
];

/// Assign exactly one category to a block. Total and deterministic over
/// `(name, code)`; defaults to `Other` when neither pass matches.
pub fn classify(name: &str, code: &str) -> BlockCategory {
    let name = name.to_lowercase();
    let code = code.to_lowercase();

    for (pred, category) in NAME_RULES {
        if pred(&name, &code) {
            return *category;
        }
    }

    for (needle, category) in BODY_RULES {
        if code.contains(needle) {
            return *category;
        }
    }

    BlockCategory::Other
}
