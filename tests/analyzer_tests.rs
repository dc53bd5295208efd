use spec_analyzer::analyzer::{
    classify, detect_helper_import, detect_navigation_pattern, extract_blocks,
    extract_import_header, BlockCategory, HelperImport, NavigationPattern,
};

// Representative reference spec in the shape the analyzer consumes.
const DFB_SPEC: &str = r#"import { test, expect } from '@playwright/test';
import { dfbHelpers } from '../helpers/dfbHelpers';

test('Create DFB load', async ({ page }) => {
    await test.step('Login BTMS', async () => {
        await page.goto(process.env.BTMS_URL);
        await loginPage.login(user, pass);
    });
    await test.step('Office Configuration', async () => {
        await officePage.selectOffice('DFB');
    });
    await test.step('Carrier Search', async () => {
        await carrierPage.search('SWIFT');
    });
    await test.step('Fill Load Form', async () => {
        await loadPage.fillForm(data);
    });
    await test.step('Verify BTMS Booked Status', async () => {
        await loadPage.refreshAndValidateBooked();
    });
});
"#;

#[cfg(test)]
mod extractor_tests {
    use super::*;

    #[test]
    fn extracts_all_named_steps_in_source_order() {
        let blocks = extract_blocks(DFB_SPEC);
        let names: Vec<&str> = blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Login BTMS",
                "Office Configuration",
                "Carrier Search",
                "Fill Load Form",
                "Verify BTMS Booked Status",
            ]
        );
    }

    #[test]
    fn body_excludes_closing_brace_and_is_trimmed() {
        let blocks = extract_blocks(DFB_SPEC);
        let login = &blocks[0];
        assert!(login.code.starts_with("await page.goto"));
        assert!(login.code.ends_with(';'));
        assert!(!login.code.contains('}'));
    }

    #[test]
    fn nested_steps_are_both_extracted() {
        let text = r#"
            await test.step('Outer Step', async () => {
                await test.step('Inner Step', async () => {
                    await page.click('#x');
                });
            });
        "#;
        let blocks = extract_blocks(text);
        let names: Vec<&str> = blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Outer Step", "Inner Step"]);
        assert!(blocks[0].code.contains("Inner Step"));
    }

    #[test]
    fn unbalanced_braces_yield_no_block_and_no_panic() {
        let text = "await test.step('Broken Step', async () => {\n    await page.click(\n";
        let blocks = extract_blocks(text);
        assert!(blocks.is_empty());
    }

    #[test]
    fn non_async_step_header_is_not_an_anchor_match() {
        let text = "await test.step('Sync Step', () => { doThing(); });";
        assert!(extract_blocks(text).is_empty());
    }

    #[test]
    fn escaped_quote_in_step_name_is_kept() {
        let text = "await test.step('Bob\\'s Step', async () => { run(); });";
        let blocks = extract_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "Bob's Step");
    }

    #[test]
    fn braces_inside_string_literals_are_counted() {
        // Lenient by policy: the scanner is a character counter, not a
        // lexer, so a brace inside a string shifts the depth.
        let text = "await test.step('Odd Step', async () => { log('{'); });";
        assert!(extract_blocks(text).is_empty());
    }
}

#[cfg(test)]
mod import_header_tests {
    use super::*;

    #[test]
    fn header_stops_at_first_non_import_line() {
        let header = extract_import_header(DFB_SPEC);
        assert_eq!(header.lines().count(), 3); // two imports + one blank
        assert!(!header.contains("test("));
    }

    #[test]
    fn file_without_imports_yields_empty_header() {
        assert_eq!(extract_import_header("test('x', async () => {});\n"), "");
    }
}

#[cfg(test)]
mod classifier_tests {
    use super::*;

    #[test]
    fn classification_is_deterministic() {
        let a = classify("Carrier Search", "");
        let b = classify("Carrier Search", "");
        assert_eq!(a, b);
        assert_eq!(a, BlockCategory::CarrierSearch);
    }

    #[test]
    fn login_excludes_dme_and_tnx_wording() {
        assert_eq!(classify("Login BTMS", ""), BlockCategory::Login);
        assert_ne!(classify("Login to DME", ""), BlockCategory::Login);
        assert_ne!(classify("TNX Login", ""), BlockCategory::Login);
    }

    #[test]
    fn carrier_search_requires_both_words_and_no_dme() {
        assert_eq!(
            classify("Search for Carrier", ""),
            BlockCategory::CarrierSearch
        );
        assert_ne!(
            classify("DME Carrier Search", ""),
            BlockCategory::CarrierSearch
        );
    }

    #[test]
    fn visibility_wording_resolves_on_code_body() {
        let name = "Toggle Carrier Visibility";
        assert_eq!(
            classify(name, "await app.switchToDme();"),
            BlockCategory::DmeCarrierToggle
        );
        assert_eq!(
            classify(name, "await loadboard.show();"),
            BlockCategory::CarrierVisibility
        );
    }

    #[test]
    fn dme_carrier_names_are_a_toggle_step() {
        assert_eq!(
            classify("DME Carrier Setup", ""),
            BlockCategory::DmeCarrierToggle
        );
    }

    #[test]
    fn final_verify_matches_btms_or_booked_wording() {
        assert_eq!(
            classify("Verify BTMS Booked Status", ""),
            BlockCategory::BtmsFinalVerify
        );
        assert_eq!(
            classify("Verify Booked", ""),
            BlockCategory::BtmsFinalVerify
        );
    }

    #[test]
    fn body_fallback_recovers_category_for_anonymous_names() {
        assert_eq!(
            classify("Step 12", "await app.switchToTnx();"),
            BlockCategory::TnxVerify
        );
        assert_eq!(
            classify("Step 13", "await app.switchToDme();"),
            BlockCategory::DmeVerify
        );
        assert_eq!(
            classify("Step 14", "await page.refreshAndValidateBooked();"),
            BlockCategory::BtmsFinalVerify
        );
    }

    #[test]
    fn unmatched_names_default_to_other() {
        assert_eq!(classify("Do Something Odd", ""), BlockCategory::Other);
    }

    #[test]
    fn name_rules_win_over_body_fallback() {
        // The body carries a TNX switch, but the name already classifies.
        assert_eq!(
            classify("Office Setup", "await app.switchToTnx();"),
            BlockCategory::OfficeConfig
        );
    }
}

#[cfg(test)]
mod flag_tests {
    use super::*;

    #[test]
    fn url_navigation_idiom_sets_url_based() {
        assert_eq!(
            detect_navigation_pattern("await page.goto(url);"),
            NavigationPattern::UrlBased
        );
        assert_eq!(
            detect_navigation_pattern("await home.clickHome();"),
            NavigationPattern::ClickHome
        );
    }

    #[test]
    fn commission_helper_identifier_sets_helper_import() {
        assert_eq!(
            detect_helper_import("import { commissionHelper } from './h';"),
            HelperImport::CommissionHelper
        );
        assert_eq!(detect_helper_import(DFB_SPEC), HelperImport::DfbHelpers);
    }
}
