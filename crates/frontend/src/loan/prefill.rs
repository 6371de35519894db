use std::collections::HashMap;

use crate::shared::page::PageDom;

/// Query parameter → input element id, one entry per prefillable field.
const PREFILL_FIELDS: &[(&str, &str)] = &[
    ("legal_name", "legal_name"),
    ("email", "email"),
    ("phone", "phone"),
    ("zip_code", "zip_code"),
];

/// Decode a location search string (`"?a=1&b=2"`) into a parameter map.
pub fn parse_query(search: &str) -> HashMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Copy known query parameters into their form fields.
///
/// Absent or empty parameters leave the field as rendered. A missing input
/// element is logged and skipped; the remaining fields are still filled.
/// Running this twice with the same search string changes nothing the second
/// time.
pub fn prefill_form(page: &impl PageDom, search: &str) {
    let params = parse_query(search);
    for (param, field_id) in PREFILL_FIELDS {
        let Some(value) = params.get(*param).filter(|v| !v.is_empty()) else {
            continue;
        };
        if page.set_field_value(field_id, value) {
            log::debug!("prefilled {} from url", field_id);
        } else {
            log::warn!("{} field not found", field_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::page::testing::FakePage;

    fn page() -> FakePage {
        FakePage::with_fields(&[
            ("legal_name", ""),
            ("email", ""),
            ("phone", "555-0100"),
            ("zip_code", "94103"),
        ])
    }

    #[test]
    fn fills_decoded_parameters() {
        let page = page();
        prefill_form(&page, "?legal_name=Jane%20Doe&email=j%40x.com");
        assert_eq!(page.field("legal_name").as_deref(), Some("Jane Doe"));
        assert_eq!(page.field("email").as_deref(), Some("j@x.com"));
        // fields not named in the URL keep their rendered values
        assert_eq!(page.field("phone").as_deref(), Some("555-0100"));
        assert_eq!(page.field("zip_code").as_deref(), Some("94103"));
    }

    #[test]
    fn empty_parameter_is_skipped() {
        let page = page();
        prefill_form(&page, "?phone=&zip_code=10001");
        assert_eq!(page.field("phone").as_deref(), Some("555-0100"));
        assert_eq!(page.field("zip_code").as_deref(), Some("10001"));
    }

    #[test]
    fn missing_field_does_not_stop_the_rest() {
        let page = FakePage::with_fields(&[("email", "")]);
        prefill_form(&page, "?legal_name=Jane&email=jane%40x.com&zip_code=10001");
        assert_eq!(page.field("email").as_deref(), Some("jane@x.com"));
        assert!(page.field("legal_name").is_none());
    }

    #[test]
    fn prefill_is_idempotent() {
        let page = page();
        let search = "?legal_name=Jane%20Doe&phone=415%20555%200100";
        prefill_form(&page, search);
        let first = page.fields.borrow().clone();
        prefill_form(&page, search);
        assert_eq!(*page.fields.borrow(), first);
    }

    #[test]
    fn parse_query_decodes_and_tolerates_blank_input() {
        let params = parse_query("?legal_name=Jane%20Doe");
        assert_eq!(params.get("legal_name").map(String::as_str), Some("Jane Doe"));
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }
}
