//! Form field names, grouped by the card and column they belong to
//!
//! Label lists in the content are paired with these groups by position.
//! The whole catalogue is checked for duplicate names at compile time.

/// Project card, page 1
pub const PROJECT: [&str; 5] = [
    "project_name",
    "project_type",
    "project_goal",
    "project_budget",
    "project_date",
];

/// Impact card, page 1
pub const IMPACT: &str = "project_objectives";

/// Contact card, page 1
pub const CONTACT: [&str; 5] = [
    "contact_name_role",
    "contact_email",
    "contact_phone",
    "contact_company",
    "contact_location",
];

/// Audience checkboxes, page 1
pub const AUDIENCE: [&str; 5] = [
    "audience_b2b",
    "audience_b2c",
    "audience_interne",
    "audience_international",
    "audience_communaute",
];

pub const FEATURES_LEFT: [&str; 4] = [
    "feature_landing",
    "feature_catalog",
    "feature_mvp",
    "feature_dashboard",
];

pub const FEATURES_RIGHT: [&str; 4] = [
    "feature_payment",
    "feature_automations",
    "feature_cms",
    "feature_multilingue",
];

/// Design card, page 2: references, available content
pub const DESIGN: [&str; 2] = ["design_references", "design_content"];

pub const INTEGRATIONS_LEFT: [&str; 4] = [
    "integration_payment",
    "integration_crm",
    "integration_analytics",
    "integration_emailing",
];

pub const INTEGRATIONS_RIGHT: [&str; 4] = [
    "integration_cms",
    "integration_api",
    "integration_auth",
    "integration_automations",
];

/// Pages / screens card, page 2
pub const SCREENS: [&str; 2] = ["pages_primary", "pages_secondary"];

/// Planning table rows, page 3
pub const PLANNING: [&str; 4] = ["plan_kickoff", "plan_design", "plan_dev", "plan_delivery"];

/// Signature block, page 3: client name and signature, then Kah-Digital's
pub const SIGNATURE: [&str; 4] = ["sign_client_name", "sign_client", "sign_kd_name", "sign_kd"];

const PAGE_ONE: &[&[&str]] = &[
    &PROJECT,
    &[IMPACT],
    &CONTACT,
    &AUDIENCE,
    &FEATURES_LEFT,
    &FEATURES_RIGHT,
];
const PAGE_TWO: &[&[&str]] = &[&DESIGN, &INTEGRATIONS_LEFT, &INTEGRATIONS_RIGHT, &SCREENS];
const PAGE_THREE: &[&[&str]] = &[&PLANNING, &SIGNATURE];
const PAGE_FOUR: &[&[&str]] = &[];

/// Field groups of each page, in page order
pub const PAGES: [&[&[&str]]; 4] = [PAGE_ONE, PAGE_TWO, PAGE_THREE, PAGE_FOUR];

/// Total number of form fields in a brief
pub const FIELD_COUNT: usize = count(&PAGES);

const _: () = assert!(!has_duplicates(&PAGES), "duplicate form field name in catalogue");

/// Field names placed on 1-based `page_number`, in paint order
pub fn page_fields(page_number: usize) -> impl Iterator<Item = &'static str> {
    let groups: &'static [&'static [&'static str]] = match page_number {
        1..=4 => PAGES[page_number - 1],
        _ => &[],
    };
    groups.iter().flat_map(|group| group.iter().copied())
}

/// Every field name, in document order
pub fn all_fields() -> impl Iterator<Item = &'static str> {
    (1..=PAGES.len()).flat_map(page_fields)
}

const fn count(pages: &[&[&[&str]]]) -> usize {
    let mut total = 0;
    let mut p = 0;
    while p < pages.len() {
        let mut g = 0;
        while g < pages[p].len() {
            total += pages[p][g].len();
            g += 1;
        }
        p += 1;
    }
    total
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Name at flat position `index`
const fn name_at<'a>(pages: &[&[&'a [&'a str]]], index: usize) -> &'a str {
    let mut remaining = index;
    let mut p = 0;
    while p < pages.len() {
        let mut g = 0;
        while g < pages[p].len() {
            if remaining < pages[p][g].len() {
                return pages[p][g][remaining];
            }
            remaining -= pages[p][g].len();
            g += 1;
        }
        p += 1;
    }
    ""
}

const fn has_duplicates(pages: &[&[&[&str]]]) -> bool {
    let total = count(pages);
    let mut i = 0;
    while i < total {
        let mut j = i + 1;
        while j < total {
            if str_eq(name_at(pages, i), name_at(pages, j)) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_count() {
        assert_eq!(FIELD_COUNT, 44);
        assert_eq!(all_fields().count(), FIELD_COUNT);
        assert_eq!(page_fields(1).count(), 24);
        assert_eq!(page_fields(2).count(), 12);
        assert_eq!(page_fields(3).count(), 8);
        assert_eq!(page_fields(4).count(), 0);
        assert_eq!(page_fields(9).count(), 0);
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = all_fields().collect();
        assert_eq!(names.len(), FIELD_COUNT);
        for expected in ["project_name", "contact_email", "sign_client", "sign_kd"] {
            assert!(names.contains(expected));
        }
    }

    #[test]
    fn test_duplicate_detection() {
        const CLEAN: &[&[&[&str]]] = &[&[&["a", "b"]], &[&["c"]]];
        const CLASH: &[&[&[&str]]] = &[&[&["a", "b"]], &[&["c", "b"]]];
        assert!(!has_duplicates(CLEAN));
        assert!(has_duplicates(CLASH));
        assert_eq!(name_at(CLASH, 3), "b");
    }
}
