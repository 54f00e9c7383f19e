//! Page category constants.
//!
//! Every page rendered inside a tab declares an HTML `id` of the form
//! `{entity}--{category}` (e.g. `"a004_invoice--list"`) and a
//! `data-page-category` taken from the constants below.

/// Master list: filter panel and table.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview with stat cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Multi-step wizard.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Pages outside the shell (login, password reset).
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
];

/// `{entity}--{category}` with both parts non-empty.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a004_invoice--list"));
        assert!(!is_valid_page_id("a004_invoice"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a004_invoice--"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("usecase"));
        assert!(!is_known_category("legacy"));
    }
}
