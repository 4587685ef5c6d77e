//! Page categories.
//!
//! Every routed page declares an HTML `id` in the format
//! `{entity}--{category}` (e.g. `"a001_armazon--list"`) and a
//! `data-page-category`. The entity half matches the `domain/` directory.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Table with search and pagination
    List,
    /// Edit view of a single record
    Detail,
    /// Create form
    Form,
    /// Role landing page
    Home,
    /// Read-only report
    Report,
}

impl PageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
            PageCategory::Form => "form",
            PageCategory::Home => "home",
            PageCategory::Report => "report",
        }
    }

    /// BEM classes of the page root
    pub fn root_class(self) -> &'static str {
        match self {
            PageCategory::List | PageCategory::Report => "page",
            PageCategory::Detail => "page page--detail",
            PageCategory::Form => "page page--form",
            PageCategory::Home => "page page--home",
        }
    }
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, category)) if !entity.is_empty() && !category.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_armazon--list"));
        assert!(!is_valid_page_id("a001_armazon"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_armazon--"));
    }

    #[test]
    fn test_detail_pages_get_modifier() {
        assert_eq!(PageCategory::Detail.root_class(), "page page--detail");
        assert_eq!(PageCategory::List.as_str(), "list");
    }
}
