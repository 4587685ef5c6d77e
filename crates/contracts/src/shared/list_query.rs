//! In-memory search, sort, paging and group expansion for already-fetched
//! lists. No query parameters are sent to the server; every list page pulls
//! the full collection once and slices it here.

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Page sizes offered by every paginated table
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Row types that can be matched by the free-text filter
pub trait Searchable {
    /// String form of every field of the row
    fn search_fields(&self) -> Vec<String>;

    /// `term` must already be lower-cased
    fn matches_filter(&self, term: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(term))
    }
}

/// Row types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Case-insensitive substring filter, OR across fields.
/// A blank term returns the rows unchanged.
pub fn filter_rows<T: Searchable + Clone>(rows: &[T], term: &str) -> Vec<T> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.matches_filter(&term))
        .cloned()
        .collect()
}

pub fn sort_rows<T: Sortable>(rows: &mut [T], field: &str, ascending: bool) {
    rows.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// ceil(count / page_size); zero rows means zero pages
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Clamps a 1-based page number into `[1, total_pages]`
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Visible slice of a filtered list
#[derive(Clone, Debug, PartialEq)]
pub struct PageSlice<T> {
    pub items: Vec<T>,
    /// 1-based
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub page_size: usize,
}

impl<T> PageSlice<T> {
    /// 1-based index of the first visible row, 0 when empty
    pub fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last visible row
    pub fn last_index(&self) -> usize {
        (self.page * self.page_size).min(self.total_count)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filter/sort/page state of one table
#[derive(Clone, Debug, PartialEq)]
pub struct ListQuery {
    pub term: String,
    /// 1-based
    pub page: usize,
    pub page_size: usize,
    pub sort_field: Option<String>,
    pub sort_ascending: bool,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_field: None,
            sort_ascending: true,
        }
    }
}

impl ListQuery {
    pub fn sorted_by(field: &str) -> Self {
        Self {
            sort_field: Some(field.to_string()),
            ..Self::default()
        }
    }

    /// Changing the filter always goes back to page 1
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.page = 1;
    }

    /// Changing the page size always goes back to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Same column flips direction, a new column starts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_ascending = true;
        }
    }

    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = clamp_page(page, total_pages);
    }

    /// Filters and pages `rows`, clamping the stored page to the result
    pub fn apply<T: Searchable + Clone>(&mut self, rows: &[T]) -> PageSlice<T> {
        let filtered = filter_rows(rows, &self.term);
        self.slice(filtered)
    }

    /// Like [`apply`](Self::apply) but also orders rows by the sort column
    pub fn apply_sorted<T: Searchable + Sortable + Clone>(&mut self, rows: &[T]) -> PageSlice<T> {
        let mut filtered = filter_rows(rows, &self.term);
        if let Some(field) = &self.sort_field {
            sort_rows(&mut filtered, field, self.sort_ascending);
        }
        self.slice(filtered)
    }

    fn slice<T>(&mut self, filtered: Vec<T>) -> PageSlice<T> {
        let total_count = filtered.len();
        let pages = total_pages(total_count, self.page_size);
        self.page = clamp_page(self.page, pages);
        let start = (self.page - 1) * self.page_size;
        let items: Vec<T> = filtered
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();
        PageSlice {
            items,
            page: self.page,
            total_pages: pages,
            total_count,
            page_size: self.page_size,
        }
    }
}

/// Whether grouped tables allow one or many open parents at once
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpansionMode {
    Single,
    Multiple,
}

/// Open/closed state of the parent rows of a grouped table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionState {
    mode: ExpansionMode,
    open: BTreeSet<i64>,
}

impl ExpansionState {
    pub fn new(mode: ExpansionMode) -> Self {
        Self {
            mode,
            open: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> ExpansionMode {
        self.mode
    }

    pub fn toggle(&mut self, id: i64) {
        if self.open.remove(&id) {
            return;
        }
        if self.mode == ExpansionMode::Single {
            self.open.clear();
        }
        self.open.insert(id);
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.open.contains(&id)
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        id: i64,
        nombre: String,
        cantidad: u32,
        activo: bool,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![
                self.id.to_string(),
                self.nombre.clone(),
                self.cantidad.to_string(),
                self.activo.to_string(),
            ]
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "cantidad" => self.cantidad.cmp(&other.cantidad),
                _ => self.nombre.to_lowercase().cmp(&other.nombre.to_lowercase()),
            }
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (0..n)
            .map(|i| Row {
                id: i as i64 + 1,
                nombre: format!("Optica {}", ["Norte", "Sur", "Centro"][i % 3]),
                cantidad: (i * 7 % 11) as u32,
                activo: i % 2 == 0,
            })
            .collect()
    }

    #[test]
    fn test_blank_term_returns_all_rows() {
        let data = rows(7);
        assert_eq!(filter_rows(&data, ""), data);
        assert_eq!(filter_rows(&data, "   "), data);
    }

    #[test]
    fn test_filter_is_case_insensitive_subset() {
        let data = rows(30);
        for term in ["norte", "SUR", "cEnT", "true", "1", "zzz"] {
            let filtered = filter_rows(&data, term);
            let needle = term.to_lowercase();
            assert!(filtered.iter().all(|r| data.contains(r)));
            assert!(filtered.iter().all(|r| r
                .search_fields()
                .iter()
                .any(|f| f.to_lowercase().contains(&needle))));
        }
        assert!(filter_rows(&data, "zzz").is_empty());
        assert_eq!(filter_rows(&data, "NORTE").len(), 10);
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        for n in 0..60 {
            for p in PAGE_SIZE_OPTIONS {
                assert_eq!(total_pages(n, p), (n + p - 1) / p);
            }
        }
        assert_eq!(total_pages(11, 5), 3);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_clamp_page_bounds() {
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(9, 4), 4);
        assert_eq!(clamp_page(3, 4), 3);
        assert_eq!(clamp_page(0, 0), 1);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn test_query_resets_page_on_term_and_size_change() {
        let data = rows(40);
        let mut query = ListQuery::default();
        query.go_to(3, total_pages(data.len(), query.page_size));
        assert_eq!(query.page, 3);

        query.set_term("sur");
        assert_eq!(query.page, 1);

        query.go_to(2, 2);
        query.set_page_size(25);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 25);
    }

    #[test]
    fn test_apply_slices_and_clamps() {
        let data = rows(23);
        let mut query = ListQuery::default();
        query.set_page_size(5);
        query.page = 99;

        let slice = query.apply(&data);
        assert_eq!(slice.total_pages, 5);
        assert_eq!(slice.page, 5);
        assert_eq!(query.page, 5);
        assert_eq!(slice.items.len(), 3);
        assert_eq!(slice.first_index(), 21);
        assert_eq!(slice.last_index(), 23);
        assert!(slice.has_prev());
        assert!(!slice.has_next());
    }

    #[test]
    fn test_apply_on_empty_result() {
        let data = rows(10);
        let mut query = ListQuery::default();
        query.set_term("no existe");
        let slice = query.apply(&data);
        assert_eq!(slice.total_count, 0);
        assert_eq!(slice.total_pages, 0);
        assert_eq!(slice.page, 1);
        assert_eq!(slice.first_index(), 0);
        assert!(slice.items.is_empty());
    }

    #[test]
    fn test_apply_sorted_orders_before_paging() {
        let data = rows(12);
        let mut query = ListQuery::sorted_by("cantidad");
        query.toggle_sort("cantidad");
        assert!(!query.sort_ascending);

        let slice = query.apply_sorted(&data);
        let firsts: Vec<u32> = slice.items.iter().map(|r| r.cantidad).collect();
        let mut expected: Vec<u32> = data.iter().map(|r| r.cantidad).collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(firsts, expected[..10].to_vec());
    }

    #[test]
    fn test_single_expansion_keeps_one_group_open() {
        let mut state = ExpansionState::new(ExpansionMode::Single);
        state.toggle(1);
        state.toggle(2);
        assert!(!state.is_expanded(1));
        assert!(state.is_expanded(2));
        state.toggle(2);
        assert_eq!(state.open_count(), 0);
    }

    #[test]
    fn test_multiple_expansion_toggles_independently() {
        let mut state = ExpansionState::new(ExpansionMode::Multiple);
        state.toggle(1);
        state.toggle(2);
        assert!(state.is_expanded(1) && state.is_expanded(2));
        state.toggle(1);
        assert!(!state.is_expanded(1) && state.is_expanded(2));
        state.collapse_all();
        assert_eq!(state.open_count(), 0);
    }
}
