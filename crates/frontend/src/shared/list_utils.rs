/// List page helpers: shared state for searchable tables, the search box and
/// match highlighting. Filtering and paging themselves live in
/// `contracts::shared::list_query`.
use contracts::shared::error::ApiError;
use contracts::shared::list_query::{ListQuery, PageSlice, Searchable, Sortable};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::shared::config::config;
use crate::shared::icons::icon;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Fetched rows of a list page plus their filter/sort/page state
pub struct ListState<T: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<T>>,
    pub query: RwSignal<ListQuery>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListState<T> {}

impl<T> ListState<T>
where
    T: Searchable + Sortable + Clone + Send + Sync + 'static,
{
    /// Empty state; `sort_field` picks the initial order
    pub fn new(sort_field: Option<&str>) -> Self {
        let mut query = match sort_field {
            Some(field) => ListQuery::sorted_by(field),
            None => ListQuery::default(),
        };
        query.page_size = config().lists.default_page_size;
        Self {
            rows: RwSignal::new(Vec::new()),
            query: RwSignal::new(query),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Visible page after filter and sort
    pub fn page(&self) -> Signal<PageSlice<T>> {
        let rows = self.rows;
        let query = self.query;
        Signal::derive(move || {
            let mut q = query.get();
            rows.with(|rows| q.apply_sorted(rows))
        })
    }

    pub fn term(&self) -> Signal<String> {
        let query = self.query;
        Signal::derive(move || query.with(|q| q.term.clone()))
    }

    pub fn set_term(&self, term: String) {
        self.query.update(|q| q.set_term(term));
    }

    pub fn go_to(&self, page: usize) {
        let total = self.page().get_untracked().total_pages;
        self.query.update(|q| q.go_to(page, total));
    }

    pub fn set_page_size(&self, size: usize) {
        self.query.update(|q| q.set_page_size(size));
    }

    /// Replace the rows with the result of `fetch`; errors stay inline
    pub fn load<F>(&self, fetch: F)
    where
        F: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let state = *self;
        state.loading.set(true);
        state.error.set(None);
        spawn_local(async move {
            match fetch.await {
                Ok(rows) => {
                    log::debug!("loaded {} rows", rows.len());
                    state.rows.set(rows);
                }
                Err(e) => {
                    log::error!("list load failed: {}", e);
                    state.error.set(Some(e.to_string()));
                }
            }
            state.loading.set(false);
        });
    }
}

/// Highlights case-insensitive matches of `filter` inside `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();

    // Byte offsets only line up when lower-casing kept the length
    if filter_lower.is_empty()
        || text_lower.len() != text.len()
        || !text_lower.contains(&filter_lower)
    {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;
        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }
        let match_end = actual_pos + filter_lower.len();
        parts.push(view! { <mark class="search-match">{text[actual_pos..match_end].to_string()}</mark> }.into_any());
        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new term once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let ticket = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        ticket.update_value(|t| *t += 1);
        let mine = ticket.get_value();
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            // A newer keystroke supersedes this one
            if ticket.try_get_value() == Some(mine) {
                on_change.run(new_value);
            }
        });
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        ticket.update_value(|t| *t += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                placeholder=placeholder
                class=move || if is_filter_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Limpiar">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: Option<&str>, field: &str, ascending: bool) -> &'static str {
    if current_field == Some(field) {
        if ascending { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator(Some("nombre"), "nombre", true), " ▲");
        assert_eq!(get_sort_indicator(Some("nombre"), "nombre", false), " ▼");
        assert_eq!(get_sort_indicator(Some("id"), "nombre", true), " ⇅");
        assert_eq!(get_sort_indicator(None, "nombre", true), " ⇅");
    }
}
