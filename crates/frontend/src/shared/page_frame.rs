//! PageFrame: root wrapper of every routed page.
//!
//! Puts `id="{entity}--{category}"` and `data-page-category` on the root
//! element so a page found in the DOM inspector leads back to its module.

use super::page_standard::{is_valid_page_id, PageCategory};
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a002_sindicato--detail"`
    page_id: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("page id '{}' does not follow entity--category", page_id);
    }

    view! {
        <div
            id=page_id
            class=category.root_class()
            data-page-category=category.as_str()
        >
            {children()}
        </div>
    }
}
