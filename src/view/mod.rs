//! Server-rendered HTML pages.
//!
//! Pages are dioxus components rendered to a string with `dioxus-ssr`; there is no
//! client-side runtime. Every value interpolated into `rsx!` is escaped by the
//! renderer.

use axum::response::Html;
use dioxus::{dioxus_core::ComponentFunction, prelude::*};

pub mod component;
pub mod dashboard;
pub mod error;
pub mod home;
pub mod invite_logs;
pub mod layout;
pub mod welcome;

/// Renders a page component with its props into a complete HTML document.
pub fn render<P: Clone + 'static, M: 'static>(
    page: impl ComponentFunction<P, M>,
    props: P,
) -> Html<String> {
    let mut dom = VirtualDom::new_with_props(page, props);
    dom.rebuild_in_place();

    Html(format!("<!DOCTYPE html>{}", dioxus_ssr::render(&dom)))
}
