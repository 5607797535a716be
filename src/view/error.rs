use dioxus::prelude::*;

use crate::view::layout::Layout;

#[component]
pub fn ErrorPage(status: u16, message: String) -> Element {
    rsx!(Layout {
        title: "Error {status}",
        div {
            class: "flex flex-col items-center gap-4 py-12",
            h1 { class: "text-5xl font-bold", "{status}" }
            p { "{message}" }
            a { href: "/", class: "btn btn-outline", "Back to home" }
        }
    })
}
