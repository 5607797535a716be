use dioxus::prelude::*;

use crate::view::layout::Layout;

#[component]
pub fn HomePage(username: Option<String>) -> Element {
    let logged_in = username.is_some();

    rsx!(Layout {
        title: "Home",
        username,
        div {
            class: "hero bg-base-200 rounded-box py-12",
            div {
                class: "hero-content text-center flex flex-col gap-4",
                h1 { class: "text-4xl font-bold", "Welcome messages and invite logs" }
                p {
                    "Greet new members with a custom embed and keep track of every invite \
                     created in your server."
                }
                if logged_in {
                    a { href: "/dashboard", class: "btn btn-primary", "Open dashboard" }
                } else {
                    a { href: "/login", class: "btn btn-primary", "Login with Discord" }
                }
            }
        }
    })
}
