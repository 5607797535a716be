use dioxus::prelude::*;

pub const SITE_NAME: &str = "Herald";

/// Document shell with the header, an optional flash message and the page body.
#[component]
pub fn Layout(
    title: String,
    username: Option<String>,
    flash: Option<String>,
    children: Element,
) -> Element {
    rsx!(html {
        lang: "en",
        "data-theme": "dark",
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{title} | {SITE_NAME}" }
            link {
                rel: "stylesheet",
                href: "https://cdn.jsdelivr.net/npm/daisyui@4/dist/full.min.css",
            }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body {
            class: "min-h-screen bg-base-100",
            Header { username }
            main {
                class: "max-w-3xl mx-auto pt-28 px-4 pb-8 flex flex-col gap-6",
                if let Some(flash) = flash {
                    div {
                        role: "alert",
                        class: "alert",
                        span { "{flash}" }
                    }
                }
                {children}
            }
        }
    })
}

#[component]
fn Header(username: Option<String>) -> Element {
    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            a {
                href: "/",
                p {
                    class: "md:text-xl text-wrap",
                    {SITE_NAME}
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(username) = username {
                p { class: "opacity-70", "{username}" }
                a {
                    href: "/dashboard",
                    class: "btn btn-outline",
                    "Dashboard"
                }
                a {
                    href: "/logout",
                    class: "btn btn-outline",
                    "Logout"
                }
            } else {
                a {
                    href: "/login",
                    class: "btn btn-outline",
                    "Login"
                }
            }
        }
    })
}
