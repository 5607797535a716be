use dioxus::prelude::*;

use crate::{
    model::discord::{ChannelSummary, UserGuild},
    view::{
        component::{ChannelSelect, GuildHeader},
        layout::Layout,
    },
};

#[component]
pub fn WelcomeSettingsPage(
    username: String,
    guild: UserGuild,
    channels: Vec<ChannelSummary>,
    welcome_message: String,
    welcome_channel_id: String,
    welcome_image_url: String,
    flash: Option<String>,
) -> Element {
    let action = format!("/dashboard/{}/welcome", guild.id);

    rsx!(Layout {
        title: "Welcome settings",
        username: Some(username),
        flash,
        GuildHeader { guild }
        form {
            method: "post",
            action,
            class: "card bg-base-200",
            div {
                class: "card-body flex flex-col gap-4",
                h2 { class: "card-title", "Welcome message" }
                label {
                    class: "form-control",
                    span { class: "label-text", "Message" }
                    textarea {
                        name: "welcomeMessage",
                        class: "textarea textarea-bordered h-32",
                        placeholder: "Welcome to the server, {{user}}!",
                        "{welcome_message}"
                    }
                    span {
                        class: "label-text-alt opacity-70",
                        "{{user}} is replaced with a mention of the new member."
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "Channel" }
                    ChannelSelect {
                        name: "welcomeChannelId",
                        channels,
                        selected: welcome_channel_id,
                    }
                }
                label {
                    class: "form-control",
                    span { class: "label-text", "Image URL" }
                    input {
                        r#type: "url",
                        name: "welcomeImageUrl",
                        class: "input input-bordered",
                        placeholder: "https://example.com/banner.png",
                        value: "{welcome_image_url}",
                    }
                }
                div {
                    class: "card-actions justify-end",
                    button { r#type: "submit", class: "btn btn-primary", "Save" }
                }
            }
        }
    })
}
