use dioxus::prelude::*;

use crate::{
    model::discord::{ChannelSummary, UserGuild},
    view::{
        component::{ChannelSelect, GuildHeader},
        layout::Layout,
    },
};

#[component]
pub fn InviteLogsSettingsPage(
    username: String,
    guild: UserGuild,
    channels: Vec<ChannelSummary>,
    invite_logs_channel_id: String,
    flash: Option<String>,
) -> Element {
    let action = format!("/dashboard/{}/invite-logs", guild.id);

    rsx!(Layout {
        title: "Invite log settings",
        username: Some(username),
        flash,
        GuildHeader { guild }
        form {
            method: "post",
            action,
            class: "card bg-base-200",
            div {
                class: "card-body flex flex-col gap-4",
                h2 { class: "card-title", "Invite logs" }
                p { "Every new invite is posted to this channel with its creator, code, channel and expiry." }
                label {
                    class: "form-control",
                    span { class: "label-text", "Channel" }
                    ChannelSelect {
                        name: "inviteLogsChannelId",
                        channels,
                        selected: invite_logs_channel_id,
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
