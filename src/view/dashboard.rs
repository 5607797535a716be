use dioxus::prelude::*;

use crate::{
    model::discord::{GuildSummary, UserGuild},
    view::{component::GuildHeader, layout::Layout},
};

/// The guild picked on the dashboard, with what the bot knows about it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedGuild {
    pub guild: UserGuild,
    /// `None` when the bot has not joined the guild.
    pub bot_guild: Option<GuildSummary>,
}

#[component]
pub fn DashboardPage(
    username: String,
    guilds: Vec<UserGuild>,
    selected: Option<SelectedGuild>,
    flash: Option<String>,
) -> Element {
    let selected_id = selected
        .as_ref()
        .map(|selected| selected.guild.id.clone())
        .unwrap_or_default();

    rsx!(Layout {
        title: "Dashboard",
        username: Some(username),
        flash,
        h1 { class: "text-3xl font-bold", "Your servers" }
        if guilds.is_empty() {
            p { "You do not manage any servers. You need to own a server or have the Manage Server permission in it." }
        } else {
            form {
                method: "post",
                action: "/dashboard",
                class: "flex gap-2",
                select {
                    name: "guildId",
                    class: "select select-bordered grow",
                    option { value: "", disabled: true, selected: selected_id.is_empty(), "Choose a server" }
                    for guild in guilds {
                        option {
                            value: "{guild.id}",
                            selected: guild.id == selected_id,
                            "{guild.name}"
                        }
                    }
                }
                button { r#type: "submit", class: "btn btn-primary", "Select" }
            }
        }
        if let Some(selected) = selected {
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body flex flex-col gap-4",
                    GuildHeader { guild: selected.guild.clone() }
                    if let Some(bot_guild) = selected.bot_guild {
                        p { "Herald is active in {bot_guild.name}." }
                    } else {
                        p {
                            class: "text-warning",
                            "Herald is not in this server yet. Settings can be saved, but nothing is sent until the bot is invited."
                        }
                    }
                }
            }
        }
    })
}
