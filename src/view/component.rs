use dioxus::prelude::*;

use crate::model::discord::{ChannelSummary, UserGuild};

/// Channel picker listing the guild's text channels.
///
/// A stored channel that is no longer in the list stays selectable so saving the form
/// does not silently change it.
#[component]
pub fn ChannelSelect(name: String, channels: Vec<ChannelSummary>, selected: String) -> Element {
    let text_channels: Vec<ChannelSummary> = channels
        .into_iter()
        .filter(|channel| channel.text_based)
        .collect();
    let missing = !selected.is_empty()
        && !text_channels
            .iter()
            .any(|channel| channel.id.to_string() == selected);

    rsx!(select {
        name,
        class: "select select-bordered w-full",
        option { value: "", selected: selected.is_empty(), "None" }
        if missing {
            option { value: "{selected}", selected: true, "Unknown channel ({selected})" }
        }
        for channel in text_channels {
            option {
                value: "{channel.id}",
                selected: channel.id.to_string() == selected,
                "#{channel.name}"
            }
        }
    })
}

/// Guild title with navigation between the settings pages.
#[component]
pub fn GuildHeader(guild: UserGuild) -> Element {
    rsx!(div {
        class: "flex flex-col gap-3",
        div {
            class: "flex items-center gap-3",
            if let Some(icon_url) = guild.icon_url() {
                img { class: "w-12 h-12 rounded-full", src: "{icon_url}" }
            }
            h1 { class: "text-2xl font-bold", "{guild.name}" }
        }
        div {
            class: "flex gap-2",
            a { href: "/dashboard?guildId={guild.id}", class: "btn btn-sm", "Overview" }
            a { href: "/dashboard/{guild.id}/welcome", class: "btn btn-sm", "Welcome" }
            a { href: "/dashboard/{guild.id}/invite-logs", class: "btn btn-sm", "Invite logs" }
        }
    })
}
