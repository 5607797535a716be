use axum::{routing::get, Router};

use crate::{
    controller::{
        auth::{callback, home, login, logout},
        dashboard::{get_dashboard, post_dashboard},
        settings::{get_invite_logs, get_welcome, post_invite_logs, post_welcome},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/login", get(login))
        .route("/callback", get(callback))
        .route("/logout", get(logout))
        .route("/dashboard", get(get_dashboard).post(post_dashboard))
        .route(
            "/dashboard/{guild_id}/welcome",
            get(get_welcome).post(post_welcome),
        )
        .route(
            "/dashboard/{guild_id}/invite-logs",
            get(get_invite_logs).post(post_invite_logs),
        )
}
