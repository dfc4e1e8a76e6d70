pub mod clan;
pub mod health;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/clans/", get(clan::list_clans).post(clan::create_clan))
        // same handlers without the trailing slash
        .route("/clans", get(clan::list_clans).post(clan::create_clan))
        .route(
            "/clans/search",
            get(clan::search_clans).delete(clan::delete_search),
        )
        .route("/clans/{clan_id}", delete(clan::delete_clan))
}
