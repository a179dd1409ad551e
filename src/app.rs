use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/hug", post(handlers::send_hug))
        .route("/api/fireworks", post(handlers::spawn_firework))
        .route("/api/cake/open", post(handlers::open_cake))
        .route("/api/cake/close", post(handlers::close_cake))
        .route("/api/cake/layers", post(handlers::adjust_layers))
        .route("/api/cake/candles", post(handlers::adjust_candles))
        .route("/api/cake/flavor", post(handlers::set_flavor))
        .route("/api/cake/frosting", post(handlers::set_frosting))
        .route("/api/cake/decorations/toggle", post(handlers::toggle_decoration))
        .route("/api/cake/build", post(handlers::build_cake))
        .with_state(state)
}
