use crate::cake::{CakeBuilder, CakeError};
use crate::errors::AppError;
use crate::fireworks::{Firework, FIREWORK_LIFETIME};
use crate::hug::{HugState, HUG_DURATION};
use crate::models::{
    AdjustRequest, CakeBuilderView, Decoration, DecorationRequest, FireworkRequest, Flavor,
    FlavorRequest, Frosting, FrostingRequest, WidgetSnapshot,
};
use crate::runtime::{schedule_firework_expiry, schedule_hug_release};
use crate::state::AppState;
use crate::ui::render_index;
use axum::{extract::State, response::Html, Json};
use tracing::info;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let widget = state.widget.lock().await;
    Html(render_index(&widget.snapshot()))
}

pub async fn get_state(State(state): State<AppState>) -> Json<WidgetSnapshot> {
    let widget = state.widget.lock().await;
    Json(widget.snapshot())
}

pub async fn send_hug(State(state): State<AppState>) -> Json<HugState> {
    let mut widget = state.widget.lock().await;
    let ticket = widget.send_hug();
    schedule_hug_release(&state.widget, ticket, HUG_DURATION);
    Json(widget.hug().clone())
}

pub async fn spawn_firework(
    State(state): State<AppState>,
    Json(payload): Json<FireworkRequest>,
) -> Result<Json<Firework>, AppError> {
    let mut widget = state.widget.lock().await;
    let firework = widget.spawn_firework(payload.x, payload.y)?;
    schedule_firework_expiry(&state.widget, firework.id, FIREWORK_LIFETIME);
    Ok(Json(firework))
}

pub async fn open_cake(State(state): State<AppState>) -> Json<CakeBuilderView> {
    let mut widget = state.widget.lock().await;
    widget.cake_mut().open();
    Json(widget.cake().view())
}

pub async fn close_cake(State(state): State<AppState>) -> Json<CakeBuilderView> {
    let mut widget = state.widget.lock().await;
    widget.cake_mut().close();
    Json(widget.cake().view())
}

pub async fn adjust_layers(
    State(state): State<AppState>,
    Json(payload): Json<AdjustRequest>,
) -> Result<Json<CakeBuilderView>, AppError> {
    edit_cake(&state, |cake| cake.adjust_layers(payload.delta).map(drop)).await
}

pub async fn adjust_candles(
    State(state): State<AppState>,
    Json(payload): Json<AdjustRequest>,
) -> Result<Json<CakeBuilderView>, AppError> {
    edit_cake(&state, |cake| cake.adjust_candles(payload.delta).map(drop)).await
}

pub async fn set_flavor(
    State(state): State<AppState>,
    Json(payload): Json<FlavorRequest>,
) -> Result<Json<CakeBuilderView>, AppError> {
    let flavor: Flavor = payload.flavor.parse()?;
    edit_cake(&state, |cake| cake.set_flavor(flavor)).await
}

pub async fn set_frosting(
    State(state): State<AppState>,
    Json(payload): Json<FrostingRequest>,
) -> Result<Json<CakeBuilderView>, AppError> {
    let frosting: Frosting = payload.frosting.parse()?;
    edit_cake(&state, |cake| cake.set_frosting(frosting)).await
}

pub async fn toggle_decoration(
    State(state): State<AppState>,
    Json(payload): Json<DecorationRequest>,
) -> Result<Json<CakeBuilderView>, AppError> {
    let decoration: Decoration = payload.decoration.parse()?;
    edit_cake(&state, |cake| cake.toggle_decoration(decoration).map(drop)).await
}

pub async fn build_cake(State(state): State<AppState>) -> Result<Json<CakeBuilderView>, AppError> {
    edit_cake(&state, |cake| {
        let built = cake.build()?;
        info!(
            layers = built.layers,
            flavor = %built.flavor.label(),
            candles = built.candles,
            "cake built"
        );
        Ok(())
    })
    .await
}

async fn edit_cake<F>(state: &AppState, edit: F) -> Result<Json<CakeBuilderView>, AppError>
where
    F: FnOnce(&mut CakeBuilder) -> Result<(), CakeError>,
{
    let mut widget = state.widget.lock().await;
    edit(widget.cake_mut())?;
    Ok(Json(widget.cake().view()))
}
