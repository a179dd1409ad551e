pub mod app;
pub mod cake;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod errors;
pub mod fireworks;
pub mod handlers;
pub mod hug;
pub mod models;
pub mod runtime;
pub mod scene;
pub mod state;
pub mod theme;
pub mod ui;
pub mod widget;

pub use app::router;
pub use config::Config;
pub use state::AppState;
