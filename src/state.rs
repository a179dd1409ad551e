use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::runtime::{SharedWidget, WidgetRuntime};
use crate::widget::Widget;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub widget: SharedWidget,
    // Timers stop once the last clone of the state is dropped.
    _runtime: Arc<WidgetRuntime>,
}

impl AppState {
    /// Builds the widget on the system clock and starts its timers. Must be
    /// called from inside a tokio runtime.
    pub fn start(config: &Config) -> Self {
        let rng: Box<dyn RngCore + Send> = match config.seed {
            Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
            None => Box::new(StdRng::from_os_rng()),
        };
        Self::with_clock(config, Arc::new(SystemClock), rng)
    }

    pub fn with_clock(
        config: &Config,
        clock: Arc<dyn Clock>,
        rng: Box<dyn RngCore + Send>,
    ) -> Self {
        let widget = Arc::new(Mutex::new(Widget::new(config.birthday, clock, rng)));
        let runtime = WidgetRuntime::start(&widget, config.intervals);
        info!(birthday = %config.birthday, "widget started");
        Self {
            widget,
            _runtime: Arc::new(runtime),
        }
    }
}
