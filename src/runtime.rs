use crate::fireworks::FireworkId;
use crate::hug::HugTicket;
use crate::widget::Widget;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, MissedTickBehavior};
use tracing::debug;

pub type SharedWidget = Arc<Mutex<Widget>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickIntervals {
    pub countdown: Duration,
    pub theme: Duration,
}

impl Default for TickIntervals {
    fn default() -> Self {
        Self {
            countdown: Duration::from_secs(1),
            theme: Duration::from_secs(60),
        }
    }
}

/// Owns the recurring countdown and theme timers. Both are aborted together
/// on `shutdown` or drop.
#[derive(Debug)]
pub struct WidgetRuntime {
    tasks: Vec<JoinHandle<()>>,
}

impl WidgetRuntime {
    pub fn start(widget: &SharedWidget, intervals: TickIntervals) -> Self {
        let countdown = spawn_ticker(widget, intervals.countdown, Widget::tick);
        let theme = spawn_ticker(widget, intervals.theme, Widget::refresh_theme);
        Self {
            tasks: vec![countdown, theme],
        }
    }

    pub fn is_running(&self) -> bool {
        self.tasks.iter().any(|task| !task.is_finished())
    }

    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for WidgetRuntime {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
        debug!("widget timers cancelled");
    }
}

fn spawn_ticker(widget: &SharedWidget, period: Duration, step: fn(&mut Widget)) -> JoinHandle<()> {
    let widget = Arc::downgrade(widget);
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::spawn(async move {
        // The widget ticks once on construction.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let Some(widget) = widget.upgrade() else {
                break;
            };
            step(&mut *widget.lock().await);
        }
    })
}

/// Ends the hug animation after `delay`, unless a newer hug took over.
pub fn schedule_hug_release(widget: &SharedWidget, ticket: HugTicket, delay: Duration) {
    let widget = Arc::downgrade(widget);
    let timer = sleep(delay);
    tokio::spawn(async move {
        timer.await;
        with_widget(&widget, |widget| {
            widget.release_hug(ticket);
        })
        .await;
    });
}

/// Removes the firework after `delay`; a no-op if it is already gone.
pub fn schedule_firework_expiry(widget: &SharedWidget, id: FireworkId, delay: Duration) {
    let widget = Arc::downgrade(widget);
    let timer = sleep(delay);
    tokio::spawn(async move {
        timer.await;
        with_widget(&widget, |widget| {
            widget.expire_firework(id);
        })
        .await;
    });
}

async fn with_widget(widget: &Weak<Mutex<Widget>>, f: impl FnOnce(&mut Widget)) {
    if let Some(widget) = widget.upgrade() {
        f(&mut *widget.lock().await);
    }
}
