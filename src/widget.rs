use crate::cake::CakeBuilder;
use crate::clock::Clock;
use crate::countdown::{read_countdown_at, Birthday};
use crate::fireworks::{Firework, FireworkError, FireworkId, FireworkSet};
use crate::hug::{HugState, HugTicket};
use crate::models::{Countdown, WidgetSnapshot};
use crate::scene::Scene;
use crate::theme::{select_kind, theme, ThemeKind};
use chrono::{NaiveDate, Timelike};
use rand::RngCore;
use std::sync::Arc;
use tracing::{debug, info};

/// All widget state, mutated only through its own methods.
pub struct Widget {
    birthday: Birthday,
    clock: Arc<dyn Clock>,
    rng: Box<dyn RngCore + Send>,
    countdown: Countdown,
    is_birthday: bool,
    target: NaiveDate,
    theme: ThemeKind,
    hug: HugState,
    cake: CakeBuilder,
    fireworks: FireworkSet,
    scene: Scene,
}

impl Widget {
    /// Builds the widget and runs the first countdown tick immediately.
    pub fn new(birthday: Birthday, clock: Arc<dyn Clock>, mut rng: Box<dyn RngCore + Send>) -> Self {
        let scene = Scene::generate(rng.as_mut());
        let now = clock.now();
        let mut widget = Self {
            birthday,
            clock,
            rng,
            countdown: Countdown::ZERO,
            is_birthday: false,
            target: birthday.next_on_or_after(now.date_naive()),
            theme: select_kind(now.hour(), false),
            hug: HugState::default(),
            cake: CakeBuilder::default(),
            fireworks: FireworkSet::default(),
            scene,
        };
        widget.tick();
        widget
    }

    /// Countdown tick: recompute the countdown and birthday flag, then the theme.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        let reading = read_countdown_at(&now, self.birthday);

        if reading.is_birthday != self.is_birthday {
            if reading.is_birthday {
                info!(date = %reading.target, "birthday reached");
            } else {
                info!(next = %reading.target, "birthday over, counting down to next year");
            }
        }

        self.countdown = reading.countdown;
        self.is_birthday = reading.is_birthday;
        self.target = reading.target;
        self.apply_theme(now.hour());
    }

    /// Theme tick: re-bucket the current hour without touching the countdown.
    pub fn refresh_theme(&mut self) {
        let hour = self.clock.now().hour();
        self.apply_theme(hour);
    }

    fn apply_theme(&mut self, hour: u32) {
        let kind = select_kind(hour, self.is_birthday);
        if kind != self.theme {
            debug!(from = ?self.theme, to = ?kind, "theme changed");
            self.theme = kind;
        }
    }

    pub fn send_hug(&mut self) -> HugTicket {
        let ticket = self.hug.send(self.rng.as_mut());
        info!(count = self.hug.count, "hug sent");
        ticket
    }

    pub fn release_hug(&mut self, ticket: HugTicket) -> bool {
        self.hug.release(ticket)
    }

    pub fn spawn_firework(&mut self, x: f64, y: f64) -> Result<Firework, FireworkError> {
        let timestamp_ms = self.clock.now().timestamp_millis();
        let firework = self.fireworks.spawn(x, y, timestamp_ms, self.rng.as_mut())?;
        debug!(x, y, live = self.fireworks.len(), "firework spawned");
        Ok(firework)
    }

    pub fn expire_firework(&mut self, id: FireworkId) -> bool {
        let removed = self.fireworks.remove(id);
        if removed {
            debug!(live = self.fireworks.len(), "firework expired");
        }
        removed
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    pub fn is_birthday(&self) -> bool {
        self.is_birthday
    }

    pub fn theme_kind(&self) -> ThemeKind {
        self.theme
    }

    pub fn hug(&self) -> &HugState {
        &self.hug
    }

    pub fn cake(&self) -> &CakeBuilder {
        &self.cake
    }

    pub fn cake_mut(&mut self) -> &mut CakeBuilder {
        &mut self.cake
    }

    pub fn fireworks(&self) -> &FireworkSet {
        &self.fireworks
    }

    pub fn snapshot(&self) -> WidgetSnapshot {
        WidgetSnapshot {
            now: self.clock.now().format("%Y-%m-%dT%H:%M:%S").to_string(),
            target_date: self.target.to_string(),
            countdown: self.countdown,
            is_birthday: self.is_birthday,
            theme: theme(self.theme),
            hug: self.hug.clone(),
            cake: self.cake.view(),
            fireworks: self.fireworks.as_slice().to_vec(),
            show_confetti: self.is_birthday,
            scene: self.scene.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::{Duration, Local, TimeZone};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn widget_at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> (Widget, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(
            Local.with_ymd_and_hms(y, m, d, h, min, s).unwrap(),
        ));
        let widget = Widget::new(
            Birthday::DEFAULT,
            clock.clone(),
            Box::new(StdRng::seed_from_u64(1)),
        );
        (widget, clock)
    }

    #[test]
    fn birthday_overrides_theme() {
        let (widget, _) = widget_at(2025, 10, 12, 0, 0, 1);
        assert!(widget.is_birthday());
        assert_eq!(widget.countdown(), Countdown::ZERO);
        assert_eq!(widget.theme_kind(), ThemeKind::Birthday);

        let snapshot = widget.snapshot();
        assert!(snapshot.show_confetti);
        assert_eq!(snapshot.theme.kind, ThemeKind::Birthday);
    }

    #[test]
    fn last_second_before_birthday() {
        let (widget, _) = widget_at(2025, 10, 11, 23, 59, 59);
        assert!(!widget.is_birthday());
        assert_eq!(widget.countdown().total_seconds(), 1);
        assert_eq!(widget.theme_kind(), ThemeKind::Night);
        assert!(!widget.snapshot().show_confetti);
    }

    #[test]
    fn flag_sets_at_rollover_and_clears_the_next_day() {
        let (mut widget, clock) = widget_at(2025, 10, 11, 23, 59, 59);
        clock.advance(Duration::seconds(1));
        widget.tick();
        assert!(widget.is_birthday());

        clock.set(Local.with_ymd_and_hms(2025, 10, 13, 0, 0, 0).unwrap());
        widget.tick();
        assert!(!widget.is_birthday());
        assert_eq!(widget.snapshot().target_date, "2026-10-12");
        assert_ne!(widget.theme_kind(), ThemeKind::Birthday);
    }

    #[test]
    fn theme_tick_follows_the_hour() {
        let (mut widget, clock) = widget_at(2025, 6, 1, 8, 59, 30);
        assert_eq!(widget.theme_kind(), ThemeKind::Dawn);
        clock.advance(Duration::seconds(45));
        widget.refresh_theme();
        assert_eq!(widget.theme_kind(), ThemeKind::Morning);
    }

    #[test]
    fn hug_counter_counts_every_call() {
        let (mut widget, _) = widget_at(2025, 6, 1, 12, 0, 0);
        let first = widget.send_hug();
        let second = widget.send_hug();
        assert_eq!(widget.hug().count, 2);
        assert!(!widget.release_hug(first));
        assert!(widget.release_hug(second));
        assert!(!widget.hug().active);
    }

    #[test]
    fn fireworks_carry_clock_timestamp() {
        let (mut widget, clock) = widget_at(2025, 6, 1, 12, 0, 0);
        let firework = widget.spawn_firework(120.0, 48.5).unwrap();
        assert_eq!(firework.timestamp_ms, clock.now().timestamp_millis());
        assert_eq!(widget.fireworks().len(), 1);
        assert!(widget.expire_firework(firework.id));
        assert!(widget.fireworks().is_empty());
    }
}
