use rand::{Rng, RngCore};
use serde::Serialize;

const LARGE_BALLOON_COUNT: usize = 12;
const SMALL_BALLOON_COUNT: usize = 18;
const CONFETTI_COUNT: usize = 80;

const LARGE_COLORS: [&str; 12] = [
    "#f87171", "#60a5fa", "#facc15", "#4ade80", "#c084fc", "#f472b6", "#fb923c", "#22d3ee",
    "#34d399", "#a78bfa", "#fb7185", "#fbbf24",
];
const SMALL_COLORS: [&str; 10] = [
    "#fca5a5", "#93c5fd", "#fde047", "#86efac", "#d8b4fe", "#f9a8d4", "#fdba74", "#67e8f9",
    "#6ee7b7", "#c4b5fd",
];
const LARGE_EMOJI: [&str; 6] = ["🎉", "🎂", "🎈", "✨", "🎊", "🥳"];
const SMALL_EMOJI: [&str; 4] = ["🎈", "💫", "🌟", "💖"];
const BANNERS: [&str; 3] = [
    "🎂 Happy Birthday! 🎂",
    "🎉 Celebrate! 🎉",
    "🎈 Party Time! 🎈",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalloonKind {
    Large,
    Small,
    Banner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalloonShape {
    Round,
    Heart,
    Star,
}

#[derive(Debug, Clone, Serialize)]
pub struct Balloon {
    pub kind: BalloonKind,
    pub shape: BalloonShape,
    pub color: &'static str,
    pub size_px: f64,
    pub start_x_pct: f64,
    pub start_y_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
    pub label: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfettiParticle {
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

/// Decorative layout, rolled once per widget.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub balloons: Vec<Balloon>,
    pub confetti: Vec<ConfettiParticle>,
}

impl Scene {
    pub fn generate(rng: &mut dyn RngCore) -> Self {
        let mut balloons =
            Vec::with_capacity(LARGE_BALLOON_COUNT + SMALL_BALLOON_COUNT + BANNERS.len());

        for i in 0..LARGE_BALLOON_COUNT {
            let size_px = rng.random_range(60.0..100.0);
            let start_x_pct = rng.random_range(-10.0..110.0);
            let start_y_pct = rng.random_range(100.0..120.0);
            let duration_s = rng.random_range(20.0..35.0);
            let delay_s = rng.random_range(0.0..20.0);
            let shape = if rng.random_bool(0.2) {
                BalloonShape::Heart
            } else if rng.random_bool(0.15) {
                BalloonShape::Star
            } else {
                BalloonShape::Round
            };
            let label = if rng.random_bool(0.3) {
                Some(pick(rng, &LARGE_EMOJI))
            } else {
                None
            };
            balloons.push(Balloon {
                kind: BalloonKind::Large,
                shape,
                color: LARGE_COLORS[i % LARGE_COLORS.len()],
                size_px,
                start_x_pct,
                start_y_pct,
                duration_s,
                delay_s,
                label,
            });
        }

        for i in 0..SMALL_BALLOON_COUNT {
            let size_px = rng.random_range(30.0..50.0);
            let start_x_pct = rng.random_range(-10.0..110.0);
            let start_y_pct = rng.random_range(100.0..110.0);
            let duration_s = rng.random_range(25.0..45.0);
            let delay_s = rng.random_range(0.0..25.0);
            let label = if rng.random_bool(0.25) {
                Some(pick(rng, &SMALL_EMOJI))
            } else {
                None
            };
            balloons.push(Balloon {
                kind: BalloonKind::Small,
                shape: BalloonShape::Round,
                color: SMALL_COLORS[i % SMALL_COLORS.len()],
                size_px,
                start_x_pct,
                start_y_pct,
                duration_s,
                delay_s,
                label,
            });
        }

        for text in BANNERS {
            balloons.push(Balloon {
                kind: BalloonKind::Banner,
                shape: BalloonShape::Round,
                color: "#ffffff",
                size_px: 0.0,
                start_x_pct: rng.random_range(0.0..100.0),
                start_y_pct: rng.random_range(100.0..110.0),
                duration_s: rng.random_range(30.0..50.0),
                delay_s: rng.random_range(0.0..30.0),
                label: Some(text),
            });
        }

        let confetti = (0..CONFETTI_COUNT)
            .map(|_| ConfettiParticle {
                left_pct: rng.random_range(0.0..100.0),
                top_pct: rng.random_range(0.0..100.0),
                delay_s: rng.random_range(0.0..2.0),
                duration_s: rng.random_range(1.0..3.0),
            })
            .collect();

        Self { balloons, confetti }
    }
}

fn pick(rng: &mut dyn RngCore, options: &[&'static str]) -> &'static str {
    options[rng.random_range(0..options.len())]
}
