use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Dawn,
    Morning,
    Afternoon,
    Evening,
    Night,
    Birthday,
}

/// Display attributes for one theme. Colour values are CSS, ready to drop
/// into custom properties on the page.
#[derive(Debug, Serialize)]
pub struct Theme {
    pub kind: ThemeKind,
    pub name: &'static str,
    pub background: [&'static str; 3],
    pub card_bg: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub accent: [&'static str; 2],
    pub glow: &'static str,
    pub particles: &'static str,
}

pub static THEMES: [Theme; 6] = [
    Theme {
        kind: ThemeKind::Dawn,
        name: "Dawn Serenity",
        background: ["#4c1d95", "#86198f", "#e11d48"],
        card_bg: "rgba(255, 255, 255, 0.20)",
        text_primary: "#ffffff",
        text_secondary: "rgba(255, 255, 255, 0.90)",
        accent: ["#fb7185", "#8b5cf6"],
        glow: "rgba(217, 70, 239, 0.20)",
        particles: "rgba(251, 113, 133, 0.30)",
    },
    Theme {
        kind: ThemeKind::Morning,
        name: "Morning Bliss",
        background: ["#38bdf8", "#67e8f9", "#34d399"],
        card_bg: "rgba(255, 255, 255, 0.25)",
        text_primary: "#ffffff",
        text_secondary: "rgba(255, 255, 255, 0.95)",
        accent: ["#fbbf24", "#f97316"],
        glow: "rgba(34, 211, 238, 0.25)",
        particles: "rgba(252, 211, 77, 0.35)",
    },
    Theme {
        kind: ThemeKind::Afternoon,
        name: "Golden Hour",
        background: ["#f97316", "#fbbf24", "#facc15"],
        card_bg: "rgba(255, 255, 255, 0.30)",
        text_primary: "#ffffff",
        text_secondary: "rgba(255, 255, 255, 0.95)",
        accent: ["#ef4444", "#ec4899"],
        glow: "rgba(251, 191, 36, 0.30)",
        particles: "rgba(250, 204, 21, 0.40)",
    },
    Theme {
        kind: ThemeKind::Evening,
        name: "Sunset Dreams",
        background: ["#7e22ce", "#db2777", "#f97316"],
        card_bg: "rgba(255, 255, 255, 0.20)",
        text_primary: "#ffffff",
        text_secondary: "rgba(255, 255, 255, 0.90)",
        accent: ["#ec4899", "#a855f7"],
        glow: "rgba(236, 72, 153, 0.25)",
        particles: "rgba(192, 132, 252, 0.35)",
    },
    Theme {
        kind: ThemeKind::Night,
        name: "Midnight Magic",
        background: ["#0f172a", "#1e3a8a", "#3730a3"],
        card_bg: "rgba(255, 255, 255, 0.15)",
        text_primary: "#ffffff",
        text_secondary: "rgba(255, 255, 255, 0.85)",
        accent: ["#3b82f6", "#4f46e5"],
        glow: "rgba(59, 130, 246, 0.20)",
        particles: "rgba(96, 165, 250, 0.30)",
    },
    Theme {
        kind: ThemeKind::Birthday,
        name: "Birthday Celebration",
        background: ["#db2777", "#9333ea", "#4f46e5"],
        card_bg: "rgba(255, 255, 255, 0.25)",
        text_primary: "#ffffff",
        text_secondary: "rgba(255, 255, 255, 0.95)",
        accent: ["#eab308", "#db2777"],
        glow: "linear-gradient(90deg, rgba(236, 72, 153, 0.30), rgba(234, 179, 8, 0.30))",
        particles: "linear-gradient(90deg, #ec4899, #eab308)",
    },
];

pub fn theme(kind: ThemeKind) -> &'static Theme {
    let index = match kind {
        ThemeKind::Dawn => 0,
        ThemeKind::Morning => 1,
        ThemeKind::Afternoon => 2,
        ThemeKind::Evening => 3,
        ThemeKind::Night => 4,
        ThemeKind::Birthday => 5,
    };
    &THEMES[index]
}

/// Hour buckets: [5,9) dawn, [9,12) morning, [12,17) afternoon,
/// [17,21) evening, everything else night.
pub fn kind_for_hour(hour: u32) -> ThemeKind {
    match hour {
        5..=8 => ThemeKind::Dawn,
        9..=11 => ThemeKind::Morning,
        12..=16 => ThemeKind::Afternoon,
        17..=20 => ThemeKind::Evening,
        _ => ThemeKind::Night,
    }
}

pub fn select_kind(hour: u32, is_birthday: bool) -> ThemeKind {
    if is_birthday {
        ThemeKind::Birthday
    } else {
        kind_for_hour(hour)
    }
}
