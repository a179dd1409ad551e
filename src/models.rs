use crate::fireworks::Firework;
use crate::hug::HugState;
use crate::scene::Scene;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }
}

/// Returned by `FromStr` for the cake option enums.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.value)
    }
}

impl std::error::Error for UnknownOption {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    Chocolate,
    Vanilla,
    Strawberry,
    #[serde(rename = "red velvet")]
    RedVelvet,
    Lemon,
}

impl Flavor {
    pub const ALL: [Flavor; 5] = [
        Flavor::Chocolate,
        Flavor::Vanilla,
        Flavor::Strawberry,
        Flavor::RedVelvet,
        Flavor::Lemon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Flavor::Chocolate => "chocolate",
            Flavor::Vanilla => "vanilla",
            Flavor::Strawberry => "strawberry",
            Flavor::RedVelvet => "red velvet",
            Flavor::Lemon => "lemon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frosting {
    Vanilla,
    Chocolate,
    #[serde(rename = "cream cheese")]
    CreamCheese,
    Strawberry,
    Caramel,
}

impl Frosting {
    pub const ALL: [Frosting; 5] = [
        Frosting::Vanilla,
        Frosting::Chocolate,
        Frosting::CreamCheese,
        Frosting::Strawberry,
        Frosting::Caramel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Frosting::Vanilla => "vanilla",
            Frosting::Chocolate => "chocolate",
            Frosting::CreamCheese => "cream cheese",
            Frosting::Strawberry => "strawberry",
            Frosting::Caramel => "caramel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decoration {
    Sprinkles,
    Roses,
    Hearts,
    Stars,
    Cherries,
    Berries,
}

impl Decoration {
    pub const ALL: [Decoration; 6] = [
        Decoration::Sprinkles,
        Decoration::Roses,
        Decoration::Hearts,
        Decoration::Stars,
        Decoration::Cherries,
        Decoration::Berries,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Decoration::Sprinkles => "sprinkles",
            Decoration::Roses => "roses",
            Decoration::Hearts => "hearts",
            Decoration::Stars => "stars",
            Decoration::Cherries => "cherries",
            Decoration::Berries => "berries",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Decoration::Sprinkles => "🌈",
            Decoration::Roses => "🌹",
            Decoration::Hearts => "💖",
            Decoration::Stars => "⭐",
            Decoration::Cherries => "🍒",
            Decoration::Berries => "🫐",
        }
    }
}

fn parse_option<T: Copy>(
    kind: &'static str,
    options: &[T],
    label: impl Fn(&T) -> &'static str,
    value: &str,
) -> Result<T, UnknownOption> {
    let wanted = value.trim();
    options
        .iter()
        .copied()
        .find(|option| label(option).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| UnknownOption {
            kind,
            value: value.to_string(),
        })
}

impl FromStr for Flavor {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_option("flavor", &Flavor::ALL, Flavor::label, value)
    }
}

impl FromStr for Frosting {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_option("frosting", &Frosting::ALL, Frosting::label, value)
    }
}

impl FromStr for Decoration {
    type Err = UnknownOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_option("decoration", &Decoration::ALL, Decoration::label, value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CakeConfig {
    pub layers: u8,
    pub flavor: Flavor,
    pub frosting: Frosting,
    /// Insertion-ordered, never holds duplicates.
    pub decorations: Vec<Decoration>,
    pub candles: u8,
}

impl Default for CakeConfig {
    fn default() -> Self {
        Self {
            layers: 2,
            flavor: Flavor::Chocolate,
            frosting: Frosting::Vanilla,
            decorations: vec![Decoration::Sprinkles],
            candles: 1,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AdjustRequest {
    pub delta: i32,
}

#[derive(Debug, Deserialize)]
pub struct FlavorRequest {
    pub flavor: String,
}

#[derive(Debug, Deserialize)]
pub struct FrostingRequest {
    pub frosting: String,
}

#[derive(Debug, Deserialize)]
pub struct DecorationRequest {
    pub decoration: String,
}

#[derive(Debug, Deserialize)]
pub struct FireworkRequest {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CakeBuilderView {
    pub open: bool,
    pub draft: CakeConfig,
    pub built: Option<CakeConfig>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WidgetSnapshot {
    pub now: String,
    pub target_date: String,
    pub countdown: Countdown,
    pub is_birthday: bool,
    pub theme: &'static Theme,
    pub hug: HugState,
    pub cake: CakeBuilderView,
    pub fireworks: Vec<Firework>,
    pub show_confetti: bool,
    pub scene: Scene,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cake_options_parse_their_labels() {
        assert_eq!("red velvet".parse::<Flavor>(), Ok(Flavor::RedVelvet));
        assert_eq!(" Cream Cheese ".parse::<Frosting>(), Ok(Frosting::CreamCheese));
        assert_eq!("berries".parse::<Decoration>(), Ok(Decoration::Berries));

        let err = "fondant".parse::<Frosting>().unwrap_err();
        assert_eq!(err.to_string(), "unknown frosting: 'fondant'");
    }

    #[test]
    fn cake_options_serialize_as_labels() {
        let json = serde_json::to_string(&CakeConfig::default()).unwrap();
        assert!(json.contains("\"flavor\":\"chocolate\""));
        assert!(json.contains("\"decorations\":[\"sprinkles\"]"));

        let flavor: Flavor = serde_json::from_str("\"red velvet\"").unwrap();
        assert_eq!(flavor, Flavor::RedVelvet);
    }

    #[test]
    fn option_catalogs_have_expected_sizes() {
        assert_eq!(Flavor::ALL.len(), 5);
        assert_eq!(Frosting::ALL.len(), 5);
        assert_eq!(Decoration::ALL.len(), 6);
    }

    #[test]
    fn countdown_total_seconds() {
        let countdown = Countdown {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4,
        };
        assert_eq!(countdown.total_seconds(), 93_784);
        assert_eq!(Countdown::ZERO.total_seconds(), 0);
    }
}
