use crate::countdown::Birthday;
use crate::runtime::TickIntervals;
use std::{env, fmt, time::Duration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub birthday: Birthday,
    pub seed: Option<u64>,
    pub intervals: TickIntervals,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            birthday: Birthday::DEFAULT,
            seed: None,
            intervals: TickIntervals::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub var: &'static str,
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.var, self.message)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        // Same fallback as before: an unusable PORT means the default port.
        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let birthday = match lookup("BIRTHDAY") {
            Some(value) => value.parse::<Birthday>().map_err(|message| ConfigError {
                var: "BIRTHDAY",
                message,
            })?,
            None => defaults.birthday,
        };

        let seed = lookup("WIDGET_SEED")
            .map(|value| parse_number("WIDGET_SEED", &value))
            .transpose()?;

        let countdown = millis_or("TICK_MS", &lookup, defaults.intervals.countdown)?;
        let theme = millis_or("THEME_TICK_MS", &lookup, defaults.intervals.theme)?;

        Ok(Self {
            port,
            birthday,
            seed,
            intervals: TickIntervals { countdown, theme },
        })
    }
}

fn parse_number(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse::<u64>().map_err(|err| ConfigError {
        var,
        message: format!("'{value}' is not a number: {err}"),
    })
}

fn millis_or(
    var: &'static str,
    lookup: &impl Fn(&str) -> Option<String>,
    default: Duration,
) -> Result<Duration, ConfigError> {
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    match parse_number(var, &value)? {
        0 => Err(ConfigError {
            var,
            message: "interval must be greater than zero".to_string(),
        }),
        ms => Ok(Duration::from_millis(ms)),
    }
}
