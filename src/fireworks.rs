use rand::{Rng, RngCore};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

pub const FIREWORK_LIFETIME: Duration = Duration::from_secs(2);

/// Spawn time plus a random disambiguator, so two fireworks created in the
/// same millisecond stay distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FireworkId {
    pub timestamp_ms: i64,
    pub nonce: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Firework {
    pub id: FireworkId,
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FireworkError {
    NonFiniteCoordinate { x: f64, y: f64 },
}

impl fmt::Display for FireworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FireworkError::NonFiniteCoordinate { x, y } => {
                write!(f, "firework coordinates must be finite, got ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for FireworkError {}

/// Live fireworks in spawn order.
#[derive(Debug, Clone, Default)]
pub struct FireworkSet {
    entries: Vec<Firework>,
}

impl FireworkSet {
    pub fn spawn(
        &mut self,
        x: f64,
        y: f64,
        timestamp_ms: i64,
        rng: &mut dyn RngCore,
    ) -> Result<Firework, FireworkError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(FireworkError::NonFiniteCoordinate { x, y });
        }

        let id = loop {
            let candidate = FireworkId {
                timestamp_ms,
                nonce: rng.random(),
            };
            if !self.contains(candidate) {
                break candidate;
            }
        };

        let firework = Firework {
            id,
            x,
            y,
            timestamp_ms,
        };
        self.entries.push(firework.clone());
        Ok(firework)
    }

    /// Removes exactly the firework with `id`. Missing ids are a no-op.
    pub fn remove(&mut self, id: FireworkId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|firework| firework.id != id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: FireworkId) -> bool {
        self.entries.iter().any(|firework| firework.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Firework] {
        &self.entries
    }
}
