use rand::{Rng, RngCore};
use serde::Serialize;
use std::time::Duration;

pub const HUG_DURATION: Duration = Duration::from_secs(2);

pub const HUG_MESSAGES: [&str; 8] = [
    "Sending you the biggest virtual hug! 🤗💕",
    "You're amazing and loved! Here's a warm hug 🫂✨",
    "Distance means nothing when hearts are connected 💝🤗",
    "A virtual hug filled with all my love for you! 🥰💖",
    "Wrapping you in warmth and happiness! 🌟🤗",
    "You deserve all the hugs in the world! 💕🫂",
    "Sending positive vibes and the coziest hug! ☀️🤗",
    "Here's a hug that travels across any distance! 🌍💝",
];

/// Identifies one hug so that only the latest one can end the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HugTicket(u64);

#[derive(Debug, Clone, Default, Serialize)]
pub struct HugState {
    pub count: u64,
    pub message: Option<&'static str>,
    pub active: bool,
    #[serde(skip)]
    generation: u64,
}

impl HugState {
    /// Counts the hug and starts the animation. Every call counts, even while
    /// a previous hug is still animating.
    pub fn send(&mut self, rng: &mut dyn RngCore) -> HugTicket {
        self.count = self.count.saturating_add(1);
        self.message = Some(HUG_MESSAGES[rng.random_range(0..HUG_MESSAGES.len())]);
        self.active = true;
        self.generation = self.generation.wrapping_add(1);
        HugTicket(self.generation)
    }

    /// Ends the animation if `ticket` belongs to the most recent hug.
    pub fn release(&mut self, ticket: HugTicket) -> bool {
        if !self.active || ticket.0 != self.generation {
            return false;
        }
        self.active = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn send_counts_and_activates() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut hug = HugState::default();
        hug.send(&mut rng);
        assert_eq!(hug.count, 1);
        assert!(hug.active);
        let message = hug.message.expect("message picked");
        assert!(HUG_MESSAGES.contains(&message));
    }

    #[test]
    fn seeded_sources_pick_the_same_messages() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);
        let mut a = HugState::default();
        let mut b = HugState::default();
        for _ in 0..10 {
            a.send(&mut first);
            b.send(&mut second);
            assert_eq!(a.message, b.message);
        }
    }

    #[test]
    fn stale_ticket_does_not_end_newer_hug() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut hug = HugState::default();
        let first = hug.send(&mut rng);
        let second = hug.send(&mut rng);
        assert_eq!(hug.count, 2);

        assert!(!hug.release(first));
        assert!(hug.active);
        assert!(hug.release(second));
        assert!(!hug.active);
        assert!(!hug.release(second));
        assert_eq!(hug.count, 2);
    }
}
