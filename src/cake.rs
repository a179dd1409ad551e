use crate::models::{CakeBuilderView, CakeConfig, Decoration, Flavor, Frosting};
use std::fmt;
use std::ops::RangeInclusive;

pub const LAYER_RANGE: RangeInclusive<u8> = 1..=4;
pub const CANDLE_RANGE: RangeInclusive<u8> = 1..=10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CakeError {
    BuilderClosed,
}

impl fmt::Display for CakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CakeError::BuilderClosed => f.write_str("cake builder is closed"),
        }
    }
}

impl std::error::Error for CakeError {}

/// Draft/commit editor. The draft only changes while the builder is open;
/// `build` copies it into the displayed cake and closes the builder.
#[derive(Debug, Clone, Default)]
pub struct CakeBuilder {
    open: bool,
    draft: CakeConfig,
    built: Option<CakeConfig>,
}

impl CakeBuilder {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &CakeConfig {
        &self.draft
    }

    pub fn built(&self) -> Option<&CakeConfig> {
        self.built.as_ref()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hides the builder and keeps the draft for next time.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn adjust_layers(&mut self, delta: i32) -> Result<u8, CakeError> {
        let draft = self.editing()?;
        draft.layers = step_clamped(draft.layers, delta, &LAYER_RANGE);
        Ok(draft.layers)
    }

    pub fn adjust_candles(&mut self, delta: i32) -> Result<u8, CakeError> {
        let draft = self.editing()?;
        draft.candles = step_clamped(draft.candles, delta, &CANDLE_RANGE);
        Ok(draft.candles)
    }

    pub fn set_flavor(&mut self, flavor: Flavor) -> Result<(), CakeError> {
        self.editing()?.flavor = flavor;
        Ok(())
    }

    pub fn set_frosting(&mut self, frosting: Frosting) -> Result<(), CakeError> {
        self.editing()?.frosting = frosting;
        Ok(())
    }

    /// Returns whether the decoration is on the cake afterwards.
    pub fn toggle_decoration(&mut self, decoration: Decoration) -> Result<bool, CakeError> {
        let decorations = &mut self.editing()?.decorations;
        if let Some(index) = decorations.iter().position(|d| *d == decoration) {
            decorations.remove(index);
            Ok(false)
        } else {
            decorations.push(decoration);
            Ok(true)
        }
    }

    pub fn build(&mut self) -> Result<&CakeConfig, CakeError> {
        let snapshot = self.editing()?.clone();
        self.open = false;
        Ok(self.built.insert(snapshot))
    }

    pub fn view(&self) -> CakeBuilderView {
        CakeBuilderView {
            open: self.open,
            draft: self.draft.clone(),
            built: self.built.clone(),
        }
    }

    fn editing(&mut self) -> Result<&mut CakeConfig, CakeError> {
        if self.open {
            Ok(&mut self.draft)
        } else {
            Err(CakeError::BuilderClosed)
        }
    }
}

fn step_clamped(value: u8, delta: i32, range: &RangeInclusive<u8>) -> u8 {
    let stepped = i64::from(value) + i64::from(delta);
    stepped.clamp(i64::from(*range.start()), i64::from(*range.end())) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_builder() -> CakeBuilder {
        let mut builder = CakeBuilder::default();
        builder.open();
        builder
    }

    #[test]
    fn layers_never_drop_below_one() {
        let mut builder = open_builder();
        builder.adjust_layers(-1).unwrap();
        assert_eq!(builder.draft().layers, 1);
        for _ in 0..7 {
            builder.adjust_layers(-1).unwrap();
        }
        assert_eq!(builder.draft().layers, 1);
    }

    #[test]
    fn counters_stay_in_range() {
        let mut builder = open_builder();
        for _ in 0..20 {
            builder.adjust_layers(1).unwrap();
            builder.adjust_candles(1).unwrap();
        }
        assert_eq!(builder.draft().layers, 4);
        assert_eq!(builder.draft().candles, 10);

        assert_eq!(builder.adjust_candles(i32::MIN).unwrap(), 1);
        assert_eq!(builder.adjust_layers(i32::MAX).unwrap(), 4);
    }

    #[test]
    fn double_toggle_restores_decorations() {
        let mut builder = open_builder();
        let before = builder.draft().decorations.clone();

        assert!(builder.toggle_decoration(Decoration::Stars).unwrap());
        assert!(!builder.toggle_decoration(Decoration::Stars).unwrap());
        assert_eq!(builder.draft().decorations, before);

        assert!(!builder.toggle_decoration(Decoration::Sprinkles).unwrap());
        assert!(builder.toggle_decoration(Decoration::Sprinkles).unwrap());
        assert_eq!(builder.draft().decorations, before);
    }

    #[test]
    fn toggled_decorations_keep_insertion_order() {
        let mut builder = open_builder();
        builder.toggle_decoration(Decoration::Roses).unwrap();
        builder.toggle_decoration(Decoration::Berries).unwrap();
        assert_eq!(
            builder.draft().decorations,
            vec![Decoration::Sprinkles, Decoration::Roses, Decoration::Berries]
        );
    }

    #[test]
    fn build_snapshots_and_hides() {
        let mut builder = open_builder();
        builder.set_flavor(Flavor::Lemon).unwrap();
        builder.set_frosting(Frosting::Caramel).unwrap();
        let built = builder.build().unwrap().clone();

        assert!(!builder.is_open());
        assert_eq!(built.flavor, Flavor::Lemon);
        assert_eq!(builder.built(), Some(&built));

        builder.open();
        builder.set_flavor(Flavor::Vanilla).unwrap();
        assert_eq!(builder.built().unwrap().flavor, Flavor::Lemon);
    }

    #[test]
    fn closed_builder_rejects_edits() {
        let mut builder = CakeBuilder::default();
        assert_eq!(builder.adjust_layers(1), Err(CakeError::BuilderClosed));
        assert_eq!(
            builder.toggle_decoration(Decoration::Hearts),
            Err(CakeError::BuilderClosed)
        );
        assert!(builder.build().is_err());
        assert_eq!(builder.draft(), &CakeConfig::default());
    }

    #[test]
    fn close_keeps_draft() {
        let mut builder = open_builder();
        builder.adjust_candles(3).unwrap();
        builder.close();
        builder.open();
        assert_eq!(builder.draft().candles, 4);
        assert!(builder.built().is_none());
    }
}
