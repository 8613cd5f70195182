//! Play strategies: how a card is chosen each round.
//!
//! Strategies are trait-based so new ones can be plugged into the driver:
//! - `PlayStrategy`: one required operation, `play_round`
//! - `RandomStrategy`: uniform random choice without replacement
//! - `StrategyKind`: the selector parsed from the command line, itself a
//!   strategy that dispatches to the selected implementation

use std::str::FromStr;

use super::solo::SoloState;
use crate::core::{Error, GameRng, Result};

/// Plays one round of a solo game.
///
/// Must append exactly one main card to the field. When bonus cards are in
/// use it must also gain one bonus card after every ascending play, or the
/// final field will fail validation.
pub trait PlayStrategy {
    /// Short name used in logs and reports.
    fn name(&self) -> &'static str;

    fn play_round(&mut self, state: &mut SoloState, rng: &mut GameRng) -> Result<()>;
}

/// Plays a uniformly random main card, and gains a uniformly random bonus
/// card after each ascending play.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl PlayStrategy for RandomStrategy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn play_round(&mut self, state: &mut SoloState, rng: &mut GameRng) -> Result<()> {
        let card = state.draw_random_main(rng)?;
        state.field_mut().play_main(card);

        if state.use_bonus_cards() && state.field().last_play_ascends() {
            let bonus = state.draw_random_bonus(rng)?;
            state.field_mut().gain_bonus(bonus);
        }
        Ok(())
    }
}

/// Strategy selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StrategyKind {
    #[default]
    Random,
}

impl StrategyKind {
    /// Every selectable strategy.
    pub const ALL: [StrategyKind; 1] = [StrategyKind::Random];
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| Error::UnknownStrategy(s.to_string()))
    }
}

impl PlayStrategy for StrategyKind {
    fn name(&self) -> &'static str {
        match self {
            StrategyKind::Random => RandomStrategy.name(),
        }
    }

    fn play_round(&mut self, state: &mut SoloState, rng: &mut GameRng) -> Result<()> {
        match self {
            StrategyKind::Random => RandomStrategy.play_round(state, rng),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!("random".parse::<StrategyKind>().unwrap(), StrategyKind::Random);
        assert_eq!(" Random ".parse::<StrategyKind>().unwrap(), StrategyKind::Random);
    }

    #[test]
    fn test_unknown_strategy() {
        match "greedy".parse::<StrategyKind>() {
            Err(Error::UnknownStrategy(name)) => assert_eq!(name, "greedy"),
            other => panic!("expected UnknownStrategy, got {:?}", other),
        }
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }
}
