use serde::Serialize;
use std::fmt;

use super::dice::Dice;
use super::globals::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
/// The purchasing policy of a player, fixed for the player's lifetime.
pub enum Strategy {
    /// Buys every property it lands on.
    Impulsive,
    /// Only buys properties with a rent above `DEMANDING_MIN_RENT`.
    Demanding,
    /// Only buys if at least `CAUTIOUS_RESERVE` is left after the purchase.
    Cautious,
    /// Buys half of the time.
    Random,
}

impl Strategy {
    /// Every strategy, in the order players are seated on a new board.
    pub const ALL: [Strategy; 4] = [
        Strategy::Impulsive,
        Strategy::Demanding,
        Strategy::Cautious,
        Strategy::Random,
    ];

    /// Decide whether to buy `property` while holding `balance`.
    ///
    /// Owned properties are never bought. The random strategy flips a
    /// coin only for unowned properties.
    pub fn decide_buy<D: Dice + ?Sized>(
        self,
        property: &Property,
        balance: i64,
        dice: &mut D,
    ) -> bool {
        if property.has_owner() {
            return false;
        }

        match self {
            Strategy::Impulsive => true,
            Strategy::Demanding => property.rent() > DEMANDING_MIN_RENT,
            Strategy::Cautious => balance - property.price() >= CAUTIOUS_RESERVE,
            Strategy::Random => dice.coin(),
        }
    }

    /// Return the name used to label the strategy in reports.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Impulsive => "Impulsive",
            Strategy::Demanding => "Demanding",
            Strategy::Cautious => "Cautious",
            Strategy::Random => "Random",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
