use serde::Serialize;
use std::fmt;

use crate::game::error::GameError;
use crate::game::strategy::Strategy;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
/// The index of a player in the board's roster.
pub struct PlayerId(pub usize);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
/// The index of a property in the board's property list.
///
/// Property `i` sits on board position `i + 1`. Position 0 is the start tile.
pub struct PropertyId(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
/// A property tile on the board.
pub struct Property {
    /// The price of the property.
    price: i64,
    /// The amount paid by other players who land on the property.
    rent: i64,
    /// The player who currently owns this property, if any.
    pub(crate) owner: Option<PlayerId>,
}

impl Property {
    /// Create a new, unowned property. Both `price` and `rent` must be positive.
    pub fn new(price: i64, rent: i64) -> Result<Property, GameError> {
        if price <= 0 {
            return Err(GameError::configuration("sale price must be > 0"));
        }
        if rent <= 0 {
            return Err(GameError::configuration("rent must be > 0"));
        }

        Ok(Property {
            price,
            rent,
            owner: None,
        })
    }

    /// Return the sale price of the property.
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Return the rent charged to other players.
    pub fn rent(&self) -> i64 {
        self.rent
    }

    /// Return the player who owns the property, if any.
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Return whether anyone owns the property.
    pub fn has_owner(&self) -> bool {
        self.owner.is_some()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} (rent ${})", self.price, self.rent)?;

        match self.owner {
            Some(PlayerId(owner)) => write!(f, " owned by #{}", owner),
            None => Ok(()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// How a match went for a single player.
pub enum Outcome {
    /// The player is still in the match.
    InProgress,
    /// The player was the last one standing.
    Won,
    /// The player went bankrupt.
    Lost,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// The state of a player at the end of a match.
pub struct PlayerSnapshot {
    pub balance: i64,
    pub lost: bool,
    pub won: bool,
    #[serde(rename = "strategyName")]
    pub strategy: Strategy,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// The result of a finished match.
pub struct MatchResult {
    /// The number of rounds that were played.
    pub total_rounds: u32,
    /// Whether the match hit the round limit without a sole survivor.
    pub timed_out: bool,
    /// The sole survivor, or the richest player left when the match timed out.
    pub winner: PlayerSnapshot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn rejects_non_positive_price_and_rent() {
        assert_matches!(Property::new(0, 10), Err(GameError::Configuration(_)));
        assert_matches!(Property::new(-40, 10), Err(GameError::Configuration(_)));
        assert_matches!(Property::new(40, 0), Err(GameError::Configuration(_)));
        assert_matches!(Property::new(40, -1), Err(GameError::Configuration(_)));
    }

    #[test]
    fn new_property_is_unowned() {
        let property = Property::new(120, 30).unwrap();

        assert_eq!(property.price(), 120);
        assert_eq!(property.rent(), 30);
        assert!(!property.has_owner());
    }

    #[test]
    fn result_serializes_with_camel_case_keys() {
        let result = MatchResult {
            total_rounds: 12,
            timed_out: false,
            winner: PlayerSnapshot {
                balance: 420,
                lost: false,
                won: true,
                strategy: Strategy::Cautious,
            },
        };

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["totalRounds"], 12);
        assert_eq!(json["timedOut"], false);
        assert_eq!(json["winner"]["strategyName"], "Cautious");
        assert_eq!(json["winner"]["won"], true);
    }
}
