use log::trace;
use std::collections::HashSet;
use std::fmt;

use super::error::GameError;
use super::globals::*;
use super::strategy::Strategy;

#[derive(Clone, Debug)]
/// A player seated at the board.
///
/// The same player takes part in every match played on a board. Its
/// strategy never changes, but everything else is reset by
/// `reset_for_new_game()` at the start of each match.
pub struct Player {
    /// The player's seat in the board's roster.
    id: PlayerId,
    /// The player's purchasing policy.
    strategy: Strategy,
    /// The amount of money the player has. Going below zero eliminates the player.
    pub(crate) balance: i64,
    /// The player's position around the board. The start tile is at 0
    /// and the last property is at the board's property count.
    pub(crate) position: usize,
    /// The properties this player bought during the current match.
    pub(crate) holdings: HashSet<PropertyId>,
    /// How the current match is going for this player.
    pub(crate) outcome: Outcome,
}

impl Player {
    /*********        INITIALISATION INTERFACES        *********/

    /// Return a new player. Call `reset_for_new_game()` before playing a match.
    pub fn new(id: PlayerId, strategy: Strategy) -> Player {
        Player {
            id,
            strategy,
            balance: 0,
            position: 0,
            holdings: HashSet::new(),
            outcome: Outcome::InProgress,
        }
    }

    /// Get the player ready for a new match on a board with `property_count` properties.
    pub fn reset_for_new_game(&mut self, property_count: usize) -> Result<&mut Self, GameError> {
        if property_count == 0 {
            return Err(GameError::configuration(
                "cannot start: no properties configured",
            ));
        }

        self.balance = STARTING_BALANCE;
        self.position = 0;
        self.holdings.clear();
        self.outcome = Outcome::InProgress;

        Ok(self)
    }

    /*********        GETTERS        *********/

    /// Return the player's seat in the roster.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Return the player's purchasing policy.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Return the amount of money the player has.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Return the player's position around the board.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Return the properties the player owns.
    pub fn holdings(&self) -> &HashSet<PropertyId> {
        &self.holdings
    }

    /// Return whether the player owns `property`.
    pub fn owns(&self, property: PropertyId) -> bool {
        self.holdings.contains(&property)
    }

    /// Return how the match is going for the player.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Return whether the player is still in the match.
    pub fn is_active(&self) -> bool {
        self.outcome == Outcome::InProgress
    }

    /// Return whether the player won the match.
    pub fn has_won(&self) -> bool {
        self.outcome == Outcome::Won
    }

    /// Return whether the player went bankrupt.
    pub fn has_lost(&self) -> bool {
        self.outcome == Outcome::Lost
    }

    /// Capture the parts of the player that make it into a match result.
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            balance: self.balance,
            lost: self.has_lost(),
            won: self.has_won(),
            strategy: self.strategy,
        }
    }

    /*********        TRANSACTIONS        *********/

    /// Add `amount` to the player's balance.
    pub fn credit(&mut self, amount: i64) {
        self.balance += amount;
    }

    /// Take `amount` from the player's balance. If that leaves the player
    /// in debt they lose the match straight away.
    pub fn debit(&mut self, amount: i64, properties: &mut [Property]) {
        self.balance -= amount;

        if self.balance < 0 {
            self.declare_loss(properties);
        }
    }

    /// Record that `property` now belongs to this player.
    pub(crate) fn take_ownership(&mut self, id: PropertyId, properties: &mut [Property]) {
        properties[id.0].owner = Some(self.id);
        self.holdings.insert(id);
    }

    /*********        OUTCOMES        *********/

    /// Mark the player as the winner of the match.
    pub fn declare_win(&mut self) -> Result<(), GameError> {
        if self.has_lost() {
            return Err(GameError::invalid_state(
                "cannot win: no longer in the game",
            ));
        }

        trace!("{} wins with ${}", self.strategy, self.balance);
        self.outcome = Outcome::Won;

        Ok(())
    }

    /// Mark the player as out of the match and put every property
    /// they still own back on the market.
    pub fn declare_loss(&mut self, properties: &mut [Property]) {
        trace!("{} is eliminated with ${}", self.strategy, self.balance);
        self.outcome = Outcome::Lost;

        let me = self.id;
        for id in self.holdings.drain() {
            let property = &mut properties[id.0];

            // Only release it if nobody else took it over in the meantime
            if property.owner == Some(me) {
                property.owner = None;
            }
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = match self.outcome {
            Outcome::InProgress => "playing",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        };

        write!(
            f,
            "[{:02}] {} ${} ({} properties, {})",
            self.position,
            self.strategy,
            self.balance,
            self.holdings.len(),
            outcome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn properties(count: usize) -> Vec<Property> {
        (0..count).map(|_| Property::new(100, 20).unwrap()).collect()
    }

    #[test]
    fn reset_needs_properties() {
        let mut player = Player::new(PlayerId(0), Strategy::Impulsive);

        assert_matches!(
            player.reset_for_new_game(0),
            Err(GameError::Configuration(message)) if message.contains("no properties")
        );
    }

    #[test]
    fn reset_restores_a_fresh_player() {
        let mut board = properties(3);
        let mut player = Player::new(PlayerId(1), Strategy::Cautious);
        player.reset_for_new_game(3).unwrap();
        player.take_ownership(PropertyId(2), &mut board);
        player.position = 2;
        player.debit(400, &mut board);
        assert!(player.has_lost());

        let player = player.reset_for_new_game(3).unwrap();

        assert_eq!(player.balance(), STARTING_BALANCE);
        assert_eq!(player.position(), 0);
        assert!(player.holdings().is_empty());
        assert!(player.is_active());
        assert_eq!(player.strategy(), Strategy::Cautious);
    }

    #[test]
    fn going_into_debt_releases_properties() {
        let mut board = properties(4);
        let mut player = Player::new(PlayerId(0), Strategy::Impulsive);
        player.reset_for_new_game(4).unwrap();
        player.take_ownership(PropertyId(0), &mut board);
        player.take_ownership(PropertyId(3), &mut board);

        player.debit(STARTING_BALANCE, &mut board);
        assert!(player.is_active());

        player.debit(1, &mut board);
        assert!(player.has_lost());
        assert_eq!(player.balance(), -1);
        assert!(board.iter().all(|p| !p.has_owner()));
        assert!(player.holdings().is_empty());
    }

    #[test]
    fn loss_leaves_other_owners_alone() {
        let mut board = properties(2);
        let mut player = Player::new(PlayerId(0), Strategy::Impulsive);
        player.reset_for_new_game(2).unwrap();
        player.take_ownership(PropertyId(1), &mut board);
        board[1].owner = Some(PlayerId(3));

        player.declare_loss(&mut board);

        assert_eq!(board[1].owner(), Some(PlayerId(3)));
    }

    #[test]
    fn a_lost_player_cannot_win() {
        let mut board = properties(1);
        let mut player = Player::new(PlayerId(0), Strategy::Random);
        player.reset_for_new_game(1).unwrap();
        player.declare_loss(&mut board);

        assert_matches!(player.declare_win(), Err(GameError::InvalidState(_)));
        assert!(player.has_lost());
    }

    #[test]
    fn snapshot_reports_the_outcome() {
        let mut player = Player::new(PlayerId(2), Strategy::Demanding);
        player.reset_for_new_game(1).unwrap();
        player.declare_win().unwrap();

        let snapshot = player.snapshot();

        assert!(snapshot.won);
        assert!(!snapshot.lost);
        assert_eq!(snapshot.balance, STARTING_BALANCE);
        assert_eq!(snapshot.strategy, Strategy::Demanding);
    }
}
