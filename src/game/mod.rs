mod globals;
pub use globals::*;

mod dice;
pub use dice::{Dice, RandomDice};

mod error;
pub use error::GameError;

mod player;
pub use player::Player;

mod strategy;
pub use strategy::Strategy;


use log::{debug, trace};
use rand::distributions::Distribution;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// The parts of a board that can be configured.
pub struct BoardConfig {
    /// The number of properties around the board.
    pub property_count: usize,
    /// The number of rounds after which a match times out.
    pub round_limit: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            property_count: DEFAULT_PROPERTY_COUNT,
            round_limit: DEFAULT_ROUND_LIMIT,
        }
    }
}

impl BoardConfig {
    /// Return an error if the board would have no properties or no rounds.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.property_count == 0 {
            return Err(GameError::configuration("property count must be > 0"));
        }
        if self.round_limit == 0 {
            return Err(GameError::configuration("round limit must be > 0"));
        }

        Ok(())
    }
}

/// The board that matches are played on.
///
/// A board owns its properties and its players and reuses both for every
/// match it runs. Property values are fixed when the board is built; only
/// ownership is reset between matches. Players keep their strategy but
/// have their balance, position, holdings and outcome reset.
///
/// Everything is mutated in place, so a board must not be shared between
/// threads running matches concurrently. Build one board per thread instead.
pub struct Board<D: Dice = RandomDice> {
    /// The properties around the board, in board order.
    properties: Vec<Property>,
    /// Every player seated at the board, one per strategy.
    players: Vec<Player>,
    /// The order players take their turns in during the current match.
    turn_order: Vec<PlayerId>,
    /// The round being played. Zero while no match is in progress.
    current_round: u32,
    /// The number of rounds after which a match times out.
    round_limit: u32,
    /// The sole survivor of the current match, once there is one.
    winner: Option<PlayerId>,
    /// The source of every random draw.
    dice: D,
}

impl<R: Rng> Board<RandomDice<R>> {
    /// Build a board with randomly valued properties and one player per strategy.
    pub fn new(config: BoardConfig, mut rng: R) -> Result<Self, GameError> {
        config.validate()?;

        let properties = (0..config.property_count)
            .map(|_| Property::new(PRICES.sample(&mut rng), RENTS.sample(&mut rng)))
            .collect::<Result<Vec<_>, _>>()?;

        for (i, property) in properties.iter().enumerate() {
            debug!("Property {}: {}", i, property);
        }

        Board::with_properties(
            properties,
            &Strategy::ALL,
            config.round_limit,
            RandomDice::new(rng),
        )
    }
}

impl<D: Dice> Board<D> {
    /*********        INITIALISATION INTERFACES        *********/

    /// Build a board from its parts. Players are seated in the order of `strategies`.
    pub fn with_properties(
        properties: Vec<Property>,
        strategies: &[Strategy],
        round_limit: u32,
        dice: D,
    ) -> Result<Self, GameError> {
        if round_limit == 0 {
            return Err(GameError::configuration("round limit must be > 0"));
        }
        if strategies.len() < 2 {
            return Err(GameError::configuration(
                "a match needs at least two players",
            ));
        }
        for (i, strategy) in strategies.iter().enumerate() {
            if strategies[..i].contains(strategy) {
                return Err(GameError::configuration(format!(
                    "more than one {} player",
                    strategy
                )));
            }
        }

        let players = strategies
            .iter()
            .enumerate()
            .map(|(i, &strategy)| Player::new(PlayerId(i), strategy))
            .collect();

        Ok(Self {
            properties,
            players,
            turn_order: vec![],
            current_round: 0,
            round_limit,
            winner: None,
            dice,
        })
    }

    /*********        GETTERS        *********/

    /// Return the properties around the board, in board order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Return every player seated at the board, in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Return the player seated at `id`. Panics if nobody sits there.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.0]
    }

    /// Players still in the current match, in turn order.
    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.turn_order
            .iter()
            .copied()
            .filter(move |id| self.players[id.0].is_active())
    }

    /// Return the round being played, or 0 between matches.
    pub fn current_round(&self) -> u32 {
        self.current_round
    }

    /// Return the number of rounds after which a match times out.
    pub fn round_limit(&self) -> u32 {
        self.round_limit
    }

    /*********        PUBLIC INTERFACES        *********/

    /// Play a whole match and return its result.
    ///
    /// The match ends as soon as a single player is left standing, or
    /// times out once `round_limit` rounds have been played.
    pub fn run_match(&mut self) -> Result<MatchResult, GameError> {
        self.begin_match()?;

        loop {
            self.play_round()?;

            if self.winner.is_some() || self.current_round >= self.round_limit {
                return self.finish_match();
            }
        }
    }

    /*********        MATCH LIFECYCLE        *********/

    /// Reset the players and properties and draw a turn order.
    pub(crate) fn begin_match(&mut self) -> Result<(), GameError> {
        if self.current_round > 0 {
            return Err(GameError::invalid_state("match already in progress"));
        }

        self.seat_players()?;

        for property in &mut self.properties {
            property.owner = None;
        }

        self.shuffle_turn_order()?;

        debug!(
            "Match starting with turn order {:?}",
            self.turn_order
                .iter()
                .map(|id| self.players[id.0].strategy())
                .collect::<Vec<_>>()
        );

        Ok(())
    }

    /// Reset every player and seat the whole roster.
    fn seat_players(&mut self) -> Result<(), GameError> {
        let property_count = self.properties.len();
        for player in &mut self.players {
            player.reset_for_new_game(property_count)?;
        }

        self.turn_order = self.players.iter().map(Player::id).collect();
        self.winner = None;

        Ok(())
    }

    /// Shuffle whoever is still playing, reseating everyone if nobody is.
    fn shuffle_turn_order(&mut self) -> Result<(), GameError> {
        if self.active_players().next().is_none() {
            self.seat_players()?;
        }

        self.dice.shuffle(&mut self.turn_order);

        Ok(())
    }

    /// Give every player still in the match one turn.
    ///
    /// The round is cut short as soon as a single player is left.
    pub(crate) fn play_round(&mut self) -> Result<(), GameError> {
        self.current_round += 1;

        let movers: Vec<PlayerId> = self.active_players().collect();
        for id in movers {
            self.roll_and_move(id);

            if self.declare_sole_survivor()? {
                break;
            }
        }

        Ok(())
    }

    /// Declare the last player standing the winner. Return whether there was one.
    fn declare_sole_survivor(&mut self) -> Result<bool, GameError> {
        let survivors: Vec<PlayerId> = self.active_players().collect();

        match survivors[..] {
            [survivor] => {
                self.players[survivor.0].declare_win()?;
                self.winner = Some(survivor);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Produce the result of the match and clear the per-match state.
    pub(crate) fn finish_match(&mut self) -> Result<MatchResult, GameError> {
        let winner = match self.winner {
            Some(id) => id,
            None => self
                .richest_active_player()
                .ok_or_else(|| GameError::invalid_state("no players left in the game"))?,
        };

        let result = MatchResult {
            total_rounds: self.current_round,
            timed_out: self.winner.is_none(),
            winner: self.players[winner.0].snapshot(),
        };

        debug!(
            "Match over after {} rounds: {} with ${}{}",
            result.total_rounds,
            result.winner.strategy,
            result.winner.balance,
            if result.timed_out { " (timed out)" } else { "" }
        );

        for player in &self.players {
            trace!("{}", player);
        }

        self.turn_order.clear();
        self.current_round = 0;
        self.winner = None;

        Ok(result)
    }

    /// The active player with the highest balance.
    ///
    /// Ties go to whoever comes first in the current turn order.
    fn richest_active_player(&self) -> Option<PlayerId> {
        let mut richest: Option<&Player> = None;

        for id in self.active_players() {
            let player = &self.players[id.0];
            if richest.map_or(true, |r| player.balance() > r.balance()) {
                richest = Some(player);
            }
        }

        richest.map(Player::id)
    }

    /*********        TURNS        *********/

    /// Roll the die and move the player, unless they're already out.
    pub(crate) fn roll_and_move(&mut self, id: PlayerId) {
        if self.players[id.0].has_lost() {
            return;
        }

        let distance = self.dice.roll();
        self.advance(id, distance);
    }

    /// Move the player `distance` tiles forward and act on the property they land on.
    pub(crate) fn advance(&mut self, id: PlayerId, distance: usize) {
        let property_count = self.properties.len();
        if property_count == 0 {
            return;
        }

        let player = &mut self.players[id.0];
        player.position += distance;

        // Give the player the bonus every time they pass the start tile
        while player.position > property_count {
            player.credit(LAP_BONUS);
            player.position -= property_count;
        }

        // Still on the start tile
        let landed = match player.position.checked_sub(1) {
            Some(index) => PropertyId(index),
            None => return,
        };

        match self.properties[landed.0].owner() {
            Some(owner) if owner == id => (),
            Some(_) => self.pay_rent(id, landed),
            None => self.attempt_purchase(id, landed),
        }
    }

    /// Buy the property if it's for sale, affordable, and the player's strategy wants it.
    pub(crate) fn attempt_purchase(&mut self, id: PlayerId, property: PropertyId) {
        let player = &mut self.players[id.0];
        let target = &self.properties[property.0];

        if target.has_owner() || target.price() > player.balance() {
            return;
        }
        if !player
            .strategy()
            .decide_buy(target, player.balance(), &mut self.dice)
        {
            return;
        }

        let price = target.price();
        player.debit(price, &mut self.properties);
        player.take_ownership(property, &mut self.properties);

        trace!(
            "{} buys property {} for ${}",
            player.strategy(),
            property.0,
            price
        );
    }

    /// Pay the property's rent to its owner.
    pub(crate) fn pay_rent(&mut self, id: PlayerId, property: PropertyId) {
        let (owner, rent) = match self.properties[property.0].owner() {
            Some(owner) => (owner, self.properties[property.0].rent()),
            None => return,
        };

        // This may eliminate the payer, but the rent is paid regardless
        self.players[id.0].debit(rent, &mut self.properties);
        self.receive_rent(owner, property);

        trace!(
            "{} pays ${} rent to {}",
            self.players[id.0].strategy(),
            rent,
            self.players[owner.0].strategy()
        );
    }

    /// Collect the property's rent, provided the player still owns it.
    pub(crate) fn receive_rent(&mut self, id: PlayerId, property: PropertyId) {
        let property = &self.properties[property.0];

        if property.owner() == Some(id) {
            self.players[id.0].credit(property.rent());
        }
    }
}
