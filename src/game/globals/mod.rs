mod details;
pub use details::*;

use lazy_static::lazy_static;
use rand::distributions::Uniform;

/// The balance every player starts a match with.
pub const STARTING_BALANCE: i64 = 300;

/// The bonus a player receives every time they pass the start tile.
pub const LAP_BONUS: i64 = 100;

/// The number of faces on the die.
pub const DIE_FACES: usize = 6;

/// A demanding player only buys properties whose rent is above this.
pub const DEMANDING_MIN_RENT: i64 = 50;

/// A cautious player only buys if this much is left over after paying.
pub const CAUTIOUS_RESERVE: i64 = 80;

/// The number of properties on a board unless configured otherwise.
pub const DEFAULT_PROPERTY_COUNT: usize = 20;

/// The number of rounds after which a match times out unless configured otherwise.
pub const DEFAULT_ROUND_LIMIT: u32 = 1000;

lazy_static! {
    /// Every face of the die is equally likely.
    pub static ref DIE: Uniform<usize> = Uniform::new_inclusive(1, DIE_FACES);

    /// Sale prices of generated properties.
    pub static ref PRICES: Uniform<i64> = Uniform::new_inclusive(40, 200);

    /// Rents of generated properties. Drawn independently of the price.
    pub static ref RENTS: Uniform<i64> = Uniform::new_inclusive(10, 80);
}
