pub use errors::*;
pub use game_state::*;
pub use moves::*;
pub use notation::*;
pub use position::*;
pub use puzzle::*;
pub use validation::*;

#[cfg(test)]
mod arbitrary;
mod errors;
mod game_state;
mod moves;
mod notation;
mod position;
mod puzzle;
mod validation;
