/// Board topology, occupancy, and figures.
pub mod board;
/// The turn rule engine and the die.
pub mod rules;
