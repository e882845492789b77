mod cell;
mod figure;
mod graph;
mod occupancy;
mod placement;
mod player;
mod setup;

pub use cell::*;
pub use figure::*;
pub use graph::*;
pub use occupancy::*;
pub use placement::*;
pub use player::*;
pub use setup::*;
