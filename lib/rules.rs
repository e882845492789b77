mod die;
mod turn;

pub use die::*;
pub use turn::*;
