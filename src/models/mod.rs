pub mod skill;
pub mod score;

pub use skill::*;
pub use score::*;
