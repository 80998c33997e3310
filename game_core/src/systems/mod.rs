pub mod ball;
pub mod input;
pub mod movement;
pub mod opponent;

pub use ball::*;
pub use input::*;
pub use movement::*;
pub use opponent::*;
