pub mod balls;
pub mod collision;
pub mod movement;
pub mod opponent;
pub mod paddles;
pub mod powerups;
pub mod scoring;

pub use balls::*;
pub use collision::*;
pub use movement::*;
pub use opponent::*;
pub use paddles::*;
pub use powerups::*;
pub use scoring::*;
