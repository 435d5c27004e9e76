mod fuzz;
mod game;
mod recording;
pub use fuzz::*;
pub use game::*;
pub use recording::*;
