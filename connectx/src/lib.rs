pub use board::*;
pub use position::*;
pub use protocol_types::*;
pub use token::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod position;
mod protocol_types;
mod token;
mod visualization;
