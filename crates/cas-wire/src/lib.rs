#![warn(clippy::pedantic)]

pub mod error;
pub mod frame;
pub mod tag;

pub use error::WireError;
pub use frame::{ChunkFrame, HEADER_SIZE};
pub use tag::Tag;
