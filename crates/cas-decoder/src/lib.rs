#![warn(clippy::pedantic)]

pub mod chunk;
pub mod decoder;
pub mod error;
pub mod reader;

pub use chunk::{BitOrder, Chunk};
pub use decoder::{CasDecoder, DecodedTape};
pub use error::DecodeError;
pub use reader::{ChunkReader, DecodedChunk};
