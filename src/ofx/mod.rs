//! Document Emitter: OFX 1.02 statement download.

#[cfg(test)]
mod dto;
mod writer;

pub use writer::{OFX_HEADER, OfxWriter};
