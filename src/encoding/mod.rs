/// Base64 encoding of raw byte sequences
mod encoder;

pub use encoder::Base64Encoder;
