use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Base64Encoder for turning raw bytes into padded Base64 text
///
/// Encoding is a total, deterministic function over any byte sequence:
/// it uses the standard alphabet (`A-Z a-z 0-9 + /`) with `=` padding to
/// a multiple of four characters, and never fails.
pub struct Base64Encoder;

impl Base64Encoder {
    /// Encodes the given bytes as standard padded Base64 text
    pub fn encode(data: &[u8]) -> String {
        STANDARD.encode(data)
    }

    /// Length of the encoded text for an input of `input_len` bytes
    pub fn encoded_len(input_len: usize) -> usize {
        input_len.div_ceil(3) * 4
    }
}
