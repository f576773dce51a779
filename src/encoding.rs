// 🔤 Transcoding - UTF-8 <-> Windows-1250
// The bank's import tooling reads files in Windows-1250

use crate::error::{DecodingError, EncodingError};
use encoding_rs::{EncoderResult, WINDOWS_1250};

/// Convert UTF-8 text to Windows-1250 bytes
///
/// Fails on the first character the code page cannot represent.
pub fn to_windows1250(text: &str) -> Result<Vec<u8>, EncodingError> {
    let mut encoder = WINDOWS_1250.new_encoder();
    // Single-byte code page: never more bytes out than in
    let mut out = Vec::with_capacity(text.len());
    let mut consumed = 0;

    loop {
        let (result, read) =
            encoder.encode_from_utf8_to_vec_without_replacement(&text[consumed..], &mut out, true);
        consumed += read;

        match result {
            EncoderResult::InputEmpty => return Ok(out),
            EncoderResult::OutputFull => out.reserve(text.len() - consumed + 1),
            EncoderResult::Unmappable(character) => return Err(EncodingError { character }),
        }
    }
}

/// Convert Windows-1250 bytes back to UTF-8 text
pub fn from_windows1250(bytes: &[u8]) -> Result<String, DecodingError> {
    WINDOWS_1250
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or(DecodingError)
}
