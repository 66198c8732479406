//! Byte/text conversion under a declared encoding.

use encoding_rs::{UTF_8, WINDOWS_1252};
use recast_model::TextEncoding;

use crate::error::EncodingError;

/// Decodes `bytes` as `encoding`.
///
/// A UTF-8 byte-order mark is kept as U+FEFF so that writing the text back
/// reproduces it.
pub fn decode(bytes: &[u8], encoding: TextEncoding) -> Result<String, EncodingError> {
    match encoding {
        TextEncoding::Utf8 => UTF_8
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or(EncodingError::Malformed { encoding }),
        TextEncoding::Latin1 => Ok(encoding_rs::mem::decode_latin1(bytes).into_owned()),
        TextEncoding::Windows1252 => WINDOWS_1252
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| text.into_owned())
            .ok_or(EncodingError::Malformed { encoding }),
    }
}

/// Encodes `text` as `encoding`, failing on the first character the
/// encoding cannot represent.
pub fn encode(text: &str, encoding: TextEncoding) -> Result<Vec<u8>, EncodingError> {
    match encoding {
        TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
        TextEncoding::Latin1 => {
            if let Some((offset, character)) = text.char_indices().find(|(_, c)| u32::from(*c) > 0xFF)
            {
                return Err(EncodingError::Unmappable {
                    encoding,
                    character,
                    offset,
                });
            }
            Ok(encoding_rs::mem::encode_latin1_lossy(text).into_owned())
        }
        TextEncoding::Windows1252 => {
            let (bytes, _, unmappable) = WINDOWS_1252.encode(text);
            if unmappable {
                let mut buf = [0u8; 4];
                let (offset, character) = text
                    .char_indices()
                    .find(|(_, c)| WINDOWS_1252.encode(c.encode_utf8(&mut buf)).2)
                    .unwrap_or((0, char::REPLACEMENT_CHARACTER));
                return Err(EncodingError::Unmappable {
                    encoding,
                    character,
                    offset,
                });
            }
            Ok(bytes.into_owned())
        }
    }
}
