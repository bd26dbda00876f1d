//! Text decoding for source files.

use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Encodings tried when loading a source file.
#[derive(Debug, Clone, Copy)]
pub struct IngestOptions {
    /// Tried first, strictly. Any malformed byte fails the attempt.
    pub primary: &'static Encoding,
    /// Tried when the primary attempt fails. Malformed bytes become U+FFFD.
    pub fallback: &'static Encoding,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            primary: UTF_8,
            // encoding_rs's Shift_JIS is the Windows code page 932 variant
            fallback: SHIFT_JIS,
        }
    }
}

impl IngestOptions {
    #[must_use]
    pub fn with_primary(mut self, encoding: &'static Encoding) -> Self {
        self.primary = encoding;
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, encoding: &'static Encoding) -> Self {
        self.fallback = encoding;
        self
    }
}

/// Strips a leading UTF-8 BOM when decoding as UTF-8.
fn strip_bom<'a>(bytes: &'a [u8], encoding: &'static Encoding) -> &'a [u8] {
    if encoding == UTF_8 {
        bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
    } else {
        bytes
    }
}

/// Decodes `bytes`, returning `None` on the first malformed sequence.
pub fn decode_strict(bytes: &[u8], encoding: &'static Encoding) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(strip_bom(bytes, encoding))
        .map(|text| text.into_owned())
}

/// Decodes `bytes`, substituting U+FFFD for malformed sequences.
///
/// The flag is true when at least one substitution happened.
pub fn decode_lossy(bytes: &[u8], encoding: &'static Encoding) -> (String, bool) {
    let (text, had_errors) = encoding.decode_without_bom_handling(strip_bom(bytes, encoding));
    (text.into_owned(), had_errors)
}
