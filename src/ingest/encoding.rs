use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::ingest::errors::LoadError;

/// A text encoding the loader may try when decoding an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Windows1252
}

impl TextEncoding {
    /// Candidates tried, in order, when none are configured.
    pub const DEFAULT_CANDIDATES: [TextEncoding; 3] = [TextEncoding::Utf8, TextEncoding::Latin1, TextEncoding::Windows1252];

    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Windows1252 => "cp1252"
        }
    }

    /// Decodes the whole buffer, returning `None` if any byte sequence is invalid for this encoding.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            //NOTE: ISO-8859-1 maps every byte onto the code point of the same value, so it never fails
            TextEncoding::Latin1 => Some(bytes.iter().map(|&byte| char::from(byte)).collect()),
            TextEncoding::Windows1252 => encoding_rs::WINDOWS_1252
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned())
        }
    }
}

impl Display for TextEncoding {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = LoadError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            "cp1252" | "windows-1252" => Ok(TextEncoding::Windows1252),
            _ => Err(LoadError::UnknownEncoding(value.to_string()))
        }
    }
}
