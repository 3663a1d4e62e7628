//! The two document construction strategies under measurement
//!
//! Both build the same document: `fields` int32 entries keyed by the
//! decimal form of their index. They differ in where the bytes come from.
//! [`RawAppendEncoder`] writes each field straight into the raw binary
//! buffer as it is appended; [`OrderedDocumentEncoder`] materializes an
//! insertion-ordered [`Document`] first and serializes it in one pass.

use bson::{Bson, Document, RawDocumentBuf};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A selectable document construction strategy
///
/// Selection happens once at startup; an encoder that cannot be
/// constructed is a configuration error, never a mid-benchmark fault.
pub trait BsonEncoder {
    /// Fixed label used for the per-run report lines
    fn label(&self) -> &'static str;

    /// Construct a document with `fields` integer fields and return the
    /// encoded bytes
    ///
    /// The caller discards the buffer after timing; only the duration
    /// survives.
    fn encode(&self, fields: u32) -> Result<Vec<u8>>;
}

/// Benchmark mode selecting which encoder runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Per-field append into a raw document buffer
    Raw,

    /// Ordered document materialized, then encoded in bulk
    Document,
}

impl Mode {
    /// Parse a command line token into a mode
    ///
    /// Unrecognized tokens are not an error: the driver answers them
    /// with a usage hint and takes no timing action.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "raw" => Some(Mode::Raw),
            "document" => Some(Mode::Document),
            _ => None,
        }
    }

    /// The token this mode is selected by
    pub fn token(&self) -> &'static str {
        match self {
            Mode::Raw => "raw",
            Mode::Document => "document",
        }
    }

    /// Construct the encoder backing this mode
    pub fn encoder(&self) -> Box<dyn BsonEncoder> {
        match self {
            Mode::Raw => Box::new(RawAppendEncoder),
            Mode::Document => Box::new(OrderedDocumentEncoder),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Builds the document by appending one field at a time into the raw
/// binary buffer
#[derive(Debug, Clone, Copy, Default)]
pub struct RawAppendEncoder;

impl BsonEncoder for RawAppendEncoder {
    fn label(&self) -> &'static str {
        "RawDocumentBuf"
    }

    fn encode(&self, fields: u32) -> Result<Vec<u8>> {
        let mut doc = RawDocumentBuf::new();
        for i in 0..fields {
            doc.append(i.to_string(), i as i32);
        }
        Ok(doc.into_bytes())
    }
}

/// Builds an insertion-ordered document from a lazy pair sequence, then
/// encodes it with a single bulk call
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedDocumentEncoder;

impl BsonEncoder for OrderedDocumentEncoder {
    fn label(&self) -> &'static str {
        "Document"
    }

    fn encode(&self, fields: u32) -> Result<Vec<u8>> {
        let pairs = (0..fields).map(|i| (i.to_string(), Bson::Int32(i as i32)));
        let doc: Document = pairs.collect();
        let mut buf = Vec::new();
        doc.to_writer(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_token_round_trip() {
        assert_eq!(Mode::from_token("raw"), Some(Mode::Raw));
        assert_eq!(Mode::from_token("document"), Some(Mode::Document));
        assert_eq!(Mode::Raw.token(), "raw");
        assert_eq!(Mode::Document.token(), "document");
    }

    #[test]
    fn test_unrecognized_tokens_parse_to_none() {
        assert_eq!(Mode::from_token(""), None);
        assert_eq!(Mode::from_token("Raw"), None);
        assert_eq!(Mode::from_token("json"), None);
    }

    #[test]
    fn test_mode_display_matches_token() {
        assert_eq!(Mode::Raw.to_string(), "raw");
        assert_eq!(Mode::Document.to_string(), "document");
    }

    #[test]
    fn test_mode_serialization() {
        let json = serde_json::to_string(&Mode::Document).unwrap();
        assert_eq!(json, "\"document\"");
        let deserialized: Mode = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Mode::Document);
    }

    #[test]
    fn test_mode_selects_matching_encoder() {
        assert_eq!(Mode::Raw.encoder().label(), "RawDocumentBuf");
        assert_eq!(Mode::Document.encoder().label(), "Document");
    }

    #[test]
    fn test_strategies_produce_identical_bytes() {
        let raw = RawAppendEncoder.encode(5).unwrap();
        let ordered = OrderedDocumentEncoder.encode(5).unwrap();
        assert_eq!(raw, ordered);
    }

    #[test]
    fn test_empty_document_is_still_valid() {
        let raw = RawAppendEncoder.encode(0).unwrap();
        // smallest legal document: int32 length + terminating NUL
        assert_eq!(raw.len(), 5);
    }
}
