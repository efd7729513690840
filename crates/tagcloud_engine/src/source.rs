use std::fs;
use std::io;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use tagcloud_logging::{cloud_debug, cloud_info};

/// Whole input document, decoded and split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub lines: Vec<String>,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("cannot read {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("cannot decode {path}: {source}")]
    Decode { path: String, source: DecodeError },
}

/// Reads the whole file at `path` into memory before any tokenizing starts.
pub fn read_source(path: &Path) -> Result<SourceText, ReadError> {
    let bytes = fs::read(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let (text, encoding_label) = decode_text(&bytes).map_err(|source| ReadError::Decode {
        path: path.display().to_string(),
        source,
    })?;
    let lines = split_lines(&text);
    cloud_info!(
        "read {} bytes, {} lines from {:?} ({})",
        bytes.len(),
        lines.len(),
        path,
        encoding_label
    );
    Ok(SourceText {
        lines,
        encoding_label,
    })
}

/// Decode raw bytes using: BOM -> strict UTF-8 -> chardetng fallback.
pub fn decode_text(bytes: &[u8]) -> Result<(String, String), DecodeError> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_with(&bytes[bom_len..], encoding);
    }

    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return Ok((text.into_owned(), UTF_8.name().to_string()));
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    cloud_debug!("input is not UTF-8, detected {}", enc.name());
    decode_with(bytes, enc)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> Result<(String, String), DecodeError> {
    let (text, had_errors) = enc.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: enc.name().to_string(),
            message: "decoding error".into(),
        });
    }
    Ok((text.into_owned(), enc.name().to_string()))
}

/// Splits on `\n`, dropping one trailing `\r` per line and the empty piece
/// after a final newline.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(ToOwned::to_owned).collect()
}
