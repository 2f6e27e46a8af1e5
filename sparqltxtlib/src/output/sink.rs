//! Output sinks and encoded emission.
//!
//! Text is encoded with the requested encoding and written as bytes when the
//! sink accepts bytes. Any reason the bytes cannot be produced or accepted
//! falls back to writing the text itself; only sink I/O errors surface.

use std::fmt;
use std::io;

use encoding_rs::Encoding;
use log::{debug, warn};

use crate::Result;

/// Default output encoding label.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// A writable target for rendered text.
pub trait OutputSink {
    /// Whether this sink takes encoded bytes
    fn accepts_bytes(&self) -> bool {
        true
    }

    /// Write already-encoded bytes
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Write text in its native form
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Sink over any `io::Write` (files, stdout, byte buffers).
///
/// Native text is written as UTF-8.
#[derive(Debug)]
pub struct ByteSink<W> {
    inner: W,
}

impl<W: io::Write> ByteSink<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> OutputSink for ByteSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)?;
        self.inner.flush()
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.write_bytes(text.as_bytes())
    }
}

/// Sink over any `fmt::Write` (e.g. `String`); accepts text only.
#[derive(Debug)]
pub struct TextSink<W> {
    inner: W,
}

impl<W: fmt::Write> TextSink<W> {
    /// Wrap a text writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Unwrap the text writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> OutputSink for TextSink<W> {
    fn accepts_bytes(&self) -> bool {
        false
    }

    fn write_bytes(&mut self, _bytes: &[u8]) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "text sink does not accept bytes",
        ))
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.inner
            .write_str(text)
            .map_err(|_| io::Error::other("failed to write text"))
    }
}

/// Why encoded bytes could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodeFailure {
    /// The label names no known encoding
    UnknownLabel(String),
    /// The encoding exists but has no encoder (e.g. UTF-16)
    NoEncoder(&'static str),
    /// The text has characters the encoding cannot represent
    Unmappable(&'static str),
}

impl fmt::Display for EncodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeFailure::UnknownLabel(label) => write!(f, "unknown encoding '{}'", label),
            EncodeFailure::NoEncoder(name) => write!(f, "{} cannot be used for output", name),
            EncodeFailure::Unmappable(name) => {
                write!(f, "text has characters not representable in {}", name)
            }
        }
    }
}

/// Encode `text` with the encoding named by `label`.
pub fn encode_text(text: &str, label: &str) -> std::result::Result<Vec<u8>, EncodeFailure> {
    let encoding = Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| EncodeFailure::UnknownLabel(label.to_string()))?;
    if encoding.output_encoding() != encoding {
        return Err(EncodeFailure::NoEncoder(encoding.name()));
    }
    let (bytes, _, had_errors) = encoding.encode(text);
    if had_errors {
        return Err(EncodeFailure::Unmappable(encoding.name()));
    }
    Ok(bytes.into_owned())
}

/// Write `text` to `sink`, encoded as `label` when possible.
pub fn emit(text: &str, label: &str, sink: &mut dyn OutputSink) -> Result<()> {
    if !sink.accepts_bytes() {
        debug!("sink takes text only, writing {} chars", text.chars().count());
        sink.write_text(text)?;
        return Ok(());
    }

    match encode_text(text, label) {
        Ok(bytes) => {
            debug!("writing {} bytes encoded as {}", bytes.len(), label);
            sink.write_bytes(&bytes)?;
        }
        Err(failure) => {
            warn!("{}; writing text unencoded", failure);
            sink.write_text(text)?;
        }
    }
    Ok(())
}
