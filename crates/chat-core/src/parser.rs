//! Line-oriented transcript parser.
//!
//! Splits a `User:` / `AI:` transcript into per-speaker message lists.
//! Lines that do not start with a speaker tag continue the open message;
//! lines before the first tag are dropped.

use crate::error::{ChatError, Result};
use crate::types::{Message, Speaker, Transcript};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// At most one message is open at a time; its text lives in the variant.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum ParseState {
    #[default]
    NoSpeaker,
    InUser(String),
    InAi(String),
}

/// Incremental parser. Feed lines in order, then call [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct TranscriptParser {
    state: ParseState,
    transcript: Transcript,
    dropped_lines: usize,
}

impl TranscriptParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume one raw line.
    pub fn feed(&mut self, line: &str) {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(Speaker::User.tag()) {
            // Re-tagging the same speaker discards the pending text.
            if matches!(self.state, ParseState::InAi(_)) {
                self.finalize();
            }
            self.state = ParseState::InUser(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix(Speaker::Ai.tag()) {
            if matches!(self.state, ParseState::InUser(_)) {
                self.finalize();
            }
            self.state = ParseState::InAi(rest.trim().to_string());
        } else {
            match &mut self.state {
                ParseState::InUser(buf) | ParseState::InAi(buf) => {
                    // Blank lines still contribute a separator.
                    buf.push(' ');
                    buf.push_str(line);
                }
                ParseState::NoSpeaker => self.dropped_lines += 1,
            }
        }
    }

    /// Flush the pending message and return the parsed transcript.
    pub fn finish(mut self) -> Transcript {
        self.finalize();
        if self.dropped_lines > 0 {
            tracing::debug!(
                "Dropped {} line(s) before the first speaker tag",
                self.dropped_lines
            );
        }
        tracing::debug!(
            "Parsed {} user and {} AI message(s)",
            self.transcript.user_messages.len(),
            self.transcript.ai_messages.len()
        );
        self.transcript
    }

    fn finalize(&mut self) {
        let (speaker, buf) = match std::mem::take(&mut self.state) {
            ParseState::NoSpeaker => return,
            ParseState::InUser(buf) => (Speaker::User, buf),
            ParseState::InAi(buf) => (Speaker::Ai, buf),
        };

        // A blank continuation makes the buffer non-empty, so the turn is
        // kept even if it trims to nothing.
        if buf.is_empty() {
            return;
        }
        self.transcript.push(Message {
            speaker,
            content: buf.trim().to_string(),
        });
    }
}

/// Parse an in-memory sequence of lines.
pub fn parse_lines<I, S>(lines: I) -> Transcript
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = TranscriptParser::new();
    for line in lines {
        parser.feed(line.as_ref());
    }
    parser.finish()
}

/// Split on `\n`, `\r\n` and a lone `\r`.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = (!text.is_empty()).then_some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(i) => {
                let break_len = if current[i..].starts_with("\r\n") { 2 } else { 1 };
                let tail = &current[i + break_len..];
                rest = if tail.is_empty() { None } else { Some(tail) };
                Some(&current[..i])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

/// Parse a UTF-8 transcript file.
///
/// A missing file yields [`ChatError::SourceNotFound`]; any other failure,
/// including invalid UTF-8, yields [`ChatError::SourceRead`]. The handle is
/// closed on every path.
pub fn parse_file(path: &Path) -> Result<Transcript> {
    let file = File::open(path).map_err(|e| ChatError::from_io(path, e))?;
    let mut reader = BufReader::new(file);

    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|e| ChatError::from_io(path, e))?;

    Ok(parse_lines(split_lines(&contents)))
}
