//! Low-level RTF token reader.
//!
//! This module implements a tolerant scanner that turns raw RTF text into a
//! flat sequence of structural tokens without building a document tree. The
//! reader is forward-only and single-pass: it is consumed as an iterator and
//! cannot be restarted.

use smallvec::SmallVec;

/// A structural token produced by [`RtfReader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RtfToken {
    /// Plain text between delimiters and control words.
    Text(String),
    /// A control word name, including any numeric parameter digits
    /// (`\headery2693` yields the single name `headery2693`).
    ControlWord(String),
}

/// Tolerant single-pass scanner over RTF source text.
///
/// Unbalanced groups and malformed escapes are accepted silently; the reader
/// never fails. Group nesting is tracked only as a depth counter, floored at
/// zero so stray closing braces cannot underflow it.
pub struct RtfReader<'a> {
    /// Remaining input
    chars: std::str::Chars<'a>,
    /// Character pushed back for reprocessing after ending a control word
    pending: Option<char>,
    /// Accumulated plain text awaiting a flush
    text: String,
    /// Accumulated control-word name (ASCII letters, digits, `-`)
    control_word: SmallVec<[u8; 16]>,
    /// Whether a `\` has opened a control word still being accumulated
    in_control_word: bool,
    /// Current group nesting depth
    depth: u32,
}

impl<'a> RtfReader<'a> {
    /// Create a reader over the full document text.
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            pending: None,
            text: String::new(),
            control_word: SmallVec::new(),
            in_control_word: false,
            depth: 0,
        }
    }

    /// Current group nesting depth.
    ///
    /// Decremented on `}` with a floor at zero, so unbalanced input is
    /// tolerated rather than rejected.
    #[inline]
    pub fn group_depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    fn take_text(&mut self) -> RtfToken {
        RtfToken::Text(std::mem::take(&mut self.text))
    }

    #[inline]
    fn take_control_word(&mut self) -> RtfToken {
        let name = String::from_utf8_lossy(&std::mem::take(&mut self.control_word)).into_owned();
        RtfToken::ControlWord(name)
    }
}

impl Iterator for RtfReader<'_> {
    type Item = RtfToken;

    fn next(&mut self) -> Option<RtfToken> {
        loop {
            let ch = match self.pending.take().or_else(|| self.chars.next()) {
                Some(ch) => ch,
                None => {
                    // End of stream: pending text is flushed, but a control
                    // word still being accumulated is dropped.
                    if !self.in_control_word && !self.text.is_empty() {
                        return Some(self.take_text());
                    }
                    return None;
                },
            };

            // Line breaks and stray NUL bytes from raw file reads carry no
            // structure at this level.
            if matches!(ch, '\r' | '\n' | '\0') {
                continue;
            }

            if self.in_control_word {
                if ch.is_ascii_alphanumeric() || ch == '-' {
                    self.control_word.push(ch as u8);
                    continue;
                }
                self.in_control_word = false;
                // A single space is the delimiter and is consumed; any other
                // terminator is reprocessed as an ordinary character.
                if ch != ' ' {
                    self.pending = Some(ch);
                }
                if !self.control_word.is_empty() {
                    return Some(self.take_control_word());
                }
                continue;
            }

            match ch {
                '{' => {
                    self.depth += 1;
                    if !self.text.is_empty() {
                        return Some(self.take_text());
                    }
                },
                '}' => {
                    self.depth = self.depth.saturating_sub(1);
                    if !self.text.is_empty() {
                        return Some(self.take_text());
                    }
                },
                '\\' => {
                    self.in_control_word = true;
                    if !self.text.is_empty() {
                        return Some(self.take_text());
                    }
                },
                _ => self.text.push(ch),
            }
        }
    }
}
