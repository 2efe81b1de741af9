//! Decimal integer scanning with `scanf("%d")` semantics.
//!
//! The read operation of the runtime consumes one optionally-signed decimal
//! token from standard input: skip C whitespace, accept an optional sign,
//! then one or more digits, stopping at the first byte that cannot extend
//! the token. That stop byte must remain readable by the next call, so the
//! scanner carries a one-byte pushback slot — the `ungetc` a C stdio stream
//! would provide. Values saturate at the `i64` bounds rather than wrapping.
//!
//! The scanner is generic over [`ByteSource`] so the fd-backed stdin source
//! in the ABI crate and slice-backed test sources share one implementation.

/// A blocking, byte-at-a-time input source.
pub trait ByteSource {
    /// Next byte, or `None` at end of input.
    fn next_byte(&mut self) -> Option<u8>;
}

/// `ByteSource` over an in-memory byte slice.
pub struct SliceSource<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> SliceSource<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl ByteSource for SliceSource<'_> {
    fn next_byte(&mut self) -> Option<u8> {
        let b = self.bytes.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        b
    }
}

/// Result of one scan attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A token was parsed (saturating at the `i64` bounds).
    Matched(i64),
    /// The first candidate byte could not start an integer; it has been
    /// pushed back.
    Mismatch,
    /// End of input before any token byte.
    Eof,
}

/// Streaming integer scanner with one byte of pushback.
pub struct IntScanner<S: ByteSource> {
    source: S,
    pending: Option<u8>,
}

impl<S: ByteSource> IntScanner<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: None,
        }
    }

    fn next_byte(&mut self) -> Option<u8> {
        self.pending.take().or_else(|| self.source.next_byte())
    }

    /// Scan one decimal integer token.
    ///
    /// Whitespace is the C `isspace` set. A lone sign is a [`ScanOutcome::Mismatch`]:
    /// the byte after the sign is pushed back, the sign itself is consumed
    /// (one byte of pushback, as with an unbuffered stdio stream).
    pub fn scan_int(&mut self) -> ScanOutcome {
        // Skip leading whitespace.
        let mut byte = loop {
            match self.next_byte() {
                Some(b) if is_c_space(b) => continue,
                Some(b) => break b,
                None => return ScanOutcome::Eof,
            }
        };

        let mut negative = false;
        if byte == b'-' || byte == b'+' {
            negative = byte == b'-';
            byte = match self.next_byte() {
                Some(b) => b,
                None => return ScanOutcome::Eof,
            };
        }

        if !byte.is_ascii_digit() {
            self.pending = Some(byte);
            return ScanOutcome::Mismatch;
        }

        // Accumulate digits, saturating at the representable bounds.
        let abs_max = if negative {
            9_223_372_036_854_775_808u64
        } else {
            9_223_372_036_854_775_807u64
        };
        let cutoff = abs_max / 10;
        let cutlim = abs_max % 10;

        let mut acc: u64 = 0;
        let mut saturated = false;
        loop {
            let digit = (byte - b'0') as u64;
            if saturated || acc > cutoff || (acc == cutoff && digit > cutlim) {
                saturated = true;
            } else {
                acc = acc * 10 + digit;
            }
            byte = match self.next_byte() {
                Some(b) => b,
                None => break,
            };
            if !byte.is_ascii_digit() {
                self.pending = Some(byte);
                break;
            }
        }

        let value = if saturated {
            if negative { i64::MIN } else { i64::MAX }
        } else if negative {
            (acc as i64).wrapping_neg()
        } else {
            acc as i64
        };
        ScanOutcome::Matched(value)
    }
}

/// The C `isspace` set in the default locale.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
