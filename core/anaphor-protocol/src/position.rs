use core::fmt;
use core::ops::Sub;
use core::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Fixed-point denominator of [`Position`] and [`Offset`].
pub const POSITION_SCALE: i64 = 10_000;

/// Maximum number of digits accepted after the decimal point of a token id.
pub const FRACTION_DIGITS: usize = 4;

/// Exact document-global position of a token.
///
/// Ordinary words sit on whole numbers; sub-parts of a multi-word expansion
/// (`8.1`, `8.2`) sit strictly between the whole numbers they refine.
/// Stored as a scaled integer so ordering and subtraction are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)]
pub struct Position(i64);

impl Position {
    pub const fn from_whole(whole: u32) -> Self {
        Self(whole as i64 * POSITION_SCALE)
    }

    /// Builds `whole.fraction`, where `fraction` is the digit string written
    /// after the decimal point. Returns `None` for an empty, non-numeric or
    /// over-long fraction.
    pub fn from_decimal(whole: u32, fraction: &str) -> Option<Self> {
        if fraction.is_empty()
            || fraction.len() > FRACTION_DIGITS
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let mut scaled: i64 = 0;
        for b in fraction.bytes() {
            scaled = scaled * 10 + i64::from(b - b'0');
        }
        for _ in fraction.len()..FRACTION_DIGITS {
            scaled *= 10;
        }

        Some(Self(i64::from(whole) * POSITION_SCALE + scaled))
    }

    pub const fn is_whole(self) -> bool {
        self.0 % POSITION_SCALE == 0
    }

    /// Moves the position forward by `words` whole positions.
    /// Used to turn sentence-local ids into document-global ones.
    pub const fn shifted(self, words: u32) -> Self {
        Self(self.0 + words as i64 * POSITION_SCALE)
    }
}

impl Sub for Position {
    type Output = Offset;

    fn sub(self, rhs: Position) -> Offset {
        Offset(self.0 - rhs.0)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(f, self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePositionError;

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid token position")
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (s, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParsePositionError);
        }
        let whole: u32 = whole.parse().map_err(|_| ParsePositionError)?;

        match fraction {
            Some(fraction) => Position::from_decimal(whole, fraction).ok_or(ParsePositionError),
            None => Ok(Position::from_whole(whole)),
        }
    }
}

/// Signed, exact difference between two positions.
///
/// Renders as a plain decimal: `5`, `-3`, `6.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(transparent)]
pub struct Offset(i64);

impl Offset {
    pub const ZERO: Offset = Offset(0);

    pub const fn from_words(words: i64) -> Self {
        Self(words * POSITION_SCALE)
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_decimal(f, self.0)
    }
}

fn write_decimal(f: &mut fmt::Formatter<'_>, scaled: i64) -> fmt::Result {
    let sign = if scaled < 0 { "-" } else { "" };
    let magnitude = scaled.unsigned_abs();
    let scale = POSITION_SCALE as u64;
    let whole = magnitude / scale;
    let mut fraction = magnitude % scale;

    if fraction == 0 {
        return write!(f, "{sign}{whole}");
    }

    let mut digits = FRACTION_DIGITS;
    while fraction % 10 == 0 {
        fraction /= 10;
        digits -= 1;
    }
    write!(f, "{sign}{whole}.{fraction:0digits$}")
}

/// Identifier column of a token line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub enum TokenId {
    /// An ordinary word or a fractional sub-part.
    Word(Position),
    /// Placeholder (`3-4`) standing for the surface form of a multi-word
    /// expansion. Not a real word.
    Range { first: Position, last: Position },
}

impl TokenId {
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, TokenId::Range { .. })
    }

    /// Position of a real word; `None` for placeholders.
    pub const fn position(&self) -> Option<Position> {
        match self {
            TokenId::Word(position) => Some(*position),
            TokenId::Range { .. } => None,
        }
    }

    pub const fn shifted(self, words: u32) -> Self {
        match self {
            TokenId::Word(position) => TokenId::Word(position.shifted(words)),
            TokenId::Range { first, last } => TokenId::Range {
                first: first.shifted(words),
                last: last.shifted(words),
            },
        }
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenId::Word(position) => write!(f, "{position}"),
            TokenId::Range { first, last } => write!(f, "{first}-{last}"),
        }
    }
}
