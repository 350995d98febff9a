//! Per-letter feedback for a guess attempt
//!
//! Each slot holds one of three symbols, written on the wire as a single character:
//! - `X` = Absent (letter not in word)
//! - `G` = Correct (letter in correct position)
//! - `Y` = Present (letter in word, wrong position)
//!
//! The vector is encoded as those characters concatenated in guess-letter order,
//! e.g. `"GYXXG"`.

use std::fmt;

/// Default number of letters in a guess
pub const GUESS_LENGTH: usize = 5;

/// Feedback for a single letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    #[default]
    Absent,
    Correct,
    Present,
}

impl Feedback {
    /// Every symbol, in click-cycle order
    pub const ALL: [Self; 3] = [Self::Absent, Self::Correct, Self::Present];

    /// Next value in the click cycle: Absent → Correct → Present → Absent
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Absent => Self::Correct,
            Self::Correct => Self::Present,
            Self::Present => Self::Absent,
        }
    }

    /// Wire symbol for this feedback
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'X',
            Self::Correct => 'G',
            Self::Present => 'Y',
        }
    }

    /// Parse a wire symbol (case-insensitive)
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'X' | 'x' => Some(Self::Absent),
            'G' | 'g' => Some(Self::Correct),
            'Y' | 'y' => Some(Self::Present),
            _ => None,
        }
    }

    /// Cell colour as RGB
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Absent => (0x78, 0x7c, 0x7e),
            Self::Correct => (0x6a, 0xaa, 0x64),
            Self::Present => (0xc9, 0xb4, 0x58),
        }
    }

    /// Emoji square for this feedback
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Correct => '🟩',
            Self::Present => '🟨',
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Ordered feedback for every letter of the current guess
///
/// The length is fixed at construction. Only the feedback editor mutates a live
/// vector; everything else sees it read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackVector(Vec<Feedback>);

impl FeedbackVector {
    /// Create a vector of `len` slots, all Absent
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self(vec![Feedback::Absent; len])
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Feedback at `index`, if the slot exists
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Feedback> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.0.iter().copied()
    }

    /// Encode as the wire string, e.g. `"GYXXG"`
    #[must_use]
    pub fn encode(&self) -> String {
        self.0.iter().map(|f| f.symbol()).collect()
    }

    /// Emoji rendering, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }

    /// Advance one slot through the click cycle, returning the new value
    pub(crate) fn cycle(&mut self, index: usize) -> Option<Feedback> {
        let slot = self.0.get_mut(index)?;
        *slot = slot.next();
        Some(*slot)
    }

    /// Force one slot back to Absent
    pub(crate) fn clear_slot(&mut self, index: usize) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = Feedback::Absent;
        }
    }
}

impl fmt::Display for FeedbackVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl std::str::FromStr for FeedbackVector {
    type Err = String;

    /// Parse a wire string like "GYXXG" (any length, case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|ch| {
                Feedback::from_symbol(ch)
                    .ok_or_else(|| format!("Invalid feedback symbol '{ch}' in {s}"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
