//! Repetition plan for the body
//!
//! Exactly one digit value (the "lucky digit") appears more than once in a
//! body. It occupies either two or three positions; three positions must not
//! form a run of consecutive indices.

/// How often the lucky digit appears in the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepetitionCount {
    /// Two occurrences
    Twice,
    /// Three occurrences
    Thrice,
}

impl RepetitionCount {
    /// Number of positions the lucky digit occupies
    #[must_use]
    pub const fn occurrences(self) -> usize {
        match self {
            Self::Twice => 2,
            Self::Thrice => 3,
        }
    }
}

/// Positions reserved for the lucky digit
///
/// Indices are unique and lie in `0..10`. They keep the order in which they
/// were drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    /// Two distinct positions
    Twice([usize; 2]),
    /// Three distinct positions, never three consecutive indices
    Thrice([usize; 3]),
}

impl Repetition {
    /// The repetition count this plan realises
    #[must_use]
    pub const fn count(&self) -> RepetitionCount {
        match self {
            Self::Twice(_) => RepetitionCount::Twice,
            Self::Thrice(_) => RepetitionCount::Thrice,
        }
    }

    /// Positions in draw order
    #[must_use]
    pub const fn positions(&self) -> &[usize] {
        match self {
            Self::Twice(p) => p,
            Self::Thrice(p) => p,
        }
    }

    /// Whether `position` is reserved for the lucky digit
    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        self.positions().contains(&position)
    }
}

/// True when three indices, in any order, are consecutive integers
#[must_use]
pub fn is_consecutive_run(a: usize, b: usize, c: usize) -> bool {
    let mut sorted = [a, b, c];
    sorted.sort_unstable();
    sorted[1] == sorted[0] + 1 && sorted[2] == sorted[1] + 1
}
