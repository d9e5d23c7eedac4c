//! Errors raised by the sequence engine.

use std::fmt;

/// Which argument of [`sequence_equal_with`](crate::sequence_equal_with).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    First,
    Second,
}

impl Param {
    /// The parameter name as it appears in the signature.
    pub const fn name(self) -> &'static str {
        match self {
            Param::First => "first",
            Param::Second => "second",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Invalid input to a sequence comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SequenceError {
    /// A sequence argument was absent. `first` is checked before `second`.
    #[error("sequence argument `{param}` is absent")]
    AbsentArgument { param: Param },
}

impl SequenceError {
    /// The offending parameter.
    pub const fn param(&self) -> Param {
        match self {
            SequenceError::AbsentArgument { param } => *param,
        }
    }
}
