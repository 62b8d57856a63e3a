use std::{fmt, num::ParseIntError, str::FromStr};

use thiserror::Error;

/// Identifier of a film in the external film catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilmId(i64);

impl FilmId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn to_i64(self) -> i64 {
        self.0
    }
}

impl From<i64> for FilmId {
    fn from(from: i64) -> Self {
        Self(from)
    }
}

impl From<FilmId> for i64 {
    fn from(from: FilmId) -> Self {
        from.0
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilmIdParseError {
    #[error("Film id is not a finite number")]
    NotFinite,
    #[error("Film id is not an integer")]
    NotAnInteger,
    #[error("Film id is out of range")]
    OutOfRange,
    #[error(transparent)]
    Int(#[from] ParseIntError),
}

// JSON numbers arrive as `f64`.
impl TryFrom<f64> for FilmId {
    type Error = FilmIdParseError;

    fn try_from(from: f64) -> Result<Self, Self::Error> {
        if !from.is_finite() {
            return Err(FilmIdParseError::NotFinite);
        }
        if from.fract() != 0.0 {
            return Err(FilmIdParseError::NotAnInteger);
        }
        // `i64::MAX as f64` rounds up to 2^63 which is not representable.
        if from < i64::MIN as f64 || from >= i64::MAX as f64 {
            return Err(FilmIdParseError::OutOfRange);
        }
        Ok(Self(from as i64))
    }
}

impl FromStr for FilmId {
    type Err = FilmIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
