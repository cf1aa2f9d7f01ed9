//! Closed integer intervals used to declare allowed team and player counts

use crate::error::{Result, SkillError};
use std::fmt;

/// Closed interval `[lower, upper]`; `upper == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    lower: usize,
    upper: Option<usize>,
}

impl Range {
    pub const fn exactly(value: usize) -> Self {
        Self {
            lower: value,
            upper: Some(value),
        }
    }

    pub const fn at_least(lower: usize) -> Self {
        Self { lower, upper: None }
    }

    pub const fn at_most(upper: usize) -> Self {
        Self {
            lower: 0,
            upper: Some(upper),
        }
    }

    /// `[lower, upper]`, failing if the bounds are reversed
    pub fn inclusive(lower: usize, upper: usize) -> Result<Self> {
        if lower > upper {
            return Err(SkillError::configuration(format!(
                "Range lower bound {} exceeds upper bound {}",
                lower, upper
            )));
        }

        Ok(Self {
            lower,
            upper: Some(upper),
        })
    }

    pub fn lower(&self) -> usize {
        self.lower
    }

    pub fn upper(&self) -> Option<usize> {
        self.upper
    }

    pub fn contains(&self, value: usize) -> bool {
        value >= self.lower && self.upper.map_or(true, |upper| value <= upper)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upper {
            Some(upper) if upper == self.lower => write!(f, "exactly {}", upper),
            Some(upper) => write!(f, "[{}, {}]", self.lower, upper),
            None => write!(f, "at least {}", self.lower),
        }
    }
}
