//! Exact musical time.
//!
//! Duration is used both as length of events and as absolute tick
//! position of a [TickContext](crate::formatting::TickContext), so
//! comparisons never suffer from floating-point drift.
use std::{
    fmt::Display,
    ops::{Add, AddAssign},
    str::FromStr,
};

use fraction::Fraction;

use crate::error::{LayoutError, LayoutResult};

/// Absolute position of a slot in musical time.
pub type TickPosition = Duration;

#[derive(Debug, PartialEq, PartialOrd, Clone, Copy)]
pub struct Duration {
    fraction: Fraction,
}
impl Duration {
    /// # Example
    /// ```
    /// # use score_layout::primitives::Duration;
    /// let eight = Duration::new(2, 16).unwrap();
    /// assert_eq!(eight.numerator(), 1);
    /// assert_eq!(eight.denominator(), 8);
    /// assert!(Duration::new(1, 0).is_err());
    /// ```
    pub fn new(numerator: u64, denominator: u64) -> LayoutResult<Self> {
        if denominator == 0 {
            return Err(LayoutError::InvalidArgument(format!(
                "duration denominator should be positive: {}/{}",
                numerator, denominator
            )));
        }
        Ok(Self {
            fraction: Fraction::new(numerator, denominator),
        })
    }
    pub fn zero() -> Self {
        Self {
            fraction: Fraction::new(0_u64, 1_u64),
        }
    }
    pub fn from_integer(value: u64) -> Self {
        Self {
            fraction: Fraction::new(value, 1_u64),
        }
    }

    pub fn numerator(&self) -> u64 {
        self.fraction.numer().copied().unwrap_or(0)
    }
    pub fn denominator(&self) -> u64 {
        self.fraction.denom().copied().unwrap_or(1)
    }
    pub fn get(&self) -> Fraction {
        self.fraction
    }
    pub fn as_f64(&self) -> f64 {
        self.numerator() as f64 / self.denominator() as f64
    }
    pub fn is_zero(&self) -> bool {
        self.numerator() == 0
    }

    /// Subtract, if result will not become negative.
    pub fn checked_sub(&self, rhs: Self) -> Option<Self> {
        if rhs.fraction > self.fraction {
            return None;
        }
        Some(Self {
            fraction: self.fraction - rhs.fraction,
        })
    }

    fn halved(&self) -> Self {
        Self {
            fraction: self.fraction / Fraction::new(2_u64, 1_u64),
        }
    }
}
impl Default for Duration {
    fn default() -> Self {
        Self::zero()
    }
}
impl From<Fraction> for Duration {
    fn from(fraction: Fraction) -> Self {
        Self { fraction }
    }
}
impl Add for Duration {
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            fraction: self.fraction + rhs.fraction,
        }
    }
    type Output = Self;
}
impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.fraction += rhs.fraction
    }
}
impl Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator(), self.denominator())
    }
}

/// Parse duration spec.
///
/// Either explicit ratio (`"3/8"`) or note value code with optional
/// dots and rest marker (`"q"`, `"8d"`, `"16dd"`, `"4r"`).
///
/// # Example
/// ```
/// # use score_layout::primitives::Duration;
/// let dotted_quarter: Duration = "4d".parse().unwrap();
/// assert_eq!(dotted_quarter, Duration::new(3, 8).unwrap());
/// assert_eq!("h".parse::<Duration>().unwrap(), Duration::new(1, 2).unwrap());
/// assert!("5".parse::<Duration>().is_err());
/// ```
impl FromStr for Duration {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || LayoutError::UnsupportedFormat(s.to_string());
        let spec = s.trim();
        if let Some((num, den)) = spec.split_once('/') {
            let num: u64 = num.trim().parse().map_err(|_| unsupported())?;
            let den: u64 = den.trim().parse().map_err(|_| unsupported())?;
            if den == 0 {
                return Err(unsupported());
            }
            return Self::new(num, den);
        }
        let body = spec.strip_suffix('r').unwrap_or(spec);
        let value = body.trim_end_matches('d');
        let dots = body.len() - value.len();
        let denominator = match value {
            "w" | "1" => 1,
            "h" | "2" => 2,
            "q" | "4" => 4,
            "8" => 8,
            "16" => 16,
            "32" => 32,
            "64" => 64,
            "128" => 128,
            "256" => 256,
            _ => return Err(unsupported()),
        };
        let mut addition = Self::new(1, denominator)?;
        let mut duration = addition;
        for _ in 0..dots {
            addition = addition.halved();
            duration += addition;
        }
        Ok(duration)
    }
}
