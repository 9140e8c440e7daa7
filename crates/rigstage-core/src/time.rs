//! Time representation for the timeline and the playback clock
//!
//! Times are rational numbers of seconds. The playback scheduler advances a
//! virtual 60 Hz clock, so keeping exact arithmetic means tick accumulation
//! and loop wrapping never drift the way floating-point seconds would.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A point in time (or a length of time) in seconds, held as a rational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Time {
    /// Seconds as a rational number
    value: Rational64,
}

impl Time {
    /// `numerator / denominator` seconds.
    #[inline]
    pub fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            value: Rational64::new(numerator, denominator),
        }
    }

    /// Construct without reducing. `denominator` must be non-zero.
    #[inline]
    pub const fn from_raw(numerator: i64, denominator: i64) -> Self {
        Self {
            value: Rational64::new_raw(numerator, denominator),
        }
    }

    /// Whole seconds.
    #[inline]
    pub fn from_secs(seconds: i64) -> Self {
        Self::new(seconds, 1)
    }

    /// From float seconds. May round within one microsecond.
    pub fn from_seconds_f64(seconds: f64) -> Self {
        const PRECISION: i64 = 1_000_000;
        Self {
            value: Rational64::new((seconds * PRECISION as f64).round() as i64, PRECISION),
        }
    }

    /// To float seconds.
    #[inline]
    pub fn to_seconds_f64(self) -> f64 {
        *self.value.numer() as f64 / *self.value.denom() as f64
    }

    /// Zero time constant.
    pub const ZERO: Self = Self {
        value: Rational64::new_raw(0, 1),
    };

    #[inline]
    pub fn is_zero(self) -> bool {
        *self.value.numer() == 0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        *self.value.numer() < 0
    }

    /// Clamp into `[lo, hi]`.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        if self < lo {
            lo
        } else if self > hi {
            hi
        } else {
            self
        }
    }

    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self > other {
            self
        } else {
            other
        }
    }

    #[inline]
    pub fn min(self, other: Self) -> Self {
        if self < other {
            self
        } else {
            other
        }
    }

    /// True when this time falls on a whole second.
    #[inline]
    pub fn is_whole_second(self) -> bool {
        *self.value.denom() == 1
    }

    /// Clock-style display, `mm:ss.mmm`.
    pub fn format_clock(self) -> String {
        let total = self.to_seconds_f64().max(0.0);
        let mins = (total / 60.0).floor() as u64;
        let secs = total % 60.0;
        format!("{:02}:{:02}.{:03}", mins, secs.floor() as u64, ((secs % 1.0) * 1000.0).floor() as u64)
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Time {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
        }
    }
}

impl Sub for Time {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            value: self.value - rhs.value,
        }
    }
}

impl Neg for Time {
    type Output = Self;
    fn neg(self) -> Self {
        Self { value: -self.value }
    }
}

impl Mul<i64> for Time {
    type Output = Self;
    fn mul(self, rhs: i64) -> Self {
        Self {
            value: self.value * rhs,
        }
    }
}

impl Div<i64> for Time {
    type Output = Self;
    fn div(self, rhs: i64) -> Self {
        Self {
            value: self.value / rhs,
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.to_seconds_f64())
    }
}

/// Rate of the virtual playback clock, in ticks per second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickRate {
    /// Ticks per second
    pub ticks_per_second: u32,
}

impl TickRate {
    #[inline]
    pub const fn new(ticks_per_second: u32) -> Self {
        Self { ticks_per_second }
    }

    /// Length of one tick.
    #[inline]
    pub fn step(self) -> Time {
        Time::new(1, self.ticks_per_second as i64)
    }

    /// The scheduler's logical clock rate.
    pub const HZ_60: Self = Self::new(60);
}

impl Default for TickRate {
    fn default() -> Self {
        Self::HZ_60
    }
}

impl fmt::Display for TickRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.ticks_per_second)
    }
}

/// A half-open span of timeline time: start inclusive, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    /// Start time (inclusive)
    pub start: Time,
    /// Length of the span
    pub duration: Time,
}

impl TimeSpan {
    #[inline]
    pub fn new(start: Time, duration: Time) -> Self {
        Self { start, duration }
    }

    /// End time (exclusive).
    #[inline]
    pub fn end(self) -> Time {
        self.start + self.duration
    }

    /// Check if a time falls inside this span.
    #[inline]
    pub fn contains(self, time: Time) -> bool {
        time >= self.start && time < self.end()
    }

    /// Check if two spans overlap.
    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Empty span at zero.
    pub const EMPTY: Self = Self {
        start: Time::ZERO,
        duration: Time::ZERO,
    };
}

impl Default for TimeSpan {
    fn default() -> Self {
        Self::EMPTY
    }
}
