//! Time abstraction traits for platform-agnostic timing.
//!
//! The tracker never reads a clock itself; the host supplies one through
//! [`TimeSource`]. For the common case of a free-running 32-bit millisecond
//! counter, [`TickInstant`] and [`TickDuration`] are ready-made implementations
//! that stay correct across counter rollover.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    ///
    /// Implementations backed by a wrapping hardware counter must compute the
    /// delta with wrapping (modular) subtraction, so that an elapsed time
    /// spanning a counter rollover still comes out correct. Signed comparison
    /// of raw counter values does not have this property.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// A point on a free-running 32-bit millisecond counter.
///
/// Models timers like Arduino's `millis()`: the counter wraps around roughly
/// every 49.7 days, and [`TickInstant::duration_since`] uses wrapping
/// subtraction so deltas across the wrap remain correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInstant(pub u32);

/// A span of milliseconds between two [`TickInstant`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickDuration(pub u32);

impl TimeDuration for TickDuration {
    const ZERO: Self = TickDuration(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        TickDuration(millis as u32)
    }
}

impl TimeInstant for TickInstant {
    type Duration = TickDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TickDuration(self.0.wrapping_sub(earlier.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_delta_without_rollover() {
        let earlier = TickInstant(1_000);
        let later = TickInstant(1_060);
        assert_eq!(later.duration_since(earlier), TickDuration(60));
    }

    #[test]
    fn tick_delta_across_rollover() {
        // 20 ticks before the wrap, 40 ticks after it
        let earlier = TickInstant(u32::MAX - 19);
        let later = TickInstant(40);
        assert_eq!(later.duration_since(earlier), TickDuration(60));
    }

    #[test]
    fn tick_duration_millis_conversion() {
        assert_eq!(TickDuration::from_millis(50).as_millis(), 50);
        assert_eq!(TickDuration::ZERO.as_millis(), 0);
    }
}
