//! Shared test infrastructure for debounced-input integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::{Cell, RefCell};
use debounced_input::{InputPin, Level, PinMode, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing (wrapping u64 millisecond counter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.wrapping_sub(earlier.0))
    }
}

// ============================================================================
// Mock Pin
// ============================================================================

/// Mock pin steered through shared cells, recording requested pin modes
pub struct MockPin<'a> {
    level: &'a Cell<Level>,
    modes: &'a RefCell<heapless::Vec<PinMode, 4>>,
}

impl<'a> MockPin<'a> {
    pub fn new(
        level: &'a Cell<Level>,
        modes: &'a RefCell<heapless::Vec<PinMode, 4>>,
    ) -> Self {
        Self { level, modes }
    }
}

impl InputPin for MockPin<'_> {
    fn configure(&mut self, mode: PinMode) {
        let _ = self.modes.borrow_mut().push(mode);
    }

    fn read(&mut self) -> Level {
        self.level.get()
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockClock {
    current_time: Cell<TestInstant>,
}

impl MockClock {
    pub fn new() -> Self {
        Self {
            current_time: Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0.wrapping_add(millis)));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockClock {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}
