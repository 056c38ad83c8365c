//! Debounced input tracker with stability timing and press-edge detection.
//!
//! Provides [`InputTracker`] which filters contact bounce out of a single
//! mechanical digital input, handling stability timing, edge detection and
//! wiring polarity. Also defines the [`InputPin`] trait for hardware
//! abstraction.

use crate::DEFAULT_DEBOUNCE_MS;
use crate::time::{TimeDuration, TimeInstant, TimeSource};
use crate::types::{ActiveLevel, Level, PinMode};

/// Trait for abstracting digital input hardware.
///
/// Implement this for your input hardware (GPIO pin, port expander bit, etc.)
/// to let the tracker configure and sample it.
pub trait InputPin {
    /// Applies the requested input configuration.
    ///
    /// Called once from [`InputTracker::begin`]. Handle any hardware errors
    /// internally - this method cannot fail.
    fn configure(&mut self, mode: PinMode);

    /// Samples the current electrical level of the pin.
    ///
    /// Called on every [`InputTracker::update`]. Handle any hardware errors
    /// internally - this method cannot fail.
    fn read(&mut self) -> Level;
}

/// Tracks one mechanical digital input and filters out contact bounce.
///
/// The tracker owns its pin and is driven by periodic [`update`] calls from a
/// polling loop. A raw level change is only accepted as the new stable level
/// once the input has held it for longer than the debounce window; every
/// flicker inside the window re-arms the timer, so a chattering contact never
/// stabilizes until it settles. Transitions into the active level raise a
/// one-shot press edge readable through [`was_pressed`].
///
/// Each physical input needs its own tracker instance; instances do not
/// interact. All operations are infallible and non-blocking, and the tracker
/// tolerates being polled faster or slower than the debounce window.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `P` - Pin implementation type
/// * `T` - Time source implementation type
///
/// [`update`]: InputTracker::update
/// [`was_pressed`]: InputTracker::was_pressed
pub struct InputTracker<'t, I: TimeInstant, P: InputPin, T: TimeSource<I>> {
    pin: P,
    time_source: &'t T,
    active_level: ActiveLevel,
    debounce_window: I::Duration,
    raw_level: Level,
    stable_level: Level,
    last_change: Option<I>,
    pressed_edge: bool,
}

impl<'t, I: TimeInstant, P: InputPin, T: TimeSource<I>> InputTracker<'t, I, P, T> {
    /// Creates a tracker with the default configuration: pull-up wiring
    /// (active-low) and a 50 ms debounce window.
    ///
    /// Both tracked levels start at the fixed default [`Level::High`], which
    /// matches the idle level of pull-up wiring only. Call [`begin`] before the
    /// first [`update`] to configure the pin and establish the idle baseline
    /// for the configured wiring.
    ///
    /// [`begin`]: InputTracker::begin
    /// [`update`]: InputTracker::update
    pub fn new(pin: P, time_source: &'t T) -> Self {
        Self {
            pin,
            time_source,
            active_level: ActiveLevel::default(),
            debounce_window: I::Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            raw_level: Level::High,
            stable_level: Level::High,
            last_change: None,
            pressed_edge: false,
        }
    }

    /// Selects the wiring: `true` for the internal pull-up (active-low),
    /// `false` for an external pull-down (active-high).
    ///
    /// Configuration is fixed once [`begin`] runs.
    ///
    /// [`begin`]: InputTracker::begin
    pub fn with_pull_up(mut self, use_pull_up: bool) -> Self {
        self.active_level = ActiveLevel::from_pull_up(use_pull_up);
        self
    }

    /// Sets the debounce window.
    ///
    /// The window boundary is exclusive: a raw level must hold for strictly
    /// longer than the window before it is accepted. A zero window therefore
    /// accepts any change on the first update at least 1 ms after it.
    ///
    /// Configuration is fixed once [`begin`] runs.
    ///
    /// [`begin`]: InputTracker::begin
    pub fn with_debounce_window(mut self, window: I::Duration) -> Self {
        self.debounce_window = window;
        self
    }

    /// Configures the pin and establishes the idle baseline.
    ///
    /// Puts the pin into the mode matching the wiring (pull-up input or plain
    /// input) and sets both the raw and stable levels to the idle level of the
    /// configured polarity.
    ///
    /// Call this once before the first [`update`]. Updating without it is
    /// defined but leaves the levels at the constructor default of
    /// [`Level::High`], which is the correct baseline only for pull-up wiring,
    /// and leaves the pin unconfigured.
    ///
    /// [`update`]: InputTracker::update
    pub fn begin(&mut self) {
        self.pin.configure(self.active_level.pin_mode());
        self.stable_level = self.active_level.idle();
        self.raw_level = self.stable_level;
    }

    /// Samples the pin and advances the debounce state machine.
    ///
    /// Call periodically from the polling loop. Each call:
    ///
    /// 1. Clears the press edge flag.
    /// 2. Records a raw level change and restarts the debounce timer. Every
    ///    flicker re-arms the window, so the input must settle for a full
    ///    uninterrupted window before it can stabilize.
    /// 3. Once the raw level has held for strictly longer than the window and
    ///    differs from the stable level, commits it as the new stable level.
    ///    The press edge is raised only for transitions into the active level;
    ///    releases commit silently.
    ///
    /// Elapsed time comes from [`TimeInstant::duration_since`], whose modular
    /// arithmetic keeps the comparison correct across clock rollover.
    pub fn update(&mut self) {
        let raw = self.pin.read();
        let now = self.time_source.now();

        self.pressed_edge = false;

        if raw != self.raw_level {
            self.raw_level = raw;
            self.last_change = Some(now);
        }

        if let Some(changed_at) = self.last_change {
            let settled = now.duration_since(changed_at);
            if settled.as_millis() > self.debounce_window.as_millis()
                && self.stable_level != self.raw_level
            {
                if self.raw_level == self.active_level.active() {
                    self.pressed_edge = true;
                }
                self.stable_level = self.raw_level;
            }
        }
    }

    /// Returns true if the last [`update`] detected a debounced press.
    ///
    /// The flag is one-shot per press: it is raised in the update cycle that
    /// commits the transition into the active level and cleared at the start
    /// of the next [`update`]. Reading it does not reset it, so repeated calls
    /// between updates return the same value. Query it once per cycle,
    /// immediately after [`update`].
    ///
    /// [`update`]: InputTracker::update
    pub fn was_pressed(&self) -> bool {
        self.pressed_edge
    }

    /// Returns true while the stable level is the active level.
    ///
    /// Pure query; never mutates state.
    pub fn is_pressed(&self) -> bool {
        self.stable_level == self.active_level.active()
    }

    /// Returns the last accepted (debounced) level.
    pub fn stable_level(&self) -> Level {
        self.stable_level
    }

    /// Returns the last raw sample observed.
    pub fn raw_level(&self) -> Level {
        self.raw_level
    }

    /// Returns the configured polarity.
    pub fn active_level(&self) -> ActiveLevel {
        self.active_level
    }

    /// Returns the configured debounce window.
    pub fn debounce_window(&self) -> I::Duration {
        self.debounce_window
    }
}
