//! Core types for pin levels and wiring polarity.

/// Electrical level of a digital input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Pin reads low.
    Low,

    /// Pin reads high.
    High,
}

/// Input configuration requested from the pin hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Plain floating input; an external pull-down resistor is expected.
    Input,

    /// Input with the internal pull-up resistor enabled.
    PullUpInput,
}

/// Which electrical level counts as "pressed".
///
/// Determined by the wiring: a button against ground with a pull-up resistor
/// idles high and is active-low; a button against supply with an external
/// pull-down idles low and is active-high.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    /// Pressed reads [`Level::Low`] (pull-up wiring).
    ActiveLow,

    /// Pressed reads [`Level::High`] (external pull-down wiring).
    ActiveHigh,
}

impl ActiveLevel {
    /// Derives the polarity from a "use internal pull-up" flag.
    pub fn from_pull_up(use_pull_up: bool) -> Self {
        if use_pull_up {
            ActiveLevel::ActiveLow
        } else {
            ActiveLevel::ActiveHigh
        }
    }

    /// The level a pressed input reads.
    pub fn active(self) -> Level {
        match self {
            ActiveLevel::ActiveLow => Level::Low,
            ActiveLevel::ActiveHigh => Level::High,
        }
    }

    /// The level a released input rests at.
    pub fn idle(self) -> Level {
        match self {
            ActiveLevel::ActiveLow => Level::High,
            ActiveLevel::ActiveHigh => Level::Low,
        }
    }

    /// The pin configuration matching this wiring.
    pub fn pin_mode(self) -> PinMode {
        match self {
            ActiveLevel::ActiveLow => PinMode::PullUpInput,
            ActiveLevel::ActiveHigh => PinMode::Input,
        }
    }
}

impl Default for ActiveLevel {
    fn default() -> Self {
        ActiveLevel::ActiveLow
    }
}
