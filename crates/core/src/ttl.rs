use crate::error::TriggerError;

/// Lowest time-to-live the build service accepts, in minutes.
pub const MIN_TTL_MINUTES: u32 = 180;

/// Highest time-to-live the build service accepts, in minutes.
pub const MAX_TTL_MINUTES: u32 = 540;

/// A time-to-live resolved against the service limits.
///
/// Values can only be obtained through [`TimeToLive::resolve`], so a
/// `TimeToLive` always lies within `MIN_TTL_MINUTES..=MAX_TTL_MINUTES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeToLive {
    minutes: u32,
    defaulted: bool,
}

impl TimeToLive {
    /// Applies the service's default policy to a requested TTL.
    ///
    /// An absent value and one below [`MIN_TTL_MINUTES`] are treated
    /// identically: both resolve to the minimum and are marked as
    /// defaulted. Values within the limits are used exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`TriggerError::TimeToLiveTooHigh`] if `requested` exceeds
    /// [`MAX_TTL_MINUTES`].
    pub fn resolve(requested: Option<u32>) -> Result<Self, TriggerError> {
        match requested {
            Some(minutes) if minutes > MAX_TTL_MINUTES => {
                Err(TriggerError::TimeToLiveTooHigh { requested: minutes })
            }
            Some(minutes) if minutes >= MIN_TTL_MINUTES => Ok(Self {
                minutes,
                defaulted: false,
            }),
            _ => Ok(Self {
                minutes: MIN_TTL_MINUTES,
                defaulted: true,
            }),
        }
    }

    /// The resolved time-to-live in minutes.
    pub fn minutes(self) -> u32 {
        self.minutes
    }

    /// Whether the value came from the default rather than the caller
    /// (unset, or raised from below the minimum).
    pub fn was_defaulted(self) -> bool {
        self.defaulted
    }
}
