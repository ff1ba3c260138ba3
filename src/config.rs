//! Animation configuration.
//!
//! A configuration is built fluently and validated once, when it is handed
//! to a controller. All fields are cosmetic: a config describes which
//! stylesheet classes to apply and for how long, nothing more.
//!
//! # Example
//! ```
//! use animate_classes::{animation, AnimationSpeed};
//!
//! let config = animation()
//!     .entrance("bounceIn")
//!     .duration_seconds(2.0)
//!     .speed(AnimationSpeed::Fast)
//!     .delay_seconds(1)
//!     .hover("pulse");
//! assert!(config.validate().is_ok());
//! ```

use std::str::FromStr;
use std::time::Duration;

use crate::classes::is_class_token;

/// Speed modifier recognized by the animation stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationSpeed {
    Slow,
    Slower,
    Fast,
    Faster,
}

impl AnimationSpeed {
    /// The stylesheet token for this speed.
    pub fn token(&self) -> &'static str {
        match self {
            AnimationSpeed::Slow => "slow",
            AnimationSpeed::Slower => "slower",
            AnimationSpeed::Fast => "fast",
            AnimationSpeed::Faster => "faster",
        }
    }
}

impl FromStr for AnimationSpeed {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slow" => Ok(AnimationSpeed::Slow),
            "slower" => Ok(AnimationSpeed::Slower),
            "fast" => Ok(AnimationSpeed::Fast),
            "faster" => Ok(AnimationSpeed::Faster),
            other => Err(ConfigError::UnknownSpeed(other.to_string())),
        }
    }
}

/// Configuration rejected at controller construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("animation name {0:?} is not a valid class token")]
    InvalidAnimationName(String),
    #[error("animation duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f32),
    #[error("unknown animation speed {0:?} (expected slow, slower, fast or faster)")]
    UnknownSpeed(String),
}

/// Configuration for one animated element.
///
/// Treated as immutable for the lifetime of the controller that holds it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Entrance animation name, applied once on activation.
    pub entrance: Option<String>,
    /// How long the entrance class set stays applied, in seconds.
    pub duration_seconds: f32,
    /// Speed modifier applied alongside the entrance animation.
    pub speed: Option<AnimationSpeed>,
    /// Start-delay modifier in whole seconds. Zero means no delay class.
    pub delay_seconds: u32,
    /// Animation toggled while the pointer is over the element.
    pub hover: Option<String>,
}

/// Create an empty animation configuration.
pub fn animation() -> AnimationConfig {
    AnimationConfig::new()
}

impl AnimationConfig {
    pub fn new() -> Self {
        Self {
            entrance: None,
            duration_seconds: 2.0,
            speed: None,
            delay_seconds: 0,
            hover: None,
        }
    }

    /// Set the entrance animation name.
    pub fn entrance(mut self, name: impl Into<String>) -> Self {
        self.entrance = Some(name.into());
        self
    }

    /// Set how long the entrance class set stays applied.
    pub fn duration_seconds(mut self, seconds: f32) -> Self {
        self.duration_seconds = seconds;
        self
    }

    /// Set the speed modifier.
    pub fn speed(mut self, speed: AnimationSpeed) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set the start delay in whole seconds.
    pub fn delay_seconds(mut self, seconds: u32) -> Self {
        self.delay_seconds = seconds;
        self
    }

    /// Set the hover animation name.
    pub fn hover(mut self, name: impl Into<String>) -> Self {
        self.hover = Some(name.into());
        self
    }

    /// Check that the duration is a positive number representable as a
    /// [`Duration`] and that any animation names are class-name-safe tokens.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration_seconds > 0.0)
            || Duration::try_from_secs_f32(self.duration_seconds).is_err()
        {
            return Err(ConfigError::InvalidDuration(self.duration_seconds));
        }
        for name in [&self.entrance, &self.hover].into_iter().flatten() {
            if !is_class_token(name) {
                return Err(ConfigError::InvalidAnimationName(name.clone()));
            }
        }
        Ok(())
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self::new()
    }
}
