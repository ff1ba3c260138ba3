//! Timed animation-class toggling for class-styled UI elements.
//!
//! Wraps a class-based animation stylesheet (classes such as
//! `animate__animated`, `animate__bounceIn`, `animate__delay-1s`): an
//! [`AnimationClassController`] applies an entrance class set when the host
//! activates it, removes it again after the configured duration, and toggles
//! a hover class on pointer enter/leave once the entrance animation has
//! settled. The controller is framework-agnostic; the host owns the element,
//! calls [`AnimationClassController::activate`] after attaching it, drives
//! [`AnimationClassController::advance`] from its frame or timer loop, and
//! calls [`AnimationClassController::cancel`] on teardown.

pub mod classes;
pub mod config;
pub mod controller;
pub mod element;

pub use classes::{CLASS_PREFIX, MASTER_TOKEN};
pub use config::{animation, AnimationConfig, AnimationSpeed, ConfigError};
pub use controller::{AnimationClassController, PointerEvent};
pub use element::AnimatedElement;
