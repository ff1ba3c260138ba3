//! Timed class-lifecycle controller.
//!
//! One controller owns one element. The host integration layer calls
//! [`AnimationClassController::activate`] once the element is attached and
//! styled, then drives [`AnimationClassController::advance`] from its frame
//! or timer loop until it returns `false`. Pointer enter/leave events are
//! forwarded as they arrive; the controller keeps them from colliding with
//! an entrance animation that is still resident.
//!
//! Nothing here fails at runtime: absent configuration fields make the
//! corresponding operations no-ops, and the worst outcome of any call is a
//! missing visual effect.

use std::time::{Duration, Instant};

use crate::classes::{self, MASTER_TOKEN};
use crate::config::{AnimationConfig, ConfigError};
use crate::element::AnimatedElement;

/// Pointer event forwarded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Enter,
    Leave,
}

/// Applies and removes animation classes on one element at the right times.
///
/// The entrance class set is applied by [`activate`](Self::activate) and
/// removed when the armed deadline passes during
/// [`advance`](Self::advance). The master class stays on the element after
/// deactivation; the stylesheet library keys its bookkeeping off it, and the
/// original behavior is preserved deliberately.
pub struct AnimationClassController<E: AnimatedElement> {
    element: E,
    config: AnimationConfig,
    activated: bool,
    /// Flips to true exactly once, when the entrance class set is removed.
    /// Gates the hover animation so the two class sets never overlap.
    settled: bool,
    deactivate_at: Option<Instant>,
}

impl<E: AnimatedElement> AnimationClassController<E> {
    /// Validate `config` and bind the controller to `element`.
    ///
    /// Nothing is applied to the element yet; the host calls
    /// [`activate`](Self::activate) at its post-attach lifecycle hook.
    pub fn new(element: E, config: AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            element,
            config,
            activated: false,
            settled: false,
            deactivate_at: None,
        })
    }

    /// Apply the entrance class set and arm the deactivation deadline.
    ///
    /// Fires once; later calls are no-ops. Sets `--animation-duration` so
    /// the stylesheet sizes its animation to the configured duration, adds
    /// the master class unconditionally, then the delay, speed and entrance
    /// classes that are configured.
    pub fn activate(&mut self) {
        self.activate_at(Instant::now());
    }

    /// [`activate`](Self::activate) with an explicit clock reading, for
    /// hosts that carry their own frame timestamp.
    pub fn activate_at(&mut self, now: Instant) {
        if self.activated {
            return;
        }
        self.activated = true;

        self.element.set_style_property(
            "--animation-duration",
            &format!("{}s", self.config.duration_seconds),
        );
        self.add_class(MASTER_TOKEN);
        if self.config.delay_seconds != 0 {
            self.add_class(&classes::delay_token(self.config.delay_seconds));
        }
        if let Some(speed) = self.config.speed {
            self.add_class(speed.token());
        }
        if let Some(name) = self.config.entrance.clone() {
            self.add_class(&name);
        }

        // Validation guarantees the duration fits a Duration; a deadline
        // past the clock's range stays disarmed instead of panicking.
        let duration = Duration::from_secs_f32(self.config.duration_seconds);
        self.deactivate_at = now.checked_add(duration);
        log::debug!(
            "entrance animation {:?} activated, deactivating after {:?}",
            self.config.entrance,
            duration
        );
    }

    /// Advance the cleanup timer, firing deactivation when its deadline has
    /// passed. Returns true while a deadline is still pending.
    ///
    /// Deactivation removes the entrance, speed and delay classes, leaves
    /// the master class in place, and marks the controller settled.
    pub fn advance(&mut self) -> bool {
        self.advance_at(Instant::now())
    }

    /// [`advance`](Self::advance) with an explicit clock reading.
    pub fn advance_at(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.deactivate_at else {
            return false;
        };
        if now < deadline {
            return true;
        }
        self.deactivate_at = None;
        self.deactivate();
        false
    }

    /// Disarm a pending deactivation deadline without touching the element.
    ///
    /// The host calls this when the element is torn down before the
    /// entrance animation has run out, so no later [`advance`](Self::advance)
    /// mutates a dead element.
    pub fn cancel(&mut self) {
        if self.deactivate_at.take().is_some() {
            log::debug!("pending deactivation cancelled");
        }
    }

    fn deactivate(&mut self) {
        if let Some(name) = self.config.entrance.clone() {
            self.remove_class(&name);
        }
        if let Some(speed) = self.config.speed {
            self.remove_class(speed.token());
        }
        if self.config.delay_seconds != 0 {
            self.remove_class(&classes::delay_token(self.config.delay_seconds));
        }
        self.settled = true;
        log::debug!("entrance animation settled");
    }

    /// Dispatch a pointer event forwarded by the host.
    pub fn event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter => self.pointer_enter(),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    /// Apply the hover class. No-op until the entrance animation has
    /// settled, so the two animations' classes never coexist.
    pub fn pointer_enter(&mut self) {
        if self.settled {
            if let Some(name) = self.config.hover.clone() {
                log::trace!("hover animation {name:?} on");
                self.add_class(&name);
            }
        }
    }

    /// Remove the hover class. Safe to call even if it was never applied;
    /// class removal is idempotent.
    pub fn pointer_leave(&mut self) {
        if let Some(name) = self.config.hover.clone() {
            log::trace!("hover animation {name:?} off");
            self.remove_class(&name);
        }
    }

    /// Whether the entrance animation has been cleaned up.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Whether a deactivation deadline is still pending.
    pub fn is_animating(&self) -> bool {
        self.deactivate_at.is_some()
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    /// Consume the controller and hand the element back.
    pub fn into_element(self) -> E {
        self.element
    }

    fn add_class(&mut self, token: &str) {
        if !token.is_empty() {
            self.element.add_class(&classes::prefixed(token));
        }
    }

    fn remove_class(&mut self, token: &str) {
        if !token.is_empty() {
            self.element.remove_class(&classes::prefixed(token));
        }
    }
}
