//! Timed camera position transitions.
//!
//! At most one transition is in flight. Starting a new one replaces the
//! previous transition atomically, so two tweens never write the camera in
//! the same tick. Progress is measured from wall-clock time, not frame
//! counts, which keeps the motion stable across missed or late frames.

use std::time::Duration;

use glam::Vec3;
use web_time::Instant;

use crate::util::easing::EasingFunction;

/// Identity of one started transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionId(u64);

/// A single position tween from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransition {
    /// Identity handed out by [`TransitionAnimator::start`].
    pub id: TransitionId,
    /// Position at progress 0.
    pub from: Vec3,
    /// Position at progress 1.
    pub to: Vec3,
    /// Wall-clock start.
    pub started: Instant,
    /// Total duration.
    pub duration: Duration,
    /// Easing curve applied to linear progress.
    pub easing: EasingFunction,
}

impl CameraTransition {
    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Interpolated position at `now`. Exactly `to` once complete.
    #[must_use]
    pub fn position_at(&self, now: Instant) -> Vec3 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.evaluate(progress))
    }
}

/// Owner of the single optional in-flight transition.
#[derive(Debug, Clone)]
pub struct TransitionAnimator {
    active: Option<CameraTransition>,
    next_id: u64,
    easing: EasingFunction,
}

impl TransitionAnimator {
    /// Create an idle animator using `easing` for future transitions.
    #[must_use]
    pub fn new(easing: EasingFunction) -> Self {
        Self {
            active: None,
            next_id: 0,
            easing,
        }
    }

    /// Change the curve used by transitions started from now on.
    pub fn set_easing(&mut self, easing: EasingFunction) {
        self.easing = easing;
    }

    /// Begin a transition, replacing any transition already in flight.
    pub fn start(
        &mut self,
        from: Vec3,
        to: Vec3,
        duration: Duration,
        now: Instant,
    ) -> TransitionId {
        let id = TransitionId(self.next_id);
        self.next_id += 1;

        if let Some(previous) = self.active.take() {
            log::debug!(
                "transition {:?} superseded by {id:?}",
                previous.id
            );
        }

        self.active = Some(CameraTransition {
            id,
            from,
            to,
            started: now,
            duration,
            easing: self.easing,
        });
        id
    }

    /// Drop the in-flight transition, returning its id.
    pub fn cancel(&mut self) -> Option<TransitionId> {
        self.active.take().map(|t| t.id)
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the in-flight transition.
    #[must_use]
    pub fn active_id(&self) -> Option<TransitionId> {
        self.active.as_ref().map(|t| t.id)
    }

    /// The in-flight transition, if any.
    #[must_use]
    pub fn active(&self) -> Option<&CameraTransition> {
        self.active.as_ref()
    }

    /// Advance to `now`, returning the position to apply this tick.
    ///
    /// The transition retires itself on the sample that reaches progress 1.
    pub fn sample(&mut self, now: Instant) -> Option<Vec3> {
        let transition = self.active?;
        let position = transition.position_at(now);
        if transition.progress(now) >= 1.0 {
            self.active = None;
        }
        Some(position)
    }
}

impl Default for TransitionAnimator {
    fn default() -> Self {
        Self::new(EasingFunction::default())
    }
}
