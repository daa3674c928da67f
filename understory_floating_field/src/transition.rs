// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A reference placeholder animator for hosts without one.
//!
//! Hosts with a native animation system should forward
//! [`FieldHost::animate_placeholder`](crate::FieldHost::animate_placeholder)
//! to it. Hosts that redraw on a frame clock can instead keep a
//! [`Transition`] and sample it every frame:
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Rect;
//! use understory_field_state::Font;
//! use understory_floating_field::{PlaceholderFrame, Transition, TransitionSpec};
//!
//! let resting = PlaceholderFrame {
//!     rect: Rect::new(0.0, 16.0, 200.0, 50.0),
//!     font: Font::system(17.0),
//! };
//! let floated = PlaceholderFrame {
//!     rect: Rect::new(0.0, 0.0, 200.0, 16.0),
//!     font: Font::system(12.0),
//! };
//!
//! let start = Duration::from_millis(1_000);
//! let transition = Transition::new(resting, floated.clone(), TransitionSpec::default(), start);
//!
//! let halfway = transition.sample(start + Duration::from_millis(150));
//! assert!(halfway.font.size < 17.0 && halfway.font.size > 12.0);
//! assert_eq!(transition.sample(start + Duration::from_secs(1)), floated);
//! ```

use core::time::Duration;

use kurbo::Rect;

use crate::config::TransitionSpec;
use crate::host::PlaceholderFrame;

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    Rect::new(
        lerp(a.x0, b.x0, t),
        lerp(a.y0, b.y0, t),
        lerp(a.x1, b.x1, t),
        lerp(a.y1, b.y1, t),
    )
}

/// An in-flight interpolation between two placeholder frames.
///
/// Times are host clock readings; only differences matter.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    from: PlaceholderFrame,
    to: PlaceholderFrame,
    spec: TransitionSpec,
    started_at: Duration,
}

impl Transition {
    /// Starts a transition at `now`.
    #[must_use]
    pub fn new(
        from: PlaceholderFrame,
        to: PlaceholderFrame,
        spec: TransitionSpec,
        now: Duration,
    ) -> Self {
        Self {
            from,
            to,
            spec,
            started_at: now,
        }
    }

    /// The frame this transition ends on.
    #[must_use]
    #[inline]
    pub fn target(&self) -> &PlaceholderFrame {
        &self.to
    }

    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f64 {
        if self.spec.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed.as_secs_f64() / self.spec.duration.as_secs_f64()).min(1.0)
    }

    /// Returns `true` once the target has been reached.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }

    /// The interpolated frame at `now`.
    ///
    /// The font takes the target's family with an interpolated size. Once
    /// finished this returns the target exactly.
    #[must_use]
    pub fn sample(&self, now: Duration) -> PlaceholderFrame {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to.clone();
        }
        let t = self.spec.curve.apply(progress);
        PlaceholderFrame {
            rect: lerp_rect(self.from.rect, self.to.rect, t),
            font: self
                .to
                .font
                .scaled_to(lerp(self.from.font.size, self.to.font.size, t)),
        }
    }

    /// Redirects the transition to a new target, starting from the frame
    /// currently shown at `now`.
    pub fn retarget(&mut self, to: PlaceholderFrame, now: Duration) {
        self.from = self.sample(now);
        self.to = to;
        self.started_at = now;
    }
}
