// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction state lattice.
//!
//! A [`FieldState`] is a set of independent flags. All eight combinations are
//! representable and usable as registry keys; only the *derived* current state
//! of a field is normalized (see [`FieldState::derive`]).

bitflags::bitflags! {
    /// A combination of interaction flags describing a text field's mode.
    ///
    /// The empty set is the default (resting, enabled, unfocused) state.
    ///
    /// ```rust
    /// use understory_field_state::FieldState;
    ///
    /// let state = FieldState::ACTIVE | FieldState::FILLED;
    /// assert!(state.contains(FieldState::ACTIVE));
    /// assert!(!state.contains(FieldState::DISABLED));
    /// assert!(FieldState::DEFAULT.is_empty());
    /// ```
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct FieldState: u8 {
        /// The field has keyboard focus.
        const ACTIVE = 1 << 0;
        /// The field has non-empty content.
        const FILLED = 1 << 1;
        /// The field does not accept interaction.
        const DISABLED = 1 << 2;
    }
}

impl FieldState {
    /// The empty combination.
    pub const DEFAULT: Self = Self::empty();

    /// Derives the current state from raw host flags.
    ///
    /// Disabled always wins over active: a focused but disabled field is
    /// reported as disabled only. `FILLED` is independent of both.
    ///
    /// ```rust
    /// use understory_field_state::FieldState;
    ///
    /// assert_eq!(FieldState::derive(true, true, false), FieldState::ACTIVE);
    /// assert_eq!(FieldState::derive(true, false, false), FieldState::DISABLED);
    /// assert_eq!(
    ///     FieldState::derive(false, true, true),
    ///     FieldState::FILLED,
    /// );
    /// ```
    #[must_use]
    pub const fn derive(focused: bool, enabled: bool, has_text: bool) -> Self {
        let mut bits = 0;
        if focused {
            bits |= Self::ACTIVE.bits();
        }
        if !enabled {
            bits &= !Self::ACTIVE.bits();
            bits |= Self::DISABLED.bits();
        }
        if has_text {
            bits |= Self::FILLED.bits();
        }
        Self::from_bits_retain(bits)
    }

    /// Returns the single-flag anchor this state falls back to.
    ///
    /// `ACTIVE` takes precedence over `DISABLED`, and `FILLED` is never an
    /// anchor on its own. States without either flag anchor on
    /// [`FieldState::DEFAULT`].
    #[must_use]
    pub const fn anchor(self) -> Self {
        if self.contains(Self::ACTIVE) {
            Self::ACTIVE
        } else if self.contains(Self::DISABLED) {
            Self::DISABLED
        } else {
            Self::DEFAULT
        }
    }

    /// Returns `true` if the placeholder sits in the floated position.
    #[must_use]
    #[inline]
    pub const fn is_floated(self) -> bool {
        self.intersects(Self::ACTIVE.union(Self::FILLED))
    }
}

/// Raw interaction flags reported by the host control.
///
/// Unlike [`FieldState`], these may be contradictory (focused while disabled)
/// for a short time; [`FieldFlags::current_state`] normalizes them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldFlags {
    /// Whether the host control currently holds keyboard focus.
    pub focused: bool,
    /// Whether the host control accepts interaction.
    pub enabled: bool,
    /// Whether the host control's content is non-empty.
    pub has_text: bool,
}

impl Default for FieldFlags {
    fn default() -> Self {
        Self {
            focused: false,
            enabled: true,
            has_text: false,
        }
    }
}

impl FieldFlags {
    /// Derives the normalized current state.
    #[must_use]
    #[inline]
    pub const fn current_state(&self) -> FieldState {
        FieldState::derive(self.focused, self.enabled, self.has_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_state_never_active_and_disabled() {
        for bits in 0..8_u8 {
            let focused = bits & 1 != 0;
            let enabled = bits & 2 != 0;
            let has_text = bits & 4 != 0;
            let state = FieldState::derive(focused, enabled, has_text);
            assert!(
                !state.contains(FieldState::ACTIVE | FieldState::DISABLED),
                "{focused} {enabled} {has_text} produced {state:?}"
            );
            assert_eq!(state.contains(FieldState::FILLED), has_text);
            assert_eq!(state.contains(FieldState::DISABLED), !enabled);
            assert_eq!(state.contains(FieldState::ACTIVE), focused && enabled);
        }
    }

    #[test]
    fn default_flags_derive_default_state() {
        assert_eq!(FieldFlags::default().current_state(), FieldState::DEFAULT);
    }

    #[test]
    fn focused_and_disabled_reports_disabled_only() {
        let flags = FieldFlags {
            focused: true,
            enabled: false,
            has_text: true,
        };
        assert_eq!(
            flags.current_state(),
            FieldState::DISABLED | FieldState::FILLED
        );
    }

    #[test]
    fn anchor_prefers_active_then_disabled() {
        assert_eq!(
            (FieldState::ACTIVE | FieldState::FILLED).anchor(),
            FieldState::ACTIVE
        );
        assert_eq!(
            (FieldState::DISABLED | FieldState::FILLED).anchor(),
            FieldState::DISABLED
        );
        // Not reachable through derivation, but still a valid registry key.
        assert_eq!(
            (FieldState::ACTIVE | FieldState::DISABLED).anchor(),
            FieldState::ACTIVE
        );
        assert_eq!(FieldState::FILLED.anchor(), FieldState::DEFAULT);
        assert_eq!(FieldState::DEFAULT.anchor(), FieldState::DEFAULT);
    }

    #[test]
    fn floated_when_active_or_filled() {
        assert!(!FieldState::DEFAULT.is_floated());
        assert!(!FieldState::DISABLED.is_floated());
        assert!(FieldState::ACTIVE.is_floated());
        assert!(FieldState::FILLED.is_floated());
        assert!((FieldState::DISABLED | FieldState::FILLED).is_floated());
    }
}
