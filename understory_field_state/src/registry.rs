// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-state style registry and fallback resolution.

use hashbrown::HashMap;
use peniko::Color;

use crate::attributes::{Font, StyleAttributes};
use crate::state::FieldState;

/// Which level of the fallback chain produced a resolved value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResolvedFrom {
    /// The entry registered for the exact state.
    Exact,
    /// The entry registered for the state's anchor (`{ACTIVE}` or `{DISABLED}`).
    Anchor(FieldState),
    /// The entry registered for [`FieldState::DEFAULT`].
    Default,
    /// Nothing was registered; the hard-coded baseline was used.
    Baseline,
}

/// A resolved value together with where it came from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolved<T> {
    /// The resolved value.
    pub value: T,
    /// The fallback level that produced `value`.
    pub from: ResolvedFrom,
}

/// Walks `state → anchor → default` in `map` and returns the first hit.
fn lookup<V>(map: &HashMap<FieldState, V>, state: FieldState) -> Option<(&V, ResolvedFrom)> {
    if let Some(value) = map.get(&state) {
        return Some((value, ResolvedFrom::Exact));
    }
    let anchor = state.anchor();
    // A default anchor is looked up by the last step.
    if anchor != FieldState::DEFAULT
        && let Some(value) = map.get(&anchor)
    {
        return Some((value, ResolvedFrom::Anchor(anchor)));
    }
    map.get(&FieldState::DEFAULT)
        .map(|value| (value, ResolvedFrom::Default))
}

/// Placeholder attributes and underline colors registered per state.
///
/// Keys are exact [`FieldState`] combinations. Lookups never fail: on a miss
/// the registry falls back to the state's anchor, then to the default state,
/// then to a hard-coded baseline. The first hit wins; partial attribute sets
/// are never merged across levels.
///
/// ```rust
/// use peniko::Color;
/// use understory_field_state::{FieldState, StyleAttributes, StyleRegistry};
///
/// let blue = Color::from_rgb8(0, 0, 255);
/// let mut registry = StyleRegistry::new();
/// registry.set_line_color(Some(blue), FieldState::ACTIVE);
///
/// // `{ACTIVE, FILLED}` inherits from the `{ACTIVE}` anchor.
/// assert_eq!(registry.line_color(FieldState::ACTIVE | FieldState::FILLED), blue);
/// // Nothing covers `{FILLED}`, so the transparent baseline is used.
/// assert_eq!(registry.line_color(FieldState::FILLED), Color::TRANSPARENT);
/// ```
#[derive(Clone, Debug)]
pub struct StyleRegistry {
    placeholder: HashMap<FieldState, StyleAttributes>,
    line_colors: HashMap<FieldState, Color>,
    baseline: StyleAttributes,
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRegistry {
    /// Final fallback for underline colors.
    pub const BASELINE_LINE_COLOR: Color = Color::TRANSPARENT;

    /// Creates an empty registry using [`StyleAttributes::baseline`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_baseline(StyleAttributes::baseline())
    }

    /// Creates an empty registry with custom baseline attributes.
    #[must_use]
    pub fn with_baseline(baseline: StyleAttributes) -> Self {
        Self {
            placeholder: HashMap::new(),
            line_colors: HashMap::new(),
            baseline,
        }
    }

    /// Returns the baseline attributes.
    #[must_use]
    #[inline]
    pub fn baseline(&self) -> &StyleAttributes {
        &self.baseline
    }

    /// Registers placeholder attributes for exactly `state`.
    ///
    /// `None` removes the entry. Returns `true` if the stored entry changed.
    pub fn set_placeholder_attributes(
        &mut self,
        attributes: Option<StyleAttributes>,
        state: FieldState,
    ) -> bool {
        tracing::debug!(?state, present = attributes.is_some(), "placeholder attributes");
        match attributes {
            Some(attributes) => self
                .placeholder
                .insert(state, attributes.clone())
                .is_none_or(|previous| previous != attributes),
            None => self.placeholder.remove(&state).is_some(),
        }
    }

    /// Returns the attributes registered for exactly `state`, without fallback.
    #[must_use]
    pub fn registered_placeholder_attributes(&self, state: FieldState) -> Option<&StyleAttributes> {
        self.placeholder.get(&state)
    }

    /// Resolves placeholder attributes for `state`, reporting the fallback level.
    #[must_use]
    pub fn resolve_placeholder(&self, state: FieldState) -> Resolved<&StyleAttributes> {
        let (value, from) =
            lookup(&self.placeholder, state).unwrap_or((&self.baseline, ResolvedFrom::Baseline));
        tracing::trace!(?state, ?from, "resolved placeholder attributes");
        Resolved { value, from }
    }

    /// Resolves placeholder attributes for `state`.
    #[must_use]
    pub fn placeholder_attributes(&self, state: FieldState) -> &StyleAttributes {
        self.resolve_placeholder(state).value
    }

    /// Resolves the placeholder font for `state`.
    ///
    /// Falls back to the baseline font, then to the system font, when the
    /// resolved attributes carry no font.
    #[must_use]
    pub fn font(&self, state: FieldState) -> Font {
        self.placeholder_attributes(state)
            .font()
            .or_else(|| self.baseline.font())
            .cloned()
            .unwrap_or_else(|| Font::system(Font::SYSTEM_SIZE))
    }

    /// Registers an underline color for exactly `state`.
    ///
    /// `None` removes the entry. Returns `true` if the stored entry changed.
    pub fn set_line_color(&mut self, color: Option<Color>, state: FieldState) -> bool {
        tracing::debug!(?state, ?color, "line color");
        match color {
            Some(color) => self
                .line_colors
                .insert(state, color)
                .is_none_or(|previous| previous != color),
            None => self.line_colors.remove(&state).is_some(),
        }
    }

    /// Returns the color registered for exactly `state`, without fallback.
    #[must_use]
    pub fn registered_line_color(&self, state: FieldState) -> Option<Color> {
        self.line_colors.get(&state).copied()
    }

    /// Resolves the underline color for `state`, reporting the fallback level.
    #[must_use]
    pub fn resolve_line_color(&self, state: FieldState) -> Resolved<Color> {
        let (value, from) = lookup(&self.line_colors, state)
            .map(|(color, from)| (*color, from))
            .unwrap_or((Self::BASELINE_LINE_COLOR, ResolvedFrom::Baseline));
        Resolved { value, from }
    }

    /// Resolves the underline color for `state`.
    #[must_use]
    pub fn line_color(&self, state: FieldState) -> Color {
        self.resolve_line_color(state).value
    }
}
