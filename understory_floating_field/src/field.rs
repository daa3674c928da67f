// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composed floating placeholder field.

use alloc::string::String;

use kurbo::{Rect, Size};
use peniko::Color;
use understory_field_state::{FieldFlags, FieldState, Font, StyleAttributes, StyleRegistry};

use crate::config::{ConfigError, FieldConfig};
use crate::geometry;
use crate::host::{FieldHost, PlaceholderFrame, TransitionTicket, UnderlineStroke};

/// Result of a host reporting that a placeholder transition finished.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionOutcome {
    /// The frame the placeholder must show now, recomputed from current state.
    pub frame: PlaceholderFrame,
    /// `true` if a newer transition was requested after the finished one.
    pub stale: bool,
}

/// Floating placeholder engine for one text field.
///
/// A platform adapter owns a `FloatingField`, forwards interaction events to
/// it, and implements [`FieldHost`] to receive layout, redraw, restyle and
/// animation requests. The field never touches platform UI itself.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_field_state::{FieldState, StyleAttributes};
/// use understory_floating_field::{
///     FieldConfig, FieldHost, FloatingField, PlaceholderFrame, TransitionSpec, TransitionTicket,
///     UnderlineStroke,
/// };
///
/// #[derive(Default)]
/// struct Host {
///     animations: Vec<PlaceholderFrame>,
/// }
///
/// impl FieldHost for Host {
///     fn request_layout(&mut self) {}
///     fn request_redraw(&mut self) {}
///     fn set_placeholder_text(&mut self, _: &str, _: &StyleAttributes) {}
///     fn animate_placeholder(&mut self, target: &PlaceholderFrame, _: &TransitionSpec, _: TransitionTicket) {
///         self.animations.push(target.clone());
///     }
///     fn stroke_underline(&mut self, _: &UnderlineStroke) {}
/// }
///
/// let mut host = Host::default();
/// let mut field = FloatingField::new(FieldConfig::default());
/// field.set_bounds(Rect::new(0.0, 0.0, 240.0, 48.0), &mut host);
/// field.layout(&mut host);
///
/// field.set_focused(true, &mut host);
/// assert_eq!(field.current_state(), FieldState::ACTIVE);
/// field.layout(&mut host);
///
/// // Resting, then floated to the top of the bounds.
/// assert_eq!(host.animations.len(), 2);
/// assert_eq!(host.animations[1].rect.y0, 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct FloatingField {
    flags: FieldFlags,
    registry: StyleRegistry,
    config: FieldConfig,
    placeholder: String,
    bounds: Rect,
    /// Last target handed to the host.
    target: Option<PlaceholderFrame>,
    generation: u64,
}

impl Default for FloatingField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl FloatingField {
    /// Creates a field with an empty style registry.
    #[must_use]
    pub fn new(config: FieldConfig) -> Self {
        Self::with_registry(StyleRegistry::new(), config)
    }

    /// Creates a field with a prepared style registry.
    #[must_use]
    pub fn with_registry(registry: StyleRegistry, config: FieldConfig) -> Self {
        Self {
            flags: FieldFlags::default(),
            registry,
            config,
            placeholder: String::new(),
            bounds: Rect::ZERO,
            target: None,
            generation: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Returns the style registry.
    #[must_use]
    #[inline]
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Returns the raw host flags.
    #[must_use]
    #[inline]
    pub fn flags(&self) -> FieldFlags {
        self.flags
    }

    /// The normalized current state.
    #[must_use]
    #[inline]
    pub fn current_state(&self) -> FieldState {
        self.flags.current_state()
    }

    // --- Interaction events ---

    /// Reports a focus change. Returns `true` if the current state changed.
    pub fn set_focused(&mut self, focused: bool, host: &mut impl FieldHost) -> bool {
        self.update_flags(host, |flags| flags.focused = focused)
    }

    /// Reports an enabled change. Returns `true` if the current state changed.
    pub fn set_enabled(&mut self, enabled: bool, host: &mut impl FieldHost) -> bool {
        self.update_flags(host, |flags| flags.enabled = enabled)
    }

    /// Reports whether the content is non-empty. Returns `true` if the current
    /// state changed.
    pub fn set_has_text(&mut self, has_text: bool, host: &mut impl FieldHost) -> bool {
        self.update_flags(host, |flags| flags.has_text = has_text)
    }

    /// Reports new content. Returns `true` if the current state changed.
    pub fn set_text(&mut self, text: &str, host: &mut impl FieldHost) -> bool {
        self.set_has_text(!text.is_empty(), host)
    }

    fn update_flags(
        &mut self,
        host: &mut impl FieldHost,
        update: impl FnOnce(&mut FieldFlags),
    ) -> bool {
        let before = self.current_state();
        update(&mut self.flags);
        let after = self.current_state();
        if before == after {
            return false;
        }
        tracing::debug!(?before, ?after, "field state changed");
        self.restyle(host);
        host.request_layout();
        host.request_redraw();
        true
    }

    /// Returns the field bounds used by [`FloatingField::layout`].
    #[must_use]
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Updates the field bounds, requesting layout if they changed.
    pub fn set_bounds(&mut self, bounds: Rect, host: &mut impl FieldHost) {
        if self.bounds != bounds {
            self.bounds = bounds;
            host.request_layout();
        }
    }

    // --- Placeholder text and styling ---

    /// Returns the placeholder text.
    #[must_use]
    #[inline]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Sets the placeholder text; `None` clears it.
    pub fn set_placeholder(&mut self, text: Option<&str>, host: &mut impl FieldHost) {
        self.placeholder.clear();
        self.placeholder.push_str(text.unwrap_or_default());
        self.restyle(host);
        host.request_layout();
    }

    /// Registers placeholder attributes for exactly `state`; `None` removes them.
    ///
    /// The displayed placeholder is restyled and layout is requested.
    pub fn set_placeholder_attributes(
        &mut self,
        attributes: Option<StyleAttributes>,
        state: FieldState,
        host: &mut impl FieldHost,
    ) {
        self.registry.set_placeholder_attributes(attributes, state);
        self.restyle(host);
        host.request_layout();
    }

    /// Resolves placeholder attributes for `state`.
    #[must_use]
    pub fn placeholder_attributes(&self, state: FieldState) -> &StyleAttributes {
        self.registry.placeholder_attributes(state)
    }

    /// Registers the underline color for exactly `state`; `None` removes it.
    pub fn set_line_color(
        &mut self,
        color: Option<Color>,
        state: FieldState,
        host: &mut impl FieldHost,
    ) {
        if self.registry.set_line_color(color, state) {
            host.request_redraw();
        }
    }

    /// Resolves the underline color for `state`.
    #[must_use]
    pub fn line_color(&self, state: FieldState) -> Color {
        self.registry.line_color(state)
    }

    /// Returns the underline stroke width.
    #[must_use]
    #[inline]
    pub fn underline_stroke_width(&self) -> f64 {
        self.config.underline_stroke_width
    }

    /// Sets the underline stroke width and requests a redraw.
    pub fn set_underline_stroke_width(
        &mut self,
        width: f64,
        host: &mut impl FieldHost,
    ) -> Result<(), ConfigError> {
        FieldConfig::check_stroke_width(width)?;
        if self.config.underline_stroke_width != width {
            self.config.underline_stroke_width = width;
            host.request_redraw();
        }
        Ok(())
    }

    fn restyle(&self, host: &mut impl FieldHost) {
        let attributes = self.registry.placeholder_attributes(self.current_state());
        host.set_placeholder_text(&self.placeholder, attributes);
    }

    // --- Geometry ---

    /// Height of the floating band: the line height of the `{ACTIVE}` font.
    ///
    /// Independent of the current state so the text area never reflows when
    /// the placeholder floats.
    #[must_use]
    pub fn top_inset(&self) -> f64 {
        self.registry.font(FieldState::ACTIVE).line_height()
    }

    /// Placeholder font for the current state.
    #[must_use]
    pub fn current_font(&self) -> Font {
        self.registry.font(self.current_state())
    }

    /// Placeholder rectangle for `bounds` in the current state.
    #[must_use]
    pub fn placeholder_rect(&self, host: &impl FieldHost, bounds: Rect) -> Rect {
        geometry::placeholder_rect(
            self.current_state(),
            bounds,
            host.text_rect(bounds),
            self.top_inset(),
        )
    }

    /// Text rectangle for `bounds`: below the floating band in every state.
    #[must_use]
    pub fn text_rect(&self, host: &impl FieldHost, bounds: Rect) -> Rect {
        geometry::inset_top(host.text_rect(bounds), self.top_inset())
    }

    /// Editing rectangle for `bounds`: below the floating band in every state.
    #[must_use]
    pub fn editing_rect(&self, host: &impl FieldHost, bounds: Rect) -> Rect {
        geometry::inset_top(host.editing_rect(bounds), self.top_inset())
    }

    /// Rectangle for a trailing accessory of `fitted` size.
    #[must_use]
    pub fn accessory_rect(&self, bounds: Rect, fitted: Size) -> Rect {
        geometry::accessory_rect(
            bounds,
            fitted,
            self.config.accessory_vertical_inset,
            self.config.accessory_max_width_fraction,
        )
    }

    /// The placeholder frame for the current state and bounds.
    #[must_use]
    pub fn placeholder_frame(&self, host: &impl FieldHost) -> PlaceholderFrame {
        PlaceholderFrame {
            rect: self.placeholder_rect(host, self.bounds),
            font: self.current_font(),
        }
    }

    // --- Layout and drawing ---

    /// Runs a layout pass.
    ///
    /// Recomputes the placeholder frame and, if it differs from the last
    /// requested target, asks the host to animate towards it. Returns the
    /// ticket of the new transition, or `None` when nothing moved. Always
    /// requests an underline redraw.
    pub fn layout(&mut self, host: &mut impl FieldHost) -> Option<TransitionTicket> {
        let frame = self.placeholder_frame(&*host);
        host.request_redraw();
        if self.target.as_ref() == Some(&frame) {
            return None;
        }
        self.generation += 1;
        let ticket = TransitionTicket(self.generation);
        tracing::trace!(?ticket, rect = ?frame.rect, size = frame.font.size, "placeholder transition");
        host.animate_placeholder(&frame, &self.config.transition, ticket);
        self.target = Some(frame);
        Some(ticket)
    }

    /// Returns the ticket of the most recently requested transition.
    #[must_use]
    pub fn current_ticket(&self) -> Option<TransitionTicket> {
        (self.generation > 0).then_some(TransitionTicket(self.generation))
    }

    /// Handles a host reporting that the transition for `ticket` finished.
    ///
    /// The returned frame is always recomputed from the current state, never
    /// taken from the finished transition, so a stale animation cannot
    /// overwrite a newer final state.
    #[must_use]
    pub fn finish_transition(
        &self,
        host: &impl FieldHost,
        ticket: TransitionTicket,
    ) -> TransitionOutcome {
        let stale = ticket.0 != self.generation;
        if stale {
            tracing::trace!(?ticket, current = self.generation, "stale placeholder transition");
        }
        TransitionOutcome {
            frame: self.placeholder_frame(host),
            stale,
        }
    }

    /// The underline for `rect` in the current state.
    #[must_use]
    pub fn underline_stroke(&self, rect: Rect) -> UnderlineStroke {
        UnderlineStroke {
            line: geometry::underline(rect),
            width: self.config.underline_stroke_width,
            color: self.line_color(self.current_state()),
        }
    }

    /// Draws the underline along the bottom edge of `rect`.
    pub fn draw_underline(&self, host: &mut impl FieldHost, rect: Rect) {
        host.stroke_underline(&self.underline_stroke(rect));
    }

    /// Draws the underline along the bottom edge of the field bounds.
    pub fn draw(&self, host: &mut impl FieldHost) {
        self.draw_underline(host, self.bounds);
    }
}
