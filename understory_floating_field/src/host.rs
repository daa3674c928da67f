// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the field engine and the platform text control.

use kurbo::{Line, Rect};
use peniko::Color;
use understory_field_state::{Font, StyleAttributes};

use crate::config::TransitionSpec;

/// Frame and font the placeholder should end up with.
#[derive(Clone, Debug, PartialEq)]
pub struct PlaceholderFrame {
    /// Placeholder rectangle in the field's coordinate space.
    pub rect: Rect,
    /// Placeholder font.
    pub font: Font,
}

/// Identifies one requested placeholder transition.
///
/// Tickets increase monotonically per field; only the most recent one is
/// current. See [`FloatingField::finish_transition`](crate::FloatingField::finish_transition).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionTicket(pub u64);

/// A single horizontal underline to stroke.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UnderlineStroke {
    /// The line, along the bottom edge of the drawn rectangle.
    pub line: Line,
    /// Stroke width.
    pub width: f64,
    /// Stroke color.
    pub color: Color,
}

/// Services the platform text control provides to the field engine.
///
/// The host owns focus tracking, text storage and rendering. It reports
/// interaction changes to [`FloatingField`](crate::FloatingField) and
/// receives layout, redraw and animation requests through this trait.
pub trait FieldHost {
    /// The platform's default text rectangle for `bounds`.
    fn text_rect(&self, bounds: Rect) -> Rect {
        bounds
    }

    /// The platform's default editing rectangle for `bounds`.
    fn editing_rect(&self, bounds: Rect) -> Rect {
        self.text_rect(bounds)
    }

    /// Marks layout as invalid; the host should call
    /// [`FloatingField::layout`](crate::FloatingField::layout) on its next pass.
    fn request_layout(&mut self);

    /// Marks the field as needing a redraw.
    fn request_redraw(&mut self);

    /// Shows `text` as the placeholder, styled with `attributes`.
    fn set_placeholder_text(&mut self, text: &str, attributes: &StyleAttributes);

    /// Starts moving the placeholder to `target`.
    ///
    /// Fire-and-forget: the host animates asynchronously and reports
    /// completion through
    /// [`FloatingField::finish_transition`](crate::FloatingField::finish_transition).
    fn animate_placeholder(
        &mut self,
        target: &PlaceholderFrame,
        transition: &TransitionSpec,
        ticket: TransitionTicket,
    );

    /// Strokes the underline.
    fn stroke_underline(&mut self, stroke: &UnderlineStroke);
}
