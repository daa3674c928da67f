// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement math for the placeholder, text area, accessory and underline.
//!
//! These are free functions over plain rectangles so hosts can reuse them
//! without a [`FloatingField`](crate::FloatingField).

use kurbo::{Line, Point, Rect, Size};
use understory_field_state::FieldState;

/// Removes `inset` from the top of `rect`.
///
/// The result never has a negative height; an inset larger than the rectangle
/// collapses it onto its bottom edge.
#[must_use]
pub fn inset_top(rect: Rect, inset: f64) -> Rect {
    let rect = rect.abs();
    Rect::new(rect.x0, (rect.y0 + inset).min(rect.y1), rect.x1, rect.y1)
}

/// Placeholder rectangle for `state`.
///
/// `text_rect` is the host's default text rectangle and `top_inset` the
/// reserved floating band. In the resting position the placeholder overlaps
/// the text area (`text_rect` inset by `top_inset`). When the state is
/// floated (active or filled) it occupies the band above that area, spanning
/// the full width of `bounds`.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_field_state::FieldState;
/// use understory_floating_field::geometry::placeholder_rect;
///
/// let bounds = Rect::new(0.0, 0.0, 200.0, 50.0);
/// let resting = placeholder_rect(FieldState::DEFAULT, bounds, bounds, 16.0);
/// assert_eq!(resting, Rect::new(0.0, 16.0, 200.0, 50.0));
///
/// let floated = placeholder_rect(FieldState::FILLED, bounds, bounds, 16.0);
/// assert_eq!(floated, Rect::new(0.0, 0.0, 200.0, 16.0));
/// ```
#[must_use]
pub fn placeholder_rect(state: FieldState, bounds: Rect, text_rect: Rect, top_inset: f64) -> Rect {
    let resting = inset_top(text_rect, top_inset);
    if !state.is_floated() {
        return resting;
    }
    let height = (bounds.height() - resting.height()).max(0.0);
    Rect::from_origin_size(bounds.origin(), Size::new(bounds.width(), height))
}

/// Rectangle for a trailing accessory (clear button, icon) of `fitted` size.
///
/// `bounds` is first inset vertically by `vertical_inset`. The accessory takes
/// the full remaining height, is right-aligned, and is at most
/// `max_width_fraction` of the inset width.
#[must_use]
pub fn accessory_rect(
    bounds: Rect,
    fitted: Size,
    vertical_inset: f64,
    max_width_fraction: f64,
) -> Rect {
    let bounds = bounds.abs();
    let y0 = (bounds.y0 + vertical_inset).min(bounds.center().y);
    let y1 = (bounds.y1 - vertical_inset).max(y0);
    let width = fitted
        .width
        .max(0.0)
        .min(max_width_fraction * bounds.width());
    Rect::new(bounds.x1 - width, y0, bounds.x1, y1)
}

/// The underline along the bottom edge of `rect`.
#[must_use]
pub fn underline(rect: Rect) -> Line {
    Line::new(Point::new(rect.x0, rect.y1), Point::new(rect.x1, rect.y1))
}
