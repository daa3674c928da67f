// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placeholder text attributes.
//!
//! [`StyleAttributes`] is an immutable snapshot mapping a small, closed set of
//! [`AttributeKey`]s to values. It is built once with
//! [`StyleAttributesBuilder`] and then shared by reference count.

use alloc::borrow::Cow;
use alloc::rc::Rc;
use core::fmt;

use peniko::Color;
use smallvec::SmallVec;

/// A font descriptor with the vertical metrics needed for layout.
///
/// `descent` follows the usual typographic convention of being negative
/// (below the baseline), so [`Font::line_height`] is `ascent - descent`.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family name, resolved by the host.
    pub family: Cow<'static, str>,
    /// Point size.
    pub size: f64,
    /// Distance from the baseline to the top of the tallest glyphs.
    pub ascent: f64,
    /// Distance from the baseline to the bottom of the lowest glyphs (negative).
    pub descent: f64,
}

impl Font {
    /// Family name used by [`Font::system`].
    pub const SYSTEM_FAMILY: &'static str = "system-ui";

    /// Default point size of the system font.
    pub const SYSTEM_SIZE: f64 = 14.0;

    /// Creates a font with metrics estimated from its size.
    ///
    /// Hosts that know the real metrics should use [`Font::with_metrics`].
    #[must_use]
    pub fn new(family: impl Into<Cow<'static, str>>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            ascent: size * 0.95,
            descent: size * -0.25,
        }
    }

    /// The platform system font at `size`.
    #[must_use]
    pub fn system(size: f64) -> Self {
        Self::new(Self::SYSTEM_FAMILY, size)
    }

    /// Replaces the estimated metrics with measured ones.
    #[must_use]
    pub fn with_metrics(mut self, ascent: f64, descent: f64) -> Self {
        self.ascent = ascent;
        self.descent = descent;
        self
    }

    /// Returns this font at a different point size, scaling its metrics.
    #[must_use]
    pub fn scaled_to(&self, size: f64) -> Self {
        let factor = if self.size == 0.0 { 0.0 } else { size / self.size };
        Self {
            family: self.family.clone(),
            size,
            ascent: self.ascent * factor,
            descent: self.descent * factor,
        }
    }

    /// Ascent plus the magnitude of the descent.
    #[must_use]
    #[inline]
    pub fn line_height(&self) -> f64 {
        self.ascent - self.descent
    }
}

/// Key of a placeholder text attribute.
///
/// Keys are plain identifiers so callers can forward attribute maps from
/// other text systems. Only the keys listed as constants are understood;
/// anything else is dropped when building [`StyleAttributes`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeKey(u16);

impl AttributeKey {
    /// The placeholder font ([`AttributeValue::Font`]).
    pub const FONT: Self = Self(0);
    /// The placeholder text color ([`AttributeValue::Color`]).
    pub const FOREGROUND: Self = Self(1);

    /// Creates a key from its raw index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the raw index of this key.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }

    /// Returns `true` if `value` is the kind of value this key holds.
    ///
    /// Always `false` for unsupported keys.
    #[must_use]
    pub fn accepts(self, value: &AttributeValue) -> bool {
        matches!(
            (self, value),
            (Self::FONT, AttributeValue::Font(_)) | (Self::FOREGROUND, AttributeValue::Color(_))
        )
    }
}

impl fmt::Debug for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::FONT => f.write_str("AttributeKey::FONT"),
            Self::FOREGROUND => f.write_str("AttributeKey::FOREGROUND"),
            Self(index) => f.debug_tuple("AttributeKey").field(&index).finish(),
        }
    }
}

/// Value of a placeholder text attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A font.
    Font(Font),
    /// A color.
    Color(Color),
}

type Entries = SmallVec<[(AttributeKey, AttributeValue); 2]>;

/// An immutable, order-insensitive set of placeholder text attributes.
///
/// Cloning is cheap (`Rc`). Two snapshots compare equal when they hold the same
/// key/value pairs, regardless of the order they were set in.
///
/// ```rust
/// use peniko::Color;
/// use understory_field_state::{Font, StyleAttributes};
///
/// let a = StyleAttributes::builder()
///     .font(Font::system(12.0))
///     .foreground(Color::from_rgb8(0, 0, 255))
///     .build();
/// let b = StyleAttributes::builder()
///     .foreground(Color::from_rgb8(0, 0, 255))
///     .font(Font::system(12.0))
///     .build();
/// assert_eq!(a, b);
/// assert_eq!(a.font().map(|f| f.size), Some(12.0));
/// ```
#[derive(Clone, Debug)]
pub struct StyleAttributes {
    /// Sorted by key.
    entries: Rc<Entries>,
}

impl StyleAttributes {
    /// Starts building a new snapshot.
    #[must_use]
    pub fn builder() -> StyleAttributesBuilder {
        StyleAttributesBuilder::new()
    }

    /// The library-default attributes: system font, black text.
    #[must_use]
    pub fn baseline() -> Self {
        Self::builder()
            .font(Font::system(Font::SYSTEM_SIZE))
            .foreground(Color::BLACK)
            .build()
    }

    /// Returns `true` if no attribute is set.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of attributes set.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.entries
            .binary_search_by_key(&key, |(k, _)| *k)
            .ok()
            .map(|idx| &self.entries[idx].1)
    }

    /// Returns the font, if set.
    #[must_use]
    pub fn font(&self) -> Option<&Font> {
        match self.get(AttributeKey::FONT) {
            Some(AttributeValue::Font(font)) => Some(font),
            _ => None,
        }
    }

    /// Returns the text color, if set.
    #[must_use]
    pub fn foreground(&self) -> Option<Color> {
        match self.get(AttributeKey::FOREGROUND) {
            Some(AttributeValue::Color(color)) => Some(*color),
            _ => None,
        }
    }

    /// Iterates over the attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValue)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Returns `true` if both snapshots share the same storage.
    #[must_use]
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }
}

impl PartialEq for StyleAttributes {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.entries[..] == other.entries[..]
    }
}

impl FromIterator<(AttributeKey, AttributeValue)> for StyleAttributes {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, AttributeValue)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StyleAttributesBuilder::new(), |builder, (key, value)| {
                builder.set(key, value)
            })
            .build()
    }
}

/// Builder for [`StyleAttributes`].
#[derive(Debug, Default)]
pub struct StyleAttributesBuilder {
    entries: Entries,
}

impl StyleAttributesBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value for the key.
    ///
    /// Unsupported keys, and values of the wrong kind for a known key, are
    /// ignored.
    #[must_use]
    pub fn set(mut self, key: AttributeKey, value: AttributeValue) -> Self {
        if !key.accepts(&value) {
            tracing::trace!(?key, "ignoring unsupported placeholder attribute");
            return self;
        }
        match self.entries.binary_search_by_key(&key, |(k, _)| *k) {
            Ok(idx) => self.entries[idx].1 = value,
            Err(idx) => self.entries.insert(idx, (key, value)),
        }
        self
    }

    /// Sets the font.
    #[must_use]
    pub fn font(self, font: Font) -> Self {
        self.set(AttributeKey::FONT, AttributeValue::Font(font))
    }

    /// Sets the text color.
    #[must_use]
    pub fn foreground(self, color: Color) -> Self {
        self.set(AttributeKey::FOREGROUND, AttributeValue::Color(color))
    }

    /// Builds the snapshot.
    #[must_use]
    pub fn build(self) -> StyleAttributes {
        StyleAttributes {
            entries: Rc::new(self.entries),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    #[test]
    fn line_height_uses_descent_magnitude() {
        let font = Font::system(16.0).with_metrics(12.0, -4.0);
        assert_eq!(font.line_height(), 16.0);
    }

    #[test]
    fn scaled_font_scales_metrics() {
        let font = Font::system(16.0).with_metrics(12.0, -4.0);
        let small = font.scaled_to(8.0);
        assert_eq!(small.ascent, 6.0);
        assert_eq!(small.descent, -2.0);
        assert_eq!(small.family, font.family);
    }

    #[test]
    fn unsupported_key_is_ignored() {
        let attrs = StyleAttributes::builder()
            .set(
                AttributeKey::new(42),
                AttributeValue::Color(Color::from_rgb8(255, 0, 0)),
            )
            .foreground(Color::BLACK)
            .build();
        assert_eq!(attrs.len(), 1);
        assert!(attrs.get(AttributeKey::new(42)).is_none());
    }

    #[test]
    fn mismatched_value_kind_is_ignored() {
        let attrs = StyleAttributes::builder()
            .set(
                AttributeKey::FONT,
                AttributeValue::Color(Color::from_rgb8(255, 0, 0)),
            )
            .build();
        assert!(attrs.is_empty());
        assert!(attrs.font().is_none());
    }

    #[test]
    fn later_set_replaces_value() {
        let attrs = StyleAttributes::builder()
            .font(Font::system(12.0))
            .font(Font::system(20.0))
            .build();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.font().map(|f| f.size), Some(20.0));
    }

    #[test]
    fn iteration_is_in_key_order() {
        let attrs: StyleAttributes = [
            (
                AttributeKey::FOREGROUND,
                AttributeValue::Color(Color::WHITE),
            ),
            (AttributeKey::FONT, AttributeValue::Font(Font::system(9.0))),
        ]
        .into_iter()
        .collect();
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, [AttributeKey::FONT, AttributeKey::FOREGROUND]);
    }

    #[test]
    fn clone_shares_storage() {
        let attrs = StyleAttributes::baseline();
        let copy = attrs.clone();
        assert!(attrs.ptr_eq(&copy));
        assert!(!attrs.ptr_eq(&StyleAttributes::baseline()));
        assert_eq!(attrs, StyleAttributes::baseline());
    }

    #[test]
    fn key_debug_names_known_keys() {
        assert_eq!(format!("{:?}", AttributeKey::FONT), "AttributeKey::FONT");
        assert_eq!(format!("{:?}", AttributeKey::new(7)), "AttributeKey(7)");
    }
}
