// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Field State: interaction states and per-state style resolution
//! for text fields.
//!
//! A text field moves through a small lattice of states built from three
//! independent flags: **active** (focused), **filled** (has content) and
//! **disabled**. This crate turns raw host flags into a normalized
//! [`FieldState`], and resolves styling registered per state through a short
//! fallback chain:
//!
//! **Exact → Anchor (`{ACTIVE}` or `{DISABLED}`) → Default → Baseline**
//!
//! This lets callers register only the three anchor styles and have every
//! filled/unfilled combination inherit sensibly, while any exact combination
//! can still be overridden.
//!
//! ## Minimal example
//!
//! ```rust
//! use peniko::Color;
//! use understory_field_state::{FieldState, Font, StyleAttributes, StyleRegistry};
//!
//! let mut registry = StyleRegistry::new();
//! registry.set_placeholder_attributes(
//!     Some(StyleAttributes::builder().font(Font::system(17.0)).build()),
//!     FieldState::DEFAULT,
//! );
//! registry.set_placeholder_attributes(
//!     Some(
//!         StyleAttributes::builder()
//!             .font(Font::system(12.0))
//!             .foreground(Color::from_rgb8(0, 122, 255))
//!             .build(),
//!     ),
//!     FieldState::ACTIVE,
//! );
//!
//! // A focused field with content: inherits the `{ACTIVE}` anchor.
//! let state = FieldState::derive(true, true, true);
//! assert_eq!(registry.font(state).size, 12.0);
//!
//! // Focused but disabled is reported as disabled only, which falls back to default.
//! let state = FieldState::derive(true, false, false);
//! assert_eq!(state, FieldState::DISABLED);
//! assert_eq!(registry.font(state).size, 17.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: serialize and deserialize [`FieldState`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod attributes;
mod registry;
mod state;

pub use attributes::{AttributeKey, AttributeValue, Font, StyleAttributes, StyleAttributesBuilder};
pub use registry::{Resolved, ResolvedFrom, StyleRegistry};
pub use state::{FieldFlags, FieldState};
