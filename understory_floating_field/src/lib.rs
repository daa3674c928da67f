// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Floating Field: host-agnostic floating placeholder engine.
//!
//! A floating placeholder rests inline, where text would be typed, while a
//! field is empty and unfocused. It moves to a smaller label above the text
//! area once the field is focused or filled. This crate computes where the
//! placeholder and text area go, which font and colors apply in each state,
//! and when the placeholder should transition. The platform text control
//! stays in charge of focus, text storage, drawing and the animation itself.
//!
//! The pieces:
//!
//! - [`FloatingField`]: the composed engine a platform adapter delegates to.
//!   State and styling come from [`understory_field_state`].
//! - [`FieldHost`]: the trait the adapter implements to receive layout,
//!   redraw, restyle and animation requests.
//! - [`geometry`]: the placement math as free functions.
//! - [`Transition`] and [`Curve`]: a reference animator for hosts that
//!   sample frames themselves.
//!
//! ## Layout contract
//!
//! The top of the text area is always inset by the line height of the
//! `{ACTIVE}` font ([`FloatingField::top_inset`]), floated or not, so typing
//! never shifts the text baseline. Only the placeholder rectangle changes
//! between resting and floated placements.
//!
//! ## Transitions
//!
//! Every layout pass whose target differs from the last one hands the host a
//! [`TransitionTicket`]. Requests are last-write-wins: when the host reports
//! completion through [`FloatingField::finish_transition`], the final frame is
//! recomputed from the current state, and stale tickets are flagged.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: float backend for Kurbo and Peniko.
//! - `serde`: serialize and deserialize [`FieldConfig`], [`TransitionSpec`]
//!   and [`Curve`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod curve;
mod field;
pub mod geometry;
mod host;
mod transition;

pub use config::{ConfigError, FieldConfig, TransitionSpec};
pub use curve::Curve;
pub use field::{FloatingField, TransitionOutcome};
pub use host::{FieldHost, PlaceholderFrame, TransitionTicket, UnderlineStroke};
pub use transition::Transition;
