// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_field_state`.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::sync::Once;

use peniko::Color;
use understory_field_state::{FieldState, Font, StyleAttributes, StyleRegistry};

fn all_states() -> [FieldState; 8] {
    core::array::from_fn(|bits| FieldState::from_bits_truncate(bits as u8))
}

fn anchors_only() -> StyleRegistry {
    let mut registry = StyleRegistry::new();
    for (state, size) in [
        (FieldState::DEFAULT, 17.0),
        (FieldState::ACTIVE, 12.0),
        (FieldState::DISABLED, 12.0),
    ] {
        registry.set_placeholder_attributes(
            Some(
                StyleAttributes::builder()
                    .font(Font::system(size))
                    .foreground(Color::from_rgb8(90, 90, 90))
                    .build(),
            ),
            state,
        );
        registry.set_line_color(Some(Color::from_rgb8(0, 122, 255)), state);
    }
    registry
}

fn fully_populated() -> StyleRegistry {
    let mut registry = StyleRegistry::new();
    for state in all_states() {
        registry.set_placeholder_attributes(
            Some(
                StyleAttributes::builder()
                    .font(Font::system(10.0 + f64::from(state.bits())))
                    .build(),
            ),
            state,
        );
        registry.set_line_color(Some(Color::BLACK), state);
    }
    registry
}

fn bench_field_state(c: &mut Criterion) {
    static PRINT_SIZES: Once = Once::new();
    PRINT_SIZES.call_once(|| {
        eprintln!(
            "sizes: FieldState={} StyleAttributes={} StyleRegistry={}",
            core::mem::size_of::<FieldState>(),
            core::mem::size_of::<StyleAttributes>(),
            core::mem::size_of::<StyleRegistry>(),
        );
    });

    let mut group = c.benchmark_group("field_state/derive");
    group.bench_function("all_flag_triples", |b| {
        b.iter(|| {
            for bits in 0..8_u8 {
                black_box(FieldState::derive(
                    black_box(bits & 1 != 0),
                    black_box(bits & 2 != 0),
                    black_box(bits & 4 != 0),
                ));
            }
        })
    });
    group.finish();

    let registries = [
        ("empty", StyleRegistry::new()),
        ("anchors", anchors_only()),
        ("exact", fully_populated()),
    ];

    let mut group = c.benchmark_group("field_state/resolve");
    for (name, registry) in &registries {
        group.bench_function(BenchmarkId::new("placeholder", name), |b| {
            b.iter(|| {
                for state in all_states() {
                    black_box(registry.placeholder_attributes(black_box(state)));
                }
            })
        });
        group.bench_function(BenchmarkId::new("line_color", name), |b| {
            b.iter(|| {
                for state in all_states() {
                    black_box(registry.line_color(black_box(state)));
                }
            })
        });
        group.bench_function(BenchmarkId::new("font", name), |b| {
            b.iter(|| black_box(registry.font(black_box(FieldState::ACTIVE))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_field_state);
criterion_main!(benches);
