// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_floating_field`.

use core::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_field_state::{Font, StyleAttributes};
use understory_floating_field::{
    FieldHost, FloatingField, PlaceholderFrame, Transition, TransitionSpec, TransitionTicket,
    UnderlineStroke,
};

/// Host that discards every request.
struct SinkHost;

impl FieldHost for SinkHost {
    fn request_layout(&mut self) {}

    fn request_redraw(&mut self) {}

    fn set_placeholder_text(&mut self, text: &str, attributes: &StyleAttributes) {
        black_box((text, attributes));
    }

    fn animate_placeholder(
        &mut self,
        target: &PlaceholderFrame,
        _: &TransitionSpec,
        ticket: TransitionTicket,
    ) {
        black_box((target, ticket));
    }

    fn stroke_underline(&mut self, stroke: &UnderlineStroke) {
        black_box(stroke);
    }
}

fn bench_floating_field(c: &mut Criterion) {
    let bounds = Rect::new(0.0, 0.0, 320.0, 56.0);

    let mut group = c.benchmark_group("floating_field/layout");

    group.bench_function("unchanged", |b| {
        let mut host = SinkHost;
        let mut field = FloatingField::default();
        field.set_bounds(bounds, &mut host);
        field.layout(&mut host);
        b.iter(|| black_box(field.layout(&mut host)))
    });

    group.bench_function("focus_toggle", |b| {
        b.iter_batched(
            || {
                let mut field = FloatingField::default();
                field.set_bounds(bounds, &mut SinkHost);
                field.layout(&mut SinkHost);
                field
            },
            |mut field| {
                let mut host = SinkHost;
                field.set_focused(true, &mut host);
                black_box(field.layout(&mut host));
                field.set_focused(false, &mut host);
                black_box(field.layout(&mut host));
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("draw", |b| {
        let mut host = SinkHost;
        let mut field = FloatingField::default();
        field.set_bounds(bounds, &mut host);
        b.iter(|| field.draw(&mut host))
    });

    group.finish();

    let mut group = c.benchmark_group("floating_field/transition");
    let transition = Transition::new(
        PlaceholderFrame {
            rect: Rect::new(0.0, 16.0, 320.0, 56.0),
            font: Font::system(17.0),
        },
        PlaceholderFrame {
            rect: Rect::new(0.0, 0.0, 320.0, 16.0),
            font: Font::system(12.0),
        },
        TransitionSpec::default(),
        Duration::ZERO,
    );
    group.bench_function("sample", |b| {
        b.iter(|| black_box(transition.sample(black_box(Duration::from_millis(120)))))
    });
    group.finish();
}

criterion_group!(benches, bench_floating_field);
criterion_main!(benches);
