// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the gesture-to-card path.
//!
//! Measures:
//! - Swipe classification
//! - Cursor stepping over a loaded feed
//! - A full drag through the deck (tracker + cursor)

use criterion::{criterion_group, criterion_main, Criterion};
use newsdeck::deck::Deck;
use newsdeck::domain::gesture::Intent;
use newsdeck::domain::news::NewsItem;
use newsdeck::gesture::{classify, GestureEvent, GestureSample, GestureSettings};
use newsdeck::navigation::Cursor;
use std::hint::black_box;

fn feed(len: usize) -> Vec<NewsItem> {
    (0..len)
        .map(|i| NewsItem::new(format!("item-{i}"), format!("Headline {i}")))
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let settings = GestureSettings::default();
    let start = GestureSample::at_millis(100.0, 400.0, 0);
    let end = GestureSample::at_millis(104.0, 250.0, 180);

    group.bench_function("classify", |b| {
        b.iter(|| black_box(classify(black_box(start), black_box(end), &settings)));
    });

    group.finish();
}

fn bench_cursor_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let mut cursor = Cursor::new();
    cursor.reset(feed(500));

    group.bench_function("cursor_walk_forward_and_back", |b| {
        b.iter(|| {
            for _ in 0..500 {
                black_box(cursor.step(Intent::Next));
            }
            for _ in 0..500 {
                black_box(cursor.step(Intent::Prev));
            }
        });
    });

    group.finish();
}

fn bench_deck_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation");
    let mut deck = Deck::default();
    let _ = deck.apply_fetch(Ok(feed(100)));

    let drag = [
        GestureEvent::Start {
            sample: GestureSample::at_millis(100.0, 400.0, 0),
            contacts: 1,
        },
        GestureEvent::Move {
            sample: GestureSample::at_millis(101.0, 340.0, 60),
            contacts: 1,
        },
        GestureEvent::release(GestureSample::at_millis(102.0, 250.0, 150)),
    ];

    group.bench_function("deck_swipe", |b| {
        b.iter(|| {
            for event in drag {
                black_box(deck.on_gesture_event(event).0);
            }
            deck.prev();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_cursor_walk, bench_deck_swipe);
criterion_main!(benches);
