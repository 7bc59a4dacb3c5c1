//! Selection benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mochi_selection::{
    next_separator, previous_separator, selected_text, Screen, SelectionPoint, Separators,
    TextBuffer,
};

/// An 80x24 screen with a full scrollback of wrapped and unwrapped rows
fn filled_screen() -> Screen {
    let mut screen = Screen::new(80, 24, 10_000);
    let long = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor ";
    let wide = "日本語のテキスト ".repeat(8);
    for i in 0..10_024 {
        let text = if i % 5 == 0 { wide.as_str() } else { long };
        screen.write_lines([(text, i % 3 != 0)]);
    }
    screen
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let screen = filled_screen();

    group.bench_function("extract_screen", |b| {
        b.iter(|| {
            let text = selected_text(
                SelectionPoint::new(0, 0),
                SelectionPoint::new(23, 80),
                black_box(&screen),
            );
            black_box(text)
        })
    });

    group.bench_function("extract_all_history", |b| {
        b.iter(|| {
            let text = selected_text(
                SelectionPoint::new(i32::MIN / 2, 0),
                SelectionPoint::new(23, 80),
                black_box(&screen),
            );
            black_box(text)
        })
    });

    group.finish();
}

fn bench_word_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let separators = Separators::default();

    // One unbroken word wrapped over every row: the worst case for a scan
    let mut screen = Screen::new(80, 24, 1000);
    let word = "x".repeat(80);
    for _ in 0..1024 {
        screen.write_lines([(word.as_str(), true)]);
    }
    let oldest = screen.oldest_row();

    group.bench_function("previous_separator_full_history", |b| {
        b.iter(|| {
            let found = previous_separator(
                SelectionPoint::new(23, 40),
                black_box(&screen),
                &separators,
            );
            black_box(found)
        })
    });

    group.bench_function("next_separator_full_history", |b| {
        b.iter(|| {
            let found = next_separator(
                SelectionPoint::new(oldest, 40),
                black_box(&screen),
                &separators,
            );
            black_box(found)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_extract, bench_word_scan);

criterion_main!(benches);
