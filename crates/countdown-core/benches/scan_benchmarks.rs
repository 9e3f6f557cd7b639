use countdown_core::annotate::{annotate, reconcile};
use countdown_core::date::CalendarDate;
use countdown_core::scanner::scan;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Build a note of roughly `lines` lines with a date reference on most of them
fn create_test_document(lines: usize) -> String {
    let mut rng = fastrand::Rng::with_seed(7);
    let mut text = String::new();

    for i in 0..lines {
        let literal = format!(
            "{:04}-{:02}-{:02}",
            rng.u32(2020..2030),
            rng.u32(0..13),
            rng.u32(0..32)
        );
        match rng.u8(0..4) {
            0 => text.push_str(&format!("Line {i} links to [[{literal}]] for context\n")),
            1 => text.push_str(&format!("- [ ] Task {i} 📅 {literal}\n")),
            2 => text.push_str(&format!("- [ ] Task {i} 🛫 {literal} [[{literal}|alias]]\n")),
            _ => text.push_str("Plain prose with no dates at all, just words and punctuation.\n"),
        }
    }

    text
}

fn bench_scan_small_note(c: &mut Criterion) {
    let document = create_test_document(50);

    c.bench_function("scan_small_note_50_lines", |b| {
        b.iter(|| scan(black_box(&document)))
    });
}

fn bench_scan_large_note(c: &mut Criterion) {
    let document = create_test_document(5_000);

    c.bench_function("scan_large_note_5000_lines", |b| {
        b.iter(|| scan(black_box(&document)))
    });
}

fn bench_annotate_large_note(c: &mut Criterion) {
    let document = create_test_document(5_000);
    let today = CalendarDate::from_components(2025, 6, 20);

    c.bench_function("annotate_large_note_5000_lines", |b| {
        b.iter(|| annotate(black_box(&document), black_box(today)))
    });
}

fn bench_reconcile_unchanged_pass(c: &mut Criterion) {
    let document = create_test_document(5_000);
    let today = CalendarDate::from_components(2025, 6, 20);
    let previous = annotate(&document, today);
    let next = annotate(&document, today);

    c.bench_function("reconcile_unchanged_5000_lines", |b| {
        b.iter(|| reconcile(black_box(previous.clone()), black_box(next.clone())))
    });
}

criterion_group!(
    benches,
    bench_scan_small_note,
    bench_scan_large_note,
    bench_annotate_large_note,
    bench_reconcile_unchanged_pass
);
criterion_main!(benches);
