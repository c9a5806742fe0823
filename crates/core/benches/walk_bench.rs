//! Benchmarks for content stream walking.
//!
//! Benchmark groups:
//! - `walk_instructions`: walker throughput with a recording observer
//! - `walk_text`: full text extraction through the page facade

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pagewalk_core::interp::walk;
use pagewalk_core::{Dict, InstructionLog, MemoryStore, PDFObject, PDFStream, Page, PageOptions};
use std::hint::black_box;

/// Generate a content stream with roughly `n` instructions.
fn generate_content(n: usize) -> Vec<u8> {
    let templates: &[&[u8]] = &[
        b"q ",
        b"1 0 0 1 72 720 cm ",
        b"BT ",
        b"/F1 12 Tf ",
        b"0 -14 Td ",
        b"(Hello World) Tj ",
        b"[(Kerned) -120 (text)] TJ ",
        b"ET ",
        b"0.2 0.4 0.6 rg ",
        b"10 10 100 50 re ",
        b"f ",
        b"Q ",
    ];
    let mut data = Vec::with_capacity(n * 16);
    for i in 0..n {
        data.extend_from_slice(templates[i % templates.len()]);
    }
    data
}

fn page_store(content: Vec<u8>) -> MemoryStore {
    let mut store = MemoryStore::new();
    let mut font = Dict::new();
    font.insert("Subtype".into(), PDFObject::name("Type1"));
    font.insert("Encoding".into(), PDFObject::name("WinAnsiEncoding"));
    let mut fonts = Dict::new();
    fonts.insert("F1".into(), font.into());
    let mut resources = Dict::new();
    resources.insert("Font".into(), fonts.into());

    store.insert(10, PDFStream::new(Dict::new(), content));
    let mut page = Dict::new();
    page.insert("Type".into(), PDFObject::name("Page"));
    page.insert("Resources".into(), resources.into());
    page.insert("Contents".into(), PDFObject::reference(10));
    let page_ref = store.insert(3, page);
    store.push_page(page_ref);
    store
}

fn bench_walk_instructions(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_instructions");
    for size in [1_000usize, 10_000, 100_000] {
        let content = generate_content(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            b.iter(|| {
                let mut log = InstructionLog::new();
                walk(black_box(content), &mut [&mut log], &PageOptions::default())
                    .expect("walk")
            });
        });
    }
    group.finish();
}

fn bench_walk_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_text");
    for size in [1_000usize, 10_000] {
        let store = page_store(generate_content(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| {
                let page = Page::open(store, 1).expect("open");
                black_box(page.text().expect("text"))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walk_instructions, bench_walk_text);
criterion_main!(benches);
