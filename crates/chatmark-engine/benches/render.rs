use chatmark_engine::{Renderer, Transcript, render, render_transcript};
use criterion::{Criterion, criterion_group, criterion_main};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(10);

    let content = common::generate_chat_answer(100);
    group.bench_function("chatmark", |b| {
        b.iter(|| std::hint::black_box(render(std::hint::black_box(&content))));
    });

    group.bench_function("chatmark_sanitized", |b| {
        let renderer = Renderer::sanitized();
        b.iter(|| std::hint::black_box(renderer.render(std::hint::black_box(&content))));
    });

    group.bench_function("pulldown_cmark_baseline", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let mut out = String::new();
            html::push_html(&mut out, parser);
            std::hint::black_box(out);
        });
    });

    group.finish();
}

fn bench_transcript(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcript");
    group.sample_size(10);

    let json = common::generate_transcript_json(200);
    let renderer = Renderer::trusted();
    group.bench_function("parse_and_render", |b| {
        b.iter(|| {
            let transcript = Transcript::from_json(std::hint::black_box(&json)).unwrap();
            std::hint::black_box(render_transcript(&renderer, &transcript));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_render, bench_transcript);
criterion_main!(benches);
