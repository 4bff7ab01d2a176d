//! Benchmarks for `peg_lexer_core`.
//!
//! Measures keyword recognition throughput of the prefix trie and whole-buffer
//! UTF-8 decoding, the two hot paths a grammar engine hits per input position.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use peg_lexer_core::{codepoint_count, decode, Trie};

const KEYWORDS: &[&str] = &[
    "as", "break", "continue", "do", "else", "false", "for", "if", "impl", "in", "int", "let",
    "loop", "match", "mut", "pub", "return", "self", "trait", "true", "type", "use", "where",
    "while", "yield",
];

/// Generate N lines of mixed keywords, identifiers, and non-ASCII text.
fn generate_source(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("let value{i} = if integer λ{i} then return else «{i}» → loop"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Query the trie at every byte offset, as a backtracking-free scanner would.
fn bench_trie_scan(c: &mut Criterion) {
    let trie = Trie::new(KEYWORDS);
    let mut group = c.benchmark_group("lexer_core/trie/scan");

    for lines in [10, 100, 1000] {
        let source = generate_source(lines);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(lines), &source, |b, src| {
            let bytes = src.as_bytes();
            b.iter(|| {
                let matched: usize = (0..bytes.len())
                    .map(|pos| trie.longest_match(&bytes[pos..]))
                    .sum();
                black_box(matched)
            });
        });
    }

    group.finish();
}

fn bench_trie_build(c: &mut Criterion) {
    c.bench_function("lexer_core/trie/build", |b| {
        b.iter(|| black_box(Trie::new(black_box(KEYWORDS))));
    });
}

fn bench_utf8(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_core/utf8");

    for lines in [10, 100, 1000] {
        let source = generate_source(lines);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::new("decode", lines), &source, |b, src| {
            b.iter(|| black_box(decode(src.as_bytes())));
        });
        group.bench_with_input(BenchmarkId::new("count", lines), &source, |b, src| {
            b.iter(|| black_box(codepoint_count(src.as_bytes())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_trie_scan, bench_trie_build, bench_utf8);
criterion_main!(benches);
