//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package sharpc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sharpc_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source).lex().unwrap().len()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "int x = 42; void Main() { int y = x + 1; return; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_declaration", |b| {
        b.iter(|| lexer_token_count(black_box("int x = 42;")))
    });

    group.bench_function("method_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        namespace Shapes
        {
            public class Point
            {
                public int X { get; set; }
                public int Y { get; set; }

                public Point(int x, int y)
                {
                    X = x;
                    Y = y;
                }

                public override string ToString()
                {
                    return $"({X}, {Y})";
                }
            }

            public interface IDrawable
            {
                void Draw();
            }

            public enum Color
            {
                Red,
                Green,
                Blue,
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("string s = \"hello\";")))
    });

    group.bench_function("long_string", |b| {
        let source =
            "string s = \"This is a longer string that contains some text for benchmarking purposes.\";";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("interpolated_string", |b| {
        b.iter(|| lexer_token_count(black_box(r#"string s = $"value is {x + 1} today";"#)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("int x = 123456;")))
    });

    group.bench_function("float", |b| {
        b.iter(|| lexer_token_count(black_box("double x = 3.14159;")))
    });

    group.bench_function("hex", |b| {
        b.iter(|| lexer_token_count(black_box("int x = 0xDEADBEEF;")))
    });

    group.bench_function("decimal_suffix", |b| {
        b.iter(|| lexer_token_count(black_box("decimal x = 3.14159265358979m;")))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("short_ident", |b| {
        b.iter(|| lexer_token_count(black_box("int x = 42;")))
    });

    group.bench_function("long_ident", |b| {
        b.iter(|| lexer_token_count(black_box("int veryLongVariableName = 42;")))
    });

    group.bench_function("many_ident", |b| {
        b.iter(|| {
            lexer_token_count(black_box(
                "int a = 1; int b = 2; int c = 3; int d = 4; int e = 5;",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_identifiers
);
criterion_main!(benches);
