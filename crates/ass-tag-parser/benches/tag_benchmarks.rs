//! Benchmarks for override tag parsing and composing
//!
//! Generates dialogue lines of increasing complexity programmatically so the
//! numbers do not depend on external subtitle files.

use ass_tag_parser::{compose, parse, to_plaintext, try_compose};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Line complexity levels
#[derive(Debug, Clone, Copy)]
enum Complexity {
    /// Plain text with a bold toggle
    Simple,
    /// Positioning, colors and fades
    Moderate,
    /// Karaoke, nested animations, clips and drawings
    Complex,
}

impl Complexity {
    const ALL: [Self; 3] = [Self::Simple, Self::Moderate, Self::Complex];

    const fn label(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }

    /// One dialogue line made of `segments` repeated segments
    fn line(self, segments: usize) -> String {
        let mut line = String::new();
        for i in 0..segments {
            match self {
                Self::Simple => {
                    line.push_str(&format!(r"Word {i} {{\b1}}bold{{\b0}} "));
                }
                Self::Moderate => {
                    line.push_str(&format!(
                        r"{{\pos({i},{y})\c&H{color:06X}&\fad(100,200)\fs{size}}}Segment {i}\N",
                        y = i * 2,
                        color = i * 0x0011_1111 % 0x00FF_FFFF,
                        size = 20 + i % 30,
                    ));
                }
                Self::Complex => {
                    line.push_str(&format!(
                        r"{{\k{k}\t(0,{end},0.5,\fscx120\t(\frz{i}\3c&H00FF00&))\clip(m 0 0 l {i} 0 {i} {i})}}syl{i}{{\p1}}m 0 0 b 1 1 2 2 {i} {i}{{\p0}}",
                        k = 10 + i % 40,
                        end = 100 * (i + 1),
                    ));
                }
            }
        }
        line
    }
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for complexity in Complexity::ALL {
        for segments in [1, 10, 100] {
            let line = complexity.line(segments);
            group.throughput(Throughput::Bytes(line.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(complexity.label(), segments),
                &line,
                |b, line| b.iter(|| parse(black_box(line))),
            );
        }
    }
    group.finish();
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    for complexity in Complexity::ALL {
        for segments in [1, 10, 100] {
            let Ok(items) = parse(&complexity.line(segments)) else {
                continue;
            };
            group.bench_with_input(
                BenchmarkId::new(complexity.label(), segments),
                &items,
                |b, items| b.iter(|| compose(black_box(items))),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{}_validated", complexity.label()), segments),
                &items,
                |b, items| b.iter(|| try_compose(black_box(items))),
            );
        }
    }
    group.finish();
}

fn bench_plaintext(c: &mut Criterion) {
    let mut group = c.benchmark_group("plaintext");
    for complexity in Complexity::ALL {
        let line = complexity.line(50);
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(complexity.label()),
            &line,
            |b, line| b.iter(|| to_plaintext(black_box(line))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_compose, bench_plaintext);
criterion_main!(benches);
