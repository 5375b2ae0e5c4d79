use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};

use capture_checker::capture::capture_evaluator::captures;
use capture_checker::board_state::piece_types::WhitePieceKind;
use capture_checker::config::RulesConfig;
use capture_checker::placement::placement_validator::PlacementValidator;
use capture_checker::utils::random_scenario::random_scenario_lines;

const BLACK_COUNTS: &[usize] = &[1, 4, 8, 15];

fn scripts(kind: WhitePieceKind, black_count: usize, samples: u64) -> Vec<Vec<String>> {
    let config = RulesConfig::default();
    (0..samples)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            random_scenario_lines(&config, black_count, Some(kind), &mut rng)
                .expect("benchmark scenario should generate")
        })
        .collect()
}

fn replay(lines: &[String]) -> PlacementValidator {
    let mut validator = PlacementValidator::default();
    for line in lines {
        validator.process_line(line);
    }
    validator
}

fn bench_captures(c: &mut Criterion) {
    let mut group = c.benchmark_group("captures");

    for kind in WhitePieceKind::ALL {
        for &black_count in BLACK_COUNTS {
            let boards: Vec<PlacementValidator> = scripts(kind, black_count, 64)
                .iter()
                .map(|lines| replay(lines))
                .collect();

            group.throughput(Throughput::Elements(boards.len() as u64));
            group.bench_with_input(
                BenchmarkId::new(kind.name(), black_count),
                &boards,
                |b, boards| {
                    b.iter(|| {
                        let mut total = 0usize;
                        for validator in boards {
                            total += captures(black_box(validator.board()))
                                .expect("white piece is placed")
                                .len();
                        }
                        black_box(total)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_placement_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement_replay");

    for &black_count in BLACK_COUNTS {
        let scripts = scripts(WhitePieceKind::Rook, black_count, 64);
        group.throughput(Throughput::Elements(scripts.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(black_count),
            &scripts,
            |b, scripts| {
                b.iter(|| {
                    for lines in scripts {
                        black_box(replay(black_box(lines)));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_captures, bench_placement_replay);
criterion_main!(benches);
