use std::hint::black_box;

use casino_rs::game::Game;
use casino_rs::sim;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_legal_moves(c: &mut Criterion) {
    let mut g = c.benchmark_group("legal_moves");
    for players in [2usize, 3] {
        // play a few turns so the table holds loose cards and captures exist
        let mut game = Game::seeded(players, 11).expect("2 or 3 players");
        for _ in 0..8 {
            let _ = sim::step_random(&mut game);
        }
        let seat = game.current();
        g.bench_with_input(BenchmarkId::new("mid_match", players), &game, |b, game| {
            b.iter(|| black_box(game.legal_moves(black_box(seat))))
        });
    }
    g.finish();
}

fn bench_simulate(c: &mut Criterion) {
    let mut g = c.benchmark_group("simulate");
    for players in [2usize, 3] {
        g.bench_with_input(BenchmarkId::new("full_match", players), &players, |b, &players| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                let mut game = Game::seeded(players, seed).expect("2 or 3 players");
                black_box(sim::simulate(&mut game))
            })
        });
    }
    g.finish();
}

criterion_group!(benches, bench_legal_moves, bench_simulate);
criterion_main!(benches);
