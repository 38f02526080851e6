//! Benchmarks for scripted games: every answer is 1 (roll, buy, stay,
//! confirm), capped at a fixed number of turns.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use save_our_planet::core::{GameConfig, TurnRecord};
use save_our_planet::rules::TurnEngine;
use save_our_planet::ui::ScriptedPort;

const TURN_CAP: usize = 200;

fn play(seed: u64, names: &[&str]) -> Option<TurnRecord> {
    let config = GameConfig::new(names.iter().copied()).ok()?.with_seed(seed);
    let mut engine = TurnEngine::new(&config);
    let mut port = ScriptedPort::new().with_default_choice(1);

    let mut last = None;
    for _ in 0..TURN_CAP {
        if engine.state().phase.is_over() {
            break;
        }
        last = engine.play_turn(&mut port).ok();
        port.take_events();
    }
    last
}

fn bench_game_2p(c: &mut Criterion) {
    c.bench_function("scripted_game_2p", |b| {
        b.iter(|| black_box(play(black_box(42), &["Ada", "Grace"])));
    });
}

fn bench_game_4p(c: &mut Criterion) {
    c.bench_function("scripted_game_4p", |b| {
        b.iter(|| black_box(play(black_box(42), &["Ada", "Grace", "Linus", "Hedy"])));
    });
}

fn bench_game_batch(c: &mut Criterion) {
    c.bench_function("10_games_sequential", |b| {
        b.iter(|| {
            for seed in 0..10u64 {
                black_box(play(seed, &["Ada", "Grace", "Linus"]));
            }
        });
    });
}

criterion_group!(benches, bench_game_2p, bench_game_4p, bench_game_batch);
criterion_main!(benches);
