//! Transition and encoding throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_cambia::core::{Action, Player};
use rust_cambia::games::CambiaGameBuilder;
use rust_cambia::nn::{BoardEncoder, ObservationEncoder, StateEncoder};
use rust_cambia::rules::RulesEngine;

fn bench_state_clone(c: &mut Criterion) {
    let (_, state) = CambiaGameBuilder::new().build(42).unwrap();
    c.bench_function("state_clone", |b| b.iter(|| black_box(&state).clone()));
}

fn bench_transition(c: &mut Criterion) {
    let (game, state) = CambiaGameBuilder::new().build(42).unwrap();
    c.bench_function("transition_play_drawn", |b| {
        b.iter(|| game.successor(black_box(&state), Player::One, Action::PlayDrawn))
    });
    c.bench_function("transition_play_hand", |b| {
        b.iter(|| game.successor(black_box(&state), Player::One, Action::PlayHand(0)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    let (game, initial) = CambiaGameBuilder::new().build(42).unwrap();
    c.bench_function("full_game", |b| {
        b.iter(|| {
            let mut state = initial.clone();
            while game.is_terminal(&state).is_none() {
                let player = state.active_player;
                let actions = game.legal_actions(&state, player);
                let action = actions[state.turn as usize % actions.len()];
                if game.apply_action(&mut state, player, action).is_err() {
                    break;
                }
            }
            state.turn
        })
    });
}

fn bench_encoders(c: &mut Criterion) {
    let (_, state) = CambiaGameBuilder::new().initial_peeks(2).build(42).unwrap();
    let encoder = ObservationEncoder::new();
    c.bench_function("board_encode", |b| b.iter(|| BoardEncoder::encode(black_box(&state))));
    c.bench_function("observation_encode", |b| {
        b.iter(|| encoder.encode(black_box(&state), Player::Two))
    });
}

criterion_group!(benches, bench_state_clone, bench_transition, bench_full_game, bench_encoders);
criterion_main!(benches);
