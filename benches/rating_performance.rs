//! Performance benchmarks for rating calculations

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rally_point::rating::{RatingEngine, TeamEloCalculator, TeamEloConfig};
use rally_point::store::players::InMemoryPlayerStore;
use rally_point::types::{Match, MatchType, Player};
use rally_point::utils::current_timestamp;
use std::sync::Arc;

fn bench_match_delta(c: &mut Criterion) {
    let calculator = TeamEloCalculator::new(TeamEloConfig::default()).unwrap();

    c.bench_function("team_elo_match_delta", |b| {
        b.iter(|| {
            calculator.match_delta(
                black_box(1187.5),
                black_box(1294.0),
                black_box(11),
                black_box(7),
            )
        })
    });
}

fn bench_engine_update(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();

    let store = Arc::new(InMemoryPlayerStore::new());
    let roster: Vec<Player> = (0..4)
        .map(|i| {
            let mut p = Player::new(format!("p{}", i), format!("Player {}", i));
            p.rating = Some(1200.0 + (i as f64) * 50.0);
            p
        })
        .collect();
    store.preset_players(roster).unwrap();

    let engine = RatingEngine::new(store);

    let record = Match {
        id: "bench".to_string(),
        date: current_timestamp(),
        match_type: MatchType::Doubles,
        team_a: vec!["p0".to_string(), "p1".to_string()],
        team_b: vec!["p2".to_string(), "p3".to_string()],
        score_a: 11,
        score_b: 9,
        venue_id: None,
        notes: None,
        group_id: None,
        user_id: None,
    };

    c.bench_function("rating_engine_update", |b| {
        b.iter(|| {
            runtime
                .block_on(engine.update_ratings(black_box(&record)))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_match_delta, bench_engine_update);
criterion_main!(benches);
