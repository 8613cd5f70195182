use std::path::Path;
use std::sync::Arc;

use faraway_sim::cards::loader::load_catalog;
use faraway_sim::{final_score, CardCatalog, GameRng, RandomStrategy, SimulationConfig, SoloPlay};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        scoring_final_field,
        playing_solo_game,
        running_small_batch,
}

fn catalog() -> Arc<CardCatalog> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    Arc::new(
        load_catalog(&dir.join("main_cards.json"), &dir.join("bonus_cards.json"))
            .expect("fixture catalog"),
    )
}

fn quiet() -> SimulationConfig {
    SimulationConfig::default().with_verbose(0)
}

fn scoring_final_field(c: &mut criterion::Criterion) {
    let mut game = SoloPlay::new(catalog(), RandomStrategy, quiet()).expect("valid config");
    game.play(&mut GameRng::new(1)).expect("valid game");
    let field = game.field().clone();
    c.bench_function("score a complete 8-card field", |b| {
        b.iter(|| final_score(criterion::black_box(&field)))
    });
}

fn playing_solo_game(c: &mut criterion::Criterion) {
    let mut game = SoloPlay::new(catalog(), RandomStrategy, quiet()).expect("valid config");
    let mut rng = GameRng::new(2);
    c.bench_function("play and score one solo game", |b| {
        b.iter(|| game.play(&mut rng).expect("valid game"))
    });
}

fn running_small_batch(c: &mut criterion::Criterion) {
    let mut game = SoloPlay::new(catalog(), RandomStrategy, quiet()).expect("valid config");
    c.bench_function("run a batch of 1000 games", |b| {
        b.iter(|| {
            game.run_simulations(1_000, &mut GameRng::new(3))
                .expect("valid batch")
                .stats
                .mean
        })
    });
}
