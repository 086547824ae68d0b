//! Clicker Sim - a headless session driver for the progression engine
//!
//! Runs a seeded play session against the bundled item catalog:
//! - Plays matches through ProgressionEngine with a ChaCha8 RNG
//! - Spends winnings on upgrades, preferring discounted recipes
//! - Publishes throttled leaderboard snapshots to an in-memory sink
//! - Persists the session through a FileStateStore
//!
//! Usage: clicker_sim [matches] [seed] [save_path]

use clicker_core::prelude::*;
use clicker_core::state::{FileStateStore, GameStateStore};
use clicker_core::telemetry::{LeaderboardSink, MemorySink, PlayerSnapshot, SnapshotThrottle};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

const CATALOG_JSON: &str = include_str!("../data/items.json");

struct SimOptions {
    matches: u32,
    seed: u64,
    save_path: String,
}

impl SimOptions {
    fn from_args() -> Self {
        let mut args = std::env::args().skip(1);
        let matches = args
            .next()
            .and_then(|a| a.parse().ok())
            .unwrap_or(500);
        let seed = args.next().and_then(|a| a.parse().ok()).unwrap_or(42);
        let save_path = args.next().unwrap_or_else(|| "clicker_save.json".to_string());
        SimOptions { matches, seed, save_path }
    }
}

/// Pick the next buy: the cheapest affordable upgrade (recipes get the
/// component discount), falling back to the cheapest affordable basic item.
fn next_purchase<'a>(catalog: &'a Catalog, state: &GameState) -> Option<(&'a Item, u64)> {
    let affordable = |item: &&Item| {
        let cost = clicker_core::discounted_unit_cost(item, &state.inventory);
        cost <= state.player.currency
    };

    let mut upgrades = available_upgrades(catalog, &state.inventory);
    upgrades.retain(|item| affordable(item));
    upgrades.sort_by_key(|item| clicker_core::discounted_unit_cost(item, &state.inventory));
    if let Some(item) = upgrades.first() {
        return Some((item, clicker_core::discounted_unit_cost(item, &state.inventory)));
    }

    catalog
        .items()
        .iter()
        .filter(|item| !item.is_recipe())
        .filter(affordable)
        .min_by_key(|item| item.cost)
        .map(|item| (item, item.cost))
}

fn print_status(round: u32, state: &GameState, report: &ActionReport) {
    let outcome = match (report.win, report.crit) {
        (true, true) => "CRIT WIN",
        (true, false) => "win",
        (false, _) => "loss",
    };
    println!(
        "  match {:>4}: {:<8} ({:>4.0}% odds)  {:+} pts -> {}   {} gold",
        round,
        outcome,
        report.win_chance * 100.0,
        report.score_delta,
        state.player.position,
        state.player.currency,
    );
}

fn main() {
    let options = SimOptions::from_args();
    let catalog = match Catalog::parse(CATALOG_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("bundled catalog is broken: {}", err);
            std::process::exit(1);
        }
    };

    let store = FileStateStore::new(&options.save_path);
    let mut state = store.load();
    if state.player.username.is_empty() {
        state.player.username = format!("sim-{}", options.seed);
    }

    println!(
        "starting at {} with {} gold ({} items in catalog, seed {})",
        state.player.position,
        state.player.currency,
        catalog.len(),
        options.seed,
    );

    let engine = ProgressionEngine::with_defaults();
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let mut sink = MemorySink::new();
    let mut throttle = SnapshotThrottle::new(Duration::from_secs(1));

    for round in 1..=options.matches {
        let (next, report) = engine.process_action(&state, &mut rng);
        state = next;

        if report.promoted {
            println!("PROMOTED -> {}", state.player.position);
        } else if report.demoted {
            println!("demoted -> {}", state.player.position);
        }

        // Reinvest winnings
        while let Some((item, cost)) = next_purchase(&catalog, &state) {
            match purchase(&state, item, 1) {
                Ok(next) => {
                    println!("  bought {} for {} gold", item.name, cost);
                    state = next;
                }
                Err(err) => {
                    eprintln!("  purchase rejected: {}", err);
                    break;
                }
            }
        }

        if round % 50 == 0 {
            print_status(round, &state, &report);
        }

        if throttle.try_publish(Instant::now()) {
            let snapshot = PlayerSnapshot::capture(&state, 3);
            if let Err(err) = sink.publish(&snapshot) {
                eprintln!("  snapshot dropped: {}", err);
            }
        }

        if let Err(err) = store.save(&state) {
            eprintln!("failed to save session: {}", err);
            break;
        }
    }

    let stats = aggregate(&state.inventory);
    println!();
    println!("session over after {} matches", state.player.games_played());
    println!(
        "  record: {}W / {}L  ({:.0}% winrate)",
        state.player.wins,
        state.player.losses,
        100.0 * state.player.wins as f64 / state.player.games_played().max(1) as f64,
    );
    println!("  final position: {}", state.player.position);
    println!(
        "  build: {} stacks worth {} gold ({:.0} AD / {:.0} AP / {:.0} armor)",
        state.inventory.len(),
        clicker_core::inventory_value(&state.inventory),
        stats.attack_damage,
        stats.ability_power,
        stats.armor,
    );

    println!("  leaderboard:");
    for (place, row) in sink.latest().iter().enumerate() {
        let division = row
            .division
            .map(|d| format!(" {}", d))
            .unwrap_or_default();
        println!(
            "    {}. {} - {}{} ({} pts), {}W/{}L",
            place + 1,
            row.username,
            row.rank,
            division,
            row.score,
            row.wins,
            row.losses,
        );
    }

    println!("saved to {}", options.save_path);
}
