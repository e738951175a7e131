//! Immigration seeds CLI - train seeds and inspect checkpoints.

use std::fs;
use std::path::PathBuf;

use immigration_seeds::{
    compute::{GrowSettings, ScoreBreakdown, TorusHost, Trainer, grow, score, show_score},
    schema::{Checkpoint, ExperimentConfig, Target},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--example") => print_example_config(),
        Some("evolve") if args.len() >= 4 => evolve(&args[2], &args[3]),
        Some("show") if args.len() >= 3 => {
            let steps: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(100);
            show(&args[2], steps);
        }
        Some("target") if args.len() >= 3 => {
            let target = args[2]
                .parse()
                .ok()
                .and_then(Target::from_number)
                .unwrap_or_else(|| {
                    eprintln!("Target must be a number from 1 to 5");
                    std::process::exit(1);
                });
            print!("{}", target.grid());
        }
        _ => {
            let name = args.first().map_or("immigration-seeds", String::as_str);
            eprintln!("Usage:");
            eprintln!("  {} evolve <config.json> <out.json>", name);
            eprintln!("  {} show <checkpoint.json> [steps]", name);
            eprintln!("  {} target <1-5>", name);
            eprintln!("  {} --example", name);
            eprintln!();
            eprintln!("Train Immigration seeds toward a target and inspect the results.");
            std::process::exit(1);
        }
    }
}

fn evolve(config_path: &str, out_path: &str) {
    let config_str = fs::read_to_string(config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: ExperimentConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    println!("Immigration Seed Training");
    println!("=========================");
    println!("Rule: {} on {}x{} torus", config.rule, config.torus.0, config.torus.1);
    println!("Target: {:?}", config.target);
    println!("Steps per grow: {}", config.steps);
    println!("Generations: {}", config.generations);
    println!();

    let generations = config.generations;
    let mut trainer = Trainer::new(config).unwrap_or_else(|e| {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    });
    let mut host = TorusHost::new();

    let result = trainer
        .run_with_callback(&mut host, |p| {
            if p.generation % (generations / 10).max(1) == 0 {
                println!(
                    "  Generation {}/{}: candidate={:.3}, best={:.3}",
                    p.generation, generations, p.candidate_score, p.best_score
                );
            }
        })
        .unwrap_or_else(|e| {
            eprintln!("Training failed: {}", e);
            std::process::exit(1);
        });

    println!();
    println!("Best score: {:.3}", result.best.score);
    println!("Accepted mutations: {}", result.accepted);
    println!(
        "Growth over {} grows: red {:+}, blue {:+}",
        result.tally.grows, result.tally.red_growth, result.tally.blue_growth
    );
    println!("Time: {:.2}s", result.elapsed_seconds);

    if let Err(e) = result.best.save(PathBuf::from(out_path)) {
        eprintln!("Error saving checkpoint: {}", e);
        std::process::exit(1);
    }
    println!("Saved {}", out_path);
}

fn show(checkpoint_path: &str, steps: u64) {
    let checkpoint = Checkpoint::load(checkpoint_path).unwrap_or_else(|e| {
        eprintln!("Error loading checkpoint: {}", e);
        std::process::exit(1);
    });

    let mut host = TorusHost::new();
    let settings = GrowSettings {
        steps,
        ..Default::default()
    };
    let growth = grow(&mut host, &checkpoint.seed, &settings).unwrap_or_else(|e| {
        eprintln!("Error growing seed: {}", e);
        std::process::exit(1);
    });
    show_score(&mut host, checkpoint.score).unwrap_or_else(|e| {
        eprintln!("Error showing score: {}", e);
        std::process::exit(1);
    });

    println!("Seed:");
    print!("{}", checkpoint.seed);
    println!();
    println!("Grown after {} steps:", steps);
    print!("{}", growth.grown);
    println!();
    println!("Stored score: {}", checkpoint.score);
    for target in Target::ALL {
        let grid = target.grid();
        let breakdown = ScoreBreakdown::tally(&growth.grown, &grid);
        println!(
            "  {:?}: score={:.3}, accuracy={:.1}%",
            target,
            score(&growth.grown, &grid),
            breakdown.accuracy() * 100.0
        );
    }
}

fn print_example_config() {
    let config = ExperimentConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
