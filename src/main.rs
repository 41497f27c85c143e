//! disha-nav simulation binary.
//!
//! Drives the localization scenario tick by tick with the autopilot steering
//! toward the path goal, logging estimate error as the filter converges.

use std::io::Write;

use disha_nav::{Scenario, ScenarioConfig};

struct Args {
    config_path: Option<String>,
    ticks: u64,
    seed: Option<u64>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut result = Args {
        config_path: None,
        ticks: 500,
        seed: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    result.config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--ticks" | "-t" => {
                if i + 1 < args.len() {
                    result.ticks = args[i + 1].parse().unwrap_or(result.ticks);
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    result.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    result
}

fn print_help() {
    println!("disha-nav - Monte Carlo localization simulation");
    println!();
    println!("USAGE:");
    println!("    disha-nav [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>     Scenario TOML file (default: built-in demo room)");
    println!("    -t, --ticks <N>         Number of ticks to simulate (default: 500)");
    println!("    -s, --seed <N>          Override the particle filter seed");
    println!("    -h, --help              Print help information");
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = parse_args();

    let mut config = match &args.config_path {
        Some(path) => match ScenarioConfig::load(std::path::Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::error!("Failed to load scenario {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => ScenarioConfig::demo_room(),
    };
    if let Some(seed) = args.seed {
        config.filter.seed = seed;
    }

    log::info!("disha-nav starting");
    log::info!("  Walls: {}", config.walls.len());
    log::info!("  Particles: {}", config.filter.num_particles);
    log::info!("  Goal: ({}, {})", config.goal.x, config.goal.y);

    let mut scenario = match Scenario::from_config(config) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Invalid scenario: {}", e);
            std::process::exit(1);
        }
    };

    let linear_speed = 5.0;
    let angular_speed = 0.05;

    let mut last_best = scenario.agent().pose;
    for tick in 0..args.ticks {
        let motion = scenario.autopilot_motion(linear_speed, angular_speed);
        let summary = scenario.step(&motion);
        last_best = summary.best;

        if tick % 50 == 0 {
            let truth = scenario.agent().pose;
            let err = truth.position_error(&summary.best);
            log::info!(
                "tick {:4}  pose ({:6.1}, {:6.1})  estimate error {:7.1}  max weight {:.5}  path segments {}",
                tick,
                truth.x,
                truth.y,
                err,
                summary.max_weight,
                summary.path_segments
            );
        }
    }

    let truth = scenario.agent().pose;
    let best = last_best;
    log::info!(
        "done: true pose ({:.1}, {:.1}, {:.3}), best estimate ({:.1}, {:.1}, {:.3}), error {:.1}",
        truth.x,
        truth.y,
        truth.theta,
        best.x,
        best.y,
        best.theta,
        truth.position_error(&best)
    );
}
