//! skyshield-run: headless driver for interception scenarios.
//!
//! Usage:
//!   skyshield-run preset salvo --seed 7
//!   skyshield-run file scenario.json --snapshots
//!
//! Events (or full tick reports with `--snapshots`) are written to stdout as
//! JSON lines; the run summary goes to stderr. Set `RUST_LOG=debug` for the
//! engagement log.

use std::path::PathBuf;
use std::process;

use skyshield_core::config::ScenarioConfig;
use skyshield_core::enums::ScenarioId;
use skyshield_core::events::TickEvent;
use skyshield_core::state::SimSnapshot;
use skyshield_sim::scenario::preset_by_name;
use skyshield_sim::SimulationEngine;

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "preset" => cmd_preset(&args[2..]),
        "file" => cmd_file(&args[2..]),
        "list" => cmd_list(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "skyshield-run: SKYSHIELD interception simulator\n\
         \n\
         Commands:\n\
         \n\
         preset <name>  Run a built-in scenario (see `list`)\n\
         file <path>    Run a scenario described by a JSON file\n\
         list           List built-in scenarios\n\
         \n\
         Options (preset and file):\n\
         \n\
           --seed <N>       Override the scenario seed\n\
           --max-ticks <N>  Override the tick budget\n\
           --snapshots      Emit one full tick report per line instead of events\n\
         \n\
         Examples:\n\
         \n\
           skyshield-run preset salvo --seed 7\n\
           RUST_LOG=debug skyshield-run file scenario.json --snapshots\n"
    );
}

fn parse_flag_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            match args[i + 1].parse::<T>() {
                Ok(v) => return Some(v),
                Err(_) => {
                    eprintln!("Error: invalid value for {flag}: {}", args[i + 1]);
                    process::exit(1);
                }
            }
        }
    }
    None
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

// --- Commands ---

fn cmd_list() {
    for id in ScenarioId::ALL {
        println!("{}", id.name());
    }
}

fn cmd_preset(args: &[String]) {
    let Some(name) = args.first() else {
        eprintln!("Error: preset name is required");
        process::exit(1);
    };
    let config = match preset_by_name(name) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    run(config, &args[1..]);
}

fn cmd_file(args: &[String]) {
    let Some(path) = args.first().map(PathBuf::from) else {
        eprintln!("Error: scenario path is required");
        process::exit(1);
    };
    let config = match ScenarioConfig::load(&path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading {}: {e}", path.display());
            process::exit(1);
        }
    };
    run(config, &args[1..]);
}

fn run(mut config: ScenarioConfig, args: &[String]) {
    if let Some(seed) = parse_flag_value(args, "--seed") {
        config.seed = seed;
    }
    if let Some(max_ticks) = parse_flag_value(args, "--max-ticks") {
        config.max_ticks = max_ticks;
    }
    let snapshots = has_flag(args, "--snapshots");

    let mut engine = match SimulationEngine::new(config) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    while !engine.phase().is_ended() {
        let report = engine.tick();
        let line = if snapshots {
            serde_json::to_string(&report)
        } else {
            let tick = report.snapshot.time.tick;
            report
                .events
                .into_iter()
                .map(|event| serde_json::to_string(&TickEvent { tick, event }))
                .collect::<Result<Vec<_>, _>>()
                .map(|lines| lines.join("\n"))
        };
        match line {
            Ok(line) if !line.is_empty() => println!("{line}"),
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error serializing output: {e}");
                process::exit(1);
            }
        }
    }

    print_summary(&engine.snapshot());
}

fn print_summary(snapshot: &SimSnapshot) {
    let score = &snapshot.score;
    eprintln!(
        "Ended at tick {} ({:.1}s): {:?}",
        snapshot.time.tick, snapshot.time.elapsed_secs, snapshot.phase
    );
    eprintln!(
        "Threats: {} spawned, {} intercepted, {} arrived",
        score.threats_spawned, score.threats_intercepted, score.threats_arrived
    );
    eprintln!(
        "Interceptors: {} launched, {} expired",
        score.interceptors_launched, score.interceptors_expired
    );
}
