//! Tournament CLI
//!
//! Play self-play matches between classical search opponents.

use std::env;
use std::path::PathBuf;

use chess_core::Engine;
use classical_engine::SearchAi;
use tournament::{MatchReport, MatchRunner, TournamentConfig};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("ML-chess Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match [--config FILE] [--games N] [--plies N] [--white D] [--black D] [--out FILE]");
    println!();
    println!("Options:");
    println!("  --config, -c FILE  TOML file with [match], [white] and [black] tables");
    println!("  --games, -g N      Number of games (default 10)");
    println!("  --plies, -p N      Ply limit per game before a draw (default 200)");
    println!("  --white D          Difficulty 1-8 of the first engine (white in game 1)");
    println!("  --black D          Difficulty 1-8 of the second engine");
    println!("  --out, -o FILE     Write a JSON report");
    println!();
    println!("Logging is controlled with RUST_LOG, e.g. RUST_LOG=tournament=info.");
    println!();
    println!("Examples:");
    println!("  tournament match --white 3 --black 1 --games 4");
    println!("  tournament match --config match.toml --out report.json");
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Option<T> {
    let Some(raw) = value else {
        eprintln!("Error: {} needs a value", flag);
        return None;
    };
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            eprintln!("Error: invalid value '{}' for {}", raw, flag);
            None
        }
    }
}

fn run_match(args: &[String]) -> Result<(), String> {
    // The config file is applied first so explicit flags override it.
    let mut config = TournamentConfig::default();
    if let Some(i) = args.iter().position(|a| a == "--config" || a == "-c") {
        let path: PathBuf = parse_value("--config", args.get(i + 1)).ok_or("missing config path")?;
        config = TournamentConfig::load(&path).map_err(|e| e.to_string())?;
    }

    let mut out: Option<PathBuf> = None;
    let mut i = 0;
    while i < args.len() {
        let value = args.get(i + 1);
        match args[i].as_str() {
            "--config" | "-c" => {}
            "--games" | "-g" => {
                config.match_config.num_games = parse_value(&args[i], value).ok_or("bad --games")?
            }
            "--plies" | "-p" => {
                config.match_config.max_plies = parse_value(&args[i], value).ok_or("bad --plies")?
            }
            "--white" => config.white.difficulty = parse_value(&args[i], value).ok_or("bad --white")?,
            "--black" => config.black.difficulty = parse_value(&args[i], value).ok_or("bad --black")?,
            "--out" | "-o" => out = Some(parse_value(&args[i], value).ok_or("bad --out")?),
            other => return Err(format!("unknown option: {}", other)),
        }
        i += 2;
    }

    let mut engine1 = SearchAi::with_config(config.white.clone());
    let mut engine2 = SearchAi::with_config(config.black.clone());
    let name1 = format!("{} d{}", engine1.name(), engine1.difficulty());
    let name2 = format!("{} d{}", engine2.name(), engine2.difficulty());

    println!("=== Match: {} vs {} ===", name1, name2);
    println!(
        "Games: {}, Max plies: {}",
        config.match_config.num_games, config.match_config.max_plies
    );
    println!();

    let runner = MatchRunner::new(config.match_config.clone());
    let (_, games) = runner.run_match_recorded(&mut engine1, &mut engine2);
    let report = MatchReport::new(&name1, &name2, config.match_config, games);

    println!("{}", report.generate_report());

    if let Some(path) = out {
        report.save(&path).map_err(|e| e.to_string())?;
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "match" => {
            if let Err(e) = run_match(&args[2..]) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            std::process::exit(2);
        }
    }
}
