//! Perft benchmark for profiling move generation.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p chess_core -- [depth] [fen]
//!
//! Without a FEN every built-in position runs, including non-standard
//! board sizes. Depth defaults to 3; the mailbox generator clones a board
//! per node, so depth 5 on the standard suite takes a while.

use std::env;
use std::process;
use std::time::{Duration, Instant};

use chess_core::{parse_fen, perft};

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "Kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
    ),
    ("Position 3", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    ("5x5 minichess", "rnbqk/ppppp/5/PPPPP/RNBQK w - -"),
    (
        "10x10 open",
        "r4k3r/pppppppppp/10/10/10/10/10/10/PPPPPPPPPP/R4K3R w KQkq -",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(3);

    if let Some(fen) = args.get(2) {
        run_single_position(fen, depth);
    } else {
        run_all_positions(depth);
    }
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn run_single_position(fen: &str, depth: u8) {
    let (board, stm) = match parse_fen(fen) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Invalid FEN: {e}");
            process::exit(1);
        }
    };

    println!("Position: {fen}");
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(&board, stm, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let Ok((board, stm)) = parse_fen(fen) else {
            eprintln!("{name}: built-in FEN failed to parse");
            continue;
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&board, stm, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        println!(
            " {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)",
            nps(nodes, elapsed)
        );
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
