//! Linear-sweep demo driver for the DIP simulator.
//!
//! Replays the reference workload: a sequential sweep over `working_set`
//! lines, repeated for `passes` rounds, then prints the hit tally. Address
//! generation lives here in the driver on purpose; swap in a trace reader
//! without touching the core.
//!
//! Usage:
//!     dip_sweep [total_bytes associativity line_bytes passes working_set]
//!
//! Defaults: 1 MiB, 16-way, 64 B lines, 10 passes over 4096 lines.

use std::process::ExitCode;

use dipkit::simulator::DipSimulator;

struct Args {
    total_bytes: u64,
    associativity: u64,
    line_bytes: u64,
    passes: u64,
    working_set: u64,
}

fn parse_args() -> Result<Args, String> {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args {
        total_bytes: 1 << 20,
        associativity: 16,
        line_bytes: 64,
        passes: 10,
        working_set: 4096,
    };
    if raw.is_empty() {
        return Ok(args);
    }
    if raw.len() != 5 {
        return Err(format!("expected 0 or 5 arguments, got {}", raw.len()));
    }
    let mut parsed = raw.iter().map(|s| {
        s.parse::<u64>()
            .map_err(|_| format!("not a non-negative integer: {s:?}"))
    });
    // Length checked above; the iterator yields exactly five items.
    args.total_bytes = parsed.next().unwrap()?;
    args.associativity = parsed.next().unwrap()?;
    args.line_bytes = parsed.next().unwrap()?;
    args.passes = parsed.next().unwrap()?;
    args.working_set = parsed.next().unwrap()?;
    Ok(args)
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = DipSimulator::builder()
        .total_bytes(args.total_bytes)
        .associativity(args.associativity)
        .line_bytes(args.line_bytes)
        .build()?;

    for _ in 0..args.passes {
        for line in 0..args.working_set {
            let _ = sim.access(line * args.line_bytes);
        }
    }

    let stats = sim.stats();
    println!("accesses:  {}", stats.accesses);
    println!("hits:      {}", stats.hits);
    println!("misses:    {}", stats.misses());
    println!("hit rate:  {:.2}%", stats.hit_rate() * 100.0);
    println!("final PSEL: {}", sim.psel());
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("dip_sweep: {msg}");
            eprintln!("usage: dip_sweep [total_bytes associativity line_bytes passes working_set]");
            return ExitCode::from(2);
        },
    };
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dip_sweep: {err}");
            ExitCode::FAILURE
        },
    }
}
