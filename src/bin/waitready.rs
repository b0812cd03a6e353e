//! Waits for an HTTP endpoint to come up, then exits 0; exits 1 if it
//! never does. Intended for smoke tests and compose/CI wait-for loops.

use std::{env, process};

use waitready::{ProbeOptions, Prober};

fn usage() -> ! {
    eprintln!("Usage:   waitready <URL> [MAX_ATTEMPTS] [DELAY_MS]");
    eprintln!("Example: waitready http://localhost:3000/login 10 5000");
    process::exit(1);
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        usage();
    }

    let url = args[1].clone();
    let mut options = ProbeOptions::default();
    if let Some(raw) = args.get(2) {
        match raw.parse::<usize>() {
            Ok(n) if n > 0 => options.max_attempts = n,
            _ => usage(),
        }
    }
    if let Some(raw) = args.get(3) {
        match raw.parse::<u64>() {
            Ok(ms) => options.delay_ms = ms,
            Err(_) => usage(),
        }
    }

    println!("Probing {url} ...");

    let prober = Prober::new(url.as_str()).with_options(options);
    if prober.probe().await {
        println!("{url} is up and running.");
    } else {
        println!("{url} is not responding.");
        process::exit(1);
    }
}
