//! Self-play CLI
//!
//! Run matches between automated opponents and print or save the results.

use selfplay::{create_engine, MatchArgs, MatchRunner, Result, SelfPlayError};
use std::env;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Chess rules self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay match <engine1> <engine2> [--games N] [--max-plies N] [--seed S]");
    println!("                 [--config FILE] [--report FILE]");
    println!();
    println!("Engines:");
    println!("  random        - Uniformly random legal moves");
    println!("  random:SEED   - Random engine with a fixed seed");
    println!();
    println!("Examples:");
    println!("  selfplay match random:1 random:2 --games 20");
    println!("  selfplay match random random --config selfplay.toml --report out.json");
}

fn run_match(args: &[String]) -> Result<()> {
    let args = MatchArgs::parse(args)?;
    let config = args.resolve_config()?;

    let mut engine1 = create_engine(&args.engine1, config.seed)?;
    let mut engine2 = create_engine(&args.engine2, config.seed.map(|s| s.wrapping_add(1)))?;

    println!("=== Match: {} vs {} ===", args.engine1, args.engine2);
    println!("Games: {}, Max plies: {}", config.num_games, config.max_plies);
    println!();

    let runner = MatchRunner::new(config);
    let report = runner.run_match(engine1.as_mut(), engine2.as_mut());

    println!();
    report.print_report();

    if let Some(path) = &args.report_path {
        report.save(path)?;
        println!("Report saved to {}", path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::FAILURE;
    }

    match args[1].as_str() {
        "match" => match run_match(&args[2..]) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!("match failed: {e}");
                if matches!(e, SelfPlayError::Usage(_) | SelfPlayError::UnknownEngine(_)) {
                    print_usage();
                }
                ExitCode::FAILURE
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            ExitCode::FAILURE
        }
    }
}
