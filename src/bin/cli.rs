use anyhow::{Context, Result};
use chrono::NaiveDate;
use otayori::config::Config;
use otayori::engine;
use otayori::prompt;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::io::Read;
use std::path::PathBuf;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    // Handle help flag
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h" || args[1] == "help") {
        print_help();
        return Ok(());
    }

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    init_logging(verbose);

    // CLI Command: otayori prompt
    if args.len() > 1 && args[1] == "prompt" {
        let config = Config::load(&config_path(&args)?)?;
        print!("{}", prompt::render_prompt(&config));
        return Ok(());
    }

    let config = match Config::load(&config_path(&args)?) {
        Ok(config) => config,
        Err(e) => {
            // A broken profile is fatal: report it rather than extracting
            // against a partial, possibly-misleading registry.
            log::error!("{}", e);
            return Err(e);
        }
    };

    let summary = read_summary(&args)?;
    let people = config.people();
    let rules = config.section_rules();

    let records = match flag_value(&args, "--reference") {
        Some(raw) => {
            let reference = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .with_context(|| format!("Invalid --reference date '{}'", raw))?;
            engine::extract_tasks(&summary, &people, &rules, reference)
        }
        None => engine::extract_tasks_today(&summary, &people, &rules),
    };

    for record in &records {
        println!("{}", serde_json::to_string(record)?);
    }
    log::info!("Extracted {} task(s)", records.len());
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

/// Value of `--flag <value>`, when present.
fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn config_path(args: &[String]) -> Result<PathBuf> {
    match flag_value(args, "--config") {
        Some(path) => Ok(PathBuf::from(path)),
        None => Config::default_path(),
    }
}

/// The summary text: the first non-flag argument as a file path, or stdin.
fn read_summary(args: &[String]) -> Result<String> {
    let mut skip_next = false;
    for arg in &args[1..] {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--config" || arg == "--reference" {
            skip_next = true;
            continue;
        }
        if arg == "-v" || arg == "--verbose" {
            continue;
        }
        return std::fs::read_to_string(arg)
            .with_context(|| format!("Failed to read summary file '{}'", arg));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read summary from stdin")?;
    Ok(buffer)
}

fn print_help() {
    println!(
        "Otayori v{} - Extracts actionable tasks from newsletter summaries",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    otayori [OPTIONS] [summary.txt]        Extract tasks (stdin when no file)");
    println!("    otayori prompt [--config <path>]       Print the summarization prompt");
    println!("    otayori --help                         Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --config <path>          Profile file (default: platform config dir)");
    println!("    --reference YYYY-MM-DD   Reference date for bare month/day deadlines");
    println!("    -v, --verbose            Log skipped lines and their reasons");
    println!();
    println!("OUTPUT:");
    println!("    One JSON object per extracted task, in section then line order.");
}
