use bitmatch::{find_all_bitmap, find_bitmap, io::load_bitmap, SearchOptions};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Find a needle bitmap inside a haystack bitmap")]
struct Cli {
    /// Image to search in.
    haystack: PathBuf,
    /// Image to search for.
    needle: PathBuf,
    /// Left edge of the search region (clamped into bounds).
    #[arg(short, long, default_value_t = 0)]
    x: i64,
    /// Top edge of the search region (clamped into bounds).
    #[arg(short, long, default_value_t = 0)]
    y: i64,
    /// Region width; defaults to the haystack's right edge.
    #[arg(short = 'w', long)]
    width: Option<i64>,
    /// Region height; defaults to the haystack's bottom edge.
    #[arg(short = 'H', long)]
    height: Option<i64>,
    /// Per-channel color tolerance, 0-255.
    #[arg(short, long, default_value_t = 0)]
    variance: i32,
    /// Report every match instead of just the first.
    #[arg(short, long)]
    all: bool,
    /// Cap the number of matches reported with --all (-1 for unbounded).
    #[arg(short, long, default_value_t = -1)]
    max_matches: i64,
    /// Scan row bands in parallel.
    #[arg(short, long)]
    parallel: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    let haystack = match load_bitmap(&cli.haystack) {
        Ok(buf) => buf,
        Err(err) => {
            eprintln!("error: {}: {err}", cli.haystack.display());
            return ExitCode::FAILURE;
        }
    };
    let needle = match load_bitmap(&cli.needle) {
        Ok(buf) => buf,
        Err(err) => {
            eprintln!("error: {}: {err}", cli.needle.display());
            return ExitCode::FAILURE;
        }
    };

    let options = SearchOptions {
        x: cli.x,
        y: cli.y,
        width: cli.width,
        height: cli.height,
        variance: cli.variance,
        max_matches: cli.max_matches,
        parallel: cli.parallel,
    };

    if cli.all {
        let matches = find_all_bitmap(&haystack, &needle, &options);
        if matches.is_empty() {
            eprintln!("no match");
            return ExitCode::FAILURE;
        }
        for m in matches {
            println!("{} {}", m.x, m.y);
        }
        ExitCode::SUCCESS
    } else {
        match find_bitmap(&haystack, &needle, &options) {
            Some(m) => {
                println!("{} {}", m.x, m.y);
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("no match");
                ExitCode::FAILURE
            }
        }
    }
}
