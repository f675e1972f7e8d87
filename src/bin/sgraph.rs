//! CLI entry point for the `sgraph` command-line tool.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use social_graph::cli::shell;
use social_graph::graph::SocialGraph;

#[derive(Parser)]
#[command(
    name = "sgraph",
    about = "Social network graph analyzer — paths, influence, and clusters"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Read commands from a file instead of stdin, then exit
    #[arg(long)]
    script: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let mut graph = SocialGraph::new();

    let result = match cli.script {
        Some(path) => match File::open(&path) {
            Ok(file) => shell::run(BufReader::new(file), &mut graph, json, false),
            Err(e) => {
                eprintln!("Error: cannot open {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let stdin = io::stdin();
            let locked = stdin.lock();
            shell::run(locked, &mut graph, json, true)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
