//! Interactive command loop.
//!
//! Reads one command per line and dispatches to the command layer. Engine
//! errors are printed and the loop continues; only `quit` or end of input
//! ends the session.

use std::io::{self, BufRead, Write};

use crate::engine::QueryEngine;
use crate::graph::SocialGraph;
use crate::types::GraphResult;

use super::commands;

/// Outcome of dispatching a single command line.
enum Dispatch {
    Continue,
    Quit,
}

/// Run the command loop over `input`, mutating `graph` in place.
///
/// `interactive` controls the prompt and the greeting; scripted runs skip
/// both so output stays machine-readable.
pub fn run<R: BufRead>(
    mut input: R,
    graph: &mut SocialGraph,
    json: bool,
    interactive: bool,
) -> io::Result<()> {
    let engine = QueryEngine::new();

    if interactive && !json {
        println!("--- Social Network Graph Analyzer ---");
        print_help();
    }

    let mut line = String::new();
    loop {
        if interactive {
            print!("> ");
            io::stdout().flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match dispatch(graph, &engine, trimmed, json) {
            Ok(Dispatch::Continue) => {}
            Ok(Dispatch::Quit) => break,
            Err(err) => {
                if json {
                    println!("{}", serde_json::json!({"error": err.to_string()}));
                } else {
                    println!("{err}.");
                }
            }
        }
    }

    Ok(())
}

/// Parse one line and run the matching command.
fn dispatch(
    graph: &mut SocialGraph,
    engine: &QueryEngine,
    line: &str,
    json: bool,
) -> GraphResult<Dispatch> {
    let mut parts = line.split_whitespace();
    let command = match parts.next() {
        Some(word) => word,
        None => return Ok(Dispatch::Continue),
    };
    let args: Vec<&str> = parts.collect();

    match (command, args.as_slice()) {
        ("add", [name]) => commands::cmd_add_person(graph, name, json)?,
        ("remove", [name]) => commands::cmd_remove_person(graph, name, json)?,
        ("connect", [a, b]) => commands::cmd_connect(graph, a, b, json)?,
        ("disconnect", [a, b]) => commands::cmd_disconnect(graph, a, b, json)?,
        ("path", [from, to]) => commands::cmd_path(graph, engine, from, to, json)?,
        ("influencer", []) => commands::cmd_influencer(graph, engine, json)?,
        ("clusters", []) => commands::cmd_clusters(graph, engine, json)?,
        ("neighbors", [name]) => commands::cmd_neighbors(graph, engine, name, json)?,
        ("stats", []) => commands::cmd_stats(graph, engine, json)?,
        ("export", []) => commands::cmd_export(graph, !json)?,
        ("help", _) => print_help(),
        ("quit" | "exit", _) => return Ok(Dispatch::Quit),
        _ => println!("Invalid command, please try 'help'."),
    }

    Ok(Dispatch::Continue)
}

/// Print the command reference.
fn print_help() {
    println!("Commands:");
    println!("  add <name>               Add a person");
    println!("  remove <name>            Remove a person and their connections");
    println!("  connect <a> <b>          Add a connection");
    println!("  disconnect <a> <b>       Remove a connection");
    println!("  path <a> <b>             Shortest path between two people");
    println!("  influencer               Most connected person");
    println!("  clusters                 Clusters of connected people");
    println!("  neighbors <name>         Direct connections of a person");
    println!("  stats                    Network statistics");
    println!("  export                   Node/edge lists as JSON");
    println!("  help                     Show this reference");
    println!("  quit                     Exit");
}
