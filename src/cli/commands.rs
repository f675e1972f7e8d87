//! CLI command implementations.
//!
//! Each function maps to one shell command, runs an engine operation, and
//! prints the structured result in text or JSON form. Printing happens only
//! here; the engine itself never performs I/O.

use crate::engine::QueryEngine;
use crate::graph::SocialGraph;
use crate::types::GraphResult;

/// Add a person to the network.
pub fn cmd_add_person(graph: &mut SocialGraph, name: &str, json: bool) -> GraphResult<()> {
    let id = graph.add_person(name)?;
    if json {
        println!("{}", serde_json::json!({"added": name, "id": id}));
    } else {
        println!("Person '{}' added to the network.", name);
    }
    Ok(())
}

/// Remove a person and all their connections.
pub fn cmd_remove_person(graph: &mut SocialGraph, name: &str, json: bool) -> GraphResult<()> {
    let person = graph.remove_person(name)?;
    if json {
        println!("{}", serde_json::json!({"removed": person.name, "id": person.id}));
    } else {
        println!("Person '{}' removed from the network.", name);
    }
    Ok(())
}

/// Add a connection between two people.
pub fn cmd_connect(graph: &mut SocialGraph, a: &str, b: &str, json: bool) -> GraphResult<()> {
    graph.add_connection(a, b)?;
    if json {
        println!("{}", serde_json::json!({"connected": [a, b]}));
    } else {
        println!("Connection added between '{}' and '{}'.", a, b);
    }
    Ok(())
}

/// Remove the connection between two people.
pub fn cmd_disconnect(graph: &mut SocialGraph, a: &str, b: &str, json: bool) -> GraphResult<()> {
    graph.remove_connection(a, b)?;
    if json {
        println!("{}", serde_json::json!({"disconnected": [a, b]}));
    } else {
        println!("Connection removed between '{}' and '{}'.", a, b);
    }
    Ok(())
}

/// Find the shortest path between two people.
pub fn cmd_path(
    graph: &SocialGraph,
    engine: &QueryEngine,
    from: &str,
    to: &str,
    json: bool,
) -> GraphResult<()> {
    let snapshot = graph.snapshot();
    let path = engine.shortest_path(&snapshot, from, to)?;
    if json {
        println!(
            "{}",
            serde_json::json!({
                "from": from,
                "to": to,
                "path": path,
                "hops": path.len().saturating_sub(1),
            })
        );
    } else {
        println!(
            "Shortest path between '{}' and '{}': {}",
            from,
            to,
            path.join(" -> ")
        );
    }
    Ok(())
}

/// Find the most influential person (highest degree).
pub fn cmd_influencer(graph: &SocialGraph, engine: &QueryEngine, json: bool) -> GraphResult<()> {
    let snapshot = graph.snapshot();
    let (name, degree) = engine.max_degree(&snapshot)?;
    if json {
        println!("{}", serde_json::json!({"name": name, "degree": degree}));
    } else {
        println!(
            "The most influential person is '{}' with {} connections.",
            name, degree
        );
    }
    Ok(())
}

/// List the clusters of connected people.
pub fn cmd_clusters(graph: &SocialGraph, engine: &QueryEngine, json: bool) -> GraphResult<()> {
    let snapshot = graph.snapshot();
    let clusters = engine.components(&snapshot);
    if json {
        println!("{}", serde_json::json!({"clusters": clusters}));
    } else {
        println!("Clusters of connected people:");
        for (i, cluster) in clusters.iter().enumerate() {
            println!("Cluster {}: {}", i + 1, cluster.join(", "));
        }
    }
    Ok(())
}

/// List a person's direct connections.
pub fn cmd_neighbors(
    graph: &SocialGraph,
    engine: &QueryEngine,
    name: &str,
    json: bool,
) -> GraphResult<()> {
    let snapshot = graph.snapshot();
    let neighbors = engine.neighbors_of(&snapshot, name)?;
    if json {
        println!("{}", serde_json::json!({"name": name, "connections": neighbors}));
    } else if neighbors.is_empty() {
        println!("'{}' has no connections.", name);
    } else {
        println!("'{}' is connected to: {}", name, neighbors.join(", "));
    }
    Ok(())
}

/// Print summary statistics about the network.
pub fn cmd_stats(graph: &SocialGraph, engine: &QueryEngine, json: bool) -> GraphResult<()> {
    let snapshot = graph.snapshot();
    let clusters = engine.components(&snapshot);
    let isolated = snapshot
        .people()
        .iter()
        .filter(|p| snapshot.degree(p.id) == 0)
        .count();
    let top = engine.max_degree(&snapshot).ok();

    if json {
        let info = serde_json::json!({
            "people": snapshot.node_count(),
            "connections": snapshot.edge_count(),
            "clusters": clusters.len(),
            "isolated": isolated,
            "most_connected": top.map(|(name, degree)| {
                serde_json::json!({"name": name, "degree": degree})
            }),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("People: {}", snapshot.node_count());
        println!("Connections: {}", snapshot.edge_count());
        println!("Clusters: {}", clusters.len());
        println!("Isolated people: {}", isolated);
        match top {
            Some((name, degree)) => {
                println!("Most connected: '{}' with {} connections", name, degree)
            }
            None => println!("Most connected: n/a"),
        }
    }
    Ok(())
}

/// Export the node/edge lists as JSON for an external visualizer.
pub fn cmd_export(graph: &SocialGraph, pretty: bool) -> GraphResult<()> {
    let render = graph.snapshot().render();
    if pretty {
        println!(
            "{}",
            serde_json::to_string_pretty(&render).unwrap_or_default()
        );
    } else {
        println!("{}", serde_json::to_string(&render).unwrap_or_default());
    }
    Ok(())
}
