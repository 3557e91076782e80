//! Builds a graph, prints its structure and degrees, and runs the traversals.
//!
//! Usage:
//!   cargo run --example walkthrough
//!   cargo run --example walkthrough -- path/to/graph.txt --start A --target F
//!   cat path/to/graph.txt | cargo run --example walkthrough -- - --directed
//!
//! Without an input file the built-in sample graph is used.  Input files use
//! the edge-list format read by `adjlist::parse`.

use std::fs::File;
use std::io;
use std::process;

use adjlist::{
    Directedness, Graph,
    dot::write_dot,
    parse::read_edge_list,
    tracing_support::{Level, init_tracing},
};
use clap::Parser;

/// Run the graph walkthrough on a sample or user-supplied graph.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Edge-list file to load (use '-' for stdin; omit for the sample graph)
    input: Option<String>,

    /// Vertex to start traversals from
    #[arg(long, default_value = "A")]
    start: String,

    /// Vertex to search for
    #[arg(long, default_value = "F")]
    target: String,

    /// Report in- and out-degrees instead of list lengths
    #[arg(long)]
    directed: bool,

    /// Print the graph in DOT format and exit
    #[arg(long)]
    dot: bool,

    /// Log traversal details
    #[arg(short, long)]
    verbose: bool,
}

fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    for (src, dest) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E"), ("E", "F")] {
        graph.add_edge(src, dest, Directedness::Undirected);
    }
    graph.initialize_vertex("G");
    graph
}

fn load_or_exit(input: Option<&str>) -> Graph {
    let result = match input {
        None => return sample_graph(),
        Some("-") => read_edge_list(io::stdin().lock()),
        Some(path) => match File::open(path) {
            Ok(file) => read_edge_list(file),
            Err(err) => {
                eprintln!("Failed to open '{path}': {err}");
                process::exit(1);
            }
        },
    };
    result.unwrap_or_else(|err| {
        eprintln!("Invalid edge list: {err}");
        process::exit(1);
    })
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn main() {
    let args = Args::parse();
    init_tracing(if args.verbose { Level::DEBUG } else { Level::WARN });

    let mut graph = load_or_exit(args.input.as_deref());
    let directedness = Directedness::from_directed(args.directed);

    if args.dot {
        if let Err(err) = write_dot(&graph, "G", directedness, &mut io::stdout().lock()) {
            eprintln!("Failed to write DOT output: {err}");
            process::exit(1);
        }
        return;
    }

    let (start, target) = (args.start.as_str(), args.target.as_str());

    println!("=== Structure ===");
    print!("{}", graph.display());
    println!();
    println!("=== Degrees ===");
    print!("{}", graph.display_degrees(directedness));
    println!();

    println!("Neighbors of {start}: {:?}", graph.neighbors(start));
    println!("Edge {start} -> {target}? {}", yes_no(graph.has_edge(start, target)));
    println!("Route {start} to {target}? {}", yes_no(graph.has_route(start, target)));
    println!("Route {target} to {start}? {}", yes_no(graph.has_route(target, start)));

    let order = graph.bfs(start);
    println!("Breadth-first order from {start}: {}", order.join(", "));

    let path = graph.shortest_path(start, target);
    if path.is_empty() {
        println!("No path from {start} to {target}");
    } else {
        println!(
            "Shortest path: {} ({} edges)",
            path.join(" -> "),
            path.len() - 1
        );
    }

    // Cut the first edge on the path and try again.
    if let [first, second, ..] = path.as_slice() {
        println!();
        println!("Removing edge {first} -- {second}");
        graph.remove_edge(first, second, Directedness::Undirected);
        println!("Route {start} to {target} now? {}", yes_no(graph.has_route(start, target)));
        let detour = graph.shortest_path(start, target);
        if !detour.is_empty() {
            println!("Detour: {}", detour.join(" -> "));
        }
    }
}
