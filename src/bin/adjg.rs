//! CLI entry point for the `adjg` interactive graph tool.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use adjgraph::{Backend, GraphError, OutputFormat, Session, SessionOptions};

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "Interactive directed graph over an adjacency matrix or adjacency list"
)]
struct Cli {
    /// Storage backend: "matrix" (1) or "list" (2). Prompted if omitted.
    #[arg(long)]
    backend: Option<String>,

    /// Number of vertices. Prompted if omitted.
    #[arg(long)]
    vertices: Option<usize>,

    /// Output format for printing the graph: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Read menu input from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Suppress menus and prompts
    #[arg(long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let format = match OutputFormat::from_name(&cli.format) {
        Some(f) => f,
        None => {
            eprintln!("Invalid output format: {}", cli.format);
            process::exit(3);
        }
    };

    let backend = match cli.backend.as_deref().map(|b| (b, Backend::from_name(b))) {
        None => None,
        Some((_, Some(b))) => Some(b),
        Some((name, None)) => {
            eprintln!("Invalid option! Unknown backend: {}", name);
            process::exit(3);
        }
    };

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => match File::open(path) {
            Ok(f) => Box::new(BufReader::new(f)),
            Err(e) => {
                eprintln!("Error: cannot open {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Box::new(io::stdin().lock()),
    };

    let options = SessionOptions {
        quiet: cli.quiet,
        format,
    };

    let result = Session::start(input, io::stdout().lock(), options, backend, cli.vertices)
        .and_then(|mut session| session.run());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidBackend(_)
            | GraphError::TooManyVertices { .. }
            | GraphError::InvalidInteger(_) => 3,
            _ => 5,
        };
        process::exit(code);
    }
}
