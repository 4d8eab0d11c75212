//! Arithmetic method catalog generator CLI
//!
//! Prints the generated operator-overload method catalog, ready to be
//! pasted into the enclosing hand-written class.
//!
//! Usage:
//!   cargo run --bin arithgen
//!   cargo run --bin arithgen -- -o OperatorSupport.methods
//!   cargo run --bin arithgen -- --json

use std::env;
use std::fs;
use std::process;

use arith_codegen::{generate_catalog, render_catalog, GenResult};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Command-line arguments
#[derive(Debug)]
struct Args {
    /// Output file path (stdout if absent)
    output_file: Option<String>,
    /// Dump catalog records as JSON instead of source text
    json: bool,
    /// Show help
    show_help: bool,
    /// Show version
    show_version: bool,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut parsed = Args {
            output_file: None,
            json: false,
            show_help: false,
            show_version: false,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => parsed.show_help = true,
                "-v" | "--version" => parsed.show_version = true,
                "-o" | "--output" => {
                    i += 1;
                    if i < args.len() {
                        parsed.output_file = Some(args[i].clone());
                    }
                }
                "--json" => parsed.json = true,
                _ => {
                    eprintln!("Unknown option: {}", args[i]);
                }
            }
            i += 1;
        }

        parsed
    }
}

fn print_help() {
    println!(
        r#"Arithmetic method catalog generator v{}

USAGE:
    arithgen [OPTIONS]

OPTIONS:
    -h, --help       Show this help message
    -v, --version    Show version information
    -o, --output     Write to a file instead of stdout
    --json           Dump the catalog records as JSON

With no options the full method catalog is printed to stdout. The type and
operator tables are fixed; there is nothing to configure.
"#,
        VERSION
    );
}

fn run(args: &Args) -> GenResult<()> {
    let catalog = generate_catalog()?;

    let text = if args.json {
        let mut json = serde_json::to_string_pretty(&catalog)?;
        json.push('\n');
        json
    } else {
        render_catalog(&catalog)
    };

    match &args.output_file {
        Some(path) => fs::write(path, text)?,
        None => print!("{}", text),
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if args.show_help {
        print_help();
        return;
    }

    if args.show_version {
        println!("arithgen v{}", VERSION);
        return;
    }

    if let Err(err) = run(&args) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
