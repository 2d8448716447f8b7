//! Tally CLI
//!
//! Points tables, results and formatting for match-result files.

use tallyc::commands::{self, read_input, report_error, STDIN_NAME};
use tallyc::{init_tracing, is_table_shorthand, parse_options, CliError, Options};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("table", String::as_str);
    let rest = args.get(2..).unwrap_or_default();

    match command {
        "table" => {
            let options = options_or_exit(rest);
            run(&options, |source| commands::table(source, options.scoring));
        }
        "results" => {
            let options = options_or_exit(rest);
            require_file(&options, "Usage: tally results <file> [--json]");
            run(&options, |source| commands::results(source, options.json));
        }
        "fmt" => {
            let options = options_or_exit(rest);
            require_file(&options, "Usage: tally fmt <file> [--indent=N]");
            run(&options, |source| commands::format(source, options.indent));
        }
        "parse" => {
            let options = options_or_exit(rest);
            require_file(&options, "Usage: tally parse <file>");
            run(&options, commands::parse);
        }
        "lex" => {
            let options = options_or_exit(rest);
            require_file(&options, "Usage: tally lex <file>");
            run(&options, |source| Ok(commands::lex(source)));
        }
        "next" => {
            let options = options_or_exit(rest);
            run(&options, commands::next);
        }
        "--explain" | "explain" => {
            let Some(code) = rest.first() else {
                eprintln!("Usage: tally explain <ERROR_CODE>");
                eprintln!("Example: tally explain E1001");
                std::process::exit(1);
            };
            let Some(text) = commands::explain(code) else {
                eprintln!("error: unknown error code '{code}'");
                std::process::exit(1);
            };
            print!("{text}");
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("tally {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            if is_table_shorthand(command) {
                let options = options_or_exit(args.get(1..).unwrap_or_default());
                run(&options, |source| commands::table(source, options.scoring));
            } else {
                eprintln!("Unknown command: {command}");
                eprintln!();
                print_usage();
                std::process::exit(1);
            }
        }
    }
}

fn options_or_exit(args: &[String]) -> Options {
    match parse_options(args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn require_file(options: &Options, usage: &str) {
    if options.file.is_none() {
        eprintln!("{usage}");
        std::process::exit(1);
    }
}

/// Read the input, run `command` on it and print the output.
///
/// Exits with status 1 on any error.
fn run(options: &Options, command: impl FnOnce(&str) -> Result<String, CliError>) {
    let path = options.file.as_deref();
    let display = path.unwrap_or(STDIN_NAME);

    let source = match read_input(path) {
        Ok(source) => source,
        Err(err) => {
            report_error(&err, display, "", options.color);
            std::process::exit(1);
        }
    };

    match command(&source) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            report_error(&err, display, &source, options.color);
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Tally: points tables for match results");
    println!();
    println!("Usage: tally <command> [options]");
    println!();
    println!("Commands:");
    println!("  table [file]         Print the points table (default; stdin if no file)");
    println!("  results <file>       Print the result of every game");
    println!("  fmt <file>           Print the canonical form of a file");
    println!("  next [file]          Print the next fixture of a three-team rotation");
    println!("  parse <file>         Parse and display statements");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  explain <code>       Explain an error code (e.g., E1001)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --win=N              Points for a win (default 3)");
    println!("  --draw=N             Points for a draw (default 1)");
    println!("  --loss=N             Points for a loss (default 0)");
    println!("  --json               Emit results as JSON");
    println!("  --indent=N           Indent statements after the first (fmt)");
    println!("  --color=<mode>       Diagnostics color: auto, always, never");
    println!();
    println!("Examples:");
    println!("  tally games.txt");
    println!("  cat games.txt | tally table --win=2");
    println!("  tally results games.txt --json");
    println!("  RUST_LOG=debug tally table games.txt");
}
