//! Component Notation CLI.

use std::path::{Path, PathBuf};

use cn_fmt::FormatConfig;
use cnc::commands::{check_files, collect_files, eval_expression, parse_file, run_format};
use cnc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "parse" => {
            let strict = args.iter().skip(2).any(|a| a == "--strict");
            let Some(path) = args.iter().skip(2).find(|a| !a.starts_with('-')) else {
                eprintln!("Usage: cn parse <file.cn> [--strict]");
                std::process::exit(1);
            };
            match parse_file(Path::new(path), strict) {
                Ok(tree) => print!("{tree}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: cn check <paths...>");
                std::process::exit(1);
            }
            let paths: Vec<PathBuf> = args[2..].iter().map(PathBuf::from).collect();
            let files = match collect_files(&paths) {
                Ok(files) => files,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            };
            let failed = check_files(&files);
            if failed > 0 {
                eprintln!("{failed} of {} files have structural errors", files.len());
                std::process::exit(1);
            }
        }
        "fmt" => {
            if !run_format(&args[2..]) {
                std::process::exit(1);
            }
        }
        "eval" => {
            let Some(expression) = args.get(2) else {
                eprintln!("Usage: cn eval \"<lhs> <op> <rhs>\"");
                eprintln!("Example: cn eval \"4 == even\"");
                std::process::exit(1);
            };
            match eval_expression(expression, &FormatConfig::default()) {
                Ok(result) => println!("{result}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("cn {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Component Notation tool");
    println!();
    println!("Usage: cn <command> [options]");
    println!();
    println!("Commands:");
    println!("  parse <file.cn>      Parse a declaration and print its tree");
    println!("  check <paths...>     Report structural errors (exit 1 if any)");
    println!("  fmt [paths...]       Rewrite files in canonical form");
    println!("  eval \"<expr>\"        Evaluate a single-operator expression");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Parse options:");
    println!("  --strict            Fail on structural errors instead of tolerating them");
    println!();
    println!("Format options:");
    println!("  --check             Check if files are formatted (exit 1 if not)");
    println!("  --diff              Show diff output instead of modifying files");
    println!("  --pretty            Break wide child lists onto indented lines");
    println!("  --alpha             Keep alpha on colors that are not opaque");
    println!("  --precision=N       Write floats with N decimals");
    println!();
    println!("Environment:");
    println!("  RUST_LOG            Enable logging (e.g. RUST_LOG=cn_parse=debug)");
    println!();
    println!("Examples:");
    println!("  cn parse ui/panel.cn");
    println!("  cn check ui/");
    println!("  cn fmt --check                  # Check formatting (for CI)");
    println!("  cn fmt --pretty ui/panel.cn");
    println!("  cn eval \"[1,2] & 2\"             # true");
    println!("  cn eval \"'hp: ' += 10\"          # \"hp: 10\"");
}
