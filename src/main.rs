// makexpr: parse Make-style macro expressions and print their trees

use std::fs;
use std::path::Path;

use makexpr::parser::{Parser, SourceLocation, Value};

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <file.mk>", program_name);
    eprintln!("       {} -e <expression>", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} Makefile                   # Parse every line", program_name);
    eprintln!(
        "  {} -e '$(subst .c,.o,$(SRCS))'  # Parse one expression",
        program_name
    );
}

fn print_value(label: &str, value: &Value) {
    println!("{}: {}", label, value);
    println!("    {:?}", value);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("makexpr");

    let parser = Parser::default();

    match args.get(1).map(|s| s.as_str()) {
        Some("-e") => {
            let Some(expr) = args.get(2) else {
                eprintln!("Error: -e needs an expression");
                print_usage(program_name);
                std::process::exit(1);
            };
            match parser.parse(expr.as_bytes()) {
                Ok(value) => print_value("expr", &value),
                Err(e) => {
                    let loc = e.location(expr.as_bytes());
                    eprintln!("Parser error at column {}: {}", loc.column, e);
                    std::process::exit(1);
                }
            }
        }
        Some(file) => {
            if !Path::new(file).exists() {
                eprintln!("Error: File '{}' not found", file);
                print_usage(program_name);
                std::process::exit(1);
            }

            let source = match fs::read(file) {
                Ok(source) => source,
                Err(e) => {
                    eprintln!("Error: Failed to read '{}': {}", file, e);
                    std::process::exit(1);
                }
            };

            eprintln!("Parsing {}...", file);
            let mut count = 0;
            for segment in parser.segments(&source, b'\n') {
                match segment {
                    Ok(segment) => {
                        count += 1;
                        if segment.len == 0 {
                            continue;
                        }
                        let loc = SourceLocation::from_offset(&source, segment.offset);
                        print_value(&format!("line {}", loc.line), &segment.value);
                    }
                    Err(e) => {
                        let loc = e.location(&source);
                        eprintln!(
                            "Parser error at line {}, column {}: {}",
                            loc.line, loc.column, e
                        );
                        std::process::exit(1);
                    }
                }
            }
            eprintln!("Parsed successfully. Found {} segments.", count);
        }
        None => {
            eprintln!("Error: No input provided");
            eprintln!();
            print_usage(program_name);
            std::process::exit(1);
        }
    }
}
