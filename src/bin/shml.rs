//! Command-line interface for shml
//! This binary translates SHML files into fully closed markup and exposes the
//! per-line classification the translator works from.
//!
//! Usage:
//!   shml process `<path>` [--indent `<n>`] [--output `<path>`]  - Translate a SHML file
//!   shml lines `<path>` [--format `<format>`]                 - Show per-line classification

use clap::{Arg, Command};

use shml::shml::lines::classify_lines;
use shml::shml::processor::Processor;

fn main() {
    let matches = Command::new("shml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for translating and inspecting SHML shorthand markup")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("process")
                .about("Translate a SHML file into fully closed markup")
                .arg(
                    Arg::new("path")
                        .help("Path to the SHML file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .short('i')
                        .help("Fixed output indent width (disables autodetection)")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the translation to this file instead of stdout"),
                ),
        )
        .subcommand(
            Command::new("lines")
                .about("Show the per-line classification of a SHML file")
                .arg(
                    Arg::new("path")
                        .help("Path to the SHML file")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'simple', 'json')")
                        .default_value("simple"),
                ),
        )
        .get_matches();

    // Handle subcommands
    match matches.subcommand() {
        Some(("process", process_matches)) => {
            let path = process_matches.get_one::<String>("path").unwrap();
            let indent = process_matches.get_one::<usize>("indent").copied();
            let output = process_matches.get_one::<String>("output");
            handle_process_command(path, indent, output.map(String::as_str));
        }
        Some(("lines", lines_matches)) => {
            let path = lines_matches.get_one::<String>("path").unwrap();
            let format = lines_matches.get_one::<String>("format").unwrap();
            handle_lines_command(path, format);
        }
        _ => unreachable!(),
    }
}

/// Handle the process command
fn handle_process_command(path: &str, indent: Option<usize>, output: Option<&str>) {
    let source = read_source(path);

    let result = match indent {
        Some(unit) => Processor::with_indent_unit(unit).process_with_fixed_indent(&source),
        None => Processor::new().process(&source),
    };

    let translated = result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match output {
        Some(out_path) => {
            std::fs::write(out_path, translated).unwrap_or_else(|e| {
                eprintln!("Error writing file: {}", e);
                std::process::exit(1);
            });
        }
        None => println!("{}", translated),
    }
}

/// Handle the lines command
fn handle_lines_command(path: &str, format: &str) {
    let source = read_source(path);
    let records = classify_lines(&source);

    match format {
        "simple" => {
            for record in &records {
                println!("{}", record.kind.to_grammar_string());
            }
        }
        "json" => {
            let json = serde_json::to_string_pretty(&records).unwrap_or_else(|e| {
                eprintln!("Error serializing records: {}", e);
                std::process::exit(1);
            });
            println!("{}", json);
        }
        other => {
            eprintln!("Unknown format: {} (expected 'simple' or 'json')", other);
            std::process::exit(1);
        }
    }
}

fn read_source(path: &str) -> String {
    std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file: {}", e);
        std::process::exit(1);
    })
}
