#![forbid(unsafe_code)]

pub mod checks;
pub mod cli;
pub mod document;
pub mod matcher;
pub mod normalize;
pub mod output;
pub mod report;

pub use document::CanonicalDocument;
pub use matcher::{CheckOptions, Fragment, check_absent, check_contains, check_element_count};
pub use normalize::{NormalizeOptions, WhitespaceMode, normalize};
pub use report::{CheckError, DiagnosticFormatter, PlainFormatter, render_error};

/// Run the bodycheck CLI. Returns an exit code (0, 1, or 2).
pub fn run() -> u8 {
    use clap::Parser;
    use cli::{Cli, Command};

    let cli = Cli::parse();

    if cli.schema {
        return handle_schema();
    }

    match cli.command {
        Some(Command::Normalize { doc, newlines }) => handle_normalize(doc.as_deref(), newlines),
        None => handle_check_mode(cli),
    }
}

/// Handle --schema flag: print the checks-file JSON Schema and exit.
fn handle_schema() -> u8 {
    let schema = serde_json::json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "title": "bodycheck checks file",
        "type": "object",
        "required": ["checks"],
        "properties": {
            "checks": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "contains": {
                            "type": "object",
                            "required": ["fragments"],
                            "properties": {
                                "fragments": { "type": "array" },
                                "ignore_ordering": { "type": "boolean" },
                                "starts_after": { "type": "string" },
                                "ends_before": { "type": "string" },
                                "preserve_newlines": { "type": "boolean" }
                            }
                        },
                        "absent": {
                            "type": "object",
                            "required": ["fragments"],
                            "properties": {
                                "fragments": { "type": "array" },
                                "starts_after": { "type": "string" },
                                "ends_before": { "type": "string" }
                            }
                        },
                        "element_count": {
                            "type": "object",
                            "required": ["tag", "count"],
                            "properties": {
                                "tag": { "type": "string" },
                                "count": { "type": "integer", "minimum": 1 }
                            }
                        }
                    }
                }
            }
        }
    });

    if let Ok(json) = serde_json::to_string_pretty(&schema) {
        println!("{}", json);
        0
    } else {
        eprintln!("Error: failed to serialize schema");
        2
    }
}

/// Handle the normalize subcommand: print the canonical document.
fn handle_normalize(doc: Option<&std::path::Path>, newlines: bool) -> u8 {
    let body = match read_input(doc) {
        Ok(body) => body,
        Err(error) => {
            eprintln!("Error: {error}");
            return 2;
        }
    };

    let options = normalize::NormalizeOptions {
        whitespace: if newlines {
            WhitespaceMode::Newlines
        } else {
            WhitespaceMode::Flatten
        },
    };
    println!("{}", normalize::normalize(&body, &options));
    0
}

/// Handle default mode: evaluate a checks file against the document.
fn handle_check_mode(cli: cli::Cli) -> u8 {
    use cli::Outcome;
    use output::jsonl::write_jsonl;

    let Some(checks_path) = cli.checks.as_deref() else {
        eprintln!("Error: --checks FILE is required");
        return Outcome::Refusal.exit_code();
    };

    let file = match checks::parse(checks_path) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("Error: {error}");
            return Outcome::Refusal.exit_code();
        }
    };

    let body = match read_input(cli.input.as_deref()) {
        Ok(body) => body,
        Err(error) => {
            eprintln!("Error: {error}");
            return Outcome::Refusal.exit_code();
        }
    };

    let defaults = CheckOptions {
        context_chars: cli.context_chars,
        context_fragments: cli.context_fragments,
        ..CheckOptions::default()
    };
    let results = checks::run_checks(&body, &file, &defaults);

    let outcome = if results.iter().all(|result| result.passed) {
        Outcome::AllPassed
    } else {
        Outcome::Partial
    };

    let mut stdout = std::io::stdout();
    if let Err(error) = write_jsonl(&mut stdout, &results) {
        eprintln!("Error writing output: {error}");
        return Outcome::Refusal.exit_code();
    }

    outcome.exit_code()
}

/// Read the response body from a file or stdin.
fn read_input(input_path: Option<&std::path::Path>) -> Result<String, String> {
    use std::io::Read;

    match input_path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|error| format!("failed to read document '{}': {error}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .map_err(|error| format!("failed to read document from stdin: {error}"))?;
            Ok(body)
        }
    }
}
