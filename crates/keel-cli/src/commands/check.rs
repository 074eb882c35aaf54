use keel_syntax::{DiagnosticRecord, Diagnostics, parse};
use serde::Serialize;

use super::input::{OptionsArgs, SourceArgs, exit_with, load_source, resolve_options};

pub struct CheckArgs {
    pub source: SourceArgs,
    pub options: OptionsArgs,
    pub json: bool,
    pub color: bool,
}

/// `--json` output.
#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub source: &'a str,
    pub errors: usize,
    pub warnings: usize,
    pub diagnostics: Vec<DiagnosticRecord>,
}

impl<'a> CheckReport<'a> {
    pub fn new(source: &'a str, diagnostics: &Diagnostics) -> Self {
        Self {
            source,
            errors: diagnostics.error_count(),
            warnings: diagnostics.warning_count(),
            diagnostics: diagnostics.to_records(),
        }
    }
}

pub fn run(args: CheckArgs) {
    let source = load_source(&args.source).unwrap_or_else(|e| exit_with(e));
    let options = resolve_options(&args.options).unwrap_or_else(|e| exit_with(e));

    let parsed = parse(&source.text, &options);
    let diagnostics = parsed.diagnostics();

    if args.json {
        let report = CheckReport::new(&source.name, diagnostics);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else if !diagnostics.is_empty() {
        eprint!(
            "{}",
            diagnostics
                .printer(&source.text)
                .path(&source.name)
                .colored(args.color)
                .render()
        );
    }

    if diagnostics.has_errors() {
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
