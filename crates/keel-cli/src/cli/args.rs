//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! Parse options are global so they may appear before or after the subcommand.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Source file to parse (positional). `-` reads stdin.
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Source file to parse (`-` for stdin)")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline source text")
}

/// Entry point of the grammar (--fragment).
pub fn fragment_arg() -> Arg {
    Arg::new("fragment")
        .long("fragment")
        .value_name("KIND")
        .default_value("file")
        .value_parser(["file", "expr", "stmt", "cref"])
        .help("Parse the input as a whole file, an expression, a statement or a cref")
}

/// Include whitespace and comments (--trivia).
pub fn trivia_arg() -> Arg {
    Arg::new("trivia")
        .long("trivia")
        .action(ArgAction::SetTrue)
        .help("Include whitespace and comments")
}

/// Show source positions (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show source positions")
}

/// Output diagnostics as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print diagnostics as JSON on stdout")
}

/// Language version (--lang-version).
pub fn lang_version_arg() -> Arg {
    Arg::new("lang_version")
        .long("lang-version")
        .value_name("VERSION")
        .global(true)
        .help("Language version: 7..12 or `latest` (default: latest)")
}

/// Documentation comment handling (--doc-mode).
pub fn doc_mode_arg() -> Arg {
    Arg::new("doc_mode")
        .long("doc-mode")
        .value_name("MODE")
        .global(true)
        .help("Documentation comments: none, parse or diagnose (default: none)")
}

/// JSON options file (--options).
pub fn options_file_arg() -> Arg {
    Arg::new("options")
        .long("options")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .global(true)
        .help("Read parse options from a JSON file; other flags override it")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .global(true)
        .help("Colorize output")
}
