//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Parse options and `--color` live on the root command and are global.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("keel")
        .about("Inspect Keel syntax trees, tokens and diagnostics")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(lang_version_arg())
        .arg(doc_mode_arg())
        .arg(options_file_arg())
        .arg(color_arg())
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(tokens_command())
}

/// Print the concrete syntax tree.
pub fn ast_command() -> Command {
    Command::new("ast")
        .about("Show the syntax tree of a file or fragment")
        .override_usage(
            "\
  keel ast <FILE>
  keel ast -s <TEXT> [--fragment <KIND>]",
        )
        .after_help(
            r#"EXAMPLES:
  keel ast Program.kl                       # whole file
  keel ast Program.kl --trivia --spans      # with comments and positions
  keel ast -s 'a ?? b' --fragment expr      # inline expression
  keel ast -s 'List{T}.Add' --fragment cref # documentation reference"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(fragment_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
}

/// Report diagnostics; exit status 1 on errors.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Report syntax errors and warnings")
        .override_usage(
            "\
  keel check <FILE>
  keel check -s <TEXT> [--json]",
        )
        .after_help(
            r#"EXAMPLES:
  keel check Program.kl                     # errors and warnings, exit 1 on errors
  keel check Program.kl --lang-version 9    # check against an older version
  keel check - --json < Program.kl          # JSON diagnostics from stdin"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(json_arg())
}

/// Print the token stream.
pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("Show the token stream")
        .override_usage(
            "\
  keel tokens <FILE>
  keel tokens -s <TEXT> [--trivia]",
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(trivia_arg())
        .arg(spans_arg())
}
