//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors, including the global parse-option flags
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::{AstArgs, Fragment};
use crate::commands::check::CheckArgs;
use crate::commands::input::{OptionsArgs, SourceArgs};
use crate::commands::tokens::TokensArgs;

/// Source selection shared by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
}

impl SourceParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
        }
    }
}

impl From<SourceParams> for SourceArgs {
    fn from(p: SourceParams) -> Self {
        Self {
            path: p.source_path,
            text: p.source_text,
        }
    }
}

/// Global parse-option flags, kept as text until the options file is merged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsParams {
    pub options_file: Option<PathBuf>,
    pub lang_version: Option<String>,
    pub doc_mode: Option<String>,
}

impl OptionsParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            options_file: m.get_one::<PathBuf>("options").cloned(),
            lang_version: m.get_one::<String>("lang_version").cloned(),
            doc_mode: m.get_one::<String>("doc_mode").cloned(),
        }
    }
}

impl From<OptionsParams> for OptionsArgs {
    fn from(p: OptionsParams) -> Self {
        Self {
            file: p.options_file,
            lang_version: p.lang_version,
            doc_mode: p.doc_mode,
        }
    }
}

pub struct AstParams {
    pub source: SourceParams,
    pub options: OptionsParams,
    pub fragment: Fragment,
    pub trivia: bool,
    pub spans: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
            options: OptionsParams::from_matches(m),
            fragment: m
                .get_one::<String>("fragment")
                .and_then(|name| Fragment::from_name(name))
                .unwrap_or_default(),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            source: p.source.into(),
            options: p.options.into(),
            fragment: p.fragment,
            trivia: p.trivia,
            spans: p.spans,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub source: SourceParams,
    pub options: OptionsParams,
    pub json: bool,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
            options: OptionsParams::from_matches(m),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source: p.source.into(),
            options: p.options.into(),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub source: SourceParams,
    pub trivia: bool,
    pub spans: bool,
    // Note: parse options are accepted (they are global) but the lexer ignores them
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
            trivia: m.get_flag("trivia"),
            spans: m.get_flag("spans"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            source: p.source.into(),
            trivia: p.trivia,
            spans: p.spans,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
