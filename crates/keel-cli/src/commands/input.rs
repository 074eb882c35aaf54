//! Loading the source text and resolving parse options.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use keel_syntax::{DocumentationMode, LanguageVersion, ParseOptions};
use tracing::debug;

pub struct SourceArgs {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
}

pub struct OptionsArgs {
    pub file: Option<PathBuf>,
    pub lang_version: Option<String>,
    pub doc_mode: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("source is required: use a positional FILE or -s/--source")]
    MissingSource,

    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid options file '{}': {source}", .path.display())]
    Options {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Syntax(#[from] keel_syntax::Error),
}

/// Source text plus the name diagnostics are reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

pub fn load_source(args: &SourceArgs) -> Result<Source, InputError> {
    if let Some(text) = &args.text {
        return Ok(Source {
            name: "<inline>".to_string(),
            text: text.clone(),
        });
    }

    let Some(path) = &args.path else {
        return Err(InputError::MissingSource);
    };
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(InputError::Stdin)?;
        return Ok(Source {
            name: "<stdin>".to_string(),
            text,
        });
    }

    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded source");
    Ok(Source {
        name: path.to_string_lossy().into_owned(),
        text,
    })
}

/// Options file first, then `--lang-version` and `--doc-mode` on top.
pub fn resolve_options(args: &OptionsArgs) -> Result<ParseOptions, InputError> {
    let mut options = match &args.file {
        Some(path) => load_options_file(path)?,
        None => ParseOptions::default(),
    };
    if let Some(version) = &args.lang_version {
        options.language_version = version.parse::<LanguageVersion>()?;
    }
    if let Some(mode) = &args.doc_mode {
        options.documentation_mode = mode.parse::<DocumentationMode>()?;
    }
    debug!(?options, "resolved parse options");
    Ok(options)
}

fn load_options_file(path: &Path) -> Result<ParseOptions, InputError> {
    let content = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| InputError::Options {
        path: path.to_path_buf(),
        source,
    })
}

/// Print `error: ...` and exit with status 1.
pub fn exit_with(err: InputError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
