//! Show the syntax tree of a file or fragment.

use keel_syntax::{
    Parse, ParseOptions, TreePrinter, parse, parse_cref, parse_expression, parse_statement,
};

use super::input::{OptionsArgs, SourceArgs, exit_with, load_source, resolve_options};

/// Grammar entry point for `--fragment`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fragment {
    #[default]
    File,
    Expr,
    Stmt,
    Cref,
}

impl Fragment {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "file" => Some(Fragment::File),
            "expr" => Some(Fragment::Expr),
            "stmt" => Some(Fragment::Stmt),
            "cref" => Some(Fragment::Cref),
            _ => None,
        }
    }

    pub fn parse(self, source: &str, options: &ParseOptions) -> Parse {
        match self {
            Fragment::File => parse(source, options),
            Fragment::Expr => parse_expression(source, options),
            Fragment::Stmt => parse_statement(source, options),
            Fragment::Cref => parse_cref(source, options),
        }
    }
}

pub struct AstArgs {
    pub source: SourceArgs,
    pub options: OptionsArgs,
    pub fragment: Fragment,
    pub trivia: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let source = load_source(&args.source).unwrap_or_else(|e| exit_with(e));
    let options = resolve_options(&args.options).unwrap_or_else(|e| exit_with(e));

    let parsed = args.fragment.parse(&source.text, &options);
    print!("{}", render_tree(&parsed, args.trivia, args.spans));

    if !parsed.diagnostics().is_empty() {
        eprint!(
            "{}",
            parsed
                .diagnostics()
                .printer(&source.text)
                .path(&source.name)
                .colored(args.color)
                .render()
        );
    }
}

pub fn render_tree(parsed: &Parse, trivia: bool, spans: bool) -> String {
    TreePrinter::new(&parsed.syntax())
        .with_trivia(trivia)
        .with_spans(spans)
        .dump()
}
