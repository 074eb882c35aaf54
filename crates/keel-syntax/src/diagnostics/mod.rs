//! Diagnostics collection for accumulating parser messages.
//!
//! Messages are kept sorted by span start: [`Diagnostics::report`] inserts each
//! new message after every message that starts at or before it, so the list is
//! ordered at emission time and equal starts keep their emission order.

mod message;
mod printer;


use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage, DiagnosticRecord, Severity};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
    /// Emission serial of each message, parallel to `messages`.
    serials: Vec<u32>,
    next_serial: u32,
}

/// Emission point captured by [`Diagnostics::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DiagnosticsMark(u32);

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic with the given kind and span.
    ///
    /// Positional arguments for the kind's template are added with `.arg()`.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::new(kind, range),
        }
    }

    fn insert(&mut self, message: DiagnosticMessage) {
        let start = message.range.start();
        let at = self.messages.partition_point(|m| m.range.start() <= start);
        self.messages.insert(at, message);
        self.serials.insert(at, self.next_serial);
        self.next_serial += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub(crate) fn mark(&self) -> DiagnosticsMark {
        DiagnosticsMark(self.next_serial)
    }

    /// Drop every message emitted after `mark`, wherever sorting placed it.
    pub(crate) fn rollback(&mut self, mark: DiagnosticsMark) {
        let mut i = 0;
        while i < self.messages.len() {
            if self.serials[i] >= mark.0 {
                self.messages.remove(i);
                self.serials.remove(i);
            } else {
                i += 1;
            }
        }
        self.next_serial = mark.0;
    }

    /// Number of messages emitted after `mark` that are still present.
    pub(crate) fn emitted_since(&self, mark: DiagnosticsMark) -> usize {
        self.serials.iter().filter(|&&s| s >= mark.0).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[DiagnosticMessage] {
        &self.messages
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.messages.iter().filter(|d| d.is_warning()).count()
    }

    /// Messages whose primary range lies inside `range`.
    pub fn within(&self, range: TextRange) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages
            .iter()
            .filter(move |d| range.contains_range(d.range))
    }

    pub fn to_records(&self) -> Vec<DiagnosticRecord> {
        self.messages.iter().map(|d| d.to_record()).collect()
    }

    pub fn printer<'a>(&'a self, source: &'a str) -> DiagnosticsPrinter<'a> {
        DiagnosticsPrinter::new(self, source)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer(source).colored(colored).render()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl DiagnosticBuilder<'_> {
    /// Append a positional argument for the message template.
    pub fn arg(mut self, value: impl Into<String>) -> Self {
        self.message.args.push(value.into());
        self
    }

    pub fn emit(self) {
        self.diagnostics.insert(self.message);
    }
}
