//! Results of one bind attempt: overall status, ordered diagnostics and the
//! binder's observable state machine terminals.
use std::fmt::{Display, Formatter};
use std::io;
use std::io::Write;

use crate::descriptor::OptionName;
use crate::path::PropertyPath;

/// Overall result of one `initialize` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindStatus {
    Success,
    Failure,
}

/// Where the binder stopped after its most recent `initialize` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseStatus {
    /// No `initialize` call has completed yet.
    #[default]
    Unparsed,
    /// The parser rejected the raw arguments; the model was not touched.
    ParseFailed,
    /// Parsing succeeded but at least one property path did not resolve.
    BoundWithDiagnostics,
    /// Every applicable descriptor bound cleanly.
    BoundClean,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Syntax-level rejection reported by the parser.
    ParseSyntax,
    /// A descriptor's property path had an unset intermediate on this model.
    PathResolution,
}

/// One message accumulated while parsing or binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    kind: DiagnosticKind,
    message: String,
}

impl Diagnostic {
    pub(crate) fn parse_syntax(message: String) -> Self {
        Self {
            kind: DiagnosticKind::ParseSyntax,
            message,
        }
    }

    pub(crate) fn path_resolution(option: &OptionName, path: &PropertyPath) -> Self {
        Self {
            kind: DiagnosticKind::PathResolution,
            message: format!("could not resolve property path `{path}` for option `{option}`"),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Status plus ordered diagnostics for one bind attempt. Produced fresh per
/// call; the binder keeps a copy for later inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutcome {
    status: BindStatus,
    diagnostics: Vec<Diagnostic>,
}

impl ParseOutcome {
    pub(crate) fn success() -> Self {
        Self {
            status: BindStatus::Success,
            diagnostics: Vec::new(),
        }
    }

    pub(crate) fn failure(diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            status: BindStatus::Failure,
            diagnostics,
        }
    }

    pub fn status(&self) -> BindStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == BindStatus::Success
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Writes each diagnostic on its own line to the given sink.
    pub fn write_diagnostics(&self, sink: &mut dyn Write) -> io::Result<()> {
        for diagnostic in &self.diagnostics {
            writeln!(sink, "{diagnostic}")?;
        }

        Ok(())
    }
}
