//! The model binder: descriptor registration, parser construction and the
//! bind loop that copies parsed values onto a model instance.
use std::ffi::OsString;
use std::fmt::{Debug, Formatter};

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{debug, warn};

use crate::descriptor::{OptionDescriptor, OptionName};
use crate::error::{Error, Result};
use crate::outcome::{Diagnostic, ParseOutcome, ParseStatus};
use crate::path::PropertyPath;
use crate::value::{BindTarget, Value, ValueKind};

/// Parser-affecting settings, passed explicitly at construction. There are no
/// ambient defaults anywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinderConfig {
    /// Raw arguments do not start with a program name. This matches inputs
    /// like `"-t sometext -i 27"`; set to `false` when feeding
    /// `std::env::args` directly.
    pub no_binary_name: bool,
    /// Let the generated parser own `-h`/`--help`. Off by default since help
    /// rendering is the caller's business; when enabled, a help request
    /// surfaces as a failed parse whose diagnostic carries the parser's
    /// rendered help text.
    pub enable_help: bool,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            no_binary_name: true,
            enable_help: false,
        }
    }
}

/// Binds registered options onto instances of the model type `M`.
///
/// The binder owns no model; callers construct one, hand it in by mutable
/// reference per [`Binder::initialize`] call, and keep it afterwards. The
/// descriptor set is fixed after registration and reused across calls.
pub struct Binder<M> {
    command_name: String,
    config: BinderConfig,
    descriptors: Vec<OptionDescriptor<M>>,
    children: Vec<clap::Command>,
    status: ParseStatus,
    last_outcome: Option<ParseOutcome>,
    last_matches: Option<ArgMatches>,
}

impl<M> Binder<M> {
    pub fn new(command_name: impl Into<String>, config: BinderConfig) -> Self {
        Self {
            command_name: command_name.into(),
            config,
            descriptors: Vec::new(),
            children: Vec::new(),
            status: ParseStatus::Unparsed,
            last_outcome: None,
            last_matches: None,
        }
    }

    /// Registers one option bound to the property the accessor projects.
    ///
    /// The accessor is a plain function pointer so call sites read like
    /// property expressions: `|m| Some(&mut m.sub.int_property)` or, through
    /// an unset intermediate, `|m| m.sub.as_mut().map(|s| &mut s.int_property)`.
    /// Returning `None` at bind time records a path-resolution diagnostic
    /// instead of assigning.
    ///
    /// Fails with [`Error::InvalidOptionName`] for unusable names,
    /// [`Error::DuplicateOption`] when the dash-stripped id is already
    /// registered on this binder, and [`Error::InvalidPath`] for empty
    /// paths or segments.
    pub fn register<T>(
        &mut self,
        name: &str,
        path: &str,
        accessor: fn(&mut M) -> Option<&mut T>,
    ) -> Result<&mut OptionDescriptor<M>>
    where
        T: BindTarget,
        M: 'static,
    {
        let name = OptionName::parse(name)?;
        let id = name.id();
        if self.descriptors.iter().any(|descriptor| descriptor.id() == id) {
            return Err(Error::duplicate_option(name.to_string()));
        }

        let path = PropertyPath::parse(path)?;
        debug!("registered option `{name}` -> `{path}` ({})", T::KIND);

        let index = self.descriptors.len();
        self.descriptors.push(OptionDescriptor::new(name, path, accessor));
        Ok(&mut self.descriptors[index])
    }

    /// Registers a sub-command scope. Its own bindings are defined
    /// independently (typically by another binder's [`Binder::command`]);
    /// this binder only includes the handle when building its parser and
    /// exposes whatever matched through [`Binder::parse_result`].
    pub fn add_child_command(&mut self, child: clap::Command) {
        self.children.push(child);
    }

    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    pub fn descriptors(&self) -> &[OptionDescriptor<M>] {
        &self.descriptors
    }

    /// The parser configuration this binder generates: one argument per
    /// descriptor and one subcommand per child handle. Also usable as a
    /// child handle on a parent binder.
    pub fn command(&self) -> clap::Command {
        let mut command = clap::Command::new(self.command_name.clone())
            .no_binary_name(self.config.no_binary_name)
            .disable_version_flag(true);
        if !self.config.enable_help {
            command = command.disable_help_flag(true);
        }

        self.extend_command(command)
    }

    fn extend_command(&self, mut command: clap::Command) -> clap::Command {
        for descriptor in &self.descriptors {
            command = command.arg(descriptor.to_arg());
        }
        for child in &self.children {
            command = command.subcommand(child.clone());
        }

        command
    }

    /// Parses the argument vector and copies the results onto `model`.
    ///
    /// On a parser-level syntax error the model is left completely untouched
    /// and the outcome carries the parser's rendered error. Otherwise each
    /// descriptor binds the command-line value when supplied, its default
    /// when not, and leaves the property unchanged when it has neither.
    /// Unresolvable property paths are recorded per descriptor without
    /// aborting the rest; any such diagnostic makes the overall status
    /// `Failure` even though resolvable descriptors were applied.
    pub fn initialize<I, S>(&mut self, model: &mut M, args: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString> + Clone,
    {
        let command = self.command();
        self.run(model, command, args)
    }

    /// Single-line variant of [`Binder::initialize`]. The line is split on
    /// whitespace; quoting is not interpreted, so values containing spaces
    /// must go through the vector form.
    pub fn initialize_str(&mut self, model: &mut M, line: &str) -> ParseOutcome {
        self.initialize(model, line.split_whitespace())
    }

    /// Variant of [`Binder::initialize`] that extends a caller-supplied
    /// parser instead of generating one. The base command's own settings
    /// (binary-name handling, help) govern the parse; this binder only
    /// appends its arguments and child commands. Argument ids already
    /// present on the base must not collide with descriptor ids.
    pub fn initialize_with<I, S>(
        &mut self,
        model: &mut M,
        base: clap::Command,
        args: I,
    ) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString> + Clone,
    {
        let command = self.extend_command(base);
        self.run(model, command, args)
    }

    /// Terminal state of the most recent `initialize` call, or
    /// [`ParseStatus::Unparsed`] before the first one.
    pub fn parse_status(&self) -> ParseStatus {
        self.status
    }

    /// Outcome of the most recent `initialize` call.
    pub fn parse_outcome(&self) -> Option<&ParseOutcome> {
        self.last_outcome.as_ref()
    }

    /// Raw parser result of the most recent successful parse, including any
    /// matched child command.
    pub fn parse_result(&self) -> Option<&ArgMatches> {
        self.last_matches.as_ref()
    }

    fn run<I, S>(&mut self, model: &mut M, command: clap::Command, args: I) -> ParseOutcome
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString> + Clone,
    {
        let matches = match command.try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(parse_error) => {
                warn!("`{}` rejected its arguments", self.command_name);
                let outcome =
                    ParseOutcome::failure(vec![Diagnostic::parse_syntax(parse_error.to_string())]);
                self.status = ParseStatus::ParseFailed;
                self.last_matches = None;
                self.last_outcome = Some(outcome.clone());
                return outcome;
            }
        };

        let mut diagnostics = Vec::new();
        for descriptor in &self.descriptors {
            let value = match Self::select_value(descriptor, &matches) {
                Some(value) => value,
                None => {
                    debug!(
                        "option `{}` unset with no default; `{}` left unchanged",
                        descriptor.name(),
                        descriptor.path()
                    );
                    continue;
                }
            };

            if descriptor.assign(model, &value) {
                debug!("bound `{}` = {value} onto `{}`", descriptor.name(), descriptor.path());
            } else {
                warn!(
                    "could not resolve property path `{}` for option `{}`",
                    descriptor.path(),
                    descriptor.name()
                );
                diagnostics.push(Diagnostic::path_resolution(descriptor.name(), descriptor.path()));
            }
        }

        let (status, outcome) = if diagnostics.is_empty() {
            (ParseStatus::BoundClean, ParseOutcome::success())
        } else {
            (ParseStatus::BoundWithDiagnostics, ParseOutcome::failure(diagnostics))
        };
        self.status = status;
        self.last_matches = Some(matches);
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    /// Value choice per descriptor: command line first, then the registered
    /// default, then nothing.
    fn select_value(descriptor: &OptionDescriptor<M>, matches: &ArgMatches) -> Option<Value> {
        let supplied = matches.value_source(descriptor.id()) == Some(ValueSource::CommandLine);
        if !supplied {
            return descriptor.default().cloned();
        }

        match descriptor.kind() {
            ValueKind::Str => matches.get_one::<String>(descriptor.id()).cloned().map(Value::Str),
            ValueKind::Int => matches.get_one::<i64>(descriptor.id()).copied().map(Value::Int),
            ValueKind::Bool => matches.get_one::<bool>(descriptor.id()).copied().map(Value::Bool),
            ValueKind::Float => matches.get_one::<f64>(descriptor.id()).copied().map(Value::Float),
        }
    }
}

impl<M> Debug for Binder<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binder")
            .field("command_name", &self.command_name)
            .field("config", &self.config)
            .field("descriptors", &self.descriptors)
            .field("children", &self.children)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}
