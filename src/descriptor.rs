//! Option descriptors: one bindable command-line option, the property path it
//! populates and the typed accessor that performs the assignment.
use std::fmt::{Debug, Display, Formatter};

use clap::Arg;

use crate::error::{Error, Result};
use crate::path::PropertyPath;
use crate::value::{BindTarget, Value, ValueKind};

/// The command-line form of an option: `-t` or `--text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionName {
    Short(char),
    Long(String),
}

impl OptionName {
    /// Parses `-t`, `--text`, `t` or `text`. After stripping leading dashes,
    /// a single character is a short name and anything longer is a long name.
    pub fn parse(raw: &str) -> Result<Self> {
        let stripped = raw.trim_start_matches('-');
        if stripped.is_empty() || stripped.chars().any(char::is_whitespace) {
            return Err(Error::invalid_option_name(raw.to_string()));
        }

        let mut chars = stripped.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) => Ok(OptionName::Short(short)),
            _ => Ok(OptionName::Long(stripped.to_string())),
        }
    }

    /// The dash-stripped text. Ids are the uniqueness domain within one
    /// binder and double as the parser-side argument id.
    pub fn id(&self) -> String {
        match self {
            OptionName::Short(short) => short.to_string(),
            OptionName::Long(long) => long.clone(),
        }
    }
}

impl Display for OptionName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionName::Short(short) => write!(f, "-{short}"),
            OptionName::Long(long) => write!(f, "--{long}"),
        }
    }
}

type Setter<M> = Box<dyn Fn(&mut M, &Value) -> bool + Send + Sync>;

/// One registered binding: option name, property path, value kind and an
/// optional default applied when the option is absent.
pub struct OptionDescriptor<M> {
    name: OptionName,
    id: String,
    path: PropertyPath,
    kind: ValueKind,
    default: Option<Value>,
    setter: Setter<M>,
}

impl<M> OptionDescriptor<M> {
    pub(crate) fn new<T>(
        name: OptionName,
        path: PropertyPath,
        accessor: fn(&mut M) -> Option<&mut T>,
    ) -> Self
    where
        T: BindTarget,
        M: 'static,
    {
        let id = name.id();
        let setter: Setter<M> = Box::new(move |model, value| match accessor(model) {
            Some(slot) => match T::from_value(value) {
                Some(parsed) => {
                    *slot = parsed;
                    true
                }
                None => false,
            },
            None => false,
        });

        Self {
            name,
            id,
            path,
            kind: T::KIND,
            default: None,
            setter,
        }
    }

    /// Sets the value bound when the option does not appear on the command
    /// line. Fails with [`Error::TypeMismatch`] when the value's kind differs
    /// from the descriptor's kind.
    pub fn default_value(&mut self, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into();
        if value.kind() != self.kind {
            return Err(Error::type_mismatch(self.name.to_string(), self.kind, value.kind()));
        }

        self.default = Some(value);
        Ok(self)
    }

    pub fn name(&self) -> &OptionName {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Applies a value through the registered accessor. Returns `false` when
    /// the property path did not resolve on this model instance.
    pub(crate) fn assign(&self, model: &mut M, value: &Value) -> bool {
        (self.setter)(model, value)
    }

    /// The parser-side argument for this descriptor. Numeric options accept
    /// negative values; boolean options take zero or one value so both
    /// `--verbose` and `--verbose false` parse.
    pub(crate) fn to_arg(&self) -> Arg {
        let arg = Arg::new(self.id.clone());
        let arg = match &self.name {
            OptionName::Short(short) => arg.short(*short),
            OptionName::Long(long) => arg.long(long.clone()),
        };

        match self.kind {
            ValueKind::Str => arg.value_parser(clap::value_parser!(String)),
            ValueKind::Int => arg
                .value_parser(clap::value_parser!(i64))
                .allow_negative_numbers(true),
            ValueKind::Float => arg
                .value_parser(clap::value_parser!(f64))
                .allow_negative_numbers(true),
            ValueKind::Bool => arg
                .value_parser(clap::value_parser!(bool))
                .num_args(0..=1)
                .default_missing_value("true"),
        }
    }
}

impl<M> Debug for OptionDescriptor<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OptionDescriptor")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Probe {
        count: i64,
    }

    #[test]
    fn short_and_long_forms_parse() {
        assert_eq!(OptionName::parse("-t").unwrap(), OptionName::Short('t'));
        assert_eq!(OptionName::parse("t").unwrap(), OptionName::Short('t'));
        assert_eq!(OptionName::parse("--text").unwrap(), OptionName::Long("text".to_string()));
        assert_eq!(OptionName::parse("text").unwrap(), OptionName::Long("text".to_string()));
        assert_eq!(OptionName::parse("-xy").unwrap(), OptionName::Long("xy".to_string()));
    }

    #[test]
    fn dashes_only_and_whitespace_are_rejected() {
        assert!(matches!(OptionName::parse("--").unwrap_err(), Error::InvalidOptionName { .. }));
        assert!(matches!(OptionName::parse("").unwrap_err(), Error::InvalidOptionName { .. }));
        assert!(matches!(OptionName::parse("bad name").unwrap_err(), Error::InvalidOptionName { .. }));
    }

    #[test]
    fn names_display_with_their_dashes() {
        assert_eq!(OptionName::Short('t').to_string(), "-t");
        assert_eq!(OptionName::Long("text".to_string()).to_string(), "--text");
        assert_eq!(OptionName::Short('t').id(), "t");
        assert_eq!(OptionName::Long("text".to_string()).id(), "text");
    }

    #[test]
    fn default_value_checks_the_kind() {
        let name = OptionName::parse("-c").unwrap();
        let path = PropertyPath::parse("count").unwrap();
        let mut descriptor =
            OptionDescriptor::new(name, path, |probe: &mut Probe| Some(&mut probe.count));

        let error = descriptor.default_value("nope").unwrap_err();
        assert!(matches!(
            error,
            Error::TypeMismatch { expected: ValueKind::Int, found: ValueKind::Str, .. }
        ));

        descriptor.default_value(12).expect("matching kind");
        assert_eq!(descriptor.default(), Some(&Value::Int(12)));
    }

    #[test]
    fn assign_reports_resolution() {
        let name = OptionName::parse("-c").unwrap();
        let path = PropertyPath::parse("count").unwrap();
        let descriptor =
            OptionDescriptor::new(name, path, |probe: &mut Probe| Some(&mut probe.count));

        let mut probe = Probe::default();
        assert!(descriptor.assign(&mut probe, &Value::Int(4)));
        assert_eq!(probe.count, 4);
    }
}
