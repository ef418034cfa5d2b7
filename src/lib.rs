//! Declarative binding of command-line options onto plain Rust structs.
//!
//! A [`Binder`] holds one [`OptionDescriptor`] per option, each pairing an
//! option name with a property path and a typed accessor into the model
//! type. Parsing itself is delegated to a generated [`clap`] command; the
//! binder copies the parsed values, or registered defaults, onto a
//! caller-owned model instance and reports the combined outcome.
//!
//! ```
//! use argbind::{BindStatus, Binder, BinderConfig};
//!
//! #[derive(Default)]
//! struct Sub {
//!     int_property: i64,
//! }
//!
//! #[derive(Default)]
//! struct Root {
//!     text_property: String,
//!     sub: Sub,
//! }
//!
//! # fn main() -> argbind::Result<()> {
//! let mut binder = Binder::new("demo", BinderConfig::default());
//! binder
//!     .register("-t", "text_property", |root: &mut Root| {
//!         Some(&mut root.text_property)
//!     })?
//!     .default_value("ralph")?;
//! binder
//!     .register("-i", "sub.int_property", |root: &mut Root| {
//!         Some(&mut root.sub.int_property)
//!     })?
//!     .default_value(-5)?;
//!
//! let mut root = Root::default();
//! let outcome = binder.initialize_str(&mut root, "-t sometext -i 27");
//! assert_eq!(outcome.status(), BindStatus::Success);
//! assert_eq!(root.text_property, "sometext");
//! assert_eq!(root.sub.int_property, 27);
//! # Ok(())
//! # }
//! ```

pub mod binder;
pub mod descriptor;
pub mod error;
pub mod model;
pub mod outcome;
pub mod path;
pub mod value;

pub use binder::{Binder, BinderConfig};
pub use descriptor::{OptionDescriptor, OptionName};
pub use error::{Error, Result};
pub use model::ObjectModel;
pub use outcome::{BindStatus, Diagnostic, DiagnosticKind, ParseOutcome, ParseStatus};
pub use path::PropertyPath;
pub use value::{BindTarget, Value, ValueKind};

// Callers compose base commands and child commands against the same parser
// version the binder generates against.
pub use clap;
