use thiserror::Error;

use crate::value::ValueKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("`{}` is not a usable option name.", .name)]
    InvalidOptionName { name: String },

    #[error("Option `{}` is already registered on this binder.", .name)]
    DuplicateOption { name: String },

    #[error("Property path `{}` is invalid: {}.", .path, .reason)]
    InvalidPath { path: String, reason: String },

    #[error("Default for option `{}` is a {}, but the option binds a {}.", .option, .found, .expected)]
    TypeMismatch {
        option: String,
        expected: ValueKind,
        found: ValueKind,
    },
}

impl Error {
    pub fn invalid_option_name(name: String) -> Self {
        Self::InvalidOptionName { name }
    }

    pub fn duplicate_option(name: String) -> Self {
        Self::DuplicateOption { name }
    }

    pub fn invalid_path(path: String, reason: String) -> Self {
        Self::InvalidPath { path, reason }
    }

    pub fn type_mismatch(option: String, expected: ValueKind, found: ValueKind) -> Self {
        Self::TypeMismatch {
            option,
            expected,
            found,
        }
    }
}
