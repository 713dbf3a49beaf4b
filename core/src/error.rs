use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Coordinates ({row}, {column}) are outside the field")]
    OutOfRange { row: Coord, column: Coord },
    #[error("Invalid field configuration: {0}")]
    InvalidConfiguration(&'static str),
}

pub type Result<T> = core::result::Result<T, FieldError>;
