//! Auto-generated from AWS RDS Smithy model. DO NOT EDIT.
#![allow(clippy::too_many_lines)]
#![allow(clippy::struct_excessive_bools)]
#![allow(missing_docs)]

pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod shape;
pub mod types;

pub use error::{RdsError, RdsErrorCode};
pub use operations::RdsOperation;
pub use shape::{Double, ParseEnumError, Shape, ShapeFormatter};

// Generated: 33 operations, 9 enums, 41 shared structs, 33 input structs, 27 output structs
