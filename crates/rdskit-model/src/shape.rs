//! Support types shared by every generated shape.
//!
//! Generated structs render through [`ShapeFormatter`] and carry their model
//! name through [`Shape`]. Generated enums report unknown literals with
//! [`ParseEnumError`], and `double` members are stored as [`Double`].

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A generated request, response or value shape.
///
/// Shapes are plain values: cloneable, comparable, hashable, and
/// default-constructible with every field absent.
pub trait Shape:
    Clone + Default + fmt::Debug + fmt::Display + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// The shape name as it appears in the service model.
    const SHAPE_NAME: &'static str;
}

/// Error returned when a string is not one of an enum's documented values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {enum_name} value: {value:?}")]
pub struct ParseEnumError {
    /// Name of the enum being parsed.
    pub enum_name: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseEnumError {
    /// Create a new parse error for `enum_name`.
    #[must_use]
    pub fn new(enum_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            enum_name,
            value: value.into(),
        }
    }
}

/// A `double` member value.
///
/// Equality and hashing compare the IEEE 754 bit pattern, which keeps shapes
/// holding a `Double` `Eq` and `Hash`. `NaN` equals itself and `0.0` differs
/// from `-0.0`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Double(pub f64);

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Double {}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Double> for f64 {
    fn from(value: Double) -> Self {
        value.0
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the fractional part of whole numbers: `3.0`, not `3`.
        write!(f, "{:?}", self.0)
    }
}

/// Writes the `{Name: value,Name: value}` diagnostic form of a shape.
///
/// Absent fields are skipped. Present fields are written in call order,
/// separated by a single comma with no trailing separator.
pub struct ShapeFormatter<'a, 'b> {
    fmt: &'a mut fmt::Formatter<'b>,
    result: fmt::Result,
    has_fields: bool,
}

impl fmt::Debug for ShapeFormatter<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeFormatter")
            .field("result", &self.result)
            .field("has_fields", &self.has_fields)
            .finish_non_exhaustive()
    }
}

impl<'a, 'b> ShapeFormatter<'a, 'b> {
    /// Start a shape, writing the opening brace.
    pub fn new(fmt: &'a mut fmt::Formatter<'b>) -> Self {
        let result = fmt.write_str("{");
        Self {
            fmt,
            result,
            has_fields: false,
        }
    }

    /// Write a scalar or nested-shape field when present.
    pub fn field<T>(&mut self, name: &str, value: Option<&T>) -> &mut Self
    where
        T: fmt::Display + ?Sized,
    {
        if let Some(value) = value {
            self.entry(name, &value);
        }
        self
    }

    /// Write a list field as `[a, b]` when present.
    ///
    /// An allocated empty list is present and renders as `[]`.
    pub fn list<T>(&mut self, name: &str, values: Option<&[T]>) -> &mut Self
    where
        T: fmt::Display,
    {
        if let Some(values) = values {
            self.entry(name, &DisplayList(values));
        }
        self
    }

    /// Write the closing brace and return the accumulated result.
    pub fn finish(&mut self) -> fmt::Result {
        self.result?;
        self.fmt.write_str("}")
    }

    fn entry(&mut self, name: &str, value: &dyn fmt::Display) {
        if self.result.is_err() {
            return;
        }
        let separator = if self.has_fields { "," } else { "" };
        self.result = write!(self.fmt, "{separator}{name}: {value}");
        self.has_fields = true;
    }
}

struct DisplayList<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for DisplayList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Sample {
        name: Option<String>,
        port: Option<i32>,
        zones: Option<Vec<String>>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            ShapeFormatter::new(f)
                .field("Name", self.name.as_deref())
                .field("Port", self.port.as_ref())
                .list("Zones", self.zones.as_deref())
                .finish()
        }
    }

    #[test]
    fn test_should_render_empty_braces_when_all_fields_absent() {
        let sample = Sample {
            name: None,
            port: None,
            zones: None,
        };
        assert_eq!(sample.to_string(), "{}");
    }

    #[test]
    fn test_should_join_present_fields_with_single_comma() {
        let sample = Sample {
            name: Some("mydb".to_owned()),
            port: Some(3306),
            zones: None,
        };
        assert_eq!(sample.to_string(), "{Name: mydb,Port: 3306}");
    }

    #[test]
    fn test_should_skip_absent_field_between_present_ones() {
        let sample = Sample {
            name: Some("mydb".to_owned()),
            port: None,
            zones: Some(vec!["us-east-1a".to_owned(), "us-east-1b".to_owned()]),
        };
        assert_eq!(
            sample.to_string(),
            "{Name: mydb,Zones: [us-east-1a, us-east-1b]}"
        );
    }

    #[test]
    fn test_should_render_empty_list_as_brackets() {
        let sample = Sample {
            name: None,
            port: None,
            zones: Some(Vec::new()),
        };
        assert_eq!(sample.to_string(), "{Zones: []}");
    }

    #[test]
    fn test_should_describe_parse_enum_error() {
        let err = ParseEnumError::new("ApplyMethod", "later");
        assert_eq!(err.enum_name, "ApplyMethod");
        assert_eq!(err.value, "later");
        assert_eq!(err.to_string(), "unknown ApplyMethod value: \"later\"");
    }

    #[test]
    fn test_should_compare_and_hash_doubles_by_bits() {
        assert_eq!(Double(1.5), Double::from(1.5));
        assert_ne!(Double(0.0), Double(-0.0));
        assert_eq!(Double(f64::NAN), Double(f64::NAN));

        let set = HashSet::from([Double(1.5), Double(1.5), Double(2.0)]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_should_display_double_with_fractional_part() {
        assert_eq!(Double(3.0).to_string(), "3.0");
        assert_eq!(Double(0.25).to_string(), "0.25");
        assert_eq!(f64::from(Double(2.5)).to_bits(), 2.5_f64.to_bits());
    }
}
