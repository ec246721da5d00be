//! Structured payloads appended after the message of a log line.
//!
//! Rust has no runtime reflection, so a payload describes its own fields
//! through [`Payload`]. Fields are rendered in the order `fields()` returns
//! them: declaration order for the [`payload!`](crate::payload) macro,
//! insertion order for JSON objects. No other ordering is guaranteed across
//! payload shapes.

use std::fmt::Display;

use serde_json::Value;

/// Value of one payload field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Rendered inline as ` name=value`. `None` renders as empty text.
    Scalar(Option<String>),
    /// Rendered as a block with one line per element. `None` renders `null`.
    Array(Option<Vec<String>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

impl Field {
    pub fn scalar(name: impl Into<String>, value: impl Display) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Scalar(Some(value.to_string())),
        }
    }

    pub fn optional<T: Display>(name: impl Into<String>, value: Option<T>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Scalar(value.map(|v| v.to_string())),
        }
    }

    pub fn array<I>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self {
            name: name.into(),
            value: FieldValue::Array(Some(values.into_iter().map(|v| v.to_string()).collect())),
        }
    }

    /// An array-typed field that may be absent.
    pub fn optional_array<I>(name: impl Into<String>, values: Option<I>) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        Self {
            name: name.into(),
            value: FieldValue::Array(
                values.map(|values| values.into_iter().map(|v| v.to_string()).collect()),
            ),
        }
    }
}

/// Anything that can list its fields for rendering.
pub trait Payload {
    fn fields(&self) -> Vec<Field>;
}

impl Payload for [Field] {
    fn fields(&self) -> Vec<Field> {
        self.to_vec()
    }
}

impl Payload for Vec<Field> {
    fn fields(&self) -> Vec<Field> {
        self.clone()
    }
}

impl<T: Payload + ?Sized> Payload for &T {
    fn fields(&self) -> Vec<Field> {
        (**self).fields()
    }
}

/// Members of a JSON object become fields; other values have none.
impl Payload for Value {
    fn fields(&self) -> Vec<Field> {
        let Value::Object(members) = self else {
            return Vec::new();
        };

        members
            .iter()
            .map(|(name, value)| match value {
                Value::Array(elems) => Field::array(name.as_str(), elems.iter().map(json_text)),
                Value::Null => Field::optional::<String>(name.as_str(), None),
                other => Field::scalar(name.as_str(), json_text(other)),
            })
            .collect()
    }
}

fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds an ad-hoc payload from `name = value` pairs.
///
/// A bracketed list becomes an array field, anything else is rendered
/// through `Display`.
///
/// ```
/// let args = fluff::payload! { count = 3, tags = ["a", "b"] };
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! payload {
    (@fields [$($out:expr,)*]) => {{
        let fields: ::std::vec::Vec<$crate::Field> = ::std::vec![$($out),*];
        fields
    }};
    (@fields [$($out:expr,)*] $name:ident = [$($elem:expr),* $(,)?] $(, $($rest:tt)*)?) => {
        $crate::payload!(
            @fields [$($out,)* $crate::Field::array(
                ::std::stringify!($name),
                ::std::vec::Vec::<::std::string::String>::from(
                    [$(::std::string::ToString::to_string(&$elem)),*],
                ),
            ),]
            $($($rest)*)?
        )
    };
    (@fields [$($out:expr,)*] $name:ident = $value:expr $(, $($rest:tt)*)?) => {
        $crate::payload!(
            @fields [$($out,)* $crate::Field::scalar(::std::stringify!($name), &$value),]
            $($($rest)*)?
        )
    };
    ($($body:tt)*) => {
        $crate::payload!(@fields [] $($body)*)
    };
}
