//! Closed-value field codec
//!
//! Many API fields accept a fixed vocabulary: a language tag, a charge mode,
//! a backup status. Each such field is a Rust enum with one variant per
//! registered literal plus an `Unknown` variant that keeps anything else the
//! server sends, verbatim.
//!
//! Decoding goes through a small converter table keyed by the scalar's type
//! name (`"string"` or `"int32"`), so every generated enum shares the same
//! conversion routine:
//!
//! ```rust
//! use rds_model::codec::ClosedValue;
//! use rds_model::model::backup::BackupStatus;
//!
//! let status = BackupStatus::decode(br#""COMPLETED""#).unwrap();
//! assert_eq!(status, BackupStatus::Completed);
//! assert_eq!(status.encode(), r#""COMPLETED""#);
//!
//! // Values outside the registry are kept, not rejected
//! let future = BackupStatus::decode(br#""ARCHIVED""#).unwrap();
//! assert_eq!(future.value(), "ARCHIVED");
//! assert!(!future.is_known());
//!
//! // Strict decoding enforces the closed set
//! assert!(BackupStatus::decode_strict(br#""ARCHIVED""#).is_err());
//! ```

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::Serialize;

use crate::error::{CodecError, Result};

/// Scalar type backing a closed-value field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScalarKind {
    #[serde(rename = "string")]
    String,
    #[serde(rename = "int32")]
    Int32,
}

impl ScalarKind {
    /// Name used to look up the converter for this kind
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Int32 => "int32",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A converted wire scalar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scalar {
    String(String),
    Int32(i32),
}

impl Scalar {
    #[must_use]
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::String(_) => ScalarKind::String,
            Scalar::Int32(_) => ScalarKind::Int32,
        }
    }

    /// JSON text of the scalar: a quoted string or a bare number
    #[must_use]
    pub fn to_json(&self) -> String {
        match self {
            Scalar::String(raw) => serde_json::Value::String(raw.clone()).to_string(),
            Scalar::Int32(raw) => raw.to_string(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(raw) => f.write_str(raw),
            Scalar::Int32(raw) => write!(f, "{raw}"),
        }
    }
}

/// Converts trimmed wire text into a scalar
pub type Converter = fn(&str) -> Result<Scalar>;

/// Looks up the converter registered under a scalar type name
pub fn converter(type_name: &str) -> Result<Converter> {
    match type_name {
        "string" => Ok(convert_string),
        "int32" => Ok(convert_int32),
        other => Err(CodecError::NoConverter(other.to_owned())),
    }
}

/// Converts text into a scalar of the given kind
pub fn convert(kind: ScalarKind, text: &str) -> Result<Scalar> {
    let convert = converter(kind.type_name())?;
    convert(text)
}

fn convert_string(text: &str) -> Result<Scalar> {
    Ok(Scalar::String(text.to_owned()))
}

fn convert_int32(text: &str) -> Result<Scalar> {
    text.trim()
        .parse::<i32>()
        .map(Scalar::Int32)
        .map_err(|_| CodecError::Conversion {
            kind: ScalarKind::Int32,
            input: text.to_owned(),
        })
}

/// Strips every leading and trailing `"` from raw wire text
#[must_use]
pub fn trim_quotes(raw: &str) -> &str {
    raw.trim_matches('"')
}

/// Text carried by a raw wire value
///
/// A well-formed JSON scalar is read through the same visitor as the serde
/// `Deserialize` impls, so escapes are undone identically on both paths.
/// Anything else (a bare word, stray doubled quotes) falls back to
/// [`trim_quotes`].
#[must_use]
pub fn wire_text(bytes: &[u8]) -> String {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    match deserialize_text(&mut de).and_then(|text| de.end().map(|()| text)) {
        Ok(text) => text,
        Err(_) => {
            let raw = String::from_utf8_lossy(bytes);
            trim_quotes(raw.trim()).to_owned()
        }
    }
}

/// A field restricted (nominally) to a fixed set of literal values
///
/// Implemented by [`closed_enum!`](crate::closed_enum) for every generated
/// enum. The provided methods make up the codec; implementors only describe
/// how their variants map to scalars.
pub trait ClosedValue: Sized + Clone + PartialEq + fmt::Debug + 'static {
    /// Rust type name, used in error messages and the catalog
    const TYPE_NAME: &'static str;

    /// Scalar kind the registry literals are written in
    const KIND: ScalarKind;

    /// Every registered constant, in declaration order
    fn registry() -> &'static [Self];

    /// Raw value as a scalar
    fn to_scalar(&self) -> Scalar;

    /// Builds a value from a converted scalar, keeping unregistered input
    fn from_scalar(scalar: Scalar) -> Result<Self>;

    /// Returns true if the value is one of the registry constants
    fn is_known(&self) -> bool;

    /// JSON text of the raw value
    fn encode(&self) -> String {
        self.to_scalar().to_json()
    }

    /// Converts already-unquoted text through the converter table
    fn from_text(text: &str) -> Result<Self> {
        let scalar = convert(Self::KIND, text)?;
        Self::from_scalar(scalar)
    }

    /// Decodes raw JSON bytes, accepting values outside the registry
    fn decode(bytes: &[u8]) -> Result<Self> {
        Self::from_text(&wire_text(bytes))
    }

    /// Decodes raw JSON bytes and rejects values outside the registry
    fn decode_strict(bytes: &[u8]) -> Result<Self> {
        let value = Self::decode(bytes)?;
        if value.is_known() {
            Ok(value)
        } else {
            Err(CodecError::NotInRegistry {
                type_name: Self::TYPE_NAME,
                value: value.to_scalar().to_string(),
            })
        }
    }
}

struct ScalarTextVisitor;

impl Visitor<'_> for ScalarTextVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
        Ok(v.to_owned())
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }
}

/// Reads any JSON scalar as text, for the serde side of the codec
#[doc(hidden)]
pub fn deserialize_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(ScalarTextVisitor)
}

/// Declares a closed-value enum and wires it into the codec
///
/// ```rust
/// rds_model::closed_enum! {
///     /// Billing mode
///     pub enum Billing: string {
///         PrePaid = "prePaid",
///         PostPaid = "postPaid",
///     }
/// }
///
/// rds_model::closed_enum! {
///     pub enum Interval: int32 {
///         OneSecond = 1,
///         FiveSeconds = 5,
///     }
/// }
///
/// assert_eq!(Billing::PrePaid.value(), "prePaid");
/// assert_eq!(Interval::FiveSeconds.value(), 5);
/// ```
#[macro_export]
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : string {
            $( $(#[$vmeta:meta])* $variant:ident = $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the registry, kept verbatim
            Unknown(String),
        }

        impl $name {
            /// Every registered value, in declaration order
            pub const REGISTRY: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The raw wire literal
            #[must_use]
            pub fn value(&self) -> &str {
                match self {
                    $( $name::$variant => $lit, )+
                    $name::Unknown(raw) => raw.as_str(),
                }
            }

            /// Maps a wire literal to its constant
            #[must_use]
            pub fn from_value(raw: &str) -> Self {
                match raw {
                    $( $lit => $name::$variant, )+
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl $crate::codec::ClosedValue for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const KIND: $crate::codec::ScalarKind = $crate::codec::ScalarKind::String;

            fn registry() -> &'static [Self] {
                Self::REGISTRY
            }

            fn to_scalar(&self) -> $crate::codec::Scalar {
                $crate::codec::Scalar::String(self.value().to_owned())
            }

            fn from_scalar(scalar: $crate::codec::Scalar) -> $crate::error::Result<Self> {
                match scalar {
                    $crate::codec::Scalar::String(raw) => Ok(Self::from_value(&raw)),
                    other => Err($crate::error::CodecError::TypeMismatch {
                        type_name: stringify!($name),
                        expected: $crate::codec::ScalarKind::String,
                        found: other.kind(),
                    }),
                }
            }

            fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.value())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.value())
            }
        }

        $crate::__closed_enum_shared!($name);
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : int32 {
            $( $(#[$vmeta:meta])* $variant:ident = $lit:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value outside the registry, kept verbatim
            Unknown(i32),
        }

        impl $name {
            /// Every registered value, in declaration order
            pub const REGISTRY: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The raw wire literal
            #[must_use]
            pub fn value(&self) -> i32 {
                match self {
                    $( $name::$variant => $lit, )+
                    $name::Unknown(raw) => *raw,
                }
            }

            /// Maps a wire literal to its constant
            #[must_use]
            pub fn from_value(raw: i32) -> Self {
                match raw {
                    $( $lit => $name::$variant, )+
                    other => $name::Unknown(other),
                }
            }
        }

        impl $crate::codec::ClosedValue for $name {
            const TYPE_NAME: &'static str = stringify!($name);
            const KIND: $crate::codec::ScalarKind = $crate::codec::ScalarKind::Int32;

            fn registry() -> &'static [Self] {
                Self::REGISTRY
            }

            fn to_scalar(&self) -> $crate::codec::Scalar {
                $crate::codec::Scalar::Int32(self.value())
            }

            fn from_scalar(scalar: $crate::codec::Scalar) -> $crate::error::Result<Self> {
                match scalar {
                    $crate::codec::Scalar::Int32(raw) => Ok(Self::from_value(raw)),
                    other => Err($crate::error::CodecError::TypeMismatch {
                        type_name: stringify!($name),
                        expected: $crate::codec::ScalarKind::Int32,
                        found: other.kind(),
                    }),
                }
            }

            fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_i32(self.value())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.value())
            }
        }

        $crate::__closed_enum_shared!($name);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __closed_enum_shared {
    ($name:ident) => {
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let text = $crate::codec::deserialize_text(deserializer)?;
                <$name as $crate::codec::ClosedValue>::from_text(&text)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::CodecError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::codec::ClosedValue>::from_text(s)
            }
        }

        impl $crate::params::QueryParameter for $name {
            fn to_query_value(&self) -> Option<String> {
                Some(self.to_string())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::closed_enum! {
        enum Color: string {
            Red = "red",
            Green = "green",
        }
    }

    crate::closed_enum! {
        enum Level: int32 {
            Low = 1,
            High = 5,
        }
    }

    #[test]
    fn test_converter_lookup() {
        assert!(converter("string").is_ok());
        assert!(converter("int32").is_ok());
        assert_eq!(
            converter("int64").unwrap_err(),
            CodecError::NoConverter("int64".to_string())
        );
    }

    #[test]
    fn test_convert_int32_rejects_text() {
        let err = convert(ScalarKind::Int32, "five").unwrap_err();
        assert_eq!(
            err,
            CodecError::Conversion {
                kind: ScalarKind::Int32,
                input: "five".to_string()
            }
        );
    }

    #[test]
    fn test_trim_quotes_strips_all_surrounding_quotes() {
        assert_eq!(trim_quotes(r#""red""#), "red");
        assert_eq!(trim_quotes(r#"""red"""#), "red");
        assert_eq!(trim_quotes("5"), "5");
    }

    #[test]
    fn test_string_enum_decode() {
        assert_eq!(Color::decode(br#""green""#).unwrap(), Color::Green);
        assert_eq!(Color::decode(b"  \"red\"  ").unwrap(), Color::Red);
        assert_eq!(
            Color::decode(br#""blue""#).unwrap(),
            Color::Unknown("blue".to_string())
        );
    }

    #[test]
    fn test_decode_unescapes_like_serde() {
        let wire = br#""A\"B""#;
        let decoded = Color::decode(wire).unwrap();
        let via_serde: Color = serde_json::from_slice(wire).unwrap();
        assert_eq!(decoded, Color::Unknown("A\"B".to_string()));
        assert_eq!(decoded, via_serde);
        assert_eq!(Color::decode(decoded.encode().as_bytes()).unwrap(), decoded);

        // Input that is not a JSON scalar still has its quotes stripped
        assert_eq!(Color::decode(br#"""red"""#).unwrap(), Color::Red);
        assert_eq!(Color::decode(b"green").unwrap(), Color::Green);
    }

    #[test]
    fn test_string_enum_accepts_bare_numbers() {
        // The string converter never fails; a bare number becomes its text
        assert_eq!(Color::decode(b"42").unwrap().value(), "42");
    }

    #[test]
    fn test_int_enum_decode_quoted_and_bare() {
        assert_eq!(Level::decode(b"5").unwrap(), Level::High);
        assert_eq!(Level::decode(br#""1""#).unwrap(), Level::Low);
        assert_eq!(Level::decode(b"3").unwrap(), Level::Unknown(3));
        assert!(matches!(
            Level::decode(br#""loud""#),
            Err(CodecError::Conversion { .. })
        ));
    }

    #[test]
    fn test_type_mismatch() {
        let err = Color::from_scalar(Scalar::Int32(1)).unwrap_err();
        assert_eq!(
            err,
            CodecError::TypeMismatch {
                type_name: "Color",
                expected: ScalarKind::String,
                found: ScalarKind::Int32,
            }
        );
        assert!(Level::from_scalar(Scalar::String("1".into())).is_err());
    }

    #[test]
    fn test_strict_decode() {
        assert_eq!(Color::decode_strict(br#""red""#).unwrap(), Color::Red);
        let err = Level::decode_strict(b"7").unwrap_err();
        assert!(err.is_unregistered());
        assert_eq!(err.to_string(), "'7' is not a registered Level value");
    }

    #[test]
    fn test_encode() {
        assert_eq!(Color::Red.encode(), r#""red""#);
        assert_eq!(Level::High.encode(), "5");
        assert_eq!(Color::Unknown("a\"b".into()).encode(), r#""a\"b""#);
    }

    #[test]
    fn test_serde_through_codec() {
        let colors: Vec<Color> = serde_json::from_str(r#"["red", "mauve"]"#).unwrap();
        assert_eq!(colors, vec![Color::Red, Color::Unknown("mauve".into())]);
        assert_eq!(serde_json::to_string(&colors).unwrap(), r#"["red","mauve"]"#);

        let level: Level = serde_json::from_str(r#""5""#).unwrap();
        assert_eq!(level, Level::High);
        assert!(serde_json::from_str::<Level>("[1]").is_err());
        assert!(serde_json::from_str::<Level>("1.5").is_err());
    }

    #[test]
    fn test_from_str_and_display() {
        let color: Color = "green".parse().unwrap();
        assert_eq!(color.to_string(), "green");
        assert_eq!(Level::High.to_string(), "5");
    }
}
