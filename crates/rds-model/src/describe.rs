//! Debug rendering for records
//!
//! Every record renders as its type name followed by its wire JSON. The
//! rendering is for logs: it never fails, and a record that cannot be
//! serialized renders as a fixed placeholder instead.

use serde::Serialize;

/// Records that render as `"<TypeName> <json>"`
pub trait Describe: Serialize {
    /// Name printed in front of the JSON
    const TYPE_NAME: &'static str;

    /// Debug rendering of the record
    fn describe(&self) -> String {
        render(Self::TYPE_NAME, self)
    }
}

/// Renders a value as `"<name> <json>"`, falling back to a placeholder
pub fn render<T: Serialize + ?Sized>(name: &str, value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => format!("{name} {json}"),
        Err(_) => placeholder(name),
    }
}

/// Placeholder used when a record cannot be serialized
#[must_use]
pub fn placeholder(name: &str) -> String {
    format!("{name} <unserializable>")
}

/// Implements [`Describe`] and `Display` for record types
#[macro_export]
macro_rules! describe {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $crate::describe::Describe for $name {
                const TYPE_NAME: &'static str = stringify!($name);
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(&$crate::describe::Describe::describe(self))
                }
            }
        )+
    };
}

/// Responses carry the transport status code outside the wire JSON
pub trait ApiResponse {
    fn http_status_code(&self) -> u16;

    fn set_http_status_code(&mut self, code: u16);
}

/// Implements [`ApiResponse`] for structs with an `http_status_code` field
#[macro_export]
macro_rules! api_response {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $crate::describe::ApiResponse for $name {
                fn http_status_code(&self) -> u16 {
                    self.http_status_code
                }

                fn set_http_status_code(&mut self, code: u16) {
                    self.http_status_code = code;
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error as _, Serializer};
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Sample {
        name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        port: Option<i32>,
    }

    crate::describe!(Sample);

    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refused"))
        }
    }

    #[test]
    fn test_render_prefixes_type_name() {
        let sample = Sample {
            name: "db".to_string(),
            port: None,
        };
        assert_eq!(sample.describe(), r#"Sample {"name":"db"}"#);
        assert_eq!(sample.to_string(), sample.describe());
    }

    #[test]
    fn test_render_falls_back_on_error() {
        assert_eq!(render("Broken", &Broken), "Broken <unserializable>");

        let mut map = BTreeMap::new();
        map.insert(vec![1_u8], "non-string key");
        assert_eq!(render("Keys", &map), "Keys <unserializable>");
    }
}
