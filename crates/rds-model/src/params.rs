//! Rendering of path and query parameters
//!
//! Request types keep their path and query parameters as ordinary fields,
//! some required, most `Option<T>`. This trait lets the operation layer treat
//! all of them the same way: a field either renders to a string or is left
//! out of the request.

/// A value that can be placed in a URI path segment or query string
pub trait QueryParameter {
    /// The rendered value, or `None` when the parameter should be omitted
    fn to_query_value(&self) -> Option<String>;
}

impl QueryParameter for String {
    fn to_query_value(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl QueryParameter for str {
    fn to_query_value(&self) -> Option<String> {
        Some(self.to_owned())
    }
}

impl QueryParameter for bool {
    fn to_query_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl QueryParameter for i32 {
    fn to_query_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl QueryParameter for i64 {
    fn to_query_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl QueryParameter for u32 {
    fn to_query_value(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn to_query_value(&self) -> Option<String> {
        self.as_ref().and_then(QueryParameter::to_query_value)
    }
}

/// Lists are sent comma-separated; an empty list is omitted
impl QueryParameter for Vec<String> {
    fn to_query_value(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.join(","))
        }
    }
}

impl<T: QueryParameter + ?Sized> QueryParameter for &T {
    fn to_query_value(&self) -> Option<String> {
        (**self).to_query_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars_render() {
        assert_eq!("abc".to_query_value(), Some("abc".to_string()));
        assert_eq!(10_i32.to_query_value(), Some("10".to_string()));
        assert_eq!(true.to_query_value(), Some("true".to_string()));
    }

    #[test]
    fn test_option_omits_none() {
        let absent: Option<i32> = None;
        assert_eq!(absent.to_query_value(), None);
        assert_eq!(Some(5_i64).to_query_value(), Some("5".to_string()));
    }

    #[test]
    fn test_vec_joins_with_commas() {
        let ids = vec!["a".to_string(), "b".to_string()];
        assert_eq!(ids.to_query_value(), Some("a,b".to_string()));
        assert_eq!(Vec::<String>::new().to_query_value(), None);
    }
}
