use anyhow::{Context, Result};
use comfy_table::Table;
use jpx_core::Runtime;
use serde::Serialize;
use serde_json::Value;
use std::sync::OnceLock;

use crate::cli;

/// Global JMESPath runtime with extended functions
static JMESPATH_RUNTIME: OnceLock<Runtime> = OnceLock::new();

fn jmespath_runtime() -> &'static Runtime {
    JMESPATH_RUNTIME.get_or_init(|| Runtime::builder().with_all_extensions().build())
}

/// Concrete format once `auto` has been resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

impl OutputFormat {
    /// Resolve the CLI choice; `auto` becomes `fallback`
    pub fn resolve(format: cli::OutputFormat, fallback: OutputFormat) -> Self {
        match format {
            cli::OutputFormat::Auto => fallback,
            cli::OutputFormat::Json => OutputFormat::Json,
            cli::OutputFormat::Yaml => OutputFormat::Yaml,
            cli::OutputFormat::Table => OutputFormat::Table,
        }
    }
}

/// Apply a JMESPath expression to `value`
pub fn apply_query(value: Value, query: &str) -> Result<Value> {
    let expr = jmespath_runtime()
        .compile(query)
        .with_context(|| format!("Invalid JMESPath expression: {}", query))?;
    expr.search(&value).context("JMESPath query failed")
}

pub fn print_output<T: Serialize>(
    data: T,
    format: OutputFormat,
    query: Option<&str>,
) -> Result<()> {
    let mut json_value = serde_json::to_value(data)?;

    if let Some(query_str) = query {
        json_value = apply_query(json_value, query_str)?;
    }

    println!("{}", render(&json_value, format)?);
    Ok(())
}

/// Render `value` in `format` without a trailing newline
pub fn render(value: &Value, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?.trim_end().to_string(),
        OutputFormat::Table => render_table(value),
    })
}

fn render_table(value: &Value) -> String {
    match value {
        Value::Array(arr) if !arr.is_empty() => {
            let mut table = Table::new();

            if let Value::Object(first) = &arr[0] {
                let headers: Vec<String> = first.keys().cloned().collect();
                table.set_header(&headers);

                for item in arr {
                    if let Value::Object(obj) = item {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|h| format_value(obj.get(h).unwrap_or(&Value::Null)))
                            .collect();
                        table.add_row(row);
                    }
                }
            } else {
                table.set_header(vec!["Value"]);
                for item in arr {
                    table.add_row(vec![format_value(item)]);
                }
            }

            table.to_string()
        }
        Value::Object(obj) => {
            let mut table = Table::new();
            table.set_header(vec!["Key", "Value"]);

            for (key, val) in obj {
                table.add_row(vec![key.clone(), format_value(val)]);
            }

            table.to_string()
        }
        _ => format_value(value),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auto_resolves_to_fallback() {
        assert_eq!(
            OutputFormat::resolve(cli::OutputFormat::Auto, OutputFormat::Table),
            OutputFormat::Table
        );
        assert_eq!(
            OutputFormat::resolve(cli::OutputFormat::Yaml, OutputFormat::Table),
            OutputFormat::Yaml
        );
    }

    #[test]
    fn test_query_selects_field() {
        let value = json!({"instances": [{"id": "i-1"}, {"id": "i-2"}]});
        let ids = apply_query(value, "instances[].id").unwrap();
        assert_eq!(ids, json!(["i-1", "i-2"]));
    }

    #[test]
    fn test_invalid_query_is_an_error() {
        assert!(apply_query(json!({}), "instances[").is_err());
    }

    #[test]
    fn test_table_summarises_nested_values() {
        let rendered = render(
            &json!([{"name": "orders", "tags": ["a", "b"], "ha": {"mode": "async"}}]),
            OutputFormat::Table,
        )
        .unwrap();
        assert!(rendered.contains("orders"));
        assert!(rendered.contains("[2 items]"));
        assert!(rendered.contains("{1 fields}"));
    }

    #[test]
    fn test_scalar_table_is_plain_text() {
        assert_eq!(render(&json!("done"), OutputFormat::Table).unwrap(), "done");
        assert_eq!(
            render(&json!({"a": 1}), OutputFormat::Yaml).unwrap(),
            "a: 1"
        );
    }
}
