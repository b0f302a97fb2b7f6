use rds_core::region::{REGIONS, default_endpoint};
use serde_json::{Value, json};

use crate::cli;
use crate::error::Result as CliResult;
use crate::output::{self, OutputFormat};

pub fn handle_regions(output_format: cli::OutputFormat, query: Option<&str>) -> CliResult<()> {
    let regions: Vec<Value> = REGIONS
        .iter()
        .map(|region| {
            json!({
                "region": region,
                "endpoint": default_endpoint(region),
            })
        })
        .collect();
    let format = OutputFormat::resolve(output_format, OutputFormat::Table);
    output::print_output(regions, format, query)?;
    Ok(())
}
