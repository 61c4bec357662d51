//! Params command - list scene parameters

use anyhow::Result;
use primgen::{ParameterInfo, parameter_descriptors};

/// Execute the params command
pub fn execute() -> Result<()> {
    print!("{}", render_table(parameter_descriptors()));
    Ok(())
}

/// Format descriptors as a column-aligned table with a header row
fn render_table(params: &[ParameterInfo]) -> String {
    let name_width = params.iter().map(|p| p.name.len()).max().unwrap_or(0).max(4);

    let mut table = format!("{:name_width$}  {:7}  {:8}  description\n", "name", "type", "default");
    for p in params {
        table.push_str(&format!(
            "{:name_width$}  {:7}  {:8}  {}\n",
            p.name,
            p.kind.to_string(),
            p.default,
            p.description
        ));
    }
    table
}
