use anyhow::Result;

use super::{CommandContext, execute};

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let response = execute(ctx, query, variables)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
