use anyhow::Result;

use super::{CommandContext, execute};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    let response = execute(ctx, query, variables)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
