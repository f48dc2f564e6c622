use anyhow::Result;
use colored::Colorize;

use crate::graphql::{GRAPHQL_PATH, build_schema, run_server};
use crate::storage::Library;

use super::CommandContext;

pub fn handle_serve(mut ctx: CommandContext, port: Option<u16>, host: Option<String>) -> Result<()> {
    if let Some(p) = port {
        ctx.config.server.port = p;
    }
    if let Some(h) = host {
        ctx.config.server.host = h;
    }

    let library = Library::from_config(&ctx.config)?;
    let schema = build_schema(library);
    let addr = ctx.config.listen_addr();

    println!(
        "{} GraphQL server on {}",
        "Starting".green(),
        format!("http://{}", addr).cyan()
    );
    println!("GraphiQL: http://{}{}", addr, GRAPHQL_PATH);

    tokio::runtime::Runtime::new()?.block_on(run_server(schema, &addr))?;
    Ok(())
}
