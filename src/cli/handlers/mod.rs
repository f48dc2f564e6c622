mod init;
mod mutate;
mod query;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use serve::handle_serve;

use crate::config::BookshelfConfig;
use crate::error::Result;
use crate::graphql::build_schema;
use crate::storage::Library;
use std::path::Path;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig) -> Self {
        Self { config }
    }

    /// Use `config_path` when given, otherwise search upward from `cwd`.
    pub fn load(config_path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let config = match config_path {
            Some(path) => BookshelfConfig::load_from(path)?,
            None => BookshelfConfig::load_or_default(cwd)?,
        };
        Ok(Self::new(config))
    }
}

fn parse_variables(variables: Option<String>) -> serde_json::Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Run one request against a schema built from the configured store.
fn execute(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
) -> anyhow::Result<async_graphql::Response> {
    let vars = parse_variables(variables)?;
    let library = Library::from_config(&ctx.config)?;
    let schema = build_schema(library);

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));
    Ok(response)
}
