//! Edges command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::EdgesConfig;
use crate::error::GraphWeightsError;

impl FromCommand for EdgesConfig {
    fn from_command(command: Commands) -> Result<Self, GraphWeightsError> {
        match command {
            Commands::Edges { format } => EdgesConfig::builder().with_format(format.format).build(),
            _ => Err(GraphWeightsError::ConfigurationError {
                message: "Invalid command type for EdgesConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(EdgesConfig);

/// Execute the edges command for listing the weighted edges
pub fn execute_edges_command(command: Commands) -> Result<()> {
    let config = EdgesConfig::from_command(command)
        .wrap_err("Failed to parse edges command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::edges::EdgesExecutor;
    EdgesExecutor::execute(config)
}
