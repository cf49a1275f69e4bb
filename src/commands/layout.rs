//! Layout command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::LayoutConfig;
use crate::error::GraphWeightsError;

impl FromCommand for LayoutConfig {
    fn from_command(command: Commands) -> Result<Self, GraphWeightsError> {
        match command {
            Commands::Layout { layout, format } => LayoutConfig::builder()
                .with_format(format.format)
                .with_layout(layout.to_spring_layout())
                .build(),
            _ => Err(GraphWeightsError::ConfigurationError {
                message: "Invalid command type for LayoutConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(LayoutConfig);

/// Execute the layout command for printing node positions
pub fn execute_layout_command(command: Commands) -> Result<()> {
    let config = LayoutConfig::from_command(command)
        .wrap_err("Failed to parse layout command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::layout::LayoutExecutor;
    LayoutExecutor::execute(config)
}
