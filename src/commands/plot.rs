//! Plot command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::PlotOptions;
use crate::error::GraphWeightsError;

impl FromCommand for PlotOptions {
    fn from_command(command: Commands) -> Result<Self, GraphWeightsError> {
        match command {
            Commands::Plot {
                format,
                output,
                width,
                height,
                hide_weights,
                layout,
            } => PlotOptions::builder()
                .with_format(format)
                .with_output(output)
                .with_size(width, height)
                .with_show_weights(!hide_weights)
                .with_layout(layout.to_spring_layout())
                .build(),
            _ => Err(GraphWeightsError::ConfigurationError {
                message: "Invalid command type for PlotOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(PlotOptions);

/// Execute the plot command for rendering the weighted graph
pub fn execute_plot_command(command: Commands) -> Result<()> {
    let config =
        PlotOptions::from_command(command).wrap_err("Failed to parse plot command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::plot::PlotExecutor;
    PlotExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::cli::{Cli, PlotFormat};

    #[test]
    fn test_plot_options_from_command() {
        let cli = Cli::try_parse_from([
            "graph-weights",
            "plot",
            "--format",
            "dot",
            "--hide-weights",
            "--width",
            "640",
            "--height",
            "480",
        ])
        .unwrap();

        let options = PlotOptions::try_from(cli.command).unwrap();
        assert_eq!(options.format, PlotFormat::Dot);
        assert!(!options.show_weights);
        assert_eq!((options.width, options.height), (640, 480));
    }

    #[test]
    fn test_wrong_command_is_rejected() {
        let cli = Cli::try_parse_from(["graph-weights", "edges"]).unwrap();
        assert!(PlotOptions::try_from(cli.command).is_err());
    }
}
