//! Edges command executor

use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::EdgesConfig;
use crate::executors::CommandExecutor;
use crate::graph::sample_graph;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct EdgesExecutor;

impl CommandExecutor for EdgesExecutor {
    type Config = EdgesConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let graph = sample_graph();

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_edge_report(&graph),
            OutputFormat::Json => JsonReportGenerator::new().generate_edge_report(&graph),
        }
        .wrap_err("Failed to generate edge report")?;

        println!("{report}");
        Ok(())
    }
}
