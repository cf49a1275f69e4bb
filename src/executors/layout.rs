//! Layout command executor

use console::style;
use miette::{Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::LayoutConfig;
use crate::executors::{CommandExecutor, progress_reporter, run_layout};
use crate::graph::{SAMPLE_EDGES, sample_graph};
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

pub struct LayoutExecutor;

impl CommandExecutor for LayoutExecutor {
    type Config = LayoutConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Computing spring layout...", style("📍").cyan());

        let mut progress = progress_reporter();
        if let Some(p) = progress.as_ref() {
            p.building_graph(SAMPLE_EDGES.len());
        }

        let graph = sample_graph();
        let layout = run_layout(&config.layout, &graph, progress.as_mut())?;

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_layout_report(&graph, &layout),
            OutputFormat::Json => JsonReportGenerator::new().generate_layout_report(&graph, &layout),
        }
        .wrap_err("Failed to generate layout report")?;

        println!("{report}");
        Ok(())
    }
}
