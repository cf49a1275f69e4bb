//! Command executors that handle the actual logic for each command

pub mod edges;
pub mod layout;
pub mod plot;

use miette::{Result, WrapErr};

use crate::graph::WeightedGraph;
use crate::layout::{Layout, SpringLayout};
use crate::progress::ProgressReporter;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Progress reporting only makes sense on an interactive terminal
fn progress_reporter() -> Option<ProgressReporter> {
    console::Term::stderr()
        .is_term()
        .then(ProgressReporter::new)
}

fn run_layout(
    spring: &SpringLayout,
    graph: &WeightedGraph,
    progress: Option<&mut ProgressReporter>,
) -> Result<Layout> {
    let Some(progress) = progress else {
        return spring
            .compute(graph, None)
            .wrap_err("Failed to compute spring layout");
    };

    progress.start_layout(spring.iterations());
    let layout = spring
        .compute(graph, Some(&*progress))
        .wrap_err("Failed to compute spring layout")?;
    progress.finish_layout(layout.iterations(), layout.converged());
    Ok(layout)
}
