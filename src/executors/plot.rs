//! Plot command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use console::style;
use miette::{Result, WrapErr};

use crate::cli::PlotFormat;
use crate::config::PlotOptions;
use crate::error::GraphWeightsError;
use crate::executors::{CommandExecutor, progress_reporter, run_layout};
use crate::graph::{GraphRenderer, SAMPLE_EDGES, sample_graph};
use crate::viewer::{FigureScene, show_window};

pub struct PlotExecutor;

impl CommandExecutor for PlotExecutor {
    type Config = PlotOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {} figure...",
            style("🕸").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let mut progress = progress_reporter();
        if let Some(p) = progress.as_ref() {
            p.building_graph(SAMPLE_EDGES.len());
        }

        let graph = sample_graph();
        let renderer =
            GraphRenderer::new(config.show_weights).with_size(config.width, config.height);
        let output = config.output.as_deref();

        match config.format {
            PlotFormat::Window => {
                let layout = run_layout(&config.layout, &graph, progress.as_mut())?;
                let scene = FigureScene::build(
                    &graph,
                    &layout,
                    config.width,
                    config.height,
                    config.show_weights,
                )?;

                eprintln!(
                    "{} Showing figure, close the window to exit",
                    style("🖼").cyan()
                );
                show_window(scene).wrap_err("Failed to show figure window")?;
            }
            PlotFormat::Svg => {
                let layout = run_layout(&config.layout, &graph, progress.as_mut())?;
                write_figure(output, |out| renderer.render_svg(&graph, &layout, out))
                    .wrap_err("Failed to render SVG figure")?;
            }
            PlotFormat::Dot => {
                let layout = run_layout(&config.layout, &graph, progress.as_mut())?;
                write_figure(output, |out| renderer.render_dot(&graph, Some(&layout), out))
                    .wrap_err("Failed to render DOT graph")?;
            }
            // Mermaid and ASCII carry no coordinates
            PlotFormat::Mermaid => {
                write_figure(output, |out| renderer.render_mermaid(&graph, out))
                    .wrap_err("Failed to render Mermaid graph")?;
            }
            PlotFormat::Ascii => {
                write_figure(output, |out| renderer.render_ascii(&graph, out))
                    .wrap_err("Failed to render ASCII graph")?;
            }
        }

        Ok(())
    }
}

/// Run `render` against the output file, or stdout when there is none
fn write_figure<F>(output: Option<&Path>, render: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let mut output_writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(path).map_err(|source| GraphWeightsError::OutputFileError {
                path: path.to_path_buf(),
                source,
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout()),
    };

    render(output_writer.as_mut())?;
    output_writer.flush().map_err(GraphWeightsError::from)?;

    if let Some(path) = output {
        eprintln!(
            "{} Figure written to {}",
            style("✓").green(),
            style(path.display()).bold()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::common::ConfigBuilder;
    use crate::layout::SpringLayout;

    fn options(format: PlotFormat, output: &Path) -> PlotOptions {
        PlotOptions::builder()
            .with_format(format)
            .with_output(Some(output.to_path_buf()))
            .with_size(800, 600)
            .with_layout(SpringLayout::new().with_seed(Some(1)))
            .build()
            .unwrap()
    }

    #[test]
    fn test_plot_svg_to_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("graph.svg");

        PlotExecutor::execute(options(PlotFormat::Svg, &output)).unwrap();

        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_plot_dot_pins_positions() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("graph.dot");

        PlotExecutor::execute(options(PlotFormat::Dot, &output)).unwrap();

        let dot = std::fs::read_to_string(&output).unwrap();
        assert_eq!(dot.matches("pos=").count(), 7);
    }

    #[test]
    fn test_text_formats_write_only_the_requested_file() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("graph.mmd");

        PlotExecutor::execute(options(PlotFormat::Mermaid, &output)).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert!(std::fs::read_to_string(&output).unwrap().starts_with("graph LR"));
    }

    #[test]
    fn test_plot_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("missing").join("graph.txt");

        assert!(PlotExecutor::execute(options(PlotFormat::Ascii, &output)).is_err());
    }

    #[test]
    fn test_render_error_is_propagated() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("graph.txt");

        let result = write_figure(Some(&output), |_| {
            Err(GraphWeightsError::MissingPosition { node: 3 }.into())
        });
        assert!(result.is_err());
    }
}
