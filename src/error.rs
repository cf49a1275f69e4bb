use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::graph::NodeId;

#[derive(Error, Debug, Diagnostic)]
pub enum GraphWeightsError {
    #[error("Failed to write output file '{path}'")]
    #[diagnostic(
        code(graph_weights::output_error),
        help("Check that the directory exists and you have write permissions")
    )]
    OutputFileError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open the figure window: {message}")]
    #[diagnostic(
        code(graph_weights::window_error),
        help("A desktop session is required; use --format svg to write the figure instead")
    )]
    WindowError { message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(graph_weights::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(graph_weights::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(graph_weights::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(graph_weights::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Node {node} has no position in the layout")]
    #[diagnostic(
        code(graph_weights::layout_error),
        help("The layout must be computed from the same graph that is rendered")
    )]
    MissingPosition { node: NodeId },
}
