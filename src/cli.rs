use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, LayoutArgs};

#[derive(Parser)]
#[command(
    name = "graph-weights",
    about = "🕸️ Plot a small weighted undirected graph with a spring layout",
    long_about = "graph-weights builds a fixed weighted undirected graph from a hard-coded edge \
                  list, places its nodes with a force-directed (Fruchterman-Reingold) layout and \
                  renders it with node labels and edge-weight labels.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the graph as a figure
    ///
    /// Computes a spring layout and shows nodes, node labels, edges and
    /// edge-weight labels in a window until it is closed. The other formats
    /// write text to stdout or to an output file instead.
    #[command(
        long_about = "Render the weighted graph. By default a window titled \"Graph with Weights\" \
                      shows every node as a labelled circle and every edge with its weight at the \
                      midpoint; the command returns once the window is closed. SVG draws the same \
                      figure to a file or stdout. DOT output pins the computed positions so \
                      Graphviz (neato -n) reproduces the same picture; Mermaid and ASCII output \
                      list the weighted edges without positions."
    )]
    Plot {
        /// Figure format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_PLOT_FORMAT,
            env = "GRAPH_WEIGHTS_PLOT_FORMAT"
        )]
        format: PlotFormat,

        /// Output file for text formats (stdout if not specified)
        #[arg(short, long, env = "GRAPH_WEIGHTS_OUTPUT")]
        output: Option<PathBuf>,

        /// Canvas width in pixels
        #[arg(
            long,
            default_value_t = crate::constants::figure::DEFAULT_WIDTH,
            env = "GRAPH_WEIGHTS_WIDTH"
        )]
        width: u32,

        /// Canvas height in pixels
        #[arg(
            long,
            default_value_t = crate::constants::figure::DEFAULT_HEIGHT,
            env = "GRAPH_WEIGHTS_HEIGHT"
        )]
        height: u32,

        /// Leave edge-weight labels out of the figure
        #[arg(long, env = "GRAPH_WEIGHTS_HIDE_WEIGHTS")]
        hide_weights: bool,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Print the node positions of the spring layout
    #[command(
        long_about = "Compute the spring layout and print one position per node. Use --seed to \
                      make the placement reproducible and --format json for machine-readable \
                      output."
    )]
    Layout {
        #[command(flatten)]
        layout: LayoutArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Print the deduplicated edge list with weights
    #[command(
        long_about = "Print every undirected edge once, with the weight of the last triple that \
                      named its node pair."
    )]
    Edges {
        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum PlotFormat {
    /// Interactive window, blocks until closed
    Window,
    Svg,
    Dot,
    Mermaid,
    Ascii,
}
