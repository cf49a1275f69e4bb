//! Configuration constants for graph-weights
//!
//! Defaults for the spring layout, the SVG canvas and terminal output. Most
//! of them can be overridden from the command line or through environment
//! variables.

use std::time::Duration;

/// Spring layout defaults
pub mod layout {
    /// Iteration budget of the force simulation
    pub const DEFAULT_ITERATIONS: usize = 50;

    /// Per-node movement below which the simulation is considered settled
    pub const DEFAULT_THRESHOLD: f64 = 1e-4;

    /// Largest absolute coordinate after rescaling
    pub const DEFAULT_SCALE: f64 = 1.0;

    /// Lower bound for node distances, and the displacement length below
    /// which a node counts as stalled
    pub const MIN_DISTANCE: f64 = 0.01;

    /// Length a stalled displacement is divided by
    pub const STALLED_DISPLACEMENT_LENGTH: f64 = 0.1;

    /// Fraction of the initial extent used as starting temperature
    pub const INITIAL_TEMPERATURE_RATIO: f64 = 0.1;
}

/// Figure defaults shared by the window and the SVG canvas
pub mod figure {
    pub const TITLE: &str = "Graph with Weights";

    pub const DEFAULT_WIDTH: u32 = 800;
    pub const DEFAULT_HEIGHT: u32 = 600;

    /// Space kept free around the drawing area, title included
    pub const MARGIN: f64 = 50.0;

    pub const NODE_RADIUS: f64 = 15.0;
    pub const NODE_FONT_SIZE: u32 = 10;
    pub const EDGE_FONT_SIZE: u32 = 10;
    pub const TITLE_FONT_SIZE: u32 = 14;

    /// Smallest canvas whose drawing area survives the margins
    pub const MIN_WIDTH: u32 = 2 * MARGIN as u32 + 1;

    /// Smallest canvas whose drawing area survives the margins and the title
    pub const MIN_HEIGHT: u32 = 2 * MARGIN as u32 + TITLE_FONT_SIZE + 1;
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default figure format when not specified
    pub const DEFAULT_PLOT_FORMAT: &str = "window";
}
