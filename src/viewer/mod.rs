//! # Figure Window
//!
//! Shows the laid-out graph in a native window titled "Graph with Weights".
//! The figure is the same one the SVG renderer draws: straight edges, filled
//! node circles with their ids, and each weight on a white box at the middle
//! of its edge.
//!
//! [`FigureScene`] holds the geometry in canvas pixels and has no GUI
//! dependency; [`show_window`] paints it with egui and blocks until the user
//! closes the window.

mod scene;
mod window;

pub use scene::{FigureScene, SceneEdge, SceneNode};
pub use window::show_window;
