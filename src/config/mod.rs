//! # Configuration Module
//!
//! This module provides configuration structures for all graph-weights
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **PlotOptions**: Configuration for the `plot` command that renders the
//!   figure
//! - **LayoutConfig**: Configuration for the `layout` command that prints node
//!   positions
//! - **EdgesConfig**: Configuration for the `edges` command that prints the
//!   weighted edge list
//!
//! ## Example
//!
//! ```
//! use graph_weights::cli::{OutputFormat, PlotFormat};
//! use graph_weights::common::ConfigBuilder;
//! use graph_weights::config::{LayoutConfig, PlotOptions};
//! use graph_weights::layout::SpringLayout;
//!
//! let plot = PlotOptions::builder()
//!     .with_format(PlotFormat::Svg)
//!     .with_size(800, 600)
//!     .with_layout(SpringLayout::new().with_seed(Some(1)))
//!     .build()
//!     .unwrap();
//! assert!(plot.show_weights);
//!
//! let layout = LayoutConfig::builder()
//!     .with_format(OutputFormat::Json)
//!     .with_layout(SpringLayout::new())
//!     .build()
//!     .unwrap();
//! assert_eq!(layout.format, OutputFormat::Json);
//! ```

pub mod edges;
pub mod layout;
pub mod plot;

pub use edges::EdgesConfig;
pub use layout::LayoutConfig;
pub use plot::PlotOptions;
