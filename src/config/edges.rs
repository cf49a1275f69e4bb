//! Edges command configuration

use crate::cli::OutputFormat;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct EdgesConfig {
    pub format: OutputFormat,
}

impl EdgesConfig {
    pub fn builder() -> EdgesConfigBuilder {
        EdgesConfigBuilder::new()
    }
}

impl_builder! {
    EdgesConfigBuilder => EdgesConfig {
        with_format => format: OutputFormat,
    }
}
