//! Layout command configuration

use crate::cli::OutputFormat;
use crate::impl_builder;
use crate::layout::SpringLayout;

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub format: OutputFormat,
    pub layout: SpringLayout,
}

impl LayoutConfig {
    pub fn builder() -> LayoutConfigBuilder {
        LayoutConfigBuilder::new()
    }
}

impl_builder! {
    LayoutConfigBuilder => LayoutConfig {
        with_format => format: OutputFormat,
        with_layout => layout: SpringLayout,
    }
}
