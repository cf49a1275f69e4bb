//! Plot command configuration

use std::path::PathBuf;

use crate::cli::PlotFormat;
use crate::constants::figure::{MIN_HEIGHT, MIN_WIDTH};
use crate::error::GraphWeightsError;
use crate::layout::SpringLayout;

#[derive(Debug, Clone)]
pub struct PlotOptions {
    pub format: PlotFormat,
    pub output: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub show_weights: bool,
    pub layout: SpringLayout,
}

impl PlotOptions {
    pub fn builder() -> PlotOptionsBuilder {
        PlotOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct PlotOptionsBuilder {
    format: Option<PlotFormat>,
    output: Option<Option<PathBuf>>,
    width: Option<u32>,
    height: Option<u32>,
    show_weights: Option<bool>,
    layout: Option<SpringLayout>,
}

impl PlotOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: PlotFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_show_weights(mut self, show_weights: bool) -> Self {
        self.show_weights = Some(show_weights);
        self
    }

    pub fn with_layout(mut self, layout: SpringLayout) -> Self {
        self.layout = Some(layout);
        self
    }
}

fn missing(field: &str) -> GraphWeightsError {
    GraphWeightsError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

impl crate::common::ConfigBuilder for PlotOptionsBuilder {
    type Config = PlotOptions;

    fn build(self) -> Result<Self::Config, GraphWeightsError> {
        let format = self.format.ok_or_else(|| missing("format"))?;
        let output = self.output.unwrap_or(None);
        let width = self.width.ok_or_else(|| missing("width"))?;
        let height = self.height.ok_or_else(|| missing("height"))?;

        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(GraphWeightsError::ConfigurationError {
                message: format!(
                    "Canvas must be at least {MIN_WIDTH}x{MIN_HEIGHT}, got {width}x{height}"
                ),
            });
        }

        if format == PlotFormat::Window
            && let Some(path) = output.as_ref()
        {
            return Err(GraphWeightsError::ConfigurationError {
                message: format!(
                    "The window format cannot be written to '{}'; choose svg, dot, mermaid or ascii",
                    path.display()
                ),
            });
        }

        Ok(PlotOptions {
            format,
            output,
            width,
            height,
            show_weights: self.show_weights.unwrap_or(true),
            layout: self.layout.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_defaults_for_optional_fields() {
        let options = PlotOptions::builder()
            .with_format(PlotFormat::Svg)
            .with_size(800, 600)
            .build()
            .unwrap();

        assert!(options.output.is_none());
        assert!(options.show_weights);
        assert_eq!(options.layout.iterations(), 50);
    }

    #[test]
    fn test_missing_format() {
        let err = PlotOptions::builder()
            .with_size(800, 600)
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: format"
        );
    }

    #[test]
    fn test_canvas_too_small() {
        let result = PlotOptions::builder()
            .with_format(PlotFormat::Svg)
            .with_size(100, 600)
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_title_band_counts_towards_minimum_height() {
        let too_short = PlotOptions::builder()
            .with_format(PlotFormat::Svg)
            .with_size(400, 114)
            .build();
        assert!(too_short.is_err());

        let options = PlotOptions::builder()
            .with_format(PlotFormat::Svg)
            .with_size(101, 115)
            .build()
            .unwrap();
        assert_eq!((options.width, options.height), (101, 115));
    }

    #[test]
    fn test_window_cannot_target_a_file() {
        let result = PlotOptions::builder()
            .with_format(PlotFormat::Window)
            .with_output(Some(PathBuf::from("graph.svg")))
            .with_size(800, 600)
            .build();

        assert!(result.is_err());
    }
}
