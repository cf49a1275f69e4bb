//! Common functionality shared across commands

use clap::Args;

use crate::layout::SpringLayout;

/// Spring layout arguments shared by the commands that compute positions
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Seed for the initial node placement (random when omitted)
    #[arg(long, env = "GRAPH_WEIGHTS_SEED")]
    pub seed: Option<u64>,

    /// Iteration budget of the force simulation
    #[arg(
        long,
        default_value_t = crate::constants::layout::DEFAULT_ITERATIONS,
        env = "GRAPH_WEIGHTS_ITERATIONS"
    )]
    pub iterations: usize,

    /// Treat every edge as weight 1 when computing the layout
    #[arg(long, env = "GRAPH_WEIGHTS_IGNORE_WEIGHTS")]
    pub ignore_weights: bool,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "GRAPH_WEIGHTS_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

impl LayoutArgs {
    /// Spring layout configured from these arguments
    pub fn to_spring_layout(&self) -> SpringLayout {
        SpringLayout::new()
            .with_seed(self.seed)
            .with_iterations(self.iterations)
            .with_use_weights(!self.ignore_weights)
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::GraphWeightsError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands)
    -> Result<Self, crate::error::GraphWeightsError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::GraphWeightsError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Macro generating a builder whose fields are all required
///
/// Each entry names the setter, then the field it fills.
///
/// ```
/// use graph_weights::common::ConfigBuilder;
///
/// pub struct Canvas {
///     pub width: u32,
///     pub height: u32,
/// }
///
/// graph_weights::impl_builder! {
///     CanvasBuilder => Canvas {
///         with_width => width: u32,
///         with_height => height: u32,
///     }
/// }
///
/// let canvas = CanvasBuilder::new().with_width(800).with_height(600).build().unwrap();
/// assert_eq!(canvas.width, 800);
///
/// assert!(CanvasBuilder::new().with_width(800).build().is_err());
/// ```
#[macro_export]
macro_rules! impl_builder {
    ($builder:ident => $config:ident { $($setter:ident => $field:ident : $ty:ty),* $(,)? }) => {
        #[derive(Default)]
        pub struct $builder {
            $($field: Option<$ty>,)*
        }

        impl $builder {
            pub fn new() -> Self {
                Self::default()
            }

            $(
                pub fn $setter(mut self, $field: $ty) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }

        impl $crate::common::ConfigBuilder for $builder {
            type Config = $config;

            fn build(self) -> Result<Self::Config, $crate::error::GraphWeightsError> {
                Ok($config {
                    $($field: self.$field.ok_or_else(|| {
                        $crate::error::GraphWeightsError::ConfigurationError {
                            message: concat!("Missing required field: ", stringify!($field))
                                .to_string(),
                        }
                    })?,)*
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_args_to_spring_layout() {
        let args = LayoutArgs {
            seed: Some(4),
            iterations: 12,
            ignore_weights: true,
        };

        let layout = args.to_spring_layout();
        assert_eq!(layout.iterations(), 12);
    }
}
