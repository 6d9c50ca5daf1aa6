use crate::foundation::core::{Edges, Rgba8};
use crate::foundation::error::TessellaResult;
use crate::layout::model::{FillMode, LayoutConfig};

/// Chainable builder for [`LayoutConfig`].
///
/// Starts from [`LayoutConfig::default`] and validates on [`build`].
///
/// [`build`]: LayoutConfigBuilder::build
pub struct LayoutConfigBuilder {
    config: LayoutConfig,
}

impl LayoutConfigBuilder {
    /// Start from the default configuration with the given fill mode.
    pub fn new(mode: FillMode) -> Self {
        Self {
            config: LayoutConfig {
                mode,
                ..LayoutConfig::default()
            },
        }
    }

    /// Set the mirror flags for both axes.
    pub fn mirror(mut self, horizontal: bool, vertical: bool) -> Self {
        self.config.mirror_horizontal = horizontal;
        self.config.mirror_vertical = vertical;
        self
    }

    /// Enable or disable aspect-ratio preservation.
    pub fn preserve_aspect(mut self, on: bool) -> Self {
        self.config.preserve_aspect = on;
        self
    }

    /// Enable or disable interior fill.
    pub fn fill_center(mut self, on: bool) -> Self {
        self.config.fill_center = on;
        self
    }

    /// Set the hollow border fractions used when the center is not filled.
    pub fn border_fractions(mut self, fractions: Edges) -> Self {
        self.config.border_fractions = fractions;
        self
    }

    /// Set the uniform vertex color.
    pub fn color(mut self, color: Rgba8) -> Self {
        self.config.color = color;
        self
    }

    /// Set the visibility flag consumed by the host.
    pub fn visible(mut self, on: bool) -> Self {
        self.config.visible = on;
        self
    }

    /// Enable or disable geometry emission entirely.
    pub fn enabled(mut self, on: bool) -> Self {
        self.config.enabled = on;
        self
    }

    /// Validate and return the finished configuration.
    pub fn build(self) -> TessellaResult<LayoutConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
