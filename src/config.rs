use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows kept mounted at any time.
pub const TOTAL_ITEMS: usize = 100;
/// Rows added on one edge and removed from the other per slide.
pub const LOAD_BATCH_SIZE: usize = 25;
/// Height of one row, in pixels.
pub const ROW_HEIGHT: u32 = 60;
/// Distance from an edge, in pixels, at which a slide is triggered.
pub const EDGE_THRESHOLD: u32 = 500;
/// Pixels covered by one terminal line.
pub const LINE_HEIGHT: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    pub total_items: usize,
    pub load_batch_size: usize,
    pub row_height: u32,
    pub edge_threshold: u32,
    pub line_height: u32,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            total_items: TOTAL_ITEMS,
            load_batch_size: LOAD_BATCH_SIZE,
            row_height: ROW_HEIGHT,
            edge_threshold: EDGE_THRESHOLD,
            line_height: LINE_HEIGHT,
        }
    }
}

impl ScrollerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_items == 0 {
            return Err(ConfigError::EmptyWindow);
        }
        if self.load_batch_size == 0 {
            return Err(ConfigError::EmptyBatch);
        }
        if self.load_batch_size >= self.total_items {
            return Err(ConfigError::BatchTooLarge {
                batch: self.load_batch_size,
                total: self.total_items,
            });
        }
        if self.row_height == 0 {
            return Err(ConfigError::ZeroHeight("row_height"));
        }
        if self.line_height == 0 {
            return Err(ConfigError::ZeroHeight("line_height"));
        }
        if self.row_height % self.line_height != 0 {
            return Err(ConfigError::UnalignedRow {
                row_height: self.row_height,
                line_height: self.line_height,
            });
        }
        u32::try_from(self.total_items)
            .ok()
            .and_then(|total| total.checked_mul(self.row_height))
            .ok_or(ConfigError::ExtentOverflow {
                total_items: self.total_items,
                row_height: self.row_height,
            })?;
        Ok(())
    }

    // The extents below cannot overflow once `validate` has passed.

    /// Pixels added above (or removed from above) the viewport by one slide.
    pub fn batch_extent(&self) -> u32 {
        self.load_batch_size as u32 * self.row_height
    }

    /// Total height of a mounted window.
    pub fn content_extent(&self) -> u32 {
        self.total_items as u32 * self.row_height
    }

    /// Terminal lines per row.
    pub fn row_lines(&self) -> u32 {
        self.row_height / self.line_height
    }

    /// Layer `overrides` on top of this config.
    pub fn with_overrides(mut self, overrides: &ScrollerOverrides) -> Self {
        if let Some(v) = overrides.total_items {
            self.total_items = v;
        }
        if let Some(v) = overrides.load_batch_size {
            self.load_batch_size = v;
        }
        if let Some(v) = overrides.row_height {
            self.row_height = v;
        }
        if let Some(v) = overrides.edge_threshold {
            self.edge_threshold = v;
        }
        if let Some(v) = overrides.line_height {
            self.line_height = v;
        }
        self
    }
}

/// Partial config, as found in the settings file or on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_items: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_batch_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<u32>,
}

impl ScrollerOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<ScrollerConfig> for ScrollerOverrides {
    fn from(config: ScrollerConfig) -> Self {
        Self {
            total_items: Some(config.total_items),
            load_batch_size: Some(config.load_batch_size),
            row_height: Some(config.row_height),
            edge_threshold: Some(config.edge_threshold),
            line_height: Some(config.line_height),
        }
    }
}

/// Scroller configuration that can never produce a consistent window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyWindow,
    EmptyBatch,
    BatchTooLarge { batch: usize, total: usize },
    ZeroHeight(&'static str),
    UnalignedRow { row_height: u32, line_height: u32 },
    ExtentOverflow { total_items: usize, row_height: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWindow => write!(f, "total_items must be at least 1"),
            Self::EmptyBatch => write!(f, "load_batch_size must be at least 1"),
            Self::BatchTooLarge { batch, total } => write!(
                f,
                "load_batch_size ({batch}) must be smaller than total_items ({total})"
            ),
            Self::ZeroHeight(field) => write!(f, "{field} must be greater than 0"),
            Self::UnalignedRow {
                row_height,
                line_height,
            } => write!(
                f,
                "row_height ({row_height}) must be a multiple of line_height ({line_height})"
            ),
            Self::ExtentOverflow {
                total_items,
                row_height,
            } => write!(
                f,
                "total_items ({total_items}) * row_height ({row_height}) does not fit in {} pixels",
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
