//! The launcher's grid configuration.

use crate::geometry::GridLayoutParameters;
use crate::{LayoutError, Size};

/// Smallest column width a cell is allowed to shrink to.
pub const MIN_COLUMN_WIDTH: f32 = 40.0;

/// Smallest row height a cell is allowed to shrink to.
pub const MIN_ROW_HEIGHT: f32 = 56.0;

/// Allowed range for the user's icon scale preference.
pub const ICON_SCALE_RANGE: (f32, f32) = (0.6, 1.15);

/// Fixed grid used by the main launcher window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub is_fullscreen: bool,
    pub columns: usize,
    pub rows: usize,
    pub items_per_page: usize,
    pub page_spacing: f32,
    pub row_spacing: f32,
    pub column_spacing: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            is_fullscreen: false,
            columns: 7,
            rows: 5,
            items_per_page: 35,
            page_spacing: 80.0,
            row_spacing: 14.0,
            column_spacing: 20.0,
        }
    }
}

impl GridConfig {
    pub fn fullscreen() -> Self {
        Self {
            is_fullscreen: true,
            ..Self::default()
        }
    }

    /// Horizontal padding as a fraction of the window width.
    pub fn horizontal_padding(&self) -> f32 {
        if self.is_fullscreen {
            0.04
        } else {
            0.0
        }
    }

    /// Top padding as a fraction of the window height.
    pub fn top_padding(&self) -> f32 {
        if self.is_fullscreen {
            0.035
        } else {
            0.0
        }
    }

    /// Bottom padding as a fraction of the window height.
    pub fn bottom_padding(&self) -> f32 {
        if self.is_fullscreen {
            0.06
        } else {
            0.0
        }
    }

    /// Rows needed to hold a full page.
    pub fn rows_per_page(&self) -> usize {
        let columns = self.columns.max(1);
        self.items_per_page.div_ceil(columns)
    }

    /// Cell size that spreads the grid over `available`, with the minimum
    /// cell dimensions applied.
    pub fn cell_size(&self, available: Size) -> Size {
        let columns = self.columns.max(1) as f32;
        let rows = self.rows_per_page().max(1) as f32;

        let width = (available.width - self.column_spacing * (columns - 1.0)) / columns;
        let height = (available.height - self.row_spacing * (rows - 1.0)) / rows;

        Size::new(width.max(MIN_COLUMN_WIDTH), height.max(MIN_ROW_HEIGHT))
    }

    /// Icon edge length for a cell, scaled by the user's preference.
    pub fn icon_size(cell: Size, icon_scale: f32) -> f32 {
        let (min_scale, max_scale) = ICON_SCALE_RANGE;
        cell.width.min(cell.height) * icon_scale.clamp(min_scale, max_scale)
    }

    /// Geometry parameters for `page_index` while `current_page` is shown.
    pub fn parameters(
        &self,
        container: Size,
        cell: Size,
        page_index: usize,
        current_page: usize,
    ) -> Result<GridLayoutParameters, LayoutError> {
        Ok(
            GridLayoutParameters::new(container, self.columns, cell, self.items_per_page)?
                .with_spacing(self.column_spacing, self.row_spacing)
                .with_page_spacing(self.page_spacing)
                .on_page(page_index, current_page),
        )
    }
}
