//! # LaunchKit Layout
//!
//! Geometry for the launcher's paginated icon grid.
//!
//! Pages sit side by side on a horizontal strip. Each page is a row-major
//! grid of fixed-size cells separated by column and row spacing. This crate
//! maps a slot index on a page to its on-screen position and maps a pointer
//! position back to the slot under it.
//!
//! ## Modules
//!
//! - [`geometry`]: cell origin/center and the inverse hit test
//! - [`config`]: the launcher's fixed grid configuration and cell sizing
//! - [`pagination`]: page/global index bookkeeping and drop-target helpers

pub mod config;
pub mod geometry;
pub mod pagination;

pub use config::GridConfig;
pub use geometry::{cell_center, cell_frame, cell_origin, index_at, visible_cells, GridLayoutParameters};
pub use pagination::{
    global_index, insertion_slot, is_point_in_center_area, page_count, page_of, paginate,
    CENTER_AREA_SCALE,
};

use thiserror::Error;

/// Errors that can occur while building grid parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Grid must have at least one column")]
    InvalidColumns,

    #[error("Invalid cell size: {width}x{height}")]
    InvalidCellSize { width: f32, height: f32 },
}

/// A 2D point in layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

/// A width/height pair in layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of side `side` centered on `center`.
    pub fn centered_square(center: Point, side: f32) -> Self {
        Self::new(center.x - side / 2.0, center.y - side / 2.0, side, side)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }
}
