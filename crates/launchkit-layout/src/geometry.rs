//! # Grid Geometry
//!
//! Conversions between a slot index on a page and its position on the
//! horizontally paginated canvas.
//!
//! ## Coordinate model
//!
//! - Slots are row-major: `row = index / columns`, `col = index % columns`.
//! - Cells are `column_width x row_height`, separated by the column/row spacing.
//! - `grid_padding` insets the whole grid on both axes.
//! - `scroll_offset_y` moves content up as a page scrolls.
//! - Pages other than the current one are shifted by whole page widths
//!   (`container.width + page_spacing`) so they line up on a horizontal strip.
//!
//! Positions may land off-screen; callers cull what they draw.

use std::num::NonZeroUsize;

use tracing::trace;

use crate::{LayoutError, Point, Rect, Size};

/// Inputs for a single geometry query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayoutParameters {
    /// Size of the container hosting one page.
    pub container: Size,
    /// Page the queried slot lives on.
    pub page_index: usize,
    /// Page currently centered on screen.
    pub current_page: usize,
    pub column_width: f32,
    pub row_height: f32,
    pub columns: NonZeroUsize,
    pub column_spacing: f32,
    pub row_spacing: f32,
    /// Gap between adjacent pages on the strip.
    pub page_spacing: f32,
    /// Capacity of one page. Hit tests beyond it resolve to nothing.
    pub items_per_page: usize,
    pub grid_padding: f32,
    pub scroll_offset_y: f32,
    /// Number of items actually on the page, when shorter than a full page.
    pub page_item_count: Option<usize>,
}

impl GridLayoutParameters {
    /// Create parameters for the current page with no spacing, padding or scroll.
    pub fn new(
        container: Size,
        columns: usize,
        cell: Size,
        items_per_page: usize,
    ) -> Result<Self, LayoutError> {
        let columns = NonZeroUsize::new(columns).ok_or(LayoutError::InvalidColumns)?;

        if !(cell.width.is_finite() && cell.height.is_finite() && cell.width > 0.0 && cell.height > 0.0)
        {
            return Err(LayoutError::InvalidCellSize {
                width: cell.width,
                height: cell.height,
            });
        }

        Ok(Self {
            container,
            page_index: 0,
            current_page: 0,
            column_width: cell.width,
            row_height: cell.height,
            columns,
            column_spacing: 0.0,
            row_spacing: 0.0,
            page_spacing: 0.0,
            items_per_page,
            grid_padding: 0.0,
            scroll_offset_y: 0.0,
            page_item_count: None,
        })
    }

    pub fn with_spacing(mut self, column_spacing: f32, row_spacing: f32) -> Self {
        self.column_spacing = column_spacing;
        self.row_spacing = row_spacing;
        self
    }

    pub fn with_page_spacing(mut self, page_spacing: f32) -> Self {
        self.page_spacing = page_spacing;
        self
    }

    /// Query slots on `page_index` while `current_page` is on screen.
    pub fn on_page(mut self, page_index: usize, current_page: usize) -> Self {
        self.page_index = page_index;
        self.current_page = current_page;
        self
    }

    pub fn with_grid_padding(mut self, grid_padding: f32) -> Self {
        self.grid_padding = grid_padding;
        self
    }

    pub fn with_scroll_offset(mut self, scroll_offset_y: f32) -> Self {
        self.scroll_offset_y = scroll_offset_y;
        self
    }

    /// Bound hit tests to the items present on a partially filled page.
    pub fn with_page_item_count(mut self, count: usize) -> Self {
        self.page_item_count = Some(count);
        self
    }

    /// Distance between the left edges of adjacent columns.
    pub fn column_pitch(&self) -> f32 {
        self.column_width + self.column_spacing
    }

    /// Distance between the top edges of adjacent rows.
    pub fn row_pitch(&self) -> f32 {
        self.row_height + self.row_spacing
    }

    /// Horizontal shift of `page_index` relative to the page on screen.
    pub fn page_offset_x(&self) -> f32 {
        let pages_away = self.page_index as f32 - self.current_page as f32;
        pages_away * (self.container.width + self.page_spacing)
    }

    pub fn cell_size(&self) -> Size {
        Size::new(self.column_width, self.row_height)
    }
}

/// Top-left corner of slot `index`.
pub fn cell_origin(index: usize, params: &GridLayoutParameters) -> Point {
    let columns = params.columns.get();
    let row = index / columns;
    let col = index % columns;

    let x = params.grid_padding + col as f32 * params.column_pitch();
    let y = params.grid_padding + row as f32 * params.row_pitch() - params.scroll_offset_y;

    Point::new(x + params.page_offset_x(), y)
}

/// Visual center of slot `index`.
pub fn cell_center(index: usize, params: &GridLayoutParameters) -> Point {
    let origin = cell_origin(index, params);
    Point::new(
        origin.x + params.column_width / 2.0,
        origin.y + params.row_height / 2.0,
    )
}

/// Full frame of slot `index`.
pub fn cell_frame(index: usize, params: &GridLayoutParameters) -> Rect {
    let origin = cell_origin(index, params);
    Rect::new(origin.x, origin.y, params.column_width, params.row_height)
}

/// Slot under `point`, if any.
///
/// The boundary between two neighbouring cells sits in the middle of the gap
/// separating them, so a pointer inside a gap snaps to the nearer cell. A
/// point exactly on that midpoint belongs to the right (or lower) cell.
pub fn index_at(point: Point, params: &GridLayoutParameters) -> Option<usize> {
    let local_x = point.x - params.page_offset_x() - params.grid_padding;
    let local_y = point.y - params.grid_padding + params.scroll_offset_y;

    if !(local_x >= 0.0 && local_y >= 0.0) {
        return None;
    }

    let column_pitch = params.column_pitch();
    let row_pitch = params.row_pitch();
    if column_pitch <= 0.0 || row_pitch <= 0.0 {
        return None;
    }

    let col = ((local_x + params.column_spacing / 2.0) / column_pitch).floor();
    let row = ((local_y + params.row_spacing / 2.0) / row_pitch).floor();

    let columns = params.columns.get();
    if !(col >= 0.0 && row >= 0.0 && col < columns as f32) {
        return None;
    }

    let (col, row) = (col as usize, row as usize);
    let offset = row.checked_mul(columns)?.checked_add(col)?;

    if offset >= params.items_per_page {
        trace!(row, col, offset, "Hit test beyond page capacity");
        return None;
    }

    if let Some(count) = params.page_item_count {
        if offset >= count {
            trace!(offset, count, "Hit test beyond page items");
            return None;
        }
    }

    Some(offset)
}

/// Slots among the first `count` whose frames intersect `viewport`.
pub fn visible_cells(
    params: &GridLayoutParameters,
    count: usize,
    viewport: Rect,
) -> impl Iterator<Item = (usize, Rect)> + '_ {
    (0..count)
        .map(move |index| (index, cell_frame(index, params)))
        .filter(move |(_, frame)| frame.intersects(&viewport))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 7 columns of 100x100 cells with 20 units of spacing everywhere.
    fn params() -> GridLayoutParameters {
        GridLayoutParameters::new(Size::new(800.0, 600.0), 7, Size::new(100.0, 100.0), 35)
            .unwrap()
            .with_spacing(20.0, 20.0)
            .with_page_spacing(20.0)
    }

    #[test]
    fn test_rejects_zero_columns() {
        let result = GridLayoutParameters::new(Size::new(800.0, 600.0), 0, Size::new(100.0, 100.0), 35);
        assert_eq!(result, Err(LayoutError::InvalidColumns));
    }

    #[test]
    fn test_rejects_degenerate_cells() {
        let result = GridLayoutParameters::new(Size::new(800.0, 600.0), 7, Size::new(0.0, 100.0), 35);
        assert!(matches!(result, Err(LayoutError::InvalidCellSize { .. })));

        let result =
            GridLayoutParameters::new(Size::new(800.0, 600.0), 7, Size::new(100.0, f32::NAN), 35);
        assert!(matches!(result, Err(LayoutError::InvalidCellSize { .. })));
    }

    #[test]
    fn test_cell_origin_first_slots() {
        let p = params();
        assert_eq!(cell_origin(0, &p), Point::new(0.0, 0.0));
        assert_eq!(cell_origin(1, &p), Point::new(120.0, 0.0));
        assert_eq!(cell_origin(7, &p), Point::new(0.0, 120.0));
        assert_eq!(cell_origin(8, &p), Point::new(120.0, 120.0));
    }

    #[test]
    fn test_cell_center_offsets_by_half_cell() {
        let p = params();
        assert_eq!(cell_center(0, &p), Point::new(50.0, 50.0));
        assert_eq!(cell_center(8, &p), Point::new(170.0, 170.0));
    }

    #[test]
    fn test_cell_frame() {
        let p = params();
        assert_eq!(cell_frame(8, &p), Rect::new(120.0, 120.0, 100.0, 100.0));
    }

    #[test]
    fn test_padding_and_scroll_offset() {
        let p = params().with_grid_padding(16.0).with_scroll_offset(40.0);
        assert_eq!(cell_origin(0, &p), Point::new(16.0, -24.0));
        assert_eq!(cell_origin(8, &p), Point::new(136.0, 96.0));
    }

    #[test]
    fn test_page_offset_for_neighbouring_pages() {
        let next = params().on_page(1, 0);
        assert_eq!(cell_origin(0, &next), Point::new(820.0, 0.0));

        let previous = params().on_page(0, 1);
        assert_eq!(cell_origin(0, &previous), Point::new(-820.0, 0.0));
    }

    #[test]
    fn test_index_at_cell_interior() {
        let p = params();
        assert_eq!(index_at(Point::new(10.0, 10.0), &p), Some(0));
        assert_eq!(index_at(Point::new(170.0, 170.0), &p), Some(8));
        assert_eq!(index_at(Point::new(6.0 * 120.0 + 50.0, 4.0 * 120.0 + 50.0), &p), Some(34));
    }

    #[test]
    fn test_index_at_gap_snaps_to_nearer_cell() {
        let p = params();
        // Gap between columns 0 and 1 spans x in [100, 120); midpoint 110.
        assert_eq!(index_at(Point::new(105.0, 50.0), &p), Some(0));
        assert_eq!(index_at(Point::new(109.9, 50.0), &p), Some(0));
        assert_eq!(index_at(Point::new(110.0, 50.0), &p), Some(1));
        assert_eq!(index_at(Point::new(115.0, 50.0), &p), Some(1));

        assert_eq!(index_at(Point::new(50.0, 109.9), &p), Some(0));
        assert_eq!(index_at(Point::new(50.0, 110.0), &p), Some(7));
    }

    #[test]
    fn test_index_at_rejects_negative_local_coordinates() {
        let p = params();
        assert_eq!(index_at(Point::new(-0.1, 50.0), &p), None);
        assert_eq!(index_at(Point::new(50.0, -0.1), &p), None);

        let padded = params().with_grid_padding(16.0);
        assert_eq!(index_at(Point::new(10.0, 50.0), &padded), None);
        assert_eq!(index_at(Point::new(16.0, 16.0), &padded), Some(0));
    }

    #[test]
    fn test_index_at_rejects_nan() {
        assert_eq!(index_at(Point::new(f32::NAN, 10.0), &params()), None);
    }

    #[test]
    fn test_index_at_rejects_columns_past_grid() {
        let p = params();
        // Column 7 does not exist.
        assert_eq!(index_at(Point::new(7.0 * 120.0 + 10.0, 10.0), &p), None);
    }

    #[test]
    fn test_index_at_rejects_offset_past_capacity() {
        let mut p = params();
        p.items_per_page = 30;
        // row 4, col 3 -> offset 31
        let point = Point::new(3.0 * 120.0 + 50.0, 4.0 * 120.0 + 50.0);
        assert_eq!(index_at(point, &p), None);

        // row 4, col 1 -> offset 29 is the last valid slot
        let point = Point::new(120.0 + 50.0, 4.0 * 120.0 + 50.0);
        assert_eq!(index_at(point, &p), Some(29));
    }

    #[test]
    fn test_index_at_respects_page_item_count() {
        let p = params().with_page_item_count(10);
        assert_eq!(index_at(cell_center(9, &p), &p), Some(9));
        assert_eq!(index_at(cell_center(10, &p), &p), None);
    }

    #[test]
    fn test_index_at_with_scroll_offset() {
        let p = params().with_scroll_offset(120.0);
        // Row 1 is now drawn where row 0 used to be.
        assert_eq!(index_at(Point::new(50.0, 50.0), &p), Some(7));
    }

    #[test]
    fn test_index_at_on_other_page() {
        let p = params().on_page(1, 0);
        assert_eq!(index_at(Point::new(820.0 + 50.0, 50.0), &p), Some(0));
        assert_eq!(index_at(Point::new(50.0, 50.0), &p), None);
    }

    #[test]
    fn test_visible_cells_culls_offscreen_rows() {
        let p = params().with_scroll_offset(240.0);
        let viewport = Rect::new(0.0, 0.0, 800.0, 100.0);
        let visible: Vec<usize> = visible_cells(&p, 35, viewport).map(|(i, _)| i).collect();
        assert_eq!(visible, (14..21).collect::<Vec<_>>());
    }
}
