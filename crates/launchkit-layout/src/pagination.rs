//! Page bookkeeping and drop-target helpers built on the grid geometry.

use std::num::NonZeroUsize;

use tracing::trace;

use crate::geometry::{cell_center, index_at, GridLayoutParameters};
use crate::{Point, Rect};

/// Drop-into-folder target size relative to the icon.
pub const CENTER_AREA_SCALE: f32 = 1.6;

/// Page holding the item at `global_index`.
pub fn page_of(global_index: usize, items_per_page: NonZeroUsize) -> usize {
    global_index / items_per_page.get()
}

/// Pages needed for `item_count` items.
pub fn page_count(item_count: usize, items_per_page: NonZeroUsize) -> usize {
    item_count.div_ceil(items_per_page.get())
}

/// Split `items` into pages. The last page may be short.
pub fn paginate<T>(items: &[T], items_per_page: NonZeroUsize) -> Vec<&[T]> {
    items.chunks(items_per_page.get()).collect()
}

/// Global index of `offset_in_page` on `page_index`, given the actual page
/// contents. Pages may be shorter than a full page.
pub fn global_index<T>(pages: &[Vec<T>], page_index: usize, offset_in_page: usize) -> Option<usize> {
    let page = pages.get(page_index)?;
    if offset_in_page >= page.len() {
        return None;
    }

    let start: usize = pages[..page_index].iter().map(Vec::len).sum();
    Some(start + offset_in_page)
}

/// Whether `point` falls in the square around slot `index`'s center that
/// accepts a drop onto the item itself, rather than a reorder.
pub fn is_point_in_center_area(
    point: Point,
    index: usize,
    params: &GridLayoutParameters,
    icon_size: f32,
) -> bool {
    let center = cell_center(index, params);
    Rect::centered_square(center, icon_size * CENTER_AREA_SCALE).contains(point)
}

/// Reorder target inside a folder holding `item_count` items.
///
/// The slot just past the last item is a valid target so a drag can land at
/// the end. An empty folder always resolves to slot 0.
pub fn insertion_slot(point: Point, params: &GridLayoutParameters, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return Some(0);
    }

    let mut bounded = *params;
    bounded.items_per_page = item_count.saturating_add(1);
    bounded.page_item_count = None;

    let slot = index_at(point, &bounded)?.min(item_count);
    trace!(slot, item_count, "Resolved folder insertion slot");
    Some(slot)
}
