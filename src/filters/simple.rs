//! Direct nearest-colour mapping.

use crate::types::{Palette, PixelGrid};

/// Map every visible sample straight to its nearest palette colour.
///
/// No preprocessing; this is the baseline the other filters build on.
pub fn apply(grid: &mut PixelGrid, palette: &Palette) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !grid.is_visible(x, y) {
                continue;
            }

            let snapped = palette.closest(grid.rgba(x, y));
            grid.set_rgb(x, y, snapped);
        }
    }
}
