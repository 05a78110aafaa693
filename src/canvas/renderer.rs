use wasm_bindgen::JsValue;

use super::shapes;
use super::surface::DrawSurface;
use crate::config::WheelConfig;
use crate::models::SegmentCatalog;
use crate::utils::truncate_graphemes;
use crate::wheel::WheelLayout;

/// Redraw the whole wheel rotated by `rotation` radians.
///
/// Clears the surface, then draws every sector (two-tone, or the highlight
/// color for `highlight`), its label along the sector's mid-angle, and the
/// fixed pointer on top.  Same inputs always produce the same calls.
pub fn draw_wheel(
    surface: &dyn DrawSurface,
    layout: &WheelLayout,
    catalog: &SegmentCatalog,
    rotation: f64,
    highlight: Option<usize>,
    config: &WheelConfig,
) -> Result<(), JsValue> {
    let palette = &config.palette;

    surface.clear(layout.width, layout.height);

    for (sector, segment) in layout.sectors.iter().zip(catalog.iter()) {
        let fill = palette.fill_for(sector.index, highlight);
        shapes::draw_sector(
            surface,
            layout,
            rotation + sector.start,
            rotation + sector.end,
            fill,
            &palette.outline,
        )?;

        let label = truncate_graphemes(&segment.label, config.label_max_graphemes);
        shapes::draw_label(
            surface,
            layout,
            rotation + sector.mid(),
            config.label_offset.min(layout.radius),
            &label,
            &palette.label,
        )?;
    }

    shapes::draw_pointer(surface, layout, &palette.pointer);
    Ok(())
}
