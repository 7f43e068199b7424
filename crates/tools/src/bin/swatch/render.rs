use std::path::Path;

use anyhow::Context;
use image::{ImageFormat, RgbImage};
use imageproc::rect::Rect;

use crate::Swatch;

const CELL: u32 = 64;
const COLUMNS: usize = 10;
const PADDING: u32 = 8;
const BAR_HEIGHT: u32 = 12;

/// Lays swatches out in rows of ten. Each cell is filled with its color and
/// carries a bar in the text color chosen for it.
pub(crate) fn draw(swatches: &[Swatch]) -> RgbImage {
    let columns = swatches.len().clamp(1, COLUMNS);
    let rows = (swatches.len() + columns - 1) / columns;
    let mut output = RgbImage::new(columns as u32 * CELL, rows.max(1) as u32 * CELL);

    for (idx, swatch) in swatches.iter().enumerate() {
        let x = (idx % columns) as u32 * CELL;
        let y = (idx / columns) as u32 * CELL;

        imageproc::drawing::draw_filled_rect_mut(
            &mut output,
            Rect::at(x as i32, y as i32).of_size(CELL, CELL),
            swatch.color.to_rgb8(),
        );

        let bar = Rect::at(
            (x + PADDING) as i32,
            (y + (CELL - BAR_HEIGHT) / 2) as i32,
        ).of_size(CELL - PADDING * 2, BAR_HEIGHT);
        imageproc::drawing::draw_filled_rect_mut(&mut output, bar, swatch.text.color().to_rgb8());
    }

    output
}

pub(crate) fn write_png(swatches: &[Swatch], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    if swatches.is_empty() {
        anyhow::bail!("no swatches to render");
    }

    draw(swatches)
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::info!("rendered {} swatches to {}", swatches.len(), path.display());
    Ok(())
}
