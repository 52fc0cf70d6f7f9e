use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, RgbaImage};

use crate::GridSpec;

/// A source that can cut a picture into one sprite per grid cell.
///
/// Implementations must produce exactly `grid.piece_count()` sprites in
/// row-major order, so that the sprite for cell `(row, column)` sits at
/// index `row * columns + column`.
pub trait PieceSource {
    type Sprite;

    fn slice(&mut self, grid: GridSpec) -> anyhow::Result<Vec<Self::Sprite>>;
}

/// Cuts a rasterized board image into equally sized rectangular tiles.
///
/// Tile dimensions are `floor(width / columns) x floor(height / rows)`;
/// leftover pixels along the right and bottom edges are discarded.
pub struct ImageSlicer {
    image: DynamicImage,
}

impl ImageSlicer {
    pub fn new(image: DynamicImage) -> Self {
        Self { image }
    }

    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Failed to load board image '{}'", path.display()))?;
        Ok(Self { image })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

impl PieceSource for ImageSlicer {
    type Sprite = RgbaImage;

    fn slice(&mut self, grid: GridSpec) -> anyhow::Result<Vec<RgbaImage>> {
        if grid.rows == 0 || grid.columns == 0 {
            anyhow::bail!("Cannot slice an image into a {}x{} grid", grid.rows, grid.columns);
        }
        let piece_width = self.image.width() / grid.columns;
        let piece_height = self.image.height() / grid.rows;
        if piece_width == 0 || piece_height == 0 {
            anyhow::bail!(
                "A {}x{} pixel image is too small for {} columns and {} rows",
                self.image.width(),
                self.image.height(),
                grid.columns,
                grid.rows
            );
        }

        let mut sprites = Vec::with_capacity(grid.piece_count());
        for id in grid.cells() {
            let tile = self.image.crop_imm(
                id.column * piece_width,
                id.row * piece_height,
                piece_width,
                piece_height,
            );
            sprites.push(tile.to_rgba8());
        }
        Ok(sprites)
    }
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    // A 4x4 image whose pixel at (x, y) encodes its own coordinates.
    fn coordinate_image() -> DynamicImage {
        let buffer = RgbaImage::from_fn(4, 4, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        DynamicImage::ImageRgba8(buffer)
    }

    #[test]
    fn slices_row_major_with_even_tiles() {
        let mut slicer = ImageSlicer::new(coordinate_image());
        let grid = GridSpec::new(2, 2);
        let sprites = slicer.slice(grid).unwrap();
        assert_eq!(sprites.len(), 4);
        for (index, sprite) in sprites.iter().enumerate() {
            assert_eq!(sprite.dimensions(), (2, 2));
            let row = (index / 2) as u8;
            let column = (index % 2) as u8;
            // Top-left pixel of each tile carries the source coordinates.
            assert_eq!(sprite.get_pixel(0, 0), &Rgba([column * 2, row * 2, 0, 255]));
        }
    }

    #[test]
    fn discards_leftover_edge_pixels() {
        let mut slicer = ImageSlicer::new(coordinate_image());
        let sprites = slicer.slice(GridSpec::new(3, 3)).unwrap();
        assert_eq!(sprites.len(), 9);
        assert!(sprites.iter().all(|sprite| sprite.dimensions() == (1, 1)));
    }

    #[test]
    fn rejects_a_grid_finer_than_the_pixels() {
        let mut slicer = ImageSlicer::new(coordinate_image());
        assert!(slicer.slice(GridSpec::new(8, 8)).is_err());
    }
}
