use std::path::Path;

use image::{ImageResult, Rgb, RgbImage};

use crate::events::{ColourTag, DrawEvent};
use crate::grid_dimensions::GridDimensions;
use crate::units::CellPixels;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const RED: Rgb<u8> = Rgb([0xff, 0, 0]);
const GREEN: Rgb<u8> = Rgb([0, 0x80, 0]);
const YELLOW: Rgb<u8> = Rgb([0xff, 0xff, 0]);

#[derive(Debug, Copy, Clone)]
pub struct RenderOptions {
    cell_pixels: CellPixels,
    background: Rgb<u8>,
    neutral: Rgb<u8>,
    start: Rgb<u8>,
    end: Rgb<u8>,
    path: Rgb<u8>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            cell_pixels: CellPixels(8),
            background: BLACK,
            neutral: WHITE,
            start: RED,
            end: GREEN,
            path: YELLOW,
        }
    }
}

impl RenderOptions {
    #[inline]
    pub fn cell_pixels(&self) -> CellPixels {
        self.cell_pixels
    }

    pub fn colour_of(&self, tag: ColourTag) -> Rgb<u8> {
        match tag {
            ColourTag::Neutral => self.neutral,
            ColourTag::HighlightStart => self.start,
            ColourTag::HighlightEnd => self.end,
            ColourTag::PathMarker => self.path,
        }
    }
}

#[derive(Debug, Default)]
pub struct RenderOptionsBuilder {
    options: RenderOptions,
}

impl RenderOptionsBuilder {
    pub fn new() -> RenderOptionsBuilder {
        RenderOptionsBuilder::default()
    }
    pub fn cell_pixels(mut self, cell_pixels: CellPixels) -> Self {
        self.options.cell_pixels = cell_pixels;
        self
    }
    pub fn background(mut self, colour: Rgb<u8>) -> Self {
        self.options.background = colour;
        self
    }
    pub fn neutral(mut self, colour: Rgb<u8>) -> Self {
        self.options.neutral = colour;
        self
    }
    pub fn path(mut self, colour: Rgb<u8>) -> Self {
        self.options.path = colour;
        self
    }
    pub fn build(self) -> RenderOptions {
        self.options
    }
}

/// Replay a stream of draw events onto a fresh canvas, the same way a live
/// renderer would paint them one after the other. Later events paint over
/// earlier ones.
pub fn render_events(dimensions: GridDimensions,
                     options: &RenderOptions,
                     events: &[DrawEvent])
                     -> RgbImage {
    let CellPixels(side) = options.cell_pixels;
    let width = (dimensions.columns().0 * side) as u32;
    let height = (dimensions.rows().0 * side) as u32;
    let mut canvas = RgbImage::from_pixel(width, height, options.background);

    for event in events.iter().filter(|e| dimensions.contains(e.cell)) {
        let colour = options.colour_of(event.colour);
        let x0 = event.cell.column * side as u32;
        let y0 = event.cell.row * side as u32;
        for y in y0..y0 + side as u32 {
            for x in x0..x0 + side as u32 {
                canvas.put_pixel(x, y, colour);
            }
        }
    }

    canvas
}

/// Always PNG format.
pub fn save_png<P: AsRef<Path>>(image: &RgbImage, path: P) -> ImageResult<()> {
    image.save_with_format(path, image::ImageFormat::Png)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::cells::Cell;
    use crate::units::{ColumnsCount, RowsCount};

    fn dims(w: usize, h: usize) -> GridDimensions {
        GridDimensions::new(ColumnsCount(w), RowsCount(h)).unwrap()
    }

    #[test]
    fn canvas_size_follows_cell_pixels() {
        let options = RenderOptionsBuilder::new().cell_pixels(CellPixels(3)).build();
        let image = render_events(dims(4, 2), &options, &[]);
        assert_eq!(image.dimensions(), (12, 6));
        assert!(image.pixels().all(|p| *p == BLACK));
    }

    #[test]
    fn later_events_paint_over_earlier_ones() {
        let options = RenderOptionsBuilder::new().cell_pixels(CellPixels(2)).build();
        let c = Cell::new(1, 0);
        let events = [DrawEvent::new(c, ColourTag::Neutral),
                      DrawEvent::new(Cell::new(0, 1), ColourTag::PathMarker),
                      DrawEvent::new(c, ColourTag::HighlightStart)];
        let image = render_events(dims(2, 2), &options, &events);

        assert_eq!(*image.get_pixel(2, 0), RED);
        assert_eq!(*image.get_pixel(3, 1), RED);
        assert_eq!(*image.get_pixel(0, 2), YELLOW);
        assert_eq!(*image.get_pixel(1, 3), YELLOW);
        assert_eq!(*image.get_pixel(0, 0), BLACK);
        assert_eq!(*image.get_pixel(3, 3), BLACK);
    }

    #[test]
    fn palette() {
        let options = RenderOptionsBuilder::new().neutral(GREEN).path(WHITE).build();
        assert_eq!(options.colour_of(ColourTag::Neutral), GREEN);
        assert_eq!(options.colour_of(ColourTag::PathMarker), WHITE);
        assert_eq!(options.colour_of(ColourTag::HighlightEnd), GREEN);
        assert_eq!(options.colour_of(ColourTag::HighlightStart), RED);
    }
}
