use std::ops::Range;

use image::{Pixel, Rgba, RgbaImage};

use crate::{prelude::*, render::font};

/// Pixel rectangle the data coordinates are mapped onto.
#[derive(Copy, Clone, Debug)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Transparent raster with a data coordinate system spanning `[0, x_max] × [0, y_max]`.
///
/// Both axes are scaled independently to fill the plot area.
pub struct Canvas {
    image: RgbaImage,
    area: PlotArea,
    x_max: f64,
    y_max: f64,
}

impl Canvas {
    pub fn new(width: u32, height: u32, x_max: f64, y_max: f64) -> Result<Self> {
        ensure!(
            x_max.is_finite() && x_max > 0.0 && y_max.is_finite() && y_max > 0.0,
            "cannot plot the extent of {x_max} × {y_max}",
        );
        let (width_f64, height_f64) = (f64::from(width), f64::from(height));
        let area = PlotArea {
            left: 0.125 * width_f64,
            top: 0.12 * height_f64,
            right: 0.9 * width_f64,
            bottom: 0.89 * height_f64,
        };
        Ok(Self { image: RgbaImage::new(width, height), area, x_max, y_max })
    }

    pub const fn area(&self) -> PlotArea {
        self.area
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn x_to_pixel(&self, x: f64) -> f64 {
        self.area.left + x / self.x_max * (self.area.right - self.area.left)
    }

    pub fn y_to_pixel(&self, y: f64) -> f64 {
        self.area.bottom - y / self.y_max * (self.area.bottom - self.area.top)
    }

    fn pixel_to_x(&self, pixel: f64) -> f64 {
        (pixel - self.area.left) / (self.area.right - self.area.left) * self.x_max
    }

    fn pixel_to_y(&self, pixel: f64) -> f64 {
        (self.area.bottom - pixel) / (self.area.bottom - self.area.top) * self.y_max
    }

    /// Blend a disk given in data coordinates, clipped to the plot area.
    pub fn fill_disk(&mut self, center_x: f64, center_y: f64, radius: f64, color: Rgba<u8>) {
        let columns = pixel_span(
            self.x_to_pixel(center_x - radius),
            self.x_to_pixel(center_x + radius),
            self.area.left,
            self.area.right,
        );
        let rows = pixel_span(
            self.y_to_pixel(center_y + radius),
            self.y_to_pixel(center_y - radius),
            self.area.top,
            self.area.bottom,
        );
        for row in rows {
            let dy = self.pixel_to_y(f64::from(row) + 0.5) - center_y;
            for column in columns.clone() {
                let dx = self.pixel_to_x(f64::from(column) + 0.5) - center_x;
                if dx * dx + dy * dy <= radius * radius {
                    self.image.get_pixel_mut(column, row).blend(&color);
                }
            }
        }
    }

    /// Blend a rectangle given in pixels, clipped to the image.
    pub fn fill_rect(&mut self, left: u32, top: u32, width: u32, height: u32, color: Rgba<u8>) {
        let right = left.saturating_add(width).min(self.image.width());
        let bottom = top.saturating_add(height).min(self.image.height());
        for row in top..bottom {
            for column in left..right {
                self.image.get_pixel_mut(column, row).blend(&color);
            }
        }
    }

    /// One-pixel outline just inside the rectangle.
    pub fn stroke_rect(&mut self, left: u32, top: u32, width: u32, height: u32, color: Rgba<u8>) {
        if width == 0 || height == 0 {
            return;
        }
        self.fill_rect(left, top, width, 1, color);
        self.fill_rect(left, top + height - 1, width, 1, color);
        self.fill_rect(left, top + 1, 1, height.saturating_sub(2), color);
        self.fill_rect(left + width - 1, top + 1, 1, height.saturating_sub(2), color);
    }

    /// Draw the text with its top-left corner at the given pixel.
    ///
    /// Characters without a glyph are left blank.
    pub fn draw_text(&mut self, left: u32, top: u32, text: &str, scale: u32, color: Rgba<u8>) {
        let mut origin = left;
        for character in text.chars() {
            if let Some(rows) = font::glyph(character) {
                for (row, bits) in (0..).zip(rows) {
                    for column in 0..font::WIDTH {
                        if bits >> (font::WIDTH - 1 - column) & 1 == 1 {
                            self.fill_rect(
                                origin + column * scale,
                                top + row * scale,
                                scale,
                                scale,
                                color,
                            );
                        }
                    }
                }
            }
            origin = origin.saturating_add(font::ADVANCE * scale);
        }
    }
}

/// Whole pixels whose centres may fall into `from..to`, clipped to `min..max`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_span(from: f64, to: f64, min: f64, max: f64) -> Range<u32> {
    let start = from.max(min).floor();
    let end = to.min(max).ceil();
    if start < end { (start as u32)..(end as u32) } else { 0..0 }
}
