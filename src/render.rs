//! Proportional-area comparison of the two commute costs.
//!
//! Each cost is drawn as a disk whose radius is the square root of the cost,
//! so that the disk areas compare like the costs do.

mod canvas;
mod font;

use std::path::Path;

use bon::Builder;
use image::{ImageFormat, Rgba, RgbaImage};

use self::canvas::Canvas;
use crate::{
    core::cost::{electricity_cost, fuel_cost},
    prelude::*,
    quantity::{
        currency::Kronor,
        distance::Kilometers,
        efficiency::{KilometersPerKilowattHour, KilometersPerLiter},
        price::{KilowattHourPrice, LiterPrice},
    },
};

pub const FUEL_LABEL: &str = "gasoline cost";
pub const ELECTRICITY_LABEL: &str = "electricity cost";

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

const FILL_ALPHA: u8 = 204;
const FUEL_COLOR: Rgba<u8> = Rgba([255, 0, 0, FILL_ALPHA]);
const ELECTRICITY_COLOR: Rgba<u8> = Rgba([0, 128, 0, FILL_ALPHA]);

/// Cosmetic: places the electricity disk inside the fuel disk, off its centre.
const ELECTRICITY_CENTER_RATIO: f64 = 0.7;

const X_EXTENT_RATIO: f64 = 2.02;
const Y_EXTENT_RATIO: f64 = 2.05;

#[must_use]
#[derive(Copy, Clone, Builder)]
pub struct Comparison {
    distance: Kilometers,
    fuel_price: LiterPrice,
    electricity_price: KilowattHourPrice,

    #[builder(default = KilometersPerLiter::DEFAULT)]
    fuel_efficiency: KilometersPerLiter,

    #[builder(default = KilometersPerKilowattHour::DEFAULT)]
    electric_efficiency: KilometersPerKilowattHour,
}

/// Disk in data coordinates.
#[derive(Copy, Clone, Debug)]
pub struct Disk {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub color: Rgba<u8>,
    pub label: &'static str,
}

#[derive(Copy, Clone, Debug)]
pub struct Layout {
    pub fuel: Disk,
    pub electricity: Disk,

    /// Visible data extent along the horizontal axis, starting from zero.
    pub x_max: f64,

    /// Visible data extent along the vertical axis, starting from zero.
    pub y_max: f64,
}

impl Comparison {
    pub fn fuel_cost(&self) -> Kronor {
        fuel_cost(self.distance, self.fuel_price, self.fuel_efficiency)
    }

    pub fn electricity_cost(&self) -> Kronor {
        electricity_cost(self.distance, self.electricity_price, self.electric_efficiency)
    }

    pub fn layout(&self) -> Layout {
        let fuel_radius = self.fuel_cost().area_radius();
        let electricity_center = ELECTRICITY_CENTER_RATIO * fuel_radius;
        Layout {
            fuel: Disk {
                center_x: fuel_radius,
                center_y: fuel_radius,
                radius: fuel_radius,
                color: FUEL_COLOR,
                label: FUEL_LABEL,
            },
            electricity: Disk {
                center_x: electricity_center,
                center_y: electricity_center,
                radius: self.electricity_cost().area_radius(),
                color: ELECTRICITY_COLOR,
                label: ELECTRICITY_LABEL,
            },
            x_max: X_EXTENT_RATIO * fuel_radius,
            y_max: Y_EXTENT_RATIO * fuel_radius,
        }
    }

    pub fn render(&self) -> Result<RgbaImage> {
        let layout = self.layout();
        let mut canvas = Canvas::new(WIDTH, HEIGHT, layout.x_max, layout.y_max)
            .context("the fuel cost must be positive to be plotted")?;
        let disks = [layout.fuel, layout.electricity];
        for disk in &disks {
            canvas.fill_disk(disk.center_x, disk.center_y, disk.radius, disk.color);
        }
        draw_legend(&mut canvas, &disks);
        Ok(canvas.into_image())
    }

    /// Render and write the PNG, overwriting the file.
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn save(&self, path: &Path) -> Result {
        self.render()?
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("failed to save the plot to `{}`", path.display()))?;
        info!("saved");
        Ok(())
    }
}

/// Framed legend in the upper-right corner of the plot area.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_legend(canvas: &mut Canvas, disks: &[Disk]) {
    const SCALE: u32 = 2;
    const MARGIN: u32 = 10;
    const PADDING: u32 = 8;
    const SPACING: u32 = 6;
    const SWATCH_WIDTH: u32 = 28;
    const FRAME_FILL: Rgba<u8> = Rgba([255, 255, 255, 204]);
    const FRAME_EDGE: Rgba<u8> = Rgba([204, 204, 204, 255]);
    const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

    let Ok(n_entries) = u32::try_from(disks.len()) else {
        return;
    };
    if n_entries == 0 {
        return;
    }
    let line_height = font::HEIGHT * SCALE;
    let text_width =
        disks.iter().map(|disk| font::text_width(disk.label, SCALE)).max().unwrap_or_default();
    let width = PADDING + SWATCH_WIDTH + PADDING + text_width + PADDING;
    let height = 2 * PADDING + n_entries * line_height + (n_entries - 1) * SPACING;

    let area = canvas.area();
    let left = (area.right as u32).saturating_sub(width + MARGIN);
    let top = area.top as u32 + MARGIN;
    canvas.fill_rect(left, top, width, height, FRAME_FILL);
    canvas.stroke_rect(left, top, width, height, FRAME_EDGE);

    for (index, disk) in (0..).zip(disks) {
        let line_top = top + PADDING + index * (line_height + SPACING);
        canvas.fill_rect(left + PADDING, line_top, SWATCH_WIDTH, line_height, disk.color);
        canvas.draw_text(
            left + PADDING + SWATCH_WIDTH + PADDING,
            line_top,
            disk.label,
            SCALE,
            TEXT_COLOR,
        );
    }
}
