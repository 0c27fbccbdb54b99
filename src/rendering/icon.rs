// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! The package-cube icon.

use std::path::Path;

use image::{Rgba, RgbaImage};

use super::fonts::{load_font_or_default, FontSource};
use super::geometry::IconGeometry;
use super::palette::Palette;
use super::raster::{fill_rounded_rect, stroke_polygon};
use super::text;
use crate::core::config::LabelConfig;

/// Draws icons of any size with a fixed palette, label and font.
#[derive(Debug, Clone)]
pub struct IconRenderer {
    palette: Palette,
    label: LabelConfig,
    fonts: FontSource,
}

impl Default for IconRenderer {
    /// Default palette and label, preferred font looked up on this machine.
    fn default() -> Self {
        let label = LabelConfig::default();
        let fonts = FontSource::discover(Path::new(&label.font), label.search_system_fonts);
        Self::with_fonts(Palette::default(), label, fonts)
    }
}

impl IconRenderer {
    /// Resolves `label.font` once; later renders reuse the loaded bytes.
    pub fn new(palette: Palette, label: LabelConfig) -> Self {
        let fonts = FontSource::discover(Path::new(&label.font), label.search_system_fonts);
        Self::with_fonts(palette, label, fonts)
    }

    pub fn with_fonts(palette: Palette, label: LabelConfig, fonts: FontSource) -> Self {
        Self { palette, label, fonts }
    }

    pub fn fonts(&self) -> &FontSource {
        &self.fonts
    }

    /// Whether a label is drawn at `size`.
    pub fn draws_label(&self, size: u32) -> bool {
        size >= self.label.min_size && !self.label.text.is_empty()
    }

    /// Render one `size` x `size` icon. Never fails; sizes too small for the
    /// cube collapse to dots.
    pub fn render(&self, size: u32) -> RgbaImage {
        let geo = IconGeometry::for_size(size);
        let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
        fill_rounded_rect(&mut img, geo.corner_radius, self.palette.background());

        let stroke = self.palette.stroke();
        stroke_polygon(&mut img, &geo.front_face(), geo.line_width, stroke);
        stroke_polygon(&mut img, &geo.top_face(), geo.line_width, stroke);

        if self.draws_label(size) {
            self.draw_label(&mut img, &geo, stroke);
        }
        img
    }

    fn draw_label(&self, img: &mut RgbaImage, geo: &IconGeometry, color: Rgba<u8>) {
        let font = load_font_or_default(&self.fonts, geo.label_px(self.label.font_divisor));
        let bounds = text::measure(&font, &self.label.text);
        let size = geo.size as i32;
        // Horizontally centered on the canvas, vertically on the cube center.
        let x = (size - bounds.width()).div_euclid(2);
        let y = geo.center.1 - bounds.height().div_euclid(2);
        text::draw(img, &font, &self.label.text, (x, y), color);
    }
}
