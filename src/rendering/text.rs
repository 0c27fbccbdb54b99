// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-line label layout, measurement and drawing.
//!
//! Layout origin is the left edge of the first glyph at the top of the
//! ascender line; bounds are the ink extents in that space.

use ab_glyph::{point, Font, FontArc, Glyph, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use super::fonts::{builtin, LabelFont};
use super::raster::{blend_clipped, put_clipped};

/// Ink bounds relative to the layout origin, max exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextBounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }
    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
    fn union(self, other: TextBounds, first: bool) -> TextBounds {
        if first {
            return other;
        }
        TextBounds {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

fn layout_glyphs(font: &FontArc, scale: PxScale, text: &str) -> Vec<Glyph> {
    let scaled = font.as_scaled(scale);
    let mut caret = 0.0f32;
    let mut prev = None;
    let mut glyphs = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(p) = prev {
            caret += scaled.kern(p, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret, scaled.ascent())));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }
    glyphs
}

/// Ink bounds of `text`. Empty or blank text measures as all zeros.
pub fn measure(font: &LabelFont, text: &str) -> TextBounds {
    let mut bounds = TextBounds::default();
    let mut first = true;
    match font {
        LabelFont::Scalable { font, scale } => {
            for glyph in layout_glyphs(font, *scale, text) {
                if let Some(outlined) = font.outline_glyph(glyph) {
                    let r = outlined.px_bounds();
                    let b = TextBounds {
                        x0: r.min.x.floor() as i32,
                        y0: r.min.y.floor() as i32,
                        x1: r.max.x.ceil() as i32,
                        y1: r.max.y.ceil() as i32,
                    };
                    bounds = bounds.union(b, first);
                    first = false;
                }
            }
        }
        LabelFont::Builtin => {
            for (i, ch) in text.chars().enumerate() {
                let ox = (i as u32 * builtin::ADVANCE) as i32;
                builtin::for_each_pixel(ch, |dx, dy| {
                    let (x, y) = (ox + dx as i32, dy as i32);
                    let b = TextBounds { x0: x, y0: y, x1: x + 1, y1: y + 1 };
                    bounds = bounds.union(b, first);
                    first = false;
                });
            }
        }
    }
    bounds
}

/// Draw `text` with its layout origin at `origin`.
pub fn draw(img: &mut RgbaImage, font: &LabelFont, text: &str, origin: (i32, i32), color: Rgba<u8>) {
    let (ox, oy) = origin;
    match font {
        LabelFont::Scalable { font, scale } => {
            for glyph in layout_glyphs(font, *scale, text) {
                let Some(outlined) = font.outline_glyph(glyph) else { continue };
                let r = outlined.px_bounds();
                let (gx, gy) = (ox + r.min.x as i32, oy + r.min.y as i32);
                outlined.draw(|x, y, coverage| {
                    blend_clipped(img, gx + x as i32, gy + y as i32, color, coverage);
                });
            }
        }
        LabelFont::Builtin => {
            for (i, ch) in text.chars().enumerate() {
                let gx = ox + (i as u32 * builtin::ADVANCE) as i32;
                builtin::for_each_pixel(ch, |dx, dy| put_clipped(img, gx + dx as i32, oy + dy as i32, color));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::rendering::fonts::{load_font_or_default, FontSource};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const BLUE: Rgba<u8> = Rgba([102, 126, 234, 255]);

    fn dejavu(px: u32) -> LabelFont {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf");
        let font = load_font_or_default(&FontSource::discover(&path, false), px);
        assert!(!font.is_builtin(), "fixture font did not load");
        font
    }

    #[test]
    fn builtin_bounds_of_npm() {
        let b = measure(&LabelFont::Builtin, "NPM");
        assert_eq!(b, TextBounds { x0: 0, y0: 0, x1: 17, y1: 7 });
        assert_eq!(b.width(), 17);
        assert_eq!(b.height(), 7);
    }

    #[test]
    fn blank_text_has_no_ink() {
        assert_eq!(measure(&LabelFont::Builtin, ""), TextBounds::default());
        assert_eq!(measure(&LabelFont::Builtin, "   "), TextBounds::default());
    }

    #[test]
    fn builtin_draw_matches_measure() {
        let mut img = RgbaImage::new(30, 12);
        draw(&mut img, &LabelFont::Builtin, "NPM", (2, 3), WHITE);
        let lit: Vec<(u32, u32)> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == WHITE)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!lit.is_empty());
        assert_eq!(lit.iter().map(|p| p.0).min(), Some(2));
        assert_eq!(lit.iter().map(|p| p.0).max(), Some(18));
        assert_eq!(lit.iter().map(|p| p.1).min(), Some(3));
        assert_eq!(lit.iter().map(|p| p.1).max(), Some(9));
    }

    #[test]
    fn drawing_off_canvas_is_clipped() {
        let mut img = RgbaImage::new(4, 4);
        draw(&mut img, &LabelFont::Builtin, "NPM", (-20, -20), WHITE);
        assert!(img.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn scalable_bounds_start_below_ascender() {
        let b = measure(&dejavu(16), "NPM");
        // capitals sit below the ascender line and right of the origin
        assert!(b.y0 > 0, "{b:?}");
        assert!(b.x0 >= 0, "{b:?}");
        assert!(b.width() > 16 && b.width() < 48, "{b:?}");
        assert!(b.height() > 8 && b.height() <= 16, "{b:?}");
    }

    #[test]
    fn scalable_layout_advances_left_to_right() {
        let LabelFont::Scalable { font, scale } = dejavu(16) else { unreachable!() };
        let glyphs = layout_glyphs(&font, scale, "NPM");
        assert_eq!(glyphs.len(), 3);
        assert!(glyphs.windows(2).all(|w| w[1].position.x > w[0].position.x));
        assert!(glyphs.iter().all(|g| g.position.y == glyphs[0].position.y));
        assert_eq!(glyphs[0].position.x, 0.0);
    }

    #[test]
    fn longer_text_measures_wider() {
        let font = dejavu(16);
        assert!(measure(&font, "NPMNPM").width() > measure(&font, "NPM").width());
        assert_eq!(measure(&font, ""), TextBounds::default());
    }

    #[test]
    fn scalable_draw_blends_inside_measured_bounds() {
        let font = dejavu(16);
        let b = measure(&font, "NPM");
        let origin = (5, 4);
        let mut img = RgbaImage::from_pixel(64, 32, BLUE);
        draw(&mut img, &font, "NPM", origin, WHITE);
        let changed: Vec<(u32, u32)> = img
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != BLUE)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!changed.is_empty());
        let xs = (origin.0 + b.x0)..(origin.0 + b.x1);
        let ys = (origin.1 + b.y0)..(origin.1 + b.y1);
        assert!(changed.iter().all(|&(x, y)| xs.contains(&(x as i32)) && ys.contains(&(y as i32))));
        // edges are partially covered, stems fully
        assert!(changed.iter().any(|&(x, y)| *img.get_pixel(x, y) == WHITE));
        assert!(changed.iter().any(|&(x, y)| {
            let p = img.get_pixel(x, y);
            *p != WHITE && p[0] > BLUE[0] && p[3] == 255
        }));
    }
}
