// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Aliased raster primitives on an RGBA canvas.
//!
//! Coordinates are integer pixel positions; a pixel `(x, y)` is treated as the
//! point `(x, y)` for coverage tests. Writes outside the canvas are dropped.

use image::{Rgba, RgbaImage};

use super::geometry::Point;

#[inline]
pub fn put_clipped(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x < img.width() && y < img.height() {
        img.put_pixel(x, y, color);
    }
}

/// Source-over blend of `color` scaled by `coverage` (0..=1).
pub fn blend_clipped(img: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || coverage <= 0.0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= img.width() || y >= img.height() {
        return;
    }
    let a = coverage.min(1.0) * color[3] as f32 / 255.0;
    if a >= 1.0 {
        img.put_pixel(x, y, color);
        return;
    }
    let dst = *img.get_pixel(x, y);
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = a + dst_a * (1.0 - a);
    let mut out = [0u8; 4];
    if out_a > 0.0 {
        for c in 0..3 {
            let v = (color[c] as f32 * a + dst[c] as f32 * dst_a * (1.0 - a)) / out_a;
            out[c] = v.round().clamp(0.0, 255.0) as u8;
        }
    }
    out[3] = (out_a * 255.0).round().clamp(0.0, 255.0) as u8;
    img.put_pixel(x, y, Rgba(out));
}

/// Fill the whole canvas with a rounded rectangle spanning the inclusive box
/// `(0, 0)-(w, h)`. Corner pixels are kept iff they lie within `radius` of
/// their arc center.
pub fn fill_rounded_rect(img: &mut RgbaImage, radius: u32, color: Rgba<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    let r = (radius as i64).min(w / 2).min(h / 2);
    let r2 = r * r;
    for y in 0..h {
        for x in 0..w {
            let ccx = if x < r { Some(r) } else if x > w - r { Some(w - r) } else { None };
            let ccy = if y < r { Some(r) } else if y > h - r { Some(h - r) } else { None };
            let inside = match (ccx, ccy) {
                (Some(cx), Some(cy)) => {
                    let (dx, dy) = (x - cx, y - cy);
                    dx * dx + dy * dy <= r2
                }
                _ => true,
            };
            if inside {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// One-pixel line between two points (Bresenham), endpoints included.
pub fn draw_line(img: &mut RgbaImage, a: Point, b: Point, color: Rgba<u8>) {
    let (mut x0, mut y0) = a;
    let (x1, y1) = b;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_clipped(img, x0, y0, color);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Closed polygon outline. Widths above one grow inward only: interior pixels
/// within `width - 0.5` of an edge are painted on top of the 1px outline.
pub fn stroke_polygon(img: &mut RgbaImage, points: &[Point], width: u32, color: Rgba<u8>) {
    if points.is_empty() {
        return;
    }
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        draw_line(img, a, b, color);
    }
    if width <= 1 {
        return;
    }
    let reach = width as f32 - 0.5;
    let min_x = points.iter().map(|p| p.0).min().unwrap_or(0).max(0);
    let max_x = points.iter().map(|p| p.0).max().unwrap_or(0).min(img.width() as i32 - 1);
    let min_y = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
    let max_y = points.iter().map(|p| p.1).max().unwrap_or(0).min(img.height() as i32 - 1);
    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let (fx, fy) = (x as f32, y as f32);
            if contains_even_odd(points, fx, fy) && edge_distance(points, fx, fy) <= reach {
                put_clipped(img, x, y, color);
            }
        }
    }
}

fn contains_even_odd(points: &[Point], fx: f32, fy: f32) -> bool {
    let mut parity = false;
    for (i, &(ax, ay)) in points.iter().enumerate() {
        let (bx, by) = points[(i + 1) % points.len()];
        let (ax, ay, bx, by) = (ax as f32, ay as f32, bx as f32, by as f32);
        if (ay > fy) != (by > fy) && fx < (bx - ax) * (fy - ay) / (by - ay) + ax {
            parity = !parity;
        }
    }
    parity
}

fn edge_distance(points: &[Point], fx: f32, fy: f32) -> f32 {
    let mut min_d2 = f32::MAX;
    for (i, &(ax, ay)) in points.iter().enumerate() {
        let (bx, by) = points[(i + 1) % points.len()];
        let (ax, ay, bx, by) = (ax as f32, ay as f32, bx as f32, by as f32);
        let (vx, vy) = (bx - ax, by - ay);
        let (wx, wy) = (fx - ax, fy - ay);
        let ll = vx * vx + vy * vy;
        let t = if ll <= 1e-6 { 0.0 } else { ((vx * wx + vy * wy) / ll).clamp(0.0, 1.0) };
        let (dx, dy) = (fx - (ax + vx * t), fy - (ay + vy * t));
        min_d2 = min_d2.min(dx * dx + dy * dy);
    }
    min_d2.sqrt()
}
