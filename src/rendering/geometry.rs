// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integer layout of the cube glyph for a given icon size.
//!
//! Every quantity is derived from `size` by integer division so tiny sizes
//! collapse to zero-length shapes instead of failing.

pub type Point = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    pub size: u32,
    pub corner_radius: u32,
    pub center: Point,
    pub box_size: i32,
    pub line_width: u32,
}

impl IconGeometry {
    pub fn for_size(size: u32) -> Self {
        let half = (size / 2) as i32;
        Self {
            size,
            corner_radius: size / 6,
            center: (half, half),
            box_size: (size / 3) as i32,
            line_width: (size / 16).max(1),
        }
    }

    /// Front face: a box from the top-face edge down to the bottom of the cube.
    pub fn front_face(&self) -> [Point; 4] {
        let (cx, cy) = self.center;
        let b = self.box_size;
        [
            (cx - b / 2, cy - b / 4),
            (cx - b / 2, cy + b / 2),
            (cx + b / 2, cy + b / 2),
            (cx + b / 2, cy - b / 4),
        ]
    }

    /// Top face. The third point reaches a full `box_size` to the right,
    /// which makes the lid lopsided; kept as the icon has always shipped.
    pub fn top_face(&self) -> [Point; 4] {
        let (cx, cy) = self.center;
        let b = self.box_size;
        [
            (cx - b / 2, cy - b / 4),
            (cx, cy - b / 2),
            (cx + b, cy - b / 4),
            (cx + b / 2, cy - b / 4),
        ]
    }

    /// Pixel size requested from a scalable label font.
    #[inline]
    pub fn label_px(&self, divisor: u32) -> u32 {
        self.size.checked_div(divisor).unwrap_or(0)
    }
}
