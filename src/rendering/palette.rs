// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Icon color palette.
//! Single source of truth for the background, accent and stroke colors.

use image::Rgba;
use serde::Deserialize;

/// Background fill (#667eea).
pub const PRIMARY: [u8; 3] = [102, 126, 234];
/// Second gradient stop (#764ba2). Not used by the current drawing.
pub const SECONDARY: [u8; 3] = [118, 75, 162];
/// Cube outline and label color.
pub const FOREGROUND: [u8; 4] = [255, 255, 255, 255];

/// Colors used by one renderer. Defaults to the constants above.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Palette {
    pub primary: [u8; 3],
    pub secondary: [u8; 3],
    pub foreground: [u8; 4],
}
impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: PRIMARY,
            secondary: SECONDARY,
            foreground: FOREGROUND,
        }
    }
}

impl Palette {
    /// Background as an opaque pixel.
    #[inline]
    pub fn background(&self) -> Rgba<u8> {
        let [r, g, b] = self.primary;
        Rgba([r, g, b, 255])
    }

    #[inline]
    pub fn stroke(&self) -> Rgba<u8> {
        Rgba(self.foreground)
    }
}
