// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Procedural icon drawing.

pub mod fonts;
pub mod geometry;
pub mod icon;
pub mod palette;
pub mod raster;
pub mod text;

pub use icon::IconRenderer;
