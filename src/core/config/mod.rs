// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod config;

pub use config::{
    IconConfig, LabelConfig, DEFAULT_FILE_PREFIX, DEFAULT_FONT, DEFAULT_SIZES, DEFAULT_TEXT,
    LABEL_FONT_DIVISOR, LABEL_MIN_SIZE,
};
