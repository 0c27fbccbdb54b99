// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod core;
pub mod rendering;

// Curated re-exports
pub use app::generate::{generate_icons, COMPLETION_MESSAGE};
pub use crate::core::config::{IconConfig, LabelConfig};
pub use rendering::IconRenderer;
