// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod generate;

pub use generate::{generate_icons, COMPLETION_MESSAGE};
