// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fs, io::Write, path::PathBuf};

use anyhow::{Context, Result};
use image::ImageFormat;
use tracing::debug;

use crate::core::config::IconConfig;
use crate::rendering::IconRenderer;

pub const COMPLETION_MESSAGE: &str = "All icons created!";

/// Render every configured size, save each as PNG (overwriting) and report
/// one `Created <file>` line per icon plus a completion line on `out`.
///
/// The first failure aborts the run; files already written are left in place.
pub fn generate_icons(renderer: &IconRenderer, config: &IconConfig, out: &mut impl Write) -> Result<Vec<PathBuf>> {
    if !config.output_dir.as_os_str().is_empty() {
        fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("create output dir {}", config.output_dir.display()))?;
    }
    let mut written = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let icon = renderer.render(size);
        let path = config.output_path(size);
        icon.save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("write {}", path.display()))?;
        debug!(size, path = %path.display(), "icon written");
        writeln!(out, "Created {}", config.file_name(size))?;
        written.push(path);
    }
    writeln!(out, "{COMPLETION_MESSAGE}")?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::LabelConfig;
    use crate::rendering::{fonts::FontSource, palette::Palette};

    fn offline() -> IconRenderer {
        IconRenderer::with_fonts(Palette::default(), LabelConfig::default(), FontSource::builtin())
    }

    #[test]
    fn writes_files_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = IconConfig { sizes: vec![16, 48], output_dir: dir.path().to_path_buf(), ..IconConfig::default() };
        let mut out = Vec::new();
        let written = generate_icons(&offline(), &cfg, &mut out).expect("generate");
        assert_eq!(written, vec![dir.path().join("icon16.png"), dir.path().join("icon48.png")]);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Created icon16.png\nCreated icon48.png\nAll icons created!\n");
    }

    #[test]
    fn unwritable_target_aborts() {
        let dir = tempfile::tempdir().unwrap();
        // a regular file where the output directory should be
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").unwrap();
        let cfg = IconConfig { output_dir: blocker, ..IconConfig::default() };
        let mut out = Vec::new();
        assert!(generate_icons(&offline(), &cfg, &mut out).is_err());
        assert!(out.is_empty());
    }
}
