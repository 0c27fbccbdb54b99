// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Label font selection.
//!
//! A renderer resolves its preferred font file once ([`FontSource::discover`]).
//! Each render then asks [`load_font_or_default`] for a font at the size it
//! needs, which always yields something drawable: the scalable font when it
//! loaded and the size is usable, the built-in bitmap font otherwise.

pub mod builtin;

use std::{
    fs,
    path::{Path, PathBuf},
};

use ab_glyph::{Font, FontArc, PxScale};
use anyhow::{Context, Result};
use tracing::{debug, info};
use ttf_parser as ttf;
use walkdir::WalkDir;

/// Depth limit when scanning font directories (`/usr/share/fonts/truetype/<family>/x.ttf`).
const FONT_SCAN_DEPTH: usize = 4;

/// Font bytes resolved for a renderer.
#[derive(Clone, Default)]
pub struct FontSource {
    font: Option<FontArc>,
    family: Option<String>,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSource")
            .field("loaded", &self.font.is_some())
            .field("family", &self.family)
            .field("path", &self.path)
            .finish()
    }
}

impl FontSource {
    /// No scalable font; every label uses the built-in font.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Find and load `preferred`. Failure of any kind leaves the source empty.
    pub fn discover(preferred: &Path, search_system: bool) -> Self {
        let Some(path) = resolve_font_path(preferred, search_system) else {
            info!(font = %preferred.display(), "preferred font not found; using built-in font");
            return Self::builtin();
        };
        match load_font_file(&path) {
            Ok((font, family)) => {
                info!(path = %path.display(), family = family.as_deref().unwrap_or("?"), "loaded label font");
                Self { font: Some(font), family, path: Some(path) }
            }
            Err(e) => {
                info!("unusable font {}: {e:#}; using built-in font", path.display());
                Self::builtin()
            }
        }
    }

    pub fn is_scalable(&self) -> bool {
        self.font.is_some()
    }

    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// A font ready to lay out one label.
#[derive(Clone)]
pub enum LabelFont {
    Scalable { font: FontArc, scale: PxScale },
    Builtin,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelFont::Scalable { scale, .. } => write!(f, "Scalable({:.1}x{:.1})", scale.x, scale.y),
            LabelFont::Builtin => f.write_str("Builtin"),
        }
    }
}

impl LabelFont {
    pub fn is_builtin(&self) -> bool {
        matches!(self, LabelFont::Builtin)
    }
}

/// The scalable font at `px` pixels per em, or the built-in font when there is
/// no scalable font or `px` is zero.
pub fn load_font_or_default(source: &FontSource, px: u32) -> LabelFont {
    match source.font.as_ref().and_then(|font| scale_for_em(font, px).map(|scale| (font, scale))) {
        Some((font, scale)) => LabelFont::Scalable { font: font.clone(), scale },
        None => {
            debug!(px, "label uses built-in font");
            LabelFont::Builtin
        }
    }
}

/// `PxScale` in ab_glyph is the ascent-to-descent height; convert from an em size.
fn scale_for_em(font: &FontArc, px: u32) -> Option<PxScale> {
    if px == 0 {
        return None;
    }
    let upem = font.units_per_em()?;
    let height = px as f32 * font.height_unscaled() / upem;
    (height.is_finite() && height > 0.0).then(|| PxScale::from(height))
}

/// Loaded font plus its family name, read before the bytes move into the font.
fn load_font_file(path: &Path) -> Result<(FontArc, Option<String>)> {
    let bytes = fs::read(path).with_context(|| format!("read font {}", path.display()))?;
    let family = font_family_name(&bytes);
    let font = FontArc::try_from_vec(bytes).context("decode font")?;
    Ok((font, family))
}

/// Family name from the `name` table, for diagnostics.
pub fn font_family_name(bytes: &[u8]) -> Option<String> {
    let face = ttf::Face::parse(bytes, 0).ok()?;
    face.names()
        .into_iter()
        .filter(|n| n.name_id == ttf::name_id::FAMILY && n.is_unicode())
        .find_map(|n| n.to_string())
}

/// `preferred` itself when it exists. A bare file name is otherwise looked up
/// (case-insensitively) in the platform font directories when `search_system`.
pub fn resolve_font_path(preferred: &Path, search_system: bool) -> Option<PathBuf> {
    if preferred.as_os_str().is_empty() {
        return None;
    }
    if preferred.is_file() {
        return Some(preferred.to_path_buf());
    }
    let is_bare_name = preferred.components().count() == 1;
    if !search_system || !is_bare_name {
        return None;
    }
    let wanted = preferred.file_name()?.to_string_lossy().to_lowercase();
    system_font_dirs().into_iter().find_map(|dir| find_in_dir(&dir, &wanted))
}

fn find_in_dir(dir: &Path, wanted_lower: &str) -> Option<PathBuf> {
    WalkDir::new(dir)
        .max_depth(FONT_SCAN_DEPTH)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .find(|e| e.file_name().to_string_lossy().to_lowercase() == wanted_lower)
        .map(|e| e.into_path())
}

/// Conventional font directories for the current platform, existing ones only.
pub fn system_font_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    let home = std::env::var_os("HOME").map(PathBuf::from);
    if cfg!(target_os = "windows") {
        let windir = std::env::var_os("WINDIR").map(PathBuf::from).unwrap_or_else(|| PathBuf::from(r"C:\Windows"));
        dirs.push(windir.join("Fonts"));
        if let Some(local) = std::env::var_os("LOCALAPPDATA") {
            dirs.push(PathBuf::from(local).join(r"Microsoft\Windows\Fonts"));
        }
    } else if cfg!(target_os = "macos") {
        dirs.push("/Library/Fonts".into());
        dirs.push("/System/Library/Fonts".into());
        if let Some(h) = &home {
            dirs.push(h.join("Library/Fonts"));
        }
    } else {
        if let Some(data_home) = std::env::var_os("XDG_DATA_HOME") {
            dirs.push(PathBuf::from(data_home).join("fonts"));
        } else if let Some(h) = &home {
            dirs.push(h.join(".local/share/fonts"));
        }
        if let Some(h) = &home {
            dirs.push(h.join(".fonts"));
        }
        dirs.push("/usr/local/share/fonts".into());
        dirs.push("/usr/share/fonts".into());
    }
    dirs.retain(|d| d.is_dir());
    dirs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_font_falls_back_to_builtin() {
        let src = FontSource::discover(Path::new("definitely-not-a-font-xyz.ttf"), false);
        assert!(!src.is_scalable());
        assert!(load_font_or_default(&src, 16).is_builtin());
    }

    #[test]
    fn garbage_font_file_falls_back_to_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not a font at all").unwrap();
        let src = FontSource::discover(file.path(), false);
        assert!(!src.is_scalable());
        assert!(src.path().is_none());
    }

    #[test]
    fn existing_path_resolves_without_search() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert_eq!(resolve_font_path(file.path(), false), Some(file.path().to_path_buf()));
        assert_eq!(resolve_font_path(Path::new(""), true), None);
    }

    #[test]
    fn nested_missing_path_is_not_searched() {
        assert_eq!(resolve_font_path(Path::new("no/such/dir/arial.ttf"), true), None);
    }

    #[test]
    fn directory_scan_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("truetype").join("msttcore");
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join("Arial.TTF"), b"x").unwrap();
        assert_eq!(find_in_dir(dir.path(), "arial.ttf"), Some(nested.join("Arial.TTF")));
        assert_eq!(find_in_dir(dir.path(), "verdana.ttf"), None);
    }

    fn fixture_font() -> FontSource {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/DejaVuSans.ttf");
        FontSource::discover(&path, false)
    }

    #[test]
    fn fixture_font_loads_with_family_name() {
        let src = fixture_font();
        assert!(src.is_scalable());
        assert_eq!(src.family(), Some("DejaVu Sans"));
        assert!(src.path().is_some_and(|p| p.ends_with("DejaVuSans.ttf")));
    }

    #[test]
    fn em_size_converts_to_height_scale() {
        let src = fixture_font();
        let font = src.font.as_ref().expect("fixture font");
        let upem = font.units_per_em().expect("units per em");
        for px in [6, 16] {
            let LabelFont::Scalable { scale, .. } = load_font_or_default(&src, px) else {
                panic!("expected scalable font at {px}px");
            };
            let expected = px as f32 / upem * font.height_unscaled();
            assert!((scale.x - expected).abs() < 1e-4, "{} vs {expected}", scale.x);
            assert_eq!(scale.x, scale.y);
            // ascent-to-descent height is larger than the em size for this face
            assert!(scale.y > px as f32);
        }
    }

    #[test]
    fn zero_px_uses_builtin_even_with_scalable_font() {
        assert!(load_font_or_default(&fixture_font(), 0).is_builtin());
    }

    #[test]
    fn family_name_of_garbage_is_none() {
        assert_eq!(font_family_name(b"\0\0\0\0"), None);
    }
}
