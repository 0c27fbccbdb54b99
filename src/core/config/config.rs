// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::rendering::palette::Palette;

pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];
pub const DEFAULT_TEXT: &str = "NPM";
pub const DEFAULT_FONT: &str = "arial.ttf";
pub const DEFAULT_FILE_PREFIX: &str = "icon";
/// Smallest icon that carries a label.
pub const LABEL_MIN_SIZE: u32 = 48;
/// Label em size is `size / LABEL_FONT_DIVISOR`.
pub const LABEL_FONT_DIVISOR: u32 = 8;
const MAX_REASONABLE_SIZE: u32 = 4096;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LabelConfig {
    pub text: String,
    pub min_size: u32,
    pub font_divisor: u32,
    /// Path or bare file name of the preferred scalable font.
    pub font: String,
    /// Look bare font names up in the platform font directories.
    pub search_system_fonts: bool,
}
impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.into(),
            min_size: LABEL_MIN_SIZE,
            font_divisor: LABEL_FONT_DIVISOR,
            font: DEFAULT_FONT.into(),
            search_system_fonts: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct IconConfig {
    pub sizes: Vec<u32>,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub palette: Palette,
    pub label: LabelConfig,
}
impl Default for IconConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            output_dir: PathBuf::from("."),
            file_prefix: DEFAULT_FILE_PREFIX.into(),
            palette: Default::default(),
            label: Default::default(),
        }
    }
}

impl IconConfig {
    /// `icon<size>.png` with the configured prefix.
    pub fn file_name(&self, size: u32) -> String {
        format!("{}{size}.png", self.file_prefix)
    }

    pub fn output_path(&self, size: u32) -> PathBuf {
        self.output_dir.join(self.file_name(size))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Deep-merge RON layers in order (later keys win) and deserialize the
    /// result. Returns the config, the layers that were applied, and one
    /// message per layer that could not be read or parsed.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut ron::value::Value, overlay: ron::value::Value) {
            use ron::value::Value;
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let existing = bm.iter_mut().find(|(ek, _)| **ek == k).map(|(_, ev)| ev);
                        match existing {
                            Some(ev) => merge_value(ev, v),
                            None => {
                                bm.insert(k, v);
                            }
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        match merged.map(|val| val.into_rust::<IconConfig>()) {
            Some(Ok(cfg)) => (cfg, used, errors),
            Some(Err(e)) => {
                errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                (IconConfig::default(), used, errors)
            }
            None => (IconConfig::default(), used, errors),
        }
    }

    /// Human-readable warnings; an empty list means the config looks sane.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.sizes.is_empty() {
            w.push("sizes is empty; nothing will be generated".into());
        }
        if self.sizes.contains(&0) {
            w.push("sizes contains 0; icons must be at least 1px".into());
        }
        let mut seen = HashSet::new();
        for s in &self.sizes {
            if !seen.insert(*s) {
                w.push(format!("size {s} listed more than once; file is overwritten"));
            }
        }
        if let Some(big) = self.sizes.iter().find(|s| **s > MAX_REASONABLE_SIZE) {
            w.push(format!("very large icon size {big} (> {MAX_REASONABLE_SIZE})"));
        }
        if self.file_prefix.is_empty() {
            w.push("file_prefix is empty; files are named after the size only".into());
        }
        if self.file_prefix.contains(['/', '\\']) {
            w.push(format!("file_prefix '{}' contains a path separator", self.file_prefix));
        }
        if self.label.text.trim().is_empty() {
            w.push("label.text is blank; no label is drawn".into());
        }
        if self.label.font_divisor == 0 {
            w.push("label.font_divisor is 0; the built-in font is used for every label".into());
        }
        if !self.sizes.is_empty() && self.sizes.iter().all(|s| *s < self.label.min_size) {
            w.push(format!(
                "label.min_size {} exceeds every size; no label is drawn",
                self.label.min_size
            ));
        }
        w
    }
}
