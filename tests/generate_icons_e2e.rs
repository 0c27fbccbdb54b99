// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::fs;

use image::ColorType;
use npm_icon_gen::rendering::fonts::FontSource;
use npm_icon_gen::rendering::palette::Palette;
use npm_icon_gen::{generate_icons, IconConfig, IconRenderer, LabelConfig, COMPLETION_MESSAGE};

#[test]
fn default_run_writes_four_icons_and_five_lines() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let cfg = IconConfig { output_dir: dir.path().to_path_buf(), ..IconConfig::default() };
    let renderer = IconRenderer::with_fonts(Palette::default(), LabelConfig::default(), FontSource::builtin());

    let mut console = Vec::new();
    generate_icons(&renderer, &cfg, &mut console).expect("generate icons");

    let mut names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["icon128.png", "icon16.png", "icon32.png", "icon48.png"]);

    for size in [16u32, 32, 48, 128] {
        let img = image::open(dir.path().join(format!("icon{size}.png"))).expect("decode png");
        assert_eq!(img.color(), ColorType::Rgba8);
        assert_eq!((img.width(), img.height()), (size, size));
        assert_eq!(img.to_rgba8(), renderer.render(size), "round trip of icon{size}.png");
    }

    let text = String::from_utf8(console).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec!["Created icon16.png", "Created icon32.png", "Created icon48.png", "Created icon128.png", COMPLETION_MESSAGE]
    );
}

#[test]
fn rerun_overwrites_existing_files() {
    let dir = tempfile::tempdir().unwrap();
    let stale = dir.path().join("icon16.png");
    fs::write(&stale, b"stale bytes").unwrap();
    let cfg = IconConfig { sizes: vec![16], output_dir: dir.path().to_path_buf(), ..IconConfig::default() };
    let renderer = IconRenderer::with_fonts(Palette::default(), LabelConfig::default(), FontSource::builtin());
    generate_icons(&renderer, &cfg, &mut Vec::new()).unwrap();
    let img = image::open(&stale).expect("overwritten with a png");
    assert_eq!(img.width(), 16);
}

#[test]
fn missing_output_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("build").join("icons");
    let cfg = IconConfig { sizes: vec![32], output_dir: nested.clone(), ..IconConfig::default() };
    let renderer = IconRenderer::with_fonts(Palette::default(), LabelConfig::default(), FontSource::builtin());
    let written = generate_icons(&renderer, &cfg, &mut Vec::new()).unwrap();
    assert_eq!(written, vec![nested.join("icon32.png")]);
    assert!(nested.join("icon32.png").is_file());
}
