// This file is part of npm_icon_gen.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use npm_icon_gen::{generate_icons, IconConfig, IconRenderer};

#[derive(Parser, Debug)]
#[command(about = "Generate the package cube icon set (icon16.png .. icon128.png)", version)]
struct Args {
    /// RON config layer; repeat to merge several, later files win.
    #[arg(long)]
    config: Vec<PathBuf>,
    /// Directory the icons are written to (created if missing).
    #[arg(long)]
    out_dir: Option<PathBuf>,
    /// Preferred label font: a path, or a bare file name looked up in the system font directories.
    #[arg(long)]
    font: Option<String>,
    /// Comma separated icon sizes, e.g. `16,32,48,128`.
    #[arg(long, value_delimiter = ',')]
    sizes: Vec<u32>,
    /// Only use `--font` as a literal path.
    #[arg(long)]
    no_system_fonts: bool,
}

impl Args {
    fn into_config(self) -> IconConfig {
        let mut cfg = if self.config.is_empty() {
            IconConfig::default()
        } else {
            let (cfg, _used, errors) = IconConfig::load_layered(&self.config);
            for e in errors {
                warn!("config: {e}");
            }
            cfg
        };
        if let Some(dir) = self.out_dir {
            cfg.output_dir = dir;
        }
        if let Some(font) = self.font {
            cfg.label.font = font;
        }
        if !self.sizes.is_empty() {
            cfg.sizes = self.sizes;
        }
        if self.no_system_fonts {
            cfg.label.search_system_fonts = false;
        }
        cfg
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cfg = Args::parse().into_config();
    for w in cfg.validate() {
        warn!("config: {w}");
    }

    let renderer = IconRenderer::new(cfg.palette, cfg.label.clone());
    generate_icons(&renderer, &cfg, &mut io::stdout().lock())?;
    Ok(())
}
