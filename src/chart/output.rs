//! Chart output sink: where rendered charts are written

use plotters::prelude::*;
use std::path::PathBuf;
use tracing::info;

use super::draw::draw_layout;
use super::layout::ChartLayout;
use crate::common::errors::Result;
use crate::config::types::{ImageFormat, OutputConfig};

/// Writes chart layouts as image files into a directory
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOutput {
    directory: PathBuf,
    format: ImageFormat,
    size: (u32, u32),
}

impl ChartOutput {
    pub fn new(directory: impl Into<PathBuf>, format: ImageFormat, size: (u32, u32)) -> Self {
        Self {
            directory: directory.into(),
            format,
            size,
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(&config.directory, config.format, (config.width, config.height))
    }

    /// File path a layout is written to: `{subject}_{kind}.{ext}`
    pub fn path_for(&self, layout: &ChartLayout) -> PathBuf {
        self.directory.join(format!(
            "{}_{}.{}",
            slugify(&layout.subject),
            layout.kind.slug(),
            self.format.extension()
        ))
    }

    /// Draw the layout to its file, creating the directory if needed
    pub fn write(&self, layout: &ChartLayout) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;
        let path = self.path_for(layout);

        match self.format {
            ImageFormat::Png => {
                let root = BitMapBackend::new(&path, self.size).into_drawing_area();
                draw_layout(&root, layout)?;
            }
            ImageFormat::Svg => {
                let root = SVGBackend::new(&path, self.size).into_drawing_area();
                draw_layout(&root, layout)?;
            }
        }

        info!("Chart written: {}", path.display());
        Ok(path)
    }
}

impl Default for ChartOutput {
    fn default() -> Self {
        Self::from_config(&OutputConfig::default())
    }
}

/// Lowercase, with runs of non-alphanumerics collapsed to `_`
fn slugify(subject: &str) -> String {
    let mut slug = String::with_capacity(subject.len());
    for c in subject.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "chart".to_string()
    } else {
        slug.to_string()
    }
}
