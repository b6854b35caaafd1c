use std::path::{Path, PathBuf};

use image::GrayImage;
use log::info;
use ndarray::{Array1, Array2};

use crate::error::{ProfileError, ProfileResult};
use crate::raster::Resolution;

// Raw measurements of one complete sweep, one value per pixel in index
// order. Built once by the sweep and immutable afterwards.
#[derive(Debug)]
pub struct RawProfile {
    resolution: Resolution,
    values: Array1<f32>,
}

impl RawProfile {
    pub fn new(resolution: Resolution, values: Vec<f32>) -> RawProfile {
        assert!(
            values.len() == resolution.pixel_count(),
            "profile holds {} values for a {}x{} resolution",
            values.len(),
            resolution.width(),
            resolution.height()
        );

        RawProfile {
            resolution,
            values: Array1::from(values),
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn values(&self) -> &Array1<f32> {
        &self.values
    }

    // Rescales the raw values linearly into [0, 1] against the global
    // extrema, shaped (height, width) with row 0 the bottom of the profile.
    // The scale factor depends on the extrema of the whole profile, so this
    // cannot run while a sweep is still measuring. A constant profile has no
    // usable range and is reported as an error, not emitted as a flat image.
    pub fn normalize(&self) -> ProfileResult<Array2<f32>> {
        let min = self
            .values
            .iter()
            .copied()
            .min_by(|x, y| x.total_cmp(y))
            .unwrap();
        let max = self
            .values
            .iter()
            .copied()
            .max_by(|x, y| x.total_cmp(y))
            .unwrap();

        if min == max {
            return Err(ProfileError::DegenerateRange {
                samples: self.values.len(),
                value: min,
            });
        }

        let width = self.resolution.width() as usize;
        Ok(Array2::from_shape_fn(
            (self.resolution.height() as usize, width),
            |(y, x)| (self.values[y * width + x] - min) / (max - min),
        ))
    }
}

// 8-bit grayscale rendering of a normalized profile. Profile rows run
// bottom-up, image rows top-down, so rows flip here.
pub fn to_gray_image(normalized: &Array2<f32>) -> GrayImage {
    let (height, width) = normalized.dim();

    GrayImage::from_fn(width as u32, height as u32, |x, y| {
        let value = normalized[(height - 1 - y as usize, x as usize)];
        image::Luma([(value * 255.).round() as u8])
    })
}

// Normalizes the profile and writes it as a grayscale PNG.
pub fn write_png(profile: &RawProfile, path: &Path) -> ProfileResult<()> {
    let image = to_gray_image(&profile.normalize()?);
    image.save(path)?;

    info!(
        "wrote {}x{} profile to {}",
        profile.resolution().width(),
        profile.resolution().height(),
        path.display()
    );
    Ok(())
}

// First free variant of `path`: the path itself if nothing is there, else a
// counter inserted before the extension (profile.png, profile1.png,
// profile2.png, ...) so an existing output is never overwritten.
pub fn unique_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let mut count = 1;
    loop {
        let candidate = numbered_path(path, count);
        if !candidate.exists() {
            return candidate;
        }
        count += 1;
    }
}

fn numbered_path(path: &Path, count: u32) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("profile");

    let name = match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{}{}.{}", stem, count, ext),
        None => format!("{}{}", stem, count),
    };

    path.with_file_name(name)
}
