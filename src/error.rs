use std::io;

use thiserror::Error;

// Error taxonomy for one profile run. Each variant names the stage that
// failed: configuration is rejected before the sweep starts, a measurement
// failure aborts the sweep, and a degenerate range surfaces at
// normalization time even though the sweep itself succeeded.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("sweep aborted: measurement failed at pixel {pixel}: {source}")]
    Measure {
        pixel: usize,
        #[source]
        source: MeasureError,
    },

    #[error("normalization failed: degenerate profile, all {samples} samples equal {value}")]
    DegenerateRange { samples: usize, value: f32 },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

impl ProfileError {
    pub fn config<T: ToString>(msg: T) -> ProfileError {
        ProfileError::Config(msg.to_string())
    }
}

pub type ProfileResult<T> = Result<T, ProfileError>;

// Failure reported by a measurement source. The sweep attaches the pixel
// index that was in progress when it wraps this into a `ProfileError`.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct MeasureError(pub String);

impl MeasureError {
    pub fn new<T: ToString>(msg: T) -> MeasureError {
        MeasureError(msg.to_string())
    }
}
