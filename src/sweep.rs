use log::{debug, info};

use crate::error::{ProfileError, ProfileResult};
use crate::measure::SilhouetteSource;
use crate::profile::RawProfile;
use crate::projector::camera_pose;
use crate::raster::Resolution;

// One completed step of a sweep, handed to the observer after the
// measurement for that pixel has returned.
#[derive(Clone, Copy, Debug)]
pub struct SweepStep {
    pub pixel: usize,
    pub total: usize,
    pub longitude: f32,
    pub latitude: f32,
    pub value: f32,
}

pub fn sweep<S: SilhouetteSource>(
    resolution: Resolution,
    radius: f32,
    source: &mut S,
) -> ProfileResult<RawProfile> {
    sweep_with_observer(resolution, radius, source, |_| {})
}

// Measures every pixel of the profile in index order, bottom row first.
// The source is called synchronously, one measurement at a time: the render
// target behind a real source is exclusive and stateful, so no two
// measurements may overlap. The observer runs after each step, with no
// suspension implied. The first failed measurement aborts the whole sweep;
// a partial profile is not usable.
pub fn sweep_with_observer<S, O>(
    resolution: Resolution,
    radius: f32,
    source: &mut S,
    mut observer: O,
) -> ProfileResult<RawProfile>
where
    S: SilhouetteSource,
    O: FnMut(&SweepStep),
{
    if !radius.is_finite() || radius <= 0. {
        return Err(ProfileError::config(format!(
            "camera distance must be positive and finite, got {}",
            radius
        )));
    }

    let total = resolution.pixel_count();
    info!(
        "sweeping {}x{} profile at distance {}",
        resolution.width(),
        resolution.height(),
        radius
    );

    let mut values = Vec::with_capacity(total);
    for pixel in 0..total {
        let coord = resolution.index_to_coord(pixel);
        let (longitude, latitude) = resolution.coord_to_spherical(coord);
        let pose = camera_pose(longitude, latitude, radius);

        let value = source
            .measure(&pose)
            .map_err(|source| ProfileError::Measure { pixel, source })?;
        debug!(
            "pixel {} at ({}, {}) measured {}",
            pixel, longitude, latitude, value
        );

        values.push(value);
        observer(&SweepStep {
            pixel,
            total,
            longitude,
            latitude,
            value,
        });
    }

    info!("sweep complete, {} samples", total);
    Ok(RawProfile::new(resolution, values))
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use crate::equirect::{linear_to_latitude, linear_to_longitude};
    use crate::error::{MeasureError, ProfileError};
    use crate::projector::CameraPose;
    use crate::raster::{pixel_to_linear, Resolution};

    use super::{sweep, sweep_with_observer};

    #[test]
    fn end_to_end_two_by_two() {
        let resolution = Resolution::new(2, 2).unwrap();
        let mut next = 0;
        let mut stub = |_: &CameraPose| -> Result<f32, MeasureError> {
            let value = next as f32;
            next += 1;
            Ok(value)
        };

        let raw = sweep(resolution, 10., &mut stub).unwrap();
        assert_eq!(next, 4);

        let normalized = raw.normalize().unwrap();
        assert_relative_eq!(normalized[(0, 0)], 0.);
        assert_relative_eq!(normalized[(0, 1)], 1. / 3.);
        assert_relative_eq!(normalized[(1, 0)], 2. / 3.);
        assert_relative_eq!(normalized[(1, 1)], 1.);
    }

    #[test]
    fn steps_match_the_direct_pixel_computation() {
        let resolution = Resolution::new(3, 2).unwrap();
        let mut count = 0usize;
        let mut stub = |_: &CameraPose| -> Result<f32, MeasureError> {
            count += 1;
            Ok(count as f32)
        };

        let mut steps = Vec::new();
        sweep_with_observer(resolution, 5., &mut stub, |step| {
            steps.push((step.pixel, step.longitude, step.latitude));
        })
        .unwrap();

        assert_eq!(count, 6);
        assert_eq!(steps.len(), 6);
        for (i, &(pixel, longitude, latitude)) in steps.iter().enumerate() {
            assert_eq!(pixel, i);

            let (x, y) = resolution.index_to_coord(i);
            assert_relative_eq!(longitude, linear_to_longitude(pixel_to_linear(x, 3)));
            assert_relative_eq!(latitude, linear_to_latitude(pixel_to_linear(y, 2)));
        }
    }

    #[test]
    fn measurement_failure_aborts_with_the_pixel_index() {
        let resolution = Resolution::new(2, 2).unwrap();
        let mut next = 0;
        let mut stub = |_: &CameraPose| -> Result<f32, MeasureError> {
            if next == 2 {
                return Err(MeasureError::new("render target locked"));
            }
            next += 1;
            Ok(0.)
        };

        match sweep(resolution, 1., &mut stub).unwrap_err() {
            ProfileError::Measure { pixel, .. } => assert_eq!(pixel, 2),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn rejects_bad_distances() {
        let resolution = Resolution::new(2, 2).unwrap();

        for &radius in [0., -1., f32::NAN, f32::INFINITY].iter() {
            let mut stub = |_: &CameraPose| -> Result<f32, MeasureError> { Ok(1.) };
            match sweep(resolution, radius, &mut stub).unwrap_err() {
                ProfileError::Config(_) => {}
                other => panic!("unexpected error: {}", other),
            }
        }
    }
}
