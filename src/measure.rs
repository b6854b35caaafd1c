use crate::error::MeasureError;
use crate::projector::CameraPose;

// A source of silhouette measurements: given a camera pose on the sampling
// sphere, produce one scalar proportional to the visible silhouette area.
// Takes `&mut self` because a real source renders into a single shared
// output target; the sweep never has more than one measurement in flight.
pub trait SilhouetteSource {
    fn measure(&mut self, pose: &CameraPose) -> Result<f32, MeasureError>;
}

impl<F: FnMut(&CameraPose) -> Result<f32, MeasureError>> SilhouetteSource for F {
    fn measure(&mut self, pose: &CameraPose) -> Result<f32, MeasureError> {
        self(pose)
    }
}
