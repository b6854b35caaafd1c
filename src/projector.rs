use nalgebra::{UnitQuaternion, Vector3};

use crate::equirect;
use crate::raster::Resolution;
use crate::vector::rotate;

// World frame basis. The sampling sphere is centred on the origin of this
// frame, with the observed object at the origin.
pub const RIGHT: Vector3<f32> = Vector3::new(1., 0., 0.);
pub const FORWARD: Vector3<f32> = Vector3::new(0., 1., 0.);
pub const UP: Vector3<f32> = Vector3::new(0., 0., 1.);

// Point on the sphere of radius `radius` at the given spherical coordinate.
// Starts from `FORWARD` and applies the latitude rotation about `RIGHT`
// before the longitude rotation about `UP`. The two rotations do not
// commute; longitude first yields a different embedding.
pub fn project_spherical(longitude: f32, latitude: f32, radius: f32) -> Vector3<f32> {
    let tilted = rotate(FORWARD, RIGHT, latitude);
    rotate(tilted, UP, longitude) * radius
}

pub fn project_linear(linear: (f32, f32), radius: f32) -> Vector3<f32> {
    let (longitude, latitude) = equirect::linear_to_spherical(linear);
    project_spherical(longitude, latitude, radius)
}

pub fn project_pixel(coord: (u32, u32), resolution: Resolution, radius: f32) -> Vector3<f32> {
    project_linear(resolution.coord_to_linear(coord), radius)
}

// Camera position and orientation observing the origin from the sampling
// sphere. Orientation is Euler x-then-z in the world frame: `pitch_deg`
// tilts about `RIGHT`, `yaw_deg` turns about `UP`, and roll about the
// optical axis is identically zero.
#[derive(Clone, Copy, Debug)]
pub struct CameraPose {
    pub position: Vector3<f32>,
    pub pitch_deg: f32,
    pub yaw_deg: f32,
}

impl CameraPose {
    pub fn orientation(&self) -> UnitQuaternion<f32> {
        // nalgebra's euler order is x, then y, then z; y stays zero here.
        UnitQuaternion::from_euler_angles(
            self.pitch_deg.to_radians(),
            0.,
            self.yaw_deg.to_radians(),
        )
    }

    // Direction the camera looks along. An untransformed camera looks down
    // its local -z axis.
    pub fn view_direction(&self) -> Vector3<f32> {
        self.orientation().transform_vector(&Vector3::new(0., 0., -1.))
    }
}

// Pose observing the origin from the given spherical coordinate at `radius`.
// Pitch 90 - lat tips the camera from straight-down to face the equator;
// yaw 180 + long swings it around so the optical axis passes back through
// the origin.
pub fn camera_pose(longitude: f32, latitude: f32, radius: f32) -> CameraPose {
    CameraPose {
        position: project_spherical(longitude, latitude, radius),
        pitch_deg: 90. - latitude,
        yaw_deg: 180. + longitude,
    }
}
