use std::f32::consts::PI;

use nalgebra::Vector3;

use crate::error::{MeasureError, ProfileError, ProfileResult};
use crate::measure::SilhouetteSource;
use crate::projector::CameraPose;

// Closed-form silhouette scenes, standing in for an external renderer.
// Each gives the exact shadow area of a convex solid seen along a unit
// direction, so profiles are reproducible without any render backend.
// The ellipsoid shadow area is pi*sqrt((bc*ux)^2 + (ac*uy)^2 + (ab*uz)^2),
// the classic projected-area result for a triaxial ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnalyticScene {
    // Same disc from every direction; sweeping one produces a degenerate
    // (constant) profile.
    Sphere { radius: f32 },
    // Semi-axes along the world x, y, z axes.
    Ellipsoid { a: f32, b: f32, c: f32 },
    // Half-extents along the world x, y, z axes.
    Cuboid { hx: f32, hy: f32, hz: f32 },
}

impl AnalyticScene {
    // Parses a scene identifier: "sphere", "sphere=2", "ellipsoid=1,2,0.5",
    // "cuboid=1,1,3". Missing dimensions default to 1.
    pub fn parse(ident: &str) -> ProfileResult<AnalyticScene> {
        let (name, dim_list) = match ident.split_once('=') {
            Some((name, dims)) => (name, Some(dims)),
            None => (ident, None),
        };

        let dims = match dim_list {
            Some(list) => list
                .split(',')
                .map(|d| d.trim().parse::<f32>())
                .collect::<Result<Vec<f32>, _>>()
                .map_err(|_| {
                    ProfileError::config(format!("invalid scene dimensions in {:?}", ident))
                })?,
            None => Vec::new(),
        };
        let dim = |i: usize| dims.get(i).copied().unwrap_or(1.);

        match name {
            "sphere" => Ok(AnalyticScene::Sphere { radius: dim(0) }),
            "ellipsoid" => Ok(AnalyticScene::Ellipsoid {
                a: dim(0),
                b: dim(1),
                c: dim(2),
            }),
            "cuboid" => Ok(AnalyticScene::Cuboid {
                hx: dim(0),
                hy: dim(1),
                hz: dim(2),
            }),
            other => Err(ProfileError::config(format!(
                "unknown scene {:?} (expected sphere, ellipsoid or cuboid)",
                other
            ))),
        }
    }

    // Exact silhouette area seen looking along the unit direction `view`.
    pub fn silhouette_area(&self, view: Vector3<f32>) -> f32 {
        match *self {
            AnalyticScene::Sphere { radius } => PI * radius * radius,
            AnalyticScene::Ellipsoid { a, b, c } => {
                PI * ((b * c * view[0]).powi(2)
                    + (a * c * view[1]).powi(2)
                    + (a * b * view[2]).powi(2))
                .sqrt()
            }
            AnalyticScene::Cuboid { hx, hy, hz } => {
                4. * (hy * hz * view[0].abs() + hx * hz * view[1].abs() + hx * hy * view[2].abs())
            }
        }
    }
}

impl SilhouetteSource for AnalyticScene {
    fn measure(&mut self, pose: &CameraPose) -> Result<f32, MeasureError> {
        Ok(self.silhouette_area(pose.view_direction()))
    }
}

#[cfg(test)]
mod test {
    use std::f32::consts::PI;

    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    use super::AnalyticScene;

    #[test]
    fn sphere_shadow_is_direction_independent() {
        let scene = AnalyticScene::Sphere { radius: 2. };

        assert_relative_eq!(scene.silhouette_area(Vector3::new(1., 0., 0.)), 4. * PI);
        assert_relative_eq!(
            scene.silhouette_area(Vector3::new(0.6, 0., 0.8)),
            4. * PI,
            epsilon = 1e-5
        );
    }

    #[test]
    fn ellipsoid_shadow_along_each_axis() {
        let scene = AnalyticScene::Ellipsoid { a: 1., b: 2., c: 3. };

        // Looking down an axis shows the ellipse of the other two semi-axes.
        assert_relative_eq!(
            scene.silhouette_area(Vector3::new(1., 0., 0.)),
            PI * 2. * 3.,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            scene.silhouette_area(Vector3::new(0., 1., 0.)),
            PI * 1. * 3.,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            scene.silhouette_area(Vector3::new(0., 0., 1.)),
            PI * 1. * 2.,
            epsilon = 1e-4
        );
    }

    #[test]
    fn unit_ellipsoid_matches_unit_sphere() {
        let ellipsoid = AnalyticScene::Ellipsoid { a: 1., b: 1., c: 1. };
        let view = Vector3::new(0.6, 0.48, 0.64);

        assert_relative_eq!(ellipsoid.silhouette_area(view), PI, epsilon = 1e-4);
    }

    #[test]
    fn cuboid_shadow_along_each_axis() {
        let scene = AnalyticScene::Cuboid { hx: 1., hy: 2., hz: 3. };

        assert_relative_eq!(scene.silhouette_area(Vector3::new(-1., 0., 0.)), 24.);
        assert_relative_eq!(scene.silhouette_area(Vector3::new(0., 1., 0.)), 12.);
        assert_relative_eq!(scene.silhouette_area(Vector3::new(0., 0., 1.)), 8.);
    }

    #[test]
    fn identifiers_parse_with_dimensions() {
        assert_eq!(
            AnalyticScene::parse("sphere").unwrap(),
            AnalyticScene::Sphere { radius: 1. }
        );
        assert_eq!(
            AnalyticScene::parse("ellipsoid=1,2,0.5").unwrap(),
            AnalyticScene::Ellipsoid { a: 1., b: 2., c: 0.5 }
        );
        assert_eq!(
            AnalyticScene::parse("cuboid=2").unwrap(),
            AnalyticScene::Cuboid { hx: 2., hy: 1., hz: 1. }
        );
    }

    #[test]
    fn bad_identifiers_are_config_errors() {
        assert!(AnalyticScene::parse("teapot").is_err());
        assert!(AnalyticScene::parse("ellipsoid=1,two,3").is_err());
    }
}
