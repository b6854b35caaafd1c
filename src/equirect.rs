// Conversions between linear image coordinates and spherical coordinates.
// Linear coordinates run 0 to 1 across each image axis; longitude covers
// -180 to 180 degrees, latitude -90 to 90, with 0.5 linear at 0 degrees.
// No wrapping or clamping happens here. Inputs outside (0, 1) produce
// out-of-range angles, which is deliberate: previews off the canonical
// sampling grid stay representable.

pub fn linear_to_longitude(linear: f32) -> f32 {
    (linear * 360.) - 180.
}

pub fn longitude_to_linear(longitude: f32) -> f32 {
    (longitude + 180.) / 360.
}

pub fn linear_to_latitude(linear: f32) -> f32 {
    (linear * 180.) - 90.
}

pub fn latitude_to_linear(latitude: f32) -> f32 {
    (latitude + 90.) / 180.
}

// Converts a linear (x, y) pair to (longitude, latitude).
pub fn linear_to_spherical(linear: (f32, f32)) -> (f32, f32) {
    (linear_to_longitude(linear.0), linear_to_latitude(linear.1))
}

// Inverse of `linear_to_spherical`; each axis runs through its own inverse.
pub fn spherical_to_linear(spherical: (f32, f32)) -> (f32, f32) {
    (
        longitude_to_linear(spherical.0),
        latitude_to_linear(spherical.1),
    )
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::{
        latitude_to_linear, linear_to_latitude, linear_to_longitude, linear_to_spherical,
        longitude_to_linear, spherical_to_linear,
    };

    #[test]
    fn midpoint_maps_to_zero_degrees() {
        assert_relative_eq!(linear_to_longitude(0.5), 0.);
        assert_relative_eq!(linear_to_latitude(0.5), 0.);
    }

    #[test]
    fn longitude_round_trips() {
        for i in 1..20 {
            let linear = i as f32 / 20.;
            assert_relative_eq!(
                longitude_to_linear(linear_to_longitude(linear)),
                linear,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn latitude_round_trips() {
        for i in 1..20 {
            let linear = i as f32 / 20.;
            assert_relative_eq!(
                latitude_to_linear(linear_to_latitude(linear)),
                linear,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn pair_inverse_uses_matching_axes() {
        // The two axes scale differently, so the composite inverse must send
        // latitude through the latitude map, not the longitude one.
        let (x, y) = spherical_to_linear(linear_to_spherical((0.25, 0.75)));

        assert_relative_eq!(x, 0.25, epsilon = 1e-6);
        assert_relative_eq!(y, 0.75, epsilon = 1e-6);
    }

    #[test]
    fn out_of_range_linear_is_permitted() {
        // Debug use outside the sampling grid: no clamping.
        assert_relative_eq!(linear_to_longitude(1.5), 360.);
        assert_relative_eq!(linear_to_latitude(-0.5), -180.);
    }
}
