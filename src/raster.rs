use crate::equirect;
use crate::error::{ProfileError, ProfileResult};

// Output profile resolution. Pixels are numbered from the bottom-left corner,
// rightward then upward: index = y * width + x. Construction rejects a zero
// axis, so a held `Resolution` always has at least one pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> ProfileResult<Resolution> {
        if width == 0 || height == 0 {
            return Err(ProfileError::config(format!(
                "resolution must be positive on both axes, got {}x{}",
                width, height
            )));
        }

        Ok(Resolution { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    // Pixel number to (x, y) coordinate, zeroed bottom left.
    // The index must be in range; wrapping it silently would break the
    // round trip with `coord_to_index`.
    pub fn index_to_coord(&self, index: usize) -> (u32, u32) {
        assert!(
            index < self.pixel_count(),
            "pixel index {} out of range for {}x{} profile",
            index,
            self.width,
            self.height
        );

        let x = (index % self.width as usize) as u32;
        let y = (index / self.width as usize) as u32;
        (x, y)
    }

    // (x, y) coordinate to pixel number. Inverse of `index_to_coord`.
    pub fn coord_to_index(&self, coord: (u32, u32)) -> usize {
        assert!(
            coord.0 < self.width && coord.1 < self.height,
            "pixel coordinate ({}, {}) out of range for {}x{} profile",
            coord.0,
            coord.1,
            self.width,
            self.height
        );

        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    pub fn coord_to_linear(&self, coord: (u32, u32)) -> (f32, f32) {
        (
            pixel_to_linear(coord.0, self.width),
            pixel_to_linear(coord.1, self.height),
        )
    }

    pub fn coord_to_spherical(&self, coord: (u32, u32)) -> (f32, f32) {
        equirect::linear_to_spherical(self.coord_to_linear(coord))
    }
}

// Linear coordinate of the centre of pixel cell `pixel` on an axis with
// `resolution` cells. First pixel is numbered 0. Sampling cell centres keeps
// every sample strictly inside (0, 1): the -180/+180 longitude seam is never
// sampled twice, and no sample lands exactly on a pole, where every longitude
// collapses to the same point.
pub fn pixel_to_linear(pixel: u32, resolution: u32) -> f32 {
    (pixel as f32 + 0.5) / resolution as f32
}
