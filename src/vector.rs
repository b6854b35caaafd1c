use nalgebra::Vector3;

// Rotates a vector through `degrees` degrees around `axis`, using Rodrigues'
// rotation formula. `axis` must be normalized: the formula scales the
// component orthogonal to the axis assuming unit length, so a non-unit axis
// silently distorts the result rather than erroring.
// Positive angles are counter-clockwise around the axis (right-hand rule).
pub fn rotate(vector: Vector3<f32>, axis: Vector3<f32>, degrees: f32) -> Vector3<f32> {
    let rad = degrees.to_radians();
    let cos = rad.cos();
    let sin = rad.sin();

    vector * cos + axis.cross(&vector) * sin + axis * (axis.dot(&vector) * (1. - cos))
}
