use nalgebra_glm as glm;

/// Accumulated model transforms
///
/// Translation, rotation and scale are kept as three separately composed
/// column-major matrices. New translations and scales are applied on the
/// right (object space order) while new rotations are applied on the left
/// (world space order). The final model matrix applies scale first, then
/// rotation, then translation.
#[derive(Clone, Copy, Debug)]
pub struct TransformStack {
    translation: glm::Mat4,
    rotation: glm::Mat4,
    scaling: glm::Mat4,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    #[must_use]
    pub fn new() -> Self {
        Self {
            translation: glm::Mat4::identity(),
            rotation: glm::Mat4::identity(),
            scaling: glm::Mat4::identity(),
        }
    }

    /// Restores all three matrices to identity
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn translate(&mut self, offset: &glm::Vec3) {
        self.translation = glm::translate(&self.translation, offset);
    }

    pub fn scale(&mut self, factors: &glm::Vec3) {
        self.scaling = glm::scale(&self.scaling, factors);
    }

    /// Applies a rotation of `degrees` about `axis`. The axis is expected to
    /// be unit length; it is not normalized here.
    pub fn rotate(&mut self, degrees: f32, axis: &glm::Vec3) {
        self.rotation = rotation_about(degrees, axis) * self.rotation;
    }

    /// Composed model matrix: translation * rotation * scale
    #[must_use]
    pub fn matrix(&self) -> glm::Mat4 {
        self.translation * self.rotation * self.scaling
    }

    #[must_use]
    pub const fn translation(&self) -> &glm::Mat4 {
        &self.translation
    }

    #[must_use]
    pub const fn rotation(&self) -> &glm::Mat4 {
        &self.rotation
    }

    #[must_use]
    pub const fn scaling(&self) -> &glm::Mat4 {
        &self.scaling
    }
}

/// Rotation matrix about `axis` by `degrees`, built with Rodrigues'
/// formula from the cross product and outer product matrices of the axis
#[must_use]
pub fn rotation_about(degrees: f32, axis: &glm::Vec3) -> glm::Mat4 {
    let rad = degrees.to_radians();
    let (sin, cos) = rad.sin_cos();
    let cross = glm::mat3(
        0.0, -axis.z, axis.y, //
        axis.z, 0.0, -axis.x, //
        -axis.y, axis.x, 0.0,
    );
    let outer = glm::mat3(
        axis.x * axis.x,
        axis.x * axis.y,
        axis.x * axis.z,
        axis.x * axis.y,
        axis.y * axis.y,
        axis.y * axis.z,
        axis.x * axis.z,
        axis.y * axis.z,
        axis.z * axis.z,
    );
    let r = glm::Mat3::identity() * cos + outer * (1.0 - cos) + cross * sin;
    glm::mat3_to_mat4(&r)
}

/// Angle in degrees and rotation axis taking `v1` onto `v2`. Both inputs
/// are normalized first; the axis is their raw cross product. Parallel or
/// anti-parallel inputs produce a zero axis and the angle goes NaN outside
/// the acos domain.
#[must_use]
pub fn axis_angle_between(v1: &glm::Vec3, v2: &glm::Vec3) -> (f32, glm::Vec3) {
    let n1 = glm::normalize(v1);
    let n2 = glm::normalize(v2);
    let axis = glm::cross(&n1, &n2);
    let angle = glm::dot(&n1, &n2).acos().to_degrees();
    (angle, axis)
}
