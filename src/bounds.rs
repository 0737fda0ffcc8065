use nalgebra_glm as glm;

/// Running min/max extents of every vertex position seen during an import.
/// Consumed once afterwards to derive the transform that fits the model
/// into a unit-sized frame centered at the origin.
#[derive(Clone, Copy, Debug)]
pub struct Extent {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
    pub z_min: f32,
    pub z_max: f32,
}

impl Default for Extent {
    fn default() -> Self {
        Self::new()
    }
}

impl Extent {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x_min: f32::INFINITY,
            x_max: f32::NEG_INFINITY,
            y_min: f32::INFINITY,
            y_max: f32::NEG_INFINITY,
            z_min: f32::INFINITY,
            z_max: f32::NEG_INFINITY,
        }
    }

    /// Folds one raw vertex position into the running extents. Each axis
    /// updates at most one of max/min per call.
    pub fn update(&mut self, p: &glm::Vec3) {
        if self.x_max < p.x {
            self.x_max = p.x;
        } else if self.x_min > p.x {
            self.x_min = p.x;
        }
        if self.y_max < p.y {
            self.y_max = p.y;
        } else if self.y_min > p.y {
            self.y_min = p.y;
        }
        if self.z_max < p.z {
            self.z_max = p.z;
        } else if self.z_min > p.z {
            self.z_min = p.z;
        }
    }

    /// Longest axis span, compared in X, Y, Z order
    #[must_use]
    pub fn major_axis(&self) -> f32 {
        let dx = self.x_max - self.x_min;
        let dy = self.y_max - self.y_min;
        let dz = self.z_max - self.z_min;
        if dx > dy && dx > dz {
            dx
        } else if dy > dz {
            dy
        } else {
            dz
        }
    }

    /// Uniform scale factors and a translation that fit the accumulated box
    /// into a unit frame at the origin. The scale is applied before the
    /// translation, so the offset is expressed in scaled units. A
    /// zero-extent box divides by zero here.
    #[must_use]
    pub fn normalizing_transform(&self) -> (glm::Vec3, glm::Vec3) {
        let s = 1.0 / self.major_axis();
        let center = glm::vec3(
            s * (self.x_min + self.x_max) / 2.0,
            s * (self.y_min + self.y_max) / 2.0,
            s * (self.z_min + self.z_max) / 2.0,
        );
        (glm::vec3(s, s, s), -center)
    }
}
