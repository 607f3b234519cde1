//! Scene-geometry helpers for control-rate parameter updates.
//!
//! Pure functions with no framework dependency: any control loop that knows
//! the emitter and listener transforms can derive the azimuth and falloff
//! volume published to the audio path.

use binaura_dsp::pan::clamp01;

/// Minimal 3-component vector for scene-driven parameter updates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const UP: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len <= f32::EPSILON {
            Vec3::default()
        } else {
            Vec3::new(self.x / len, self.y / len, self.z / len)
        }
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Signed angle in degrees from `a` to `b` about `axis`.
///
/// The magnitude is the unsigned angle between the vectors; the sign
/// follows the direction of `cross(a, b)` relative to `axis`.
pub fn signed_angle_degrees(a: Vec3, b: Vec3, axis: Vec3) -> f32 {
    let denom = a.length() * b.length();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    let unsigned = (a.dot(b) / denom).clamp(-1.0, 1.0).acos().to_degrees();
    if a.cross(b).dot(axis) < 0.0 {
        -unsigned
    } else {
        unsigned
    }
}

/// Azimuth (degrees, negative = listener's left) and falloff volume for an
/// emitter/listener pair. A coincident pair reads as dead ahead.
pub fn derive_params(
    emitter: Vec3,
    listener: Vec3,
    listener_forward: Vec3,
    falloff_distance: f32,
) -> (f32, f32) {
    let direction = listener - emitter;
    let distance = direction.length();
    let volume = linear_falloff(distance, falloff_distance);
    let angle = if distance <= f32::EPSILON {
        0.0
    } else {
        -signed_angle_degrees(listener_forward, direction.normalized(), Vec3::UP)
    };
    (angle, volume)
}

/// Linear distance falloff clamped into [0, 1].
#[inline]
pub fn linear_falloff(distance: f32, falloff_distance: f32) -> f32 {
    if falloff_distance <= 0.0 {
        return 0.0;
    }
    clamp01(1.0 - distance / falloff_distance)
}
