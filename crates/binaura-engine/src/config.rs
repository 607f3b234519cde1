use serde::{Deserialize, Serialize};

/// Active spatialization effect. Switching modes never reallocates delay
/// state; the delay lines persist so a toggle cannot glitch the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EffectMode {
    /// Pass audio through untouched (after volume scaling).
    #[default]
    None,
    /// Interaural level difference: complementary per-ear gains.
    Ild,
    /// Interaural time difference: per-ear circular delay.
    Itd,
}

/// Construction-time configuration for a spatializer instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpatializerConfig {
    pub sample_rate: u32,
    /// Maximum ITD (Haas) delay in milliseconds; fixes the delay-line
    /// capacity for the lifetime of the engine.
    pub max_haas_delay_ms: f32,
    /// Listener head radius in meters for the Woodworth model.
    pub head_radius_m: f32,
    pub speed_of_sound_mps: f32,
    /// Effect active when the engine starts.
    pub effect: EffectMode,
    /// Distance at which a scene-driven source falls to silence.
    pub falloff_distance: f32,
}

impl Default for SpatializerConfig {
    fn default() -> Self {
        Self {
            sample_rate: 44_100,
            max_haas_delay_ms: 20.0,
            head_radius_m: 0.1,
            speed_of_sound_mps: 343.0,
            effect: EffectMode::None,
            falloff_distance: 15.0,
        }
    }
}

impl SpatializerConfig {
    /// Delay-line capacity in samples:
    /// `ceil(max_haas_delay_ms / 1000 * sample_rate)`, never below one.
    pub fn delay_capacity(&self) -> usize {
        let samples = (self.max_haas_delay_ms.max(0.0) / 1000.0 * self.sample_rate as f32).ceil();
        (samples as usize).max(1)
    }
}
