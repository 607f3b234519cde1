//! Lock-free parameter publishing between the control-rate and audio-rate
//! domains.
//!
//! Angle, volume and effect mode are independent scalars; the audio path
//! tolerates reading last tick's value for one of them, so relaxed atomics
//! are all the synchronization required. The delay lines themselves are
//! never touched from the control side.

use atomic_float::AtomicF32;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;

use binaura_dsp::pan::clamp01;

use crate::config::{EffectMode, SpatializerConfig};
use crate::scene::{self, Vec3};

fn effect_to_u8(mode: EffectMode) -> u8 {
    match mode {
        EffectMode::None => 0,
        EffectMode::Ild => 1,
        EffectMode::Itd => 2,
    }
}

fn effect_from_u8(raw: u8) -> EffectMode {
    match raw {
        1 => EffectMode::Ild,
        2 => EffectMode::Itd,
        _ => EffectMode::None,
    }
}

/// Parameter state shared between one control-rate writer side and the
/// audio-rate reader inside the engine.
#[derive(Debug)]
pub(crate) struct SharedParams {
    angle_degrees: AtomicF32,
    volume: AtomicF32,
    effect: AtomicU8,
    scene_mode: AtomicBool,
    falloff_distance: AtomicF32,
}

impl SharedParams {
    pub(crate) fn new(config: &SpatializerConfig) -> Self {
        Self {
            angle_degrees: AtomicF32::new(0.0),
            volume: AtomicF32::new(1.0),
            effect: AtomicU8::new(effect_to_u8(config.effect)),
            scene_mode: AtomicBool::new(false),
            falloff_distance: AtomicF32::new(config.falloff_distance),
        }
    }

    /// Reads the scalars once; the engine calls this at the top of each
    /// block so gains and delay counts stay constant within the block.
    pub(crate) fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            angle_degrees: self.angle_degrees.load(Ordering::Relaxed),
            volume: self.volume.load(Ordering::Relaxed),
            effect: effect_from_u8(self.effect.load(Ordering::Relaxed)),
        }
    }
}

/// Read-only per-block view of the control parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSnapshot {
    pub angle_degrees: f32,
    pub volume: f32,
    pub effect: EffectMode,
}

/// Cloneable control-rate handle to a running spatializer.
///
/// Safe to drive from a different thread than the audio callback; every
/// setter is a single relaxed atomic store.
#[derive(Debug, Clone)]
pub struct SpatialControl {
    shared: Arc<SharedParams>,
}

impl SpatialControl {
    pub(crate) fn new(shared: Arc<SharedParams>) -> Self {
        Self { shared }
    }

    /// Publishes the source azimuth in degrees; negative is to the
    /// listener's left. Any real value is accepted, the effects treat
    /// out-of-range angles as degenerate rather than invalid.
    pub fn set_angle(&self, degrees: f32) {
        self.shared.angle_degrees.store(degrees, Ordering::Relaxed);
    }

    /// Publishes the overall volume, clamped into [0, 1].
    pub fn set_volume(&self, volume: f32) {
        self.shared.volume.store(clamp01(volume), Ordering::Relaxed);
    }

    pub fn set_effect(&self, mode: EffectMode) {
        self.shared.effect.store(effect_to_u8(mode), Ordering::Relaxed);
    }

    /// Enables or disables scene-derived parameters. While enabled,
    /// [`tick_scene`](SpatialControl::tick_scene) overwrites whatever the
    /// manual setters published.
    pub fn set_scene_mode(&self, enabled: bool) {
        self.shared.scene_mode.store(enabled, Ordering::Relaxed);
    }

    pub fn set_falloff_distance(&self, distance: f32) {
        self.shared
            .falloff_distance
            .store(distance.max(0.0), Ordering::Relaxed);
    }

    /// Derives angle and volume from scene geometry and publishes both.
    /// No-op unless scene mode is enabled.
    pub fn tick_scene(&self, emitter: Vec3, listener: Vec3, listener_forward: Vec3) {
        if !self.shared.scene_mode.load(Ordering::Relaxed) {
            return;
        }
        let falloff = self.shared.falloff_distance.load(Ordering::Relaxed);
        let (angle, volume) = scene::derive_params(emitter, listener, listener_forward, falloff);
        self.shared.angle_degrees.store(angle, Ordering::Relaxed);
        self.shared.volume.store(clamp01(volume), Ordering::Relaxed);
    }
}
