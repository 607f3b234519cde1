use std::sync::Arc;

use binaura_dsp::{itd, pan, DelayLine};

use crate::config::{EffectMode, SpatializerConfig};
use crate::error::SpatializerError;
use crate::params::{SharedParams, SpatialControl};

/// Single-source binaural spatializer.
///
/// Owns one delay line per ear, sized once at construction from the Haas
/// headroom and sample rate. Block processing reads the published
/// parameters once, scales by volume, then applies the active effect; it
/// never allocates, locks, or panics on the audio path.
pub struct BinauralSpatializer {
    config: SpatializerConfig,
    shared: Arc<SharedParams>,
    left: DelayLine,
    right: DelayLine,
}

impl BinauralSpatializer {
    pub fn new(config: SpatializerConfig) -> Self {
        let capacity = config.delay_capacity();
        let shared = Arc::new(SharedParams::new(&config));
        Self {
            config,
            shared,
            left: DelayLine::new(capacity),
            right: DelayLine::new(capacity),
        }
    }

    pub fn config(&self) -> &SpatializerConfig {
        &self.config
    }

    /// Control-rate handle for this engine; cloneable and safe to drive
    /// from another thread.
    pub fn control(&self) -> SpatialControl {
        SpatialControl::new(self.shared.clone())
    }

    /// Clears delay history without touching the published parameters.
    pub fn reset(&mut self) {
        self.left.clear();
        self.right.clear();
    }

    /// Per-ear delays in samples the current angle would apply in ITD
    /// mode: `(left, right)`, at most one of them nonzero.
    pub fn ear_delays(&self) -> (usize, usize) {
        let angle = self.shared.snapshot().angle_degrees;
        self.ear_delays_for(angle)
    }

    /// Processes one interleaved block in place.
    ///
    /// `data` holds `data.len() / channels` frames; channels 0 and 1 are
    /// the left and right ears, further channels only receive the volume
    /// scaling. On error the block is skipped with every sample untouched.
    pub fn process_block(
        &mut self,
        data: &mut [f32],
        channels: usize,
    ) -> Result<(), SpatializerError> {
        if channels < 2 {
            tracing::error!(channels, "spatializer needs a stereo block, skipping");
            return Err(SpatializerError::ChannelCount(channels));
        }
        if data.len() % channels != 0 {
            tracing::error!(
                len = data.len(),
                channels,
                "interleaved block is not frame aligned, skipping"
            );
            return Err(SpatializerError::FrameAlignment {
                len: data.len(),
                channels,
            });
        }

        let snapshot = self.shared.snapshot();

        for sample in data.iter_mut() {
            *sample *= snapshot.volume;
        }

        match snapshot.effect {
            EffectMode::None => {}
            EffectMode::Ild => apply_ild(data, channels, snapshot.angle_degrees),
            EffectMode::Itd => self.apply_itd(data, channels, snapshot.angle_degrees),
        }
        Ok(())
    }

    fn ear_delays_for(&self, angle_degrees: f32) -> (usize, usize) {
        let seconds = itd::woodworth_delay_seconds(
            self.config.head_radius_m,
            self.config.speed_of_sound_mps,
            angle_degrees.to_radians(),
        );
        let delay = itd::delay_samples(
            seconds,
            self.config.sample_rate as f32,
            self.left.capacity(),
        );
        // A source to the right reaches the left ear late, and vice versa.
        if angle_degrees > 0.0 {
            (delay, 0)
        } else if angle_degrees < 0.0 {
            (0, delay)
        } else {
            (0, 0)
        }
    }

    fn apply_itd(&mut self, data: &mut [f32], channels: usize, angle_degrees: f32) {
        let (left_delay, right_delay) = self.ear_delays_for(angle_degrees);
        for frame in data.chunks_exact_mut(channels) {
            self.left.write(frame[0]);
            self.right.write(frame[1]);
            frame[0] = self.left.read_delayed(left_delay);
            frame[1] = self.right.read_delayed(right_delay);
            self.left.advance();
            self.right.advance();
        }
    }
}

fn apply_ild(data: &mut [f32], channels: usize, angle_degrees: f32) {
    let (left_gain, right_gain) = pan::ild_gains(angle_degrees);
    for frame in data.chunks_exact_mut(channels) {
        frame[0] *= left_gain;
        frame[1] *= right_gain;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(effect: EffectMode) -> BinauralSpatializer {
        BinauralSpatializer::new(SpatializerConfig {
            effect,
            ..SpatializerConfig::default()
        })
    }

    fn ramp_block(frames: usize) -> Vec<f32> {
        (0..frames * 2).map(|i| (i as f32) * 0.01 - 0.5).collect()
    }

    #[test]
    fn none_mode_at_unit_volume_is_bit_identical() {
        let mut engine = engine_with(EffectMode::None);
        let input = ramp_block(128);
        let mut block = input.clone();
        engine.process_block(&mut block, 2).expect("process");
        assert_eq!(block, input);
    }

    #[test]
    fn volume_scales_every_sample_exactly() {
        let mut engine = engine_with(EffectMode::None);
        engine.control().set_volume(0.25);
        let input = ramp_block(64);
        let mut block = input.clone();
        engine.process_block(&mut block, 2).expect("process");
        for (out, inp) in block.iter().zip(&input) {
            assert_eq!(*out, inp * 0.25);
        }
    }

    #[test]
    fn ild_at_center_halves_both_ears() {
        let mut engine = engine_with(EffectMode::Ild);
        let input = ramp_block(32);
        let mut block = input.clone();
        engine.process_block(&mut block, 2).expect("process");
        for (out, inp) in block.iter().zip(&input) {
            assert_eq!(*out, inp * 0.5);
        }
    }

    #[test]
    fn itd_delays_only_the_left_ear_for_positive_angles() {
        let mut engine = engine_with(EffectMode::Itd);
        engine.control().set_angle(45.0);
        let (left, right) = engine.ear_delays();
        assert!(left > 0);
        assert_eq!(right, 0);

        engine.control().set_angle(-45.0);
        let (left, right) = engine.ear_delays();
        assert_eq!(left, 0);
        assert!(right > 0);

        engine.control().set_angle(0.0);
        assert_eq!(engine.ear_delays(), (0, 0));
    }

    #[test]
    fn itd_at_zero_angle_is_passthrough() {
        let mut engine = engine_with(EffectMode::Itd);
        let input = ramp_block(64);
        let mut block = input.clone();
        engine.process_block(&mut block, 2).expect("process");
        assert_eq!(block, input);
    }

    #[test]
    fn extreme_angles_clamp_to_the_buffer_capacity() {
        // Half a millisecond of headroom at 44.1 kHz: 23 samples, while
        // 90 degrees asks for roughly 33.
        let mut engine = BinauralSpatializer::new(SpatializerConfig {
            max_haas_delay_ms: 0.5,
            effect: EffectMode::Itd,
            ..SpatializerConfig::default()
        });
        let capacity = engine.config().delay_capacity();
        engine.control().set_angle(90.0);
        let (left, _) = engine.ear_delays();
        assert_eq!(left, capacity - 1);

        // Processing at the clamped delay must stay in bounds.
        let mut block = ramp_block(256);
        engine.process_block(&mut block, 2).expect("process");
    }

    #[test]
    fn mono_block_is_skipped_untouched() {
        let mut engine = engine_with(EffectMode::Ild);
        let input = vec![0.5f32; 64];
        let mut block = input.clone();
        let err = engine.process_block(&mut block, 1).unwrap_err();
        assert_eq!(err, SpatializerError::ChannelCount(1));
        assert_eq!(block, input);
    }

    #[test]
    fn misaligned_block_is_skipped_untouched() {
        let mut engine = engine_with(EffectMode::None);
        engine.control().set_volume(0.5);
        let input = vec![0.5f32; 63];
        let mut block = input.clone();
        let err = engine.process_block(&mut block, 2).unwrap_err();
        assert_eq!(
            err,
            SpatializerError::FrameAlignment {
                len: 63,
                channels: 2
            }
        );
        assert_eq!(block, input);
    }

    #[test]
    fn extra_channels_only_receive_volume() {
        let mut engine = engine_with(EffectMode::Ild);
        engine.control().set_angle(90.0);
        // Four-channel frames: left, right, and two passthrough channels.
        let mut block = vec![0.8f32; 4 * 16];
        engine.process_block(&mut block, 4).expect("process");
        for frame in block.chunks_exact(4) {
            assert!(frame[0].abs() < 1e-6);
            assert!((frame[1] - 0.8).abs() < 1e-6);
            assert_eq!(frame[2], 0.8);
            assert_eq!(frame[3], 0.8);
        }
    }

    #[test]
    fn toggling_effects_keeps_delay_state() {
        let mut engine = engine_with(EffectMode::Itd);
        let control = engine.control();
        control.set_angle(30.0);

        // Prime the left delay line with an impulse.
        let mut block = vec![0.0f32; 2 * 4];
        block[0] = 1.0;
        engine.process_block(&mut block, 2).expect("process");

        // A detour through ILD must not clear the queued history.
        control.set_effect(EffectMode::Ild);
        let mut quiet = vec![0.0f32; 2 * 4];
        engine.process_block(&mut quiet, 2).expect("process");

        control.set_effect(EffectMode::Itd);
        let (expected_delay, _) = engine.ear_delays();
        let mut tail = vec![0.0f32; 2 * expected_delay.max(8)];
        engine.process_block(&mut tail, 2).expect("process");
        let impulse_frame = expected_delay - 4;
        assert_eq!(tail[impulse_frame * 2], 1.0);
    }
}
