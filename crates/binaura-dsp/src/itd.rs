/// Woodworth approximation of the interaural time difference in seconds.
///
/// `t = (r / c) * (|theta| + sin(|theta|))` for a head of radius `r`
/// meters, speed of sound `c` in m/s, and a source azimuth in radians.
#[inline]
pub fn woodworth_delay_seconds(
    head_radius_m: f32,
    speed_of_sound_mps: f32,
    angle_radians: f32,
) -> f32 {
    let theta = angle_radians.abs();
    (head_radius_m / speed_of_sound_mps.max(1.0)) * (theta + theta.sin())
}

/// Converts a delay time to a whole sample count, clamped to `[0, capacity - 1]`
/// so the result is always a valid delay-line offset.
#[inline]
pub fn delay_samples(seconds: f32, sample_rate: f32, capacity: usize) -> usize {
    let samples = (seconds.max(0.0) * sample_rate.max(1.0)).round() as usize;
    samples.min(capacity.saturating_sub(1))
}
