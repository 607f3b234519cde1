/// Interaural level difference gains for a source azimuth in degrees.
///
/// Complementary sine law: both ears at 0.5 for a centered source, full
/// left at -90 degrees, full right at +90. Outside that range the gains
/// follow the sine curve and clamp into [0, 1].
#[inline]
pub fn ild_gains(angle_degrees: f32) -> (f32, f32) {
    let intensity = angle_degrees.to_radians().sin();
    (
        clamp01(0.5 - intensity * 0.5),
        clamp01(0.5 + intensity * 0.5),
    )
}

#[inline]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f32 = 1e-6;

    #[test]
    fn centered_source_splits_evenly() {
        let (left, right) = ild_gains(0.0);
        assert_eq!(left, 0.5);
        assert_eq!(right, 0.5);
    }

    #[test]
    fn gains_mirror_for_opposite_angles() {
        for angle in [5.0f32, 30.0, 45.0, 60.0, 89.0] {
            let (l_pos, r_pos) = ild_gains(angle);
            let (l_neg, r_neg) = ild_gains(-angle);
            assert!((l_pos - r_neg).abs() < TOL);
            assert!((r_pos - l_neg).abs() < TOL);
        }
    }

    #[test]
    fn hard_left_and_hard_right_at_ninety_degrees() {
        let (left, right) = ild_gains(90.0);
        assert!(left.abs() < TOL);
        assert!((right - 1.0).abs() < TOL);

        let (left, right) = ild_gains(-90.0);
        assert!((left - 1.0).abs() < TOL);
        assert!(right.abs() < TOL);
    }

    #[test]
    fn gains_sum_to_one_in_linear_region() {
        for angle in [-90.0f32, -45.0, -10.0, 0.0, 10.0, 45.0, 90.0] {
            let (left, right) = ild_gains(angle);
            assert!((left + right - 1.0).abs() < TOL);
        }
    }
}
