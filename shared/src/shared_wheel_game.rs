use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{DEGREES_PER_TURN, FULL_SPINS, SPIN_DURATION_MS};

/// Everything the animator needs for one spin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub index: usize,
    pub rotation: f64,
    pub duration_ms: u32,
}

/// Uniform pick over `[0, n)`. `None` when there is nothing to pick from.
pub fn pick_winner<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    Some(rng.gen_range(0..n))
}

pub fn segment_angle(n: usize) -> f64 {
    DEGREES_PER_TURN / n as f64
}

/// Rotation that puts the middle of segment `index` under the pointer at the
/// top, with segments laid out clockwise from 0°.
pub fn target_offset(index: usize, n: usize) -> f64 {
    let segment = segment_angle(n);
    DEGREES_PER_TURN - index as f64 * segment - segment / 2.0
}

/// Next cumulative rotation. Drops the partial turn, adds the full spins and
/// the target offset, so the wheel only ever turns forward.
pub fn next_rotation(current: f64, index: usize, n: usize) -> f64 {
    current - current.rem_euclid(DEGREES_PER_TURN) + DEGREES_PER_TURN * FULL_SPINS + target_offset(index, n)
}

/// Index of the segment under the pointer when the wheel rests at `rotation`.
pub fn segment_at_pointer(rotation: f64, n: usize) -> Option<usize> {
    if n == 0 {
        return None;
    }
    // The pointer sits at the wheel-local angle that was rotated up to 0°.
    let local = (DEGREES_PER_TURN - rotation.rem_euclid(DEGREES_PER_TURN)).rem_euclid(DEGREES_PER_TURN);
    let index = (local / segment_angle(n)).floor() as usize;
    Some(index.min(n - 1))
}

pub fn plan_spin<R: Rng + ?Sized>(rng: &mut R, n: usize, current_rotation: f64) -> Option<SpinPlan> {
    let index = pick_winner(rng, n)?;
    Some(SpinPlan {
        index,
        rotation: next_rotation(current_rotation, index, n),
        duration_ms: SPIN_DURATION_MS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_target_offset_for_eight_segments() {
        assert_eq!(segment_angle(8), 45.0);
        assert_eq!(target_offset(0, 8), 337.5);
        assert_eq!(target_offset(4, 8), 157.5);
        assert_eq!(target_offset(7, 8), 22.5);
    }

    #[test]
    fn test_pick_winner_is_uniform() {
        let mut rng = StdRng::seed_from_u64(7);
        let n = 6;
        let draws = 60_000;
        let mut counts = vec![0usize; n];
        for _ in 0..draws {
            counts[pick_winner(&mut rng, n).unwrap()] += 1;
        }
        let expected = draws as f64 / n as f64;
        for (index, count) in counts.iter().enumerate() {
            let deviation = (*count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "index {} drawn {} times", index, count);
        }
    }

    #[test]
    fn test_pick_winner_guards_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_winner(&mut rng, 0), None);
        assert_eq!(pick_winner(&mut rng, 1), Some(0));
        assert!(plan_spin(&mut rng, 0, 0.0).is_none());
    }

    #[test]
    fn test_rotation_never_goes_backward() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut rotation = 0.0;
        for _ in 0..500 {
            let n = rng.gen_range(2..=12);
            let plan = plan_spin(&mut rng, n, rotation).unwrap();
            assert!(plan.rotation >= rotation);
            assert!(plan.rotation - rotation >= DEGREES_PER_TURN * (FULL_SPINS - 1.0));
            rotation = plan.rotation;
        }
    }

    #[test]
    fn test_next_rotation_matches_formula() {
        let current = 2137.5;
        let expected = current - (current % 360.0) + 360.0 * 5.0 + 157.5;
        assert_eq!(next_rotation(current, 4, 8), expected);
    }

    #[test]
    fn test_pointer_lands_on_picked_segment() {
        for n in 2..=12 {
            let mut rotation = 123.0;
            for index in 0..n {
                rotation = next_rotation(rotation, index, n);
                assert_eq!(segment_at_pointer(rotation, n), Some(index), "n={} index={}", n, index);
            }
        }
    }

    #[test]
    fn test_half_segment_shift_points_elsewhere() {
        // Dropping the half-segment term parks the pointer on a boundary.
        let n = 8;
        let wrong = DEGREES_PER_TURN * FULL_SPINS + DEGREES_PER_TURN - 2.0 * segment_angle(n) + 0.1;
        assert_ne!(segment_at_pointer(wrong, n), Some(2));
    }
}
