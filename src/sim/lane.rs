//! The three fixed horizontal tracks
//!
//! Lanes map to fixed screen x coordinates: 150, width/2 and width-150.
//! The player and trains carry a lane value that must stay consistent with
//! their rendered x position whenever they are not mid-slide.

use rand::Rng;

use crate::consts::{LANE_EDGE_OFFSET, LANE_TOLERANCE, SCREEN_WIDTH};

/// One of the three tracks the player and trains occupy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lane {
    Left,
    Middle,
    Right,
}

impl Lane {
    /// Fixed screen x coordinate of this lane's center
    pub fn center_x(&self) -> f32 {
        match self {
            Lane::Left => LANE_EDGE_OFFSET,
            Lane::Middle => SCREEN_WIDTH / 2.0,
            Lane::Right => SCREEN_WIDTH - LANE_EDGE_OFFSET,
        }
    }

    /// One lane to the left, clamped (no wraparound)
    pub fn left(&self) -> Lane {
        match self {
            Lane::Left | Lane::Middle => Lane::Left,
            Lane::Right => Lane::Middle,
        }
    }

    /// One lane to the right, clamped (no wraparound)
    pub fn right(&self) -> Lane {
        match self {
            Lane::Left => Lane::Middle,
            Lane::Middle | Lane::Right => Lane::Right,
        }
    }

    /// Classify an x position back to a lane within a small tolerance.
    ///
    /// Defaults to Middle when the position matches no lane center, so a
    /// drifted entity degrades to the safest classification.
    pub fn from_x(x: f32) -> Lane {
        for lane in [Lane::Left, Lane::Middle, Lane::Right] {
            if (x - lane.center_x()).abs() < LANE_TOLERANCE {
                return lane;
            }
        }
        Lane::Middle
    }

    /// Draw a lane uniformly at random
    pub fn random(rng: &mut impl Rng) -> Lane {
        match rng.random_range(0..3) {
            0 => Lane::Left,
            1 => Lane::Middle,
            _ => Lane::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_center_x_mapping() {
        assert_eq!(Lane::Left.center_x(), 150.0);
        assert_eq!(Lane::Middle.center_x(), 400.0);
        assert_eq!(Lane::Right.center_x(), 650.0);
    }

    #[test]
    fn test_moves_clamp_at_edges() {
        assert_eq!(Lane::Left.left(), Lane::Left);
        assert_eq!(Lane::Right.right(), Lane::Right);
        assert_eq!(Lane::Middle.left(), Lane::Left);
        assert_eq!(Lane::Middle.right(), Lane::Right);
    }

    #[test]
    fn test_from_x_classification() {
        assert_eq!(Lane::from_x(150.0), Lane::Left);
        assert_eq!(Lane::from_x(152.0), Lane::Left);
        assert_eq!(Lane::from_x(400.0), Lane::Middle);
        assert_eq!(Lane::from_x(650.0), Lane::Right);
        // Ambiguous positions classify as Middle
        assert_eq!(Lane::from_x(0.0), Lane::Middle);
        assert_eq!(Lane::from_x(300.0), Lane::Middle);
    }

    #[test]
    fn test_random_covers_all_lanes() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..100 {
            match Lane::random(&mut rng) {
                Lane::Left => seen[0] = true,
                Lane::Middle => seen[1] = true,
                Lane::Right => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    proptest! {
        /// Any sequence of left/right moves stays within the three lanes
        /// and the lane's center always classifies back to itself.
        #[test]
        fn prop_moves_never_leave_track(steps in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut lane = Lane::Middle;
            for go_left in steps {
                lane = if go_left { lane.left() } else { lane.right() };
                prop_assert!(matches!(lane, Lane::Left | Lane::Middle | Lane::Right));
                prop_assert_eq!(Lane::from_x(lane.center_x()), lane);
            }
        }
    }
}
