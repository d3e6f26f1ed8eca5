//! GasBehavior - random walk
//!
//! Each tick the four orthogonal neighbors are shuffled and tried in that
//! order; the first eligible one (empty, or listed in `can_replace`) wins.

use rand::seq::SliceRandom;

use super::common::try_displace;
use super::{Behavior, UpdateContext};

/// Neighbor directions
const DIRECTIONS: [(i32, i32); 4] = [
    (0, -1), // Up
    (-1, 0), // Left
    (1, 0),  // Right
    (0, 1),  // Down
];

pub struct GasBehavior;

impl GasBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for GasBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        let mut order = DIRECTIONS;
        order.shuffle(&mut *ctx.rng);

        for (dx, dy) in order {
            if try_displace(ctx, dx, dy) {
                return true;
            }
        }
        false
    }
}
