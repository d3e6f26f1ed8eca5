//! SolidBehavior - falling granular materials (sand, salt, stone chips)
//!
//! Priority: below -> below-left -> below-right.
//! Only the straight fall may displace (`can_replace`); diagonals need an empty cell.

use super::common::{try_displace, try_move_into_empty};
use super::{Behavior, UpdateContext};

pub struct SolidBehavior;

impl SolidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for SolidBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        try_displace(ctx, 0, 1)
            || try_move_into_empty(ctx, -1, 1)
            || try_move_into_empty(ctx, 1, 1)
    }
}
