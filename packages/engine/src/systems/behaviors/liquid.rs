//! LiquidBehavior - falls like a solid, then spreads sideways
//!
//! Priority: below -> below-left -> below-right -> left -> right.
//! Left always wins over right, so a lone drop on a flat floor drifts left.

use super::common::{try_displace, try_move_into_empty};
use super::{Behavior, UpdateContext};

pub struct LiquidBehavior;

impl LiquidBehavior {
    pub fn new() -> Self {
        Self
    }
}

impl Behavior for LiquidBehavior {
    fn update(&self, ctx: &mut UpdateContext) -> bool {
        try_displace(ctx, 0, 1)
            || try_move_into_empty(ctx, -1, 1)
            || try_move_into_empty(ctx, 1, 1)
            || try_move_into_empty(ctx, -1, 0)
            || try_move_into_empty(ctx, 1, 0)
    }
}
