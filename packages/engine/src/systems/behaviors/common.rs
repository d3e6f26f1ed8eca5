use serde::Serialize;

use crate::materials::MaterialId;
use crate::simulation::MovePolicy;

use super::UpdateContext;

/// A mover displaced a non-empty neighbor this tick.
///
/// `(x, y)` is the cell the mover ended up in. `sound` is the cue the mover's
/// `contact_sounds` names for the target, if any; playback belongs to the host.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactEvent {
    pub x: u32,
    pub y: u32,
    pub mover: MaterialId,
    pub target: MaterialId,
    pub sound: Option<String>,
}

/// Move into `(x+dx, y+dy)` if that cell exists and is strictly empty
#[inline]
pub(super) fn try_move_into_empty(ctx: &mut UpdateContext, dx: i32, dy: i32) -> bool {
    let tx = ctx.x as i32 + dx;
    let ty = ctx.y as i32 + dy;
    let Some(target_idx) = ctx.grid.index_checked(tx, ty) else {
        return false;
    };
    if !ctx.grid.is_empty_idx(target_idx) {
        return false;
    }

    finish_move(ctx, target_idx);
    true
}

/// Move into `(x+dx, y+dy)` if it is empty, or if the mover's `can_replace`
/// set holds the target's identity. On a non-empty target the mover takes its
/// contact color before the swap, so the color travels with it.
#[inline]
pub(super) fn try_displace(ctx: &mut UpdateContext, dx: i32, dy: i32) -> bool {
    let tx = ctx.x as i32 + dx;
    let ty = ctx.y as i32 + dy;
    let Some(target_idx) = ctx.grid.index_checked(tx, ty) else {
        return false;
    };

    if ctx.grid.is_empty_idx(target_idx) {
        finish_move(ctx, target_idx);
        return true;
    }

    let src_idx = ctx.grid.index(ctx.x, ctx.y);
    let target: MaterialId = ctx.grid.ids[target_idx];
    let rules = &ctx.grid.rules[src_idx];
    if !rules.can_replace(target) {
        return false;
    }

    let color = rules.contact_color(target).unwrap_or(ctx.fallback_color);
    let sound = rules.contact_sound(target).map(str::to_string);
    let mover = ctx.grid.ids[src_idx];
    ctx.grid.set_color_idx(src_idx, color);

    finish_move(ctx, target_idx);

    ctx.contacts.push(ContactEvent {
        x: tx as u32,
        y: ty as u32,
        mover,
        target,
        sound,
    });
    true
}

#[inline]
fn finish_move(ctx: &mut UpdateContext, target_idx: usize) {
    let src_idx = ctx.grid.index(ctx.x, ctx.y);
    ctx.grid.swap_idx(src_idx, target_idx);
    if ctx.policy == MovePolicy::SingleMove {
        ctx.grid.set_updated_idx(target_idx, true);
    }
}
