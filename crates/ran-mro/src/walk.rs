//! Bounded random-walk movement kernel.

use ran_core::{Area, Point, UserRng};

/// One walk step: each axis moves by a uniform delta in
/// `±max_move_distance_m / 2`, and the result is clamped onto `area`.
///
/// Both axis deltas are always drawn, even when `max_move_distance_m` is 0,
/// so a user's RNG stream stays aligned across configurations.
pub fn walk_step(position: Point, max_move_distance_m: f64, area: Area, rng: &mut UserRng) -> Point {
    let half = max_move_distance_m / 2.0;
    let dx = rng.gen_range(-half..=half);
    let dy = rng.gen_range(-half..=half);
    area.clamp(Point {
        x: position.x + dx,
        y: position.y + dy,
    })
}
