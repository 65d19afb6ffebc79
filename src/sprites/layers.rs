//! Sprites domain: z-layer constants for draw ordering.

pub const Z_FLOOR: f32 = 0.0;
pub const Z_WALLS: f32 = 10.0;
pub const Z_BOMBS: f32 = 20.0;
pub const Z_PLAYER: f32 = 30.0;
pub const Z_EFFECTS: f32 = 40.0;
