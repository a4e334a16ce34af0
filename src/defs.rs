// src/defs.rs
// Shared primitive type and constants for the lotto generator.

/// A drawable number. The upper bound of the range is user-supplied, so this
/// is wider than the two digits a typical lotto range needs.
pub type Number = u16;

pub const FIRSTNUMBER: Number = 1;

// How many main numbers make up a game; the bonus comes on top of these.
pub const MAIN_COUNT: usize = 6;

// Form defaults, overridable via conf/lottogen.conf or CLI flags.
pub const DEFAULT_GAME_COUNT: u32 = 4;
pub const DEFAULT_MAX_NUMBER: Number = 45;

pub struct WindowStruct {
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
}

pub const WINDOWCONFIG: WindowStruct = WindowStruct {
    width: 520.0, // window width in logical points
    height: 420.0, // window height in logical points
    resizable: false,
};
