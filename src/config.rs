use log::Level;

/// Vertical offset, in CSS pixels, past which the header switches to its compact look.
pub const SCROLL_THRESHOLD: f64 = 20.0;

/// How long the mobile menu stays mounted after closing. Keep in sync with
/// the `menuOut` animation in the landing page stylesheet.
pub const MENU_EXIT_MS: u32 = 250;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
