//! Shared cyclic arithmetic.
//!
//! Every offset computation over stems (mod 10), branches and palaces
//! (mod 12), Qimen palaces (mod 9) or the sexagenary cycle (mod 60) goes
//! through [`cyclic`] so negative intermediates always land in `[0, modulus)`.

/// Stem cycle length.
pub const STEM_CYCLE: u8 = 10;
/// Branch cycle length.
pub const BRANCH_CYCLE: u8 = 12;
/// Nine-palace cycle length.
pub const NINE_PALACE_CYCLE: u8 = 9;
/// Sexagenary cycle length.
pub const SEXAGENARY_CYCLE: u8 = 60;

/// Normalize `value` into `[0, modulus)`.
///
/// # Panics
/// Panics if `modulus` is zero.
pub const fn cyclic(value: i32, modulus: u8) -> u8 {
    assert!(modulus > 0, "modulus must be positive");
    value.rem_euclid(modulus as i32) as u8
}

/// Shorthand for [`cyclic`] over the 12 branch positions.
pub const fn wrap12(value: i32) -> u8 {
    cyclic(value, BRANCH_CYCLE)
}

/// Shorthand for [`cyclic`] over the 10 stems.
pub const fn wrap10(value: i32) -> u8 {
    cyclic(value, STEM_CYCLE)
}
