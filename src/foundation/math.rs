/// Round to the nearest integer, resolving exact halves toward the even neighbour.
///
/// Every pixel value derived from a fraction goes through here so placements stay stable
/// across canvas sizes (`712.5 -> 712`, `713.5 -> 714`).
pub fn round_half_even(v: f64) -> i64 {
    v.round_ties_even() as i64
}

/// [`round_half_even`] clamped into `u32` for image dimensions.
pub(crate) fn round_dim(v: f64) -> u32 {
    round_half_even(v).clamp(0, i64::from(u32::MAX)) as u32
}

/// `x * y / 255`, rounded, for 8-bit channel blending.
pub(crate) fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
