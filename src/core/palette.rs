use super::constants::GLYPH_GAMMA;

/// Glyphs ordered from sparsest to densest.
pub const GLYPHS: [char; 8] = ['.', ':', '-', '=', '*', '#', '@', '$'];

/// Map an intensity to a palette index along a power curve.
///
/// The curve spends more steps on low intensities than a linear ramp would.
/// Out-of-range input is clamped to the palette.
#[inline]
pub fn glyph_index(intensity: f64) -> usize {
    let last = GLYPHS.len() - 1;
    let scaled = intensity.max(0.0).powf(GLYPH_GAMMA) * last as f64;
    (scaled.floor() as usize).min(last)
}

#[inline]
pub fn glyph_for(intensity: f64) -> char {
    GLYPHS[glyph_index(intensity)]
}
