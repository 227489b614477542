// Aurora field tuning constants: grid pitch, wave shapes, brightness shaping
// and the intensity bands used for glyph color/alpha.

// Grid pitch in CSS pixels; also the glyph font size
pub const CELL_SIZE: u32 = 16;

// Phase advance per second of wall-clock time
pub const PHASE_RATE: f64 = 1.2;

// Wave crests oscillate around this fraction of the grid height
pub const WAVE_CENTER: f64 = 0.5;
// Per-row falloff of a crest's contribution (zero 50 rows away)
pub const WAVE_FALLOFF: f64 = 0.02;

// (angular frequency over the column ratio, amplitude as grid fraction, phase speed)
pub const WAVE_PARAMS: [(f64, f64, f64); 3] = [
    (4.0 * std::f64::consts::PI, 0.35, 1.0),
    (3.0 * std::f64::consts::PI, 0.30, 0.7),
    (5.0 * std::f64::consts::PI, 0.25, 1.3),
];

// How much the vertical edges are dimmed relative to the center line
pub const CENTER_GRADIENT_STRENGTH: f64 = 0.7;

// Deterministic per-cell texture: BASE + ((row*ROW_MUL + col*COL_MUL) % MODULUS) * STEP
pub const DITHER_BASE: f64 = 0.85;
pub const DITHER_STEP: f64 = 0.0015015015;
pub const DITHER_ROW_MUL: u64 = 7;
pub const DITHER_COL_MUL: u64 = 13;
pub const DITHER_MODULUS: u64 = 100;

// Cells at or below this intensity are left empty
pub const SPARSITY_THRESHOLD: f64 = 0.05;

// Exponent of the intensity -> glyph index curve
pub const GLYPH_GAMMA: f64 = 0.7;

// Lower edges of the intensity bands (exclusive)
pub const BAND_BLAZE_EDGE: f64 = 0.8;
pub const BAND_GLOW_EDGE: f64 = 0.65;
pub const BAND_BRIGHT_EDGE: f64 = 0.5;
pub const BAND_MEDIUM_EDGE: f64 = 0.25;

// Alpha = intensity * scale
pub const ALPHA_SCALE_HIGH: f64 = 0.2;
pub const ALPHA_SCALE_MEDIUM: f64 = 0.16;
pub const ALPHA_SCALE_DIM: f64 = 0.1;

// Maximum blend toward white in the two brightest bands
pub const BLAZE_WHITE_BLEND: f64 = 0.9;
pub const GLOW_WHITE_BLEND: f64 = 0.4;
// Normalizers taking band-relative intensity to 0..1
pub const BLAZE_BLEND_GAIN: f64 = 5.0; // 1 / (1 - BAND_BLAZE_EDGE)
pub const GLOW_BLEND_SPAN: f64 = 0.15; // BAND_BLAZE_EDGE - BAND_GLOW_EDGE

// Initial color when the page does not pass one (green)
pub const DEFAULT_COLOR: [u8; 3] = [0, 255, 136];
