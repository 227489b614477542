use super::color::{Paint, Rgb};
use super::constants::*;
use super::palette::glyph_for;

/// Character grid derived from a surface size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridDims {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub rows: u32,
    pub cols: u32,
}

impl GridDims {
    pub fn from_surface(width: u32, height: u32, cell_size: u32) -> Self {
        let (rows, cols) = if cell_size == 0 {
            (0, 0)
        } else {
            (height / cell_size, width / cell_size)
        };
        Self {
            width,
            height,
            cell_size,
            rows,
            cols,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Pixel position of the glyph baseline for a cell.
    #[inline]
    pub fn cell_origin(&self, row: u32, col: u32) -> (f64, f64) {
        let cs = self.cell_size as f64;
        (col as f64 * cs, row as f64 * cs + cs)
    }
}

/// One travelling sine crest across the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub frequency: f64,
    pub amplitude: f64,
    pub speed: f64,
}

pub const WAVES: [Wave; 3] = [
    Wave::from_params(WAVE_PARAMS[0]),
    Wave::from_params(WAVE_PARAMS[1]),
    Wave::from_params(WAVE_PARAMS[2]),
];

impl Wave {
    const fn from_params((frequency, amplitude, speed): (f64, f64, f64)) -> Self {
        Self {
            frequency,
            amplitude,
            speed,
        }
    }

    /// Fractional row the crest sits on at `col_ratio` (0..1 across the grid).
    #[inline]
    pub fn target_row(&self, col_ratio: f64, phase: f64, rows: u32) -> f64 {
        let angle = col_ratio * self.frequency + phase * self.speed;
        (angle.sin() * self.amplitude + WAVE_CENTER) * rows as f64
    }

    /// Triangular falloff around the crest, 1 at the crest and 0 far away.
    #[inline]
    pub fn contribution(row: u32, target_row: f64) -> f64 {
        (1.0 - (row as f64 - target_row).abs() * WAVE_FALLOFF).max(0.0)
    }
}

/// Vertical brightness falloff: 1 on the center line, dimmer toward the edges.
#[inline]
pub fn center_gradient(pixel_y: f64, height: u32) -> f64 {
    let half = height as f64 / 2.0;
    if half <= 0.0 {
        return 0.0;
    }
    1.0 - ((pixel_y - half).abs() / half) * CENTER_GRADIENT_STRENGTH
}

/// Fixed per-cell texture factor in `[DITHER_BASE, DITHER_BASE + 99 * DITHER_STEP]`.
#[inline]
pub fn dither(row: u32, col: u32) -> f64 {
    let n = (row as u64 * DITHER_ROW_MUL + col as u64 * DITHER_COL_MUL) % DITHER_MODULUS;
    DITHER_BASE + n as f64 * DITHER_STEP
}

/// Strongest crest contribution at a cell. Crests are not summed.
#[inline]
pub fn wave_intensity(dims: &GridDims, row: u32, col: u32, phase: f64) -> f64 {
    if dims.cols == 0 {
        return 0.0;
    }
    let col_ratio = col as f64 / dims.cols as f64;
    WAVES
        .iter()
        .map(|w| Wave::contribution(row, w.target_row(col_ratio, phase, dims.rows)))
        .fold(0.0, f64::max)
}

pub fn cell_intensity(dims: &GridDims, row: u32, col: u32, phase: f64) -> f64 {
    let (_, y) = dims.cell_origin(row, col);
    wave_intensity(dims, row, col, phase) * center_gradient(y, dims.height) * dither(row, col)
}

/// A lit cell ready to be drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphCell {
    pub row: u32,
    pub col: u32,
    pub x: f64,
    pub y: f64,
    pub intensity: f64,
    pub glyph: char,
    pub paint: Paint,
}

/// Drawing target for a computed frame.
pub trait GlyphSink {
    /// Clear the `width` x `height` surface before the first glyph.
    fn begin_frame(&mut self, width: u32, height: u32);
    fn paint(&mut self, cell: &GlyphCell);
}

/// Per-surface aurora renderer.
///
/// Holds the grid derived from the last resize and the base color; the phase
/// comes from the shared [`super::clock::WaveClock`] at render time.
#[derive(Clone, Debug)]
pub struct GlyphFieldRenderer {
    dims: GridDims,
    color: Rgb,
    cells: Vec<GlyphCell>,
}

impl GlyphFieldRenderer {
    pub fn new(color: Rgb) -> Self {
        Self::with_cell_size(color, CELL_SIZE)
    }

    pub fn with_cell_size(color: Rgb, cell_size: u32) -> Self {
        Self {
            dims: GridDims::from_surface(0, 0, cell_size),
            color,
            cells: Vec::new(),
        }
    }

    /// Takes effect on the next frame.
    pub fn set_color(&mut self, r: u8, g: u8, b: u8) {
        self.color = Rgb::new(r, g, b);
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let dims = GridDims::from_surface(width, height, self.dims.cell_size);
        if dims != self.dims {
            log::debug!(
                "[aurora] surface {}x{} -> {} rows x {} cols",
                width,
                height,
                dims.rows,
                dims.cols
            );
        }
        self.dims = dims;
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.dims.cols
    }

    /// Compute the lit cells for `phase`, row-major.
    pub fn compute(&mut self, phase: f64) -> &[GlyphCell] {
        let dims = self.dims;
        self.cells.clear();
        for row in 0..dims.rows {
            for col in 0..dims.cols {
                let intensity = cell_intensity(&dims, row, col, phase);
                let Some(paint) = Paint::for_intensity(self.color, intensity) else {
                    continue;
                };
                let (x, y) = dims.cell_origin(row, col);
                self.cells.push(GlyphCell {
                    row,
                    col,
                    x,
                    y,
                    intensity,
                    glyph: glyph_for(intensity),
                    paint,
                });
            }
        }
        &self.cells
    }

    /// Clear `sink` and paint one frame.
    pub fn render<S: GlyphSink>(&mut self, phase: f64, sink: &mut S) {
        let dims = self.dims;
        sink.begin_frame(dims.width, dims.height);
        for cell in self.compute(phase) {
            sink.paint(cell);
        }
    }
}
