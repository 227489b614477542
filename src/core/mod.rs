pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod field;
pub mod palette;
pub mod sections;

pub use clock::WaveClock;
pub use color::{Band, ColorParseError, Paint, Rgb};
pub use config::{document_still_loading, AuroraConfig, SurfaceFit};
pub use field::{GlyphCell, GlyphFieldRenderer, GlyphSink, GridDims};
pub use sections::section_color;
