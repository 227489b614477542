use serde::Deserialize;

use super::constants::CELL_SIZE;

/// Which box a surface takes its pixel size from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceFit {
    /// Full viewport (`innerWidth` x `innerHeight`).
    Window,
    /// Bounding box of the canvas's parent element.
    #[default]
    Parent,
}

/// Per-mount options passed from the page as a plain JS object.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuroraConfig {
    pub cell_size: u32,
    pub font_family: String,
    pub font_weight: String,
    pub fit: SurfaceFit,
    /// CSS color string; the default green when absent.
    pub color: Option<String>,
}

impl Default for AuroraConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            font_family: "monospace".to_string(),
            font_weight: "bold".to_string(),
            fit: SurfaceFit::default(),
            color: None,
        }
    }
}

impl AuroraConfig {
    /// Canvas font shorthand, e.g. `bold 16px monospace`.
    pub fn font(&self) -> String {
        format!("{} {}px {}", self.font_weight, self.cell_size, self.font_family)
    }
}

/// True while `document.readyState` says the page is still being parsed,
/// i.e. element lookups must wait for `DOMContentLoaded`.
#[inline]
pub fn document_still_loading(ready_state: &str) -> bool {
    ready_state.eq_ignore_ascii_case("loading")
}
