// DOM hooks and styling used by the web frontend.

// Full-page canvas mounted automatically at startup when present
pub const AUTO_CANVAS_ID: &str = "aurora-canvas";

// Class given to overlay canvases created inside page sections
pub const SECTION_CANVAS_CLASS: &str = "aurora-canvas";

// Overlay canvas fills its section, behind content and ignoring pointer input
pub const SECTION_CANVAS_STYLE: &str = "position:absolute;top:0;left:0;width:100%;height:100%;z-index:0;pointer-events:none";

// Global hook the page's tab switching calls
pub const SET_COLOR_GLOBAL: &str = "setAuroraColor";
