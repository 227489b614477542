// The main crate is wasm-only, so the pure-Rust core modules are included directly.
#![allow(dead_code)]

pub mod core {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod clock {
        include!("../../src/core/clock.rs");
    }
    pub mod palette {
        include!("../../src/core/palette.rs");
    }
    pub mod color {
        include!("../../src/core/color.rs");
    }
    pub mod field {
        include!("../../src/core/field.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod sections {
        include!("../../src/core/sections.rs");
    }
}
