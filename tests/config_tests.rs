// Host-side tests for mount options and the section color table.

mod common;

use common::core::color::Rgb;
use common::core::config::{AuroraConfig, SurfaceFit};
use common::core::sections::{section_color, SECTION_COLORS};

#[test]
fn empty_options_use_defaults() {
    let cfg: AuroraConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, AuroraConfig::default());
    assert_eq!(cfg.cell_size, 16);
    assert_eq!(cfg.fit, SurfaceFit::Parent);
    assert_eq!(cfg.color, None);
    assert_eq!(cfg.font(), "bold 16px monospace");
}

#[test]
fn options_are_camel_case() {
    let cfg: AuroraConfig = serde_json::from_str(
        r#"{ "cellSize": 20, "fontFamily": "Fira Code", "fontWeight": "normal",
             "fit": "window", "color": "rgba(255, 0, 110, 1)" }"#,
    )
    .unwrap();
    assert_eq!(cfg.cell_size, 20);
    assert_eq!(cfg.fit, SurfaceFit::Window);
    assert_eq!(cfg.color.as_deref(), Some("rgba(255, 0, 110, 1)"));
    assert_eq!(cfg.font(), "normal 20px Fira Code");
}

#[test]
fn unknown_fit_is_rejected() {
    let res = serde_json::from_str::<AuroraConfig>(r#"{ "fit": "screen" }"#);
    assert!(res.is_err());
}

#[test]
fn section_colors_match_the_page_tabs() {
    assert_eq!(section_color("about"), Some(Rgb::new(0, 255, 136)));
    assert_eq!(section_color("education"), Some(Rgb::new(6, 182, 212)));
    assert_eq!(section_color("experience"), Some(Rgb::new(139, 92, 246)));
    assert_eq!(section_color("projects"), Some(Rgb::new(255, 0, 110)));
    assert_eq!(section_color("Research"), Some(Rgb::new(255, 105, 180)));
    assert_eq!(section_color("blog"), None);
}

#[test]
fn section_ids_are_unique() {
    for (i, (a, _)) in SECTION_COLORS.iter().enumerate() {
        for (b, _) in &SECTION_COLORS[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn only_a_parsing_document_defers_mounting() {
    use common::core::config::document_still_loading;
    assert!(document_still_loading("loading"));
    assert!(!document_still_loading("interactive"));
    assert!(!document_still_loading("complete"));
    assert!(!document_still_loading(""));
}
