// Host-side tests for color parsing, intensity bands and glyph paint.

mod common;

use common::core::color::*;
use common::core::palette::{glyph_for, glyph_index, GLYPHS};

#[test]
fn parses_css_rgb_and_rgba() {
    assert_eq!(Rgb::parse("rgba(0, 255, 136, 1)"), Ok(Rgb::new(0, 255, 136)));
    assert_eq!(Rgb::parse("rgb(255,0,110)"), Ok(Rgb::new(255, 0, 110)));
    assert_eq!(Rgb::parse("  RGB( 6 , 182 , 212 ) "), Ok(Rgb::new(6, 182, 212)));
    assert_eq!(Rgb::parse("rgba(139, 92, 246, 0.5)"), Ok(Rgb::new(139, 92, 246)));
}

#[test]
fn parses_hex_colors() {
    assert_eq!(Rgb::parse("#8b5cf6"), Ok(Rgb::new(139, 92, 246)));
    assert_eq!(Rgb::parse("#FF69B4"), Ok(Rgb::new(255, 105, 180)));
    assert_eq!(Rgb::parse("#fff"), Ok(Rgb::WHITE));
}

#[test]
fn rejects_malformed_colors() {
    assert!(matches!(Rgb::parse("red"), Err(ColorParseError::Unrecognized(_))));
    assert!(matches!(Rgb::parse("rgb(1, 2)"), Err(ColorParseError::Unrecognized(_))));
    assert!(matches!(Rgb::parse("#12345"), Err(ColorParseError::Unrecognized(_))));
    assert!(matches!(Rgb::parse("rgb(1, 2, 3"), Err(ColorParseError::Unrecognized(_))));
    assert_eq!(
        Rgb::parse("rgb(256, 0, 0)"),
        Err(ColorParseError::ChannelOutOfRange(256))
    );
    assert!(matches!(
        Rgb::parse("rgb(x, 0, 0)"),
        Err(ColorParseError::InvalidChannel(_))
    ));
    assert!(matches!(
        Rgb::parse("rgb(-1, 0, 0)"),
        Err(ColorParseError::InvalidChannel(_))
    ));
}

#[test]
fn default_color_is_green_and_displays_as_css() {
    let c = Rgb::default();
    assert_eq!(c, Rgb::new(0, 255, 136));
    assert_eq!(c.to_string(), "rgb(0, 255, 136)");
}

#[test]
fn toward_white_interpolates_and_rounds() {
    let base = Rgb::new(0, 100, 255);
    assert_eq!(base.toward_white(0.0), base);
    assert_eq!(base.toward_white(1.0), Rgb::WHITE);
    // 0 + 255 * 0.5 = 127.5 rounds up
    assert_eq!(base.toward_white(0.5), Rgb::new(128, 178, 255));
}

#[test]
fn band_edges_are_exclusive_lower_bounds() {
    assert_eq!(Band::classify(0.05), None);
    assert_eq!(Band::classify(0.0), None);
    assert_eq!(Band::classify(-0.3), None);
    assert_eq!(Band::classify(0.0501), Some(Band::Dim));
    assert_eq!(Band::classify(0.25), Some(Band::Dim));
    assert_eq!(Band::classify(0.2501), Some(Band::Medium));
    assert_eq!(Band::classify(0.5), Some(Band::Medium));
    assert_eq!(Band::classify(0.5001), Some(Band::Bright));
    assert_eq!(Band::classify(0.65), Some(Band::Bright));
    assert_eq!(Band::classify(0.6501), Some(Band::Glow));
    assert_eq!(Band::classify(0.8), Some(Band::Glow));
    assert_eq!(Band::classify(0.8001), Some(Band::Blaze));
    assert_eq!(Band::classify(1.0), Some(Band::Blaze));
}

#[test]
fn every_visible_intensity_lands_in_one_band() {
    for i in 0..=10_000 {
        let intensity = 0.05 + (i as f64 + 1.0) * (0.95 / 10_001.0);
        let band = Band::classify(intensity).expect("visible intensity must have a band");
        let matches = [
            intensity > 0.8,
            intensity > 0.65 && intensity <= 0.8,
            intensity > 0.5 && intensity <= 0.65,
            intensity > 0.25 && intensity <= 0.5,
            intensity > 0.05 && intensity <= 0.25,
        ];
        assert_eq!(matches.iter().filter(|m| **m).count(), 1);
        let expected = [Band::Blaze, Band::Glow, Band::Bright, Band::Medium, Band::Dim]
            [matches.iter().position(|m| *m).unwrap()];
        assert_eq!(band, expected, "intensity {intensity}");
    }
}

#[test]
fn paint_alpha_follows_band_scale() {
    let base = Rgb::new(10, 20, 30);
    let dim = Paint::for_intensity(base, 0.1).unwrap();
    assert_eq!(dim.color, base);
    assert!((dim.alpha - 0.01).abs() < 1e-12);

    let medium = Paint::for_intensity(base, 0.4).unwrap();
    assert_eq!(medium.color, base);
    assert!((medium.alpha - 0.064).abs() < 1e-12);

    let bright = Paint::for_intensity(base, 0.6).unwrap();
    assert_eq!(bright.color, base);
    assert!((bright.alpha - 0.12).abs() < 1e-12);

    assert_eq!(Paint::for_intensity(base, 0.05), None);
}

#[test]
fn bright_bands_shift_toward_white() {
    let base = Rgb::new(255, 0, 110);

    // Just into the glow band: almost no lift
    let glow_low = Paint::for_intensity(base, 0.6501).unwrap();
    assert_eq!(glow_low.color, base);

    // Top of the glow band: 40% of the way to white
    let glow_top = Paint::for_intensity(base, 0.8).unwrap();
    assert_eq!(glow_top.color, Rgb::new(255, 102, 168));
    assert!((glow_top.alpha - 0.16).abs() < 1e-12);

    // Full intensity: 90% of the way to white
    let blaze = Paint::for_intensity(base, 1.0).unwrap();
    assert_eq!(blaze.color.r, 255);
    assert!((229..=230).contains(&blaze.color.g));
    assert!((240..=241).contains(&blaze.color.b));
    assert!((blaze.alpha - 0.2).abs() < 1e-12);
}

#[test]
fn paint_renders_fill_style() {
    let p = Paint {
        color: Rgb::new(1, 2, 3),
        alpha: 0.5,
    };
    assert_eq!(p.css(), "rgba(1, 2, 3, 0.5)");
}

#[test]
fn glyph_index_stays_in_palette() {
    let mut prev = 0;
    for i in 1..=1000 {
        let intensity = 0.05 + i as f64 * 0.00095;
        let idx = glyph_index(intensity);
        assert!(idx < GLYPHS.len());
        assert!(idx >= prev, "glyph index must not decrease");
        prev = idx;
    }
    assert_eq!(glyph_for(1.0), '$');
    assert_eq!(glyph_for(0.06), '.');
    assert_eq!(glyph_index(7.5), GLYPHS.len() - 1);
}

#[test]
fn glyph_curve_favors_low_intensities() {
    // Linear mapping of 0.3 would give index 2; the power curve gives 3
    assert_eq!(glyph_index(0.3), 3);
    assert_eq!(glyph_for(0.3), '=');
}
