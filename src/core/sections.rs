use super::color::Rgb;

// Aurora color per page section
pub const SECTION_COLORS: [(&str, Rgb); 8] = [
    ("home", Rgb::new(0, 255, 136)),
    ("about", Rgb::new(0, 255, 136)),
    ("education", Rgb::new(6, 182, 212)),
    ("experience", Rgb::new(139, 92, 246)),
    ("projects", Rgb::new(255, 0, 110)),
    ("research", Rgb::new(255, 105, 180)),
    ("skills", Rgb::new(6, 182, 212)),
    ("contact", Rgb::new(0, 255, 136)),
];

#[inline]
pub fn section_color(name: &str) -> Option<Rgb> {
    SECTION_COLORS
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}
