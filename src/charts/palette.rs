use plotters::style::RGBColor;

/// Histogram bars and density line
pub const HISTOGRAM: RGBColor = RGBColor(255, 165, 0);

/// Qualitative palette for pie slices
pub const SET2: [RGBColor; 8] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
    RGBColor(166, 216, 84),
    RGBColor(255, 217, 47),
    RGBColor(229, 196, 148),
    RGBColor(179, 179, 179),
];

/// Soft palette for categorical bars
pub const PASTEL: [RGBColor; 8] = [
    RGBColor(161, 201, 244),
    RGBColor(255, 180, 130),
    RGBColor(141, 229, 161),
    RGBColor(255, 159, 155),
    RGBColor(208, 187, 255),
    RGBColor(222, 187, 155),
    RGBColor(250, 176, 228),
    RGBColor(207, 207, 207),
];

/// Darker palette for violins
pub const MUTED: [RGBColor; 6] = [
    RGBColor(72, 120, 208),
    RGBColor(238, 133, 74),
    RGBColor(106, 204, 100),
    RGBColor(214, 95, 95),
    RGBColor(149, 108, 180),
    RGBColor(140, 97, 60),
];

/// Cycle through a palette
pub fn pick(palette: &[RGBColor], index: usize) -> RGBColor {
    palette[index % palette.len()]
}
