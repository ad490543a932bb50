//! Color scales for filled contour rendering.
//!
//! Each palette is a small anchor table sampled with linear interpolation,
//! covering the scales the field profiles ask for.

/// A named color scale sampled on `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    /// Green to blue, light to dark (salinity).
    GnBu,
    /// Yellow to red (temperature).
    AutumnReversed,
    /// Red through white to blue (height anomaly).
    CoolwarmReversed,
    /// Black through purple to light yellow (current magnitude).
    Magma,
}

impl Palette {
    /// RGB color at position `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f32) -> [u8; 3] {
        let anchors: &[[u8; 3]] = match self {
            Self::GnBu => &GN_BU,
            Self::AutumnReversed => &AUTUMN_REV,
            Self::CoolwarmReversed => &COOLWARM_REV,
            Self::Magma => &MAGMA,
        };
        let t = t.clamp(0.0, 1.0);
        let scaled = t * (anchors.len() - 1) as f32;
        let index = (scaled.floor() as usize).min(anchors.len() - 2);
        let frac = scaled - index as f32;
        let lo = anchors[index];
        let hi = anchors[index + 1];
        [
            lerp(lo[0], hi[0], frac),
            lerp(lo[1], hi[1], frac),
            lerp(lo[2], hi[2], frac),
        ]
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * t).round() as u8
}

const GN_BU: [[u8; 3]; 9] = [
    [247, 252, 240],
    [224, 243, 219],
    [204, 235, 197],
    [168, 221, 181],
    [123, 204, 196],
    [78, 179, 211],
    [43, 140, 190],
    [8, 104, 172],
    [8, 64, 129],
];

const AUTUMN_REV: [[u8; 3]; 2] = [[255, 255, 0], [255, 0, 0]];

const COOLWARM_REV: [[u8; 3]; 5] = [
    [180, 4, 38],
    [244, 154, 123],
    [221, 221, 221],
    [146, 181, 253],
    [59, 76, 192],
];

const MAGMA: [[u8; 3]; 9] = [
    [0, 0, 4],
    [28, 16, 68],
    [79, 18, 123],
    [129, 37, 129],
    [181, 54, 122],
    [229, 80, 100],
    [251, 135, 97],
    [254, 194, 135],
    [252, 253, 191],
];
