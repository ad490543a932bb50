use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::Palette;

/// Contour level specification: `count` evenly spaced levels on
/// `[lo, hi]`, matching the discrete bands of a filled contour plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourLevels {
    pub lo: f32,
    pub hi: f32,
    pub count: usize,
}

impl ContourLevels {
    /// # Panics
    /// Panics when `count < 2`; a band needs two bounding levels.
    pub const fn new(lo: f32, hi: f32, count: usize) -> Self {
        assert!(count >= 2, "need at least two contour levels");
        Self { lo, hi, count }
    }

    /// The level values themselves, endpoints included.
    pub fn edges(&self) -> Vec<f32> {
        let step = (self.hi - self.lo) / (self.count - 1) as f32;
        (0..self.count).map(|i| self.lo + step * i as f32).collect()
    }

    /// Discrete band index of a value (`count - 1` bands). NaN and values
    /// outside `[lo, hi]` fall into no band and stay unfilled.
    pub fn band(&self, value: f32) -> Option<usize> {
        if value.is_nan() || value < self.lo || value > self.hi {
            return None;
        }
        let bands = self.count - 1;
        let t = (value - self.lo) / (self.hi - self.lo);
        let band = (t * bands as f32).floor() as usize;
        Some(band.min(bands - 1))
    }

    /// Normalized palette position of a band's center.
    pub fn band_position(&self, band: usize) -> f32 {
        (band as f32 + 0.5) / (self.count - 1) as f32
    }
}

/// Visualization parameters of one renderable field.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub id: &'static str,
    /// Output file name stem for videos and snapshots.
    pub file_stem: &'static str,
    /// Subdirectory of the data root holding this field's dumps.
    pub data_dir: &'static str,
    pub title: &'static str,
    pub cbar_label: &'static str,
    pub levels: ContourLevels,
    pub palette: Palette,
    /// Frame-skip stride outside the dense period.
    pub stride: usize,
    pub fps: u32,
    pub frame_size: (u32, u32),
}

/// Scalar sea-surface fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarField {
    Salinity,
    Temperature,
    HeightAnomaly,
}

impl ScalarField {
    pub const ALL: [ScalarField; 3] = [
        ScalarField::Salinity,
        ScalarField::Temperature,
        ScalarField::HeightAnomaly,
    ];

    pub fn profile(&self) -> &'static Profile {
        match self {
            Self::Salinity => &SALINITY,
            Self::Temperature => &TEMPERATURE,
            Self::HeightAnomaly => &HEIGHT_ANOMALY,
        }
    }
}

impl Display for ScalarField {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.profile().id)
    }
}

impl FromStr for ScalarField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sss" => Ok(Self::Salinity),
            "sst" => Ok(Self::Temperature),
            "ssha" => Ok(Self::HeightAnomaly),
            _ => Err(format!("unknown field `{s}` (expected sss, sst or ssha)")),
        }
    }
}

static SALINITY: Profile = Profile {
    id: "sss",
    file_stem: "sea_surface_salinity",
    data_dir: "sss",
    title: "Indian Ocean Sea Surface Salinity",
    cbar_label: "Sea Surface Salinity",
    levels: ContourLevels::new(22.5, 42.5, 30),
    palette: Palette::GnBu,
    stride: 10,
    fps: 5,
    frame_size: (1600, 960),
};

static TEMPERATURE: Profile = Profile {
    id: "sst",
    file_stem: "sea_surface_temperature",
    data_dir: "sst",
    title: "Indian Ocean Sea Surface Temperature",
    cbar_label: "Sea Surface Temperature",
    levels: ContourLevels::new(14.0, 37.5, 40),
    palette: Palette::AutumnReversed,
    stride: 10,
    fps: 5,
    frame_size: (1600, 960),
};

static HEIGHT_ANOMALY: Profile = Profile {
    id: "ssha",
    file_stem: "sea_surface_height_anomaly",
    data_dir: "ssha",
    title: "Indian Ocean Sea Surface Height Anomaly",
    cbar_label: "Sea Surface Height Anomaly",
    levels: ContourLevels::new(-0.6, 0.6, 70),
    palette: Palette::CoolwarmReversed,
    stride: 10,
    fps: 5,
    frame_size: (1600, 960),
};

/// Magnitude profile shared by all current visualization modes.
pub static CURRENTS: Profile = Profile {
    id: "currents",
    file_stem: "zonal_meridian_currents",
    data_dir: "zonal-current",
    title: "Currents (zonal and meridional) at depth = 5 in Indian Ocean",
    cbar_label: "Zonal and Meridional Currents magnitude",
    levels: ContourLevels::new(0.0, 2.8, 30),
    palette: Palette::Magma,
    stride: 4,
    fps: 12,
    frame_size: (1280, 640),
};

/// Subdirectory of the data root holding meridional current dumps.
pub const MERIDIONAL_DATA_DIR: &str = "meridional-current";

/// How a current field is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorMode {
    /// Arrows from the (u, v) components.
    Quiver,
    /// Filled contours of `sqrt(u² + v²)`.
    Magnitude,
    /// Both overlaid.
    Both,
}

impl VectorMode {
    pub const ALL: [VectorMode; 3] = [
        VectorMode::Quiver,
        VectorMode::Magnitude,
        VectorMode::Both,
    ];

    /// Short tag used in output file names.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Quiver => "q",
            Self::Magnitude => "m",
            Self::Both => "both",
        }
    }

    /// Output file name stem for this mode.
    pub fn file_stem(&self) -> String {
        format!("zonal_meridian_{}_currents", self.tag())
    }
}

impl Display for VectorMode {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let name = match self {
            Self::Quiver => "quiver",
            Self::Magnitude => "magnitude",
            Self::Both => "both",
        };
        write!(f, "{name}")
    }
}

impl FromStr for VectorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quiver" | "q" => Ok(Self::Quiver),
            "magnitude" | "m" => Ok(Self::Magnitude),
            "both" => Ok(Self::Both),
            _ => Err(format!(
                "unknown mode `{s}` (expected quiver, magnitude or both)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_edges_are_inclusive_and_evenly_spaced() {
        let levels = ContourLevels::new(0.0, 2.8, 30);
        let edges = levels.edges();
        assert_eq!(edges.len(), 30);
        assert_eq!(edges[0], 0.0);
        assert!((edges[29] - 2.8).abs() < 1e-6);
        let d0 = edges[1] - edges[0];
        let d1 = edges[29] - edges[28];
        assert!((d0 - d1).abs() < 1e-5);
    }

    #[test]
    #[should_panic(expected = "at least two contour levels")]
    fn too_few_levels_are_rejected() {
        ContourLevels::new(0.0, 1.0, 1);
    }

    #[test]
    fn band_excludes_out_of_range_values() {
        let levels = ContourLevels::new(0.0, 1.0, 11);
        assert_eq!(levels.band(-5.0), None);
        assert_eq!(levels.band(5.0), None);
        assert_eq!(levels.band(0.0), Some(0));
        assert_eq!(levels.band(1.0), Some(9));
        assert_eq!(levels.band(0.55), Some(5));
        assert_eq!(levels.band(f32::NAN), None);
    }

    macro_rules! test_field_parsing {
        ($(($name:ident, $input:expr, $expected:expr),)*) => ($(
            #[test]
            fn $name() {
                assert_eq!($input.parse::<ScalarField>(), $expected);
            }
        )*);
    }

    test_field_parsing! {
        (field_id_sss_parses, "sss", Ok(ScalarField::Salinity)),
        (field_id_sst_parses, "sst", Ok(ScalarField::Temperature)),
        (field_id_ssha_parses, "ssha", Ok(ScalarField::HeightAnomaly)),
        (
            field_id_other_is_rejected,
            "sla",
            Err("unknown field `sla` (expected sss, sst or ssha)".to_owned())
        ),
    }

    #[test]
    fn mode_tags_name_output_files() {
        assert_eq!(
            VectorMode::Quiver.file_stem(),
            "zonal_meridian_q_currents"
        );
        assert_eq!(
            VectorMode::Both.file_stem(),
            "zonal_meridian_both_currents"
        );
    }

    #[test]
    fn mode_accepts_short_and_long_spellings() {
        assert_eq!("q".parse::<VectorMode>(), Ok(VectorMode::Quiver));
        assert_eq!("magnitude".parse::<VectorMode>(), Ok(VectorMode::Magnitude));
        assert!("contour".parse::<VectorMode>().is_err());
    }
}
