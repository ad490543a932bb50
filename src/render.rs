//! Map rendering of reconstructed grids.
//!
//! Frames are drawn with `plotters` into a plain RGB24 buffer so the same
//! pixels can be PNG-encoded for snapshots and piped to the video encoder
//! without a round trip through an image container.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::FontTransform;

use crate::{Grid, Profile, RenderError, VectorMode, CURRENTS};

/// Width in pixels reserved for the colorbar on the right edge.
const COLORBAR_AREA_WIDTH: u32 = 140;

/// Quiver scale: a current of 1 spans `1/QUIVER_SCALE` of the map width.
const QUIVER_SCALE: f64 = 150.0;

/// An RGB24 frame buffer of fixed dimensions.
pub struct Frame {
    width: u32,
    height: u32,
    buf: Vec<u8>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buf: vec![255; width as usize * height as usize * 3],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB24 pixel data, row-major.
    pub fn rgb(&self) -> &[u8] {
        &self.buf
    }

    /// Encodes the frame as a PNG file.
    pub fn write_png<P>(&self, path: P) -> Result<(), RenderError>
    where
        P: AsRef<Path>,
    {
        let f = File::create(path)?;
        let mut encoder = png::Encoder::new(BufWriter::new(f), self.width, self.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.buf)?;
        writer.finish()?;
        Ok(())
    }
}

/// Renders a scalar field as a filled contour map with a colorbar.
pub fn render_scalar(
    frame: &mut Frame,
    grid: &Grid,
    profile: &Profile,
    date: &str,
) -> Result<(), RenderError> {
    let (width, height) = (frame.width, frame.height);
    let root = BitMapBackend::with_buffer(&mut frame.buf, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let (map_area, bar_area) = root.split_horizontally(width - COLORBAR_AREA_WIDTH);
    draw_map(&map_area, Some(grid), None, profile, date)?;
    draw_colorbar(&bar_area, profile)?;

    root.present()?;
    Ok(())
}

/// Renders a current field in the requested mode.
///
/// `magnitude` is drawn as filled contours for [`VectorMode::Magnitude`]
/// and [`VectorMode::Both`]; `(u, v)` arrows for [`VectorMode::Quiver`]
/// and [`VectorMode::Both`]. The quiver-only mode carries no colorbar.
pub fn render_vector(
    frame: &mut Frame,
    u: &Grid,
    v: &Grid,
    magnitude: &Grid,
    mode: VectorMode,
    date: &str,
) -> Result<(), RenderError> {
    let (width, height) = (frame.width, frame.height);
    let root = BitMapBackend::with_buffer(&mut frame.buf, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;

    let profile = &CURRENTS;
    let fill = match mode {
        VectorMode::Magnitude | VectorMode::Both => Some(magnitude),
        VectorMode::Quiver => None,
    };
    let arrows = match mode {
        VectorMode::Quiver | VectorMode::Both => Some((u, v)),
        VectorMode::Magnitude => None,
    };

    if fill.is_some() {
        let (map_area, bar_area) = root.split_horizontally(width - COLORBAR_AREA_WIDTH);
        draw_map(&map_area, fill, arrows, profile, date)?;
        draw_colorbar(&bar_area, profile)?;
    } else {
        draw_map(&root, fill, arrows, profile, date)?;
    }

    root.present()?;
    Ok(())
}

fn draw_map(
    area: &DrawingArea<BitMapBackend, Shift>,
    fill: Option<&Grid>,
    arrows: Option<(&Grid, &Grid)>,
    profile: &Profile,
    date: &str,
) -> Result<(), RenderError> {
    // Either layer works for the extent; they cover the same axes.
    let Some(extent_grid) = fill.or_else(|| arrows.map(|(u, _)| u)) else {
        return Ok(());
    };
    let (lon0, lon1, lat0, lat1) = extent_grid.extent();

    let mut chart = ChartBuilder::on(area)
        .caption(format!("{} on {date}", profile.title), ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(44)
        .y_label_area_size(60)
        .build_cartesian_2d(lon0..lon1, lat0..lat1)?;

    if let Some(grid) = fill {
        chart.draw_series(contour_cells(grid, profile))?;
    }

    // Graticule every 10 degrees, drawn over the fill like map overlays do.
    let x_labels = (((lon1 - lon0) / 10.0).round() as usize).max(1) + 1;
    let y_labels = (((lat1 - lat0) / 10.0).round() as usize).max(1) + 1;
    chart
        .configure_mesh()
        .x_labels(x_labels)
        .y_labels(y_labels)
        .x_label_formatter(&|v| format!("{v:.0}°"))
        .y_label_formatter(&|v| format!("{v:.0}°"))
        .x_desc("Longitude")
        .y_desc("Latitude")
        .label_style(("sans-serif", 16))
        .axis_desc_style(("sans-serif", 18))
        .bold_line_style(RGBColor(100, 100, 100).mix(0.4))
        .light_line_style(TRANSPARENT)
        .draw()?;

    if let Some((u, v)) = arrows {
        let lon_span = lon1 - lon0;
        chart.draw_series(quiver_arrows(u, v, lon_span / QUIVER_SCALE))?;
    }

    Ok(())
}

/// One filled rectangle per sampled grid cell, with cell boundaries at the
/// midpoints between neighboring coordinate values.
fn contour_cells<'a>(
    grid: &'a Grid,
    profile: &'a Profile,
) -> impl Iterator<Item = Rectangle<(f64, f64)>> + 'a {
    let lon_edges = cell_edges(grid.lons());
    let lat_edges = cell_edges(grid.lats());
    let (nlon, nlat) = grid.shape();

    (0..nlon).flat_map(move |i| {
        let lon_edges = lon_edges.clone();
        let lat_edges = lat_edges.clone();
        (0..nlat).filter_map(move |j| {
            let band = profile.levels.band(grid.get(i, j))?;
            let [r, g, b] = profile.palette.sample(profile.levels.band_position(band));
            Some(Rectangle::new(
                [
                    (lon_edges[i], lat_edges[j]),
                    (lon_edges[i + 1], lat_edges[j + 1]),
                ],
                RGBColor(r, g, b).filled(),
            ))
        })
    })
}

/// Arrow glyphs for every cell where both components are sampled.
fn quiver_arrows<'a>(
    u: &'a Grid,
    v: &'a Grid,
    unit: f64,
) -> impl Iterator<Item = PathElement<(f64, f64)>> + 'a {
    let (nlon, nlat) = u.shape();
    (0..nlon).flat_map(move |i| {
        (0..nlat).filter_map(move |j| {
            let du = u.get(i, j) as f64;
            let dv = v.get(i, j) as f64;
            if du.is_nan() || dv.is_nan() {
                return None;
            }
            let x = u.lons()[i];
            let y = u.lats()[j];
            Some(arrow((x, y), (du * unit, dv * unit)))
        })
    })
}

/// A line-segment arrow: shaft plus two head strokes.
fn arrow((x, y): (f64, f64), (dx, dy): (f64, f64)) -> PathElement<(f64, f64)> {
    let tip = (x + dx, y + dy);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return PathElement::new(vec![(x, y), tip], BLACK.stroke_width(1));
    }
    let head = 0.25 * len;
    let angle = dy.atan2(dx);
    let left = angle + std::f64::consts::PI * 5.0 / 6.0;
    let right = angle - std::f64::consts::PI * 5.0 / 6.0;
    PathElement::new(
        vec![
            (x, y),
            tip,
            (tip.0 + head * left.cos(), tip.1 + head * left.sin()),
            tip,
            (tip.0 + head * right.cos(), tip.1 + head * right.sin()),
        ],
        BLACK.stroke_width(1),
    )
}

/// `n + 1` cell boundaries for `n` sorted coordinates.
fn cell_edges(coords: &[f64]) -> Vec<f64> {
    if coords.len() == 1 {
        return vec![coords[0] - 0.5, coords[0] + 0.5];
    }
    let mut edges = Vec::with_capacity(coords.len() + 1);
    edges.push(coords[0] - (coords[1] - coords[0]) / 2.0);
    for pair in coords.windows(2) {
        edges.push((pair[0] + pair[1]) / 2.0);
    }
    let last = coords.len() - 1;
    edges.push(coords[last] + (coords[last] - coords[last - 1]) / 2.0);
    edges
}

fn draw_colorbar(
    area: &DrawingArea<BitMapBackend, Shift>,
    profile: &Profile,
) -> Result<(), RenderError> {
    let (_, height) = area.dim_in_pixel();
    let top = 50i32;
    let bottom = height as i32 - 50;
    let bar_x0 = 10i32;
    let bar_x1 = 38i32;
    let bands = profile.levels.count - 1;

    // Bands run bottom (lo) to top (hi).
    for band in 0..bands {
        let y1 = bottom - ((band as f64 + 1.0) / bands as f64 * (bottom - top) as f64) as i32;
        let y0 = bottom - (band as f64 / bands as f64 * (bottom - top) as f64) as i32;
        let [r, g, b] = profile.palette.sample(profile.levels.band_position(band));
        area.draw(&Rectangle::new(
            [(bar_x0, y1), (bar_x1, y0)],
            RGBColor(r, g, b).filled(),
        ))?;
    }
    area.draw(&Rectangle::new(
        [(bar_x0, top), (bar_x1, bottom)],
        BLACK.stroke_width(1),
    ))?;

    let label_style = ("sans-serif", 14).into_text_style(area);
    let edges = profile.levels.edges();
    let ticks = [
        (bottom, edges[0]),
        ((top + bottom) / 2, (edges[0] + edges[edges.len() - 1]) / 2.0),
        (top, edges[edges.len() - 1]),
    ];
    for (y, value) in ticks {
        area.draw(&Text::new(
            format!("{value:.2}"),
            (bar_x1 + 6, y - 7),
            label_style.clone(),
        ))?;
    }

    let desc_style = ("sans-serif", 16)
        .into_text_style(area)
        .transform(FontTransform::Rotate270)
        .pos(Pos::new(HPos::Center, VPos::Center));
    area.draw(&Text::new(
        profile.cbar_label.to_owned(),
        (bar_x1 + 70, (top + bottom) / 2),
        desc_style,
    ))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_edges_sit_at_midpoints() {
        let edges = cell_edges(&[1.0, 2.0, 4.0]);
        assert_eq!(edges, vec![0.5, 1.5, 3.0, 5.0]);
    }

    #[test]
    fn single_coordinate_gets_a_unit_cell() {
        let edges = cell_edges(&[10.0]);
        assert_eq!(edges, vec![9.5, 10.5]);
    }

    #[test]
    fn frame_starts_white() {
        let frame = Frame::new(4, 2);
        assert_eq!(frame.rgb().len(), 4 * 2 * 3);
        assert!(frame.rgb().iter().all(|&b| b == 255));
    }
}
