use crate::{DataRow, GridError};

/// A dense rectangular field indexed by (longitude rank, latitude rank).
///
/// Axes hold the distinct coordinate values observed in the source rows,
/// sorted ascending; cells without a sample are NaN.
///
/// # Example
/// ```
/// use seafield::{DataRow, Grid};
///
/// let rows = vec![
///     DataRow { lon: 65.5, lat: -10.5, value: 1.0 },
///     DataRow { lon: 66.5, lat: -10.5, value: 2.0 },
///     DataRow { lon: 65.5, lat: -9.5, value: 3.0 },
/// ];
/// let grid = Grid::from_rows(&rows)?;
/// assert_eq!(grid.shape(), (2, 2));
/// assert_eq!(grid.get(0, 0), 1.0);
/// assert!(grid.get(1, 1).is_nan());
/// # Ok::<(), seafield::GridError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    lons: Vec<f64>,
    lats: Vec<f64>,
    /// Longitude-major, `lons.len() * lats.len()` cells.
    values: Vec<f32>,
}

impl Grid {
    /// Reconstructs a dense grid from sparse samples.
    pub fn from_rows(rows: &[DataRow]) -> Result<Self, GridError> {
        if rows.is_empty() {
            return Err(GridError::NoValidSamples);
        }

        let lons = sorted_unique(rows.iter().map(|r| r.lon));
        let lats = sorted_unique(rows.iter().map(|r| r.lat));

        let mut values = vec![f32::NAN; lons.len() * lats.len()];
        for row in rows {
            let i = rank(&lons, row.lon);
            let j = rank(&lats, row.lat);
            values[i * lats.len() + j] = row.value;
        }

        Ok(Self { lons, lats, values })
    }

    /// Cell-wise magnitude `sqrt(u² + v²)` of two component grids.
    ///
    /// The components must cover identical longitude/latitude sets; NaN in
    /// either component propagates.
    pub fn magnitude(u: &Grid, v: &Grid) -> Result<Grid, GridError> {
        if u.shape() != v.shape() {
            return Err(GridError::ShapeMismatch(u.shape(), v.shape()));
        }
        if u.lons != v.lons || u.lats != v.lats {
            return Err(GridError::CoordinateMismatch);
        }
        let values = u
            .values
            .iter()
            .zip(&v.values)
            .map(|(a, b)| (a * a + b * b).sqrt())
            .collect();
        Ok(Grid {
            lons: u.lons.clone(),
            lats: u.lats.clone(),
            values,
        })
    }

    /// `(distinct longitudes, distinct latitudes)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.lons.len(), self.lats.len())
    }

    pub fn lons(&self) -> &[f64] {
        &self.lons
    }

    pub fn lats(&self) -> &[f64] {
        &self.lats
    }

    /// Value at (longitude rank, latitude rank).
    ///
    /// # Panics
    /// Panics when either rank is out of bounds.
    pub fn get(&self, lon_rank: usize, lat_rank: usize) -> f32 {
        assert!(lon_rank < self.lons.len() && lat_rank < self.lats.len());
        self.values[lon_rank * self.lats.len() + lat_rank]
    }

    /// Geographic extent as `(lon_min, lon_max, lat_min, lat_max)`.
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        // from_rows guarantees non-empty axes
        (
            self.lons[0],
            self.lons[self.lons.len() - 1],
            self.lats[0],
            self.lats[self.lats.len() - 1],
        )
    }

    /// Minimum and maximum over non-NaN cells, if any.
    pub fn value_range(&self) -> Option<(f32, f32)> {
        let mut range: Option<(f32, f32)> = None;
        for &v in &self.values {
            if v.is_nan() {
                continue;
            }
            range = Some(match range {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        range
    }

    /// Count of NaN (unsampled) cells.
    pub fn missing_cells(&self) -> usize {
        self.values.iter().filter(|v| v.is_nan()).count()
    }
}

fn sorted_unique(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}

/// Index of `value` in `axis`; `axis` holds every coordinate seen in the
/// source rows, so the lookup cannot fail.
fn rank(axis: &[f64], value: f64) -> usize {
    axis.binary_search_by(|probe| probe.total_cmp(&value))
        .unwrap_or_else(|_| unreachable!("coordinate missing from its own axis"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(lon: f64, lat: f64, value: f32) -> DataRow {
        DataRow { lon, lat, value }
    }

    #[test]
    fn shape_matches_distinct_coordinate_counts() {
        // 5 rows, 3 distinct lons, 2 distinct lats
        let rows = vec![
            row(65.5, -10.5, 1.0),
            row(66.5, -10.5, 2.0),
            row(67.5, -10.5, 3.0),
            row(65.5, -9.5, 4.0),
            row(66.5, -9.5, 5.0),
        ];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.shape(), (3, 2));
    }

    #[test]
    fn axes_are_sorted_regardless_of_row_order() {
        let rows = vec![
            row(67.5, -9.5, 1.0),
            row(65.5, -10.5, 2.0),
            row(66.5, -11.5, 3.0),
        ];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.lons(), &[65.5, 66.5, 67.5]);
        assert_eq!(grid.lats(), &[-11.5, -10.5, -9.5]);
    }

    #[test]
    fn unsampled_cells_are_nan() {
        let rows = vec![row(65.5, -10.5, 1.0), row(66.5, -9.5, 2.0)];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.get(0, 0), 1.0);
        assert_eq!(grid.get(1, 1), 2.0);
        assert!(grid.get(0, 1).is_nan());
        assert!(grid.get(1, 0).is_nan());
        assert_eq!(grid.missing_cells(), 2);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(Grid::from_rows(&[]), Err(GridError::NoValidSamples)));
    }

    #[test]
    fn value_range_skips_nan() {
        let rows = vec![row(65.5, -10.5, 1.0), row(66.5, -9.5, 5.0)];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.value_range(), Some((1.0, 5.0)));
    }

    #[test]
    fn extent_spans_the_axes() {
        let rows = vec![row(65.5, -10.5, 1.0), row(80.5, 20.5, 2.0)];
        let grid = Grid::from_rows(&rows).unwrap();
        assert_eq!(grid.extent(), (65.5, 80.5, -10.5, 20.5));
    }

    #[test]
    fn magnitude_combines_components() {
        let u = Grid::from_rows(&[row(65.5, -10.5, 3.0), row(66.5, -10.5, 0.0)]).unwrap();
        let v = Grid::from_rows(&[row(65.5, -10.5, 4.0), row(66.5, -10.5, 1.0)]).unwrap();
        let m = Grid::magnitude(&u, &v).unwrap();
        assert_eq!(m.get(0, 0), 5.0);
        assert_eq!(m.get(1, 0), 1.0);
    }

    #[test]
    fn magnitude_propagates_nan() {
        let u = Grid::from_rows(&[row(65.5, -10.5, 3.0), row(66.5, -9.5, 1.0)]).unwrap();
        let v = Grid::from_rows(&[row(65.5, -10.5, 4.0), row(66.5, -9.5, 1.0)]).unwrap();
        let m = Grid::magnitude(&u, &v).unwrap();
        assert!(m.get(0, 1).is_nan());
    }

    #[test]
    fn magnitude_rejects_mismatched_axes() {
        let u = Grid::from_rows(&[row(65.5, -10.5, 3.0), row(66.5, -10.5, 1.0)]).unwrap();
        let v = Grid::from_rows(&[row(65.5, -10.5, 4.0), row(67.5, -10.5, 1.0)]).unwrap();
        assert!(matches!(
            Grid::magnitude(&u, &v),
            Err(GridError::CoordinateMismatch)
        ));
    }
}
