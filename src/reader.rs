use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::ParseError;

/// Line index of the first bad-value flag line (time) in a dump header.
const FIRST_FLAG_LINE: usize = 5;

/// Layout variant of a dump file.
///
/// Scalar dumps carry `time, station, lon, lat, value` rows after a
/// 10-line header; vector (current component) dumps add a depth column
/// and one more flag line, with rows starting at line 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DumpKind {
    Scalar,
    Vector,
}

impl DumpKind {
    /// Number of bad-value flag lines in the header.
    pub(crate) fn num_flags(&self) -> usize {
        match self {
            Self::Scalar => 4,
            Self::Vector => 5,
        }
    }

    /// 0-based line index of the first data row.
    pub fn first_data_line(&self) -> usize {
        // One column-header line sits between the flags and the data.
        FIRST_FLAG_LINE + self.num_flags() + 1
    }
}

/// Bad-value sentinel flags extracted from the fixed-index header lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpHeader {
    pub time_flag: String,
    pub lon_flag: String,
    pub lat_flag: String,
    pub depth_flag: Option<String>,
    pub value_flag: String,
}

/// A dump file split into its header flags and raw data rows.
///
/// # Example
/// ```
/// use seafield::{DumpKind, RawDump};
///
/// let text = "\
/// subset of SST data
/// VARIABLE : SST
/// FILENAME : sst.nc
/// SUBSET   : 2 by 2 points
/// TIME     : 01-NOV-2004
/// TIME bad flag: -1.E+34
/// LONGITUDE bad flag: -1.E+34
/// LATITUDE bad flag: -1.E+34
/// SST bad flag: -1.E+34
///  TIME, STATION, LON, LAT, SST
/// \"01-NOV-2004\", 1, 65.5, -10.5, 28.61
/// ";
/// let dump = RawDump::from_read(text.as_bytes(), DumpKind::Scalar)?;
/// assert_eq!(dump.header.value_flag, "-1.E+34");
/// assert_eq!(dump.body.len(), 1);
/// # Ok::<(), seafield::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RawDump {
    pub kind: DumpKind,
    pub header: DumpHeader,
    /// Data rows, in file order, blank lines dropped.
    pub body: Vec<String>,
}

impl RawDump {
    pub fn from_path<P>(path: P, kind: DumpKind) -> Result<Self, ParseError>
    where
        P: AsRef<Path>,
    {
        let f = File::open(path)?;
        Self::from_read(BufReader::new(f), kind)
    }

    pub fn from_read<R: Read>(read: R, kind: DumpKind) -> Result<Self, ParseError> {
        let lines = BufReader::new(read)
            .lines()
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_lines(lines, kind)
    }

    pub(crate) fn from_lines(lines: Vec<String>, kind: DumpKind) -> Result<Self, ParseError> {
        let body_start = kind.first_data_line();
        if lines.len() < body_start {
            return Err(ParseError::TruncatedHeader(lines.len()));
        }

        let mut flags = (FIRST_FLAG_LINE..FIRST_FLAG_LINE + kind.num_flags())
            .map(|index| bad_flag(&lines[index], index));
        let mut next_flag = || flags.next().unwrap();
        let header = match kind {
            DumpKind::Scalar => DumpHeader {
                time_flag: next_flag()?,
                lon_flag: next_flag()?,
                lat_flag: next_flag()?,
                depth_flag: None,
                value_flag: next_flag()?,
            },
            DumpKind::Vector => DumpHeader {
                time_flag: next_flag()?,
                lon_flag: next_flag()?,
                lat_flag: next_flag()?,
                depth_flag: Some(next_flag()?),
                value_flag: next_flag()?,
            },
        };

        let body = lines[body_start..]
            .iter()
            .filter(|line| !line.trim().is_empty())
            .cloned()
            .collect();
        Ok(Self { kind, header, body })
    }
}

/// The flag is the last whitespace-separated token of its header line.
fn bad_flag(line: &str, index: usize) -> Result<String, ParseError> {
    line.split_whitespace()
        .last()
        .map(|token| token.to_owned())
        .ok_or(ParseError::MissingField {
            line: index,
            field: "bad-value flag",
        })
}
