use std::fmt::{self, Display, Formatter};
use std::path::Path;

use chrono::NaiveDate;

use crate::{DumpKind, ParseError, RawDump};

/// Time stamp of a snapshot, taken from the first data row.
///
/// The date keeps the source's spelling (e.g. `01-NOV-2004 00:00`) with the
/// surrounding double quotes stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    pub date: String,
    pub station: String,
}

impl Timestamp {
    /// Calendar date parsed from the leading `DD-MON-YYYY` token, if the
    /// stamp carries one.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let token = self.date.split_whitespace().next()?;
        NaiveDate::parse_from_str(token, "%d-%b-%Y").ok()
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.date)
    }
}

/// One valid sample: a value at a (longitude, latitude) position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRow {
    pub lon: f64,
    pub lat: f64,
    pub value: f32,
}

/// Iterator over the valid data rows of a [`RawDump`].
///
/// Rows whose value field equals the header's bad-value flag are skipped;
/// malformed rows yield an error carrying the file line number. Values of
/// vector dumps are negated (sign convention of the source dataset).
pub struct Rows<'a> {
    dump: &'a RawDump,
    pos: usize,
}

impl<'a> Rows<'a> {
    fn new(dump: &'a RawDump) -> Self {
        Self { dump, pos: 0 }
    }
}

impl Iterator for Rows<'_> {
    type Item = Result<DataRow, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.dump.body.get(self.pos)?;
            let line_number = self.dump.kind.first_data_line() + self.pos;
            self.pos += 1;
            match parse_row(line, line_number, self.dump.kind, &self.dump.header.value_flag) {
                Ok(Some(row)) => return Some(Ok(row)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.dump.body.len() - self.pos))
    }
}

impl RawDump {
    /// Iterate over valid data rows, filtering bad-value sentinels.
    pub fn rows(&self) -> Rows<'_> {
        Rows::new(self)
    }

    /// Time stamp from the first data row.
    pub fn timestamp(&self) -> Result<Timestamp, ParseError> {
        let first = self.body.first().ok_or(ParseError::EmptyBody)?;
        let mut fields = first.split(',');
        let line = self.kind.first_data_line();
        let date = next_field(&mut fields, line, "time")?;
        let station = next_field(&mut fields, line, "station")?;
        Ok(Timestamp {
            date: date.trim().trim_matches('"').to_owned(),
            station: station.trim().to_owned(),
        })
    }
}

/// A fully parsed dump: header flags, time stamp and valid samples.
#[derive(Debug, Clone)]
pub struct FieldDump {
    pub kind: DumpKind,
    pub timestamp: Timestamp,
    pub rows: Vec<DataRow>,
}

impl FieldDump {
    pub fn from_path<P>(path: P, kind: DumpKind) -> Result<Self, ParseError>
    where
        P: AsRef<Path>,
    {
        Self::parse(RawDump::from_path(path, kind)?)
    }

    pub fn parse(raw: RawDump) -> Result<Self, ParseError> {
        let timestamp = raw.timestamp()?;
        let rows = raw.rows().collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            kind: raw.kind,
            timestamp,
            rows,
        })
    }
}

/// Parses one data row; `Ok(None)` means the row matched the sentinel.
fn parse_row(
    line: &str,
    line_number: usize,
    kind: DumpKind,
    value_flag: &str,
) -> Result<Option<DataRow>, ParseError> {
    let mut fields = line.split(',');
    // time and station are not needed per-row
    next_field(&mut fields, line_number, "time")?;
    next_field(&mut fields, line_number, "station")?;
    let lon = next_field(&mut fields, line_number, "longitude")?;
    let lat = next_field(&mut fields, line_number, "latitude")?;
    if kind == DumpKind::Vector {
        next_field(&mut fields, line_number, "depth")?;
    }
    let value = next_field(&mut fields, line_number, "value")?;

    let value = value.trim();
    if value == value_flag {
        return Ok(None);
    }

    let lon = parse_number(lon, line_number, "longitude")?;
    let lat = parse_number(lat, line_number, "latitude")?;
    let value = parse_number::<f32>(value, line_number, "value")?;
    let value = match kind {
        DumpKind::Scalar => value,
        DumpKind::Vector => -value,
    };
    Ok(Some(DataRow { lon, lat, value }))
}

fn next_field<'a>(
    fields: &mut impl Iterator<Item = &'a str>,
    line: usize,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    fields.next().ok_or(ParseError::MissingField { line, field })
}

fn parse_number<T: std::str::FromStr>(
    text: &str,
    line: usize,
    field: &'static str,
) -> Result<T, ParseError> {
    text.trim().parse().map_err(|_| ParseError::InvalidNumber {
        line,
        field,
        value: text.trim().to_owned(),
    })
}
