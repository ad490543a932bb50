use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

pub(crate) const SCALAR_ROWS: &[&str] = &[
    "\"01-NOV-2004 00:00\", 1, 65.5, -10.5, 28.1",
    "\"01-NOV-2004 00:00\", 1, 66.5, -10.5, -1.E+34",
    "\"01-NOV-2004 00:00\", 1, 66.5, -9.5, 28.3",
    "\"01-NOV-2004 00:00\", 1, 65.5, -9.5, 28.4",
];

pub(crate) fn write_scalar_dump(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut f = File::create(&path).unwrap();
    writeln!(
        f,
        "subset of SST data
VARIABLE : SST
FILENAME : sst.nc
SUBSET   : 2 by 2 points
TIME     : 01-NOV-2004
TIME bad flag: -1.E+34
LONGITUDE bad flag: -1.E+34
LATITUDE bad flag: -1.E+34
SST bad flag: -1.E+34
 TIME, STATION, LON, LAT, SST"
    )
    .unwrap();
    for row in rows {
        writeln!(f, "{row}").unwrap();
    }
    path
}

pub(crate) fn write_vector_dump(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut f = File::create(&path).unwrap();
    writeln!(
        f,
        "subset of zonal current data
VARIABLE : U
FILENAME : u.nc
SUBSET   : 2 by 2 points
TIME     : 01-NOV-2004
TIME bad flag: -1.E+34
LONGITUDE bad flag: -1.E+34
LATITUDE bad flag: -1.E+34
DEPTH bad flag: -1.E+34
U bad flag: -1.E+34
 TIME, STATION, LON, LAT, DEPTH, U"
    )
    .unwrap();
    for row in rows {
        writeln!(f, "{row}").unwrap();
    }
    path
}
