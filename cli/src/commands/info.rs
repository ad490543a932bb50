use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;

use clap::{arg, ArgAction, ArgMatches, Command};
use seafield::{DumpKind, FieldDump, Grid, RawDump};

pub fn cli() -> Command {
    Command::new(crate::cli::module_component!())
        .about("Show header flags and grid information for a dump file")
        .arg(
            arg!(-v --vector "Treat the file as a current component dump")
                .action(ArgAction::SetTrue),
        )
        .arg(arg!(<FILE> "Target file").value_parser(clap::value_parser!(PathBuf)))
}

pub fn exec(args: &ArgMatches) -> anyhow::Result<()> {
    let file_name = args.get_one::<PathBuf>("FILE").unwrap();
    let kind = if args.get_flag("vector") {
        DumpKind::Vector
    } else {
        DumpKind::Scalar
    };

    let raw = RawDump::from_path(file_name, kind)
        .map_err(|e| anyhow::anyhow!("{}: {}", file_name.display(), e))?;
    let dump = FieldDump::parse(raw.clone())
        .map_err(|e| anyhow::anyhow!("{}: {}", file_name.display(), e))?;
    let grid = (!dump.rows.is_empty()).then(|| Grid::from_rows(&dump.rows)).transpose()?;

    print!("{}", InfoView(&raw, &dump, grid.as_ref()));
    Ok(())
}

struct InfoView<'i>(&'i RawDump, &'i FieldDump, Option<&'i Grid>);

impl Display for InfoView<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let Self(raw, dump, grid) = self;
        let kind = match raw.kind {
            DumpKind::Scalar => "scalar",
            DumpKind::Vector => "vector (current component)",
        };
        writeln!(f, "Kind:                      {kind}")?;
        writeln!(f, "Time stamp:                {}", dump.timestamp)?;
        if let Some(date) = dump.timestamp.parsed_date() {
            writeln!(f, "Date:                      {date}")?;
        }
        writeln!(f, "Time bad flag:             {}", raw.header.time_flag)?;
        writeln!(f, "Longitude bad flag:        {}", raw.header.lon_flag)?;
        writeln!(f, "Latitude bad flag:         {}", raw.header.lat_flag)?;
        if let Some(depth_flag) = &raw.header.depth_flag {
            writeln!(f, "Depth bad flag:            {depth_flag}")?;
        }
        writeln!(f, "Value bad flag:            {}", raw.header.value_flag)?;
        writeln!(f, "Data rows:                 {}", raw.body.len())?;
        writeln!(f, "Valid samples:             {}", dump.rows.len())?;

        match grid {
            Some(grid) => {
                let (nlon, nlat) = grid.shape();
                let (lon0, lon1, lat0, lat1) = grid.extent();
                writeln!(f, "Grid size:                 {nlon} x {nlat}")?;
                writeln!(f, "Longitude range:           {lon0} .. {lon1}")?;
                writeln!(f, "Latitude range:            {lat0} .. {lat1}")?;
                if let Some((lo, hi)) = grid.value_range() {
                    writeln!(f, "Value range:               {lo} .. {hi}")?;
                }
                writeln!(f, "Missing cells:             {}", grid.missing_cells())?;
            }
            None => {
                writeln!(f, "Grid size:                 empty (all rows flagged bad)")?;
            }
        }
        Ok(())
    }
}
