use std::path::PathBuf;

use anyhow::Result;
use clap::{arg, ArgMatches, Command};
use seafield::render::{render_scalar, render_vector};
use seafield::{DumpKind, Frame, Grid, ScalarField, VectorMode, CURRENTS};

use crate::cli::{self, CliFrameSize};

pub fn cli() -> Command {
    Command::new(crate::cli::module_component!())
        .about("Render a single dump file to a PNG map")
        .arg(
            arg!(-f --field <FIELD> "Scalar field id (sss, sst or ssha)")
                .required_unless_present("mode")
                .conflicts_with_all(["mode", "meridional"])
                .value_parser(clap::value_parser!(ScalarField)),
        )
        .arg(
            arg!(-m --mode <MODE> "Current visualization mode (quiver, magnitude or both)")
                .required(false)
                .requires("meridional")
                .value_parser(clap::value_parser!(VectorMode)),
        )
        .arg(
            arg!(--meridional <FILE> "Meridional component dump paired with the zonal target")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-o --output <FILE> "Output PNG path (defaults to the field's file stem)")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-s --size <SIZE> "Frame size as WIDTHxHEIGHT")
                .required(false)
                .value_parser(clap::value_parser!(CliFrameSize)),
        )
        .arg(
            arg!(<FILE> "Target dump file (the zonal component for current plots)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

pub fn exec(args: &ArgMatches) -> Result<()> {
    let file_name = args.get_one::<PathBuf>("FILE").unwrap();
    let size = args.get_one::<CliFrameSize>("size").copied();

    let (frame, out_path) = if let Some(field) = args.get_one::<ScalarField>("field") {
        let profile = field.profile();
        let (dump, grid) = cli::load_grid(file_name, DumpKind::Scalar)?;
        let CliFrameSize(width, height) = size.unwrap_or(CliFrameSize(
            profile.frame_size.0,
            profile.frame_size.1,
        ));
        let mut frame = Frame::new(width, height);
        render_scalar(&mut frame, &grid, profile, &dump.timestamp.date)?;
        let out_path = output_path(args, profile.file_stem);
        (frame, out_path)
    } else {
        let mode = *args.get_one::<VectorMode>("mode").unwrap();
        let meridional = args.get_one::<PathBuf>("meridional").unwrap();
        let (zonal_dump, u) = cli::load_grid(file_name, DumpKind::Vector)?;
        let (_, v) = cli::load_grid(meridional, DumpKind::Vector)?;
        let magnitude = Grid::magnitude(&u, &v)?;
        let CliFrameSize(width, height) = size.unwrap_or(CliFrameSize(
            CURRENTS.frame_size.0,
            CURRENTS.frame_size.1,
        ));
        let mut frame = Frame::new(width, height);
        render_vector(&mut frame, &u, &v, &magnitude, mode, &zonal_dump.timestamp.date)?;
        let out_path = output_path(args, &mode.file_stem());
        (frame, out_path)
    };

    frame.write_png(&out_path)?;
    println!("wrote {}", out_path.display());
    Ok(())
}

fn output_path(args: &ArgMatches, stem: &str) -> PathBuf {
    args.get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(format!("{stem}.png")))
}
