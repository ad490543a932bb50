use std::path::PathBuf;

use anyhow::Result;
use clap::{arg, ArgAction, ArgMatches, Command};
use seafield::animate::{animate_scalar, animate_vector, AnimateOptions, AnimateReport};
use seafield::{ScalarField, VectorMode, MERIDIONAL_DATA_DIR};

use crate::cli;

pub fn cli() -> Command {
    Command::new(crate::cli::module_component!())
        .about("Render an MP4 animation from a directory of dump files")
        .arg(
            arg!(-d --data <DIR> "Directory holding the dump files (zonal component for currents)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-f --field <FIELD> "Scalar field id (sss, sst or ssha)")
                .required_unless_present("mode")
                .conflicts_with_all(["mode", "meridional"])
                .value_parser(clap::value_parser!(ScalarField)),
        )
        .arg(
            arg!(-m --mode <MODE> "Current visualization mode (quiver, magnitude or both)")
                .required(false)
                .value_parser(clap::value_parser!(VectorMode)),
        )
        .arg(
            arg!(--meridional <DIR> "Meridional component directory (defaults to `meridional-current` next to the data directory)")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-o --output <FILE> "Output MP4 path (defaults to the field's file stem)")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--fps <FPS> "Frames per second (defaults to the field profile)")
                .required(false)
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            arg!(--stride <N> "Frame-skip stride outside the dense period")
                .required(false)
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            arg!(--snapshots <DIR> "Also save dense-period frames as PNG files into this directory")
                .required(false)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--dense <PATTERN> "File name fragment rendered at daily cadence (repeatable)")
                .required(false)
                .action(ArgAction::Append),
        )
}

pub fn exec(args: &ArgMatches) -> Result<()> {
    let data_dir = args.get_one::<PathBuf>("data").unwrap();
    let options = AnimateOptions {
        fps: args.get_one::<u32>("fps").copied(),
        stride: args.get_one::<usize>("stride").copied(),
        snapshot_dir: args.get_one::<PathBuf>("snapshots").cloned(),
        dense_patterns: args
            .get_many::<String>("dense")
            .map(|patterns| patterns.cloned().collect()),
    };

    let report = if let Some(field) = args.get_one::<ScalarField>("field") {
        let out_path = output_path(args, field.profile().file_stem);
        animate_scalar(
            *field,
            data_dir,
            &out_path,
            &options,
            cli::frame_progress(),
        )?
    } else {
        let mode = *args.get_one::<VectorMode>("mode").unwrap();
        let meridional = args
            .get_one::<PathBuf>("meridional")
            .cloned()
            .unwrap_or_else(|| {
                data_dir
                    .parent()
                    .unwrap_or_else(|| std::path::Path::new("."))
                    .join(MERIDIONAL_DATA_DIR)
            });
        let out_path = output_path(args, &mode.file_stem());
        animate_vector(
            mode,
            data_dir,
            &meridional,
            &out_path,
            &options,
            cli::frame_progress(),
        )?
    };

    print_report(&report);
    Ok(())
}

fn output_path(args: &ArgMatches, stem: &str) -> PathBuf {
    args.get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(format!("{stem}.mp4")))
}

pub(crate) fn print_report(report: &AnimateReport) {
    let green = console::Style::new().green();
    eprintln!(
        "{}: {} frame(s), {} snapshot(s)",
        green.apply_to("done"),
        report.frames,
        report.snapshots,
    );
    println!("wrote {}", report.output.display());
}
