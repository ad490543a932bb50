use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{arg, ArgMatches, Command};
use console::{Style, Term};
use seafield::animate::{animate_scalar, animate_vector, AnimateOptions};
use seafield::{ScalarField, VectorMode, CURRENTS, MERIDIONAL_DATA_DIR};

use crate::cli;

pub fn cli() -> Command {
    Command::new(crate::cli::module_component!())
        .about("Interactively pick a field and render its animation")
        .arg(
            arg!(-d --data <DIR> "Data root with per-field subdirectories (sss, sst, ssha, zonal-current, meridional-current)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(-o --out <DIR> "Output directory for videos and snapshots")
                .required(false)
                .default_value("visualisations")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

pub fn exec(args: &ArgMatches) -> Result<()> {
    let data_root = args.get_one::<PathBuf>("data").unwrap();
    let out_dir = args.get_one::<PathBuf>("out").unwrap();
    let term = Term::stderr();

    let category = prompt(
        &term,
        "Visualization type",
        &["Scalar field", "Vector field (currents)"],
    )?;

    match category {
        0 => {
            let labels = [
                "Sea Surface Salinity (sss)",
                "Sea Surface Temperature (sst)",
                "Sea Surface Height Anomaly (ssha)",
            ];
            let field = ScalarField::ALL[prompt(&term, "Field", &labels)?];
            run_scalar(field, data_root, out_dir)
        }
        _ => {
            let labels = ["quiver plot", "magnitude contours", "both combined"];
            let mode = VectorMode::ALL[prompt(&term, "Plot mode", &labels)?];
            run_vector(mode, data_root, out_dir)
        }
    }
}

fn run_scalar(field: ScalarField, data_root: &Path, out_dir: &Path) -> Result<()> {
    let profile = field.profile();
    let options = AnimateOptions {
        snapshot_dir: Some(out_dir.join("scalar")),
        ..Default::default()
    };
    let out_path = out_dir
        .join("scalar")
        .join(format!("{}.mp4", profile.file_stem));
    let report = animate_scalar(
        field,
        &data_root.join(profile.data_dir),
        &out_path,
        &options,
        cli::frame_progress(),
    )?;
    super::animate::print_report(&report);
    Ok(())
}

fn run_vector(mode: VectorMode, data_root: &Path, out_dir: &Path) -> Result<()> {
    let options = AnimateOptions {
        snapshot_dir: Some(out_dir.join("vector")),
        ..Default::default()
    };
    let out_path = out_dir
        .join("vector")
        .join(format!("{}.mp4", mode.file_stem()));
    let report = animate_vector(
        mode,
        &data_root.join(CURRENTS.data_dir),
        &data_root.join(MERIDIONAL_DATA_DIR),
        &out_path,
        &options,
        cli::frame_progress(),
    )?;
    super::animate::print_report(&report);
    Ok(())
}

/// Numbered single-choice prompt; loops until the answer is valid.
fn prompt(term: &Term, title: &str, options: &[&str]) -> Result<usize> {
    let bold = Style::new().bold();
    let dim = Style::new().dim();
    term.write_line(&format!("{}", bold.apply_to(title)))?;
    for (i, option) in options.iter().enumerate() {
        term.write_line(&format!("  {} {option}", dim.apply_to(format!("{})", i + 1))))?;
    }

    loop {
        term.write_str(&format!("select [1-{}]: ", options.len()))?;
        let line = term.read_line()?;
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
            _ => term.write_line("not a valid choice")?,
        }
    }
}
