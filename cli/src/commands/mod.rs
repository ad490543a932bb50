use clap::{ArgMatches, Command};

pub fn cli() -> Vec<Command> {
    vec![
        animate::cli(),
        completions::cli(),
        info::cli(),
        menu::cli(),
        render::cli(),
    ]
}

pub fn dispatch(matches: ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("animate", args)) => animate::exec(args),
        Some(("completions", args)) => completions::exec(args),
        Some(("info", args)) => info::exec(args),
        Some(("menu", args)) => menu::exec(args),
        Some(("render", args)) => render::exec(args),
        _ => unreachable!(),
    }
}

pub mod animate;
pub mod completions;
pub mod info;
pub mod menu;
pub mod render;
