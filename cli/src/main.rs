use clap::{crate_version, Command};

mod cli;
mod commands;

fn app() -> Command {
    Command::new("seaviz")
        .version(crate_version!())
        .arg_required_else_help(true)
        .subcommands(commands::cli())
}

fn main() {
    let matches = app().get_matches();
    if let Err(e) = commands::dispatch(matches) {
        let red = console::Style::new().red().bold();
        eprintln!("{} {e:#}", red.apply_to("error:"));
        std::process::exit(1);
    }
}
