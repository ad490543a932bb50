use anyhow::Result;
use clap::{arg, ArgMatches, Command};
use clap_complete::Shell;

pub(crate) fn cli() -> Command {
    Command::new(crate::cli::module_component!())
        .about("Print a seaviz completion script for a shell to stdout")
        .arg(arg!(<SHELL> "Shell dialect to target").value_parser(clap::value_parser!(Shell)))
}

pub(crate) fn exec(args: &ArgMatches) -> Result<()> {
    let shell = *args.get_one::<Shell>("SHELL").unwrap();
    let mut app = crate::app();
    let name = app.get_name().to_owned();
    clap_complete::generate(shell, &mut app, name, &mut std::io::stdout());
    Ok(())
}
