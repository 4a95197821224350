use clap::Parser;
use evidence_cli::{CheckCli, CliError, init_logging};
use evidence_eval::render_report;

fn main() -> Result<(), CliError> {
    let cli = CheckCli::parse();
    init_logging(&cli.logging)?;

    let report = cli.run()?;
    println!("{}", render_report(&report));
    Ok(())
}
