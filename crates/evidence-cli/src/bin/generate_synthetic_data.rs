use clap::Parser;
use evidence_cli::{CliError, GenerateCli, init_logging};
use evidence_core::ALL_TABLES;

fn main() -> Result<(), CliError> {
    let cli = GenerateCli::parse();
    init_logging(&cli.logging)?;

    let result = cli.run()?;

    for spec in ALL_TABLES {
        let rows = result.report.table(spec.name).map_or(0, |table| table.rows);
        println!("{}: {rows} rows", spec.file_name());
    }
    println!("Synthetic CSVs written in {}.", result.out_dir.display());
    Ok(())
}
