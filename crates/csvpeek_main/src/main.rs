mod cli;

use anyhow::Result;
use arrow::util::pretty::print_batches;
use clap::Parser;
use csvpeek_api::{CsvPeekAPI, DataTable};

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // Log verbosity follows the RUST_LOG environment variable
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let api = CsvPeekAPI::init();

    let table = match cli.command {
        Command::Head(args) => {
            api.read_head(&args.common.path, args.n_rows, &args.common.to_options())
                .await?
        }
        Command::Tail(args) => {
            api.read_tail(&args.common.path, args.n_rows, &args.common.to_options())
                .await?
        }
        Command::Headtail(args) => {
            api.read_head_tail(
                &args.common.path,
                args.n_rows_head,
                args.n_rows_tail,
                &args.common.to_options(),
            )
            .await?
        }
        Command::Range(args) => {
            api.read_line_range(
                &args.common.path,
                args.start_line,
                args.rows_after,
                &args.common.to_options(),
            )
            .await?
        }
    };

    print_table(&table)
}

fn print_table(table: &DataTable) -> Result<()> {
    if table.num_columns() == 0 {
        println!("(empty table)");
        return Ok(());
    }
    print_batches(std::slice::from_ref(table.batch()))?;
    println!("{} rows x {} columns", table.num_rows(), table.num_columns());
    Ok(())
}
