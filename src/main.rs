use clap::Parser;
use csv_report::{Cli, Output};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let quiet = cli.quiet;

    if let Err(err) = cli.run().await {
        Output::new(false, quiet).error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
