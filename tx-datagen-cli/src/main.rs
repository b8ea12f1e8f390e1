use std::error::Error;
use std::path::Path;

use clap::Parser;
use log::info;

use tx_datagen::generator::{Generator, GeneratorConfig};
use tx_datagen::output::timestamped_path;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Upper bound (inclusive) for random client IDs
    #[clap(long, default_value_t = 10)]
    pub(crate) clients: u16,

    /// Number of transactions to generate
    #[clap(long, default_value_t = 100)]
    pub(crate) transactions: u32,

    /// Base output file name; a timestamp is inserted before the .csv suffix
    #[clap(long, default_value = "transactions.csv")]
    pub(crate) output: String,

    /// Seed for the random number generator, for reproducible output
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = GeneratorConfig::new(cli.clients, cli.transactions)?;
    let path = timestamped_path(Path::new(&cli.output));
    info!("writing {} transactions to {}", cli.transactions, path.display());

    let mut generator = match cli.seed {
        Some(seed) => Generator::with_seed(config, seed),
        None => Generator::new(config),
    };
    generator.write_csv(&path)?;

    println!(
        "Generated {} transactions for {} clients in {}",
        cli.transactions,
        cli.clients,
        path.display()
    );

    Ok(())
}
