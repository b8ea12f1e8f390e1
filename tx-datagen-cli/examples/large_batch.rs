//! Writes a large seeded batch for load-testing downstream consumers.
//! Can be run with `cargo run --example large_batch`.

use std::error::Error;
use std::path::Path;

use tx_datagen::generator::{Generator, GeneratorConfig};

fn main() -> Result<(), Box<dyn Error>> {
    let config = GeneratorConfig::new(5_000, 1_000_000)?;
    let mut generator = Generator::with_seed(config, 42);
    generator.write_csv(Path::new("rand.csv"))?;
    Ok(())
}
