use std::path::Path;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::DataGenError;
use crate::transaction::TransactionRecord;

/// Validated generation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    num_clients: u16,
    num_transactions: u32,
}

impl GeneratorConfig {
    /// # Errors
    /// Errors when either count is zero; client IDs are drawn from
    /// `1..=num_clients` and transaction IDs from `1..=num_transactions`,
    /// so both ranges must be non-empty.
    pub fn new(num_clients: u16, num_transactions: u32) -> Result<Self, DataGenError> {
        if num_clients == 0 {
            return Err(DataGenError::InvalidArgument("clients must be at least 1"));
        }
        if num_transactions == 0 {
            return Err(DataGenError::InvalidArgument(
                "transactions must be at least 1",
            ));
        }
        Ok(GeneratorConfig {
            num_clients,
            num_transactions,
        })
    }

    #[must_use]
    pub fn num_clients(self) -> u16 {
        self.num_clients
    }

    #[must_use]
    pub fn num_transactions(self) -> u32 {
        self.num_transactions
    }
}

/// Produces random transaction records and writes them out as CSV.
///
/// The RNG is owned by the generator rather than taken from process-wide
/// state, so a seeded generator replays the exact same record sequence.
#[derive(Debug)]
pub struct Generator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl Generator {
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Generator {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn with_seed(config: GeneratorConfig, seed: u64) -> Self {
        Generator {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Samples all records in one pass. Transaction IDs are assigned in
    /// generation order, contiguous and ascending from 1; kind, client and
    /// amount are drawn uniformly per record.
    pub fn generate(&mut self) -> Vec<TransactionRecord> {
        let records: Vec<TransactionRecord> = (1..=self.config.num_transactions)
            .map(|transaction_id| TransactionRecord {
                transaction_type: self.rng.gen(),
                client_id: self.rng.gen_range(1..=self.config.num_clients),
                transaction_id,
                amount: self.rng.gen(),
            })
            .collect();
        debug!("generated {} records", records.len());
        records
    }

    /// Generates the configured number of records and writes them to `path`,
    /// creating or truncating the file. The header row comes from the record's
    /// serde field names: `type,client,tx,amount`.
    ///
    /// # Errors
    /// Errors when the destination cannot be opened or written. The writer is
    /// flushed and closed on all exit paths; a failure mid-write can still
    /// leave a truncated file behind.
    pub fn write_csv(&mut self, path: &Path) -> Result<(), DataGenError> {
        let records = self.generate();
        let mut writer = csv::Writer::from_path(path)?;
        for record in &records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        info!("wrote {} records to {}", records.len(), path.display());
        Ok(())
    }
}
