use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use rust_decimal::Decimal;
use tempfile::TempDir;

use tx_datagen::generator::{Generator, GeneratorConfig};
use tx_datagen::output::timestamped_path;
use tx_datagen::transaction::{TransactionKind, TransactionRecord};

fn write_sample(dir: &TempDir, clients: u16, transactions: u32, seed: u64) -> std::path::PathBuf {
    let path = dir.path().join("out.csv");
    let config = GeneratorConfig::new(clients, transactions).unwrap();
    Generator::with_seed(config, seed).write_csv(&path).unwrap();
    path
}

fn read_back(path: &Path) -> Vec<TransactionRecord> {
    let mut reader = ReaderBuilder::new().from_path(path).unwrap();
    reader.deserialize().map(Result::unwrap).collect()
}

#[test]
fn test_header_and_line_count() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, 3, 5, 7);

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "type,client,tx,amount");
}

#[test]
fn test_records_meet_bounds() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, 3, 500, 11);

    let records = read_back(&path);
    assert_eq!(records.len(), 500);

    let min = Decimal::new(1, 2);
    let max = Decimal::new(100_000, 2);
    for (expected_id, record) in (1u32..).zip(&records) {
        assert_eq!(record.transaction_id, expected_id);
        assert!((1..=3).contains(&record.client_id));
        assert!(record.amount.as_decimal() >= min);
        assert!(record.amount.as_decimal() <= max);
        assert!(record.amount.as_decimal().scale() <= 2);
        assert!(matches!(
            record.transaction_type,
            TransactionKind::Deposit | TransactionKind::Withdrawal
        ));
    }
}

#[test]
fn test_amounts_have_two_fractional_digits_in_file() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, 10, 100, 3);

    let contents = fs::read_to_string(&path).unwrap();
    for line in contents.lines().skip(1) {
        let amount = line.rsplit(',').next().unwrap();
        let (_, fraction) = amount.split_once('.').unwrap();
        assert_eq!(fraction.len(), 2, "bad amount field: {amount}");
    }
}

#[test]
fn test_single_client_single_transaction() {
    let dir = TempDir::new().unwrap();
    let path = write_sample(&dir, 1, 1, 0);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.lines().count(), 2);

    let records = read_back(&path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].client_id, 1);
    assert_eq!(records[0].transaction_id, 1);
}

#[test]
fn test_same_seed_writes_identical_files() {
    let dir = TempDir::new().unwrap();
    let config = GeneratorConfig::new(100, 200).unwrap();

    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    Generator::with_seed(config, 42).write_csv(&first).unwrap();
    Generator::with_seed(config, 42).write_csv(&second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_timestamped_path_shape() {
    let path = timestamped_path(Path::new("out/transactions.csv"));
    assert_eq!(path.parent(), Some(Path::new("out")));

    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("transactions_"));
    assert!(name.ends_with(".csv"));

    let stamp = &name["transactions_".len()..name.len() - ".csv".len()];
    assert_eq!(stamp.len(), 15);
    assert!(stamp[..8].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(&stamp[8..9], "_");
    assert!(stamp[9..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_unwritable_destination_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-subdir").join("out.csv");
    let config = GeneratorConfig::new(10, 100).unwrap();
    let result = Generator::with_seed(config, 1).write_csv(&path);
    assert!(result.is_err());
}
