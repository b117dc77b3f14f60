use std::fs;
use std::net::TcpListener;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::Result;
use tempfile::TempDir;

fn unreachable_catalog_url() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let address = listener.local_addr()?;
    drop(listener);

    Ok(format!("http://{address}/products"))
}

fn run_cli(directory: &TempDir, input: &Path, extra_args: &[&str]) -> Result<Output> {
    let binary_path = env!("CARGO_BIN_EXE_sales-analytics");

    let output = Command::new(binary_path)
        .arg(input)
        .arg("--no-prompt")
        .arg("--catalog-url")
        .arg(unreachable_catalog_url()?)
        .arg("--catalog-timeout-secs")
        .arg("2")
        .arg("--enriched-output")
        .arg(directory.path().join("data").join("enriched_sales_data.txt"))
        .arg("--report-output")
        .arg(directory.path().join("output").join("sales_report.txt"))
        .args(extra_args)
        .output()?;

    Ok(output)
}

#[test]
fn test_cli_processes_sample_end_to_end() -> Result<()> {
    let directory = TempDir::new()?;
    let sample_path = Path::new("samples").join("sales_data.txt");

    let output = run_cli(&directory, &sample_path, &[])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("✓ Successfully read 15 transactions"));
    assert!(stdout.contains("✓ Parsed 13 records"));
    assert!(stdout.contains("✓ Valid: 9 | Invalid: 4"));
    assert!(stdout.contains("✓ Fetched 0 products"));
    assert!(stdout.contains("Process Complete!"));
    assert!(stdout.contains("Catalog products: 0 | Enriched: 0/9"));
    assert!(stdout.contains("Rejected records:"));
    assert!(stdout.contains("  - Transaction ID [X008] must start with 'T'"));
    assert!(stdout.contains("  - Quantity and unit price must be positive for transaction [T007]"));

    let enriched = fs::read_to_string(directory.path().join("data").join("enriched_sales_data.txt"))?;
    let mut lines = enriched.lines();

    assert_eq!(
        lines.next(),
        Some("TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region|API_Category|API_Brand|API_Rating|API_Match")
    );

    let rows: Vec<&str> = lines.collect();

    assert_eq!(rows.len(), 9);
    assert!(rows.iter().all(|row| row.split('|').count() == 12 && row.ends_with("||||False")));
    assert!(rows.contains(&"T004|2024-12-02|P104|USB Cable|20|149.0|C001|North||||False"));

    let report = fs::read_to_string(directory.path().join("output").join("sales_report.txt"))?;

    assert!(report.contains("Total Revenue:        182678.40"));
    assert!(report.contains("Total Products Enriched: 0/9"));

    Ok(())
}

#[test]
fn test_cli_applies_command_line_filters() -> Result<()> {
    let directory = TempDir::new()?;
    let sample_path = Path::new("samples").join("sales_data.txt");

    let output = run_cli(&directory, &sample_path, &["--region", "North", "--min-amount", "5000"])?;

    assert!(output.status.success());

    let enriched = fs::read_to_string(directory.path().join("data").join("enriched_sales_data.txt"))?;
    let ids: Vec<&str> = enriched.lines().skip(1).filter_map(|row| row.split('|').next()).collect();

    assert_eq!(ids, vec!["T001", "T011"]);

    Ok(())
}

#[test]
fn test_cli_reports_missing_input_without_failing() -> Result<()> {
    let directory = TempDir::new()?;

    let output = run_cli(&directory, &directory.path().join("missing.txt"), &[])?;

    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.contains("ERROR OCCURRED"));
    assert!(stdout.contains("No transactions to process"));
    assert!(!directory.path().join("data").join("enriched_sales_data.txt").exists());

    Ok(())
}
