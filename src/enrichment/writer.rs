use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};
use rust_decimal::Decimal;

use crate::enrichment::errors::EnrichmentError;
use crate::models::EnrichedTransaction;

pub const ENRICHED_HEADER: [&str; 12] = [
    "TransactionID",
    "Date",
    "ProductID",
    "ProductName",
    "Quantity",
    "UnitPrice",
    "CustomerID",
    "Region",
    "API_Category",
    "API_Brand",
    "API_Rating",
    "API_Match"
];

/// Streams enriched transactions as pipe-delimited rows behind a fixed 12-column header.
///
/// Fields are written verbatim (never quoted) and missing catalog values become empty fields.
/// `UnitPrice` and `API_Rating` are written without trailing zeros but always with at least
/// one decimal place (`149.0`, `1299.5`, `4.0`).
pub struct EnrichedWriter<W: Write> {
    writer: Writer<W>
}

impl EnrichedWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`, creating parent directories as needed.
    pub fn create(path: &Path) -> Result<Self, EnrichmentError> {
        let open = || -> std::io::Result<File> {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                create_dir_all(parent)?;
            }
            File::create(path)
        };

        let file = open().map_err(|source| EnrichmentError::Create { path: path.to_path_buf(), source })?;

        Self::new(BufWriter::new(file))
    }
}

impl<W: Write> EnrichedWriter<W> {
    pub fn new(inner: W) -> Result<Self, EnrichmentError> {
        let mut writer = WriterBuilder::new()
            .delimiter(b'|')
            .quote_style(QuoteStyle::Never)
            .has_headers(false)
            .from_writer(inner);

        writer.write_record(ENRICHED_HEADER)?;

        Ok(Self { writer })
    }

    pub fn write(&mut self, record: &EnrichedTransaction) -> Result<(), EnrichmentError> {
        let tx = &record.transaction;

        self.writer.write_record([
            tx.transaction_id.clone(),
            tx.date.clone(),
            tx.product_id.clone(),
            tx.product_name.clone(),
            tx.quantity.to_string(),
            format_decimal(tx.unit_price),
            tx.customer_id.clone(),
            tx.region.clone(),
            record.api_category.clone().unwrap_or_default(),
            record.api_brand.clone().unwrap_or_default(),
            record.api_rating.map(|rating| format!("{rating:?}")).unwrap_or_default(),
            if record.api_match { "True" } else { "False" }.to_string()
        ])?;

        Ok(())
    }

    /// Flushes buffered rows and hands back the underlying writer.
    pub fn finish(self) -> Result<W, EnrichmentError> {
        let mut inner = self.writer.into_inner().map_err(|error| EnrichmentError::Io(error.into_error()))?;
        inner.flush()?;

        Ok(inner)
    }
}

fn format_decimal(value: Decimal) -> String {
    let normalized = value.normalize();

    match normalized.scale() {
        0 => format!("{normalized}.0"),
        _ => normalized.to_string()
    }
}
