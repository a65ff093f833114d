// 📦 Batch Validation - CSV of card numbers → report
//
// Output never carries a full card number: each row keeps the masked form
// plus a SHA-256 fingerprint of the normalized digits, which is also what
// duplicate detection keys on.

use crate::network::CardNetwork;
use crate::normalize::{mask_number, normalize};
use crate::validator::{validate_card, Outcome};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};
use std::io::{Read, Write};
use std::path::Path;
use uuid::Uuid;

// ============================================================================
// TYPES
// ============================================================================

/// One input row; the CSV needs a `number` column
#[derive(Debug, Deserialize)]
struct BatchInputRow {
    number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRecord {
    /// Line in the source CSV (header is line 1)
    pub line: u64,
    pub masked: String,
    pub fingerprint: String,
    pub network: CardNetwork,
    pub valid: bool,
    pub outcome: Outcome,
    /// Same digits already seen earlier in the file
    pub duplicate: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub bad_checksum: usize,
    pub unknown: usize,
    pub duplicates: usize,
    pub by_network: BTreeMap<CardNetwork, usize>,
}

impl BatchSummary {
    fn record(&mut self, record: &BatchRecord) {
        self.total += 1;
        match record.outcome {
            Outcome::Valid => self.valid += 1,
            Outcome::BadChecksum => self.bad_checksum += 1,
            Outcome::UnknownNetwork => self.unknown += 1,
        }
        if record.duplicate {
            self.duplicates += 1;
        }
        *self.by_network.entry(record.network).or_insert(0) += 1;
    }

    pub fn summary(&self) -> String {
        format!(
            "{} numbers: {} valid, {} bad checksum, {} unknown network | {} duplicates",
            self.total, self.valid, self.bad_checksum, self.unknown, self.duplicates
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub records: Vec<BatchRecord>,
    pub summary: BatchSummary,
}

/// Output format for a batch report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
}

// ============================================================================
// VALIDATION
// ============================================================================

/// SHA-256 of the normalized digits, hex encoded
pub fn fingerprint(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalize(raw).as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Validate every row of a CSV read from `reader`
pub fn validate_reader<R: Read>(reader: R, source: &str) -> Result<BatchReport> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr.headers().context("Failed to read CSV header")?.clone();

    let mut seen = HashSet::new();
    let mut records = Vec::new();
    let mut summary = BatchSummary::default();

    for result in rdr.records() {
        let row = result.context("Failed to read CSV row")?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);
        let input: BatchInputRow = row
            .deserialize(Some(&headers))
            .with_context(|| format!("Failed to deserialize row at line {}", line))?;

        let number = input.number.trim();
        let result = validate_card(number);
        let fingerprint = fingerprint(number);
        let duplicate = !seen.insert(fingerprint.clone());

        let record = BatchRecord {
            line,
            masked: mask_number(number),
            fingerprint,
            network: result.network,
            valid: result.valid,
            outcome: result.outcome(),
            duplicate,
        };
        summary.record(&record);
        records.push(record);
    }

    tracing::info!(source, total = summary.total, valid = summary.valid, "batch validated");

    Ok(BatchReport {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        source: source.to_string(),
        records,
        summary,
    })
}

/// Validate every row of a CSV file
pub fn validate_file(csv_path: &Path) -> Result<BatchReport> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {:?}", csv_path))?;
    validate_reader(file, &csv_path.display().to_string())
}

// ============================================================================
// OUTPUT
// ============================================================================

impl BatchReport {
    pub fn write_json<W: Write>(&self, out: W) -> Result<()> {
        serde_json::to_writer_pretty(out, self).context("Failed to write JSON report")
    }

    /// Records only; the summary goes to the console
    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(out);
        for record in &self.records {
            wtr.serialize(record).context("Failed to write CSV record")?;
        }
        wtr.flush().context("Failed to flush CSV output")?;
        Ok(())
    }

    pub fn write<W: Write>(&self, format: ReportFormat, out: W) -> Result<()> {
        match format {
            ReportFormat::Json => self.write_json(out),
            ReportFormat::Csv => self.write_csv(out),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
