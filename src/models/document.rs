//! Uploaded document model
//!
//! Documents start in `Processing` and move exactly once to a terminal state
//! (`Completed` or `Error`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::DocumentId;
use super::money::Money;

/// File type of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Pdf,
    Image,
}

impl MediaKind {
    /// Detect the kind from a file name or MIME type; anything that is not a
    /// PDF is treated as an image scan
    pub fn detect(name_or_mime: &str) -> Self {
        if name_or_mime.to_ascii_lowercase().contains("pdf") {
            Self::Pdf
        } else {
            Self::Image
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "PDF"),
            Self::Image => write!(f, "Image"),
        }
    }
}

/// Processing state of a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Processing,
    Completed,
    Error,
}

impl DocumentStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Processing)
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processing => write!(f, "Processing"),
            Self::Completed => write!(f, "Completed"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// Utility a bill was issued for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UtilityKind {
    Electricity,
    Water,
    Internet,
    Phone,
}

impl UtilityKind {
    pub fn all() -> &'static [Self] {
        &[Self::Electricity, Self::Water, Self::Internet, Self::Phone]
    }
}

impl fmt::Display for UtilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Figures pulled out of a processed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ExtractedData {
    /// Summary of a bank statement
    Statement {
        transactions: u32,
        total_income: Money,
        total_expenses: Money,
        categories: Vec<Category>,
    },
    /// A single payable bill
    Bill {
        amount: Money,
        due_date: NaiveDate,
        category: UtilityKind,
        vendor: String,
    },
}

impl fmt::Display for ExtractedData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Statement {
                transactions,
                total_income,
                total_expenses,
                ..
            } => write!(
                f,
                "{} transactions, income {}, expenses {}",
                transactions, total_income, total_expenses
            ),
            Self::Bill {
                amount,
                due_date,
                category,
                vendor,
            } => write!(f, "{} bill {} from {}, due {}", category, amount, vendor, due_date),
        }
    }
}

/// An uploaded statement, bill or receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub name: String,
    pub media_kind: MediaKind,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted: Option<ExtractedData>,
}

impl DocumentRecord {
    /// Create a record in the `Processing` state
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        let name = name.into();
        Self {
            id: DocumentId::new(),
            media_kind: MediaKind::detect(&name),
            name,
            size_bytes,
            uploaded_at: Utc::now(),
            status: DocumentStatus::Processing,
            extracted: None,
        }
    }

    pub fn with_id(mut self, id: DocumentId) -> Self {
        self.id = id;
        self
    }

    /// Move to `Completed`. Returns false if the document already finished.
    pub fn complete(&mut self, extracted: Option<ExtractedData>) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = DocumentStatus::Completed;
        self.extracted = extracted;
        true
    }

    /// Move to `Error`. Returns false if the document already finished.
    pub fn fail(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.status = DocumentStatus::Error;
        true
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Document name cannot be empty".into());
        }
        Ok(())
    }
}

/// Human-readable file size using 1024-based units
///
/// # Examples
/// ```
/// use finbuddy::models::document::format_file_size;
/// assert_eq!(format_file_size(0), "0 Bytes");
/// assert_eq!(format_file_size(2_048_000), "1.95 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.2}", value);
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_detection() {
        assert_eq!(MediaKind::detect("statement.PDF"), MediaKind::Pdf);
        assert_eq!(MediaKind::detect("application/pdf"), MediaKind::Pdf);
        assert_eq!(MediaKind::detect("bill.jpg"), MediaKind::Image);
    }

    #[test]
    fn test_new_document_is_processing() {
        let doc = DocumentRecord::new("bank_statement_jan2024.pdf", 2048000);
        assert_eq!(doc.status, DocumentStatus::Processing);
        assert_eq!(doc.media_kind, MediaKind::Pdf);
        assert!(doc.extracted.is_none());
    }

    #[test]
    fn test_transitions_happen_once() {
        let mut doc = DocumentRecord::new("receipt.png", 10);
        assert!(doc.complete(None));
        assert_eq!(doc.status, DocumentStatus::Completed);

        assert!(!doc.fail());
        assert_eq!(doc.status, DocumentStatus::Completed);

        let mut doc = DocumentRecord::new("receipt.png", 10);
        assert!(doc.fail());
        assert!(!doc.complete(None));
        assert_eq!(doc.status, DocumentStatus::Error);
    }

    #[test]
    fn test_format_file_size() {
        assert_eq!(format_file_size(0), "0 Bytes");
        assert_eq!(format_file_size(512), "512 Bytes");
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(1024000), "1000 KB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
    }

    #[test]
    fn test_extracted_data_serialization() {
        let data = ExtractedData::Bill {
            amount: Money::from_rupees(3200),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 15).unwrap(),
            category: UtilityKind::Electricity,
            vendor: "State Electricity Board".into(),
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["kind"], "bill");
        assert_eq!(json["amount"], 320000);
        let back: ExtractedData = serde_json::from_value(json).unwrap();
        assert_eq!(back, data);
    }
}
