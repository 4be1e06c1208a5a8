//! Document display formatting

use tabled::Tabled;

use super::render_table;
use crate::models::document::format_file_size;
use crate::models::{DocumentRecord, ExtractedData};

#[derive(Tabled)]
struct DocumentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Size")]
    size: String,
    #[tabled(rename = "Uploaded")]
    uploaded: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn format_document_list(documents: &[DocumentRecord]) -> String {
    if documents.is_empty() {
        return "No documents uploaded.".to_string();
    }

    let rows = documents
        .iter()
        .map(|doc| DocumentRow {
            id: doc.id.to_string(),
            name: doc.name.clone(),
            kind: doc.media_kind.to_string(),
            size: format_file_size(doc.size_bytes),
            uploaded: doc.uploaded_at.format("%Y-%m-%d").to_string(),
            status: doc.status.to_string(),
        })
        .collect();

    render_table(rows, &[3])
}

/// Detail view of a document and whatever was extracted from it
pub fn format_document_details(doc: &DocumentRecord, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Document: {}\n", doc.name));
    output.push_str(&format!("  ID:       {}\n", doc.id));
    output.push_str(&format!("  Type:     {}\n", doc.media_kind));
    output.push_str(&format!("  Size:     {}\n", format_file_size(doc.size_bytes)));
    output.push_str(&format!(
        "  Uploaded: {}\n",
        doc.uploaded_at.format("%Y-%m-%d %H:%M UTC")
    ));
    output.push_str(&format!("  Status:   {}\n", doc.status));

    match &doc.extracted {
        Some(ExtractedData::Statement {
            transactions,
            total_income,
            total_expenses,
            categories,
        }) => {
            output.push_str("\n  Extracted statement data:\n");
            output.push_str(&format!("    Transactions:   {}\n", transactions));
            output.push_str(&format!(
                "    Total Income:   {}\n",
                total_income.format_with_symbol(symbol)
            ));
            output.push_str(&format!(
                "    Total Expenses: {}\n",
                total_expenses.format_with_symbol(symbol)
            ));
            let names: Vec<&str> = categories.iter().map(|c| c.name()).collect();
            output.push_str(&format!("    Categories:     {}\n", names.join(", ")));
        }
        Some(ExtractedData::Bill {
            amount,
            due_date,
            category,
            vendor,
        }) => {
            output.push_str("\n  Extracted bill data:\n");
            output.push_str(&format!(
                "    Amount:   {}\n",
                amount.format_with_symbol(symbol)
            ));
            output.push_str(&format!("    Due Date: {}\n", due_date));
            output.push_str(&format!("    Utility:  {}\n", category));
            output.push_str(&format!("    Vendor:   {}\n", vendor));
        }
        None if doc.status.is_terminal() => {
            output.push_str("\n  No data could be extracted.\n");
        }
        None => {}
    }

    output
}
