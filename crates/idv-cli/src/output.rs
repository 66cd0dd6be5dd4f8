//! Report rendering: findings table for humans, JSON payload for machines.

use anyhow::Result;
use chrono::Utc;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use idv_model::{ReportMetadata, ValidationReport};

const REPORT_SCHEMA: &str = "idv.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct ReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    valid: bool,
    codes: Vec<&'static str>,
    report: &'a ValidationReport,
}

pub fn print_report(report: &ValidationReport) {
    println!("Kind: {}", report.kind);
    if let Some(normalized) = &report.normalized {
        println!("Normalized: {normalized}");
    }
    if let ReportMetadata::Password { strength, length } = report.metadata {
        println!("Strength: {strength}/{}", idv_engine::MAX_STRENGTH);
        println!("Length: {length}");
    }

    if report.is_valid() {
        println!("Result: valid");
        return;
    }

    println!("Result: invalid");
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Category"),
        header_cell("Message"),
    ]);
    for finding in &report.findings {
        table.add_row(vec![
            Cell::new(finding.code()).fg(Color::Red),
            Cell::new(finding.category().label()),
            Cell::new(finding.message()),
        ]);
    }
    println!("{table}");
}

pub fn print_report_json(report: &ValidationReport) -> Result<()> {
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        valid: report.is_valid(),
        codes: report.codes(),
        report,
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
