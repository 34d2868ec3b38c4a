//! Integration tests for the courtdoc CLI
//!
//! These exercise the full path a command takes: case file on disk ->
//! request loading -> file intake -> composition -> PDF export.

use std::fs;

use tempfile::TempDir;

use courtdoc_cli::{exhibit_command, export_command};
use courtdoc_pdf::ExportOptions;

// Smallest valid PNG: 1x1 transparent pixel
const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

fn write_case_file(dir: &TempDir) -> std::path::PathBuf {
    fs::write(dir.path().join("slip.png"), PNG_1X1).unwrap();

    let case_path = dir.path().join("case.json");
    fs::write(
        &case_path,
        r#"{
            "case": {
                "court_name": "Judicial Magistrate, Pune",
                "applicant_name": "A. Sharma",
                "deposit_type": "Fixed Deposit",
                "deposit_amount": "50000",
                "interest_rate": "7.5",
                "deposit_duration": "24 months"
            },
            "payment": { "amount_paise": 120000, "receipt_number": "R-42" },
            "exhibits": [
                { "label": "A", "title": "A", "description": "Deposit slip", "files": ["slip.png"] },
                { "label": "B", "title": "B", "description": "Demand notice",
                  "content": "Copy of the demand notice dated 2023-11-01." }
            ],
            "context": { "verification_place": "Pune" }
        }"#,
    )
    .unwrap();
    case_path
}

#[test]
fn export_produces_pdf() {
    let dir = TempDir::new().unwrap();
    let case_path = write_case_file(&dir);
    let output = dir.path().join("filing.pdf");

    export_command(
        &case_path,
        &output,
        Some("2024-01-05"),
        ExportOptions::default(),
    )
    .unwrap();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"), "output is not a PDF");
}

#[test]
fn exhibit_export_produces_pdf() {
    let dir = TempDir::new().unwrap();
    let case_path = write_case_file(&dir);
    let output = dir.path().join("exhibit-A.pdf");

    exhibit_command(&case_path, "A", Some(&output)).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn unknown_exhibit_label_fails() {
    let dir = TempDir::new().unwrap();
    let case_path = write_case_file(&dir);

    let err = exhibit_command(&case_path, "Z", None).unwrap_err();
    assert!(err.to_string().contains("No exhibit labeled 'Z'"));
}

#[test]
fn missing_case_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");
    let err = export_command(&missing, &dir.path().join("out.pdf"), None, ExportOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn non_sequence_exhibits_is_rejected() {
    let dir = TempDir::new().unwrap();
    let case_path = dir.path().join("bad.json");
    fs::write(&case_path, r#"{ "exhibits": "not a list" }"#).unwrap();

    let err = export_command(
        &case_path,
        &dir.path().join("out.pdf"),
        None,
        ExportOptions::default(),
    )
    .unwrap_err();
    assert!(format!("{:#}", err).contains("must be a sequence"));
}

#[test]
fn toml_case_file_is_accepted() {
    let dir = TempDir::new().unwrap();
    let case_path = dir.path().join("case.toml");
    fs::write(
        &case_path,
        r#"
[case]
applicant_name = "A. Sharma"

[payment]
amount_paise = 5000

[[exhibits]]
label = "A"
title = "A"
description = "Demand notice"
content = "Copy of the demand notice."
"#,
    )
    .unwrap();

    let output = dir.path().join("filing.pdf");
    export_command(&case_path, &output, Some("2024-01-05"), ExportOptions::default()).unwrap();
    assert!(fs::read(&output).unwrap().starts_with(b"%PDF"));
}
