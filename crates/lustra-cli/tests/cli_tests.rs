use std::io::Cursor;
use std::path::Path;

use assert_cmd::Command;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn lustra_cmd() -> Command {
    let mut cmd = Command::cargo_bin("lustra").expect("Failed to find lustra binary");
    cmd.arg("--no-color");
    cmd
}

/// Writes `count` small JPEG files into `dir` with sortable names
fn write_photo_batch(dir: &Path, count: usize) {
    let img = RgbImage::from_pixel(160, 120, image::Rgb([100, 120, 140]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_with_encoder(JpegEncoder::new_with_quality(&mut out, 85))
        .expect("Failed to encode test jpeg");
    let bytes = out.into_inner();
    for i in 0..count {
        std::fs::write(dir.join(format!("foto-{i:03}.jpg")), &bytes)
            .expect("Failed to write test jpeg");
    }
}

#[test]
fn test_cli_flows_lists_builtin_catalog() {
    lustra_cmd()
        .arg("flows")
        .assert()
        .success()
        .stdout(predicate::str::contains("Servicios disponibles"))
        .stdout(predicate::str::contains("Interior Detallado"))
        .stdout(predicate::str::contains("`exterior_detailed`"));
}

#[test]
fn test_cli_no_subcommand_defaults_to_flows() {
    lustra_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Servicios disponibles"));
}

#[test]
fn test_cli_steps_previews_checklist() {
    lustra_cmd()
        .args(["steps", "--select", "exterior"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lista de capturas"))
        .stdout(predicate::str::contains("exterior · ANTES"))
        .stdout(predicate::str::contains("exterior · DESPUÉS"))
        .stdout(predicate::str::contains("8. "));
}

#[test]
fn test_cli_steps_rejects_conflicting_selection() {
    lustra_cmd()
        .args(["steps", "--select", "interior,interior_detailed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mutually exclusive"));
}

#[test]
fn test_cli_steps_rejects_unknown_flow() {
    lustra_cmd()
        .args(["steps", "--select", "tapiceria"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in catalog"));
}

#[test]
fn test_cli_run_produces_pdf_report() {
    let temp_dir = create_cli_test_environment();
    let photos_dir = temp_dir.path().join("fotos");
    std::fs::create_dir(&photos_dir).expect("Failed to create photos dir");
    // exterior: 4 BEFORE + 4 AFTER
    write_photo_batch(&photos_dir, 8);
    let output = temp_dir.path().join("informe.pdf");

    lustra_cmd()
        .args([
            "run",
            "--select",
            "exterior",
            "--output",
            output.to_str().unwrap(),
            "--plate",
            "1234 ABC",
            photos_dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Informe generado"))
        .stdout(predicate::str::contains("informe.pdf"));

    let bytes = std::fs::read(&output).expect("Report file missing");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_cli_run_fails_with_too_few_photos() {
    let temp_dir = create_cli_test_environment();
    let photos_dir = temp_dir.path().join("fotos");
    std::fs::create_dir(&photos_dir).expect("Failed to create photos dir");
    write_photo_batch(&photos_dir, 3);

    lustra_cmd()
        .args(["run", "--select", "exterior", photos_dir.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not enough photos"));
}

#[test]
fn test_cli_custom_catalog_file() {
    let temp_dir = create_cli_test_environment();
    let catalog_path = temp_dir.path().join("catalog.json");
    std::fs::write(
        &catalog_path,
        r#"{
            "flows": [
                {"id": "llantas", "title": "Llantas", "before": ["Delantera", "Trasera"]}
            ],
            "conflicts": []
        }"#,
    )
    .expect("Failed to write catalog");

    lustra_cmd()
        .args(["--catalog-file", catalog_path.to_str().unwrap(), "flows"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Llantas"))
        .stdout(predicate::str::contains("`llantas`"));
}

#[test]
fn test_cli_missing_catalog_file_is_an_error() {
    lustra_cmd()
        .args(["--catalog-file", "/nonexistent/catalog.json", "flows"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load flow catalog"));
}
