//! End-to-end tests of the `delivery-fee` binary.
//!
//! Only offline commands are exercised here; the venue API is covered by the
//! api-client crate's mock-server tests.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

const HELSINKI_PRICING: &str = r#"{
    "venue_raw": {
        "delivery_specs": {
            "order_minimum_no_surcharge": 1000,
            "delivery_pricing": {
                "base_price": 190,
                "distance_ranges": [
                    {"min": 0, "max": 500, "a": 0, "b": 0, "flag": null},
                    {"min": 500, "max": 1000, "a": 100, "b": 0, "flag": null},
                    {"min": 1000, "max": 1500, "a": 200, "b": 0, "flag": null},
                    {"min": 1500, "max": 2000, "a": 200, "b": 1, "flag": null},
                    {"min": 2000, "max": 0, "a": 0, "b": 0, "flag": null}
                ]
            }
        }
    }
}"#;

fn delivery_fee() -> Command {
    let mut cmd = Command::cargo_bin("delivery-fee").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn pricing_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(HELSINKI_PRICING.as_bytes()).unwrap();
    file
}

fn quote(file: &NamedTempFile, cart_value: &str, lat: &str, lon: &str) -> Command {
    let mut cmd = delivery_fee();
    cmd.arg("quote")
        .arg("--pricing")
        .arg(file.path())
        .args(["--venue-lat", "60.1699", "--venue-lon", "24.9384"])
        .args(["--cart-value", cart_value, "--lat", lat, "--lon", lon]);
    cmd
}

#[test]
fn parse_accepts_direction_suffix() {
    delivery_fee()
        .args(["parse", "51.5074N", "--axis", "lat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("latitude 51.5074"));
}

#[test]
fn parse_rejects_mismatched_direction() {
    delivery_fee()
        .args(["parse", "10W", "--axis", "lat"])
        .assert()
        .failure();
}

#[test]
fn parse_json_applies_west_sign() {
    let output = delivery_fee()
        .args(["--format", "json", "parse", "-2.3522W", "--axis", "lon"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["value"], -2.3522);
    assert_eq!(json["axis"], "longitude");
}

#[test]
fn distance_kokkola_to_helsinki() {
    let output = delivery_fee()
        .args(["--format", "json", "distance", "63.8415", "23.1250", "60.1699", "24.9384"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let km = json["kilometers"].as_f64().unwrap();
    assert!((km - 419.0).abs() <= 1.0, "got {km} km");
}

#[test]
fn distance_rejects_out_of_range_points() {
    delivery_fee()
        .args(["distance", "91", "0", "0", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn quote_helsinki_total() {
    let file = pricing_file();

    quote(&file, "7", "60.17094", "24.93087")
        .assert()
        .success()
        .stdout(predicate::str::contains("11.90 €"))
        .stdout(predicate::str::contains("432 m"));
}

#[test]
fn quote_json_breakdown() {
    let file = pricing_file();

    let output = quote(&file, "7.00", "60.17094", "24.93087")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cartValue"], 700);
    assert_eq!(json["deliveryFee"], 190);
    assert_eq!(json["smallOrderSurcharge"], 300);
    assert_eq!(json["totalPrice"], 1190);
    assert!(json.get("errorMessage").is_none());
}

#[test]
fn quote_unreachable_distance() {
    let file = pricing_file();

    quote(&file, "20", "10", "20")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Oops... Something went wrong"))
        .stderr(predicate::str::contains(
            "exceeds the maximum delivery distance of 2000 m.",
        ));
}

#[test]
fn quote_invalid_coordinates() {
    let file = pricing_file();

    quote(&file, "7", "not-a-number", "24.93087")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid coordinates."));
}

#[test]
fn quote_rejects_comma_decimal_separator() {
    let file = pricing_file();

    quote(&file, "7,50", "60.17094", "24.93087")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use a dot (.) as the decimal separator"));
}

#[test]
fn quote_error_breakdown_as_json() {
    let file = pricing_file();

    let output = quote(&file, "-1", "60.17094", "24.93087")
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["errorMessage"], "Cart value must be at least 0");
    assert_eq!(json["deliveryFee"], 0);
    assert!(json.get("totalPrice").is_none());
}

#[test]
fn verbose_json_logs_go_to_stderr() {
    let file = pricing_file();

    let output = quote(&file, "7", "60.17094", "24.93087")
        .args(["--verbose", "--log-format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr
        .lines()
        .find(|line| line.contains("price estimated"))
        .unwrap_or_else(|| panic!("no estimate log line in: {stderr}"));
    let event: Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "DEBUG");
    assert_eq!(event["fields"]["total"], 1190);
}

#[test]
fn quote_missing_pricing_file() {
    delivery_fee()
        .args(["quote", "--pricing", "/nonexistent/pricing.json"])
        .args(["--venue-lat", "60.1699", "--venue-lon", "24.9384"])
        .args(["--cart-value", "7", "--lat", "60.17094", "--lon", "24.93087"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn estimate_validates_input_before_fetching() {
    delivery_fee()
        .args(["--api-url", "http://127.0.0.1:9/venues"])
        .args(["estimate", "--venue", "home-assignment-venue-helsinki"])
        .args(["--cart-value", "7", "--lat", "91", "--lon", "24.93087"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid coordinates."));
}
