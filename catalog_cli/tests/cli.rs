use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_resources() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("image"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_image_create_requires_product_id() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.args([
        "image",
        "create",
        "--catalog",
        "productSearch/catalogs/1",
        "--image-uri",
        "gs://bucket/shoe.jpg",
    ])
    .assert()
    .failure()
    .code(2)
    .stderr(predicate::str::contains("--product-id"));
}

#[test]
fn test_image_purge_requires_product_id() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.args(["image", "purge", "--catalog", "productSearch/catalogs/1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--product-id"));
}

#[test]
fn test_catalog_delete_requires_name() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.args(["catalog", "delete"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unknown_subcommand_fails_with_usage() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.arg("frobnicate")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_completions_generate() {
    let mut cmd = Command::cargo_bin("catalog").unwrap();
    cmd.args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog"));
}
