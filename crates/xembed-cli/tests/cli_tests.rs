use assert_cmd::Command;
use predicates::prelude::*;

fn seeded_image(dir: &std::path::Path, name: &str) -> Vec<u8> {
    let bytes: Vec<u8> = (0u8..=255).cycle().take(1000).collect();
    std::fs::write(dir.join(name), &bytes).unwrap();
    bytes
}

#[test]
fn default_run_roundtrips_the_image() {
    let dir = tempfile::tempdir().unwrap();
    let image_bytes = seeded_image(dir.path(), "scenery.png");

    Command::cargo_bin("xembed")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("created XML file"))
        .stdout(predicate::str::contains("saved image to"));

    assert!(dir.path().join("image.xml").exists());
    let extracted = std::fs::read(
        dir.path()
            .join("extracted_images")
            .join("extracted_image0.jpg"),
    )
    .unwrap();
    assert_eq!(extracted, image_bytes);
}

#[test]
fn run_with_missing_image_still_writes_xml() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("xembed")
        .unwrap()
        .arg("run")
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no images extracted"));

    assert!(dir.path().join("image.xml").exists());
    assert!(!dir.path().join("extracted_images").exists());
}

#[test]
fn embed_and_extract_subcommands() {
    let dir = tempfile::tempdir().unwrap();
    let image_bytes = seeded_image(dir.path(), "pic.bin");

    Command::cargo_bin("xembed")
        .unwrap()
        .args(["embed", "--image", "pic.bin", "--output", "out.xml"])
        .current_dir(dir.path())
        .assert()
        .success();

    Command::cargo_bin("xembed")
        .unwrap()
        .args(["extract", "--input", "out.xml", "--output-dir", "outdir"])
        .current_dir(dir.path())
        .assert()
        .success();

    let extracted = std::fs::read(dir.path().join("outdir").join("extracted_image0.jpg")).unwrap();
    assert_eq!(extracted, image_bytes);
}

#[test]
fn extract_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("xembed")
        .unwrap()
        .args(["extract", "--input", "absent.xml"])
        .current_dir(dir.path())
        .assert()
        .failure();
}
