use assert_cmd::Command;
use std::fs;

#[test]
fn trajectory_plot_renders_png() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png_path = dir.path().join("trajectory.png");

    Command::cargo_bin("trajectory_plot")
        .expect("trajectory_plot bin")
        .args([
            "--distance",
            "4.5",
            "--launch-angle",
            "45",
            "--output",
            png_path.to_str().unwrap(),
            "--width",
            "400",
            "--height",
            "300",
        ])
        .assert()
        .success();

    let metadata = fs::metadata(png_path).expect("png metadata");
    assert!(metadata.len() > 0, "PNG output should not be empty");
}

#[test]
fn degenerate_angle_still_renders() {
    let dir = tempfile::tempdir().expect("tempdir");
    let png_path = dir.path().join("flat.png");

    Command::cargo_bin("trajectory_plot")
        .expect("trajectory_plot bin")
        .args([
            "--distance",
            "4.5",
            "--launch-angle",
            "0",
            "--output",
            png_path.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(fs::metadata(png_path).expect("png metadata").len() > 0);
}
