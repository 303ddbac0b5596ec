use assert_cmd::Command;
use predicates::prelude::*;

fn huemix() -> Command {
    Command::cargo_bin("huemix").unwrap()
}

#[test]
fn test_mix_two_colors_evenly() {
    huemix()
        .args(["#ff0000:50", "#0000ff:50", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rgba(128, 0, 128, 0.7)"));
}

#[test]
fn test_default_weights_split_evenly() {
    // The store's two starting entries carry 50/50 when no weight is given
    huemix()
        .args(["#ff0000", "#0000ff", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rgba(128, 0, 128, 0.7)"));
}

#[test]
fn test_shorthand_matches_full_form() {
    huemix()
        .args(["#f00:50", "#00f:50", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rgba(128, 0, 128, 0.7)"));
}

#[test]
fn test_quiet_prints_bare_rgba() {
    huemix()
        .args(["--quiet", "#000000:100", "#ffffff:0"])
        .assert()
        .success()
        .stdout("rgba(0, 0, 0, 0.7)\n");
}

#[test]
fn test_invalid_color_reported_inline_and_excluded() {
    // The junk entry shows an inline note; its weight still dilutes the
    // blend (50+50+50 total, each valid color at a third)
    huemix()
        .args(["#ff0000:50", "notacolor:50", "#0000ff:50", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid hex color"))
        .stdout(predicate::str::contains("rgba(85, 0, 85, 0.7)"));
}

#[test]
fn test_fewer_than_two_valid_is_no_result() {
    // Not a fatal error: the report simply states there is no mix
    huemix()
        .args(["#ff0000", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No mix"));
}

#[test]
fn test_malformed_weight_keeps_the_default() {
    // ":abc" is silently ignored, leaving the starting 50
    huemix()
        .args(["#ff0000:abc", "#0000ff:50", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rgba(128, 0, 128, 0.7)"));
}

#[test]
fn test_direction_selects_gradient_axis() {
    huemix()
        .args(["#ff0000:50", "#0000ff:50", "--direction", "to-bottom", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "linear-gradient(to bottom, rgba(128, 0, 128, 0.7))",
        ));
}

#[test]
fn test_json_report() {
    huemix()
        .args(["--json", "#ff0000:50", "#0000ff:50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"red\": 128"))
        .stdout(predicate::str::contains("\"alpha\": 0.7"))
        .stdout(predicate::str::contains("\"direction\": \"to right\""))
        .stdout(predicate::str::contains(
            "linear-gradient(to right, rgba(128, 0, 128, 0.7))",
        ));
}

#[test]
fn test_json_without_result_has_null_mix() {
    huemix()
        .args(["--json", "#ff0000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mix\": null"))
        .stdout(predicate::str::contains("\"gradient\": null"));
}

#[test]
fn test_unknown_direction_is_an_error() {
    huemix()
        .args(["#ff0000", "#0000ff", "--direction", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("direction"));
}

#[test]
fn test_no_colors_is_an_error() {
    huemix()
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_empty_color_spec_is_an_error() {
    huemix()
        .args(["#ff0000", ":50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("color specification"));
}
