use assert_cmd::Command;
use pretty_assertions::assert_eq;

fn qr_term() -> Command {
    let mut cmd = Command::cargo_bin("qr-term").unwrap();
    cmd.env_remove("NO_COLOR").env_remove("RUST_LOG");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_colored_code() {
    let output = qr_term().arg("test").output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("\x1b[40m\x1b[97m"));
    assert!(stdout.contains("\u{2588}\u{2588}"));
}

#[test]
fn no_color_flag_and_env() {
    let output = qr_term().args(["--no-color", "test"]).output().unwrap();
    assert!(!stdout_of(&output).contains('\x1b'));

    for value in ["1", "0", "false"] {
        let output = qr_term().env("NO_COLOR", value).arg("test").output().unwrap();
        assert_eq!(output.status.code(), Some(0));
        assert!(!stdout_of(&output).contains('\x1b'), "NO_COLOR={value}");
    }

    let output = qr_term().env("NO_COLOR", "").arg("test").output().unwrap();
    assert!(stdout_of(&output).contains('\x1b'));
}

#[test]
fn reads_piped_data() {
    let piped = qr_term()
        .arg("--no-color")
        .write_stdin("piped data\n")
        .output()
        .unwrap();
    let direct = qr_term().args(["--no-color", "piped data"]).output().unwrap();
    assert_eq!(piped.status.code(), Some(0));
    assert_eq!(stdout_of(&piped), stdout_of(&direct));
}

#[test]
fn wifi_mode() {
    let output = qr_term()
        .args(["--wifi", "--ssid", "Net", "--password", "pass"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn wifi_without_ssid_fails() {
    let output = qr_term().arg("--wifi").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("--ssid is required"));
}

#[test]
fn wifi_without_password_fails() {
    let output = qr_term().args(["--wifi", "--ssid", "Net"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("password required for WPA"));
}

#[test]
fn missing_data_fails() {
    let output = qr_term().write_stdin("").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("No data provided"));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn oversized_data_fails() {
    let data = "x".repeat(4000);
    let output = qr_term().arg(&data).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).starts_with("Error: "));
}

#[test]
fn oversized_border_or_size_fails() {
    for args in [["-b", "100000"], ["-s", "100000"]] {
        let output = qr_term().args(args).arg("test").output().unwrap();
        assert_eq!(output.status.code(), Some(1));
        assert!(stderr_of(&output).contains("exceeds the limit"));
    }
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");
    let output = qr_term()
        .args(["test", "--no-color", "--output"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        format!("QR code saved to {}\n", path.display())
    );

    let saved = std::fs::read_to_string(&path).unwrap();
    let printed = qr_term().args(["--no-color", "test"]).output().unwrap();
    assert_eq!(format!("{saved}\n"), stdout_of(&printed));
}

#[test]
fn writes_svg_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.svg");
    let output = qr_term().arg("test").arg("-o").arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(0));
    assert!(std::fs::read_to_string(&path).unwrap().contains("<svg"));
}
