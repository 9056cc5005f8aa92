use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::Path;

/// Get a Command for gradetab, insulated from the ambient user env var
pub fn gradetab() -> Command {
    let mut cmd = cargo_bin_cmd!("gradetab");
    cmd.env_remove("GRADETAB_USER");
    cmd
}

/// Write a grade file for `user` directly, one record per line
#[allow(dead_code)]
pub fn seed_grades(dir: &Path, user: &str, lines: &[&str]) {
    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(dir.join(format!("{}Grades.txt", user)), content).unwrap();
}

/// Read back the on-disk grade file for `user`
#[allow(dead_code)]
pub fn read_grades(dir: &Path, user: &str) -> String {
    fs::read_to_string(dir.join(format!("{}Grades.txt", user))).unwrap()
}

/// Add a class through the binary and assert success
#[allow(dead_code)]
pub fn add_class(dir: &Path, user: &str, class: &str, minor: &str, major: &str, weight: &str) {
    gradetab()
        .current_dir(dir)
        .args([
            "--user",
            user,
            "add",
            class,
            "--minor",
            minor,
            "--major",
            major,
            "--minor-weight",
            weight,
        ])
        .assert()
        .success();
}
