//! End-to-end tests driving the `surgeon` binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn surgeon() -> Command {
    Command::cargo_bin("surgeon").unwrap()
}

const TARGET: &str = "\
class Service {
  String _normalizeRole(String role) {
    return role.trim();
  }
}
";

const PLAN: &str = r#"
[[edit]]
name = "normalize-role"
start = ["String _normalizeRole(String role) {"]
end = { kind = "brace-balance" }
replacement = "  String _normalizeRole(String role) => RolePatterns.normalize(role);"
"#;

#[test]
fn excise_rewrites_and_reports() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("service.dart");
    let plan = dir.path().join("plan.toml");
    fs::write(&target, TARGET).unwrap();
    fs::write(&plan, PLAN).unwrap();

    surgeon()
        .args(["excise", "--plan"])
        .arg(&plan)
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("replaced normalize-role"));

    let after = fs::read_to_string(&target).unwrap();
    assert!(after.contains("RolePatterns.normalize(role)"));
}

#[test]
fn excise_dry_run_prints_diff_only() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("service.dart");
    let plan = dir.path().join("plan.toml");
    fs::write(&target, TARGET).unwrap();
    fs::write(&plan, PLAN).unwrap();

    surgeon()
        .args(["excise", "--dry-run", "--plan"])
        .arg(&plan)
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("-    return role.trim();"));

    assert_eq!(fs::read_to_string(&target).unwrap(), TARGET);
}

#[test]
fn excise_partial_miss_exits_nonzero_and_preserves_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("service.dart");
    let plan = dir.path().join("plan.toml");
    fs::write(&target, TARGET).unwrap();
    fs::write(
        &plan,
        format!(
            "{PLAN}\n[[edit]]\nname = \"ghost\"\nstart = [\"void _ghost(\"]\nend = {{ kind = \"brace-balance\" }}\nreplacement = \"x\"\n"
        ),
    )
    .unwrap();

    surgeon()
        .args(["excise", "--plan"])
        .arg(&plan)
        .arg(&target)
        .assert()
        .failure()
        .stdout(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("aborting without writing"));

    assert_eq!(fs::read_to_string(&target).unwrap(), TARGET);
}

#[test]
fn rename_across_files() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.dart");
    fs::write(&a, "x.withOpacity(0.2);").unwrap();

    surgeon()
        .args([
            "rename",
            "--pattern",
            r"\.withOpacity\(([^)]+)\)",
            "--replace",
            ".withValues(alpha: $1)",
        ])
        .arg(&a)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 files rewritten"));

    assert_eq!(
        fs::read_to_string(&a).unwrap(),
        "x.withValues(alpha: 0.2);"
    );
}

#[test]
fn repair_writes_cleaned_sibling() {
    let dir = TempDir::new().unwrap();
    let bak = dir.path().join("service.corrupted.bak");
    let cleaned = dir.path().join("service.cleaned.dart");
    let corrupted: String = "// título\n".bytes().map(char::from).collect();
    fs::write(&bak, corrupted.as_bytes()).unwrap();

    surgeon()
        .arg("repair")
        .arg(&bak)
        .arg("--output")
        .arg(&cleaned)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&cleaned).unwrap(), "// título\n");
}

#[test]
fn pack_lists_entries_and_size() {
    let release = TempDir::new().unwrap();
    fs::write(release.path().join("a.txt"), "alpha").unwrap();
    fs::create_dir(release.path().join("sub")).unwrap();
    fs::write(release.path().join("sub/b.txt"), "beta").unwrap();

    let out = TempDir::new().unwrap();
    let archive = out.path().join("release.zip");

    surgeon()
        .arg("pack")
        .arg(release.path())
        .arg(&archive)
        .assert()
        .success()
        .stdout(predicate::str::contains("+ a.txt"))
        .stdout(predicate::str::contains("+ sub/b.txt"))
        .stdout(predicate::str::contains("MiB"));

    let file = fs::File::open(&archive).unwrap();
    let zip = zip::ZipArchive::new(file).unwrap();
    assert_eq!(zip.len(), 2);
}
