//! CLI integration tests: flatten and resolve over temp files.

use assert_cmd::Command;
use predicates::prelude::*;

fn tokencss() -> Command {
    Command::cargo_bin("tokencss").unwrap()
}

#[test]
fn flatten_emits_prefixed_declarations() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("base.json");
    std::fs::write(
        &source,
        r#"{ "base": { "dimension": { "4": { "value": "4", "type": "number" } } } }"#,
    )
    .unwrap();

    tokencss()
        .arg("flatten")
        .arg(&source)
        .arg("--base")
        .assert()
        .success()
        .stdout(predicate::str::contains("--ids-base-dimension-4: 4px;"));
}

#[test]
fn resolve_inlines_cross_file_references() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base.css");
    let comp = dir.path().join("comp.css");
    std::fs::write(&base, ":root {\n  --ids-base-color-1: #fff;\n}").unwrap();
    std::fs::write(
        &comp,
        ":root {\n  --ids-comp-bg: var(--ids-base-color-1);\n}",
    )
    .unwrap();

    let out_dir = dir.path().join("resolved");
    tokencss()
        .arg("resolve")
        .arg(&base)
        .arg(&comp)
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .success();

    let resolved = std::fs::read_to_string(out_dir.join("comp.css")).unwrap();
    assert!(resolved.contains("--ids-comp-bg: #fff;"));
}

#[test]
fn cycles_fail_with_a_named_chain() {
    let dir = tempfile::tempdir().unwrap();
    let css = dir.path().join("cyclic.css");
    std::fs::write(
        &css,
        ":root {\n  --ids-a: var(--ids-b);\n  --ids-b: var(--ids-a);\n}",
    )
    .unwrap();

    tokencss()
        .arg("resolve")
        .arg(&css)
        .assert()
        .failure()
        .stderr(predicate::str::contains("reference cycle detected"));
}

#[test]
fn testdata_resolves_the_tree_to_literals() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("tokens.json");
    std::fs::write(
        &source,
        r##"{
            "base": { "color": { "1": { "value": "#fff", "type": "color" } } },
            "smc": { "bg": { "value": "{base.color.1}", "type": "color" } }
        }"##,
    )
    .unwrap();

    tokencss()
        .arg("testdata")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains(r##""bg": "#fff""##));
}
