use std::path::PathBuf;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_placegen")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "placegen.exe"
            } else {
                "placegen"
            });
            p
        })
}

#[test]
fn cli_writes_tree_and_summary() {
    let root = PathBuf::from("target").join("cli_smoke");
    let _ = std::fs::remove_dir_all(&root);

    let out = std::process::Command::new(exe())
        .arg("--root")
        .arg(&root)
        .args(["--raster", "none"])
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Generating backgrounds:"));
    assert!(stdout.contains("  ✓ black.png"));
    assert!(stdout.contains("  ✓ harper_neutral.png (HARPER - Neutral)"));
    assert!(stdout.contains("✓ Generated 12 backgrounds and 24 character sprites"));

    assert!(root.join("game/background/black.svg").exists());
    assert!(root.join("game/figure/rowan_calm.png").exists());
}

#[test]
fn cli_dump_catalog_prints_json_only() {
    let root = PathBuf::from("target").join("cli_smoke_dump");
    let _ = std::fs::remove_dir_all(&root);

    let out = std::process::Command::new(exe())
        .arg("--root")
        .arg(&root)
        .arg("--dump-catalog")
        .output()
        .unwrap();

    assert!(out.status.success());
    let catalog = placegen::Catalog::from_json_str(&String::from_utf8_lossy(&out.stdout)).unwrap();
    assert_eq!(catalog, placegen::Catalog::builtin());
    assert!(!root.exists());
}

#[test]
fn cli_rejects_missing_catalog_file() {
    let out = std::process::Command::new(exe())
        .args(["--catalog", "target/cli_smoke_missing/nope.json"])
        .output()
        .unwrap();

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("load catalog"), "{stderr}");
}
