use std::io::Write;
use std::process::Command;

#[test]
fn test_cli_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_linkfield"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}

#[test]
fn test_cli_lists_links() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    let xml_path = dir.path().join("links.xml");
    let mut xml = std::fs::File::create(&xml_path).unwrap();
    write!(
        xml,
        r#"<links>
  <link linktype="internal" text="About" id="{{3C1715FE-6A13-4FCF-845F-DE308BA9741D}}" />
  <link linktype="media" text="Logo" id="a7a0b5b2-5c0e-4d2b-9b3f-0f3e7c3d4e21" />
  <link linktype="external" text="Rust" target="_blank" url="https://www.rust-lang.org" />
</links>"#
    )
    .unwrap();

    let catalog_path = dir.path().join("catalog.tsv");
    std::fs::write(
        &catalog_path,
        "3c1715fe-6a13-4fcf-845f-de308ba9741d\t/en/about-us\n\
         a7a0b5b2-5c0e-4d2b-9b3f-0f3e7c3d4e21\t/en/logo\t/-/media/logo.png\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_linkfield"))
        .arg(&xml_path)
        .arg("--catalog")
        .arg(&catalog_path)
        .arg("--media-link-prefix")
        .arg("/cdn/")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "internal\tAbout\t\t/en/about-us\t",
            "media\tLogo\t\t/-/media/logo.png\t/cdn/a7a0b5b25c0e4d2b9b3f0f3e7c3d4e21.png",
            "external\tRust\t_blank\thttps://www.rust-lang.org\thttps://www.rust-lang.org",
        ]
    );
}

#[test]
fn test_cli_rejects_unknown_link_type() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let xml_path = dir.path().join("links.xml");
    std::fs::write(&xml_path, r#"<links><link linktype="anchor" /></links>"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_linkfield"))
        .arg(&xml_path)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown link type"));
}
