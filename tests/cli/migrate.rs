use std::fs;

use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const TRANSLATIONS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<translations languages="en">
  <translation tag="Cancel" en="Cancel"/>
  <translation tag="Settings" en="Settings"/>
</translations>
"#;

const SCREEN: &str = r#"<component>
  <view>
    <lv_label text="Settings" width="content"/>
    <lv_button>
      <lv_label text="Cancel" translation_tag="Cancel"/>
    </lv_button>
    <lv_label text="Brand new"/>
    <lv_label text="$title"/>
    <lv_label text="42"/>
  </view>
</component>
"#;

const MIGRATED_SCREEN: &str = r#"<component>
  <view>
    <lv_label text="Settings" translation_tag="Settings" width="content"/>
    <lv_button>
      <lv_label text="Cancel" translation_tag="Cancel"/>
    </lv_button>
    <lv_label text="Brand new"/>
    <lv_label text="$title"/>
    <lv_label text="42"/>
  </view>
</component>
"#;

fn setup_project(test: &CliTest) -> Result<()> {
    test.write_file("ui_xml/translations/translations.xml", TRANSLATIONS_XML)?;
    test.write_file("ui_xml/globals.xml", r#"<globals><const text="Settings"/></globals>"#)?;
    test.write_file("ui_xml/screens/settings.xml", SCREEN)?;
    test.write_file(
        "translations/en.yml",
        "locale: en\ntranslations:\n  \"Cancel\": Cancel\n  \"Settings\": Settings\n",
    )
}

#[test]
fn test_migrate_dry_run_reports_without_writing() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let result = run(&mut test.migrate_command())?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Loaded 2 translation tags from"));
    assert!(result.stdout.contains("Scanned 1 markup file\n"));
    assert!(result.stdout.contains("Would add 1 translation tag in 1 file:\n  settings.xml:3 - Settings\n"));
    assert!(result.stdout.contains("warning: 1 text missing from translations:\n  - Brand new\n"));
    assert!(result.stdout.contains("Run with --apply to write these changes."));
    assert_eq!(test.read_file("ui_xml/screens/settings.xml")?, SCREEN);

    Ok(())
}

#[test]
fn test_migrate_dry_run_report() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let root = test.root_filter();
    insta::with_settings!({filters => vec![(root.as_str(), "[ROOT]")]}, {
        assert_cmd_snapshot!(test.migrate_command(), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        Loaded 2 translation tags from [ROOT]/ui_xml/translations/translations.xml
        Scanned 1 markup file

        Would add 1 translation tag in 1 file:
          settings.xml:3 - Settings

        warning: 1 text missing from translations:
          - Brand new

        Run with --apply to write these changes.

        ----- stderr -----
        ");
    });

    Ok(())
}

#[test]
fn test_migrate_reports_rewritten_files_when_another_fails() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;
    // Not valid UTF-8, so the file cannot be read as markup
    fs::write(test.root().join("ui_xml/screens/broken.xml"), [0xff, 0xfe, 0x3c])?;

    let result = run(test.migrate_command().arg("--apply"))?;

    assert_eq!(result.code, Some(1), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Scanned 2 markup files\n"));
    assert!(result.stdout.contains("Added 1 translation tag in 1 file:\n  settings.xml:3 - Settings\n"));
    assert!(result.stdout.contains("error: 1 file could not be migrated:"));
    assert!(result.stdout.contains("broken.xml"));
    assert_eq!(test.read_file("ui_xml/screens/settings.xml")?, MIGRATED_SCREEN);

    Ok(())
}

#[test]
fn test_migrate_apply_rewrites_and_is_idempotent() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let result = run(test.migrate_command().arg("--apply"))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Added 1 translation tag in 1 file:"));
    assert_eq!(test.read_file("ui_xml/screens/settings.xml")?, MIGRATED_SCREEN);
    assert_eq!(
        test.read_file("ui_xml/globals.xml")?,
        r#"<globals><const text="Settings"/></globals>"#
    );

    let again = run(test.migrate_command().arg("--apply"))?;
    assert!(again.stdout.contains("\u{2713} No migrations needed"));
    assert_eq!(test.read_file("ui_xml/screens/settings.xml")?, MIGRATED_SCREEN);

    Ok(())
}

#[test]
fn test_migrate_add_missing_appends_to_base_yaml() -> Result<()> {
    let test = CliTest::new()?;
    setup_project(&test)?;

    let dry = run(test.migrate_command().arg("--add-missing"))?;
    assert!(dry.stdout.contains("Would add 1 key to"));
    assert!(!test.read_file("translations/en.yml")?.contains("Brand new"));

    let result = run(test.migrate_command().args(["--apply", "--add-missing"]))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("Added 1 key to"));
    assert_eq!(
        test.read_file("translations/en.yml")?,
        "locale: en\ntranslations:\n  \"Cancel\": Cancel\n  \"Settings\": Settings\n  \"Brand new\": \"Brand new\"\n"
    );

    Ok(())
}

#[test]
fn test_migrate_custom_paths() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("catalog.xml", TRANSLATIONS_XML)?;
    test.write_file("screens/main.xml", r#"<lv_button text="Cancel"/>"#)?;

    let result = run(test
        .migrate_command()
        .args(["--markup-dir", "screens"])
        .args(["--translations-xml", "catalog.xml"])
        .arg("--apply"))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert_eq!(
        test.read_file("screens/main.xml")?,
        r#"<lv_button text="Cancel" translation_tag="Cancel"/>"#
    );

    Ok(())
}

#[test]
fn test_migrate_missing_translations_xml_is_error() -> Result<()> {
    let test = CliTest::with_file("ui_xml/screens/a.xml", r#"<a text="Hi"/>"#)?;

    let result = run(&mut test.migrate_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Required input not found"));
    assert!(result.stderr.contains("translations.xml"));

    Ok(())
}
