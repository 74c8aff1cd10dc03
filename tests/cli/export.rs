use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const TRANSLATIONS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<translations languages="de en">
  <translation tag="Home" de="Startseite" en="Home"/>
  <translation tag="Save &amp; Exit" en="Save &amp; Exit"/>
  <translation tag="file_count" en_one="%d file" en_other="%d files"/>
</translations>
"#;

#[test]
fn test_export_writes_yaml_per_locale() -> Result<()> {
    let test = CliTest::with_file("ui_xml/translations/translations.xml", TRANSLATIONS_XML)?;

    let result = run(&mut test.export_command())?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.contains("\u{2713} Exported 2 locales from"));
    assert_eq!(
        test.read_file("translations/de.yml")?,
        "locale: de\ntranslations:\n  \"Home\": Startseite\n"
    );
    assert_eq!(
        test.read_file("translations/en.yml")?,
        "locale: en\ntranslations:\n  \"Home\": Home\n  \"Save & Exit\": \"Save & Exit\"\n  \"file_count\":\n    one: \"%d file\"\n    other: \"%d files\"\n"
    );

    Ok(())
}

#[test]
fn test_export_then_generate_roundtrips() -> Result<()> {
    let test = CliTest::with_file("ui_xml/translations/translations.xml", TRANSLATIONS_XML)?;

    run(test.export_command().args(["--output-dir", "translations"]))?;
    let result = run(&mut test.generate_command())?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert_eq!(
        test.read_file("ui_xml/translations/translations.xml")?,
        TRANSLATIONS_XML
    );

    Ok(())
}

#[test]
fn test_export_missing_source_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(&mut test.export_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Required input not found"));

    Ok(())
}
