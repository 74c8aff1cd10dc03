use anyhow::{Context, Result};
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    for field in [
        "yamlDir",
        "markupDir",
        "translationsXml",
        "xmlOutputDir",
        "nativeOutputDir",
        "baseLocale",
        "ignores",
    ] {
        assert!(
            parsed.get(field).is_some(),
            "Config should have '{}' field",
            field
        );
    }
    assert_eq!(parsed["baseLocale"], "en");

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command().arg("init"))?;

    assert_eq!(result.code, Some(0));
    assert_eq!(result.stdout, "\u{2713} Created .tagsmithrc.json\n");
    assert!(test.root().join(".tagsmithrc.json").exists());

    let content = test.read_file(".tagsmithrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file(".tagsmithrc.json", "{}")?;

    let result = run(test.command().arg("init"))?;

    assert_eq!(result.code, Some(1));
    assert_eq!(result.stdout, "\u{2718} .tagsmithrc.json already exists\n");
    assert_eq!(test.read_file(".tagsmithrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    run(test.command().arg("init"))?;
    test.write_file(
        "translations/en.yml",
        "locale: en\ntranslations:\n  \"Home\": Home\n",
    )?;

    let result = run(&mut test.generate_command())?;
    assert_eq!(
        result.code,
        Some(0),
        "generate should work with initialized config. stderr: {}",
        result.stderr
    );
    assert!(test.root().join("src/generated/lv_i18n_translations.c").exists());

    Ok(())
}
