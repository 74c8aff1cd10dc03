use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

const EN_YML: &str = r#"locale: en
translations:
  "Settings": Settings
  "Home": Home
  "file_count":
    one: "%d file"
    other: "%d files"
"#;

const RU_YML: &str = r#"locale: ru
translations:
  "Settings": Настройки
  "file_count":
    one: "%d файл"
    few: "%d файла"
    many: "%d файлов"
    other: "%d файла"
"#;

fn setup_catalog(test: &CliTest) -> Result<()> {
    test.write_file("translations/en.yml", EN_YML)?;
    test.write_file("translations/ru.yml", RU_YML)
}

#[test]
fn test_generate_writes_all_outputs() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalog(&test)?;

    let result = run(&mut test.generate_command())?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stdout.starts_with("warning: ru: 1 missing translation: Home\n"));
    assert!(result.stdout.contains("\u{2713} Generated 3 files for 2 locales (3 keys)"));

    let xml = test.read_file("ui_xml/translations/translations.xml")?;
    assert!(xml.contains(r#"<translations languages="en ru">"#));
    assert!(xml.contains(r#"<translation tag="Home" en="Home"/>"#));
    assert!(xml.contains(r#"ru_few="%d файла""#));

    let source = test.read_file("src/generated/lv_i18n_translations.c")?;
    assert!(source.contains("static const char * ru_plurals_few[] = {"));
    assert!(!source.contains("en_plurals_few"));
    assert!(source.contains("static uint8_t ru_plural_fn(int32_t num)"));
    assert!(source.contains("    &en_lang,\n    &ru_lang,\n    NULL // End mark\n"));

    let header = test.read_file("src/generated/lv_i18n_translations.h")?;
    assert!(header.contains("extern \"C\" {"));

    Ok(())
}

#[test]
fn test_generate_report() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalog(&test)?;

    let root = test.root_filter();
    insta::with_settings!({filters => vec![(root.as_str(), "[ROOT]")]}, {
        assert_cmd_snapshot!(test.generate_command(), @r"
        success: true
        exit_code: 0
        ----- stdout -----
        warning: ru: 1 missing translation: Home

        ✓ Generated 3 files for 2 locales (3 keys)
          --> [ROOT]/ui_xml/translations/translations.xml
          --> [ROOT]/src/generated/lv_i18n_translations.c
          --> [ROOT]/src/generated/lv_i18n_translations.h

        ----- stderr -----
        ");
    });

    Ok(())
}

#[test]
fn test_generate_respects_cli_overrides() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("i18n/de.yml", "locale: de\ntranslations:\n  \"Home\": Startseite\n")?;
    test.write_file("i18n/en.yml", "locale: en\ntranslations:\n  \"Home\": Home\n")?;

    let result = run(test
        .generate_command()
        .args(["--yaml-dir", "i18n"])
        .args(["--xml-output-dir", "out/xml"])
        .args(["--native-output-dir", "out/c"])
        .args(["--base-locale", "de"]))?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(!result.stdout.contains("warning:"));
    assert!(test.root().join("out/xml/translations.xml").exists());
    assert!(test.root().join("out/c/lv_i18n_translations.h").exists());

    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        ".tagsmithrc.json",
        r#"{ "yamlDir": "locales", "nativeOutputDir": "main/ui" }"#,
    )?;
    test.write_file("locales/en.yml", "locale: en\ntranslations:\n  \"Home\": Home\n")?;

    let result = run(&mut test.generate_command())?;

    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(test.root().join("main/ui/lv_i18n_translations.c").exists());

    Ok(())
}

#[test]
fn test_generate_is_byte_stable() -> Result<()> {
    let test = CliTest::new()?;
    setup_catalog(&test)?;

    run(&mut test.generate_command())?;
    let first = test.read_file("src/generated/lv_i18n_translations.c")?;
    run(&mut test.generate_command())?;
    let second = test.read_file("src/generated/lv_i18n_translations.c")?;

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_generate_without_base_locale_fails() -> Result<()> {
    let test = CliTest::with_file(
        "translations/de.yml",
        "locale: de\ntranslations:\n  \"Home\": Startseite\n",
    )?;

    let result = run(&mut test.generate_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("warning: base locale 'en' not found in catalog"));
    assert!(result.stdout.contains("(base locale missing)"));
    assert!(test.root().join("ui_xml/translations/translations.xml").exists());

    Ok(())
}

#[test]
fn test_generate_missing_yaml_dir_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(&mut test.generate_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.starts_with("Error: Required input not found:"));

    Ok(())
}

#[test]
fn test_generate_malformed_yaml_is_error() -> Result<()> {
    let test = CliTest::with_file("translations/en.yml", "locale: en\ntranslations: [oops")?;

    let result = run(&mut test.generate_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Malformed catalog"));
    assert!(!test.root().join("src/generated").exists());

    Ok(())
}
