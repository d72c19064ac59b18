use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

const EXAMPLE_YAML: &str = "\
Example:
  Settings:
    Library: Kirjasto
    Resource: Resurssi
    Variable: Muuttujat
    Documentation: Dokumentaatio
    Metadata: Metatiedot
    Suite Setup: Setin Alustus
    Suite Teardown: Setin Alasajo
    Test Setup: Testin Alustus
    Test Teardown: Testin Alasajo
    Test Template: Testin Malli
    Test Timeout: Testin Aikakatkaisu
    Test Tags: Testin Tagit
    Task Setup: Taskin Alustus
    Task Teardown: Taskin Alasajo
    Task Template: Taskin Malli
    Task Timeout: Taskin Aikakatkaisu
    Task Tags: Taskin Tagit
    Keyword Tags: Avainsanan Tagit
    Tags: Tagit
  Setup:
    Setup: Alustus
    Teardown: Alasajo
    Template: Malli
    Timeout: Aikakatkaisu
  Keywords:
    Arguments: Argumentit
  Headers:
    Settings: Asetukset
    Variable: Muuttujat
    Test Cases: Testit
    Tasks: Tehtävät
    Keywords: Avainsanat
    Comments: Kommentit
  BDD:
    Given: Oletetaan
    When: Kun
    Then: Niin
    And: Ja
    But: Mutta
  TrueString:
    crwdns1: Tosi
    crwdns2: Kyllä
  FalseString:
    crwdns3: Epätosi
    crwdns4: Ei
";

fn fixture_for(language: &str) -> String {
    EXAMPLE_YAML.replacen("Example:", &format!("{language}:"), 1)
}

fn langgen() -> Command {
    Command::cargo_bin("langgen").unwrap()
}

#[test]
fn test_convert_single_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("Example.yml");
    let output = dir.path().join("languages.py");
    fs::write(&input, EXAMPLE_YAML).unwrap();

    langgen()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(format!("{}\n", output.display()));

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.starts_with("from robot.conf import Language\n"));
    assert!(generated.contains("class Example(Language):"));
    assert!(generated.contains("    \"\"\"Example\"\"\""));
    assert!(generated.contains("    library = 'Kirjasto'"));
    assert!(generated.contains("    settings_header = 'Asetukset'"));
    assert!(generated.contains("    given_prefixes = ['Oletetaan']"));
    assert!(generated.contains("    true_strings = ['Tosi', 'Kyllä']"));
    assert!(generated.contains("    false_strings = ['Epätosi', 'Ei']"));
}

#[test]
fn test_setup_and_keywords_merge_into_settings() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("Example.yml");
    let output = dir.path().join("languages.py");
    fs::write(&input, EXAMPLE_YAML).unwrap();

    langgen().arg(&input).arg(&output).assert().success();

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.contains("    setup = 'Alustus'"));
    assert!(generated.contains("    arguments = 'Argumentit'"));
}

#[test]
fn test_multiple_inputs_keep_order() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("Traditional-Chinese.yml");
    let second = dir.path().join("Example.yml");
    let output = dir.path().join("languages.py");
    fs::write(&first, fixture_for("Traditional-Chinese")).unwrap();
    fs::write(&second, EXAMPLE_YAML).unwrap();

    langgen()
        .arg(&first)
        .arg(&second)
        .arg(&output)
        .assert()
        .success();

    let generated = fs::read_to_string(&output).unwrap();
    assert_eq!(generated.matches("from robot.conf import Language").count(), 1);
    let chinese = generated.find("class TraditionalChinese(Language):").unwrap();
    let example = generated.find("class Example(Language):").unwrap();
    assert!(chinese < example);
    // One blank line before each class, never two.
    assert!(generated.contains("\n\nclass TraditionalChinese(Language):"));
    assert!(generated.contains("\n\nclass Example(Language):"));
    assert!(!generated.contains("\n\n\n"));
}

#[test]
fn test_hyphenated_language_keeps_file_stem_as_doc() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("Traditional-Chinese.yml");
    let output = dir.path().join("languages.py");
    fs::write(&input, fixture_for("Traditional-Chinese")).unwrap();

    langgen().arg(&input).arg(&output).assert().success();

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.contains("class TraditionalChinese(Language):"));
    assert!(generated.contains("    \"\"\"Traditional-Chinese\"\"\""));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("Example.yml");
    let output = dir.path().join("languages.py");
    fs::write(&input, EXAMPLE_YAML).unwrap();

    langgen().arg(&input).arg(&output).assert().success();
    let first = fs::read(&output).unwrap();
    langgen().arg(&input).arg(&output).assert().success();
    let second = fs::read(&output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_no_arguments_prints_usage() {
    let assert = langgen().assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_single_argument_is_usage_error() {
    langgen().arg("OnlyInput.yml").assert().failure();
}

#[test]
fn test_help_describes_usage_and_exits_with_usage_status() {
    let assert = langgen().arg("--help").assert().failure();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("robot --language"));
    assert!(stdout.contains("Usage"));
}

#[test]
fn test_missing_canonical_key_fails_batch() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("Example.yml");
    let output = dir.path().join("languages.py");
    let incomplete = EXAMPLE_YAML.replace("    Tasks: Tehtävät\n", "");
    fs::write(&input, incomplete).unwrap();

    let assert = langgen().arg(&input).arg(&output).assert().failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("missing key `Tasks` in `Headers`"));
    assert!(!output.exists());
}

#[test]
fn test_unreadable_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("languages.py");

    let assert = langgen()
        .arg(dir.path().join("absent.yml"))
        .arg(&output)
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("Error:"));
}
