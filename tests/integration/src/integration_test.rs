//! End-to-end workflow: bootstrap a config file from a template, reload
//! it, and read typed fields across sections.

use cfg_fs::NormalizedPath;
use cfg_parser::{ConfigLoader, LoadOutcome, Value};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

const TEMPLATE: &str = "\
[section_one]
iInterval=30
fPrice=45.67
bEnableSpoofing=1
sEntryPointClass=MainMethanina
lProxyList=127.0.0.1:3456,127.0.0.1:2333,127.0.0.1:4565

[section_two]
iAnotherInterval=45
";

#[test]
fn test_empty_bootstrap_then_reload() {
    let temp = TempDir::new().unwrap();
    let base = NormalizedPath::new(temp.path());
    let loader = ConfigLoader::in_dir(&base, "empty_example.cfg");

    let outcome = loader.load().unwrap();
    assert!(outcome.is_created());
    assert_eq!(
        fs::read_to_string(temp.path().join("empty_example.cfg")).unwrap(),
        ""
    );

    // An empty file is a valid configuration with no sections.
    let config = loader.load().unwrap().into_loaded().unwrap();
    assert!(config.is_empty());
}

#[test]
fn test_templated_bootstrap_then_typed_access() {
    let temp = TempDir::new().unwrap();
    let template_path = temp.path().join("example_template.txt");
    fs::write(&template_path, TEMPLATE).unwrap();

    let config_path = temp.path().join("example.cfg");
    let loader = ConfigLoader::new(config_path.as_path()).with_template(template_path.as_path());

    match loader.load().unwrap() {
        LoadOutcome::Created(path) => assert_eq!(path, config_path),
        LoadOutcome::Loaded(_) => panic!("first load must report creation"),
    }
    assert_eq!(fs::read_to_string(&config_path).unwrap(), TEMPLATE);

    let config = loader.load().unwrap().into_loaded().unwrap();
    assert_eq!(config.len(), 2);

    let one = config.section("section_one").unwrap();
    assert_eq!(one.get("interval").unwrap().as_int(), Some(30));
    assert_eq!(one.get("price").unwrap().as_float(), Some(45.67));
    assert_eq!(one.get("enable_spoofing").unwrap().as_bool(), Some(true));
    assert_eq!(
        one.get("entry_point_class").unwrap().as_str(),
        Some("MainMethanina")
    );
    assert_eq!(
        one.get("proxy_list").unwrap().as_list().unwrap(),
        &[
            "127.0.0.1:3456".to_string(),
            "127.0.0.1:2333".into(),
            "127.0.0.1:4565".into(),
        ]
    );

    let two = config.section("section_two").unwrap();
    assert_eq!(two.get("another_interval").unwrap().as_int(), Some(45));
}

#[test]
fn test_lookup_with_defaults() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("app.cfg");
    fs::write(&config_path, "[main]\niInterval=30\n").unwrap();

    let config = ConfigLoader::new(config_path.as_path())
        .load()
        .unwrap()
        .into_loaded()
        .unwrap();
    let main = config.section("main").unwrap();

    let default = Value::Int(60);
    assert_eq!(main.get_or("interval", &default).as_int(), Some(30));
    assert_eq!(main.get_or("timeout", &default).as_int(), Some(60));
}

#[test]
fn test_json_export_of_parsed_config() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("app.cfg");
    fs::write(
        &config_path,
        "[main]\niInterval=30\nfPrice=45.67\nbEnableSpoofing=1\nlXs=a,b,,c\n",
    )
    .unwrap();

    let config = ConfigLoader::new(config_path.as_path())
        .load()
        .unwrap()
        .into_loaded()
        .unwrap();

    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["main"]["interval"], 30);
    assert_eq!(json["main"]["price"], 45.67);
    assert_eq!(json["main"]["enable_spoofing"], true);
    assert_eq!(json["main"]["xs"], serde_json::json!(["a", "b", "", "c"]));
}

#[test]
fn test_bad_fields_are_dropped_but_file_still_loads() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("app.cfg");
    fs::write(
        &config_path,
        "[main]\nxFoo=1\niInterval=thirty\nsName=demo\n",
    )
    .unwrap();

    let config = ConfigLoader::new(config_path.as_path())
        .load()
        .unwrap()
        .into_loaded()
        .unwrap();
    let main = config.section("main").unwrap();

    assert_eq!(main.len(), 1);
    assert_eq!(main.get("name").unwrap().as_str(), Some("demo"));
}
