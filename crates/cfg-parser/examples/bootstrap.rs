//! Demonstrates the first-run bootstrap contract: the first load creates
//! the config file from a template, the second load parses it.
//!
//! Run with `cargo run --example bootstrap`.

use cfg_fs::{NormalizedPath, write_text};
use cfg_parser::{ConfigLoader, LoadOutcome};

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

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let base = NormalizedPath::new(std::env::temp_dir()).join("cfg-parser-demo");
    let template_path = base.join("example_template.txt");
    write_text(&template_path, TEMPLATE)?;

    let config_path = base.join("example.cfg");
    if config_path.exists() {
        std::fs::remove_file(config_path.to_native())?;
    }

    let loader = ConfigLoader::new(config_path).with_template(template_path);

    match loader.load()? {
        LoadOutcome::Created(path) => {
            println!("first run: created {}", path.display());
        }
        LoadOutcome::Loaded(_) => {
            println!("unexpected: file already existed");
        }
    }

    // The file now exists, so the second load returns parsed data.
    let config = loader
        .load()?
        .into_loaded()
        .expect("config file was created by the first load");

    let one = config.section("section_one").expect("section_one");
    println!("interval          = {:?}", one.get("interval"));
    println!("price             = {:?}", one.get("price"));
    println!("enable_spoofing   = {:?}", one.get("enable_spoofing"));
    println!("entry_point_class = {:?}", one.get("entry_point_class"));
    println!("proxy_list        = {:?}", one.get("proxy_list"));

    let two = config.section("section_two").expect("section_two");
    println!("another_interval  = {:?}", two.get("another_interval"));

    println!("as json: {}", serde_json::to_string_pretty(&config)?);

    Ok(())
}
