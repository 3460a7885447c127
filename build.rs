use std::fs;

const DEFAULT_CONFIG: &str = "src/default_config.toml";

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_CONFIG}");

    let content = fs::read_to_string(DEFAULT_CONFIG)
        .unwrap_or_else(|e| panic!("Failed to read {DEFAULT_CONFIG}: {e}"));

    let table = content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("Invalid {DEFAULT_CONFIG}: {e}"));

    // Config::compiled_default() relies on every pass switch being spelled out
    let lists = table
        .get("passes")
        .and_then(|passes| passes.get("lists"));
    if !matches!(lists, Some(toml::Value::Boolean(_))) {
        panic!("{DEFAULT_CONFIG}: `passes.lists` must be a boolean");
    }
}
