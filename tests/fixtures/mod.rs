use std::path::PathBuf;

pub fn get_test_fixture_path(tool: &str, fixture_name: Option<&str>) -> PathBuf {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(tool);
    match fixture_name {
        Some(fixture_name) => base.join(fixture_name),
        None => base,
    }
}
