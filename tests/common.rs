use ll1::grammar::Notation;
use ll1::parsers::predictive::ParseTable;

/// Helper function to get an valid path to a test file in the testdata directory
pub fn test_file_path(filename: &str) -> String {
    let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    p.push(format!("tests/testdata/{}", filename));

    p.into_os_string()
        .into_string()
        .expect("failed to build filename")
}

/// Helper function to load a parse table from the testdata directory
pub fn load_table(filename: &str) -> ParseTable {
    ParseTable::from_file(test_file_path(filename), &Notation::default())
        .expect("failed to load test table")
}
