pub mod cli;
pub mod errors;
pub mod grammar;
pub mod parsers;
mod utils;

#[cfg(test)]
mod test {
    use crate::errors::Result;

    /// Helper function to verify the text of an error
    pub fn assert_error_text<T>(result: Result<T>, want: &str) {
        match result {
            Err(e) => {
                assert_eq!(e.to_string(), want);
            }
            Ok(_) => {
                panic!("no error");
            }
        }
    }

    /// Helper function to build an absolute path to a test data file
    pub fn test_file_path(filename: &str) -> String {
        let mut p = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        p.push(format!("tests/testdata/{}", filename));

        p.into_os_string()
            .into_string()
            .expect("failed to build filename")
    }
}
