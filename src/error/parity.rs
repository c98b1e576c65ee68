use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParityError {
    /// Every source test is either excluded or none matched the grammar.
    #[error("no countable tests found in source suite")]
    EmptySourceSuite,
}
