use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DdlError {
    #[error("No CREATE TABLE statement found")]
    NoCreateTable,

    #[error("Unbalanced parentheses in CREATE TABLE statement starting at byte {statement_offset}")]
    UnbalancedParentheses { statement_offset: usize },
}
