use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid number in row {row} at column {column}: {field:?}")]
    Parse {
        row: usize,
        column: usize,
        field: String,
    },

    #[error("Invalid stacked number in column {column}: {digits:?}")]
    ColumnParse { column: usize, digits: String },

    #[error("Arithmetic overflow in segment starting at column {column}")]
    Overflow { column: usize },
}

pub type EvalResult<T> = Result<T, EvalError>;
