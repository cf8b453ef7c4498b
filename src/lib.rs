pub mod cli;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod grid;
pub mod logging;
pub mod numeric;
pub mod operator;
pub mod segment;

pub use config::Settings;
pub use error::{EvalError, EvalResult};
pub use evaluate::{Totals, column_wise, evaluate, evaluate_file, row_wise};
pub use grid::{Grid, LINES, OPERAND_ROWS};
pub use operator::Operator;
pub use segment::{Segment, locate_segments, operator_positions};
