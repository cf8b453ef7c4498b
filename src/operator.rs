/// Combining operator for one segment of the worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Sum,
    Product,
}

impl Operator {
    /// Map an operator-row marker to its operator.
    pub fn from_marker(marker: u8) -> Option<Self> {
        match marker {
            b'+' => Some(Self::Sum),
            b'*' => Some(Self::Product),
            _ => None,
        }
    }

    pub fn marker(&self) -> char {
        match self {
            Self::Sum => '+',
            Self::Product => '*',
        }
    }

    /// Accumulator seed before any value is combined.
    pub fn identity(&self) -> i64 {
        match self {
            Self::Sum => 0,
            Self::Product => 1,
        }
    }

    /// Fold `value` into `acc`. Returns `None` on overflow.
    pub fn combine(&self, acc: i64, value: i64) -> Option<i64> {
        match self {
            Self::Sum => acc.checked_add(value),
            Self::Product => acc.checked_mul(value),
        }
    }
}
