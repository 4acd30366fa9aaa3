use derive_more::Display;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum MatError { 
    #[display("{_0}")]
    Num(qmat::Error),

    #[display("matrix is too big: {rows}x{cols}")]
    TooBig { rows: usize, cols: usize },

    #[display("matrix is empty")]
    Empty,

    #[display("row {row} has {found} entries, expected {expected}")]
    RaggedRows { row: usize, expected: usize, found: usize },

    #[display("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[display("matrix sizes differ: {}x{} and {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    SizeMismatch { lhs: (usize, usize), rhs: (usize, usize) },

    #[display("cannot multiply {}x{} by {}x{}", lhs.0, lhs.1, rhs.0, rhs.1)]
    MultiplyShape { lhs: (usize, usize), rhs: (usize, usize) },

    #[display("augmented matrix must have one more column than rows: {rows}x{cols}")]
    AugmentedShape { rows: usize, cols: usize },

    #[display("system has no unique solution")]
    SingularSystem,
}

impl std::error::Error for MatError {}

impl From<qmat::Error> for MatError {
    fn from(e: qmat::Error) -> Self {
        MatError::Num(e)
    }
}
