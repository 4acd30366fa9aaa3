use derive_more::Display;

#[derive(Clone, Debug, PartialEq, Eq, Display)]
pub enum Error { 
    #[display("cannot parse '{_0}' as a number")]
    Parse(String),

    #[display("division by zero")]
    DivideByZero,
}

impl std::error::Error for Error {}
