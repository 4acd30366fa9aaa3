use std::fmt::{Debug, Display};

/// Anything that can sit in a matrix cell.
pub trait Elem: 
    Default + 
    Eq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}

impl<T> Elem for T where T: 
    Default + 
    Eq + 
    Clone + 
    Send + 
    Sync + 
    Display + 
    Debug + 
    'static
{}
