use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_traits::{One, Zero};
use crate::{Elem, Error};

// Rings

pub trait RingOps<T = Self>: 
    Sized + 
    Add<T, Output = T> + 
    for<'a> Add<&'a T, Output = T> + 
    Sub<T, Output = T> + 
    for<'a> Sub<&'a T, Output = T> + 
    Mul<T, Output = T> + 
    for<'a> Mul<&'a T, Output = T> + 
    Neg<Output = T>
{}

pub trait Ring: 
    Elem + 
    RingOps + 
    AddAssign + 
    for<'a> AddAssign<&'a Self> + 
    SubAssign + 
    for<'a> SubAssign<&'a Self> + 
    MulAssign + 
    for<'a> MulAssign<&'a Self> + 
    Sum<Self> + 
    for<'a> Sum<&'a Self> + 
    Zero + 
    One + 
    From<i32>
where
    for<'a> &'a Self: RingOps<Self>
{
    fn inv(&self) -> Option<Self>;
    fn is_unit(&self) -> bool;
}

// Fields: every non-zero element is a unit.

pub trait Field: Ring
where
    for<'a> &'a Self: RingOps<Self>
{
    fn try_div(&self, rhs: &Self) -> Result<Self, Error> { 
        match rhs.inv() { 
            Some(r) => Ok(self * &r),
            None => Err(Error::DivideByZero)
        }
    }
}
