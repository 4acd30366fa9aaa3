use std::ops::{Div, DivAssign, Rem};
use std::str::FromStr;
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive};
use crate::*;

pub trait IntOps<T = Self>: 
    RingOps<T> + 
    Div<T, Output = T> + 
    for<'a> Div<&'a T, Output = T> + 
    Rem<T, Output = T> + 
    for<'a> Rem<&'a T, Output = T>
{}

pub trait Integer: 
    Ring + 
    IntOps + 
    DivAssign + 
    for<'a> DivAssign<&'a Self> + 
    Signed + 
    Ord + 
    FromStr + 
    ToPrimitive
where 
    for<'a> &'a Self: IntOps<Self> 
{
    /// Non-negative. `gcd(a, 0) = |a|` and `gcd(0, 0) = 0`.
    fn gcd(x: &Self, y: &Self) -> Self;

    /// Non-negative. `lcm(a, 0) = 0`.
    fn lcm(x: &Self, y: &Self) -> Self;

    /// `1, 10, 100, ...`
    fn is_pow_of_ten(&self) -> bool { 
        let s = self.to_string();
        match s.strip_prefix('1') { 
            Some(zeros) => zeros.chars().all(|c| c == '0'),
            None => false
        }
    }

    fn pow_of_ten(k: usize) -> Self { 
        let ten = Self::from(10);
        (0..k).fold(Self::one(), |res, _| res * &ten)
    }
}

macro_rules! impl_ops {
    ($trait:ident, $type:ty) => {
        impl $trait for $type {}
        impl<'a> $trait<$type> for &'a $type {}
    };
}

macro_rules! impl_integer {
    ($type:ident) => {
        impl_ops!(RingOps, $type);
        impl_ops!(IntOps, $type);

        impl Ring for $type {
            fn inv(&self) -> Option<Self> {
                if self.is_unit() { 
                    Some(self.clone())
                } else { 
                    None
                }
            }
        
            fn is_unit(&self) -> bool {
                self.is_one() || (-self).is_one()
            }
        }

        impl Integer for $type {
            fn gcd(x: &Self, y: &Self) -> Self {
                num_integer::Integer::gcd(x, y)
            }

            fn lcm(x: &Self, y: &Self) -> Self {
                num_integer::Integer::lcm(x, y)
            }
        }
    }
}

impl_integer!(i32);
impl_integer!(i64);
impl_integer!(i128);
impl_integer!(BigInt);
