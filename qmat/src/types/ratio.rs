use std::fmt::{Display, Debug};
use std::str::FromStr;
use std::sync::LazyLock;
use std::iter::Sum;
use std::ops::{Mul, Add, Sub, Neg, AddAssign, SubAssign, MulAssign, Div, DivAssign};
use num_bigint::BigInt;
use num_traits::{Zero, One};
use auto_impl_ops::auto_ops;
use regex::Regex;
use crate::{Error, Field, IntOps, Integer, Ring, RingOps};

/// Exact fraction over arbitrary-precision integers.
pub type Rational = Ratio<BigInt>;

/// A fraction `numer / denom`, always kept in lowest terms 
/// with a positive denominator.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ratio<T> {
    numer: T,
    denom: T,
}

impl<T> Ratio<T> {
    #[inline]
    const fn new_raw(numer: T, denom: T) -> Ratio<T> {
        Ratio { numer, denom }
    }

    #[inline]
    pub const fn numer(&self) -> &T {
        &self.numer
    }

    #[inline]
    pub const fn denom(&self) -> &T {
        &self.denom
    }
}

impl<T> Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    /// Panics if `denom` is zero. Use [`Ratio::try_new`] for unchecked input.
    #[inline]
    pub fn new(numer: T, denom: T) -> Ratio<T> {
        assert!(!denom.is_zero(), "denominator must be non-zero");

        let mut ret = Ratio::new_raw(numer, denom);
        ret.reduce();
        ret
    }

    pub fn try_new(numer: T, denom: T) -> Result<Ratio<T>, Error> {
        if denom.is_zero() { 
            Err(Error::DivideByZero)
        } else { 
            Ok(Self::new(numer, denom))
        }
    }

    fn reduce(&mut self) {
        if self.numer.is_zero() {
            if !self.denom.is_one() { 
                self.denom.set_one();
            }
            return;
        }

        if self.denom.is_negative() { 
            self.numer = -&self.numer;
            self.denom = -&self.denom;
        }

        if self.denom.is_one() { 
            return
        }

        let g = T::gcd(&self.numer, &self.denom);

        if !g.is_one() {
            self.numer /= &g;
            self.denom /= &g;
        }
    }

    /// Integer part, truncated toward zero.
    pub fn to_integer(&self) -> T { 
        &self.numer / &self.denom
    }

    /// Floating point approximation. Not exact.
    pub fn to_f64(&self) -> f64 { 
        match (self.numer.to_f64(), self.denom.to_f64()) { 
            (Some(p), Some(q)) => p / q,
            _ => f64::NAN
        }
    }
}

impl<T> Ratio<T>
where T: One {
    pub fn from_numer(a: T) -> Self {
        Self::new_raw(a, T::one())
    }
}

impl<T> Ratio<T>
where T: One + PartialEq {
    pub fn is_numer(&self) -> bool { 
        self.denom.is_one()
    }
}

impl<T> From<i32> for Ratio<T>
where T: One + From<i32> {
    fn from(i: i32) -> Self {
        Self::from_numer(T::from(i))
    }
}

static INTEGER: LazyLock<Regex> = LazyLock::new(|| 
    Regex::new(r"^-?[0-9]+$").unwrap()
);

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| 
    Regex::new(r"^(-?)([0-9]+)[.,]([0-9]+)$").unwrap()
);

static FRACTION: LazyLock<Regex> = LazyLock::new(|| 
    Regex::new(r"^(-?[0-9]+)/(-?[0-9]+)$").unwrap()
);

impl<T> FromStr for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Err = Error;

    /// Accepts `n`, `n.m` (or `n,m`) and `p/q`. 
    /// A zero denominator is reported as `DivideByZero`, not as a parse failure.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let int = |t: &str| t.parse::<T>().map_err(|_| Error::Parse(s.to_owned()));

        if INTEGER.is_match(s) { 
            return Ok(Self::from_numer(int(s)?))
        }

        if let Some(c) = DECIMAL.captures(s) { 
            let (sign, whole, frac) = (&c[1], &c[2], &c[3]);
            let digits = format!("{sign}{whole}{frac}");
            let numer = int(digits.as_str())?;
            let denom = T::pow_of_ten(frac.len());
            return Ok(Self::new(numer, denom))
        }
        
        if let Some(c) = FRACTION.captures(s) { 
            let (p, q) = (int(&c[1])?, int(&c[2])?);
            return Self::try_new(p, q)
        }

        Err(Error::Parse(s.to_owned()))
    }
}

impl<T> Default for Ratio<T>
where T: Zero + One {
    fn default() -> Self {
        Self::from_numer(T::zero())
    }
}

impl<T> Display for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denom.is_one() { 
            write!(f, "{}", self.numer)
        } else if self.denom.is_pow_of_ten() { 
            write!(f, "{}", self.to_f64())
        } else { 
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl<T> Debug for Ratio<T>
where T: Debug + One + PartialEq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denom.is_one() { 
            write!(f, "{:?}", self.numer)
        } else { 
            write!(f, "{:?}/{:?}", self.numer, self.denom)
        }
    }
}

impl<T> Zero for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn zero() -> Self {
        Self::from_numer(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }
}

impl<T> One for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn one() -> Self {
        Self::from_numer(T::one())
    }

    fn is_one(&self) -> bool {
        self.numer == self.denom
    }
}

macro_rules! impl_add_assign_op {
    ($trait:ident, $method:ident) => {
        #[auto_ops]
        impl<T> $trait<&Ratio<T>> for Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {
            fn $method(&mut self, rhs: &Ratio<T>) {
                let (_, b) = (&self.numer, &self.denom);
                let (c, d) = ( &rhs.numer,  &rhs.denom);
                
                if rhs.is_zero() { 
                    // do nothing
                } else if self.is_zero() { 
                    self.numer.$method(c);  // 0 -> 0 ± c
                    self.denom = d.clone(); // 1 -> d
                } else if b == d { 
                    self.numer.$method(c);  // a -> a ± c
                    self.reduce()
                } else { 
                    let l = T::lcm(b, d);   // l = xb = yd
                    self.numer *= &l / b;   // a -> xa ± yc
                    self.numer.$method((&l / d) * c);
                    self.denom = l;         // b -> l
                    self.reduce()
                }
            }
        }
    };
}

impl_add_assign_op!(AddAssign, add_assign);
impl_add_assign_op!(SubAssign, sub_assign);

impl<T> Neg for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-&self.numer, self.denom)
    }
}

impl<T> Neg for &Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    type Output = Ratio<T>;
    fn neg(self) -> Self::Output {
        Ratio::new_raw(-&self.numer, self.denom.clone())
    }
}

#[auto_ops]
impl<T> MulAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn mul_assign(&mut self, rhs: &Ratio<T>) {
        let (a, b) = (&self.numer, &self.denom);
        let (c, d) = ( &rhs.numer,  &rhs.denom);

        if self.is_zero() || rhs.is_one() { 
            // do nothing
        } else if rhs.is_zero() { 
            self.set_zero();             // a -> 0, b -> 1
        } else if rhs.is_numer() { 
            let k = T::gcd(b, c);        // b = kb', c = kc'
            self.numer *= c / &k;        // a -> a * c'
            self.denom /= &k;            // b -> b'
        } else if self.is_numer() { 
            let k = T::gcd(a, d);        // a = ka', d = kd'
            self.numer /= &k;            // a -> a' * c
            self.numer *= c;             // 
            self.denom = d / &k;         // 1 ->      d'
        } else {
            let k = T::gcd(a, d);        // a = ka', d = kd'
            let l = T::gcd(b, c);        // b = lb', c = lc'
            self.numer /= &k;            // a -> a' * c'
            self.numer *= c / &l;        //      
            self.denom /= &l;            // b -> b' * d'
            self.denom *= d / &k;        //      
        }
    }
}

#[auto_ops]
impl<T> DivAssign<&Ratio<T>> for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {
    /// Panics on a zero divisor. See [`Field::try_div`].
    fn div_assign(&mut self, rhs: &Ratio<T>) {
        assert!(!rhs.is_zero(), "division by zero");
        let inv = Ratio::new(rhs.denom.clone(), rhs.numer.clone());
        *self *= inv
    }
}

macro_rules! impl_accum {
    ($trait:ident, $method:ident, $accum_method:ident, $accum_init:ident) => {
        impl<T> $trait for Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {
            fn $method<Iter: Iterator<Item = Self>>(iter: Iter) -> Self {
                iter.fold(Self::$accum_init(), |mut res, r| { 
                    Self::$accum_method(&mut res, r);
                    res
                })
            }
        }

        impl<'a, T> $trait<&'a Ratio<T>> for Ratio<T>
        where T: Integer, for<'x> &'x T: IntOps<T> {
            fn $method<Iter: Iterator<Item = &'a Ratio<T>>>(iter: Iter) -> Self {
                iter.fold(Self::$accum_init(), |mut res, r| { 
                    Self::$accum_method(&mut res, r);
                    res
                })
            }
        }
    }
}

impl_accum!(Sum, sum, add_assign, zero);

impl<T> RingOps for Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> RingOps<Ratio<T>> for &Ratio<T>
where T: Integer, for<'x> &'x T: IntOps<T> {}

impl<T> Ring for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() { 
            None
        } else { 
            let inv = Self::new(self.denom.clone(), self.numer.clone());
            Some(inv)
        }
    }

    fn is_unit(&self) -> bool {
        !self.is_zero()
    }
}

impl<T> Field for Ratio<T> 
where T: Integer, for<'x> &'x T: IntOps<T> {}

#[cfg(test)]
mod tests { 
    use super::*;

    fn q(s: &str) -> Rational { 
        s.parse().unwrap()
    }

    fn r(p: i32, q: i32) -> Rational { 
        Ratio::new(p.into(), q.into())
    }

    #[test]
    fn constants() {
        assert_eq!(Ratio::zero(), Ratio::new_raw(0, 1));
        assert_eq!(Ratio::one(),  Ratio::new_raw(1, 1));
        assert_eq!(Ratio::<i32>::default(), Ratio::zero());
    }

    #[test]
    fn reduce() {
        let a = Ratio::new(0, -4);
        assert_eq!(a.numer, 0);
        assert_eq!(a.denom, 1);

        let a = Ratio::new(-3, 1);
        assert_eq!(a.numer, -3);
        assert_eq!(a.denom, 1);

        let a = Ratio::new(1, -3);
        assert_eq!(a.numer, -1);
        assert_eq!(a.denom, 3);

        let a = Ratio::new(6, -8);
        assert_eq!(a.numer, -3);
        assert_eq!(a.denom, 4);

        let a = Ratio::new(-12, -18);
        assert_eq!(a.numer, 2);
        assert_eq!(a.denom, 3);
    }

    #[test]
    fn reduce_is_canonical() { 
        for p in -12..=12 { 
            for q in (-12..=12).filter(|q| *q != 0) { 
                let a = Ratio::new(p, q);
                assert!(a.denom > 0);
                assert_eq!(i32::gcd(&a.numer, &a.denom), 1);
            }
        }
    }

    #[test]
    fn try_new() { 
        assert_eq!(Ratio::try_new(2, 4), Ok(Ratio::new(1, 2)));
        assert_eq!(Ratio::try_new(1, 0), Err(Error::DivideByZero));
        assert_eq!(Ratio::try_new(3, -6), Ok(Ratio::new(-1, 2)));
    }

    #[test]
    #[should_panic]
    fn new_zero_denom() { 
        let _ = Ratio::new(1, 0);
    }

    #[test]
    fn from_int() { 
        let a = Rational::from(-7);
        assert_eq!(a.numer(), &BigInt::from(-7));
        assert_eq!(a.denom(), &BigInt::from(1));
        assert!(a.is_numer());
    }

    #[test]
    fn parse_int() { 
        assert_eq!(q("42"), Rational::from(42));
        assert_eq!(q("-42"), Rational::from(-42));
        assert_eq!(q("0"), Rational::zero());
        assert_eq!(q(" 7 "), Rational::from(7));
    }

    #[test]
    fn parse_big_int() { 
        let s = "123456789012345678901234567890";
        let a = q(s);
        assert_eq!(a.to_string(), s);
    }

    #[test]
    fn parse_decimal() { 
        assert_eq!(q("0.5"), r(1, 2));
        assert_eq!(q("0,5"), r(1, 2));
        assert_eq!(q("-1.25"), r(-5, 4));
        assert_eq!(q("-0.3"), r(-3, 10));
        assert_eq!(q("2.0"), Rational::from(2));
    }

    #[test]
    fn parse_fraction() { 
        assert_eq!(q("1/3"), r(1, 3));
        assert_eq!(q("4/-6"), r(-2, 3));
        assert_eq!(q("-4/-6"), r(2, 3));
        assert_eq!(q("0/5"), Rational::zero());
    }

    #[test]
    fn parse_divide_by_zero() { 
        assert_eq!("5/0".parse::<Rational>(), Err(Error::DivideByZero));
        assert_eq!("-5/0".parse::<Rational>(), Err(Error::DivideByZero));
    }

    #[test]
    fn parse_err() { 
        for s in ["", "abc", "1/", "/2", "1.", ".5", "1.2.3", "1/2/3", "1.5/2", "--1", "+-1", "1e5"] { 
            assert_eq!(s.parse::<Rational>(), Err(Error::Parse(s.to_owned())), "input: {s:?}");
        }
    }

    #[test]
    fn parse_overflow() { 
        let s = "99999999999999999999";
        assert_eq!(s.parse::<Ratio<i32>>(), Err(Error::Parse(s.to_owned())));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Ratio::new(-3, 1)), "-3");
        assert_eq!(format!("{}", Ratio::new(-3, 4)), "-3/4");
        assert_eq!(format!("{}", Ratio::new(3, 10)), "0.3");
        assert_eq!(format!("{}", Ratio::new(-7, 100)), "-0.07");
        assert_eq!(format!("{}", Ratio::new(1, 20)), "1/20");
    }

    #[test]
    fn display_parsed() {
        assert_eq!(q("0.5").to_string(), "1/2");
        assert_eq!(q("0.1").to_string(), "0.1");
        assert_eq!(q("-017").to_string(), "-17");
        assert_eq!((q("1/3") * q("3/1")).to_string(), "1");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Ratio::new(-3, 1)), "-3");
        assert_eq!(format!("{:?}", Ratio::new(-3, 4)), "-3/4");
        assert_eq!(format!("{:?}", Ratio::new(3, 10)), "3/10");
    }

    #[test]
    fn add() { 
        let a = Ratio::new(1, 2);
        let b = Ratio::new(3, 5);
        assert_eq!(a + b, Ratio::new(11, 10));

        let a = Ratio::new(1, 2);
        let o = Ratio::zero();
        assert_eq!(&a + &o, a);
        assert_eq!(&o + &a, a);

        let a = Ratio::new(1, 3);
        let b = Ratio::new(2, 3);
        assert_eq!(a + b, Ratio::new(1, 1));

        let a = Ratio::new(1, 6);
        let b = Ratio::new(1, 3);
        assert_eq!(a + b, Ratio::new(1, 2));

        let a = Ratio::new(1, 6);
        let b = Ratio::new(-1, 6);
        assert_eq!(a + b, Ratio::zero());
    }

    #[test]
    fn add_assign() { 
        let mut a = Ratio::new(1, 2);
        a += Ratio::new(3, 5);

        assert_eq!(a, Ratio::new(11, 10));
    }

    #[test]
    fn neg() { 
        let a = Ratio::new(1, 2);
        assert_eq!(-&a, Ratio::new(-1, 2));
        assert_eq!(-a, Ratio::new(-1, 2));
    }

    #[test]
    fn sub() { 
        let a = Ratio::new(1, 2);
        let b = Ratio::new(3, 5);
        assert_eq!(a - b, Ratio::new(-1, 10));

        let a = Ratio::new(1, 2);
        let o = Ratio::zero();
        assert_eq!(&a - &o, a);
        assert_eq!(&o - &a, -a);
    }

    #[test]
    fn sub_is_add_neg() { 
        let a = q("7/12");
        let b = q("-5/8");
        assert_eq!(&a - &b, &a + (-&b));
    }

    #[test]
    fn sub_assign() { 
        let mut a = Ratio::new(1, 2);
        a -= Ratio::new(3, 5);
        assert_eq!(a, Ratio::new(-1, 10));
    }

    #[test]
    fn mul() { 
        let a = Ratio::new(3, 10);
        let b = Ratio::new(-2, 7);
        assert_eq!(a * b, Ratio::new(-3, 35));

        let a = Ratio::new(3, 4);
        let e = Ratio::one();
        assert_eq!(&a * &e, a);
        assert_eq!(&e * &a, a);

        let a = Ratio::new(3, 4);
        let e = -Ratio::one();
        assert_eq!(&a * &e, -a);
        assert_eq!(&e * &a, -a);

        let a = Ratio::new(3, 4);
        let o = Ratio::zero();
        assert_eq!(&a * &o, Ratio::zero());
        assert_eq!(&o * &a, Ratio::zero());

        let a = Ratio::new(5, 6);
        let b = Ratio::from(3);
        assert_eq!(&a * &b, Ratio::new(5, 2));
        assert_eq!(&b * &a, Ratio::new(5, 2));
    }

    #[test]
    fn mul_assign() { 
        let mut a = Ratio::new(3, 10);
        a *= Ratio::new(2, 7);
        assert_eq!(a, Ratio::new(3, 35));
    }

    #[test]
    fn div() { 
        let a = Ratio::new(3, 10);
        let b = Ratio::new(2, 7);
        assert_eq!(a / b, Ratio::new(21, 20));

        let a = Ratio::new(3, 10);
        let b = Ratio::new(-3, 5);
        assert_eq!(a / b, Ratio::new(-1, 2));
    }

    #[test]
    fn div_assign() { 
        let mut a = Ratio::new(3, 10);
        a /= Ratio::new(2, 7);
        assert_eq!(a, Ratio::new(21, 20));
    }

    #[test]
    #[should_panic]
    fn div_by_zero() { 
        let _ = Ratio::new(3, 10) / Ratio::zero();
    }

    #[test]
    fn try_div() { 
        let a = Ratio::new(3, 10);
        assert_eq!(a.try_div(&Ratio::new(2, 7)), Ok(Ratio::new(21, 20)));
        assert_eq!(a.try_div(&Ratio::zero()), Err(Error::DivideByZero));
    }

    #[test]
    fn sum() { 
        let v = [Ratio::new(1, 2), Ratio::new(1, 3), Ratio::new(1, 6)];
        assert_eq!(v.iter().sum::<Ratio<i32>>(), Ratio::one());
        assert_eq!(v.into_iter().sum::<Ratio<i32>>(), Ratio::one());
        assert_eq!(std::iter::empty::<Ratio<i32>>().sum::<Ratio<i32>>(), Ratio::zero());
    }

    #[test]
    fn inv() { 
        let a = Ratio::new(-3, 10);
        assert_eq!(a.inv(), Some(Ratio::new(-10, 3)));

        let a = Ratio::<i32>::zero();
        assert_eq!(a.inv(), None);
    }

    #[test]
    fn is_unit() { 
        let a = Ratio::new(-3, 10);
        assert!(a.is_unit());

        let a = Ratio::<i32>::zero();
        assert!(!a.is_unit());
    }

    #[test]
    fn to_integer() { 
        assert_eq!(Ratio::new(7, 2).to_integer(), 3);
        assert_eq!(Ratio::new(-7, 2).to_integer(), -3);
        assert_eq!(Ratio::new(1, 3).to_integer(), 0);
        assert_eq!(Ratio::new(6, 3).to_integer(), 2);
    }

    #[test]
    fn to_f64() { 
        assert_eq!(Ratio::new(1, 4).to_f64(), 0.25);
        assert_eq!(Ratio::new(-3, 2).to_f64(), -1.5);
        assert_eq!(q("1/3").to_f64(), 1.0 / 3.0);
    }

    #[test]
    fn integer_round_trip() { 
        for s in ["0", "1", "-1", "10", "-12345", "98765432109876543210"] { 
            assert_eq!(q(s).to_string(), s);
        }
        assert_eq!(q("-0").to_string(), "0");
        assert_eq!(q("007").to_string(), "7");
    }
}
