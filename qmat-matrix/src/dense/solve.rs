use qmat::{Field, RingOps};
use crate::{Mat, MatError, MatTrait};

impl<R> Mat<R>
where R: Field, for<'x> &'x R: RingOps<R> {
    /// Solves `Ax = b` by Cramer's rule, where `self = (A|b)`.
    /// 
    /// Fails with `SingularSystem` when `det(A) = 0`, 
    /// whether the system is inconsistent or underdetermined.
    pub fn solve(&self) -> Result<Vec<R>, MatError> { 
        let (m, n) = self.shape();
        if n != m + 1 { 
            return Err(MatError::AugmentedShape { rows: m, cols: n })
        }

        let a = self.drop_column(m)?;
        let b = self.column(m);
        let d = a.det()?;

        if d.is_zero() { 
            return Err(MatError::SingularSystem)
        }

        (0..m).map(|i| -> Result<R, MatError> { 
            let d_i = a.replace_column(i, &b)?.det()?;
            let x_i = d_i.try_div(&d)?;
            Ok(x_i)
        }).collect()
    }
}

#[cfg(test)]
mod tests {
    use qmat::Rational;
    use super::*;

    fn mat<const N: usize>(shape: (usize, usize), data: [i32; N]) -> Mat<Rational> { 
        Mat::from_data(shape, data.map(Rational::from))
    }

    fn q(s: &str) -> Rational { 
        s.parse().unwrap()
    }

    #[test]
    fn solve_2x2() { 
        // x + y = 3, x - y = 1
        let a = mat((2, 3), [
            1,  1, 3,
            1, -1, 1
        ]);
        assert_eq!(a.solve(), Ok(vec![Rational::from(2), Rational::from(1)]));
    }

    #[test]
    fn solve_1x1() { 
        let a = mat((1, 2), [3, 2]);
        assert_eq!(a.solve(), Ok(vec![q("2/3")]));
    }

    #[test]
    fn solve_3x3() { 
        // 2x + y - z = 8, -3x - y + 2z = -11, -2x + y + 2z = -3
        let a = mat((3, 4), [
             2,  1, -1,   8,
            -3, -1,  2, -11,
            -2,  1,  2,  -3
        ]);
        assert_eq!(a.solve(), Ok([2, 3, -1].map(Rational::from).to_vec()));
    }

    #[test]
    fn solve_fractions() { 
        let a = Mat::<Rational>::parse_rows([
            ["1/2", "0", "1"],
            ["0", "3", "1/2"],
        ]).unwrap();
        assert_eq!(a.solve(), Ok(vec![q("2"), q("1/6")]));
    }

    #[test]
    fn solve_singular() { 
        let a = mat((2, 3), [
            1, 2, 3,
            2, 4, 5
        ]);
        assert_eq!(a.solve(), Err(MatError::SingularSystem));

        // infinitely many solutions
        let a = mat((2, 3), [
            1, 2, 3,
            2, 4, 6
        ]);
        assert_eq!(a.solve(), Err(MatError::SingularSystem));
    }

    #[test]
    fn solve_shape() { 
        let a = mat((2, 2), [1, 2, 3, 4]);
        assert_eq!(a.solve(), Err(MatError::AugmentedShape { rows: 2, cols: 2 }));

        let a = mat((1, 3), [1, 2, 3]);
        assert_eq!(a.solve(), Err(MatError::AugmentedShape { rows: 1, cols: 3 }));
    }

    #[test]
    fn solve_keeps_input() { 
        let a = mat((2, 3), [1, 1, 3, 1, -1, 1]);
        let b = a.clone();
        let _ = a.solve();
        assert_eq!(a, b);
    }
}
