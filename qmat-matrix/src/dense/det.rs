use itertools::Itertools;
use nalgebra::DMatrix;
use qmat::{Field, RingOps};
use crate::{Mat, MatError, MatTrait};

impl<R> Mat<R>
where R: Field, for<'x> &'x R: RingOps<R> {
    pub fn trace(&self) -> Result<R, MatError> { 
        self.ensure_square()?;

        let n = self.nrows();
        let tr: R = (0..n).map(|i| &self[(i, i)]).sum();
        Ok(tr)
    }

    /// Cofactor (Laplace) expansion along the first row. 
    /// Exact, but O(n!) in the size of the matrix.
    pub fn det(&self) -> Result<R, MatError> { 
        self.ensure_square()?;

        let cols = (0..self.ncols()).collect_vec();
        Ok(det_rec(self.inner(), 0, &cols))
    }

    fn ensure_square(&self) -> Result<(), MatError> { 
        if self.is_square() { 
            Ok(())
        } else { 
            let (rows, cols) = self.shape();
            Err(MatError::NotSquare { rows, cols })
        }
    }
}

// Determinant of the minor spanned by rows `i..` and the columns `cols`.
fn det_rec<R>(a: &DMatrix<R>, i: usize, cols: &[usize]) -> R
where R: Field, for<'x> &'x R: RingOps<R> {
    match cols { 
        [] => return R::one(),
        [j] => return a[(i, *j)].clone(),
        _ => {}
    }

    let mut res = R::zero();

    for (k, &j) in cols.iter().enumerate() { 
        let e = &a[(i, j)];
        if e.is_zero() { 
            continue
        }

        let rest = cols.iter().copied().filter(|&c| c != j).collect_vec();
        let d = e * det_rec(a, i + 1, &rest);

        if k % 2 == 0 { 
            res += d
        } else { 
            res -= d
        }
    }

    res
}
