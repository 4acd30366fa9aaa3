use std::ops::{Index, Neg};
use std::str::FromStr;
use delegate::delegate;
use itertools::Itertools;
use nalgebra::DMatrix;
use qmat::{Field, RingOps};
use crate::{MatError, MatTrait, MAX_SIZE};

/// Dense matrix. Every operation returns a new matrix; 
/// operands are never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mat<R> {
    inner: DMatrix<R>
}

impl<R> MatTrait for Mat<R> {
    fn shape(&self) -> (usize, usize) {
        (self.inner.nrows(), self.inner.ncols())
    }
}

impl<R> Mat<R> {
    pub fn inner(&self) -> &DMatrix<R> {
        &self.inner
    }
}

impl<R> Mat<R>
where R: Field, for<'x> &'x R: RingOps<R> {
    /// Builds from rows, rejecting oversized, empty or ragged input.
    pub fn from_rows<I, Row>(rows: I) -> Result<Self, MatError>
    where I: IntoIterator<Item = Row>, Row: IntoIterator<Item = R> { 
        let rows = rows.into_iter().map(|r| r.into_iter().collect_vec()).collect_vec();
        let shape = check_shape(&rows)?;
        Ok(Self::from_data(shape, rows.into_iter().flatten()))
    }

    /// Like [`Mat::from_rows`], parsing each cell. 
    /// The shape is validated before any cell is parsed.
    pub fn parse_rows<I, Row, S>(rows: I) -> Result<Self, MatError>
    where 
        I: IntoIterator<Item = Row>, 
        Row: IntoIterator<Item = S>, 
        S: AsRef<str>,
        R: FromStr<Err = qmat::Error>
    { 
        let rows = rows.into_iter().map(|r| r.into_iter().collect_vec()).collect_vec();
        let shape = check_shape(&rows)?;
        let data = rows.iter().flatten().map(|s| 
            s.as_ref().parse::<R>()
        ).collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_data(shape, data))
    }

    /// Row-major. Panics if `data` is too short.
    pub fn from_data<I>(shape: (usize, usize), data: I) -> Self
    where I: IntoIterator<Item = R> { 
        DMatrix::from_row_iterator(shape.0, shape.1, data).into()
    }

    pub fn zero(shape: (usize, usize)) -> Self { 
        let inner = DMatrix::from_element(shape.0, shape.1, R::zero());
        Self::from(inner)
    }

    pub fn is_zero(&self) -> bool { 
        self.iter().all(|e| e.2.is_zero())
    }

    /// Entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &R)> { 
        let (m, n) = self.shape();
        (0..m).cartesian_product(0..n).map(move |(i, j)| 
            (i, j, &self.inner[(i, j)])
        )
    }

    pub fn row(&self, i: usize) -> impl Iterator<Item = &R> { 
        assert!(i < self.nrows());
        (0..self.ncols()).map(move |j| &self.inner[(i, j)])
    }

    pub fn column(&self, j: usize) -> Vec<R> { 
        assert!(j < self.ncols());
        self.inner.column(j).iter().cloned().collect()
    }

    pub fn transpose(&self) -> Self { 
        Self::from(self.inner.transpose())
    }

    /// The matrix without row `i` and column `j`.
    pub fn minor(&self, i: usize, j: usize) -> Result<Self, MatError> { 
        let (m, n) = self.shape();
        assert!(i < m && j < n);

        if m == 1 || n == 1 { 
            return Err(MatError::Empty)
        }

        let inner = self.inner.clone().remove_row(i).remove_column(j);
        Ok(Self::from(inner))
    }

    pub fn drop_column(&self, j: usize) -> Result<Self, MatError> { 
        let n = self.ncols();
        assert!(j < n);

        if n == 1 { 
            return Err(MatError::Empty)
        }

        let inner = self.inner.clone().remove_column(j);
        Ok(Self::from(inner))
    }

    pub fn replace_column(&self, j: usize, col: &[R]) -> Result<Self, MatError> { 
        let m = self.nrows();
        assert!(j < self.ncols());

        if col.len() != m { 
            return Err(MatError::SizeMismatch { lhs: (m, 1), rhs: (col.len(), 1) })
        }

        let mut inner = self.inner.clone();
        for (i, a) in col.iter().enumerate() { 
            inner[(i, j)] = a.clone();
        }
        Ok(Self::from(inner))
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MatError> { 
        if self.shape() != rhs.shape() { 
            return Err(MatError::SizeMismatch { lhs: self.shape(), rhs: rhs.shape() })
        }

        let (m, n) = self.shape();
        let inner = DMatrix::from_fn(m, n, |i, j| 
            &self[(i, j)] + &rhs[(i, j)]
        );
        Ok(Self::from(inner))
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MatError> { 
        self.checked_add(&-rhs)
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, MatError> { 
        let (l, m) = self.shape();
        let (m2, n) = rhs.shape();

        if m != m2 { 
            return Err(MatError::MultiplyShape { lhs: self.shape(), rhs: rhs.shape() })
        }

        let inner = DMatrix::from_fn(l, n, |i, j| 
            (0..m).map(|k| &self[(i, k)] * &rhs[(k, j)]).sum()
        );
        Ok(Self::from(inner))
    }

    pub fn scale(&self, r: &R) -> Self { 
        Self::from(self.inner.map(|a| a * r))
    }
}

fn check_shape<X>(rows: &[Vec<X>]) -> Result<(usize, usize), MatError> { 
    let m = rows.len();
    let n = rows.first().map(|r| r.len()).unwrap_or(0);

    if m > MAX_SIZE || n > MAX_SIZE { 
        return Err(MatError::TooBig { rows: m, cols: n })
    }

    if m == 0 || n == 0 { 
        return Err(MatError::Empty)
    }

    if let Some((i, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) { 
        return Err(MatError::RaggedRows { row: i, expected: n, found: r.len() })
    }

    Ok((m, n))
}

impl<R> From<DMatrix<R>> for Mat<R> {
    fn from(inner: DMatrix<R>) -> Self {
        Self { inner }
    }
}
 
impl<R> Index<(usize, usize)> for Mat<R> {
    type Output = R;
    delegate! { 
        to self.inner { 
            fn index(&self, index: (usize, usize)) -> &R;
        }
    }
}

impl<R> Neg for Mat<R>
where R: Field, for<'x> &'x R: RingOps<R> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<R> Neg for &Mat<R>
where R: Field, for<'x> &'x R: RingOps<R> {
    type Output = Mat<R>;
    fn neg(self) -> Self::Output {
        Mat::from(self.inner.map(|a| -a))
    }
}
