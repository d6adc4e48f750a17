//! Conveniences for nalgebra matrices.
//!
//! `DMatrix` storage is contiguous and column-major, so it is passed to the
//! native routines directly with `lda = max(1, nrows)`.

use nalgebra::DMatrix;
use num_traits::Zero;

use crate::backend::{Backend, NativeRoutines};
use crate::error::{Error, Result};
use crate::ops::Lapack;
use crate::options::Uplo;
use crate::scalar::{RealOf, Scalar};

/// Scale factors from [`Lapack::equilibrate`].
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibration<T: Scalar> {
    /// One factor per row; meaningful only when `status == 0`
    pub scale: Vec<RealOf<T>>,
    /// Ratio of the smallest to the largest scale factor
    pub scond: RealOf<T>,
    /// Largest entry of the matrix in magnitude
    pub amax: RealOf<T>,
    /// Native status: 0, or the 1-based index of a zero row
    pub status: i64,
}

impl<T: Scalar> Equilibration<T> {
    pub fn is_complete(&self) -> bool {
        self.status == 0
    }
}

/// Aasen factorization metadata from [`Lapack::aasen_in_place`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AasenFactor {
    /// 1-based row interchanges
    pub pivots: Vec<i64>,
    /// Native status of the factorization
    pub status: i64,
}

fn square<T>(a: &DMatrix<T>) -> Result<usize> {
    if a.nrows() != a.ncols() {
        return Err(Error::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    Ok(a.nrows())
}

fn rows_match<T>(name: &'static str, b: &DMatrix<T>, n: usize) -> Result<()> {
    if b.nrows() != n {
        return Err(Error::RowMismatch {
            name,
            rows: b.nrows(),
            expected: n,
        });
    }
    Ok(())
}

fn extent(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn leading_dim<T>(a: &DMatrix<T>) -> i64 {
    extent(a.nrows().max(1))
}

impl<B: Backend> Lapack<B> {
    /// [`Lapack::syequb`] on a square matrix.
    pub fn equilibrate<T: Scalar>(&self, uplo: Uplo, a: &DMatrix<T>) -> Result<Equilibration<T>>
    where
        B: NativeRoutines<T>,
    {
        let n = square(a)?;
        let mut scale = vec![RealOf::<T>::zero(); n];
        let mut scond = RealOf::<T>::zero();
        let mut amax = RealOf::<T>::zero();
        let status = self.syequb(
            uplo,
            extent(n),
            a.as_slice(),
            leading_dim(a),
            &mut scale,
            &mut scond,
            &mut amax,
        )?;
        Ok(Equilibration {
            scale,
            scond,
            amax,
            status,
        })
    }

    /// [`Lapack::potrf`] on a square matrix; returns the native status.
    pub fn cholesky_in_place<T: Scalar>(&self, uplo: Uplo, a: &mut DMatrix<T>) -> Result<i64>
    where
        B: NativeRoutines<T>,
    {
        let n = square(a)?;
        let lda = leading_dim(a);
        self.potrf(uplo, extent(n), a.as_mut_slice(), lda)
    }

    /// [`Lapack::potrs`] with a factor from [`Lapack::cholesky_in_place`];
    /// every column of `b` is a right-hand side.
    pub fn cholesky_solve<T: Scalar>(
        &self,
        uplo: Uplo,
        factor: &DMatrix<T>,
        b: &mut DMatrix<T>,
    ) -> Result<i64>
    where
        B: NativeRoutines<T>,
    {
        let n = square(factor)?;
        rows_match("b", b, n)?;
        let (nrhs, ldb) = (extent(b.ncols()), leading_dim(b));
        self.potrs(
            uplo,
            extent(n),
            nrhs,
            factor.as_slice(),
            leading_dim(factor),
            b.as_mut_slice(),
            ldb,
        )
    }

    /// [`Lapack::sytrf_aa`] on a square matrix.
    pub fn aasen_in_place<T: Scalar>(&self, uplo: Uplo, a: &mut DMatrix<T>) -> Result<AasenFactor>
    where
        B: NativeRoutines<T>,
    {
        let n = square(a)?;
        let lda = leading_dim(a);
        let mut pivots = vec![0; n];
        let status = self.sytrf_aa(uplo, extent(n), a.as_mut_slice(), lda, &mut pivots)?;
        Ok(AasenFactor { pivots, status })
    }

    /// [`Lapack::sytrs_aa`] with a factorization from
    /// [`Lapack::aasen_in_place`].
    pub fn aasen_solve<T: Scalar>(
        &self,
        uplo: Uplo,
        factor: &DMatrix<T>,
        aasen: &AasenFactor,
        b: &mut DMatrix<T>,
    ) -> Result<i64>
    where
        B: NativeRoutines<T>,
    {
        let n = square(factor)?;
        rows_match("b", b, n)?;
        let (nrhs, ldb) = (extent(b.ncols()), leading_dim(b));
        self.sytrs_aa(
            uplo,
            extent(n),
            nrhs,
            factor.as_slice(),
            leading_dim(factor),
            &aasen.pivots,
            b.as_mut_slice(),
            ldb,
        )
    }
}
