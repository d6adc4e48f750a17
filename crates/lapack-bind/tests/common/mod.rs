//! Shared fixtures: stub backends and test matrices.
#![allow(dead_code)]

use std::ffi::c_char;
use std::sync::Mutex;

use lapack_bind::{Backend, BlasInt, NativeRoutines, RealOf, ReferenceBackend, Scalar};

/// Implements every routine of a stub backend with one body.
macro_rules! stub_routines {
    ($backend:ty, |$this:ident, $info:ident| $body:block) => {
        impl<T: Scalar> NativeRoutines<T> for $backend {
            unsafe fn syequb(
                &self,
                _: *const c_char,
                _: *const BlasInt,
                _: *const T,
                _: *const BlasInt,
                _: *mut RealOf<T>,
                _: *mut RealOf<T>,
                _: *mut RealOf<T>,
                _: *mut T,
                $info: *mut BlasInt,
            ) {
                let $this = self;
                $body
            }

            unsafe fn sytrf_aa(
                &self,
                _: *const c_char,
                _: *const BlasInt,
                _: *mut T,
                _: *const BlasInt,
                _: *mut BlasInt,
                _: *mut T,
                _: *const BlasInt,
                $info: *mut BlasInt,
            ) {
                let $this = self;
                $body
            }

            unsafe fn sytrs_aa(
                &self,
                _: *const c_char,
                _: *const BlasInt,
                _: *const BlasInt,
                _: *const T,
                _: *const BlasInt,
                _: *const BlasInt,
                _: *mut T,
                _: *const BlasInt,
                _: *mut T,
                _: *const BlasInt,
                $info: *mut BlasInt,
            ) {
                let $this = self;
                $body
            }

            unsafe fn sysv_aa(
                &self,
                _: *const c_char,
                _: *const BlasInt,
                _: *const BlasInt,
                _: *mut T,
                _: *const BlasInt,
                _: *mut BlasInt,
                _: *mut T,
                _: *const BlasInt,
                _: *mut T,
                _: *const BlasInt,
                $info: *mut BlasInt,
            ) {
                let $this = self;
                $body
            }

            unsafe fn potrf(
                &self,
                _: *const c_char,
                _: *const BlasInt,
                _: *mut T,
                _: *const BlasInt,
                $info: *mut BlasInt,
            ) {
                let $this = self;
                $body
            }

            unsafe fn potrs(
                &self,
                _: *const c_char,
                _: *const BlasInt,
                _: *const BlasInt,
                _: *const T,
                _: *const BlasInt,
                _: *mut T,
                _: *const BlasInt,
                $info: *mut BlasInt,
            ) {
                let $this = self;
                $body
            }

            unsafe fn posv(
                &self,
                _: *const c_char,
                _: *const BlasInt,
                _: *const BlasInt,
                _: *mut T,
                _: *const BlasInt,
                _: *mut T,
                _: *const BlasInt,
                $info: *mut BlasInt,
            ) {
                let $this = self;
                $body
            }
        }
    };
}

/// Fails the test if any native routine is reached.
#[derive(Debug, Default)]
pub struct PanicBackend;

impl Backend for PanicBackend {
    fn name(&self) -> &'static str {
        "panic"
    }
}

stub_routines!(PanicBackend, |this, info| {
    let _ = (this, info);
    panic!("native routine reached");
});

/// Returns a fixed status from every routine without touching any buffer.
#[derive(Debug)]
pub struct StatusBackend(pub BlasInt);

impl Backend for StatusBackend {
    fn name(&self) -> &'static str {
        "status"
    }
}

stub_routines!(StatusBackend, |this, info| {
    unsafe { *info = this.0 };
});

/// Answers workspace queries with a fixed size; fails the test on any
/// other call.
#[derive(Debug)]
pub struct QueryBackend(pub f64);

impl Backend for QueryBackend {
    fn name(&self) -> &'static str {
        "query"
    }
}

impl QueryBackend {
    unsafe fn answer<T: Scalar>(&self, work: *mut T, lwork: *const BlasInt, info: *mut BlasInt) {
        unsafe {
            assert_eq!(*lwork, -1, "only the workspace query may reach this backend");
            *work = T::from_parts(self.0, 0.0);
            *info = 0;
        }
    }
}

impl<T: Scalar> NativeRoutines<T> for QueryBackend {
    unsafe fn syequb(
        &self,
        _: *const c_char,
        _: *const BlasInt,
        _: *const T,
        _: *const BlasInt,
        _: *mut RealOf<T>,
        _: *mut RealOf<T>,
        _: *mut RealOf<T>,
        _: *mut T,
        _: *mut BlasInt,
    ) {
        panic!("syequb does not query its workspace");
    }

    unsafe fn sytrf_aa(
        &self,
        _: *const c_char,
        _: *const BlasInt,
        _: *mut T,
        _: *const BlasInt,
        _: *mut BlasInt,
        work: *mut T,
        lwork: *const BlasInt,
        info: *mut BlasInt,
    ) {
        unsafe { self.answer(work, lwork, info) }
    }

    unsafe fn sytrs_aa(
        &self,
        _: *const c_char,
        _: *const BlasInt,
        _: *const BlasInt,
        _: *const T,
        _: *const BlasInt,
        _: *const BlasInt,
        _: *mut T,
        _: *const BlasInt,
        _: *mut T,
        _: *const BlasInt,
        _: *mut BlasInt,
    ) {
        panic!("sytrs_aa does not query its workspace");
    }

    unsafe fn sysv_aa(
        &self,
        _: *const c_char,
        _: *const BlasInt,
        _: *const BlasInt,
        _: *mut T,
        _: *const BlasInt,
        _: *mut BlasInt,
        _: *mut T,
        _: *const BlasInt,
        work: *mut T,
        lwork: *const BlasInt,
        info: *mut BlasInt,
    ) {
        unsafe { self.answer(work, lwork, info) }
    }

    unsafe fn potrf(
        &self,
        _: *const c_char,
        _: *const BlasInt,
        _: *mut T,
        _: *const BlasInt,
        _: *mut BlasInt,
    ) {
        panic!("potrf takes no workspace");
    }

    unsafe fn potrs(
        &self,
        _: *const c_char,
        _: *const BlasInt,
        _: *const BlasInt,
        _: *const T,
        _: *const BlasInt,
        _: *mut T,
        _: *const BlasInt,
        _: *mut BlasInt,
    ) {
        panic!("potrs takes no workspace");
    }

    unsafe fn posv(
        &self,
        _: *const c_char,
        _: *const BlasInt,
        _: *const BlasInt,
        _: *mut T,
        _: *const BlasInt,
        _: *mut T,
        _: *const BlasInt,
        _: *mut BlasInt,
    ) {
        panic!("posv takes no workspace");
    }
}

/// One native invocation seen by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub routine: &'static str,
    pub n: i64,
    pub lwork: Option<i64>,
    pub ipiv: Option<Vec<i64>>,
}

/// Records integer arguments, then forwards to the reference routines.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Mutex<Vec<Call>>,
}

impl RecordingBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn lworks(&self, routine: &str) -> Vec<i64> {
        self.calls()
            .into_iter()
            .filter(|c| c.routine == routine)
            .filter_map(|c| c.lwork)
            .collect()
    }

    fn record(&self, routine: &'static str, n: *const BlasInt, lwork: Option<*const BlasInt>) {
        let n = i64::from(unsafe { *n });
        let lwork = lwork.map(|p| i64::from(unsafe { *p }));
        self.calls.lock().unwrap().push(Call {
            routine,
            n,
            lwork,
            ipiv: None,
        });
    }
}

impl Backend for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }
}

impl<T: Scalar> NativeRoutines<T> for RecordingBackend {
    unsafe fn syequb(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        a: *const T,
        lda: *const BlasInt,
        s: *mut RealOf<T>,
        scond: *mut RealOf<T>,
        amax: *mut RealOf<T>,
        work: *mut T,
        info: *mut BlasInt,
    ) {
        self.record("syequb", n, None);
        unsafe {
            NativeRoutines::<T>::syequb(
                &ReferenceBackend, uplo, n, a, lda, s, scond, amax, work, info,
            )
        }
    }

    unsafe fn sytrf_aa(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut T,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        work: *mut T,
        lwork: *const BlasInt,
        info: *mut BlasInt,
    ) {
        self.record("sytrf_aa", n, Some(lwork));
        unsafe {
            NativeRoutines::<T>::sytrf_aa(&ReferenceBackend, uplo, n, a, lda, ipiv, work, lwork, info)
        }
    }

    unsafe fn sytrs_aa(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const T,
        lda: *const BlasInt,
        ipiv: *const BlasInt,
        b: *mut T,
        ldb: *const BlasInt,
        work: *mut T,
        lwork: *const BlasInt,
        info: *mut BlasInt,
    ) {
        self.record("sytrs_aa", n, Some(lwork));
        let len = usize::try_from(unsafe { *n }).unwrap_or(0);
        let pivots = if len == 0 {
            Vec::new()
        } else {
            unsafe { std::slice::from_raw_parts(ipiv, len) }
                .iter()
                .map(|&p| i64::from(p))
                .collect()
        };
        if let Some(last) = self.calls.lock().unwrap().last_mut() {
            last.ipiv = Some(pivots);
        }
        unsafe {
            NativeRoutines::<T>::sytrs_aa(
                &ReferenceBackend, uplo, n, nrhs, a, lda, ipiv, b, ldb, work, lwork, info,
            )
        }
    }

    unsafe fn sysv_aa(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut T,
        lda: *const BlasInt,
        ipiv: *mut BlasInt,
        b: *mut T,
        ldb: *const BlasInt,
        work: *mut T,
        lwork: *const BlasInt,
        info: *mut BlasInt,
    ) {
        self.record("sysv_aa", n, Some(lwork));
        unsafe {
            NativeRoutines::<T>::sysv_aa(
                &ReferenceBackend, uplo, n, nrhs, a, lda, ipiv, b, ldb, work, lwork, info,
            )
        }
    }

    unsafe fn potrf(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        a: *mut T,
        lda: *const BlasInt,
        info: *mut BlasInt,
    ) {
        self.record("potrf", n, None);
        unsafe { NativeRoutines::<T>::potrf(&ReferenceBackend, uplo, n, a, lda, info) }
    }

    unsafe fn potrs(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *const T,
        lda: *const BlasInt,
        b: *mut T,
        ldb: *const BlasInt,
        info: *mut BlasInt,
    ) {
        self.record("potrs", n, None);
        unsafe { NativeRoutines::<T>::potrs(&ReferenceBackend, uplo, n, nrhs, a, lda, b, ldb, info) }
    }

    unsafe fn posv(
        &self,
        uplo: *const c_char,
        n: *const BlasInt,
        nrhs: *const BlasInt,
        a: *mut T,
        lda: *const BlasInt,
        b: *mut T,
        ldb: *const BlasInt,
        info: *mut BlasInt,
    ) {
        self.record("posv", n, None);
        unsafe { NativeRoutines::<T>::posv(&ReferenceBackend, uplo, n, nrhs, a, lda, b, ldb, info) }
    }
}

/// Hermitian (symmetric for real types) positive definite matrix stored in
/// full, `lda = n + pad`.
pub fn hpd_matrix<T: Scalar>(n: usize, pad: usize) -> Vec<T> {
    let lda = n + pad;
    let mut a = vec![T::from_parts(-99.0, 0.0); lda * n];
    for j in 0..n {
        for i in 0..n {
            a[i + j * lda] = if i == j {
                T::from_parts((n + 1) as f64, 0.0)
            } else {
                T::from_parts(1.0 / (1 + i + j) as f64, 0.1 * (i as f64 - j as f64))
            };
        }
    }
    a
}

/// Symmetric (complex symmetric, not Hermitian) indefinite matrix stored in
/// full, `lda = n + pad`. Diagonal signs alternate.
pub fn symmetric_indefinite<T: Scalar>(n: usize, pad: usize) -> Vec<T> {
    let lda = n + pad;
    let mut a = vec![T::from_parts(-99.0, 0.0); lda * n];
    for j in 0..n {
        for i in 0..n {
            a[i + j * lda] = if i == j {
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                T::from_parts(sign * (n + 2) as f64, 0.5)
            } else {
                T::from_parts(1.0 / (1 + i + j) as f64, 0.2 * (i + j) as f64 / n as f64)
            };
        }
    }
    a
}

/// Known solution with `nrhs` columns.
pub fn solution<T: Scalar>(n: usize, nrhs: usize) -> Vec<T> {
    (0..n * nrhs)
        .map(|k| T::from_parts(1.0 + k as f64 * 0.5, 0.25 * (k % 3) as f64))
        .collect()
}

/// `A X` for a full `n x n` matrix with leading dimension `lda`.
pub fn multiply<T: Scalar>(a: &[T], lda: usize, n: usize, x: &[T], nrhs: usize) -> Vec<T> {
    let mut b = vec![T::from_parts(0.0, 0.0); n * nrhs];
    for c in 0..nrhs {
        for j in 0..n {
            let xj = x[j + c * n];
            for i in 0..n {
                b[i + c * n] += a[i + j * lda] * xj;
            }
        }
    }
    b
}

pub fn distance<T: Scalar>(x: T, y: T) -> f64 {
    let (xr, xi) = x.to_parts();
    let (yr, yi) = y.to_parts();
    ((xr - yr).powi(2) + (xi - yi).powi(2)).sqrt()
}

/// Largest elementwise error against the known solution.
pub fn max_error<T: Scalar>(x: &[T], expected: &[T]) -> f64 {
    x.iter()
        .zip(expected)
        .map(|(&a, &b)| distance(a, b))
        .fold(0.0, f64::max)
}

pub fn epsilon<T: Scalar>() -> f64 {
    T::real_to_f64(T::epsilon())
}

/// Error bound `c * n * eps * |A| * |x|` with a generous constant, since the
/// test matrices are well conditioned.
pub fn tolerance<T: Scalar>(n: usize, a: &[T], lda: usize, x: &[T]) -> f64 {
    let zero = T::from_parts(0.0, 0.0);
    let norm_a = (0..n)
        .flat_map(|j| (0..n).map(move |i| i + j * lda))
        .map(|k| distance(a[k], zero))
        .fold(0.0, f64::max);
    let norm_x = x.iter().map(|&z| distance(z, zero)).fold(0.0, f64::max);
    100.0 * n.max(1) as f64 * epsilon::<T>() * norm_a.max(1.0) * norm_x.max(1.0)
}
