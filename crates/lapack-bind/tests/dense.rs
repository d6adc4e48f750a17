use lapack_bind::{
    AnyBackend, BackendKind, BindingConfig, Complex64, Error, Lapack, ReferenceBackend, Uplo,
};
use nalgebra::{DMatrix, dmatrix};

fn reference() -> Lapack<ReferenceBackend> {
    Lapack::new(ReferenceBackend)
}

#[test]
fn cholesky_on_dmatrix() {
    let a = dmatrix![
        4.0f64, 2.0, 0.4;
        2.0, 5.0, 1.0;
        0.4, 1.0, 3.0
    ];
    let x = DMatrix::from_column_slice(3, 2, &[1.0, -1.0, 2.0, 0.5, 0.0, -3.0]);
    let mut b = &a * &x;

    let mut factor = a.clone();
    assert_eq!(reference().cholesky_in_place(Uplo::Lower, &mut factor), Ok(0));
    assert_eq!(reference().cholesky_solve(Uplo::Lower, &factor, &mut b), Ok(0));
    assert!((b - x).amax() < 1e-12);
}

#[test]
fn aasen_on_complex_dmatrix() {
    let c = |re: f64, im: f64| Complex64::new(re, im);
    let a = dmatrix![
        c(0.0, 0.0), c(2.0, 1.0), c(1.0, 0.0);
        c(2.0, 1.0), c(-1.0, 0.5), c(0.0, 3.0);
        c(1.0, 0.0), c(0.0, 3.0), c(4.0, 0.0)
    ];
    assert_eq!(a, a.transpose());
    let x = DMatrix::from_column_slice(3, 1, &[c(1.0, 0.0), c(0.0, -1.0), c(2.0, 2.0)]);
    let b = &a * &x;

    for uplo in [Uplo::Upper, Uplo::Lower] {
        let mut factor = a.clone();
        let aasen = reference().aasen_in_place(uplo, &mut factor).unwrap();
        assert_eq!(aasen.status, 0);
        assert_eq!(aasen.pivots.len(), 3);

        let mut rhs = b.clone();
        assert_eq!(reference().aasen_solve(uplo, &factor, &aasen, &mut rhs), Ok(0));
        assert!((rhs - &x).norm() < 1e-12);
    }
}

#[test]
fn equilibration_summary() {
    let a = DMatrix::from_diagonal(&nalgebra::dvector![4.0f32, 16.0, 0.25]);
    let eq = reference().equilibrate(Uplo::Upper, &a).unwrap();
    assert!(eq.is_complete());
    assert_eq!(eq.scale, vec![0.5, 0.25, 2.0]);
    assert_eq!(eq.amax, 16.0);

    let zero = DMatrix::<f64>::zeros(2, 2);
    let eq = reference().equilibrate(Uplo::Lower, &zero).unwrap();
    assert!(!eq.is_complete());
    assert_eq!(eq.status, 1);
}

#[test]
fn shape_mismatches_are_rejected() {
    let mut rect = DMatrix::<f64>::zeros(2, 3);
    assert_eq!(
        reference().cholesky_in_place(Uplo::Upper, &mut rect),
        Err(Error::NotSquare { rows: 2, cols: 3 })
    );

    let factor = DMatrix::<f64>::identity(3, 3);
    let mut b = DMatrix::<f64>::zeros(2, 1);
    assert_eq!(
        reference().cholesky_solve(Uplo::Upper, &factor, &mut b),
        Err(Error::RowMismatch {
            name: "b",
            rows: 2,
            expected: 3
        })
    );
}

#[test]
fn empty_dmatrix() {
    let mut a = DMatrix::<f64>::zeros(0, 0);
    assert_eq!(reference().cholesky_in_place(Uplo::Upper, &mut a), Ok(0));
    let aasen = reference().aasen_in_place(Uplo::Upper, &mut a).unwrap();
    assert!(aasen.pivots.is_empty());
}

#[test]
fn handle_from_configuration() {
    let config = BindingConfig::from_json(r#"{ "backend": "reference", "max_workspace": 2 }"#)
        .expect("valid configuration");
    let lapack = Lapack::<AnyBackend>::from_config(&config).expect("reference is always built");
    assert_eq!(lapack.backend().kind(), BackendKind::Reference);

    // n = 2 needs four elements for the factorization
    let mut a = dmatrix![1.0f64, 2.0; 2.0, 1.0];
    let err = lapack.aasen_in_place(Uplo::Lower, &mut a).unwrap_err();
    assert_eq!(
        err,
        Error::WorkspaceTooLarge {
            requested: 4,
            limit: 2
        }
    );
}

#[cfg(not(feature = "fortran"))]
#[test]
fn fortran_backend_is_unavailable_without_the_feature() {
    let config = BindingConfig::default().with_backend(BackendKind::Fortran);
    assert!(matches!(
        Lapack::from_config(&config),
        Err(Error::BackendUnavailable(_))
    ));
}
