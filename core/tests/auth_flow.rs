use pointlock_core::{
    enroll, verify, verify_image, AuthError, CoordinateSpace, Credential,
    ImageDigest, InterpolationMethod, Point, Scheme, VerifyConfig,
};

const IMAGE_BYTES: &[u8] = b"pretend these are PNG bytes";

fn enrolled_points() -> Vec<Point> {
    vec![
        Point::new(120.0, 340.0),
        Point::new(410.0, 95.0),
        Point::new(633.0, 510.0),
        Point::new(801.0, 222.0),
    ]
}

/// Persist and reload the credential the way the external user store would:
/// as an opaque serialized blob.
fn store_round_trip(credential: &Credential) -> Credential {
    let blob = serde_json::to_vec(credential).expect("credential serializes");
    serde_json::from_slice(&blob).expect("credential deserializes")
}

#[test]
fn polynomial_enroll_store_verify() {
    let config =
        VerifyConfig::for_space(Scheme::Polynomial, CoordinateSpace::Pixel);
    let points = enrolled_points();

    let credential =
        enroll(&points, &config, InterpolationMethod::default()).unwrap();
    let stored = store_round_trip(&credential);
    assert_eq!(stored, credential);

    // The fitted curve passes through the enrolled points themselves, up to
    // floating-point residue.
    let exact = config.with_tolerance(1e-3).unwrap();
    assert_eq!(verify(&stored, &points, &exact), Ok(true));

    // A slightly shaky re-click is accepted under the pixel tolerance.
    let shaky: Vec<Point> = points
        .iter()
        .map(|p| Point::new(p.x, p.y + 30.0))
        .collect();
    assert_eq!(verify(&stored, &shaky, &config), Ok(true));

    // One click far off the curve rejects the whole attempt.
    let mut wrong = points.clone();
    wrong[2].y += 500.0;
    assert_eq!(verify(&stored, &wrong, &config), Ok(false));
}

#[test]
fn both_interpolation_methods_yield_interchangeable_credentials() {
    let config =
        VerifyConfig::for_space(Scheme::Polynomial, CoordinateSpace::Pixel);
    let points = enrolled_points();

    let gauss =
        enroll(&points, &config, InterpolationMethod::GaussJordan).unwrap();
    let lagrange =
        enroll(&points, &config, InterpolationMethod::Lagrange).unwrap();

    // Either credential accepts the enrolled points under a tiny tolerance.
    let tight = config.with_tolerance(1e-3).unwrap();
    assert_eq!(verify(&gauss, &points, &tight), Ok(true));
    assert_eq!(verify(&lagrange, &points, &tight), Ok(true));
}

#[test]
fn direct_scheme_end_to_end() {
    let config = VerifyConfig::for_space(
        Scheme::DirectPoints,
        CoordinateSpace::Normalized,
    );
    let points = vec![
        Point::new(0.21, 0.34),
        Point::new(0.55, 0.48),
        Point::new(0.83, 0.12),
    ];

    let credential =
        enroll(&points, &config, InterpolationMethod::default()).unwrap();
    let stored = store_round_trip(&credential);

    let close: Vec<Point> = points
        .iter()
        .map(|p| Point::new(p.x + 0.01, p.y - 0.02))
        .collect();
    assert_eq!(verify(&stored, &close, &config), Ok(true));

    let one_off = {
        let mut attempt = points.clone();
        attempt[1].x += 0.2;
        attempt
    };
    assert_eq!(verify(&stored, &one_off, &config), Ok(false));
}

#[test]
fn credentials_are_scheme_bound() {
    let poly_config =
        VerifyConfig::for_space(Scheme::Polynomial, CoordinateSpace::Pixel);
    let direct_config = VerifyConfig::for_space(
        Scheme::DirectPoints,
        CoordinateSpace::Pixel,
    );
    let points = enrolled_points();
    let credential =
        enroll(&points, &poly_config, InterpolationMethod::default()).unwrap();

    assert!(matches!(
        verify(&credential, &points, &direct_config),
        Err(AuthError::CorruptCredential { .. })
    ));
}

#[test]
fn degenerate_enrollment_never_reaches_the_store() {
    let config =
        VerifyConfig::for_space(Scheme::Polynomial, CoordinateSpace::Pixel);
    let duplicate_column = vec![
        Point::new(250.0, 100.0),
        Point::new(250.0, 400.0),
        Point::new(600.0, 300.0),
    ];
    assert!(matches!(
        enroll(&duplicate_column, &config, InterpolationMethod::default()),
        Err(AuthError::DegenerateInput(_))
    ));
}

#[test]
fn image_factor_combines_with_point_factor() {
    let config =
        VerifyConfig::for_space(Scheme::Polynomial, CoordinateSpace::Pixel);
    let points = enrolled_points();
    let credential =
        enroll(&points, &config, InterpolationMethod::default()).unwrap();
    let enrolled_digest = ImageDigest::of(IMAGE_BYTES);

    // Both factors pass for the real user.
    assert!(verify_image(&enrolled_digest, IMAGE_BYTES));
    assert_eq!(verify(&credential, &points, &config), Ok(true));

    // A different image fails the image factor regardless of the clicks.
    assert!(!verify_image(&enrolled_digest, b"some other image"));
}

#[test]
fn random_attempts_rarely_pass_and_never_error() {
    use rand::Rng;

    let config =
        VerifyConfig::for_space(Scheme::Polynomial, CoordinateSpace::Pixel)
            .with_tolerance(1.0)
            .unwrap();
    let points = enrolled_points();
    let credential =
        enroll(&points, &config, InterpolationMethod::default()).unwrap();

    let mut rng = rand::rng();
    for _ in 0..100 {
        let attempt: Vec<Point> = (0..points.len())
            .map(|_| {
                Point::new(
                    rng.random_range(0.0..1000.0),
                    rng.random_range(0.0..1000.0),
                )
            })
            .collect();
        // Random guesses are a legitimate rejection, not an error.
        assert!(verify(&credential, &attempt, &config).is_ok());
    }
}
