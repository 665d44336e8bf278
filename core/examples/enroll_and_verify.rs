use pointlock_core::{
    enroll, verify, CoordinateSpace, InterpolationMethod, Point, Scheme,
    VerifyConfig,
};

fn main() {
    let config =
        VerifyConfig::for_space(Scheme::Polynomial, CoordinateSpace::Pixel);

    // Reference clicks captured during enrollment.
    let enrolled = [
        Point::new(0.0, 1.0),
        Point::new(1.0, 3.0),
        Point::new(2.0, 9.0),
    ];
    let credential = enroll(&enrolled, &config, InterpolationMethod::default())
        .expect("enrollment should succeed");

    println!(
        "Credential expects {} attempt points",
        credential.expected_points()
    );

    // A login attempt close to the enrolled clicks is accepted.
    let attempt = [
        Point::new(0.0, 2.0),
        Point::new(1.0, 4.5),
        Point::new(2.0, 8.0),
    ];
    let accepted = verify(&credential, &attempt, &config)
        .expect("verification should succeed");
    println!("Attempt accepted: {accepted}");
}
