use encloser::{
    CircumballGenerator, DiskGenerator, Encloser, EnclosingError, Tolerance, WelzlEncloser,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn basic_usage() {
    let encloser = WelzlEncloser::new(Tolerance::default(), DiskGenerator::new());

    // Enclose some points
    let points = vec![[1.0, 1.0], [5.0, 1.0], [3.0, 3.0], [3.0, -1.0], [2.0, 2.0]];
    let ball = encloser.enclose(&points).expect("Failed to enclose");

    // The ball is centered between the two farthest points
    assert_eq!(ball.center(), &[3.0, 1.0]);
    assert_eq!(ball.radius(), 2.0);
    assert!(points.iter().all(|p| ball.contains(p, 1e-10)));
    assert!(!ball.contains(&[5.5, 1.0], 1e-10));
    assert_eq!(ball.support_size(), 2);
    assert_eq!(ball.to_string(), "center=[3.0, 1.0] radius=2 support=2");
}

#[test]
fn invalid_tolerance() {
    let result = Tolerance::new(-1.0);
    assert!(matches!(result, Err(EnclosingError::InvalidTolerance(_))));
    let message = result.expect_err("Negative epsilon").to_string();
    assert!(message.contains("Invalid tolerance"));
}

#[test]
fn higher_dimension() {
    let encloser = WelzlEncloser::new(Tolerance::default(), CircumballGenerator::<4>::new());
    let mut rng = StdRng::seed_from_u64(7);
    let points: Vec<[f64; 4]> = (0..500)
        .map(|_| [rng.gen(), rng.gen(), rng.gen(), rng.gen()])
        .collect();

    let ball = encloser.enclose(&points).expect("Failed to enclose");
    assert!(ball.support_size() >= 2 && ball.support_size() <= 5);
    for p in &points {
        assert!(ball.contains(p, 1e-10));
    }
    for s in ball.support() {
        assert!(!ball.contains(s, -0.001));
    }
}

#[test]
fn shared_between_threads() {
    let encloser = WelzlEncloser::new(Tolerance::default(), DiskGenerator::new());
    let datasets: Vec<Vec<[f64; 2]>> = (0..4)
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..2000).map(|_| [rng.gen(), rng.gen()]).collect()
        })
        .collect();

    let radii: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = datasets
            .iter()
            .map(|points| {
                let encloser = &encloser;
                scope.spawn(move || {
                    encloser
                        .enclose(points)
                        .expect("Failed to enclose")
                        .radius()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("Thread panicked"))
            .collect()
    });

    for (points, radius) in datasets.iter().zip(radii) {
        let ball = encloser.enclose(points).expect("Failed to enclose");
        assert_eq!(ball.radius(), radius);
    }
}
