use approx::assert_relative_eq;
use core::cell::Cell;
use cross_track_core::{
    nalgebra::Point3,
    CrossingBinding, PositionProvider, Sampled, SightLine, TriangulatorSightLines,
};
use cross_track_geom::crossing::{estimate_crossing, MidpointTriangulator};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const EPSILON_APPROX: f64 = 1e-6;

/// Maps an arbitrary float into a bounded finite coordinate.
fn tame(n: f64) -> f64 {
    if n.is_finite() {
        n % 100.0
    } else {
        0.0
    }
}

fn tame_point(p: (f64, f64, f64)) -> Point3<f64> {
    Point3::new(tame(p.0), tame(p.1), tame(p.2))
}

/// Rejects configurations close enough to degenerate or parallel that the
/// result magnitude explodes and tolerances become meaningless.
fn well_conditioned(a: &SightLine, b: &SightLine) -> bool {
    a.direction().norm() > 1e-2
        && b.direction().norm() > 1e-2
        && a.direction().cross(&b.direction()).norm() > 1e-2
}

#[quickcheck]
fn swapping_the_lines_is_symmetric(
    la0: (f64, f64, f64),
    la1: (f64, f64, f64),
    lb0: (f64, f64, f64),
    lb1: (f64, f64, f64),
) -> TestResult {
    let a = SightLine::new(tame_point(la0), tame_point(la1));
    let b = SightLine::new(tame_point(lb0), tame_point(lb1));
    if !well_conditioned(&a, &b) {
        return TestResult::discard();
    }

    let forward = estimate_crossing(a.origin, a.through, b.origin, b.through);
    let swapped = estimate_crossing(b.origin, b.through, a.origin, a.through);
    if !forward.coords.iter().all(|n| n.is_finite()) {
        return TestResult::discard();
    }

    assert_relative_eq!(
        forward,
        swapped,
        epsilon = EPSILON_APPROX,
        max_relative = EPSILON_APPROX
    );
    TestResult::passed()
}

#[quickcheck]
fn translating_the_inputs_translates_the_result(
    la0: (f64, f64, f64),
    la1: (f64, f64, f64),
    lb0: (f64, f64, f64),
    lb1: (f64, f64, f64),
    offset: (f64, f64, f64),
) -> TestResult {
    let a = SightLine::new(tame_point(la0), tame_point(la1));
    let b = SightLine::new(tame_point(lb0), tame_point(lb1));
    let offset = tame_point(offset).coords;
    if !well_conditioned(&a, &b) {
        return TestResult::discard();
    }

    let crossing = estimate_crossing(a.origin, a.through, b.origin, b.through);
    if !crossing.coords.iter().all(|n| n.is_finite()) {
        return TestResult::discard();
    }

    let a = a.translated(offset);
    let b = b.translated(offset);
    let translated = estimate_crossing(a.origin, a.through, b.origin, b.through);

    assert_relative_eq!(
        translated,
        crossing + offset,
        epsilon = EPSILON_APPROX,
        max_relative = EPSILON_APPROX
    );
    TestResult::passed()
}

#[test]
fn reconstructs_known_crossings() {
    fn random_point(rng: &mut SmallRng) -> Point3<f64> {
        Point3::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    }

    let mut rng = SmallRng::seed_from_u64(0);
    let mut checked = 0;
    while checked < 100 {
        let crossing = random_point(&mut rng);
        let origin_a = random_point(&mut rng);
        let origin_b = random_point(&mut rng);
        // Anchor each tracked point somewhere along the ray towards the
        // crossing, not at the crossing itself.
        let through_a = origin_a + (crossing - origin_a) * rng.gen_range(0.5..2.0);
        let through_b = origin_b + (crossing - origin_b) * rng.gen_range(0.5..2.0);

        let a = SightLine::new(origin_a, through_a);
        let b = SightLine::new(origin_b, through_b);
        if a.direction().cross(&b.direction()).norm() <= 1e-2 {
            continue;
        }

        let estimated = MidpointTriangulator
            .triangulate_sight_lines(a, b)
            .unwrap()
            .point();
        assert_relative_eq!(
            estimated,
            crossing,
            epsilon = EPSILON_APPROX,
            max_relative = EPSILON_APPROX
        );
        checked += 1;
    }
}

#[test]
fn bindings_resample_their_providers_every_evaluation() {
    let track_a = Cell::new(Point3::new(1.0, 0.0, 1.0));
    let track_b = Cell::new(Point3::new(1.0, 0.0, 1.0));
    let camera_a = Point3::new(0.0, 0.0, 0.0);
    let camera_b = Point3::new(2.0, 0.0, 0.0);

    let sample_a = Sampled(|| track_a.get());
    let sample_b = Sampled(|| track_b.get());
    let binding = CrossingBinding::new(
        (
            &camera_a as &dyn PositionProvider,
            &sample_a as &dyn PositionProvider,
        ),
        (
            &camera_b as &dyn PositionProvider,
            &sample_b as &dyn PositionProvider,
        ),
        MidpointTriangulator,
    )
    .named("Target");
    assert_eq!(binding.name(), "Target");

    // Both rays pass through the tracked point, so the crossing is there.
    let first = binding.evaluate().unwrap().point();
    assert_relative_eq!(first, Point3::new(1.0, 0.0, 1.0), epsilon = 1e-9);

    // The tracks move; the next evaluation must follow them.
    track_a.set(Point3::new(1.0, 0.5, 2.0));
    track_b.set(Point3::new(1.0, 0.5, 2.0));
    let second = binding.evaluate().unwrap().point();
    assert_relative_eq!(second, Point3::new(1.0, 0.5, 2.0), epsilon = 1e-9);
}

#[test]
fn bindings_report_degenerate_samples_as_none() {
    let camera = Point3::new(0.0, 0.0, 0.0);
    let origin_b = Point3::new(0.0, 1.0, 0.0);
    let through_b = Point3::new(1.0, 1.0, 0.0);
    // Both providers of line A collapse onto the camera.
    let binding = CrossingBinding::new(
        (
            &camera as &dyn PositionProvider,
            &camera as &dyn PositionProvider,
        ),
        (
            &origin_b as &dyn PositionProvider,
            &through_b as &dyn PositionProvider,
        ),
        MidpointTriangulator,
    );

    let (a, _) = binding.sight_lines();
    assert!(a.is_degenerate());
    assert!(binding.evaluate().is_none());
}
