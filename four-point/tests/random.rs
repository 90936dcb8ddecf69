use four_point::FourPoint;
use plinth_core::{unit_square_correspondences, NormalizedPoint};
use rand::{rngs::SmallRng, Rng, SeedableRng};

const ROUNDS: usize = 1000;
const ROUND_TRIP_THRESHOLD: f64 = 1e-12;

/// Half the side of the square the anchors are jittered around.
const QUAD_HALF_SIZE: f64 = 0.6;
/// How far each anchor may move from its square corner.
const CORNER_JITTER: f64 = 0.15;

#[test]
fn randomized() {
    let mut rng = SmallRng::seed_from_u64(0);
    let successes = (0..ROUNDS).filter(|_| run_round(&mut rng)).count();
    eprintln!("successes: {}", successes);
    assert!(successes > 990);
}

fn run_round(rng: &mut SmallRng) -> bool {
    let anchors = some_test_quad(rng);
    let correspondences = unit_square_correspondences(anchors);
    let homography = match FourPoint::new().solve(&correspondences) {
        Ok(homography) => homography,
        Err(e) => {
            eprintln!("failed to solve: {}", e);
            return false;
        }
    };
    let mut success = true;
    for c in &correspondences {
        let uv = homography.apply(c.0).expect("anchor went to infinity");
        let error = (uv.0 - c.1 .0).amax();
        if error > ROUND_TRIP_THRESHOLD {
            success = false;
            eprintln!("failed round trip: {}", error);
        }
    }
    success
}

/// A convex quadrilateral in anchor order: corners near `(-1,-1)`, `(1,-1)`, `(-1,1)`
/// and `(1,1)` (scaled), each moved by a random offset.
fn some_test_quad(rng: &mut SmallRng) -> [NormalizedPoint; 4] {
    let corners = [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)];
    corners.map(|(x, y)| {
        NormalizedPoint::new(
            x * QUAD_HALF_SIZE + rng.gen_range(-CORNER_JITTER..CORNER_JITTER),
            y * QUAD_HALF_SIZE + rng.gen_range(-CORNER_JITTER..CORNER_JITTER),
        )
    })
}
