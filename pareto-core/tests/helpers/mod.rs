
use crate::Point;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Creates `n_fronts` with each having `n` points in it.
pub fn create_points_with_n_fronts(n: usize, n_fronts: usize) -> (Vec<Point>, Vec<Vec<usize>>) {
    let mut points = Vec::with_capacity(n * n_fronts);
    let mut expected_fronts = Vec::with_capacity(n_fronts);

    for front in 0..n_fronts {
        let mut current_front = Vec::with_capacity(n);
        for i in 0..n {
            points.push(vec![(front + i) as f64, (front + n - i) as f64]);
            current_front.push(front * n + i);
        }
        expected_fronts.push(current_front);
    }

    (points, expected_fronts)
}

/// Creates random points on an integer grid, so duplicates and ties are likely.
pub fn create_random_points(size: usize, dimension: usize, seed: u64) -> Vec<Point> {
    use rand::Rng;

    let mut rng = SmallRng::seed_from_u64(seed);

    (0..size).map(|_| (0..dimension).map(|_| rng.gen_range(0..10) as f64).collect()).collect()
}

/// Shuffles points, returns shuffled points and, for each new position, the original index.
pub fn shuffle_points(points: &[Point], seed: u64) -> (Vec<Point>, Vec<usize>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut order = (0..points.len()).collect::<Vec<_>>();
    order.shuffle(&mut rng);

    (order.iter().map(|&idx| points[idx].clone()).collect(), order)
}
