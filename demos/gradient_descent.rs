use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use scalar_ad::differentiation::{Record, WengertList};

/**
 * Fits a line y = w x + b to noisy points by gradient descent on the mean squared
 * error, taking the gradient with respect to both parameters from one reverse pass.
 *
 * The same WengertList is cleared and reused every epoch.
 */

const EPOCHS: usize = 200;
const LEARNING_RATE: f64 = 0.05;

fn mean_squared_error<'a>(w: Record<'a>, b: Record<'a>, points: &[(f64, f64)]) -> Record<'a> {
    let total: Record = points
        .iter()
        .map(|&(x, y)| {
            let error = w * x + b - y;
            error * error
        })
        .sum();
    total / points.len() as f64
}

fn main() {
    let mut rng = ChaCha8Rng::seed_from_u64(10);
    let (true_w, true_b) = (1.7, -0.4);
    let points: Vec<(f64, f64)> = (0..50)
        .map(|_| {
            let x = rng.random_range(-2.0..2.0);
            let noise = rng.random_range(-0.1..0.1);
            (x, true_w * x + true_b + noise)
        })
        .collect();

    let list = WengertList::with_capacity(points.len() * 5 + 4);
    let (mut w, mut b) = (0.0, 0.0);
    for epoch in 0..EPOCHS {
        let w_record = list.variable(w);
        let b_record = list.variable(b);
        let loss = mean_squared_error(w_record, b_record, &points);
        let derivatives = loss.derivatives();
        w -= LEARNING_RATE * derivatives[&w_record];
        b -= LEARNING_RATE * derivatives[&b_record];
        if epoch % 20 == 0 {
            println!("Epoch {}: loss {:.5} w {:.4} b {:.4}", epoch, loss.value(), w, b);
        }
        list.clear();
    }
    println!("Fitted w = {:.4} b = {:.4}, generated with w = {} b = {}", w, b, true_w, true_b);
}
