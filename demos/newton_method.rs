use scalar_ad::differentiation::Trace;
use scalar_ad::numeric::Real;

/**
 * Finds roots of functions with Newton's method, taking each derivative from a forward
 * mode Trace instead of a derivative worked out by hand.
 */

const TOLERANCE: f64 = 1e-12;
const MAX_STEPS: usize = 50;

fn newton(function: impl Fn(Trace) -> Trace, mut x: f64) -> Option<(f64, usize)> {
    for step in 0..MAX_STEPS {
        let y = function(Trace::variable(x));
        if y.value().abs() < TOLERANCE {
            return Some((x, step));
        }
        if y.tangent() == 0.0 || !y.tangent().is_finite() {
            return None;
        }
        x -= y.value() / y.tangent();
    }
    None
}

// x^3 - 2x - 5, the example Newton himself used
fn cubic<T: Real>(x: T) -> T {
    x * x * x - x * 2.0 - T::from(5.0)
}

// cos(x) = x
fn fixed_point_of_cosine<T: Real>(x: T) -> T {
    x.cos() - x
}

// x^x = 10
fn self_power<T: Real>(x: T) -> T {
    x.pow(x) - T::from(10.0)
}

fn main() {
    let problems: [(&str, fn(Trace) -> Trace, fn(f64) -> f64, f64); 3] = [
        ("x^3 - 2x - 5", cubic, cubic, 2.0),
        ("cos(x) - x", fixed_point_of_cosine, fixed_point_of_cosine, 1.0),
        ("x^x - 10", self_power, self_power, 2.0),
    ];
    for (name, function, plain, start) in problems {
        match newton(function, start) {
            Some((root, steps)) => {
                println!("{} = 0 at x = {} after {} steps", name, root, steps);
                // the same generic function evaluated with plain f64
                println!("  residual {:e}", plain(root));
            }
            None => println!("{} did not converge from {}", name, start),
        }
    }
}
