extern crate rand;
extern crate rand_chacha;
extern crate scalar_ad;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use scalar_ad::differentiation::{Record, Trace, WengertList};
use scalar_ad::numeric::Real;

/**
 * Checks that forward and reverse mode agree on the value and first derivative of a
 * generic function, and that the value also matches plain f64 evaluation.
 */
macro_rules! assert_engines_agree {
    ($function:ident over $range:expr, $rng:expr) => {{
        let list = WengertList::new();
        for _ in 0..50 {
            let x: f64 = $rng.random_range($range);
            let plain = $function(x);
            let forward = $function(Trace::variable(x));
            let input = Record::variable(x, &list);
            let reverse = $function(input);
            let reverse_dx = reverse.derivatives()[&input];
            assert_eq!(forward.value(), plain, "{} at {}", stringify!($function), x);
            assert_eq!(reverse.value(), plain, "{} at {}", stringify!($function), x);
            assert!(
                close(forward.tangent(), reverse_dx),
                "{}'({}): forward {} reverse {}",
                stringify!($function),
                x,
                forward.tangent(),
                reverse_dx
            );
            list.clear();
        }
    }};
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn polynomial<T: Real>(x: T) -> T {
    x * x * x * 0.5 - x * x + x * 3.0 - T::from(2.0)
}

fn rational<T: Real>(x: T) -> T {
    (x * x + 1.0) / (x - 3.0)
}

fn trigonometric<T: Real>(x: T) -> T {
    x.sin() * x.cos() + x.tan() - x.sec() * 0.25
}

fn reciprocal_trigonometric<T: Real>(x: T) -> T {
    x.cot() + x.csc()
}

fn hyperbolic<T: Real>(x: T) -> T {
    x.sinh() * x.tanh() + x.cosh() - x.sech()
}

fn reciprocal_hyperbolic<T: Real>(x: T) -> T {
    x.coth() + x.csch()
}

fn inverse_trigonometric<T: Real>(x: T) -> T {
    x.asin() + x.acos() * x.atan() - x.acot()
}

fn inverse_reciprocal_trigonometric<T: Real>(x: T) -> T {
    x.asec() + x.acsc() * 2.0
}

fn inverse_hyperbolic<T: Real>(x: T) -> T {
    x.asinh() - x.atanh() * 3.0
}

fn inverse_hyperbolic_above_one<T: Real>(x: T) -> T {
    x.acosh() + x.acoth() + x.acsch()
}

fn inverse_hyperbolic_secant<T: Real>(x: T) -> T {
    x.asech() * x
}

fn exponential<T: Real>(x: T) -> T {
    (x * 0.5).exp() * x.ln() + x.sqrt() - x.recip()
}

fn powers<T: Real>(x: T) -> T {
    x.pow(x) + x.powf(2.5) - x.log(T::from(3.0)) + (x + 1.0).log(x + 2.0)
}

fn composed<T: Real>(x: T) -> T {
    let y = (x * x + 1.0).ln();
    let z = -(y.sin() / (x.exp() + 2.0));
    [y, z, x * y * z].iter().copied().sum::<T>()
}

#[test]
fn test_engines_agree_on_elementary_functions() {
    let mut rng = ChaCha8Rng::seed_from_u64(16);
    assert_engines_agree!(polynomial over -5.0..5.0, rng);
    assert_engines_agree!(rational over -2.5..2.5, rng);
    assert_engines_agree!(trigonometric over 0.1..1.4, rng);
    assert_engines_agree!(reciprocal_trigonometric over 0.1..3.0, rng);
    assert_engines_agree!(hyperbolic over -3.0..3.0, rng);
    assert_engines_agree!(reciprocal_hyperbolic over 0.1..3.0, rng);
    assert_engines_agree!(inverse_trigonometric over -0.95..0.95, rng);
    assert_engines_agree!(inverse_reciprocal_trigonometric over 1.05..10.0, rng);
    assert_engines_agree!(inverse_hyperbolic over -0.95..0.95, rng);
    assert_engines_agree!(inverse_hyperbolic_above_one over 1.05..10.0, rng);
    assert_engines_agree!(inverse_hyperbolic_secant over 0.05..0.95, rng);
    assert_engines_agree!(exponential over 0.1..4.0, rng);
    assert_engines_agree!(powers over 0.1..4.0, rng);
    assert_engines_agree!(composed over -3.0..3.0, rng);
}

#[test]
fn test_engines_agree_on_many_inputs() {
    // f(x, y, z) = x y sin(z) + e^(x / y) - z^2
    fn f<T: Real>(x: T, y: T, z: T) -> T {
        x * y * z.sin() + (x / y).exp() - z * z
    }
    let mut rng = ChaCha8Rng::seed_from_u64(32);
    let list = WengertList::new();
    for _ in 0..20 {
        let inputs: [f64; 3] = [
            rng.random_range(-2.0..2.0),
            rng.random_range(0.5..2.0),
            rng.random_range(-2.0..2.0),
        ];
        let [x, y, z] = inputs.map(|input| list.variable(input));
        let output = f(x, y, z);
        let derivatives = output.derivatives();
        // one forward pass per input for the same three derivatives
        let [a, b, c] = inputs;
        let dx = f(Trace::variable(a), Trace::constant(b), Trace::constant(c)).tangent();
        let dy = f(Trace::constant(a), Trace::variable(b), Trace::constant(c)).tangent();
        let dz = f(Trace::constant(a), Trace::constant(b), Trace::variable(c)).tangent();
        assert!(close(derivatives[&x], dx));
        assert!(close(derivatives[&y], dy));
        assert!(close(derivatives[&z], dz));
        list.clear();
    }
}
