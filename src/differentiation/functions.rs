/*!
 * Closed form derivatives of the elementary functions.
 *
 * Both [Trace](super::Trace) and [Record](super::Record) read their derivatives from this
 * one table, so the forward and reverse engines always apply the same calculus. Each function
 * is a unit struct implementing [UnaryFunctionDerivative] or [FunctionDerivative], which
 * can also be used directly on plain `f64`s.
 *
 * ```
 * use scalar_ad::differentiation::functions::{Sine, UnaryFunctionDerivative};
 * assert_eq!(Sine::function(1.5), 1.5_f64.sin());
 * assert_eq!(Sine::d_function_dx(1.5), 1.5_f64.cos());
 * ```
 *
 * Nothing here checks domains. Evaluating outside a function's domain produces
 * `NaN` or `±Inf` exactly as the `f64` methods do, and that flows on through whatever
 * is computed with the result.
 */

/**
 * A function of one argument and its first derivative.
 */
pub trait UnaryFunctionDerivative {
    fn function(x: f64) -> f64;
    fn d_function_dx(x: f64) -> f64;
}

/**
 * A function of two arguments and its first partial derivatives.
 */
pub trait FunctionDerivative {
    fn function(x: f64, y: f64) -> f64;
    fn d_function_dx(x: f64, y: f64) -> f64;
    fn d_function_dy(x: f64, y: f64) -> f64;
}

macro_rules! unary_function {
    ($(#[$meta:meta])* $name:ident, |$x:ident| $function:expr, |$dx:ident| $derivative:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;

        impl UnaryFunctionDerivative for $name {
            #[inline]
            fn function($x: f64) -> f64 {
                $function
            }

            #[inline]
            fn d_function_dx($dx: f64) -> f64 {
                $derivative
            }
        }
    };
}

unary_function!(
    /// `e^x`, `d(e^x) / dx = e^x`
    Exponential, |x| x.exp(), |x| x.exp()
);
unary_function!(
    /// `ln(x)`, `d(ln(x)) / dx = 1 / x`
    NaturalLogarithm, |x| x.ln(), |x| 1.0 / x
);
unary_function!(
    /// `sqrt(x)`, `d(sqrt(x)) / dx = 1 / (2 sqrt(x))`
    SquareRoot, |x| x.sqrt(), |x| 1.0 / (2.0 * x.sqrt())
);
unary_function!(
    /// `1 / x`, `d(1 / x) / dx = -1 / x^2`
    Reciprocal, |x| 1.0 / x, |x| -1.0 / (x * x)
);

unary_function!(
    /// `d(sin(x)) / dx = cos(x)`
    Sine, |x| x.sin(), |x| x.cos()
);
unary_function!(
    /// `d(cos(x)) / dx = -sin(x)`
    Cosine, |x| x.cos(), |x| -x.sin()
);
unary_function!(
    /// `d(tan(x)) / dx = 1 / cos^2(x)`
    Tangent, |x| x.tan(), |x| 1.0 / x.cos().powi(2)
);
unary_function!(
    /// `d(cot(x)) / dx = -1 / sin^2(x)`
    Cotangent, |x| 1.0 / x.tan(), |x| -1.0 / x.sin().powi(2)
);
unary_function!(
    /// `d(sec(x)) / dx = sec(x) tan(x)`
    Secant, |x| 1.0 / x.cos(), |x| x.tan() / x.cos()
);
unary_function!(
    /// `d(csc(x)) / dx = -csc(x) cot(x)`
    Cosecant, |x| 1.0 / x.sin(), |x| -1.0 / (x.sin() * x.tan())
);

unary_function!(
    /// `d(sinh(x)) / dx = cosh(x)`
    HyperbolicSine, |x| x.sinh(), |x| x.cosh()
);
unary_function!(
    /// `d(cosh(x)) / dx = sinh(x)`
    HyperbolicCosine, |x| x.cosh(), |x| x.sinh()
);
unary_function!(
    /// `d(tanh(x)) / dx = 1 / cosh^2(x)`
    HyperbolicTangent, |x| x.tanh(), |x| 1.0 / x.cosh().powi(2)
);
unary_function!(
    /// `d(coth(x)) / dx = -1 / sinh^2(x)`
    HyperbolicCotangent, |x| 1.0 / x.tanh(), |x| -1.0 / x.sinh().powi(2)
);
unary_function!(
    /// `d(sech(x)) / dx = -sech(x) tanh(x)`
    HyperbolicSecant, |x| 1.0 / x.cosh(), |x| -x.tanh() / x.cosh()
);
unary_function!(
    /// `d(csch(x)) / dx = -csch(x) coth(x)`
    HyperbolicCosecant, |x| 1.0 / x.sinh(), |x| -1.0 / (x.sinh() * x.tanh())
);

unary_function!(
    /// `d(asin(x)) / dx = 1 / sqrt(1 - x^2)`, defined on `[-1, 1]`
    ArcSine, |x| x.asin(), |x| 1.0 / (1.0 - x * x).sqrt()
);
unary_function!(
    /// `d(acos(x)) / dx = -1 / sqrt(1 - x^2)`, defined on `[-1, 1]`
    ArcCosine, |x| x.acos(), |x| -1.0 / (1.0 - x * x).sqrt()
);
unary_function!(
    /// `d(atan(x)) / dx = 1 / (1 + x^2)`
    ArcTangent, |x| x.atan(), |x| 1.0 / (1.0 + x * x)
);
unary_function!(
    /// `acot(x) = atan(1 / x)`, `d(acot(x)) / dx = -1 / (1 + x^2)`
    ArcCotangent, |x| (1.0 / x).atan(), |x| -1.0 / (1.0 + x * x)
);
unary_function!(
    /// `asec(x) = acos(1 / x)`, `d(asec(x)) / dx = 1 / (x^2 sqrt(1 - 1/x^2))`,
    /// defined for `|x| >= 1`
    ArcSecant,
    |x| (1.0 / x).acos(),
    |x| 1.0 / (x * x * (1.0 - 1.0 / (x * x)).sqrt())
);
unary_function!(
    /// `acsc(x) = asin(1 / x)`, `d(acsc(x)) / dx = -1 / (x^2 sqrt(1 - 1/x^2))`,
    /// defined for `|x| >= 1`
    ArcCosecant,
    |x| (1.0 / x).asin(),
    |x| -1.0 / (x * x * (1.0 - 1.0 / (x * x)).sqrt())
);

unary_function!(
    /// `d(asinh(x)) / dx = 1 / sqrt(x^2 + 1)`
    InverseHyperbolicSine, |x| x.asinh(), |x| 1.0 / (x * x + 1.0).sqrt()
);
unary_function!(
    /// `d(acosh(x)) / dx = 1 / sqrt(x^2 - 1)`, defined for `x >= 1`
    InverseHyperbolicCosine, |x| x.acosh(), |x| 1.0 / (x * x - 1.0).sqrt()
);
unary_function!(
    /// `d(atanh(x)) / dx = 1 / (1 - x^2)`, defined on `(-1, 1)`
    InverseHyperbolicTangent, |x| x.atanh(), |x| 1.0 / (1.0 - x * x)
);
unary_function!(
    /// `acoth(x) = atanh(1 / x)`, `d(acoth(x)) / dx = 1 / (1 - x^2)`, defined for `|x| > 1`
    InverseHyperbolicCotangent, |x| (1.0 / x).atanh(), |x| 1.0 / (1.0 - x * x)
);
unary_function!(
    /// `asech(x) = acosh(1 / x)`, `d(asech(x)) / dx = -1 / (x sqrt(1 - x^2))`,
    /// defined on `(0, 1]`
    InverseHyperbolicSecant,
    |x| (1.0 / x).acosh(),
    |x| -1.0 / (x * (1.0 - x * x).sqrt())
);
unary_function!(
    /// `acsch(x) = asinh(1 / x)`, `d(acsch(x)) / dx = -1 / (|x| sqrt(1 + x^2))`
    InverseHyperbolicCosecant,
    |x| (1.0 / x).asinh(),
    |x| -1.0 / (x.abs() * (1.0 + x * x).sqrt())
);

macro_rules! binary_function {
    (
        $(#[$meta:meta])* $name:ident,
        |$x:ident, $y:ident| $function:expr,
        |$dx_x:ident, $dx_y:ident| $d_dx:expr,
        |$dy_x:ident, $dy_y:ident| $d_dy:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;

        impl FunctionDerivative for $name {
            #[inline]
            fn function($x: f64, $y: f64) -> f64 {
                $function
            }

            #[inline]
            fn d_function_dx($dx_x: f64, $dx_y: f64) -> f64 {
                $d_dx
            }

            #[inline]
            fn d_function_dy($dy_x: f64, $dy_y: f64) -> f64 {
                $d_dy
            }
        }
    };
}

binary_function!(
    /// `x + y`, both partials are 1
    Addition,
    |x, y| x + y,
    |_x, _y| 1.0,
    |_x, _y| 1.0
);
binary_function!(
    /// `x - y`, `d/dx = 1`, `d/dy = -1`
    Subtraction,
    |x, y| x - y,
    |_x, _y| 1.0,
    |_x, _y| -1.0
);
binary_function!(
    /// `x * y`, `d/dx = y`, `d/dy = x`
    Multiplication,
    |x, y| x * y,
    |_x, y| y,
    |x, _y| x
);
binary_function!(
    /// `x / y`, `d/dx = 1 / y`, `d/dy = -x / y^2`
    Division,
    |x, y| x / y,
    |_x, y| 1.0 / y,
    |x, y| -x / (y * y)
);
binary_function!(
    /// `x^y`, `d/dx = y x^(y-1)`, `d/dy = x^y ln(x)`
    Power,
    |x, y| x.powf(y),
    |x, y| y * x.powf(y - 1.0),
    |x, y| x.powf(y) * x.ln()
);
binary_function!(
    /// `log_y(x) = ln(x) / ln(y)`, `d/dx = 1 / (x ln(y))`, `d/dy = -ln(x) / (y ln^2(y))`
    Logarithm,
    |x, y| x.ln() / y.ln(),
    |x, y| 1.0 / (x * y.ln()),
    |x, y| -x.ln() / (y * y.ln().powi(2))
);

#[cfg(test)]
mod tests {
    use super::*;

    /// Central finite difference, only used to sanity check the closed forms.
    fn numerical<F: UnaryFunctionDerivative>(x: f64) -> f64 {
        let h = 1e-6;
        (F::function(x + h) - F::function(x - h)) / (2.0 * h)
    }

    fn assert_close(a: f64, b: f64) {
        assert!(
            (a - b).abs() <= 1e-5 * (1.0 + a.abs().max(b.abs())),
            "{} != {}",
            a,
            b
        );
    }

    macro_rules! check {
        ($name:ident at $x:expr) => {
            assert_close($name::d_function_dx($x), numerical::<$name>($x));
        };
    }

    #[test]
    fn trigonometric_derivatives_match_finite_differences() {
        for x in [0.3, 1.1, -0.7, 2.5] {
            check!(Sine at x);
            check!(Cosine at x);
            check!(Tangent at x);
            check!(Cotangent at x);
            check!(Secant at x);
            check!(Cosecant at x);
        }
    }

    #[test]
    fn hyperbolic_derivatives_match_finite_differences() {
        for x in [0.3, 1.1, -0.7, 2.5] {
            check!(HyperbolicSine at x);
            check!(HyperbolicCosine at x);
            check!(HyperbolicTangent at x);
            check!(HyperbolicCotangent at x);
            check!(HyperbolicSecant at x);
            check!(HyperbolicCosecant at x);
        }
    }

    #[test]
    fn inverse_derivatives_match_finite_differences() {
        for x in [0.3, -0.6] {
            check!(ArcSine at x);
            check!(ArcCosine at x);
            check!(InverseHyperbolicTangent at x);
        }
        for x in [1.7, -2.4] {
            check!(ArcSecant at x);
            check!(ArcCosecant at x);
            check!(InverseHyperbolicCotangent at x);
        }
        for x in [0.4, 1.5, -3.0] {
            check!(ArcTangent at x);
            check!(ArcCotangent at x);
            check!(InverseHyperbolicSine at x);
            check!(InverseHyperbolicCosecant at x);
        }
        check!(InverseHyperbolicCosine at 1.8);
        check!(InverseHyperbolicSecant at 0.45);
    }

    #[test]
    fn elementary_derivatives_match_finite_differences() {
        for x in [0.4, 1.5, 3.0] {
            check!(Exponential at x);
            check!(NaturalLogarithm at x);
            check!(SquareRoot at x);
            check!(Reciprocal at x);
        }
    }

    #[test]
    fn power_partials() {
        let (x, y): (f64, f64) = (1.35, 2.5);
        assert_eq!(Power::d_function_dx(x, y), y * x.powf(y - 1.0));
        assert_eq!(Power::d_function_dy(x, y), x.powf(y) * x.ln());
    }

    #[test]
    fn logarithm_partials() {
        let (x, b) = (8.0_f64, 2.0_f64);
        assert_close(Logarithm::function(x, b), 3.0);
        let h = 1e-6;
        let d_dx = (Logarithm::function(x + h, b) - Logarithm::function(x - h, b)) / (2.0 * h);
        let d_db = (Logarithm::function(x, b + h) - Logarithm::function(x, b - h)) / (2.0 * h);
        assert_close(Logarithm::d_function_dx(x, b), d_dx);
        assert_close(Logarithm::d_function_dy(x, b), d_db);
    }

    #[test]
    fn out_of_domain_is_not_a_number() {
        assert!(NaturalLogarithm::function(-1.0).is_nan());
        assert_eq!(NaturalLogarithm::function(0.0), f64::NEG_INFINITY);
        assert!(ArcSine::function(1.5).is_nan());
        assert!(ArcSine::d_function_dx(1.5).is_nan());
        assert!(ArcCosine::function(-2.0).is_nan());
        assert!(InverseHyperbolicCosine::function(0.5).is_nan());
        assert_eq!(Reciprocal::function(0.0), f64::INFINITY);
    }
}
