/*!
 * Operator implementations for Traces
 *
 * These implementations are written here but Rust docs will display them on the
 * [Trace] struct page.
 *
 * Traces implement all the standard library traits for addition, subtraction,
 * multiplication and division, so you can use the normal `+ - * /` operators as you can
 * with `f64`. As a convenience, these operations can also be used with a Trace on one
 * side and an `f64` on the other, so you can do
 *
 * ```
 * use scalar_ad::differentiation::Trace;
 * let x = Trace::variable(2.0);
 * let y: f64 = 2.0;
 * let z: Trace = x * y;
 * assert_eq!(z.value(), 4.0);
 * ```
 *
 * or more succinctly
 *
 * ```
 * use scalar_ad::differentiation::Trace;
 * assert_eq!((Trace::variable(2.0) * 2.0).value(), 4.0);
 * ```
 *
 * Every elementary function is available as a method, each taking its derivative from
 * the [functions](super::functions) table.
 */

use crate::differentiation::Trace;
use crate::differentiation::functions::{
    Addition, ArcCosecant, ArcCosine, ArcCotangent, ArcSecant, ArcSine, ArcTangent, Cosecant,
    Cosine, Cotangent, Division, Exponential, FunctionDerivative, HyperbolicCosecant,
    HyperbolicCosine, HyperbolicCotangent, HyperbolicSecant, HyperbolicSine, HyperbolicTangent,
    InverseHyperbolicCosecant, InverseHyperbolicCosine, InverseHyperbolicCotangent,
    InverseHyperbolicSecant, InverseHyperbolicSine, InverseHyperbolicTangent, Logarithm,
    Multiplication, NaturalLogarithm, Power, Reciprocal, Secant, Sine, SquareRoot, Subtraction,
    Tangent,
};
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/**
 * A trace is displayed by showing its value component.
 */
impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/**
 * Any trace implements PartialEq
 *
 * Note that as a Trace is intended to be substitutable with `f64`
 * only the value parts of the trace are compared.
 * Hence the following is true
 * ```
 * use scalar_ad::differentiation::Trace;
 * assert_eq!(Trace::new(0.0, 1.0), Trace::new(0.0, 2.0))
 * ```
 */
impl PartialEq for Trace {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/**
 * Any trace implements PartialOrd
 *
 * Note that as a Trace is intended to be substitutable with `f64`
 * only the value parts of the trace are compared.
 * Hence the following is true
 * ```
 * use scalar_ad::differentiation::Trace;
 * assert!(Trace::new(1.0, 1.0) > Trace::new(0.0, 2.0))
 * ```
 */
impl PartialOrd for Trace {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

/**
 * Lifts an `f64` to a constant Trace.
 */
impl From<f64> for Trace {
    #[inline]
    fn from(value: f64) -> Trace {
        Trace::constant(value)
    }
}

/**
 * Summing traces is the same as adding a bunch of Trace types together.
 */
impl Sum for Trace {
    #[inline]
    fn sum<I>(iter: I) -> Trace
    where
        I: Iterator<Item = Trace>,
    {
        iter.fold(Trace::constant(0.0), |total, next| Trace {
            value: total.value + next.value,
            tangent: total.tangent + next.tangent,
        })
    }
}

macro_rules! trace_operator_impl {
    (impl $op:tt for Trace { fn $method:ident } using $function:ty) => {
        /**
         * Operation for two traces with both referenced.
         */
        impl<'l, 'r> $op<&'r Trace> for &'l Trace {
            type Output = Trace;
            #[inline]
            fn $method(self, rhs: &Trace) -> Self::Output {
                self.binary::<$function>(*rhs)
            }
        }

        /**
         * Operation for two traces.
         */
        impl $op for Trace {
            type Output = Trace;
            #[inline]
            fn $method(self, rhs: Trace) -> Self::Output {
                self.binary::<$function>(rhs)
            }
        }

        /**
         * Operation for two traces with the right referenced.
         */
        impl $op<&Trace> for Trace {
            type Output = Trace;
            #[inline]
            fn $method(self, rhs: &Trace) -> Self::Output {
                self.binary::<$function>(*rhs)
            }
        }

        /**
         * Operation for two traces with the left referenced.
         */
        impl $op<Trace> for &Trace {
            type Output = Trace;
            #[inline]
            fn $method(self, rhs: Trace) -> Self::Output {
                self.binary::<$function>(rhs)
            }
        }

        /**
         * Operation for a trace and a constant.
         */
        impl $op<f64> for Trace {
            type Output = Trace;
            #[inline]
            fn $method(self, rhs: f64) -> Self::Output {
                self.binary::<$function>(Trace::constant(rhs))
            }
        }

        /**
         * Operation for a trace and a constant with the right referenced.
         */
        impl $op<&f64> for Trace {
            type Output = Trace;
            #[inline]
            fn $method(self, rhs: &f64) -> Self::Output {
                self.binary::<$function>(Trace::constant(*rhs))
            }
        }

        /**
         * Operation for a trace and a constant with the left referenced.
         */
        impl $op<f64> for &Trace {
            type Output = Trace;
            #[inline]
            fn $method(self, rhs: f64) -> Self::Output {
                self.binary::<$function>(Trace::constant(rhs))
            }
        }

        /**
         * Operation for a constant and a trace.
         */
        impl $op<Trace> for f64 {
            type Output = Trace;
            #[inline]
            fn $method(self, rhs: Trace) -> Self::Output {
                Trace::constant(self).binary::<$function>(rhs)
            }
        }

        /**
         * Operation for a constant and a trace with the right referenced.
         */
        impl $op<&Trace> for f64 {
            type Output = Trace;
            #[inline]
            fn $method(self, rhs: &Trace) -> Self::Output {
                Trace::constant(self).binary::<$function>(*rhs)
            }
        }
    };
}

// u' + v'
trace_operator_impl!(impl Add for Trace { fn add } using Addition);
// u' - v'
trace_operator_impl!(impl Sub for Trace { fn sub } using Subtraction);
// u'v + uv'
trace_operator_impl!(impl Mul for Trace { fn mul } using Multiplication);
// (u'v - uv') / v^2
trace_operator_impl!(impl Div for Trace { fn div } using Division);

/**
 * Negation for a referenced Trace.
 */
impl Neg for &Trace {
    type Output = Trace;
    #[inline]
    fn neg(self) -> Self::Output {
        Trace {
            value: -self.value,
            tangent: -self.tangent,
        }
    }
}

/**
 * Negation for a Trace by value.
 */
impl Neg for Trace {
    type Output = Trace;
    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

macro_rules! trace_functions {
    ($($(#[$meta:meta])* fn $method:ident using $function:ty;)*) => {
        impl Trace {
            $(
                $(#[$meta])*
                #[inline]
                pub fn $method(self) -> Trace {
                    self.unary::<$function>()
                }
            )*
        }
    };
}

trace_functions! {
    /// Exponential, ie e<sup>x</sup> of a Trace.
    fn exp using Exponential;
    /// Natural logarithm, ie ln(x) of a Trace.
    fn ln using NaturalLogarithm;
    /// Square root of a Trace.
    fn sqrt using SquareRoot;
    /// Reciprocal, ie 1/x of a Trace.
    fn recip using Reciprocal;

    /// Sine of a Trace.
    fn sin using Sine;
    /// Cosine of a Trace.
    fn cos using Cosine;
    fn tan using Tangent;
    fn cot using Cotangent;
    fn sec using Secant;
    fn csc using Cosecant;

    fn sinh using HyperbolicSine;
    fn cosh using HyperbolicCosine;
    fn tanh using HyperbolicTangent;
    fn coth using HyperbolicCotangent;
    fn sech using HyperbolicSecant;
    fn csch using HyperbolicCosecant;

    fn asin using ArcSine;
    fn acos using ArcCosine;
    fn atan using ArcTangent;
    fn acot using ArcCotangent;
    fn asec using ArcSecant;
    fn acsc using ArcCosecant;

    fn asinh using InverseHyperbolicSine;
    fn acosh using InverseHyperbolicCosine;
    fn atanh using InverseHyperbolicTangent;
    fn acoth using InverseHyperbolicCotangent;
    fn asech using InverseHyperbolicSecant;
    fn acsch using InverseHyperbolicCosecant;
}

impl Trace {
    /**
     * Power of one Trace to another, ie self<sup>exponent</sup>.
     *
     * Both the base and the exponent can vary:
     * `(u' * v * u^(v-1)) + (v' * u^v * ln(u))`
     *
     * ```
     * use scalar_ad::differentiation::Trace;
     * // d(x^x)/dx = x^x (ln(x) + 1)
     * let x = Trace::variable(1.5);
     * let also_dx = 1.5_f64.powf(1.5) * (1.5_f64.ln() + 1.0);
     * assert!((x.pow(x).tangent() - also_dx).abs() < 1e-12);
     * ```
     */
    #[inline]
    pub fn pow(self, exponent: Trace) -> Trace {
        self.binary::<Power>(exponent)
    }

    /**
     * Power of a Trace to a constant, ie self<sup>k</sup>, `u' * k * u^(k-1)`
     *
     * Only the base varies, so like any one argument function the product is always taken.
     */
    #[inline]
    pub fn powf(self, k: f64) -> Trace {
        Trace {
            value: self.value.powf(k),
            tangent: Power::d_function_dx(self.value, k) * self.tangent,
        }
    }

    /**
     * Logarithm of a Trace with respect to some base, which may also vary.
     */
    #[inline]
    pub fn log(self, base: Trace) -> Trace {
        self.binary::<Logarithm>(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_on_either_side() {
        let x = Trace::variable(1.5);
        assert_eq!((x * 4.0).tangent(), 4.0);
        assert_eq!((4.0 * x).tangent(), 4.0);
        assert_eq!((x - 4.0).tangent(), 1.0);
        assert_eq!((4.0 - x).tangent(), -1.0);
        assert_eq!((1.0 / x).tangent(), -1.0 / (1.5 * 1.5));
        assert_eq!((x / 2.0).tangent(), 0.5);
    }

    #[test]
    fn negation() {
        let x = -Trace::new(2.0, 3.0);
        assert_eq!(x.value(), -2.0);
        assert_eq!(x.tangent(), -3.0);
    }

    #[test]
    fn constant_exponent_of_a_negative_base() {
        let x = Trace::variable(-2.0);
        let squared = x.pow(Trace::constant(2.0));
        assert_eq!(squared.value(), 4.0);
        assert_eq!(squared.tangent(), -4.0);
        assert_eq!(x.powf(2.0).tangent(), -4.0);
    }

    #[test]
    fn sum_of_traces() {
        let traces = [Trace::new(1.0, 0.5), Trace::new(2.0, 0.25), Trace::new(3.0, 1.0)];
        let total: Trace = traces.iter().copied().sum();
        assert_eq!(total.value(), 6.0);
        assert_eq!(total.tangent(), 1.75);
    }

    #[test]
    fn display_shows_the_value() {
        assert_eq!(Trace::new(2.5, 1.0).to_string(), "2.5");
    }
}
