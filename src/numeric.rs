/*!
 * Numerical type definitions
 *
 * [Real] is implemented by `f64`, [Trace](crate::differentiation::Trace) and
 * [Record](crate::differentiation::Record), so a function written once against it can be
 * evaluated plainly, in forward mode, or in reverse mode.
 *
 * ```
 * use scalar_ad::numeric::Real;
 * use scalar_ad::differentiation::{Trace, WengertList};
 *
 * // f(x) = x sin(x) + e^(x/2)
 * fn f<T: Real>(x: T) -> T {
 *     x * x.sin() + (x / 2.0).exp()
 * }
 *
 * let y = f(0.8);
 * let dy_dx = f(Trace::variable(0.8)).tangent();
 *
 * let list = WengertList::new();
 * let x = list.variable(0.8);
 * let result = f(x);
 * assert_eq!(result.value(), y);
 * assert!((result.derivatives()[&x] - dy_dx).abs() < 1e-12);
 * ```
 *
 * Note that to use a method defined in a trait you have to import the trait as well as have
 * a type that implements it! The differentiable types also have every method inherently,
 * so outside generic code the import is only needed for the `f64` functions that the
 * standard library does not provide, such as `cot` or `asech`.
 */

use crate::differentiation::functions::{
    ArcCosecant, ArcCotangent, ArcSecant, Cosecant, Cotangent, FunctionDerivative,
    HyperbolicCosecant, HyperbolicCotangent, HyperbolicSecant, InverseHyperbolicCosecant,
    InverseHyperbolicCotangent, InverseHyperbolicSecant, Logarithm, Secant,
    UnaryFunctionDerivative,
};
use crate::differentiation::{Record, Trace};

use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/**
 * A general purpose real number trait that defines all the behaviour a differentiable
 * scalar supports: arithmetic with itself and with `f64`, lifting an `f64` as a constant,
 * and the elementary functions.
 */
pub trait Real
where
    Self: Add<Output = Self>
        + Sub<Output = Self>
        + Mul<Output = Self>
        + Div<Output = Self>
        + Neg<Output = Self>
        + Add<f64, Output = Self>
        + Sub<f64, Output = Self>
        + Mul<f64, Output = Self>
        + Div<f64, Output = Self>
        + From<f64>
        + Sum
        + PartialOrd
        + Copy
        + Debug
        + Display,
{
    fn exp(self) -> Self;
    fn ln(self) -> Self;
    fn sqrt(self) -> Self;
    fn recip(self) -> Self;
    fn pow(self, exponent: Self) -> Self;
    fn powf(self, exponent: f64) -> Self;
    fn log(self, base: Self) -> Self;

    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn cot(self) -> Self;
    fn sec(self) -> Self;
    fn csc(self) -> Self;

    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn coth(self) -> Self;
    fn sech(self) -> Self;
    fn csch(self) -> Self;

    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn acot(self) -> Self;
    fn asec(self) -> Self;
    fn acsc(self) -> Self;

    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
    fn acoth(self) -> Self;
    fn asech(self) -> Self;
    fn acsch(self) -> Self;
}

macro_rules! real_impl_f64 {
    (standard { $($std:ident),* } table { $($method:ident using $function:ty),* }) => {
        impl Real for f64 {
            $(
                #[inline]
                fn $std(self) -> f64 {
                    f64::$std(self)
                }
            )*
            $(
                #[inline]
                fn $method(self) -> f64 {
                    <$function>::function(self)
                }
            )*

            #[inline]
            fn pow(self, exponent: f64) -> f64 {
                f64::powf(self, exponent)
            }

            #[inline]
            fn powf(self, exponent: f64) -> f64 {
                f64::powf(self, exponent)
            }

            #[inline]
            fn log(self, base: f64) -> f64 {
                Logarithm::function(self, base)
            }
        }
    };
}

real_impl_f64! {
    standard {
        exp, ln, sqrt, recip,
        sin, cos, tan, sinh, cosh, tanh,
        asin, acos, atan, asinh, acosh, atanh
    }
    table {
        cot using Cotangent,
        sec using Secant,
        csc using Cosecant,
        coth using HyperbolicCotangent,
        sech using HyperbolicSecant,
        csch using HyperbolicCosecant,
        acot using ArcCotangent,
        asec using ArcSecant,
        acsc using ArcCosecant,
        acoth using InverseHyperbolicCotangent,
        asech using InverseHyperbolicSecant,
        acsch using InverseHyperbolicCosecant
    }
}

macro_rules! real_impl_differentiable {
    (impl$(<$lifetime:lifetime>)? Real for $T:ty) => {
        /**
         * Every method delegates to the inherent method of the same name.
         */
        impl$(<$lifetime>)? Real for $T {
            real_impl_differentiable!(@delegate $T;
                exp, ln, sqrt, recip,
                sin, cos, tan, cot, sec, csc,
                sinh, cosh, tanh, coth, sech, csch,
                asin, acos, atan, acot, asec, acsc,
                asinh, acosh, atanh, acoth, asech, acsch
            );

            #[inline]
            fn pow(self, exponent: Self) -> Self {
                <$T>::pow(self, exponent)
            }

            #[inline]
            fn powf(self, exponent: f64) -> Self {
                <$T>::powf(self, exponent)
            }

            #[inline]
            fn log(self, base: Self) -> Self {
                <$T>::log(self, base)
            }
        }
    };
    (@delegate $T:ty; $($method:ident),*) => {
        $(
            #[inline]
            fn $method(self) -> Self {
                <$T>::$method(self)
            }
        )*
    };
}

real_impl_differentiable!(impl Real for Trace);
real_impl_differentiable!(impl<'a> Real for Record<'a>);
