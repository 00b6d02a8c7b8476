/*!
 * Operator implementations for Records.
 *
 * These implementations are written here but Rust docs will display them on the
 * [Record] struct page.
 *
 * Records implement all the standard library traits for addition, subtraction,
 * multiplication and division, so you can use the normal `+ - * /` operators as you can
 * with `f64`. As a convenience, these operations can also be used with a Record on one
 * side and an `f64` on the other, so you can do
 *
 * ```
 * use scalar_ad::differentiation::{Record, WengertList};
 * let list = WengertList::new();
 * let x: Record = Record::variable(2.0, &list);
 * let y: f64 = 2.0;
 * let z: Record = x * y;
 * assert_eq!(z.value(), 4.0);
 * ```
 *
 * or more succinctly
 *
 * ```
 * use scalar_ad::differentiation::{Record, WengertList};
 * assert_eq!((Record::variable(2.0, &WengertList::new()) * 2.0).value(), 4.0);
 * ```
 *
 * Each operation appends one entry to the WengertList holding the local partial derivative
 * with respect to each operand. Division is the exception: `a / b` is recorded as
 * `a * (1 / b)`, two entries.
 *
 * Combining Records from two different WengertLists is a programming error and panics.
 */

use crate::differentiation::Record;
use crate::differentiation::functions::{
    Addition, ArcCosecant, ArcCosine, ArcCotangent, ArcSecant, ArcSine, ArcTangent, Cosecant,
    Cosine, Cotangent, Exponential, HyperbolicCosecant, HyperbolicCosine, HyperbolicCotangent,
    HyperbolicSecant, HyperbolicSine, HyperbolicTangent, InverseHyperbolicCosecant,
    InverseHyperbolicCosine, InverseHyperbolicCotangent, InverseHyperbolicSecant,
    InverseHyperbolicSine, InverseHyperbolicTangent, Logarithm, Multiplication,
    NaturalLogarithm, Power, Reciprocal, Secant, Sine, SquareRoot, Subtraction, Tangent,
};
use std::cmp::Ordering;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/**
 * A record is displayed by showing its number component.
 */
impl<'a> std::fmt::Display for Record<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.number)
    }
}

/**
 * Any record implements PartialEq
 *
 * Note that as a Record is intended to be substitutable with `f64`
 * only the number parts of the record are compared. This says nothing about whether
 * two records are the same node, for which compare their [index](Record::index)es.
 */
impl<'a> PartialEq for Record<'a> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

/**
 * Any record implements PartialOrd
 *
 * Note that as a Record is intended to be substitutable with `f64`
 * only the number parts of the record are compared.
 */
impl<'a> PartialOrd for Record<'a> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.number.partial_cmp(&other.number)
    }
}

/**
 * Lifts an `f64` to a constant Record.
 */
impl<'a> From<f64> for Record<'a> {
    #[inline]
    fn from(value: f64) -> Record<'a> {
        Record::constant(value)
    }
}

/**
 * Summing records is the same as adding a bunch of Record types together.
 */
impl<'a> Sum for Record<'a> {
    #[track_caller]
    fn sum<I>(iter: I) -> Record<'a>
    where
        I: Iterator<Item = Record<'a>>,
    {
        iter.fold(Record::constant(0.0), |total, next| total + next)
    }
}

macro_rules! record_operator_impl {
    (impl $op:tt for Record { fn $method:ident } using $combine:path) => {
        /**
         * Operation for two records with both referenced and
         * both using the same WengertList.
         */
        impl<'a, 'l, 'r> $op<&'r Record<'a>> for &'l Record<'a> {
            type Output = Record<'a>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: &Record<'a>) -> Self::Output {
                $combine(*self, *rhs)
            }
        }

        /**
         * Operation for two records using the same WengertList.
         */
        impl<'a> $op for Record<'a> {
            type Output = Record<'a>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: Record<'a>) -> Self::Output {
                $combine(self, rhs)
            }
        }

        /**
         * Operation for two records with the right referenced.
         */
        impl<'a> $op<&Record<'a>> for Record<'a> {
            type Output = Record<'a>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: &Record<'a>) -> Self::Output {
                $combine(self, *rhs)
            }
        }

        /**
         * Operation for two records with the left referenced.
         */
        impl<'a> $op<Record<'a>> for &Record<'a> {
            type Output = Record<'a>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: Record<'a>) -> Self::Output {
                $combine(*self, rhs)
            }
        }

        /**
         * Operation for a record and a constant.
         */
        impl<'a> $op<f64> for Record<'a> {
            type Output = Record<'a>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: f64) -> Self::Output {
                $combine(self, Record::constant(rhs))
            }
        }

        /**
         * Operation for a record and a constant with the right referenced.
         */
        impl<'a> $op<&f64> for Record<'a> {
            type Output = Record<'a>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: &f64) -> Self::Output {
                $combine(self, Record::constant(*rhs))
            }
        }

        /**
         * Operation for a record and a constant with the left referenced.
         */
        impl<'a> $op<f64> for &Record<'a> {
            type Output = Record<'a>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: f64) -> Self::Output {
                $combine(*self, Record::constant(rhs))
            }
        }

        /**
         * Operation for a constant and a record.
         */
        impl<'a> $op<Record<'a>> for f64 {
            type Output = Record<'a>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: Record<'a>) -> Self::Output {
                $combine(Record::constant(self), rhs)
            }
        }

        /**
         * Operation for a constant and a record with the right referenced.
         */
        impl<'a> $op<&Record<'a>> for f64 {
            type Output = Record<'a>;
            #[track_caller]
            #[inline]
            fn $method(self, rhs: &Record<'a>) -> Self::Output {
                $combine(Record::constant(self), *rhs)
            }
        }
    };
}

// δ(u + v) / δu = 1, δ(u + v) / δv = 1
record_operator_impl!(impl Add for Record { fn add } using Record::binary::<Addition>);
// δ(u - v) / δu = 1, δ(u - v) / δv = -1
record_operator_impl!(impl Sub for Record { fn sub } using Record::binary::<Subtraction>);
// δ(u * v) / δu = v, δ(u * v) / δv = u
record_operator_impl!(impl Mul for Record { fn mul } using Record::binary::<Multiplication>);
record_operator_impl!(impl Div for Record { fn div } using reciprocal_product);

/**
 * `u / v` recorded as `u * (1 / v)` with δ(1 / v) / δv = -1 / v^2
 *
 * The number itself is computed as `u / v` so it matches `f64` division exactly.
 */
#[track_caller]
#[inline]
fn reciprocal_product<'a>(u: Record<'a>, v: Record<'a>) -> Record<'a> {
    let product = u.binary::<Multiplication>(v.unary::<Reciprocal>());
    Record {
        number: u.number / v.number,
        ..product
    }
}

/**
 * Negation of a record by reference.
 */
impl<'a> Neg for &Record<'a> {
    type Output = Record<'a>;
    #[track_caller]
    #[inline]
    fn neg(self) -> Self::Output {
        match self.history {
            None => Record::constant(-self.number),
            // δ(-u) / δu = -1
            Some(history) => Record {
                number: -self.number,
                history: Some(history),
                index: history.append_unary(self.index, -1.0),
            },
        }
    }
}

/**
 * Negation of a record by value.
 */
impl<'a> Neg for Record<'a> {
    type Output = Record<'a>;
    #[track_caller]
    #[inline]
    fn neg(self) -> Self::Output {
        -&self
    }
}

macro_rules! record_functions {
    ($($(#[$meta:meta])* fn $method:ident using $function:ty;)*) => {
        impl<'a> Record<'a> {
            $(
                $(#[$meta])*
                #[track_caller]
                #[inline]
                pub fn $method(self) -> Record<'a> {
                    self.unary::<$function>()
                }
            )*
        }
    };
}

record_functions! {
    /// Exponential, ie e<sup>x</sup> of a Record.
    fn exp using Exponential;
    /// Natural logarithm, ie ln(x) of a Record.
    fn ln using NaturalLogarithm;
    /// Square root of a Record.
    fn sqrt using SquareRoot;
    /// Reciprocal, ie 1/x of a Record.
    fn recip using Reciprocal;

    /// Sine of a Record.
    fn sin using Sine;
    /// Cosine of a Record.
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

impl<'a> Record<'a> {
    /**
     * Power of one Record to another, ie self<sup>exponent</sup>, recording
     * `δ(u^v) / δu = v * u^(v-1)` and `δ(u^v) / δv = u^v * ln(u)`.
     */
    #[track_caller]
    #[inline]
    pub fn pow(self, exponent: Record<'a>) -> Record<'a> {
        self.binary::<Power>(exponent)
    }

    /**
     * Power of a Record to a constant, ie self<sup>k</sup>.
     */
    #[track_caller]
    #[inline]
    pub fn powf(self, k: f64) -> Record<'a> {
        self.binary::<Power>(Record::constant(k))
    }

    /**
     * Logarithm of a Record with respect to some base, which may also be a Record.
     */
    #[track_caller]
    #[inline]
    pub fn log(self, base: Record<'a>) -> Record<'a> {
        self.binary::<Logarithm>(base)
    }
}

#[cfg(test)]
mod tests {
    use crate::differentiation::{Record, WengertList};

    #[test]
    fn constants_on_either_side() {
        let list = WengertList::new();
        let x = list.variable(1.5);
        assert_eq!((x * 4.0).derivatives()[&x], 4.0);
        assert_eq!((4.0 * x).derivatives()[&x], 4.0);
        assert_eq!((x - 4.0).derivatives()[&x], 1.0);
        assert_eq!((4.0 - x).derivatives()[&x], -1.0);
        assert_eq!((x / 2.0).derivatives()[&x], 0.5);
        assert_eq!((1.0 / x).derivatives()[&x], -1.0 / (1.5 * 1.5));
    }

    #[test]
    fn negation() {
        let list = WengertList::new();
        let x = list.variable(2.0);
        let y = -x;
        assert_eq!(y.value(), -2.0);
        assert_eq!(y.derivatives()[&x], -1.0);
        assert!((-Record::constant(2.0)).is_constant());
    }

    #[test]
    fn sum_of_records() {
        let list = WengertList::new();
        let x = list.variable(0.5);
        let y = list.variable(2.0);
        let total: Record = [x * 3.0, y * y, x * y].iter().copied().sum();
        let derivatives = total.derivatives();
        assert_eq!(derivatives[&x], 3.0 + 2.0);
        assert_eq!(derivatives[&y], 4.0 + 0.5);
    }

    #[test]
    #[should_panic(expected = "Records must be using the same WengertList")]
    fn mixing_lists_panics() {
        let a = WengertList::new();
        let b = WengertList::new();
        let _ = a.variable(1.0) + b.variable(2.0);
    }

    #[test]
    fn constant_exponent_of_a_negative_base() {
        let list = WengertList::new();
        let x = list.variable(-2.0);
        assert_eq!(x.powf(2.0).derivatives()[&x], -4.0);
        assert_eq!(x.pow(Record::constant(2.0)).derivatives()[&x], -4.0);
    }
}
