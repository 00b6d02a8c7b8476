/*!
 * Exact first order derivatives of scalar expressions by automatic differentiation.
 *
 * Two independent engines are provided in the [differentiation] module:
 *
 * - [Trace](differentiation::Trace), a dual number for forward mode. Every operation
 *   carries the tangent along with the value, no graph is built.
 * - [Record](differentiation::Record), nodes on a
 *   [WengertList](differentiation::WengertList) for reverse mode. Every operation records
 *   its local partial derivatives, then [gradient](differentiation::gradient) walks the
 *   list backwards from an output to find its derivative with respect to every input at
 *   once.
 *
 * Functions written against [Real](numeric::Real) can be evaluated with `f64`, `Trace`
 * or `Record` alike.
 *
 * ```
 * use scalar_ad::differentiation::{gradient, Trace, WengertList};
 *
 * // forward: d(x^2 sin(x))/dx at x = 1.5
 * let x = Trace::variable(1.5);
 * let forward = (x * x * x.sin()).tangent();
 *
 * // reverse: the same derivative from a recorded graph
 * let list = WengertList::new();
 * let x = list.variable(1.5);
 * let y = x * x * x.sin();
 * let reverse = gradient(&y)[&x];
 *
 * assert!((forward - reverse).abs() < 1e-12);
 * ```
 *
 * # Examples
 * - [Usage of Record and Trace](./differentiation/usage/index.html)
 */

pub mod differentiation;
pub mod numeric;
