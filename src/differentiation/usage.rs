/*!
 * # Usage of Record and Trace
 *
 * Both `Trace` and `Record` for forward and reverse automatic differentiation respectively
 * implement `Real` and can generally be treated as normal numbers just like `f64`.
 *
 * `Trace` is literally implemented as a dual number, and is more or less a one to one
 * substitution. `Record` requires dynamically building a computational graph of the values
 * and dependencies of each operation performed on them. This means performing operations on
 * records have side effects, they add entries onto a `WengertList`. However, when using
 * `Record` the side effects are abstracted away, just create a `WengertList` before you
 * start creating Records.
 *
 * Given some function from N inputs to M outputs you can pass it `Trace`s or `Record`s
 * and retrieve the first derivative from the outputs for all combinations of N and M.
 * If N >> M then you should use `Record` as reverse mode automatic differentiation is
 * much cheaper. If N << M then you should use `Trace` as it will be much cheaper. If
 * you have large N and M, or small N and M, you might have to benchmark to find which
 * method works best.
 *
 * For this example we use a function which takes two inputs, r and a, and returns two
 * outputs, x and y.
 *
 * ## Using Trace
 *
 * ```
 * use scalar_ad::differentiation::Trace;
 * fn cartesian(r: Trace, angle: Trace) -> (Trace, Trace) {
 *     let x = r * angle.cos();
 *     let y = r * angle.sin();
 *     (x, y)
 * }
 * // first find dx/dr and dy/dr
 * let (x, y) = cartesian(Trace::variable(1.0), Trace::constant(2.0));
 * let dx_dr = x.tangent();
 * let dy_dr = y.tangent();
 * // now find dx/da and dy/da
 * let (x, y) = cartesian(Trace::constant(1.0), Trace::variable(2.0));
 * let dx_da = x.tangent();
 * let dy_da = y.tangent();
 * assert_eq!(dx_dr, 2.0_f64.cos());
 * assert_eq!(dy_da, 2.0_f64.cos());
 * ```
 *
 * ## Using Record
 *
 * ```
 * use scalar_ad::differentiation::{Record, WengertList};
 * // the lifetimes tell the rust compiler that our inputs and outputs
 * // can all live as long as the WengertList
 * fn cartesian<'a>(r: Record<'a>, angle: Record<'a>) -> (Record<'a>, Record<'a>) {
 *     let x = r * angle.cos();
 *     let y = r * angle.sin();
 *     (x, y)
 * }
 * // first we must construct a WengertList to create records from
 * let list = WengertList::new();
 * let r = Record::variable(1.0, &list);
 * let a = Record::variable(2.0, &list);
 * let (x, y) = cartesian(r, a);
 * // first find dx/dr and dx/da
 * let x_derivatives = x.derivatives();
 * let dx_dr = x_derivatives[&r];
 * let dx_da = x_derivatives[&a];
 * // now find dy/dr and dy/da
 * let y_derivatives = y.derivatives();
 * let dy_dr = y_derivatives[&r];
 * let dy_da = y_derivatives[&a];
 * assert_eq!(dx_dr, 2.0_f64.cos());
 * assert_eq!(dy_da, 2.0_f64.cos());
 * ```
 *
 * ## Writing the function once
 *
 * ```
 * use scalar_ad::numeric::Real;
 * use scalar_ad::differentiation::{Trace, WengertList};
 * fn cartesian<T: Real>(r: T, angle: T) -> (T, T) {
 *     (r * angle.cos(), r * angle.sin())
 * }
 * let (plain_x, _) = cartesian(1.0, 2.0);
 * let (x, _) = cartesian(Trace::variable(1.0), Trace::constant(2.0));
 * assert_eq!(x.value(), plain_x);
 * let list = WengertList::new();
 * let (r, a) = (list.variable(1.0), list.variable(2.0));
 * let (x, _) = cartesian(r, a);
 * assert_eq!(x.derivatives()[&r], x.value());
 * ```
 *
 * ## Reusing a WengertList
 *
 * In a training loop the same WengertList can be cleared and reused on every iteration.
 * Any Records created before clearing must not be used afterwards.
 *
 * ```
 * use scalar_ad::differentiation::WengertList;
 * // e^x approaches 0 as x goes to -inf
 * let list = WengertList::new();
 * let mut x = 3.0;
 * for _ in 0..10 {
 *     let record = list.variable(x);
 *     let y = record.exp();
 *     x -= 0.1 * y.derivatives()[&record];
 *     list.clear();
 * }
 * assert!(x < 3.0);
 * ```
 */
