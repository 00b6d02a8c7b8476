/*!
 * (Automatic) Differentiation helpers
 *
 * # Automatic Differentiation
 *
 * This module provides structs for performing Forward and Reverse Automatic Differentiation
 * of scalar expressions.
 *
 * ## Automatic Differentiation is not [Numerical Differentiation](https://en.wikipedia.org/wiki/Numerical_differentiation)
 *
 * You were probably introduced to differentiation as numeric differentiation,
 * ie if you have a function 3x<sup>2</sup> then you can estimate its gradient
 * at some value x by computing 3x<sup>2</sup> and 3(x+ε)<sup>2</sup> where ε
 * is a very small value. The tangent line between these two points will create
 * an approximation of the gradient line for 3x<sup>2</sup> at x. This does not
 * give exact answers and is very sensitive to the choice of ε.
 *
 * ## Automatic Differentiation is not [Symbolic Differentiation](https://en.wikipedia.org/wiki/Symbolic_computation)
 *
 * If you were taught calculus you have probably done plenty of symbolic differentiation
 * by hand. A function 3x<sup>2</sup> can be symbolically differentiated into 6x by applying
 * simple rules to manipulate the algebra. Symbolic differentiation gives exact answers but
 * expressions can grow very large, and nothing here attempts it.
 *
 * ## What is Automatic Differentiation?
 *
 * Automatic Differentiation computes the derivative of a function with respect to its
 * inputs exactly, by applying the chain rule to every elementary operation as it is
 * evaluated.
 *
 * - [Trace] is a dual number that carries a tangent alongside its value (forward mode).
 * - [Record] is a node on a [WengertList] that remembers the local derivative with respect
 *   to each of its direct parents (reverse mode). [gradient] walks that list backwards
 *   from any record to find the derivative of the record with respect to everything it
 *   was computed from.
 *
 * Both engines read their calculus from the single table in [functions], so they always
 * agree.
 *
 * ## Domain errors
 *
 * Nothing in this module panics or returns an error for a value outside of a function's
 * domain. `ln(-1)`, `asin(2)` and `1 / 0` produce `NaN` or `±Inf` exactly as `f64` does,
 * and those values then flow through every value, tangent and gradient computed from them.
 *
 * ## Further information
 *
 * - [Automatic Differentiation Step by Step](https://medium.com/@marksaroufim/automatic-differentiation-step-by-step-24240f97a6e6)
 * - [Forward Mode Automatic Differentiation & Dual Numbers](https://towardsdatascience.com/forward-mode-automatic-differentiation-dual-numbers-8f47351064bf)
 * - [Automatic Differentiation: The most criminally underused tool in the potential machine learning toolbox?](https://justindomke.wordpress.com/2009/02/17/automatic-differentiation-the-most-criminally-underused-tool-in-the-potential-machine-learning-toolbox/)
 * - [Yes you should understand backprop](https://medium.com/@karpathy/yes-you-should-understand-backprop-e2f06eab496b)
 */

mod errors;
pub mod functions;
mod record_operations;
#[cfg(feature = "serde")]
mod serialization;
mod trace_operations;
pub mod usage;

pub use errors::GraphError;

use crate::differentiation::functions::{FunctionDerivative, UnaryFunctionDerivative};

use std::cell::RefCell;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/**
 * A dual number which traces a real number and keeps track of its derivative.
 * This is used to perform Forward Automatic Differentiation.
 *
 * Trace implements only first order differentiation. For example, given a function
 * 3x<sup>2</sup>, you can use calculus to work out that its derivative with respect
 * to x is 6x. By instead writing the function 3x<sup>2</sup> in code using Trace types
 * as your numbers you can compute the first order derivative for a given value of x by
 * passing your function `Trace::variable(x)`.
 *
 * ```
 * use scalar_ad::differentiation::Trace;
 * let x = Trace::new(3.2, 1.0);
 * let dx = Trace::constant(3.0) * x * x;
 * assert_eq!(dx.tangent(), 3.2 * 6.0);
 * ```
 *
 * A Trace is immutable, every operation creates a new one.
 */
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trace {
    value: f64,
    tangent: f64,
}

impl Trace {
    /**
     * Creates a Trace from a value and the derivative of that value with respect to
     * whatever is being differentiated.
     */
    #[inline]
    pub fn new(value: f64, tangent: f64) -> Trace {
        Trace { value, tangent }
    }

    /**
     * Constants are lifted to Traces with a tangent of 0
     */
    #[inline]
    pub fn constant(value: f64) -> Trace {
        Trace {
            value,
            tangent: 0.0,
        }
    }

    /**
     * To lift a variable that you want to find the derivative of
     * a function to, the Trace starts with a tangent of 1
     */
    #[inline]
    pub fn variable(value: f64) -> Trace {
        Trace {
            value,
            tangent: 1.0,
        }
    }

    /**
     * The real number
     */
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /**
     * The first order derivative of this number.
     */
    #[inline]
    pub fn tangent(&self) -> f64 {
        self.tangent
    }

    /**
     * Computes the derivative of a function with respect to x.
     *
     * This is a shorthand for `(function(Trace::variable(x))).tangent()`
     *
     * ```
     * use scalar_ad::differentiation::Trace;
     * let dx = Trace::derivative(|x| x * x * x, 2.0);
     * assert_eq!(dx, 12.0);
     * ```
     */
    pub fn derivative(function: impl FnOnce(Trace) -> Trace, x: f64) -> f64 {
        function(Trace::variable(x)).tangent
    }

    /**
     * Applies a function from the derivative table, `(f(v), f'(v) * tangent)`.
     *
     * The product is always taken, so a derivative that is not finite at `v` gives a
     * `NaN` tangent even when the tangent is 0, just as a reverse pass through the same
     * function would.
     */
    #[inline]
    pub(crate) fn unary<F: UnaryFunctionDerivative>(self) -> Trace {
        Trace {
            value: F::function(self.value),
            tangent: F::d_function_dx(self.value) * self.tangent,
        }
    }

    /**
     * Applies a two argument function from the derivative table,
     * `(f(u, v), df/du * u' + df/dv * v')`.
     */
    #[inline]
    pub(crate) fn binary<F: FunctionDerivative>(self, rhs: Trace) -> Trace {
        Trace {
            value: F::function(self.value, rhs.value),
            tangent: chain(self.tangent, || F::d_function_dx(self.value, rhs.value))
                + chain(rhs.tangent, || F::d_function_dy(self.value, rhs.value)),
        }
    }
}

/**
 * One term of a two argument operation. An operand with a tangent of exactly zero is
 * treated as a constant and contributes nothing, even where its partial derivative is not
 * finite, matching a [Record::constant] operand which is never put on a WengertList.
 * Without this `Trace::variable(-2.0).pow(Trace::constant(2.0))` would pick up
 * `0 * ln(-2) = NaN` and `Trace::variable(1.0) / 0.0` would pick up `0 * -1/0 = NaN`.
 *
 * A Trace can't tell a constant from a computed tangent that happens to be zero, so an
 * operand such as `x - x` is skipped here too, where reverse mode still multiplies
 * through its partial.
 */
#[inline]
fn chain(tangent: f64, derivative: impl FnOnce() -> f64) -> f64 {
    if tangent == 0.0 {
        0.0
    } else {
        derivative() * tangent
    }
}

/**
 * The identity of a [Record] on its [WengertList].
 */
pub type Index = usize;

/**
 * One dependency of an entry on a WengertList: the parent's index and the local partial
 * derivative of the entry with respect to that parent.
 */
#[derive(Clone, Copy, Debug, PartialEq)]
struct Edge {
    parent: Index,
    derivative: f64,
}

#[derive(Clone, Debug, PartialEq)]
enum Operation {
    /// An input with no parents.
    Variable,
    Unary([Edge; 1]),
    Binary([Edge; 2]),
    /// Built with [Record::from_local_gradient] from any number of parents.
    Composite(Vec<Edge>),
}

impl Operation {
    fn from_edges(mut edges: Vec<Edge>) -> Operation {
        match edges.len() {
            0 => Operation::Variable,
            1 => Operation::Unary([edges[0]]),
            2 => Operation::Binary([edges[0], edges[1]]),
            _ => {
                edges.shrink_to_fit();
                Operation::Composite(edges)
            }
        }
    }

    fn edges(&self) -> &[Edge] {
        match self {
            Operation::Variable => &[],
            Operation::Unary(edges) => edges,
            Operation::Binary(edges) => edges,
            Operation::Composite(edges) => edges,
        }
    }
}

/**
 * A list of the operations performed on [Record]s, recorded as they happen.
 *
 * Every entry names its direct parents by [Index] and the local partial derivative with
 * respect to each. Entries can only be appended, and every parent must already be on the
 * list, so each entry's parents have strictly smaller indexes than the entry. The list is
 * therefore always acyclic and already in a topological order, which is what lets
 * [gradient] accumulate derivatives with a single backwards sweep.
 *
 * The list uses interior mutability so that operations on Records can append to it
 * through a shared reference. As a consequence a WengertList and its Records stay on one
 * thread, though separate lists can be used on separate threads.
 */
#[derive(Debug, Default)]
pub struct WengertList {
    operations: RefCell<Vec<Operation>>,
}

impl WengertList {
    /**
     * Creates a new empty WengertList from which Records can be constructed.
     */
    pub fn new() -> WengertList {
        WengertList {
            operations: RefCell::new(Vec::new()),
        }
    }

    /**
     * Creates a new empty WengertList with space for `capacity` operations before it
     * needs to reallocate.
     */
    pub fn with_capacity(capacity: usize) -> WengertList {
        WengertList {
            operations: RefCell::new(Vec::with_capacity(capacity)),
        }
    }

    /**
     * Creates a record backed by this WengertList.
     *
     * Equivalent to `Record::variable(x, &list)`
     */
    pub fn variable(&self, x: f64) -> Record<'_> {
        Record::variable(x, self)
    }

    /**
     * The number of operations recorded so far.
     */
    pub fn len(&self) -> usize {
        self.operations.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.borrow().is_empty()
    }

    /**
     * Clears a WengertList to make it empty again. After clearing a WengertList
     * you must create new Records from it, as every existing Record refers to an
     * entry that no longer exists. Reusing the list this way saves reallocating it on
     * every iteration of a training loop.
     */
    pub fn clear(&self) {
        self.operations.borrow_mut().clear();
    }

    pub(crate) fn append_variable(&self) -> Index {
        let mut operations = self.operations.borrow_mut();
        let index = operations.len();
        operations.push(Operation::Variable);
        index
    }

    #[track_caller]
    pub(crate) fn append_unary(&self, parent: Index, derivative: f64) -> Index {
        let mut operations = self.operations.borrow_mut();
        let index = operations.len();
        assert_existing(parent, index);
        operations.push(Operation::Unary([Edge { parent, derivative }]));
        index
    }

    #[track_caller]
    pub(crate) fn append_binary(
        &self,
        left_parent: Index,
        left_derivative: f64,
        right_parent: Index,
        right_derivative: f64,
    ) -> Index {
        let mut operations = self.operations.borrow_mut();
        let index = operations.len();
        assert_existing(left_parent, index);
        assert_existing(right_parent, index);
        operations.push(Operation::Binary([
            Edge {
                parent: left_parent,
                derivative: left_derivative,
            },
            Edge {
                parent: right_parent,
                derivative: right_derivative,
            },
        ]));
        index
    }

    fn append_edges(&self, edges: Vec<Edge>) -> Result<Index, GraphError> {
        let mut operations = self.operations.borrow_mut();
        let index = operations.len();
        check_existing(&edges, index)?;
        operations.push(Operation::from_edges(edges));
        Ok(index)
    }

    /**
     * Computes the derivatives of the entry at `index` with respect to every entry it was
     * computed from, as [Record::derivatives] does for the Record at that index.
     *
     * This is how a deserialized WengertList can be differentiated, since the Records that
     * built it are not serialized.
     *
     * ```
     * use scalar_ad::differentiation::WengertList;
     * let list = WengertList::new();
     * let x = list.variable(3.0);
     * let y = x * x;
     * let derivatives = list.derivatives_at(y.index()).unwrap();
     * assert_eq!(derivatives.at(x.index()), Some(6.0));
     * ```
     */
    pub fn derivatives_at(&self, index: Index) -> Result<Derivatives<'_>, GraphError> {
        let len = self.len();
        if index >= len {
            return Err(GraphError::StaleRecord { index, len });
        }
        Ok(Derivatives {
            history: Some(self),
            derivatives: self.accumulate(index),
        })
    }

    /**
     * Sums the products of local derivatives along every path from `root` back to each of
     * its ancestors.
     *
     * Entries are visited from `root` down to 0. Every parent has a smaller index than its
     * child, so by the time an entry is visited every path through it has already
     * contributed to its total. Entries that are not ancestors of `root` are never
     * propagated, so their local derivatives can't leak into the result.
     */
    fn accumulate(&self, root: Index) -> Vec<Option<f64>> {
        let operations = self.operations.borrow();
        let mut derivatives = vec![None; root + 1];
        derivatives[root] = Some(1.0);
        for index in (0..=root).rev() {
            let Some(derivative) = derivatives[index] else {
                continue;
            };
            for edge in operations[index].edges() {
                // δroot / δparent += δroot / δindex * δindex / δparent
                *derivatives[edge.parent].get_or_insert(0.0) += derivative * edge.derivative;
            }
        }
        derivatives
    }
}

/**
 * Every parent of the entry about to be put at `index` must already be on the list.
 */
fn check_existing(edges: &[Edge], index: Index) -> Result<(), GraphError> {
    match edges.iter().find(|edge| edge.parent >= index) {
        Some(stale) => Err(GraphError::StaleRecord {
            index: stale.parent,
            len: index,
        }),
        None => Ok(()),
    }
}

#[track_caller]
fn assert_existing(parent: Index, len: usize) {
    assert!(
        parent < len,
        "Record {} is no longer on its WengertList of length {}, was the list cleared?",
        parent,
        len
    );
}

/**
 * A wrapper around a real number which records it going through the computational
 * graph. This is used to perform Reverse Automatic Differentiation.
 *
 * Records created with a [WengertList] are nodes of the graph: every operation on them
 * appends a new entry to the same list, naming the direct parents and the local partial
 * derivative with respect to each. Records created with [Record::constant] are not on any
 * list, they take part in computations but no derivatives are tracked for them.
 *
 * ```
 * use scalar_ad::differentiation::{Record, WengertList};
 * let list = WengertList::new();
 * let x = Record::variable(1.5, &list);
 * let y = x * x * x;
 * let derivatives = y.derivatives();
 * assert_eq!(derivatives[&x], 3.0 * 1.5 * 1.5);
 * ```
 *
 * The records cannot live longer than their WengertList, hence
 * the following example does not compile
 *
 * ```compile_fail
 * use scalar_ad::differentiation::Record;
 * use scalar_ad::differentiation::WengertList;
 * let record = {
 *     let list = WengertList::new();
 *     Record::variable(1.0, &list)
 * }; // list no longer in scope
 * ```
 *
 * Records are identified by their index on the WengertList, never by their value, so two
 * distinct records which happen to hold the same number are never confused.
 */
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    number: f64,
    history: Option<&'a WengertList>,
    index: Index,
}

impl<'a> Record<'a> {
    /**
     * Creates an untracked Record which has no backing WengertList.
     *
     * This is provided for using constants along with Records in operations.
     *
     * For example with y = x + 4 the computation graph could be conceived as
     * a y node with parent nodes of x and 4 combined with the operation +.
     * However there is no need to record the derivatives of a constant, so
     * instead the computation graph can be conceived as a y node with a single
     * parent node of x and the unary operation of +4.
     */
    #[inline]
    pub fn constant(c: f64) -> Record<'a> {
        Record {
            number: c,
            history: None,
            index: 0,
        }
    }

    /**
     * Creates a record backed by the provided WengertList, with no parents of its own.
     */
    #[inline]
    pub fn variable(x: f64, history: &'a WengertList) -> Record<'a> {
        Record {
            number: x,
            history: Some(history),
            index: history.append_variable(),
        }
    }

    /**
     * Creates a record from its value and the local partial derivative of that value with
     * respect to each of its direct parents.
     *
     * Parents which are constants are skipped, and if none of the parents are on a
     * WengertList the result is a constant too. Every parent must already be on the list,
     * so a record can never become its own ancestor.
     *
     * ```
     * use scalar_ad::differentiation::{Record, WengertList};
     * let list = WengertList::new();
     * let x = list.variable(3.0);
     * // a hand written x^2
     * let y = Record::from_local_gradient(9.0, &[(x, 6.0)]).unwrap();
     * assert_eq!(y.derivatives()[&x], 6.0);
     * ```
     */
    pub fn from_local_gradient(
        value: f64,
        local_gradient: &[(Record<'a>, f64)],
    ) -> Result<Record<'a>, GraphError> {
        let mut history: Option<&'a WengertList> = None;
        let mut edges = Vec::with_capacity(local_gradient.len());
        for (parent, derivative) in local_gradient {
            let Some(list) = parent.history else {
                continue;
            };
            match history {
                Some(existing) if !std::ptr::eq(existing, list) => {
                    return Err(GraphError::MixedLists);
                }
                _ => history = Some(list),
            }
            edges.push(Edge {
                parent: parent.index,
                derivative: *derivative,
            });
        }
        match history {
            None => Ok(Record::constant(value)),
            Some(history) => Ok(Record {
                number: value,
                history: Some(history),
                index: history.append_edges(edges)?,
            }),
        }
    }

    /**
     * The real number
     */
    #[inline]
    pub fn value(&self) -> f64 {
        self.number
    }

    /**
     * The identity of this record on its WengertList. Constants have no identity and
     * always return 0.
     */
    #[inline]
    pub fn index(&self) -> Index {
        self.index
    }

    /**
     * The WengertList this record is on, if any.
     */
    #[inline]
    pub fn history(&self) -> Option<&'a WengertList> {
        self.history
    }

    #[inline]
    pub fn is_constant(&self) -> bool {
        self.history.is_none()
    }

    /**
     * The local partial derivative of this record with respect to each of its direct
     * parents, keyed by the parents' indexes. A parent used more than once, as in `x * x`,
     * appears once with the partial derivatives summed. Variables and constants have no
     * parents.
     *
     * ```
     * use scalar_ad::differentiation::WengertList;
     * let list = WengertList::new();
     * let x = list.variable(2.0);
     * let y = list.variable(5.0);
     * let z = x * y;
     * let local = z.local_gradient();
     * assert_eq!(local[&x.index()], 5.0);
     * assert_eq!(local[&y.index()], 2.0);
     * assert_eq!((x * x).local_gradient()[&x.index()], 4.0);
     * ```
     */
    pub fn local_gradient(&self) -> BTreeMap<Index, f64> {
        let mut local_gradient = BTreeMap::new();
        if let Some(history) = self.history {
            let operations = history.operations.borrow();
            if let Some(operation) = operations.get(self.index) {
                for edge in operation.edges() {
                    *local_gradient.entry(edge.parent).or_insert(0.0) += edge.derivative;
                }
            }
        }
        local_gradient
    }

    /**
     * Performs a backward pass up this record's WengertList from this
     * record as the output, computing all the derivatives for the inputs
     * involving this output.
     *
     * If you have N inputs x<sub>1</sub> to x<sub>N</sub>, and this output is y,
     * then this computes all the derivatives δy/δx<sub>i</sub> for i = 1 to N.
     *
     * # Panics
     *
     * Panics if the WengertList was cleared after this record was created. See
     * [try_derivatives](Record::try_derivatives) for a non panicking version.
     */
    #[track_caller]
    pub fn derivatives(&self) -> Derivatives<'a> {
        match self.try_derivatives() {
            Ok(derivatives) => derivatives,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Performs a backward pass up this record's WengertList from this record as the
     * output, returning an error if the list no longer holds this record.
     *
     * A constant has no inputs, so its derivatives are empty.
     */
    pub fn try_derivatives(&self) -> Result<Derivatives<'a>, GraphError> {
        match self.history {
            None => Ok(Derivatives {
                history: None,
                derivatives: Vec::new(),
            }),
            Some(history) => history.derivatives_at(self.index),
        }
    }

    /**
     * Applies a function from the derivative table, appending a unary entry with
     * local partial `f'(v)`.
     */
    #[track_caller]
    #[inline]
    pub(crate) fn unary<F: UnaryFunctionDerivative>(self) -> Record<'a> {
        let number = F::function(self.number);
        match self.history {
            None => Record::constant(number),
            Some(history) => Record {
                number,
                history: Some(history),
                index: history.append_unary(self.index, F::d_function_dx(self.number)),
            },
        }
    }

    /**
     * Applies a two argument function from the derivative table.
     *
     * If neither input is on a WengertList the result is a constant. If only one is, the
     * other is treated as a constant and a unary entry is appended.
     */
    #[track_caller]
    #[inline]
    pub(crate) fn binary<F: FunctionDerivative>(self, rhs: Record<'a>) -> Record<'a> {
        assert!(
            same_list(&self, &rhs),
            "Records must be using the same WengertList"
        );
        let (x, y) = (self.number, rhs.number);
        let number = F::function(x, y);
        match (self.history, rhs.history) {
            (None, None) => Record::constant(number),
            (Some(history), None) => Record {
                number,
                history: Some(history),
                index: history.append_unary(self.index, F::d_function_dx(x, y)),
            },
            (None, Some(history)) => Record {
                number,
                history: Some(history),
                index: history.append_unary(rhs.index, F::d_function_dy(x, y)),
            },
            (Some(history), Some(_)) => Record {
                number,
                history: Some(history),
                index: history.append_binary(
                    self.index,
                    F::d_function_dx(x, y),
                    rhs.index,
                    F::d_function_dy(x, y),
                ),
            },
        }
    }
}

/**
 * Compares two record's referenced WengertLists.
 *
 * If either Record is missing a reference to a WengertList then
 * this is trivially 'true', in so far as we will use the WengertList of
 * the other one.
 *
 * If both records have a WengertList, then checks that the lists are
 * the same.
 */
pub(crate) fn same_list(a: &Record<'_>, b: &Record<'_>) -> bool {
    match (a.history, b.history) {
        (Some(list_a), Some(list_b)) => std::ptr::eq(list_a, list_b),
        _ => true,
    }
}

/**
 * Computes the derivatives of `root` with respect to every record it was computed from.
 *
 * Equivalent to `root.derivatives()`.
 *
 * ```
 * use scalar_ad::differentiation::{gradient, WengertList};
 * let list = WengertList::new();
 * let x = list.variable(1.5);
 * let y = x * x;
 * let z = y + y;
 * assert_eq!(gradient(&z)[&x], 4.0 * 1.5);
 * ```
 */
#[track_caller]
pub fn gradient<'a>(root: &Record<'a>) -> Derivatives<'a> {
    root.derivatives()
}

/**
 * The derivatives of one output Record with respect to each of its ancestors, keyed by
 * identity on the WengertList.
 *
 * The output itself is included with a derivative of 1.
 */
#[derive(Clone, Debug)]
pub struct Derivatives<'a> {
    history: Option<&'a WengertList>,
    derivatives: Vec<Option<f64>>,
}

impl<'a> Derivatives<'a> {
    /**
     * The derivative of the output with respect to `input`, or None if `input` is a
     * constant, is on a different WengertList, or is not an ancestor of the output.
     */
    pub fn get(&self, input: &Record<'_>) -> Option<f64> {
        match (self.history, input.history) {
            (Some(ours), Some(theirs)) if std::ptr::eq(ours, theirs) => self.at(input.index),
            _ => None,
        }
    }

    /**
     * The derivative of the output with respect to the record at `index`, if it is an
     * ancestor of the output.
     */
    pub fn at(&self, index: Index) -> Option<f64> {
        self.derivatives.get(index).copied().flatten()
    }

    /**
     * Iterates through every ancestor of the output in ascending index order.
     */
    pub fn iter(&self) -> impl Iterator<Item = (Index, f64)> + '_ {
        self.derivatives
            .iter()
            .enumerate()
            .filter_map(|(index, derivative)| derivative.map(|d| (index, d)))
    }

    /**
     * The number of ancestors of the output, including the output itself.
     */
    pub fn len(&self) -> usize {
        self.derivatives.iter().filter(|d| d.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/**
 * Looks up the derivative of the output with respect to a Record. Records that are
 * constants or are not ancestors of the output have a derivative of 0.
 *
 * # Panics
 *
 * If the record is on a different WengertList to the output.
 */
impl<'a, 'r> std::ops::Index<&Record<'r>> for Derivatives<'a> {
    type Output = f64;
    #[track_caller]
    fn index(&self, input: &Record<'r>) -> &f64 {
        if let (Some(ours), Some(theirs)) = (self.history, input.history) {
            assert!(
                std::ptr::eq(ours, theirs),
                "Record is not on the WengertList these derivatives were computed from"
            );
        }
        match input.history {
            None => &0.0,
            Some(_) => match self.derivatives.get(input.index) {
                Some(Some(derivative)) => derivative,
                _ => &0.0,
            },
        }
    }
}

/**
 * Converts the derivatives into a vector indexed by [Index], with 0 for every entry that
 * is not an ancestor of the output.
 */
impl<'a> From<Derivatives<'a>> for Vec<f64> {
    fn from(derivatives: Derivatives<'a>) -> Self {
        derivatives
            .derivatives
            .into_iter()
            .map(|derivative| derivative.unwrap_or(0.0))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_only_refer_to_earlier_entries() {
        let list = WengertList::new();
        let x = list.variable(0.5);
        let y = list.variable(-1.5);
        let z = ((x * y).sin() + x / y).exp() - y.pow(x);
        let operations = list.operations.borrow();
        assert_eq!(operations.len(), list.len());
        assert!(z.index() == operations.len() - 1);
        for (index, operation) in operations.iter().enumerate() {
            assert!(operation.edges().iter().all(|edge| edge.parent < index));
        }
    }

    #[test]
    fn division_is_built_from_a_reciprocal() {
        let list = WengertList::new();
        let a = list.variable(3.0);
        let b = list.variable(4.0);
        let before = list.len();
        let c = a / b;
        // 1 / b then a * (1 / b)
        assert_eq!(list.len(), before + 2);
        let reciprocal = c.index() - 1;
        assert_eq!(
            list.operations.borrow()[reciprocal],
            Operation::Unary([Edge {
                parent: b.index(),
                derivative: -1.0 / 16.0,
            }])
        );
    }

    #[test]
    fn constants_are_not_recorded() {
        let list = WengertList::new();
        let x = list.variable(2.0);
        let c = Record::constant(3.0) * Record::constant(4.0);
        assert!(c.is_constant());
        assert_eq!(list.len(), 1);
        let y = x * c;
        assert_eq!(list.len(), 2);
        assert_eq!(y.local_gradient()[&x.index()], 12.0);
    }

    #[test]
    fn unreached_entries_do_not_leak() {
        let list = WengertList::new();
        let x = list.variable(-1.0);
        // sqrt(-1) has a NaN local derivative but is not an ancestor of y
        let _unrelated = x.sqrt();
        let y = x * 2.0;
        let derivatives = y.derivatives();
        assert_eq!(derivatives[&x], 2.0);
        assert_eq!(derivatives.len(), 2);
    }

    #[test]
    fn composite_entries() {
        let list = WengertList::new();
        let x = list.variable(1.0);
        let y = list.variable(2.0);
        let z = list.variable(3.0);
        // x + 2y + 3z
        let w = Record::from_local_gradient(14.0, &[(x, 1.0), (y, 2.0), (z, 3.0)]).unwrap();
        assert!(matches!(
            list.operations.borrow()[w.index()],
            Operation::Composite(_)
        ));
        let derivatives = w.derivatives();
        assert_eq!(derivatives[&x], 1.0);
        assert_eq!(derivatives[&y], 2.0);
        assert_eq!(derivatives[&z], 3.0);
    }
}
