//! Ordered, fixed-length compile-time sequences of type tokens.
//!
//! [`Cons`]/[`Nil`] chains are the substrate the rest of the engine is
//! parameterized over: descriptor lists, contract lists and implementation
//! lists are all type sequences, and every structural check (length matching,
//! positional zipping) is a recursion over them. The [`sequence!`] macro
//! builds them without the nesting noise.
//!
//! Argument lists are the one exception: they travel through creation calls
//! as values, so they are represented as plain tuples. The [`ArgList`] trait
//! marks the tuple shapes the engine accepts.

use core::marker::PhantomData;

/// The empty type sequence.
pub struct Nil;

/// A type sequence holding `Head`, followed by the `Tail` sequence.
pub struct Cons<Head, Tail>(PhantomData<fn() -> (Head, Tail)>);

/// An ordered, fixed-length sequence of type tokens.
pub trait TypeSequence {
    /// The number of elements in the sequence.
    const LEN: usize;
}

impl TypeSequence for Nil {
    const LEN: usize = 0;
}

impl<Head, Tail: TypeSequence> TypeSequence for Cons<Head, Tail> {
    const LEN: usize = 1 + Tail::LEN;
}

/// An ordered argument list, represented as a tuple.
///
/// Creation calls forward their arguments positionally as one tuple value;
/// the empty list is `()`, a single `i32` argument is `(i32,)`, and so on.
pub trait ArgList {
    /// The number of arguments the list carries.
    const ARITY: usize;
}

impl ArgList for () {
    const ARITY: usize = 0;
}

macro_rules! arg_list_tuples {
    ($($arity:expr => ($($arg:ident),+);)+) => {
        $(
            impl<$($arg),+> ArgList for ($($arg,)+) {
                const ARITY: usize = $arity;
            }
        )+
    };
}

arg_list_tuples! {
    1 => (A0);
    2 => (A0, A1);
    3 => (A0, A1, A2);
    4 => (A0, A1, A2, A3);
    5 => (A0, A1, A2, A3, A4);
    6 => (A0, A1, A2, A3, A4, A5);
    7 => (A0, A1, A2, A3, A4, A5, A6);
    8 => (A0, A1, A2, A3, A4, A5, A6, A7);
}

/// Builds a [`Cons`]/[`Nil`] type sequence from a comma-separated list of
/// types.
///
/// # Example
///
/// ```
/// use fabrik::sequence::{Cons, Nil, TypeSequence};
///
/// struct A;
/// struct B;
///
/// type Both = fabrik::sequence![A, B];
/// assert_eq!(<Both as TypeSequence>::LEN, 2);
/// ```
#[macro_export]
macro_rules! sequence {
    [] => { $crate::sequence::Nil };
    [$head:ty $(, $tail:ty)* $(,)?] => {
        $crate::sequence::Cons<$head, $crate::sequence![$($tail),*]>
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    struct A;
    struct B;

    #[test]
    fn sequences_nest_to_the_right() {
        assert_type_eq_all!(crate::sequence![A, B], Cons<A, Cons<B, Nil>>);
        assert_type_eq_all!(crate::sequence![], Nil);
    }

    #[test]
    fn length_counts_elements() {
        assert_eq!(<crate::sequence![A, B, A]>::LEN, 3);
        assert_eq!(<crate::sequence![A]>::LEN, 1);
        assert_eq!(Nil::LEN, 0);
    }

    #[test]
    fn tuples_report_their_arity() {
        assert_eq!(<() as ArgList>::ARITY, 0);
        assert_eq!(<(bool,) as ArgList>::ARITY, 1);
        assert_eq!(<(bool, i32) as ArgList>::ARITY, 2);
    }
}
