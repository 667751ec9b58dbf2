//! Creator chains: the positional zip of contracts and implementations.
//!
//! A chain composes one creator per (contract, implementation) pair into a
//! single value implementing every contract at once, with no runtime lookup
//! structure. [`BuildChain`] performs the recursive zip — peel the first pair,
//! link a creator for it in front of the rest, terminate in [`End`] — and its
//! missing impl for uneven sequences is precisely where a length mismatch is
//! rejected, during composition rather than at first use.
//!
//! Access back into the chain is type-indexed: [`Select`] walks the links
//! guided by an index ([`Here`]/[`There`]) that the compiler infers from the
//! requested contract, so callers never spell it out.

use crate::contract::{Contract, Creator};
use crate::policy::Policy;
use crate::sequence::{Cons, Nil};
use core::marker::PhantomData;

/// The terminal link every creator chain ends in.
#[derive(Default)]
pub struct End;

/// One creator, followed by the rest of the chain.
#[derive(Default)]
pub struct Link<C, Rest> {
    creator: C,
    rest: Rest,
}

/// Composes one creator per (contract, implementation) pair.
///
/// Implemented on contract sequences, zipped positionally with the
/// implementation sequence under creation policy `P`. The composed
/// [`Chain`](BuildChain::Chain) assembles through `Default`, so a factory
/// value that exists has already passed every structural check.
#[diagnostic::on_unimplemented(
    message = "descriptor and implementation lists are of different length",
    label = "cannot zip `{Self}` with `{Impls}`",
    note = "every descriptor needs exactly one concrete implementation, in declaration order"
)]
pub trait BuildChain<Impls, P> {
    /// The composed chain type.
    type Chain: Default;
}

impl<P> BuildChain<Nil, P> for Nil {
    type Chain = End;
}

impl<Ctx, Ctxs, Impl, Impls, P> BuildChain<Cons<Impl, Impls>, P> for Cons<Ctx, Ctxs>
where
    Ctx: Contract,
    P: Policy<Ctx, Impl>,
    Ctxs: BuildChain<Impls, P>,
{
    type Chain = Link<P::Creator, <Ctxs as BuildChain<Impls, P>>::Chain>;
}

/// Index selecting the first link of a chain.
pub struct Here;

/// Index pointing past the first link, into the rest of a chain.
pub struct There<I>(PhantomData<I>);

/// Type-indexed access to the creator bound to a contract.
///
/// The index parameter is inferred: requesting a contract held by the chain
/// resolves to exactly one link. Requesting one that is not held fails to
/// compile — that is the "wrong product type" rejection, and it happens even
/// though the chain itself was perfectly well-formed.
#[diagnostic::on_unimplemented(
    message = "wrong product type: `{Ctx}` has no creator in this factory's configuration",
    label = "this factory was not configured to create products for this descriptor",
    note = "only descriptors listed in the factory's descriptor sequence can be requested"
)]
pub trait Select<Ctx: Contract, Index> {
    /// The creator bound to `Ctx`.
    type Creator: Creator<Ctx>;

    /// Returns the creator bound to `Ctx`.
    fn creator(&self) -> &Self::Creator;

    /// Returns the creator bound to `Ctx`, mutably.
    ///
    /// Mutable access is how stateful policies are configured, e.g. setting
    /// a prototype exemplar.
    fn creator_mut(&mut self) -> &mut Self::Creator;
}

impl<Ctx, C, Rest> Select<Ctx, Here> for Link<C, Rest>
where
    Ctx: Contract,
    C: Creator<Ctx>,
{
    type Creator = C;

    #[inline]
    fn creator(&self) -> &C {
        &self.creator
    }

    #[inline]
    fn creator_mut(&mut self) -> &mut C {
        &mut self.creator
    }
}

impl<Ctx, C, Rest, I> Select<Ctx, There<I>> for Link<C, Rest>
where
    Ctx: Contract,
    Rest: Select<Ctx, I>,
{
    type Creator = <Rest as Select<Ctx, I>>::Creator;

    #[inline]
    fn creator(&self) -> &Self::Creator {
        <Rest as Select<Ctx, I>>::creator(&self.rest)
    }

    #[inline]
    fn creator_mut(&mut self) -> &mut Self::Creator {
        <Rest as Select<Ctx, I>>::creator_mut(&mut self.rest)
    }
}
