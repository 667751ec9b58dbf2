//! The abstract factory façade and its concrete composition root.
//!
//! [`AbstractFactory`] is the type-level façade: an ordered descriptor
//! sequence plus the signature generator deriving one contract per
//! descriptor. [`ConcreteFactory`] binds that configuration to an
//! implementation sequence through a creation policy, owns the composed
//! creator chain, and exposes the unified [`create`](ConcreteFactory::create)
//! entry point.
//!
//! Substitutability runs through the contracts, not the composition: a
//! concrete factory also implements [`Select`] by delegation, so generic
//! consumers bound on `Select<Ctx, I>` (or holding a `&dyn Creator<Ctx>`
//! obtained from [`creator`](ConcreteFactory::creator)) work with any factory
//! serving the contract, never naming the concrete composition.

use crate::chain::{BuildChain, Select};
use crate::contract::{ContextOf, Contract, ContractFor, Creator, Declared};
use crate::descriptor::Descriptor;
use crate::diagnostic::ArgumentsMatch;
use crate::policy::DefaultPolicy;
use crate::sequence::{Cons, Nil};
use core::marker::PhantomData;

/// Maps an ordered descriptor sequence to its contract sequence under
/// signature generator `S`.
pub trait Contracts<S> {
    /// The derived contract sequence, in declaration order.
    type Contexts;
}

impl<S> Contracts<S> for Nil {
    type Contexts = Nil;
}

impl<D, Ds, S> Contracts<S> for Cons<D, Ds>
where
    D: Descriptor,
    S: ContractFor<D>,
    Ds: Contracts<S>,
{
    type Contexts = Cons<ContextOf<D, S>, Ds::Contexts>;
}

/// The polymorphic façade configuration: an ordered descriptor sequence and
/// the signature generator each contract is derived through.
///
/// This type is never instantiated; it only names a configuration for
/// [`ConcreteFactory`] to bind against.
pub struct AbstractFactory<Descriptors, S = Declared>(PhantomData<fn() -> (Descriptors, S)>);

/// The resolved configuration of an abstract factory.
pub trait Configuration {
    /// The signature generator contracts are derived through.
    type Signatures;

    /// The ordered contract sequence, one context per descriptor.
    type Contexts;
}

impl<Descriptors, S> Configuration for AbstractFactory<Descriptors, S>
where
    Descriptors: Contracts<S>,
{
    type Signatures = S;
    type Contexts = Descriptors::Contexts;
}

/// The creator chain a concrete factory composes for configuration `A`.
pub type ChainOf<A, Impls, P> = <<A as Configuration>::Contexts as BuildChain<Impls, P>>::Chain;

/// The composition root: binds an abstract factory configuration to an
/// ordered implementation sequence through a creation policy.
///
/// All validation is complete once a value of this type exists; every
/// misconfiguration listed in [`diagnostic`](crate::diagnostic) is rejected
/// by the compiler at (or before) [`new`](Self::new).
///
/// # Example
///
/// ```
/// use fabrik::factory::{AbstractFactory, ConcreteFactory};
/// use fabrik::prelude::*;
///
/// trait Gear { fn teeth(&self) -> u32; }
///
/// struct SpurGear { teeth: u32 }
/// impl Gear for SpurGear {
///     fn teeth(&self) -> u32 { self.teeth }
/// }
///
/// impl Construct<(u32,)> for SpurGear {
///     fn construct((teeth,): (u32,)) -> Self {
///         SpurGear { teeth }
///     }
/// }
///
/// fabrik::wraps! { SpurGear => Box<dyn Gear>; }
///
/// fabrik::descriptor! {
///     struct AnyGear: dyn Gear { args = (u32,); }
/// }
///
/// type Config = AbstractFactory<fabrik::sequence![AnyGear]>;
/// type Factory = ConcreteFactory<Config, fabrik::sequence![SpurGear]>;
///
/// let factory = Factory::new();
/// let gear = factory.create::<AnyGear, _, _>((24,));
/// assert_eq!(gear.teeth(), 24);
/// ```
pub struct ConcreteFactory<A, Impls, P = DefaultPolicy>
where
    A: Configuration,
    A::Contexts: BuildChain<Impls, P>,
{
    chain: ChainOf<A, Impls, P>,
    _config: PhantomData<fn() -> (A, Impls, P)>,
}

impl<A, Impls, P> ConcreteFactory<A, Impls, P>
where
    A: Configuration,
    A::Contexts: BuildChain<Impls, P>,
{
    /// Assembles the factory from its configuration.
    pub fn new() -> Self {
        Self {
            chain: Default::default(),
            _config: PhantomData,
        }
    }

    /// Creates the product identified by descriptor `D`.
    ///
    /// The argument tuple must match `D`'s resolved argument sequence
    /// exactly, in count and type; the result is whatever `D`'s contract
    /// declares, produced by the creator bound at composition time. The two
    /// trailing type parameters are always inferred:
    /// `factory.create::<SomeToken, _, _>(args)`.
    #[inline]
    pub fn create<D, Args, I>(&self, args: Args) -> <A::Signatures as ContractFor<D>>::Output
    where
        D: Descriptor,
        A::Signatures: ContractFor<D>,
        ChainOf<A, Impls, P>: Select<ContextOf<D, A::Signatures>, I>,
        Args: ArgumentsMatch<<A::Signatures as ContractFor<D>>::Args>,
    {
        self.creator::<D, I>().create(args.into_ordered())
    }

    /// Returns the creator bound to descriptor `D`'s contract.
    ///
    /// The reference coerces to `&dyn Creator<Ctx>` for callers that want to
    /// hold the contract without the composition type.
    #[inline]
    pub fn creator<D, I>(
        &self,
    ) -> &<ChainOf<A, Impls, P> as Select<ContextOf<D, A::Signatures>, I>>::Creator
    where
        D: Descriptor,
        A::Signatures: ContractFor<D>,
        ChainOf<A, Impls, P>: Select<ContextOf<D, A::Signatures>, I>,
    {
        <ChainOf<A, Impls, P> as Select<ContextOf<D, A::Signatures>, I>>::creator(&self.chain)
    }

    /// Returns the creator bound to descriptor `D`'s contract, mutably.
    ///
    /// This is the customization entry point for stateful policies, e.g.
    /// `factory.creator_mut::<Token, _>().set_exemplar(..)`.
    #[inline]
    pub fn creator_mut<D, I>(
        &mut self,
    ) -> &mut <ChainOf<A, Impls, P> as Select<ContextOf<D, A::Signatures>, I>>::Creator
    where
        D: Descriptor,
        A::Signatures: ContractFor<D>,
        ChainOf<A, Impls, P>: Select<ContextOf<D, A::Signatures>, I>,
    {
        <ChainOf<A, Impls, P> as Select<ContextOf<D, A::Signatures>, I>>::creator_mut(
            &mut self.chain,
        )
    }
}

impl<A, Impls, P> Default for ConcreteFactory<A, Impls, P>
where
    A: Configuration,
    A::Contexts: BuildChain<Impls, P>,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// A concrete factory serves any contract its chain serves.
impl<A, Impls, P, Ctx, I> Select<Ctx, I> for ConcreteFactory<A, Impls, P>
where
    A: Configuration,
    A::Contexts: BuildChain<Impls, P>,
    Ctx: Contract,
    ChainOf<A, Impls, P>: Select<Ctx, I>,
{
    type Creator = <ChainOf<A, Impls, P> as Select<Ctx, I>>::Creator;

    #[inline]
    fn creator(&self) -> &Self::Creator {
        <ChainOf<A, Impls, P> as Select<Ctx, I>>::creator(&self.chain)
    }

    #[inline]
    fn creator_mut(&mut self) -> &mut Self::Creator {
        <ChainOf<A, Impls, P> as Select<Ctx, I>>::creator_mut(&mut self.chain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creator::Construct;

    trait Pellet {
        fn size(&self) -> u8;
    }

    struct ClayPellet {
        size: u8,
    }

    impl Pellet for ClayPellet {
        fn size(&self) -> u8 {
            self.size
        }
    }

    impl Construct<(u8,)> for ClayPellet {
        fn construct((size,): (u8,)) -> Self {
            ClayPellet { size }
        }
    }

    trait Crate {}

    #[derive(Default)]
    struct PineCrate;

    impl Crate for PineCrate {}

    impl Construct<()> for PineCrate {
        fn construct(_args: ()) -> Self {
            PineCrate
        }
    }

    crate::wraps! {
        ClayPellet => Box<dyn Pellet>;
        PineCrate => Box<dyn Crate>;
    }

    crate::descriptor! {
        struct AnyPellet: dyn Pellet { args = (u8,); }
        struct AnyCrate: dyn Crate;
    }

    type Config = AbstractFactory<crate::sequence![AnyPellet, AnyCrate]>;
    type Factory = ConcreteFactory<Config, crate::sequence![ClayPellet, PineCrate]>;

    #[test]
    fn one_creation_path_per_descriptor() {
        let factory = Factory::new();
        assert_eq!(factory.create::<AnyPellet, _, _>((3,)).size(), 3);
        let _crate: Box<dyn Crate> = factory.create::<AnyCrate, _, _>(());
    }

    #[test]
    fn default_assembles_like_new() {
        let factory = Factory::default();
        assert_eq!(factory.create::<AnyPellet, _, _>((9,)).size(), 9);
    }

    #[test]
    fn factories_delegate_contract_selection() {
        fn pellet_of<F, I>(factory: &F, size: u8) -> Box<dyn Pellet>
        where
            F: Select<ContextOf<AnyPellet>, I>,
        {
            factory.creator().create((size,))
        }

        let factory = Factory::new();
        assert_eq!(pellet_of(&factory, 5).size(), 5);
    }
}
