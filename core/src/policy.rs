//! Creation policies: how a creator produces its result.
//!
//! A [`Policy`] maps each (contract, implementation) pair to the creator type
//! that will serve it. [`DefaultPolicy`] picks the constructing creator for
//! every pair; custom policies are explicit per-pair impls, so "default
//! unless overridden" is written out as an override map the compiler checks
//! rather than inferred from the shapes of things.
//!
//! Two alternative creators ship with the engine:
//!
//! - [`ValueCreator`] returns its single argument directly and never
//!   constructs the concrete type — for plain-value contracts.
//! - [`PrototypeCreator`] ignores the arguments entirely and replicates a
//!   configured exemplar — the only stateful creator in the system.

use crate::contract::{Context, Contract, Creator};
use crate::creator::{Construct, DefaultCreator, IntoOutput};
use core::any::type_name;
use core::marker::PhantomData;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Chooses the creation strategy for one (contract, implementation) pair.
///
/// The chain builder consults the policy once per pair, at composition time;
/// the chosen creator starts from `Default` and lives inside the chain.
pub trait Policy<Ctx: Contract, Impl> {
    /// The creator type bound to this pair.
    type Creator: Creator<Ctx> + Default;
}

/// The default creation policy: construct the implementation from the
/// forwarded arguments, then convert it into the contract's result type.
///
/// Requires the pair to satisfy both halves of the default validation:
/// [`Construct`] over the contract's arguments and [`IntoOutput`] into its
/// result type.
pub struct DefaultPolicy;

impl<Ctx, Impl> Policy<Ctx, Impl> for DefaultPolicy
where
    Ctx: Contract,
    Impl: Construct<Ctx::Args> + IntoOutput<Ctx::Output>,
{
    type Creator = DefaultCreator<Ctx, Impl>;
}

/// A creator that returns its single argument directly, without constructing
/// the concrete implementation at all.
///
/// Serves contracts whose result type equals their one argument type, such
/// as plain `i32`- or `f32`-valued products.
pub struct ValueCreator<Ctx>(PhantomData<fn() -> Ctx>);

impl<Ctx> Default for ValueCreator<Ctx> {
    #[inline]
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<D, T> Creator<Context<D, T, (T,)>> for ValueCreator<Context<D, T, (T,)>> {
    #[inline]
    fn create(&self, args: (T,)) -> T {
        args.0
    }
}

/// An owning handle able to produce an independent replica of the product it
/// holds.
pub trait Exemplar {
    /// Returns a new handle holding a replica of this one's product.
    fn replicate(&self) -> Self;
}

/// The prototype creation policy: replicates a configured exemplar.
///
/// The held exemplar is the one piece of runtime-mutable state in the whole
/// engine. It is owned by this creator, replaced only through
/// [`set_exemplar`](Self::set_exemplar), and read by every creation call;
/// construction arguments are ignored. The engine provides no locking around
/// it — configure the exemplar before handing the factory to concurrent
/// readers, or guard both sides externally.
///
/// # Panics
///
/// The [`Creator::create`] path panics with [`UninitializedPrototype`]'s
/// message when no exemplar has been configured;
/// [`try_replicate`](Self::try_replicate) is the non-panicking equivalent. A
/// default exemplar is never created silently.
pub struct PrototypeCreator<Ctx: Contract> {
    exemplar: Option<Ctx::Output>,
}

impl<Ctx: Contract> Default for PrototypeCreator<Ctx> {
    #[inline]
    fn default() -> Self {
        Self { exemplar: None }
    }
}

impl<Ctx: Contract> PrototypeCreator<Ctx> {
    /// Replaces the exemplar replicated by subsequent creation calls.
    #[inline]
    pub fn set_exemplar(&mut self, exemplar: Ctx::Output) {
        self.exemplar = Some(exemplar);
    }

    /// Returns the currently configured exemplar, if any.
    #[inline]
    pub fn exemplar(&self) -> Option<&Ctx::Output> {
        self.exemplar.as_ref()
    }

    /// Replicates the configured exemplar, or reports that none is set.
    pub fn try_replicate(&self) -> Result<Ctx::Output, UninitializedPrototype>
    where
        Ctx::Output: Exemplar,
    {
        self.exemplar
            .as_ref()
            .map(Exemplar::replicate)
            .ok_or_else(UninitializedPrototype::new::<Ctx::Descriptor>)
    }
}

impl<Ctx> Creator<Ctx> for PrototypeCreator<Ctx>
where
    Ctx: Contract,
    Ctx::Output: Exemplar,
{
    fn create(&self, _args: Ctx::Args) -> Ctx::Output {
        match self.try_replicate() {
            Ok(replica) => replica,
            Err(e) => panic!("{e}"),
        }
    }
}

/// A prototype creation call happened before any exemplar was configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninitializedPrototype {
    descriptor: &'static str,
}

impl UninitializedPrototype {
    fn new<D>() -> Self {
        Self {
            descriptor: type_name::<D>(),
        }
    }

    /// The type name of the descriptor whose creator had no exemplar.
    #[inline]
    pub fn descriptor(&self) -> &'static str {
        self.descriptor
    }
}

impl Display for UninitializedPrototype {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "uninitialized prototype: no exemplar was configured for `{}`",
            self.descriptor
        )
    }
}

impl Error for UninitializedPrototype {}
