//! Compile-time abstract factories.
//!
//! `fabrik` assembles factories out of types, not registries: an ordered
//! sequence of descriptor tokens names what can be created, a signature
//! generator derives one creation contract (result type plus argument tuple)
//! per descriptor, and binding the sequence to an equally long list of
//! concrete implementations composes one creator per pair into a chain. The
//! resulting factory value is a zero-cost composition — every lookup is a
//! type-level selection, every misconfiguration is a compile error, and the
//! only runtime state is whatever a stateful creation policy (the prototype
//! creator) chooses to carry.
//!
//! # Anatomy
//!
//! - [`descriptor!`] declares descriptor tokens: which product trait they
//!   name, and optionally a non-default result type and argument tuple.
//! - [`AbstractFactory`](factory::AbstractFactory) is the façade: the
//!   descriptor sequence plus the signature generator.
//! - [`ConcreteFactory`](factory::ConcreteFactory) binds the façade to an
//!   implementation sequence through a creation [`Policy`](policy::Policy)
//!   and serves [`create`](factory::ConcreteFactory::create) calls.
//! - [`wraps!`] generates the implementation-to-handle conversions the
//!   default policy validates against.
//!
//! Everything that can go wrong at configuration time is rejected by the
//! compiler; the message catalog lives in [`diagnostic`].
//!
//! # Example
//!
//! ```
//! use fabrik::factory::{AbstractFactory, ConcreteFactory};
//! use fabrik::prelude::*;
//!
//! trait Gear {
//!     fn teeth(&self) -> u32;
//! }
//!
//! trait Axle {
//!     fn length_mm(&self) -> u32;
//! }
//!
//! struct SpurGear {
//!     teeth: u32,
//! }
//!
//! impl Gear for SpurGear {
//!     fn teeth(&self) -> u32 {
//!         self.teeth
//!     }
//! }
//!
//! #[derive(Default)]
//! struct SteelAxle;
//!
//! impl Axle for SteelAxle {
//!     fn length_mm(&self) -> u32 {
//!         120
//!     }
//! }
//!
//! impl Construct<(u32,)> for SpurGear {
//!     fn construct((teeth,): (u32,)) -> Self {
//!         SpurGear { teeth }
//!     }
//! }
//!
//! impl Construct<()> for SteelAxle {
//!     fn construct(_args: ()) -> Self {
//!         SteelAxle
//!     }
//! }
//!
//! fabrik::wraps! {
//!     SpurGear => Box<dyn Gear>;
//!     SteelAxle => Box<dyn Axle>;
//! }
//!
//! fabrik::descriptor! {
//!     struct AnyGear: dyn Gear { args = (u32,); }
//!     struct AnyAxle: dyn Axle;
//! }
//!
//! type Config = AbstractFactory<fabrik::sequence![AnyGear, AnyAxle]>;
//! type Workshop = ConcreteFactory<Config, fabrik::sequence![SpurGear, SteelAxle]>;
//!
//! let workshop = Workshop::new();
//! let gear = workshop.create::<AnyGear, _, _>((24,));
//! let axle = workshop.create::<AnyAxle, _, _>(());
//! assert_eq!(gear.teeth(), 24);
//! assert_eq!(axle.length_mm(), 120);
//! ```
//!
//! Consumers that only need one creation contract can stay generic over the
//! factory through [`Select`](chain::Select), or hold a
//! `&dyn Creator<Ctx>` — either way they never name the concrete
//! composition.

#![deny(missing_docs)]

pub mod chain;
pub mod contract;
pub mod creator;
pub mod descriptor;
pub mod diagnostic;
pub mod factory;
pub mod policy;
pub mod sequence;

/// Everything a factory integrator usually needs in scope.
///
/// Deliberately excludes [`AbstractFactory`](factory::AbstractFactory) and
/// [`ConcreteFactory`](factory::ConcreteFactory): the two composition types
/// are the heart of a configuration and read better imported by name.
pub mod prelude {
    pub use crate::chain::{BuildChain, End, Here, Link, Select, There};
    pub use crate::contract::{Context, ContextOf, Contract, ContractFor, Creator, Declared};
    pub use crate::creator::{Construct, DefaultCreator, IntoOutput};
    pub use crate::descriptor::{Adapted, Descriptor};
    pub use crate::diagnostic::ArgumentsMatch;
    pub use crate::factory::{ChainOf, Configuration, Contracts};
    pub use crate::policy::{
        DefaultPolicy, Exemplar, Policy, PrototypeCreator, UninitializedPrototype, ValueCreator,
    };
    pub use crate::sequence::{ArgList, Cons, Nil, TypeSequence};
}
