//! The catalog of configuration-time failures.
//!
//! Every malformed configuration is rejected by the compiler before a
//! factory value can exist — no failure is ever deferred to a call-time
//! error. The messages below are part of the public contract; each one is
//! attached (via `#[diagnostic::on_unimplemented]`) to the trait whose
//! unsatisfied bound detects the misconfiguration, so the compiler reports
//! it against the offending descriptor/implementation pair.
//!
//! | Failure | Detected by | Message contains |
//! |---|---|---|
//! | Unknown product | [`Select`](crate::chain::Select) | "wrong product type" |
//! | Argument mismatch | [`ArgumentsMatch`] | "wrong arguments" |
//! | Length mismatch | [`BuildChain`](crate::chain::BuildChain) | "descriptor and implementation lists are of different length" |
//! | Non-constructible concrete | [`Construct`](crate::creator::Construct) | "implementation is not constructible from the given arguments" |
//! | Non-convertible result | [`IntoOutput`](crate::creator::IntoOutput) | "result type is not constructible from the implementation" |
//!
//! The examples below each fail to compile, one per catalog entry.
//!
//! # Unknown product
//!
//! Requesting a descriptor that is not part of the factory's configured
//! sequence:
//!
//! ```compile_fail,E0277
//! use fabrik::factory::{AbstractFactory, ConcreteFactory};
//! use fabrik::prelude::*;
//!
//! trait Bolt {}
//! struct SteelBolt;
//! impl Bolt for SteelBolt {}
//! impl Construct<()> for SteelBolt {
//!     fn construct(_args: ()) -> Self { SteelBolt }
//! }
//! fabrik::wraps! { SteelBolt => Box<dyn Bolt>; }
//!
//! fabrik::descriptor! {
//!     struct AnyBolt: dyn Bolt;
//!     struct AnyNut: dyn Bolt;
//! }
//!
//! type Config = AbstractFactory<fabrik::sequence![AnyBolt]>;
//! let factory = ConcreteFactory::<Config, fabrik::sequence![SteelBolt]>::new();
//! // `AnyNut` is not in the descriptor sequence: wrong product type.
//! let _ = factory.create::<AnyNut, _, _>(());
//! ```
//!
//! # Argument mismatch
//!
//! Supplying arguments that do not match the descriptor's resolved argument
//! sequence, in arity or in type:
//!
//! ```compile_fail,E0277
//! use fabrik::factory::{AbstractFactory, ConcreteFactory};
//! use fabrik::prelude::*;
//!
//! trait Bolt {}
//! struct SteelBolt;
//! impl Bolt for SteelBolt {}
//! impl Construct<()> for SteelBolt {
//!     fn construct(_args: ()) -> Self { SteelBolt }
//! }
//! fabrik::wraps! { SteelBolt => Box<dyn Bolt>; }
//!
//! fabrik::descriptor! {
//!     struct AnyBolt: dyn Bolt;
//! }
//!
//! type Config = AbstractFactory<fabrik::sequence![AnyBolt]>;
//! let factory = ConcreteFactory::<Config, fabrik::sequence![SteelBolt]>::new();
//! // `AnyBolt` takes no arguments: wrong arguments.
//! let _ = factory.create::<AnyBolt, _, _>((true,));
//! ```
//!
//! # Length mismatch
//!
//! Zipping a descriptor sequence with an implementation sequence of a
//! different length fails during composition, before any creation call:
//!
//! ```compile_fail,E0277
//! use fabrik::factory::{AbstractFactory, ConcreteFactory};
//! use fabrik::prelude::*;
//!
//! trait Bolt {}
//! struct SteelBolt;
//! impl Bolt for SteelBolt {}
//! impl Construct<()> for SteelBolt {
//!     fn construct(_args: ()) -> Self { SteelBolt }
//! }
//! fabrik::wraps! { SteelBolt => Box<dyn Bolt>; }
//!
//! fabrik::descriptor! {
//!     struct AnyBolt: dyn Bolt;
//!     struct SpareBolt: dyn Bolt;
//! }
//!
//! // Two descriptors, one implementation.
//! type Config = AbstractFactory<fabrik::sequence![AnyBolt, SpareBolt]>;
//! let _factory = ConcreteFactory::<Config, fabrik::sequence![SteelBolt]>::new();
//! ```
//!
//! # Non-constructible concrete
//!
//! Under the default policy, the implementation must be constructible from
//! the contract's argument sequence:
//!
//! ```compile_fail,E0277
//! use fabrik::factory::{AbstractFactory, ConcreteFactory};
//! use fabrik::prelude::*;
//!
//! trait Bolt {}
//! struct LooseBolt;
//! impl Bolt for LooseBolt {}
//! // No `Construct<()>` impl for `LooseBolt`.
//! fabrik::wraps! { LooseBolt => Box<dyn Bolt>; }
//!
//! fabrik::descriptor! {
//!     struct AnyBolt: dyn Bolt;
//! }
//!
//! type Config = AbstractFactory<fabrik::sequence![AnyBolt]>;
//! let _factory = ConcreteFactory::<Config, fabrik::sequence![LooseBolt]>::new();
//! ```
//!
//! # Non-convertible result
//!
//! Under the default policy, the contract's result type must be producible
//! from a freshly constructed implementation:
//!
//! ```compile_fail,E0277
//! use fabrik::factory::{AbstractFactory, ConcreteFactory};
//! use fabrik::prelude::*;
//!
//! trait Bolt {}
//! struct BrassBolt;
//! impl Bolt for BrassBolt {}
//! impl Construct<()> for BrassBolt {
//!     fn construct(_args: ()) -> Self { BrassBolt }
//! }
//! // No conversion from `BrassBolt` into `Box<dyn Bolt>`.
//!
//! fabrik::descriptor! {
//!     struct AnyBolt: dyn Bolt;
//! }
//!
//! type Config = AbstractFactory<fabrik::sequence![AnyBolt]>;
//! let _factory = ConcreteFactory::<Config, fabrik::sequence![BrassBolt]>::new();
//! ```

/// Witnesses that the supplied argument tuple is exactly the contract's
/// resolved argument sequence.
///
/// Only the identity impl exists: arguments are positional and must match in
/// count and type, with no widening beyond ordinary coercion at the call
/// site.
#[diagnostic::on_unimplemented(
    message = "wrong arguments: this creation call takes `{T}`, not `{Self}`",
    label = "argument tuple does not match the descriptor's resolved argument sequence",
    note = "arguments are positional and must match exactly, in count and type"
)]
pub trait ArgumentsMatch<T> {
    /// Returns the arguments, pinned to the contract's exact tuple type.
    fn into_ordered(self) -> T;
}

impl<T> ArgumentsMatch<T> for T {
    #[inline]
    fn into_ordered(self) -> T {
        self
    }
}
