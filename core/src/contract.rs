//! Creation contracts: the one thing dispatch and creators agree on.
//!
//! A contract is the resolved identity of one creation path: the descriptor
//! it is tagged with, the result type it produces and the argument tuple it
//! accepts. Contracts are derived from descriptors once, at configuration
//! time, by a signature generator; [`Declared`] is the default generator and
//! simply reads the descriptor's resolved traits. An alternate generator may
//! derive contracts differently for the same descriptors (for instance,
//! forcing raw handles everywhere), which is how the request shape is
//! decoupled from how products are actually built.

use crate::descriptor::Descriptor;
use crate::sequence::ArgList;
use core::marker::PhantomData;

/// The resolved identity of one creation contract: descriptor, result type
/// and argument tuple.
///
/// A context is a pure type token; one exists per descriptor in a factory
/// configuration, and it never changes after being derived.
pub struct Context<D, Output, Args>(PhantomData<fn() -> (D, Output, Args)>);

/// A factory context, viewed through its three components.
pub trait Contract {
    /// The descriptor this contract is tagged with.
    type Descriptor;

    /// The result type a creation call produces.
    type Output;

    /// The ordered argument tuple a creation call accepts.
    type Args: ArgList;
}

impl<D, Output, Args: ArgList> Contract for Context<D, Output, Args> {
    type Descriptor = D;
    type Output = Output;
    type Args = Args;
}

/// Derives the creation contract for descriptor `D`.
///
/// This is the signature generator seam: [`Declared`] keeps the descriptor's
/// resolved traits as-is, while custom generators may override either
/// component for every descriptor they are asked about.
pub trait ContractFor<D: Descriptor> {
    /// The result type the derived contract exposes for `D`.
    type Output;

    /// The argument tuple the derived contract exposes for `D`.
    type Args: ArgList;
}

/// The default signature generator: uses each descriptor's declared (or
/// defaulted) result type and argument tuple unchanged.
pub struct Declared;

impl<D: Descriptor> ContractFor<D> for Declared {
    type Output = D::Output;
    type Args = D::Args;
}

/// The contract derived for descriptor `D` under signature generator `S`.
pub type ContextOf<D, S = Declared> =
    Context<D, <S as ContractFor<D>>::Output, <S as ContractFor<D>>::Args>;

/// One creation contract, implemented by a creator: produce the context's
/// result from its arguments.
///
/// This trait is object-safe for any given context, so callers may hold a
/// `&dyn Creator<Ctx>` without knowing which concrete creator (or factory
/// composition) stands behind it.
pub trait Creator<Ctx: Contract> {
    /// Produces one result value from the forwarded arguments.
    fn create(&self, args: Ctx::Args) -> Ctx::Output;
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    trait Meter {}

    crate::descriptor! {
        struct Spark: dyn Meter {
            args = (u16,);
        }
    }

    /// Overrides every result type with a raw handle to the product.
    struct RawEverywhere;

    impl<D: Descriptor> ContractFor<D> for RawEverywhere {
        type Output = *mut D::Product;
        type Args = D::Args;
    }

    #[test]
    fn declared_generator_reads_descriptor_traits() {
        assert_type_eq_all!(ContextOf<Spark>, Context<Spark, Box<dyn Meter>, (u16,)>);
    }

    #[test]
    fn custom_generator_overrides_the_result_type() {
        assert_type_eq_all!(
            ContextOf<Spark, RawEverywhere>,
            Context<Spark, *mut dyn Meter, (u16,)>
        );
    }

    #[test]
    fn contexts_expose_their_components() {
        assert_type_eq_all!(<ContextOf<Spark> as Contract>::Descriptor, Spark);
        assert_type_eq_all!(<ContextOf<Spark> as Contract>::Args, (u16,));
    }
}
