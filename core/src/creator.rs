//! The default concrete creator and its constructibility contracts.
//!
//! The default creation policy builds the concrete implementation from the
//! forwarded arguments, then converts it into the contract's result type.
//! Both steps are spelled out as traits so that a misconfigured pair is
//! rejected by the compiler with a message naming the offending side: see
//! [`Construct`] and [`IntoOutput`], and the catalog in
//! [`diagnostic`](crate::diagnostic).

use crate::contract::{Contract, Creator};
use core::marker::PhantomData;

/// Constructs an implementation from an ordered argument tuple.
///
/// This is the constructibility half of the default policy's validation: the
/// concrete type must accept exactly the contract's argument tuple, in order.
/// Implemented by integrators for each concrete product.
#[diagnostic::on_unimplemented(
    message = "implementation is not constructible from the given arguments: `{Self}` has no constructor taking `{Args}`",
    label = "`{Self}` cannot be constructed from `{Args}`",
    note = "implement `Construct<{Args}>` for `{Self}`, or bind this descriptor to a custom creation policy"
)]
pub trait Construct<Args>: Sized {
    /// Builds a value from the forwarded arguments, in order.
    fn construct(args: Args) -> Self;
}

/// Converts a freshly constructed implementation into a contract's result
/// type.
///
/// This is the convertibility half of the default policy's validation. The
/// [`wraps!`](crate::wraps) macro generates these impls for the standard
/// handle shapes (`Box<dyn P>`, `Arc<dyn P>`, `Rc<dyn P>`, `*mut dyn P`).
#[diagnostic::on_unimplemented(
    message = "result type is not constructible from the implementation: `{O}` cannot be produced from `{Self}`",
    label = "no conversion from `{Self}` into `{O}`",
    note = "the `fabrik::wraps!` macro generates these conversions for the standard handle shapes"
)]
pub trait IntoOutput<O> {
    /// Wraps or converts the implementation into the result value.
    fn into_output(self) -> O;
}

/// The default creation policy for one (contract, implementation) pair.
///
/// Constructs `Impl` from the forwarded arguments and converts it into the
/// contract's result type. Carries no state.
pub struct DefaultCreator<Ctx, Impl>(PhantomData<fn() -> (Ctx, Impl)>);

impl<Ctx, Impl> Default for DefaultCreator<Ctx, Impl> {
    #[inline]
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<Ctx, Impl> Creator<Ctx> for DefaultCreator<Ctx, Impl>
where
    Ctx: Contract,
    Impl: Construct<Ctx::Args> + IntoOutput<Ctx::Output>,
{
    #[inline]
    fn create(&self, args: Ctx::Args) -> Ctx::Output {
        Impl::construct(args).into_output()
    }
}

/// Generates [`IntoOutput`] conversions from concrete implementations into
/// the standard handle shapes.
///
/// Each entry pairs an implementation type with one handle shape it converts
/// into, written literally as `Box<dyn P>`, `Arc<dyn P>`, `Rc<dyn P>` or
/// `*mut dyn P`. Raw-handle conversions transfer ownership to the caller,
/// which is expected to reclaim it (e.g. with `Box::from_raw`).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// trait Gear {}
/// struct SpurGear;
/// impl Gear for SpurGear {}
///
/// fabrik::wraps! {
///     SpurGear => Box<dyn Gear>;
///     SpurGear => Arc<dyn Gear>;
/// }
/// ```
#[macro_export]
macro_rules! wraps {
    () => {};
    ($impl_ty:ty => Box<dyn $product:path>; $($rest:tt)*) => {
        impl $crate::creator::IntoOutput<::std::boxed::Box<dyn $product>> for $impl_ty {
            #[inline]
            fn into_output(self) -> ::std::boxed::Box<dyn $product> {
                ::std::boxed::Box::new(self)
            }
        }
        $crate::wraps!($($rest)*);
    };
    ($impl_ty:ty => Arc<dyn $product:path>; $($rest:tt)*) => {
        impl $crate::creator::IntoOutput<::std::sync::Arc<dyn $product>> for $impl_ty {
            #[inline]
            fn into_output(self) -> ::std::sync::Arc<dyn $product> {
                ::std::sync::Arc::new(self)
            }
        }
        $crate::wraps!($($rest)*);
    };
    ($impl_ty:ty => Rc<dyn $product:path>; $($rest:tt)*) => {
        impl $crate::creator::IntoOutput<::std::rc::Rc<dyn $product>> for $impl_ty {
            #[inline]
            fn into_output(self) -> ::std::rc::Rc<dyn $product> {
                ::std::rc::Rc::new(self)
            }
        }
        $crate::wraps!($($rest)*);
    };
    ($impl_ty:ty => *mut dyn $product:path; $($rest:tt)*) => {
        impl $crate::creator::IntoOutput<*mut dyn $product> for $impl_ty {
            #[inline]
            fn into_output(self) -> *mut dyn $product {
                ::std::boxed::Box::into_raw(::std::boxed::Box::new(self))
            }
        }
        $crate::wraps!($($rest)*);
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Context;

    trait Widgetish {
        fn id(&self) -> u32;
    }

    struct Widget(u32);

    impl Widgetish for Widget {
        fn id(&self) -> u32 {
            self.0
        }
    }

    impl Construct<(u32,)> for Widget {
        fn construct((id,): (u32,)) -> Self {
            Widget(id)
        }
    }

    crate::wraps! {
        Widget => Box<dyn Widgetish>;
        Widget => Arc<dyn Widgetish>;
        Widget => *mut dyn Widgetish;
    }

    struct Tag;

    #[test]
    fn default_creator_constructs_then_wraps() {
        let creator: DefaultCreator<Context<Tag, Box<dyn Widgetish>, (u32,)>, Widget> =
            DefaultCreator::default();
        assert_eq!(creator.create((7,)).id(), 7);
    }

    #[test]
    fn shared_handles_are_fresh_per_call() {
        let creator: DefaultCreator<Context<Tag, std::sync::Arc<dyn Widgetish>, (u32,)>, Widget> =
            DefaultCreator::default();
        let first = creator.create((1,));
        let second = creator.create((1,));
        assert!(!std::sync::Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn raw_handles_transfer_ownership() {
        let creator: DefaultCreator<Context<Tag, *mut dyn Widgetish, (u32,)>, Widget> =
            DefaultCreator::default();
        let raw = creator.create((3,));
        // SAFETY: `raw` was produced by `Box::into_raw` in the generated
        // conversion and is reclaimed exactly once.
        let reclaimed = unsafe { Box::from_raw(raw) };
        assert_eq!(reclaimed.id(), 3);
    }
}
