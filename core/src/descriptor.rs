//! Product descriptors and the resolution of their creation traits.
//!
//! A descriptor is a type token identifying one abstract product family. Its
//! creation call may be customized along two axes: the result type it returns
//! (an owning handle by default) and the ordered argument tuple it accepts
//! (empty by default). The [`descriptor!`] macro is where that resolution
//! happens: omitted declarations get their defaults filled in once, at
//! declaration time, and the resulting [`Descriptor`] impl is the immutable
//! configuration record everything downstream reads. Opting out of both
//! customizations is always valid.
//!
//! Product interfaces that cannot be edited to declare creation traits are
//! wrapped with [`Adapted`], which attaches an explicitly supplied result
//! type and argument tuple from the outside.

use crate::sequence::ArgList;
use core::marker::PhantomData;

/// A resolved product descriptor.
///
/// Descriptors are immutable compile-time entities; they carry no runtime
/// state and are never instantiated. Impls are normally generated by the
/// [`descriptor!`] macro, which applies the defaults for omitted
/// declarations, but hand-written impls are equally valid.
pub trait Descriptor: Sized + 'static {
    /// The product interface callers interact with.
    type Product: ?Sized + 'static;

    /// The value produced by a creation call for this descriptor.
    ///
    /// Defaults to `Box<Self::Product>`, an owning handle.
    type Output;

    /// The ordered argument tuple a creation call accepts.
    ///
    /// Defaults to `()`, the empty argument list.
    type Args: ArgList;
}

/// A synthesized descriptor for a product interface that cannot declare
/// creation traits itself.
///
/// This wraps an existing interface and carries the desired result type and
/// argument tuple externally, so pre-existing types enter the factory
/// pipeline unmodified.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use fabrik::descriptor::{Adapted, Descriptor};
///
/// // An interface from another crate, not ours to edit.
/// trait Legacy {}
///
/// // Created as a shared handle, with no constructor arguments.
/// type LegacyToken = Adapted<dyn Legacy, Arc<dyn Legacy>>;
///
/// fn assert_descriptor<D: Descriptor>() {}
/// assert_descriptor::<LegacyToken>();
/// ```
pub struct Adapted<P: ?Sized, Output, Args = ()>(PhantomData<fn(*const P) -> (Output, Args)>);

impl<P, Output, Args> Descriptor for Adapted<P, Output, Args>
where
    P: ?Sized + 'static,
    Output: 'static,
    Args: ArgList + 'static,
{
    type Product = P;
    type Output = Output;
    type Args = Args;
}

/// Declares descriptor tokens, resolving their creation traits.
///
/// Each entry names a token type and the product interface it identifies,
/// optionally followed by `output` and/or `args` declarations in braces (in
/// that order). Omitted declarations resolve to their defaults: an owning
/// `Box` handle to the product, and an empty argument tuple.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// pub trait Gear { fn teeth(&self) -> u32; }
///
/// fabrik::descriptor! {
///     /// Everything defaulted: `Box<dyn Gear>` out of no arguments.
///     pub struct AnyGear: dyn Gear;
///
///     /// A shared handle, built from a tooth count.
///     pub struct SharedGear: dyn Gear {
///         output = Arc<dyn Gear>;
///         args = (u32,);
///     }
/// }
/// ```
#[macro_export]
macro_rules! descriptor {
    () => {};
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $product:ty {
            output = $output:ty;
            args = $args:ty;
        }
        $($rest:tt)*
    ) => {
        $crate::__descriptor_entry!($(#[$meta])* $vis struct $name: $product => $output, $args);
        $crate::descriptor!($($rest)*);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $product:ty {
            output = $output:ty;
        }
        $($rest:tt)*
    ) => {
        $crate::__descriptor_entry!($(#[$meta])* $vis struct $name: $product => $output, ());
        $crate::descriptor!($($rest)*);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $product:ty {
            args = $args:ty;
        }
        $($rest:tt)*
    ) => {
        $crate::__descriptor_entry!(
            $(#[$meta])* $vis struct $name: $product => ::std::boxed::Box<$product>, $args
        );
        $crate::descriptor!($($rest)*);
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident: $product:ty;
        $($rest:tt)*
    ) => {
        $crate::__descriptor_entry!(
            $(#[$meta])* $vis struct $name: $product => ::std::boxed::Box<$product>, ()
        );
        $crate::descriptor!($($rest)*);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __descriptor_entry {
    ($(#[$meta:meta])* $vis:vis struct $name:ident: $product:ty => $output:ty, $args:ty) => {
        $(#[$meta])*
        $vis struct $name;

        impl $crate::descriptor::Descriptor for $name {
            type Product = $product;
            type Output = $output;
            type Args = $args;
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;
    use std::rc::Rc;

    trait Gadget {}

    crate::descriptor! {
        /// Every default applied.
        struct Plain: dyn Gadget;

        struct Shared: dyn Gadget {
            output = Rc<dyn Gadget>;
        }

        struct Tuned: dyn Gadget {
            output = Rc<dyn Gadget>;
            args = (u8, u8);
        }

        struct WithArgs: dyn Gadget {
            args = (bool,);
        }
    }

    #[test]
    fn omitted_declarations_resolve_to_defaults() {
        assert_type_eq_all!(<Plain as Descriptor>::Output, Box<dyn Gadget>);
        assert_type_eq_all!(<Plain as Descriptor>::Args, ());
        assert_type_eq_all!(<Shared as Descriptor>::Args, ());
        assert_type_eq_all!(<WithArgs as Descriptor>::Output, Box<dyn Gadget>);
    }

    #[test]
    fn declared_traits_override_defaults() {
        assert_type_eq_all!(<Shared as Descriptor>::Output, Rc<dyn Gadget>);
        assert_type_eq_all!(<Tuned as Descriptor>::Output, Rc<dyn Gadget>);
        assert_type_eq_all!(<Tuned as Descriptor>::Args, (u8, u8));
        assert_type_eq_all!(<WithArgs as Descriptor>::Args, (bool,));
    }

    #[test]
    fn adapter_attaches_traits_externally() {
        type Wrapped = Adapted<dyn Gadget, Rc<dyn Gadget>, (i32,)>;
        assert_type_eq_all!(<Wrapped as Descriptor>::Output, Rc<dyn Gadget>);
        assert_type_eq_all!(<Wrapped as Descriptor>::Args, (i32,));
        assert_type_eq_all!(<Adapted<dyn Gadget, i64> as Descriptor>::Args, ());
    }
}
