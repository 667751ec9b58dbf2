//! A gallery of products exercising every part of the factory engine.
//!
//! This crate is not published. It exists to validate `fabrik` from the
//! outside, the way an integrating crate would use it: product traits and
//! concrete implementations live here, descriptors are declared here, and the
//! factory configurations below are consumed by the integration tests in
//! `tests/`.
//!
//! The gallery deliberately covers one of everything:
//!
//! - [`AnyPawn`]: all defaults (owning `Box` handle, no arguments).
//! - [`AnyBillboard`]: a shared `Arc` handle.
//! - [`AnyGauge`]: a raw handle built from a `(bool, i32)` argument tuple.
//! - [`LegacyToken`]: a pre-existing interface adapted from the outside.
//! - [`IntReading`]/[`FloatReading`]: plain-value contracts served by the
//!   value creation policy.
//! - [`StampA`]/[`StampB`]: two descriptors over one product trait, each
//!   served by its own prototype creator.
//! - [`RawHandles`]: an alternate signature generator deriving raw-handle
//!   contracts for descriptors that declared owning ones.

use fabrik::factory::{AbstractFactory, ConcreteFactory};
use fabrik::prelude::*;
use std::sync::Arc;

// === Product interfaces and implementations ===

pub trait Pawn {
    fn material(&self) -> &str;
}

#[derive(Default)]
pub struct WoodenPawn;

impl Pawn for WoodenPawn {
    fn material(&self) -> &str {
        "wood"
    }
}

pub trait Billboard {
    fn slogan(&self) -> &str;
}

pub struct NeonBillboard;

impl Billboard for NeonBillboard {
    fn slogan(&self) -> &str {
        "open all night"
    }
}

pub trait Gauge {
    fn calibrated(&self) -> bool;
    fn offset(&self) -> i32;
}

pub struct DialGauge {
    calibrated: bool,
    offset: i32,
}

impl Gauge for DialGauge {
    fn calibrated(&self) -> bool {
        self.calibrated
    }

    fn offset(&self) -> i32 {
        self.offset
    }
}

/// An interface standing in for one we cannot edit: it declares no creation
/// traits, so its descriptor is synthesized with [`Adapted`].
pub trait Legacy {
    fn reading(&self) -> i32;
}

pub struct LegacyMeter;

impl Legacy for LegacyMeter {
    fn reading(&self) -> i32 {
        42
    }
}

pub trait Stamp {
    fn label(&self) -> &str;
    fn set_label(&mut self, label: &str);
    fn replicate_stamp(&self) -> Box<dyn Stamp>;
}

pub struct InkStamp {
    label: String,
}

impl InkStamp {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_owned(),
        }
    }
}

impl Stamp for InkStamp {
    fn label(&self) -> &str {
        &self.label
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_owned();
    }

    fn replicate_stamp(&self) -> Box<dyn Stamp> {
        Box::new(InkStamp {
            label: self.label.clone(),
        })
    }
}

impl Exemplar for Box<dyn Stamp> {
    fn replicate(&self) -> Self {
        self.replicate_stamp()
    }
}

// === Constructibility and handle conversions ===

impl Construct<()> for WoodenPawn {
    fn construct(_args: ()) -> Self {
        WoodenPawn
    }
}

impl Construct<()> for NeonBillboard {
    fn construct(_args: ()) -> Self {
        NeonBillboard
    }
}

impl Construct<(bool, i32)> for DialGauge {
    fn construct((calibrated, offset): (bool, i32)) -> Self {
        DialGauge { calibrated, offset }
    }
}

impl Construct<()> for LegacyMeter {
    fn construct(_args: ()) -> Self {
        LegacyMeter
    }
}

fabrik::wraps! {
    WoodenPawn => Box<dyn Pawn>;
    WoodenPawn => *mut dyn Pawn;
    NeonBillboard => Arc<dyn Billboard>;
    DialGauge => *mut dyn Gauge;
    LegacyMeter => Arc<dyn Legacy>;
}

// === Descriptors ===

fabrik::descriptor! {
    /// All defaults: `Box<dyn Pawn>` out of no arguments.
    pub struct AnyPawn: dyn Pawn;

    /// A shared handle.
    pub struct AnyBillboard: dyn Billboard {
        output = Arc<dyn Billboard>;
    }

    /// A raw handle, built from a calibration pair. Callers reclaim it.
    pub struct AnyGauge: dyn Gauge {
        output = *mut dyn Gauge;
        args = (bool, i32);
    }

    /// First of two stamp descriptors over the same product trait.
    pub struct StampA: dyn Stamp;

    /// Second of two stamp descriptors over the same product trait.
    pub struct StampB: dyn Stamp;
}

/// [`Legacy`] adapted from the outside: shared handle, no arguments.
pub type LegacyToken = Adapted<dyn Legacy, Arc<dyn Legacy>>;

/// A plain-value contract: creation returns the `i32` it was given.
pub struct IntReading;

impl Descriptor for IntReading {
    type Product = i32;
    type Output = i32;
    type Args = (i32,);
}

/// A plain-value contract over `f32`.
pub struct FloatReading;

impl Descriptor for FloatReading {
    type Product = f32;
    type Output = f32;
    type Args = (f32,);
}

// === The gallery policy: an explicit override map ===

/// The creation policy for the gallery factory.
///
/// Written out pair by pair: the four constructing pairs keep the default
/// creator, the two reading descriptors take the value creator, and the two
/// stamp descriptors each get their own prototype creator.
pub struct GalleryPolicy;

impl Policy<ContextOf<AnyPawn>, WoodenPawn> for GalleryPolicy {
    type Creator = DefaultCreator<ContextOf<AnyPawn>, WoodenPawn>;
}

impl Policy<ContextOf<AnyBillboard>, NeonBillboard> for GalleryPolicy {
    type Creator = DefaultCreator<ContextOf<AnyBillboard>, NeonBillboard>;
}

impl Policy<ContextOf<AnyGauge>, DialGauge> for GalleryPolicy {
    type Creator = DefaultCreator<ContextOf<AnyGauge>, DialGauge>;
}

impl Policy<ContextOf<LegacyToken>, LegacyMeter> for GalleryPolicy {
    type Creator = DefaultCreator<ContextOf<LegacyToken>, LegacyMeter>;
}

impl Policy<ContextOf<IntReading>, i32> for GalleryPolicy {
    type Creator = ValueCreator<ContextOf<IntReading>>;
}

impl Policy<ContextOf<FloatReading>, f32> for GalleryPolicy {
    type Creator = ValueCreator<ContextOf<FloatReading>>;
}

impl Policy<ContextOf<StampA>, InkStamp> for GalleryPolicy {
    type Creator = PrototypeCreator<ContextOf<StampA>>;
}

impl Policy<ContextOf<StampB>, InkStamp> for GalleryPolicy {
    type Creator = PrototypeCreator<ContextOf<StampB>>;
}

// === Factory configurations ===

/// The full gallery, in declaration order.
pub type GalleryDescriptors = fabrik::sequence![
    AnyPawn,
    AnyBillboard,
    AnyGauge,
    LegacyToken,
    IntReading,
    FloatReading,
    StampA,
    StampB,
];

/// One implementation per descriptor, positionally. Value-served slots name
/// the value type itself.
pub type GalleryImpls = fabrik::sequence![
    WoodenPawn,
    NeonBillboard,
    DialGauge,
    LegacyMeter,
    i32,
    f32,
    InkStamp,
    InkStamp,
];

pub type GalleryConfig = AbstractFactory<GalleryDescriptors>;
pub type GalleryFactory = ConcreteFactory<GalleryConfig, GalleryImpls, GalleryPolicy>;

/// An alternate signature generator: every contract produces a raw handle to
/// its product, whatever the descriptor declared.
pub struct RawHandles;

impl<D: Descriptor> ContractFor<D> for RawHandles {
    type Output = *mut D::Product;
    type Args = D::Args;
}

pub type RawConfig = AbstractFactory<fabrik::sequence![AnyPawn, AnyGauge], RawHandles>;
pub type RawFactory = ConcreteFactory<RawConfig, fabrik::sequence![WoodenPawn, DialGauge]>;
