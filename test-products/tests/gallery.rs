use fabrik::prelude::*;
use fabrik_test_products::*;
use static_assertions::{assert_type_eq_all, const_assert_eq};
use std::sync::Arc;

const_assert_eq!(
    <GalleryDescriptors as TypeSequence>::LEN,
    <GalleryImpls as TypeSequence>::LEN
);

assert_type_eq_all!(<ContextOf<AnyPawn> as Contract>::Output, Box<dyn Pawn>);
assert_type_eq_all!(
    <ContextOf<AnyBillboard> as Contract>::Output,
    Arc<dyn Billboard>
);
assert_type_eq_all!(<ContextOf<AnyGauge> as Contract>::Args, (bool, i32));
assert_type_eq_all!(
    <ContextOf<AnyPawn, RawHandles> as Contract>::Output,
    *mut dyn Pawn
);

#[test]
fn default_contract_yields_an_owning_handle() {
    let factory = GalleryFactory::new();
    let pawn: Box<dyn Pawn> = factory.create::<AnyPawn, _, _>(());
    assert_eq!(pawn.material(), "wood");
}

#[test]
fn shared_handles_are_independent_per_call() {
    let factory = GalleryFactory::new();
    let first: Arc<dyn Billboard> = factory.create::<AnyBillboard, _, _>(());
    let second = factory.create::<AnyBillboard, _, _>(());
    assert_eq!(first.slogan(), "open all night");
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn independent_factories_never_alias_shared_handles() {
    let one = GalleryFactory::new();
    let two = GalleryFactory::new();
    let from_one = one.create::<AnyBillboard, _, _>(());
    let from_two = two.create::<AnyBillboard, _, _>(());
    assert!(!Arc::ptr_eq(&from_one, &from_two));
}

#[test]
fn arguments_forward_positionally_to_the_constructor() {
    let factory = GalleryFactory::new();
    let raw = factory.create::<AnyGauge, _, _>((true, 5));
    // SAFETY: the raw handle was produced by `Box::into_raw` in the generated
    // conversion and is reclaimed exactly once.
    let gauge = unsafe { Box::from_raw(raw) };
    assert!(gauge.calibrated());
    assert_eq!(gauge.offset(), 5);
}

#[test]
fn adapted_interfaces_create_like_declared_ones() {
    let factory = GalleryFactory::new();
    let meter: Arc<dyn Legacy> = factory.create::<LegacyToken, _, _>(());
    assert_eq!(meter.reading(), 42);
}

#[test]
fn value_contracts_return_the_argument_directly() {
    let factory = GalleryFactory::new();
    assert_eq!(factory.create::<IntReading, _, _>((12,)), 12);
    assert_eq!(factory.create::<FloatReading, _, _>((0.5,)), 0.5);
}

#[test]
fn prototypes_replicate_their_own_exemplar_only() {
    let mut factory = GalleryFactory::new();
    factory
        .creator_mut::<StampA, _>()
        .set_exemplar(Box::new(InkStamp::new("alpha")));
    factory
        .creator_mut::<StampB, _>()
        .set_exemplar(Box::new(InkStamp::new("beta")));

    assert_eq!(factory.create::<StampA, _, _>(()).label(), "alpha");
    assert_eq!(factory.create::<StampB, _, _>(()).label(), "beta");
}

#[test]
fn replicas_are_independent_of_the_exemplar() {
    let mut factory = GalleryFactory::new();
    factory
        .creator_mut::<StampA, _>()
        .set_exemplar(Box::new(InkStamp::new("original")));

    let mut replica = factory.create::<StampA, _, _>(());
    replica.set_label("changed");

    let exemplar = factory.creator::<StampA, _>().exemplar();
    assert_eq!(exemplar.map(|e| e.label()), Some("original"));
    assert_eq!(factory.create::<StampA, _, _>(()).label(), "original");
}

#[test]
fn unset_exemplar_reports_a_distinct_error() {
    let factory = GalleryFactory::new();
    let err = match factory.creator::<StampA, _>().try_replicate() {
        Ok(_) => panic!("replication succeeded without an exemplar"),
        Err(err) => err,
    };
    assert!(err.descriptor().contains("StampA"));
    assert!(err.to_string().contains("uninitialized prototype"));
}

#[test]
#[should_panic(expected = "uninitialized prototype")]
fn creating_without_an_exemplar_panics() {
    let factory = GalleryFactory::new();
    let _ = factory.create::<StampA, _, _>(());
}

#[test]
fn identical_configurations_behave_identically() {
    let one = GalleryFactory::new();
    let two = GalleryFactory::default();
    assert_eq!(
        one.create::<AnyPawn, _, _>(()).material(),
        two.create::<AnyPawn, _, _>(()).material()
    );
}

#[test]
fn consumers_stay_generic_over_the_composition() {
    fn pawn_from<F, I>(factory: &F) -> Box<dyn Pawn>
    where
        F: Select<ContextOf<AnyPawn>, I>,
    {
        factory.creator().create(())
    }

    let factory = GalleryFactory::new();
    assert_eq!(pawn_from(&factory).material(), "wood");

    let held: &dyn Creator<ContextOf<AnyPawn>> = factory.creator::<AnyPawn, _>();
    assert_eq!(held.create(()).material(), "wood");
}

#[test]
fn alternate_generators_rederive_every_contract() {
    let factory = RawFactory::new();

    let raw_pawn = factory.create::<AnyPawn, _, _>(());
    // SAFETY: produced by `Box::into_raw` in the generated conversion,
    // reclaimed exactly once.
    let pawn = unsafe { Box::from_raw(raw_pawn) };
    assert_eq!(pawn.material(), "wood");

    let raw_gauge = factory.create::<AnyGauge, _, _>((false, -3));
    // SAFETY: produced by `Box::into_raw` in the generated conversion,
    // reclaimed exactly once.
    let gauge = unsafe { Box::from_raw(raw_gauge) };
    assert!(!gauge.calibrated());
    assert_eq!(gauge.offset(), -3);
}
