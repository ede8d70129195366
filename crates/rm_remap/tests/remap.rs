use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};

use rm_remap::error::{ConstructError, RemapError};
use rm_remap::info::TypePath;
use rm_remap::ops::DynamicStruct;
use rm_remap::registry::{SignatureRegistry, specifiable_attributes};
use rm_remap::remap::NestedTypes;
use rm_remap::{Remapper, derive::Reflect, remap, remap_with};

#[derive(Reflect, Debug, PartialEq)]
struct Abc {
    a: i32,
    b: i32,
    c: i32,
}

#[derive(Reflect, Debug, PartialEq)]
struct Ab {
    a: i32,
    b: i32,
}

#[derive(Reflect, Debug, PartialEq)]
struct Ad {
    a: i32,
    d: i32,
}

#[derive(Reflect, Debug, PartialEq)]
struct AdDefault {
    a: i32,
    #[reflect(default = 2)]
    d: i32,
}

fn abc() -> Abc {
    Abc { a: 0, b: 1, c: 2 }
}

fn mapping(entries: &[(&str, i32)]) -> BTreeMap<String, i32> {
    entries
        .iter()
        .map(|(name, value)| (String::from(*name), *value))
        .collect()
}

#[test]
fn subset_of_attributes() {
    assert_eq!(remap::<Ab>(&abc()), Ok(Ab { a: 0, b: 1 }));
}

#[test]
fn extra_attributes_are_dropped() {
    let source = mapping(&[("a", 0), ("b", 1), ("c", 2), ("zzz", 9)]);
    assert_eq!(remap::<Ab>(&source), Ok(Ab { a: 0, b: 1 }));
}

#[test]
fn missing_required_attribute() {
    let err = remap::<Ad>(&abc()).unwrap_err();

    let RemapError::MissingRequiredAttributes {
        source_type,
        dest_type,
        missing,
    } = &err
    else {
        panic!("unexpected error: {err}");
    };

    assert_eq!(*source_type, "Abc");
    assert_eq!(*dest_type, "Ad");
    assert_eq!(missing.iter().collect::<Vec<_>>(), ["d"]);
    assert_eq!(
        err.to_string(),
        "the source `Abc` cannot provide values for the required arguments {d} of destination type `Ad`",
    );
}

#[test]
fn missing_attributes_are_all_named() {
    let err = remap::<Abc>(&mapping(&[("b", 1)])).unwrap_err();
    let RemapError::MissingRequiredAttributes { missing, .. } = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(missing.to_string(), "{a, c}");
}

#[test]
fn override_supplies_required_attribute() {
    let mut overrides = DynamicStruct::new();
    overrides.extend("d", 2_i32);

    let dest = remap_with::<Ad>(&abc(), &NestedTypes::new(), overrides);
    assert_eq!(dest, Ok(Ad { a: 0, d: 2 }));
}

#[test]
fn override_wins_over_source() {
    let dest: Ab = Remapper::new(&abc())
        .with_override("a", 10_i32)
        .build()
        .unwrap();
    assert_eq!(dest, Ab { a: 10, b: 1 });
}

#[test]
fn optional_attribute_keeps_default() {
    assert_eq!(remap::<AdDefault>(&abc()), Ok(AdDefault { a: 0, d: 2 }));

    let source = mapping(&[("a", 0), ("d", 5)]);
    assert_eq!(remap::<AdDefault>(&source), Ok(AdDefault { a: 0, d: 5 }));
}

#[derive(Reflect, Debug, PartialEq)]
struct Outer {
    obj: Ab,
}

#[test]
fn nested_mapping() {
    let mut source = BTreeMap::new();
    source.insert(String::from("obj"), mapping(&[("a", 0), ("b", 1), ("c", 2)]));

    let nested = NestedTypes::new().with::<Ab>("obj");
    let dest = remap_with::<Outer>(&source, &nested, DynamicStruct::new());

    assert_eq!(dest, Ok(Outer { obj: Ab { a: 0, b: 1 } }));
}

#[derive(Reflect)]
struct Holder {
    obj: Abc,
    label: String,
}

#[test]
fn nested_struct() {
    let source = Holder {
        obj: abc(),
        label: String::from("x"),
    };

    let dest: Outer = Remapper::new(&source).nested::<Ab>("obj").build().unwrap();
    assert_eq!(dest, Outer { obj: Ab { a: 0, b: 1 } });
}

#[test]
fn nested_failure_propagates() {
    let source = Holder {
        obj: abc(),
        label: String::from("x"),
    };

    let err = Remapper::new(&source)
        .nested::<Ad>("obj")
        .build::<Outer>()
        .unwrap_err();

    let RemapError::MissingRequiredAttributes { dest_type, .. } = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(dest_type, "Ad");
}

#[test]
fn other_struct_is_not_converted() {
    let source = Holder {
        obj: abc(),
        label: String::from("x"),
    };

    let err = remap::<Outer>(&source).unwrap_err();
    assert_eq!(
        err,
        RemapError::Construct(ConstructError::MismatchedType {
            dest_type: Outer::type_path(),
            field: "obj",
            expected: Ab::type_path(),
            found: Abc::type_path(),
        }),
    );
}

#[test]
fn mismatched_value_type() {
    let mut source = BTreeMap::new();
    source.insert(String::from("a"), 0_i64);
    source.insert(String::from("b"), 1_i64);

    let err = remap::<Ab>(&source).unwrap_err();
    assert!(matches!(
        err,
        RemapError::Construct(ConstructError::MismatchedType {
            expected: "i32",
            found: "i64",
            ..
        })
    ));
}

#[derive(Reflect, Debug, PartialEq)]
struct WithPrivate {
    a: i32,
    _secret: i32,
}

#[derive(Reflect, Debug, PartialEq)]
struct ReadsPrivate {
    a: i32,
    #[reflect(default = -1)]
    _secret: i32,
}

#[test]
fn private_fields_are_not_read() {
    let source = WithPrivate { a: 1, _secret: 7 };
    assert_eq!(
        remap::<ReadsPrivate>(&source),
        Ok(ReadsPrivate { a: 1, _secret: -1 }),
    );
}

#[test]
fn mapping_keys_are_not_filtered() {
    let source = mapping(&[("a", 1), ("_secret", 7)]);
    assert_eq!(
        remap::<ReadsPrivate>(&source),
        Ok(ReadsPrivate { a: 1, _secret: 7 }),
    );
}

#[test]
fn dynamic_struct_source() {
    let mut source = DynamicStruct::new();
    source.extend("b", 1_i32);
    source.extend("a", 0_i32);
    source.extend("_x", 5_i32);

    assert_eq!(remap::<Ab>(&source), Ok(Ab { a: 0, b: 1 }));
}

#[test]
fn hash_map_source() {
    let mut source = HashMap::new();
    source.insert(String::from("a"), 3_i32);
    source.insert(String::from("b"), 4_i32);

    assert_eq!(remap::<Ab>(&source), Ok(Ab { a: 3, b: 4 }));
}

#[test]
fn opaque_source_has_no_attributes() {
    let err = remap::<AdDefault>(&42_i32).unwrap_err();
    assert!(err.to_string().contains("{a}"));

    #[derive(Reflect, Debug, PartialEq)]
    struct Nothing {}

    assert_eq!(remap::<Nothing>(&42_i32), Ok(Nothing {}));
}

#[derive(Reflect, Default)]
struct Cache {
    hits: u32,
    #[reflect(ignore)]
    _raw: Vec<u8>,
}

#[derive(Reflect, Debug)]
struct WithCache {
    a: i32,
    cache: Cache,
}

#[derive(Reflect, Debug, PartialEq)]
struct NeedsCache {
    a: i32,
    #[reflect(default)]
    cache: Cache,
}

impl PartialEq for Cache {
    fn eq(&self, other: &Self) -> bool {
        self.hits == other.hits
    }
}

impl core::fmt::Debug for Cache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cache").field("hits", &self.hits).finish()
    }
}

#[test]
fn unreadable_attribute_is_excluded() {
    let source = WithCache {
        a: 1,
        cache: Cache {
            hits: 9,
            _raw: vec![1, 2],
        },
    };

    // `cache` cannot be cloned, so the default applies.
    let dest = remap::<NeedsCache>(&source).unwrap();
    assert_eq!(dest.a, 1);
    assert_eq!(dest.cache.hits, 0);

    let err = remap::<WithCache>(&source).unwrap_err();
    let RemapError::MissingRequiredAttributes { missing, .. } = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(missing.to_string(), "{cache}");
}

#[test]
fn signature_is_cached() {
    remap::<Ab>(&abc()).unwrap();
    assert!(SignatureRegistry::global().contains(TypeId::of::<Ab>()));

    let first = specifiable_attributes::<Ab>();
    let second = specifiable_attributes::<Ab>();
    assert!(core::ptr::eq(first, second));
    assert_eq!(first.field_names(), ["a", "b"]);
}

#[derive(Reflect)]
struct Buffered {
    a: i32,
    b: i32,
    #[reflect(ignore)]
    _scratch: Vec<u8>,
}

#[derive(Reflect)]
struct BufferedHolder {
    obj: Buffered,
}

#[test]
fn nested_attribute_is_remapped_by_reference() {
    let inner = Buffered {
        a: 0,
        b: 1,
        _scratch: vec![3],
    };
    assert_eq!(Remapper::new(&inner).build::<Ab>(), Ok(Ab { a: 0, b: 1 }));

    // `obj` cannot be cloned, but a nested remap only needs to read it.
    let source = BufferedHolder { obj: inner };
    let dest = Remapper::new(&source).nested::<Ab>("obj").build::<Outer>();
    assert_eq!(dest, Ok(Outer { obj: Ab { a: 0, b: 1 } }));

    let err = remap::<Outer>(&source).unwrap_err();
    let RemapError::MissingRequiredAttributes { missing, .. } = err else {
        panic!("unexpected error: {err}");
    };
    assert_eq!(missing.to_string(), "{obj}");
}

#[test]
fn nested_override() {
    let dest: Outer = Remapper::new(&abc())
        .nested::<Ab>("obj")
        .with_override("obj", mapping(&[("a", 4), ("b", 5), ("c", 6)]))
        .build()
        .unwrap();
    assert_eq!(dest, Outer { obj: Ab { a: 4, b: 5 } });
}
