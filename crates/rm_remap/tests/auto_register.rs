#![cfg(feature = "auto_register")]

use core::any::TypeId;

use rm_remap::derive::Reflect;
use rm_remap::registry::SignatureRegistry;

#[derive(Reflect)]
#[reflect(auto_register)]
struct Registered {
    value: i32,
}

#[derive(Reflect)]
struct NotRegistered {
    value: i32,
}

#[test]
fn auto_register_fills_registry() {
    let registry = SignatureRegistry::new();
    assert!(registry.is_empty());

    assert!(registry.auto_register());
    assert!(registry.contains(TypeId::of::<Registered>()));
    assert!(!registry.contains(TypeId::of::<NotRegistered>()));

    let info = registry.get(TypeId::of::<Registered>()).unwrap();
    assert_eq!(info.field_names(), ["value"]);
}
