//! Items used by `#[derive(Reflect)]` expansions. Not public API.

pub use alloc::borrow::Cow;
pub use alloc::boxed::Box;

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use alloc::boxed::Box;

    use crate::Reflect;
    use crate::error::ConstructError;
    use crate::info::{StructInfo, TypePath};
    use crate::ops::{DynamicStruct, ReflectCloneError, ReflectKind, ReflectRef};
    use crate::registry::{Constructible, SignatureRegistry};

    pub use inventory;

    /// A registration function submitted by a derived type.
    pub struct __AutoRegisterFunc(pub fn(&SignatureRegistry));

    inventory::collect!(__AutoRegisterFunc);

    /// Registered by this crate itself, so its presence in a registry proves
    /// that static registration works on the current platform.
    pub struct __AvailFlag;

    impl TypePath for __AvailFlag {
        fn type_path() -> &'static str {
            "rm_remap::__macro_exports::auto_register::__AvailFlag"
        }

        fn type_name() -> &'static str {
            "__AvailFlag"
        }

        fn type_ident() -> &'static str {
            "__AvailFlag"
        }
    }

    impl Reflect for __AvailFlag {
        fn reflect_kind(&self) -> ReflectKind {
            ReflectKind::Opaque
        }

        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Opaque(self)
        }

        fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
            Ok(Box::new(__AvailFlag))
        }
    }

    impl Constructible for __AvailFlag {
        fn struct_info() -> StructInfo {
            StructInfo::new::<Self>(&[])
        }

        fn construct(_: DynamicStruct) -> Result<Self, ConstructError> {
            Ok(__AvailFlag)
        }
    }

    fn register_avail_flag(registry: &SignatureRegistry) {
        registry.register::<__AvailFlag>();
    }

    inventory::submit! { __AutoRegisterFunc(register_avail_flag) }
}
