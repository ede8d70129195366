use alloc::boxed::Box;
use core::any::TypeId;
use std::sync::{PoisonError, RwLock};

use rm_utils::TypeIdMap;

use crate::info::StructInfo;
use crate::registry::Constructible;

// -----------------------------------------------------------------------------
// SignatureRegistry

static GLOBAL: SignatureRegistry = SignatureRegistry::new();

/// A cache of destination [`StructInfo`]s keyed by [`TypeId`].
///
/// Entries are leaked and never removed, so lookups hand out `&'static`
/// references. The cache is never invalidated.
///
/// Concurrent first lookups of the same type may each compute the table, but
/// only the first stored result is kept and returned.
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use rm_remap::{derive::Reflect, registry::SignatureRegistry};
///
/// #[derive(Reflect)]
/// struct Foo {
///     value: i32,
/// }
///
/// let registry = SignatureRegistry::new();
/// assert!(!registry.contains(TypeId::of::<Foo>()));
///
/// let info = registry.register::<Foo>();
/// assert_eq!(info.field_names(), &["value"]);
/// assert!(core::ptr::eq(info, registry.get(TypeId::of::<Foo>()).unwrap()));
/// assert_eq!(registry.len(), 1);
/// ```
pub struct SignatureRegistry {
    signatures: RwLock<TypeIdMap<&'static StructInfo>>,
}

impl Default for SignatureRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SignatureRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            signatures: RwLock::new(TypeIdMap::new()),
        }
    }

    /// Returns the process-wide registry used by the remap functions.
    #[inline(always)]
    pub fn global() -> &'static SignatureRegistry {
        &GLOBAL
    }

    /// Returns the cached table of `T`, computing and storing it on a miss.
    #[inline]
    pub fn register<T: Constructible>(&self) -> &'static StructInfo {
        match self.get(TypeId::of::<T>()) {
            Some(info) => info,
            None => self.insert_by_type_id(TypeId::of::<T>(), T::struct_info),
        }
    }

    // Separate to reduce code compilation times
    #[inline(never)]
    fn insert_by_type_id(&self, type_id: TypeId, f: fn() -> StructInfo) -> &'static StructInfo {
        let info = f();
        log::trace!("cache signature of `{}`", info.type_path());

        *self
            .signatures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert(type_id, || Box::leak(Box::new(info)))
    }

    /// Returns the cached table for `type_id`, if any.
    #[inline(never)]
    pub fn get(&self, type_id: TypeId) -> Option<&'static StructInfo> {
        self.signatures
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .copied()
    }

    /// Returns `true` if a table is cached for `type_id`.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.signatures
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&type_id)
    }

    /// Returns the number of cached tables.
    #[inline]
    pub fn len(&self) -> usize {
        self.signatures
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing is cached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registers every type annotated with `#[reflect(auto_register)]`.
    ///
    /// This is equivalent to calling [`register`](Self::register) for each
    /// qualifying type. Repeated calls do not insert duplicates.
    ///
    /// ## Return Value
    ///
    /// Returns `true` if static registration is available on the current
    /// platform. Without the `auto_register` feature it does nothing and
    /// returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::any::TypeId;
    /// use rm_remap::{derive::Reflect, registry::SignatureRegistry};
    ///
    /// #[derive(Reflect)]
    /// #[reflect(auto_register)]
    /// struct Foo {
    ///     value: i32,
    /// }
    ///
    /// let registry = SignatureRegistry::new();
    /// if registry.auto_register() {
    ///     assert!(registry.contains(TypeId::of::<Foo>()));
    /// }
    /// ```
    pub fn auto_register(&self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            use crate::__macro_exports::auto_register::{__AutoRegisterFunc, __AvailFlag};

            for func in inventory::iter::<__AutoRegisterFunc> {
                (func.0)(self);
            }
            self.contains(TypeId::of::<__AvailFlag>())
        }

        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }
}

/// Returns the writable attribute table of `T`.
///
/// The table is computed by [`Constructible::struct_info`] on first use and
/// cached in [`SignatureRegistry::global`] for the process lifetime.
///
/// # Examples
///
/// ```
/// use rm_remap::{derive::Reflect, registry::specifiable_attributes};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     #[reflect(default)]
///     b: i32,
/// }
///
/// let info = specifiable_attributes::<Foo>();
///
/// assert!(info.field("a").unwrap().is_required());
/// assert!(info.field("b").unwrap().is_optional());
/// assert!(core::ptr::eq(info, specifiable_attributes::<Foo>()));
/// ```
#[inline]
pub fn specifiable_attributes<T: Constructible>() -> &'static StructInfo {
    GLOBAL.register::<T>()
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec::Vec;
    use core::any::TypeId;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::{SignatureRegistry, specifiable_attributes};
    use crate::Reflect;
    use crate::error::ConstructError;
    use crate::info::{NamedField, StructInfo, TypePath};
    use crate::ops::{DynamicStruct, ReflectCloneError, ReflectKind, ReflectRef};
    use crate::registry::Constructible;

    static INTROSPECTIONS: AtomicUsize = AtomicUsize::new(0);

    struct Counted;

    impl TypePath for Counted {
        fn type_path() -> &'static str {
            "tests::Counted"
        }
        fn type_name() -> &'static str {
            "Counted"
        }
        fn type_ident() -> &'static str {
            "Counted"
        }
    }

    impl Reflect for Counted {
        fn reflect_kind(&self) -> ReflectKind {
            ReflectKind::Opaque
        }
        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Opaque(self)
        }
        fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
            Ok(Box::new(Counted))
        }
    }

    impl Constructible for Counted {
        fn struct_info() -> StructInfo {
            INTROSPECTIONS.fetch_add(1, Ordering::SeqCst);
            StructInfo::new::<Self>(&[NamedField::new::<i32>("a").optional()])
        }

        fn construct(_args: DynamicStruct) -> Result<Self, ConstructError> {
            Ok(Counted)
        }
    }

    #[test]
    fn introspection_happens_once() {
        let first = specifiable_attributes::<Counted>();
        let second = specifiable_attributes::<Counted>();
        assert!(core::ptr::eq(first, second));

        crate::remap::<Counted>(&1_u8).unwrap();
        crate::remap::<Counted>(&2_u8).unwrap();

        assert_eq!(INTROSPECTIONS.load(Ordering::SeqCst), 1);
        assert!(SignatureRegistry::global().contains(TypeId::of::<Counted>()));
    }

    #[test]
    fn concurrent_first_access_stores_once() {
        let registry = SignatureRegistry::new();

        let infos: Vec<&'static StructInfo> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.register::<Empty>()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert!(infos.iter().all(|info| core::ptr::eq(*info, infos[0])));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn poisoned_lock_is_recovered() {
        let registry = SignatureRegistry::new();

        let poisoner = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = registry.signatures.write();
                    panic!("poison the registry");
                })
                .join()
        });
        assert!(poisoner.is_err());
        assert!(registry.signatures.is_poisoned());

        let info = registry.register::<Empty>();
        assert!(core::ptr::eq(info, registry.get(TypeId::of::<Empty>()).unwrap()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn local_registry_is_independent() {
        let registry = SignatureRegistry::new();
        assert!(registry.is_empty());
        registry.register::<Empty>();
        registry.register::<Empty>();
        assert_eq!(registry.len(), 1);
    }

    struct Empty;

    impl TypePath for Empty {
        fn type_path() -> &'static str {
            "tests::Empty"
        }
        fn type_name() -> &'static str {
            "Empty"
        }
        fn type_ident() -> &'static str {
            "Empty"
        }
    }

    impl Reflect for Empty {
        fn reflect_kind(&self) -> ReflectKind {
            ReflectKind::Opaque
        }
        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Opaque(self)
        }
        fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
            Ok(Box::new(Empty))
        }
    }

    impl Constructible for Empty {
        fn struct_info() -> StructInfo {
            StructInfo::new::<Self>(&[])
        }

        fn construct(_args: DynamicStruct) -> Result<Self, ConstructError> {
            Ok(Empty)
        }
    }
}
