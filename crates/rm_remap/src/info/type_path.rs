// -----------------------------------------------------------------------------
// TypePath

/// A static accessor to type paths and names.
///
/// A stable alternative to [`core::any::type_name`], used in error messages and
/// debug output.
///
/// # Methods
///
/// - [`type_path`]: The unique identifier of the type, cannot be duplicated.
/// - [`type_name`]: Type name without module path, may be duplicated.
/// - [`type_ident`]: The shortest type name without module path and generics.
/// - [`module_path`]: Optional module path.
///
/// These names never start with `::`.
///
/// # Implementation
///
/// [`#[derive(Reflect)]`](crate::derive::Reflect) implements it for you:
///
/// ```
/// use rm_remap::{derive::Reflect, info::TypePath};
///
/// #[derive(Reflect)]
/// #[reflect(type_path = "my_crate::foo::Stable")]
/// struct Stable {
///     value: u32,
/// }
///
/// assert_eq!(Stable::type_path(), "my_crate::foo::Stable");
/// assert_eq!(Stable::type_name(), "Stable");
/// assert_eq!(Stable::module_path(), Some("my_crate::foo"));
/// ```
///
/// For generic types implemented by hand, use
/// [`GenericTypePathCell`](crate::impls::GenericTypePathCell):
///
/// ```
/// use rm_remap::info::TypePath;
/// use rm_remap::impls::{concat, GenericTypePathCell};
///
/// struct Foo<T>(T);
///
/// impl<T: TypePath> TypePath for Foo<T> {
///     fn type_path() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| {
///             concat(&["my_crate::Foo", "<", T::type_path(), ">"])
///         })
///     }
///     fn type_name() -> &'static str {
///         static CELL: GenericTypePathCell = GenericTypePathCell::new();
///         CELL.get_or_insert::<Self>(|| concat(&["Foo", "<", T::type_name(), ">"]))
///     }
///     fn type_ident() -> &'static str { "Foo" }
///     fn module_path() -> Option<&'static str> { Some("my_crate") }
/// }
///
/// assert_eq!(<Foo<u8>>::type_path(), "my_crate::Foo<u8>");
/// assert_eq!(<Foo<u8>>::type_name(), "Foo<u8>");
/// ```
///
/// [`type_path`]: TypePath::type_path
/// [`type_name`]: TypePath::type_name
/// [`type_ident`]: TypePath::type_ident
/// [`module_path`]: TypePath::module_path
pub trait TypePath: 'static {
    /// Returns the fully qualified path with generics of the target type.
    ///
    /// For `Option<Vec<usize>>`, this is `"core::option::Option<alloc::vec::Vec<usize>>"`.
    fn type_path() -> &'static str;

    /// Returns a short path to the type, generics included.
    ///
    /// For `Option<Vec<usize>>`, this is `"Option<Vec<usize>>"`.
    fn type_name() -> &'static str;

    /// Returns the short name of the type, without generics.
    ///
    /// For `Option<Vec<usize>>`, this is `"Option"`.
    fn type_ident() -> &'static str;

    /// Optional module path where the type is defined.
    ///
    /// Primitive types return `None`.
    fn module_path() -> Option<&'static str> {
        None
    }
}

// -----------------------------------------------------------------------------
// DynamicTypePath

/// Dynamic dispatch for [`TypePath`], implemented for every `T: TypePath`.
///
/// # Examples
///
/// ```
/// use rm_remap::{info::DynamicTypePath, Reflect};
///
/// let x = String::from("");
/// let y: &dyn Reflect = &x;
///
/// assert_eq!(y.reflect_type_path(), "alloc::string::String");
/// assert_eq!(y.reflect_type_name(), "String");
/// ```
pub trait DynamicTypePath {
    /// See [`TypePath::type_path`].
    fn reflect_type_path(&self) -> &'static str;

    /// See [`TypePath::type_name`].
    fn reflect_type_name(&self) -> &'static str;

    /// See [`TypePath::type_ident`].
    fn reflect_type_ident(&self) -> &'static str;

    /// See [`TypePath::module_path`].
    fn reflect_module_path(&self) -> Option<&'static str>;
}

impl<T: TypePath> DynamicTypePath for T {
    #[inline]
    fn reflect_type_path(&self) -> &'static str {
        Self::type_path()
    }

    #[inline]
    fn reflect_type_name(&self) -> &'static str {
        Self::type_name()
    }

    #[inline]
    fn reflect_type_ident(&self) -> &'static str {
        Self::type_ident()
    }

    #[inline]
    fn reflect_module_path(&self) -> Option<&'static str> {
        Self::module_path()
    }
}
