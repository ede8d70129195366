use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::impls::{GenericTypePathCell, clone_value, concat};
use crate::info::TypePath;
use crate::ops::ReflectCloneError;
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// Option

impl<T: TypePath> TypePath for Option<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["core::option::Option<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Option<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Option"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("core::option")
    }
}

impl<T: Reflect + TypePath> Reflect for Option<T> {
    impl_reflect_cast_fn!(Opaque);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let cloned = match self {
            Some(value) => Some(clone_value(value)?),
            None => None,
        };
        Ok(Box::new(cloned))
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let other = other.downcast_ref::<Self>()?;
        match (self, other) {
            (Some(x), Some(y)) => x.reflect_partial_eq(y),
            (None, None) => Some(true),
            _ => Some(false),
        }
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => f.debug_tuple("Some").field(&value.as_reflect()).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: Reflect + TypePath> FromReflect for Option<T> {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        if !reflect.is::<Self>() {
            return None;
        }
        reflect.reflect_clone().ok()?.take::<Self>().ok()
    }
}

// -----------------------------------------------------------------------------
// Vec

impl<T: TypePath> TypePath for Vec<T> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["alloc::vec::Vec<", T::type_path(), ">"]))
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["Vec<", T::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "Vec"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::vec")
    }
}

impl<T: Reflect + TypePath> Reflect for Vec<T> {
    impl_reflect_cast_fn!(Opaque);

    fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
        let mut cloned = Vec::with_capacity(self.len());
        for item in self {
            cloned.push(clone_value(item)?);
        }
        Ok(Box::new(cloned))
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        let other = other.downcast_ref::<Self>()?;
        if self.len() != other.len() {
            return Some(false);
        }
        for (x, y) in self.iter().zip(other) {
            let result = x.reflect_partial_eq(y);
            if result != Some(true) {
                return result;
            }
        }
        Some(true)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(Reflect::as_reflect))
            .finish()
    }
}

impl<T: Reflect + TypePath> FromReflect for Vec<T> {
    fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
        if !reflect.is::<Self>() {
            return None;
        }
        reflect.reflect_clone().ok()?.take::<Self>().ok()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::info::TypePath;
    use crate::{FromReflect, Reflect};

    #[test]
    fn generic_paths() {
        assert_eq!(<Option<u8>>::type_path(), "core::option::Option<u8>");
        assert_eq!(<Option<String>>::type_name(), "Option<String>");
        assert_eq!(<Vec<Option<u8>>>::type_name(), "Vec<Option<u8>>");
        assert_eq!(<Vec<i32>>::type_path(), "alloc::vec::Vec<i32>");
    }

    #[test]
    fn clone_compare_and_debug() {
        let list = vec![Some(1_u8), None];
        let cloned = list.reflect_clone().unwrap();

        assert_eq!(list.reflect_partial_eq(cloned.as_ref()), Some(true));
        assert_eq!(format!("{:?}", cloned), "[Some(1), None]");
        assert_eq!(<Vec<Option<u8>>>::from_reflect(cloned.as_ref()), Some(list));
        assert_eq!(<Vec<u8>>::from_reflect(&1_u8), None);
    }
}
