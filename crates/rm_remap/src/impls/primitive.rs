use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::info::TypePath;
use crate::ops::ReflectCloneError;
use crate::reflection::impl_reflect_cast_fn;
use crate::{FromReflect, Reflect};

macro_rules! impl_simple_type {
    ($ty:ty, $path:expr, $name:expr, $module:expr) => {
        impl TypePath for $ty {
            #[inline]
            fn type_path() -> &'static str {
                $path
            }

            #[inline]
            fn type_name() -> &'static str {
                $name
            }

            #[inline]
            fn type_ident() -> &'static str {
                $name
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                $module
            }
        }

        impl Reflect for $ty {
            impl_reflect_cast_fn!(Opaque);

            #[inline]
            fn reflect_clone(&self) -> Result<Box<dyn Reflect>, ReflectCloneError> {
                Ok(Box::new(Clone::clone(self)))
            }

            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                match other.downcast_ref::<Self>() {
                    Some(other) => Some(PartialEq::eq(self, other)),
                    None => Some(false),
                }
            }

            #[inline]
            fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }

        impl FromReflect for $ty {
            #[inline]
            fn from_reflect(reflect: &dyn Reflect) -> Option<Self> {
                reflect.downcast_ref::<Self>().cloned()
            }
        }
    };
}

macro_rules! impl_primitive {
    ($($ty:ident),* $(,)?) => {
        $( impl_simple_type!($ty, stringify!($ty), stringify!($ty), None); )*
    };
}

impl_primitive!(
    bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
);

impl_simple_type!(String, "alloc::string::String", "String", Some("alloc::string"));
impl_simple_type!(&'static str, "&str", "&str", None);

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::format;
    use alloc::string::String;

    use crate::info::TypePath;
    use crate::ops::ReflectKind;
    use crate::{FromReflect, Reflect};

    #[test]
    fn type_paths() {
        assert_eq!(<u8 as TypePath>::type_path(), "u8");
        assert_eq!(<String as TypePath>::type_name(), "String");
        assert_eq!(<String as TypePath>::module_path(), Some("alloc::string"));
        assert_eq!(<&'static str as TypePath>::type_path(), "&str");
    }

    #[test]
    fn opaque_behaviour() {
        let value: Box<dyn Reflect> = Box::new(3.5_f64);
        assert_eq!(value.reflect_kind(), ReflectKind::Opaque);
        assert_eq!(value.reflect_partial_eq(&3.5_f64), Some(true));
        assert_eq!(value.reflect_partial_eq(&3.5_f32), Some(false));
        assert_eq!(format!("{value:?}"), "3.5");

        assert_eq!(i32::from_reflect(&7_i32), Some(7));
        assert_eq!(i32::from_reflect(&7_u32), None);
        assert_eq!(String::from_reflect(&"text"), None);
    }
}
