use alloc::boxed::Box;
use alloc::string::String;

use crate::Reflect;
use crate::ops::{DynamicStruct, ReflectRef};

/// Returns `true` for names the attribute reader treats as private.
#[inline]
fn is_private(name: &str) -> bool {
    name.starts_with('_')
}

/// Enumerates the readable attributes of `source` as a name→value mapping.
///
/// - A mapping source (a [`Map`], or a dynamic struct such as
///   [`DynamicStruct`]) is used as is: every key is an attribute name.
/// - A struct source exposes each field whose name does not start with `_`.
/// - Any other value has no readable attributes.
///
/// Values are copied with [`Reflect::reflect_clone`]. An attribute whose value
/// cannot be copied is left out of the result.
///
/// # Examples
///
/// ```
/// use rm_remap::{derive::Reflect, ops::Struct, remap::read_attributes};
///
/// #[derive(Reflect)]
/// struct Account {
///     name: String,
///     _token: u64,
/// }
///
/// let account = Account { name: "ann".into(), _token: 7 };
/// let attributes = read_attributes(&account);
///
/// assert_eq!(attributes.field_len(), 1);
/// assert_eq!(attributes.field_as::<String>("name").unwrap(), "ann");
/// assert!(!attributes.contains("_token"));
///
/// assert_eq!(read_attributes(&5_i32).field_len(), 0);
/// ```
///
/// [`Map`]: crate::ops::Map
pub fn read_attributes(source: &dyn Reflect) -> DynamicStruct {
    match source.reflect_ref() {
        ReflectRef::Map(map) => collect(source, map.iter_entries(), |_| true),
        ReflectRef::Struct(dynamic) if source.is_dynamic() => {
            collect(source, dynamic.iter_fields(), |_| true)
        }
        ReflectRef::Struct(data) => collect(source, data.iter_fields(), |name| !is_private(name)),
        ReflectRef::Opaque(_) => DynamicStruct::new(),
    }
}

/// Looks up one readable attribute of `source` by reference.
///
/// Follows the rules of [`read_attributes`] without copying anything, so a
/// value that cannot be cloned is still readable here.
///
/// # Examples
///
/// ```
/// use rm_remap::{derive::Reflect, remap::read_attribute};
///
/// #[derive(Reflect)]
/// struct Account {
///     name: String,
///     _token: u64,
/// }
///
/// let account = Account { name: "ann".into(), _token: 7 };
///
/// let name = read_attribute(&account, "name").unwrap();
/// assert_eq!(name.downcast_ref::<String>().unwrap(), "ann");
/// assert!(read_attribute(&account, "_token").is_none());
/// ```
pub fn read_attribute<'a>(source: &'a dyn Reflect, name: &str) -> Option<&'a dyn Reflect> {
    match source.reflect_ref() {
        ReflectRef::Map(map) => map.get(name),
        ReflectRef::Struct(dynamic) if source.is_dynamic() => dynamic.field(name),
        ReflectRef::Struct(data) if !is_private(name) => data.field(name),
        ReflectRef::Struct(_) | ReflectRef::Opaque(_) => None,
    }
}

/// Copies the attribute `name` of `source`, `None` if it cannot be cloned.
pub(crate) fn copy_attribute(
    source: &dyn Reflect,
    name: &str,
    value: &dyn Reflect,
) -> Option<Box<dyn Reflect>> {
    match value.reflect_clone() {
        Ok(value) => Some(value),
        Err(err) => {
            log::debug!(
                "skip unreadable attribute `{name}` of `{}`: {err}",
                source.reflect_type_path(),
            );
            None
        }
    }
}

fn collect<'a>(
    source: &dyn Reflect,
    entries: impl Iterator<Item = (&'a str, &'a dyn Reflect)>,
    readable: impl Fn(&str) -> bool,
) -> DynamicStruct {
    let mut attributes = DynamicStruct::new();
    for (name, value) in entries {
        if !readable(name) {
            continue;
        }
        if let Some(value) = copy_attribute(source, name, value) {
            attributes.extend_boxed(String::from(name), value);
        }
    }
    attributes
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;

    use alloc::vec::Vec;

    use super::{read_attribute, read_attributes};
    use crate::derive::Reflect;
    use crate::ops::{DynamicStruct, Struct};

    #[derive(Reflect)]
    struct Scratch {
        len: u8,
        #[reflect(ignore)]
        buf: Vec<u8>,
    }

    #[derive(Reflect)]
    struct Holder {
        scratch: Scratch,
        count: u8,
    }

    #[test]
    fn uncloneable_attribute_is_readable_by_reference() {
        let holder = Holder {
            scratch: Scratch {
                len: 3,
                buf: Vec::new(),
            },
            count: 1,
        };
        assert!(holder.scratch.buf.is_empty());

        let scratch = read_attribute(&holder, "scratch").unwrap();
        assert_eq!(scratch.downcast_ref::<Scratch>().map(|s| s.len), Some(3));

        let attributes = read_attributes(&holder);
        assert!(!attributes.contains("scratch"));
        assert_eq!(attributes.field_as::<u8>("count"), Some(&1));
    }

    #[test]
    fn mapping_keeps_private_keys() {
        let mut map = BTreeMap::<String, u8>::new();
        map.insert("_a".into(), 1);
        map.insert("b".into(), 2);

        let attributes = read_attributes(&map);
        assert_eq!(attributes.field_len(), 2);
        assert_eq!(attributes.field_as::<u8>("_a"), Some(&1));

        let mut dynamic = DynamicStruct::new();
        dynamic.extend("_c", 3_u8);
        let attributes = read_attributes(&dynamic);
        assert_eq!(attributes.field_as::<u8>("_c"), Some(&3));
    }
}
