//! Hash containers with a deterministic hasher, re-exports *hashbrown* and *foldhash*.

// -----------------------------------------------------------------------------
// Modules

mod hasher;

// -----------------------------------------------------------------------------
// Exports

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
///
/// Iteration order depends only on the inserted keys, never on a random seed.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;

#[cfg(test)]
mod tests {
    use core::hash::{BuildHasher, Hash, Hasher};

    use super::{FixedHashState, HashMap, NoOpHashState};

    #[test]
    fn fixed_state_is_stable() {
        let hash = |v: &str| {
            let mut hasher = FixedHashState.build_hasher();
            v.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash("field"), hash("field"));
        assert_ne!(hash("field"), hash("other"));
    }

    #[test]
    fn noop_state_passes_u64_through() {
        let mut hasher = NoOpHashState.build_hasher();
        hasher.write_u64(0xDEAD_BEEF);
        assert_eq!(hasher.finish(), 0xDEAD_BEEF);
    }

    #[test]
    fn const_constructible_map() {
        let mut map: HashMap<&str, i32> = HashMap::with_hasher(FixedHashState);
        map.insert("a", 0);
        assert_eq!(map.get("a"), Some(&0));
    }
}
