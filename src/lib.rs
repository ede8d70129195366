#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// `remap` names the crate here; the function is `remap::remap`.
pub use rm_remap as remap;
pub use rm_utils as utils;

pub use rm_remap::derive::Reflect;
pub use rm_remap::{Remapper, remap_with};

#[cfg(test)]
mod tests {
    use crate::{Reflect, Remapper, remap};

    #[derive(Reflect)]
    struct Source {
        a: i32,
        b: i32,
    }

    #[derive(Reflect, Debug, PartialEq)]
    struct Dest {
        a: i32,
        #[reflect(default)]
        d: i32,
    }

    #[test]
    fn umbrella_exports() {
        let source = Source { a: 1, b: 2 };
        assert_eq!(remap::remap::<Dest>(&source), Ok(Dest { a: 1, d: 0 }));

        let dest: Dest = Remapper::new(&source)
            .with_override("d", source.b)
            .build()
            .unwrap();
        assert_eq!(dest, Dest { a: 1, d: 2 });
    }
}
