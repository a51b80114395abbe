use std::hash::Hash;

/// Arena ID.
///
/// An ID can only be created by `arena.next_id()` or `arena.alloc`, so every
/// ID handed out by an [`Arena`](super::Arena) indexes a live slot of it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(pub(crate) usize);

impl Id {
    /// Return the raw index.
    pub fn raw(self) -> usize {
        self.0
    }
}

pub trait Identifier:
    Sized + Clone + Copy + Hash + std::fmt::Debug + PartialEq + Eq + From<Id> + Into<Id>
{
}

#[macro_export(local_inner_macros)]
macro_rules! identifier {
    ($(#[$attr:meta])* struct $name:ident) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub(crate) $crate::Id);

        impl $name {
            /// Return the raw arena index.
            pub fn index(self) -> usize {
                self.0.raw()
            }
        }

        impl From<$crate::Id> for $name {
            fn from(value: $crate::Id) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $crate::Id {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl $crate::Identifier for $name {}
    };
}
