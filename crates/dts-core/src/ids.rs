//! Strongly typed identifier wrappers.
//!
//! IDs are `Copy + Ord + Hash` so they work as map keys and sorted collection
//! elements without ceremony.  The inner integer is `pub` so output code can
//! write the bare number (`car.0`) into CSV rows.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The identifier following `self`.
            #[inline(always)]
            pub fn next(self) -> Self {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Identity of one car.  Assigned sequentially from [`CarId::FIRST`].
    pub struct CarId(u32);
}

typed_id! {
    /// Insertion counter of the event queue, used to break timestamp ties.
    pub struct EventSeq(u64);
}

impl CarId {
    /// Car identifiers are positive; the first car of a run gets `CarId(1)`.
    pub const FIRST: CarId = CarId(1);
}
