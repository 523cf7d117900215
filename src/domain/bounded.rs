use crate::domain::constraint::Violation;
use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A closed integer range carried by a type rather than by a value.
///
/// Implementors are zero-sized markers. The bounds must satisfy
/// `lower() <= upper()`; [`bounded_range!`](crate::bounded_range) checks this at compile time.
pub trait Bounds {
    fn lower() -> i64;
    fn upper() -> i64;

    fn contains(value: i64) -> bool {
        Self::lower() <= value && value <= Self::upper()
    }
}

/// Declares a marker type implementing [`Bounds`].
///
/// ```
/// smart_ctor::bounded_range!(
///     /// Hours on a clock face.
///     pub ClockHour => 1, 12
/// );
///
/// use smart_ctor::domain::bounded::Bounded;
/// assert!(Bounded::<ClockHour>::try_new(12).is_some());
/// assert!(Bounded::<ClockHour>::try_new(13).is_none());
/// ```
#[macro_export]
macro_rules! bounded_range {
    ($(#[$meta:meta])* $vis:vis $name:ident => $lower:expr, $upper:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        $vis struct $name;

        const _: () = {
            const LOWER: i64 = $lower;
            const UPPER: i64 = $upper;
            assert!(LOWER <= UPPER, "range lower bound exceeds upper bound");
        };

        impl $crate::domain::bounded::Bounds for $name {
            fn lower() -> i64 {
                const LOWER: i64 = $lower;
                LOWER
            }

            fn upper() -> i64 {
                const UPPER: i64 = $upper;
                UPPER
            }
        }
    };
}

bounded_range!(
    /// Integers from 1 to 5 inclusive.
    pub Between1And5 => 1, 5
);

bounded_range!(
    /// Whole percentages, 0 to 100 inclusive.
    pub Percentage => 0, 100
);

/// An integer known to lie within `R`'s range.
///
/// Obtain one through [`Bounded::try_new`]; any instance built that way holds
/// `R::lower() <= value <= R::upper()` for its whole lifetime.
///
/// The standard traits are implemented by hand so they hold for any `R`,
/// including range markers that derive nothing.
pub struct Bounded<R: Bounds> {
    value: i64,
    range: PhantomData<fn() -> R>,
}

impl<R: Bounds> Clone for Bounded<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Bounds> Copy for Bounded<R> {}

impl<R: Bounds> PartialEq for Bounded<R> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: Bounds> Eq for Bounded<R> {}

impl<R: Bounds> PartialOrd for Bounded<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Bounds> Ord for Bounded<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<R: Bounds> Hash for Bounded<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<R: Bounds> fmt::Debug for Bounded<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bounded")
            .field("value", &self.value)
            .field("lower", &R::lower())
            .field("upper", &R::upper())
            .finish()
    }
}

impl<R: Bounds> Bounded<R> {
    /// Returns `None` when `value` falls outside `R`'s range.
    pub fn try_new(value: i64) -> Option<Self> {
        R::contains(value).then_some(Self {
            value,
            range: PhantomData,
        })
    }

    /// Builds without checking the range.
    ///
    /// The result may violate `R`'s invariant. Only use for values already
    /// proven in range by other means.
    pub fn new_unchecked(value: i64) -> Self {
        Self {
            value,
            range: PhantomData,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn lower() -> i64 {
        R::lower()
    }

    pub fn upper() -> i64 {
        R::upper()
    }
}

impl<R: Bounds> TryFrom<i64> for Bounded<R> {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value).ok_or_else(|| {
            ValidationError::new(
                "Bounded",
                vec![Violation::OutOfRange {
                    field: "value",
                    lower: R::lower(),
                    upper: R::upper(),
                    actual: value,
                }],
            )
        })
    }
}

impl<R: Bounds> From<Bounded<R>> for i64 {
    fn from(bounded: Bounded<R>) -> Self {
        bounded.value
    }
}

impl<R: Bounds> fmt::Display for Bounded<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<R: Bounds> Serialize for Bounded<R> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, R: Bounds> Deserialize<'de> for Bounded<R> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}
