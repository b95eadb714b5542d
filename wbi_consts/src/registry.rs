//! # Taxonomy registry
//!
//! Every identifier set in the whole-body interface is declared through [`taxonomy!`], which
//! produces the enumeration, its ordinal table, its wire tags and an implementation of
//! [`Taxonomy`]. Declaring the enumeration against its cardinality constant means the two cannot
//! drift apart without the build failing.

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use std::fmt;
use std::hash::Hash;
use thiserror::Error;

// ------------------------------------------------------------------------------------------------
// TRAITS
// ------------------------------------------------------------------------------------------------

/// A closed, zero-based, contiguous set of identifiers.
///
/// Declaration order is the ordinal order, and ordinals are the stable wire encoding of a value,
/// so reordering or inserting variants is a breaking change.
pub trait Taxonomy: Copy + Eq + Hash + fmt::Debug + fmt::Display + 'static {
    /// Name of the enumeration, used in error messages.
    const NAME: &'static str;

    /// Cardinality constant of the enumeration.
    const SIZE: usize;

    /// All values in ascending ordinal order.
    fn all() -> &'static [Self];

    /// Integer value of this identifier, in `[0, SIZE)`.
    fn ordinal(self) -> usize;

    /// Canonical wire tag of this identifier, for example `"SENSOR_IMU"`.
    fn name(self) -> &'static str;

    /// Resolve a canonical tag, or a deprecated alias tag, to its identifier.
    fn from_name(name: &str) -> Option<Self>;

    /// Resolve a raw integer to its identifier.
    fn from_ordinal(ordinal: usize) -> Result<Self, OutOfRangeError> {
        Self::all()
            .get(ordinal)
            .copied()
            .ok_or(OutOfRangeError {
                taxonomy: Self::NAME,
                value: ordinal,
                size: Self::SIZE,
            })
    }
}

// ------------------------------------------------------------------------------------------------
// ERRORS
// ------------------------------------------------------------------------------------------------

/// A raw integer did not correspond to any value of an enumeration.
///
/// This usually means a corrupted or newer-version wire value was decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{value} is not a valid {taxonomy} (expected an ordinal below {size})")]
pub struct OutOfRangeError {
    /// Name of the enumeration the lookup was made in.
    pub taxonomy: &'static str,

    /// The offending value.
    pub value: usize,

    /// Cardinality of the enumeration.
    pub size: usize,
}

/// A tag did not correspond to any value (or alias) of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{name}\" is not a recognised {taxonomy}")]
pub struct UnknownNameError {
    /// Name of the enumeration the lookup was made in.
    pub taxonomy: &'static str,

    /// The unrecognised tag.
    pub name: String,
}

/// An enumeration, its cardinality constant and its descriptor catalog disagree.
///
/// Any lookup made after this error has been raised cannot be trusted, so it must halt startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("{taxonomy} declares {expected} values but lists {found}")]
    Cardinality {
        taxonomy: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Value {index} of {taxonomy} has ordinal {found}")]
    Ordinal {
        taxonomy: &'static str,
        index: usize,
        found: usize,
    },

    #[error("The tag of {taxonomy} value {index} does not resolve back to it")]
    Tag {
        taxonomy: &'static str,
        index: usize,
    },

    #[error("The {taxonomy} catalog has {found} entries but the cardinality constant is {expected}")]
    CatalogLength {
        taxonomy: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Entry {index} of the {taxonomy} catalog describes ordinal {found}")]
    CatalogOrder {
        taxonomy: &'static str,
        index: usize,
        found: usize,
    },
}

// ------------------------------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ------------------------------------------------------------------------------------------------

/// Check that an enumeration's value table agrees with its cardinality constant and its tags.
pub fn check_taxonomy<T: Taxonomy>() -> Result<(), ConsistencyError> {
    let all = T::all();

    if all.len() != T::SIZE {
        return Err(ConsistencyError::Cardinality {
            taxonomy: T::NAME,
            expected: T::SIZE,
            found: all.len(),
        });
    }

    for (index, value) in all.iter().enumerate() {
        if value.ordinal() != index {
            return Err(ConsistencyError::Ordinal {
                taxonomy: T::NAME,
                index,
                found: value.ordinal(),
            });
        }

        if T::from_name(value.name()) != Some(*value) {
            return Err(ConsistencyError::Tag {
                taxonomy: T::NAME,
                index,
            });
        }
    }

    Ok(())
}

// ------------------------------------------------------------------------------------------------
// MACROS
// ------------------------------------------------------------------------------------------------

/// Declare an enumeration of the taxonomy against its cardinality constant.
///
/// Each variant is paired with its wire tag. Deprecated tags may be listed in a trailing
/// `aliases` block, each pointing at the variant that replaced it.
///
/// The generated `ALL` table is typed `[Self; SIZE]`, so a variant count that differs from the
/// cardinality constant is a compile error. Ordinals are checked for contiguity in a const block.
macro_rules! taxonomy {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $size:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $tag:literal
            ),+ $(,)?
        }
        $(
            aliases {
                $($alias:literal => $target:ident),+ $(,)?
            }
        )?
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize
        )]
        #[serde(try_from = "u32", into = "u32")]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $name {
            /// All values in ascending ordinal order.
            pub const ALL: [$name; $size] = [$($name::$variant),+];

            /// Integer value of this identifier.
            pub const fn ordinal(self) -> usize {
                self as usize
            }
        }

        const _: () = {
            let mut i = 0;
            while i < $size {
                assert!(
                    $name::ALL[i].ordinal() == i,
                    "taxonomy ordinals must be zero-based and contiguous"
                );
                i += 1;
            }
            assert!(
                $name::ALL[$size - 1].ordinal() + 1 == $size,
                "last ordinal + 1 must equal the cardinality constant"
            );
        };

        impl $crate::registry::Taxonomy for $name {
            const NAME: &'static str = stringify!($name);
            const SIZE: usize = $size;

            fn all() -> &'static [Self] {
                static ALL: [$name; $size] = $name::ALL;
                &ALL
            }

            fn ordinal(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $tag),+
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($tag => Some($name::$variant),)+
                    $($($alias => Some($name::$target),)+)?
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::registry::Taxonomy::name(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::registry::UnknownNameError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::registry::Taxonomy>::from_name(s).ok_or_else(|| {
                    $crate::registry::UnknownNameError {
                        taxonomy: stringify!($name),
                        name: s.to_owned(),
                    }
                })
            }
        }

        impl ::std::convert::TryFrom<u32> for $name {
            type Error = $crate::registry::OutOfRangeError;

            fn try_from(value: u32) -> Result<Self, Self::Error> {
                <$name as $crate::registry::Taxonomy>::from_ordinal(value as usize)
            }
        }

        impl From<$name> for u32 {
            fn from(value: $name) -> u32 {
                value as u32
            }
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;

    taxonomy! {
        /// Three value enumeration used to exercise the macro.
        pub enum Gait: GAIT_SIZE {
            Stand => "GAIT_STAND",
            Walk => "GAIT_WALK",
            Trot => "GAIT_TROT",
        }
        aliases {
            "GAIT_STEP" => Walk,
        }
    }

    const GAIT_SIZE: usize = 3;

    #[test]
    fn test_ordinals() {
        assert_eq!(Gait::all(), &[Gait::Stand, Gait::Walk, Gait::Trot]);
        for (i, g) in Gait::all().iter().enumerate() {
            assert_eq!(Taxonomy::ordinal(*g), i);
            assert_eq!(Gait::from_ordinal(i), Ok(*g));
        }
    }

    #[test]
    fn test_out_of_range() {
        let err = Gait::from_ordinal(3).unwrap_err();
        assert_eq!(
            err,
            OutOfRangeError {
                taxonomy: "Gait",
                value: 3,
                size: 3
            }
        );
        assert!(err.to_string().contains("Gait"));
    }

    #[test]
    fn test_names_and_aliases() {
        assert_eq!(Gait::Trot.to_string(), "GAIT_TROT");
        assert_eq!(Gait::from_name("GAIT_WALK"), Some(Gait::Walk));
        assert_eq!(Gait::from_name("GAIT_STEP"), Some(Gait::Walk));
        assert_eq!(Gait::from_name("gait_walk"), None);
        assert_eq!("GAIT_STAND".parse::<Gait>(), Ok(Gait::Stand));

        let err = "GAIT_GALLOP".parse::<Gait>().unwrap_err();
        assert_eq!(err.taxonomy, "Gait");
        assert_eq!(err.name, "GAIT_GALLOP");
    }

    #[test]
    fn test_check_taxonomy() {
        assert_eq!(check_taxonomy::<Gait>(), Ok(()));
    }

    /// Declare a hand-written taxonomy over `usize` values, bypassing `taxonomy!`.
    macro_rules! raw_taxonomy {
        ($name:ident, $size:expr, [$($v:expr),*], $tag:expr, $lookup:expr) => {
            #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
            struct $name(usize);

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }

            impl Taxonomy for $name {
                const NAME: &'static str = stringify!($name);
                const SIZE: usize = $size;

                fn all() -> &'static [Self] {
                    static ALL: &[$name] = &[$($name($v)),*];
                    ALL
                }

                fn ordinal(self) -> usize {
                    self.0
                }

                fn name(self) -> &'static str {
                    $tag(self.0)
                }

                fn from_name(name: &str) -> Option<Self> {
                    $lookup(name).map($name)
                }
            }
        };
    }

    fn joint_tag(i: usize) -> &'static str {
        ["JOINT_0", "JOINT_1", "JOINT_2"][i]
    }

    fn joint_lookup(name: &str) -> Option<usize> {
        ["JOINT_0", "JOINT_1", "JOINT_2"].iter().position(|t| *t == name)
    }

    raw_taxonomy!(ShortJoint, 3, [0, 1], joint_tag, joint_lookup);
    raw_taxonomy!(SwappedJoint, 3, [0, 2, 1], joint_tag, joint_lookup);
    raw_taxonomy!(
        UntaggedJoint,
        3,
        [0, 1, 2],
        |_| "JOINT",
        |name: &str| if name == "JOINT" { Some(0) } else { None }
    );

    #[test]
    fn test_check_taxonomy_cardinality() {
        assert_eq!(
            check_taxonomy::<ShortJoint>(),
            Err(ConsistencyError::Cardinality {
                taxonomy: "ShortJoint",
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn test_check_taxonomy_ordinal() {
        assert_eq!(
            check_taxonomy::<SwappedJoint>(),
            Err(ConsistencyError::Ordinal {
                taxonomy: "SwappedJoint",
                index: 1,
                found: 2,
            })
        );
    }

    #[test]
    fn test_check_taxonomy_tag() {
        // Value 0 round trips through its tag, value 1 resolves to value 0
        assert_eq!(
            check_taxonomy::<UntaggedJoint>(),
            Err(ConsistencyError::Tag {
                taxonomy: "UntaggedJoint",
                index: 1,
            })
        );
    }
}
