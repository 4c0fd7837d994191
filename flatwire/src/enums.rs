//! Byte-backed enumerations.

/// Declare a one-byte enumeration that can be used as a field.
///
/// The type is a transparent `u8` newtype with one associated constant per
/// variant. Values outside the declared set decode as-is, so the bytes on the
/// wire always round-trip.
///
/// ```
/// flatwire::wire_enum! {
///     /// Phase of flight.
///     pub struct FlightPhase {
///         PREFLIGHT = 0,
///         CRUISE = 4,
///         SHUTDOWN = 9,
///     }
/// }
///
/// assert_eq!(FlightPhase::CRUISE.0, 4);
/// assert_eq!(FlightPhase::from(9), FlightPhase::SHUTDOWN);
/// assert_eq!(FlightPhase(7).name(), None);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[repr(transparent)]
        $vis struct $name(pub u8);

        impl $name {
            $(
                $(#[$vmeta])*
                pub const $variant: Self = Self($value);
            )*

            /// Name of the declared constant with this value, if any.
            pub fn name(&self) -> ::core::option::Option<&'static str> {
                $(
                    if self.0 == $value {
                        return ::core::option::Option::Some(stringify!($variant));
                    }
                )*
                ::core::option::Option::None
            }

            /// Returns true if the value is one of the declared constants.
            pub fn is_known(&self) -> bool {
                self.name().is_some()
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.name() {
                    ::core::option::Option::Some(name) => write!(f, "{}::{}", stringify!($name), name),
                    ::core::option::Option::None => write!(f, "{}({})", stringify!($name), self.0),
                }
            }
        }

        impl ::core::convert::From<u8> for $name {
            fn from(value: u8) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.0
            }
        }

        impl $crate::WireOrder for $name {
            fn to_wire(self) -> Self {
                self
            }

            fn from_wire(self) -> Self {
                self
            }
        }

        impl $crate::FixedSize for $name {
            const SIZE: usize = 1;

            fn write_fixed(self, dest: &mut [u8]) {
                dest[0] = self.0;
            }

            fn read_fixed(src: &[u8]) -> Self {
                Self(src[0])
            }
        }

        impl $crate::Field for $name {
            fn kind(&self) -> $crate::FieldKind {
                $crate::FieldKind::Primitive
            }

            fn size(&self) -> usize {
                <Self as $crate::FixedSize>::SIZE
            }

            fn write_to(&self, cursor: &mut $crate::WriteCursor<'_>) -> ::core::result::Result<(), $crate::Error> {
                cursor.write(*self)
            }

            fn read_from(&mut self, cursor: &mut $crate::ReadCursor<'_>) -> ::core::result::Result<(), $crate::Error> {
                *self = cursor.read()?;
                ::core::result::Result::Ok(())
            }
        }
    };
}
