/// Declares the record type registry from `(Variant => code, "MNEMONIC")` rows.
///
/// Generates the enum plus code/mnemonic conversions and the `ALL` table, so
/// every lookup direction stays driven by a single list.
macro_rules! record_types {
    ( $( $(#[$attr:meta])* ($variant:ident => $code:literal, $mnemonic:literal) )* ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
        pub enum RecordType {
            $( $(#[$attr])* $variant ),*
        }

        impl RecordType {
            /// Every known record type, in registry order.
            pub const ALL: &'static [RecordType] = &[ $( RecordType::$variant ),* ];

            /// Canonical upper-case mnemonic.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( RecordType::$variant => $mnemonic ),*
                }
            }

            /// Wire format code (RFC 1035 and successors).
            pub fn to_u16(&self) -> u16 {
                match self {
                    $( RecordType::$variant => $code ),*
                }
            }

            /// Returns `None` for codes outside the registry.
            pub fn from_u16(value: u16) -> Option<Self> {
                match value {
                    $( $code => Some(RecordType::$variant), )*
                    _ => None,
                }
            }

            /// Exact mnemonic lookup. `aaaa` is not `AAAA`.
            pub fn from_mnemonic(name: &str) -> Option<Self> {
                match name {
                    $( $mnemonic => Some(RecordType::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

pub(crate) use record_types;
