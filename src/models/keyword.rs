//! String-backed enumerations for the host document's keyword values.
//!
//! The host tool adds new keywords over time (new node kinds, new paint kinds,
//! new alignment modes). A strict enum would reject a whole node over one
//! unfamiliar string, so every keyword type generated here keeps unknown
//! values in an `Other(String)` variant and round-trips them unchanged.

/// Declares a keyword enum serialized as its SCREAMING_SNAKE_CASE string.
///
/// Generates the enum (with a trailing `Other(String)` catch-all),
/// `as_str`, `From<String>`, `From<Enum> for String` and `Display`.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A keyword this crate does not know about, kept verbatim.
            Other(String),
        }

        impl $name {
            /// The wire representation of this keyword.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $text, )+
                    Self::Other(raw) => raw.as_str(),
                }
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                match raw.as_str() {
                    $( $text => Self::$variant, )+
                    _ => Self::Other(raw),
                }
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::from(raw.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $( $name::$variant => $text.to_string(), )+
                    $name::Other(raw) => raw,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use keyword_enum;
