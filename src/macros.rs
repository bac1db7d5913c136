//! Macros to reduce boilerplate in the codebase

/// Macro to generate Display and FromStr implementations for enums
///
/// Display writes the canonical spelling. FromStr accepts any ASCII casing of
/// it and reports everything else through the given error constructor.
///
/// # Usage
///
/// ```rust,ignore
/// use crate::error::TrellisError;
///
/// enum_display_fromstr!(
///     MyEnum,
///     TrellisError::invalid_my_enum,
///     {
///         Variant1 => "Variant1",
///         Variant2 => "Variant Two",
///     }
/// );
/// ```
#[macro_export]
macro_rules! enum_display_fromstr {
    (
        $enum_name:ident,
        $error_ctor:path,
        { $($variant:ident => $str:expr),+ $(,)? }
    ) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $($enum_name::$variant => f.write_str($str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::error::TrellisError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok($enum_name::$variant);
                    }
                )+
                Err($error_ctor(s.to_string()))
            }
        }
    };
}
