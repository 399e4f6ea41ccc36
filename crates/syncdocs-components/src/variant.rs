//! Variant enums.

/// Declare a variant enum parsed from the `variant` prop.
///
/// The first variant is the default and is used for missing or unknown names.
macro_rules! variants {
    (
        $(#[$meta:meta])*
        $name:ident {
            $default:ident => $default_key:literal
            $(, $variant:ident => $key:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            #[default]
            $default,
            $($variant,)*
        }

        impl $name {
            /// Every variant, default first.
            pub const ALL: &'static [$name] = &[$name::$default, $($name::$variant,)*];

            /// Parse a variant name; unknown or missing names give the default.
            pub fn parse(value: Option<&str>) -> Self {
                match value.map(str::trim) {
                    $(Some($key) => $name::$variant,)*
                    _ => $name::$default,
                }
            }

            /// Name used in markup and docs.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::$default => $default_key,
                    $($name::$variant => $key,)*
                }
            }
        }
    };
}
