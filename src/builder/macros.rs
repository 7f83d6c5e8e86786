//! Macros for ergonomic state declaration.

/// Generate a `State` implementation for a simple enum.
///
/// # Example
///
/// ```
/// use abacus::state_enum;
/// use abacus::core::State;
///
/// state_enum! {
///     pub enum KeypadMode {
///         Ready,
///         Typing,
///         PoweredOff,
///     }
///     final: [PoweredOff]
/// }
///
/// assert_eq!(KeypadMode::Typing.name(), "Typing");
/// assert!(KeypadMode::PoweredOff.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}
