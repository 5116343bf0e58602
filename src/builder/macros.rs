//! Macros for declaring status enums.

/// Declare a fieldless status enum and implement [`State`](crate::core::State) for it.
///
/// Each variant may carry a wire label (`Variant as "label"`) which becomes
/// both its `name()` and its serde representation. Variants without a label
/// use their identifier.
///
/// # Example
///
/// ```
/// use guesswork::status_enum;
/// use guesswork::core::State;
///
/// status_enum! {
///     pub enum LobbyStatus {
///         Waiting as "waiting",
///         InGame as "in-game",
///         Closed,
///     }
///     final: [Closed]
/// }
///
/// assert_eq!(LobbyStatus::InGame.name(), "in-game");
/// assert_eq!(serde_json::to_string(&LobbyStatus::InGame).unwrap(), "\"in-game\"");
/// assert!(LobbyStatus::Closed.is_final());
/// ```
#[macro_export]
macro_rules! status_enum {
    (@label $variant:ident $label:literal) => { $label };
    (@label $variant:ident) => { stringify!($variant) };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(as $label:literal)?
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $(#[serde(rename = $label)])?
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::status_enum!(@label $variant $($label)?)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    status_enum! {
        enum Signal {
            Green as "green",
            Amber,
            Red as "red",
            Broken,
        }
        final: [Broken]
        error: [Broken]
    }

    #[test]
    fn labels_override_names() {
        assert_eq!(Signal::Green.name(), "green");
        assert_eq!(Signal::Amber.name(), "Amber");
        assert_eq!(Signal::Red.to_string(), "red");
    }

    #[test]
    fn labels_drive_serde() {
        assert_eq!(serde_json::to_string(&Signal::Red).unwrap(), "\"red\"");
        assert_eq!(serde_json::to_string(&Signal::Amber).unwrap(), "\"Amber\"");
        let back: Signal = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(back, Signal::Green);
    }

    #[test]
    fn flags_follow_lists() {
        assert!(Signal::Broken.is_final());
        assert!(Signal::Broken.is_error());
        assert!(!Signal::Green.is_final());
        assert!(!Signal::Red.is_error());
    }

    #[test]
    fn works_without_final_error() {
        status_enum! {
            enum Minimal {
                One,
                Two,
            }
        }

        assert!(!Minimal::One.is_final());
        assert!(!Minimal::Two.is_error());
    }
}
