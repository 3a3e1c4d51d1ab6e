//! Macros for declaring identifier domains.

/// Generate an identifier enum together with its
/// [`StateId`](crate::StateId) implementation.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug`, `serde::Serialize` and `serde::Deserialize`; `name` returns the
/// variant's declared name and `variants` enumerates the domain in
/// declaration order.
///
/// # Example
///
/// ```rust
/// use machinist::{state_id, StateId};
///
/// state_id! {
///     pub enum DoorState {
///         Open,
///         Closed,
///         Locked,
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// assert_eq!(DoorState::variants().len(), 3);
/// ```
#[macro_export]
macro_rules! state_id {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::StateId for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn variants() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::StateId;

    state_id! {
        enum TestId {
            Idle,
            Walking,
            Jumping,
        }
    }

    #[test]
    fn macro_generates_names_from_variants() {
        assert_eq!(TestId::Idle.name(), "Idle");
        assert_eq!(TestId::Walking.name(), "Walking");
        assert_eq!(TestId::Jumping.name(), "Jumping");
    }

    #[test]
    fn macro_enumerates_variants_in_declaration_order() {
        assert_eq!(
            TestId::variants(),
            &[TestId::Idle, TestId::Walking, TestId::Jumping]
        );
    }

    #[test]
    fn macro_supports_visibility() {
        state_id! {
            pub enum PublicId {
                A,
                B,
            }
        }

        let _id = PublicId::A;
    }

    #[test]
    fn generated_enum_serializes_correctly() {
        let id = TestId::Walking;
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: TestId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
