//! Macros for declaring form fields.

/// Generate a field enum and its `Field` trait implementation.
///
/// Each variant names its wire name, which is what API payloads and
/// fetched records use as the key.
///
/// # Example
///
/// ```
/// use formstate::core::Field;
/// use formstate::field_enum;
///
/// field_enum! {
///     pub enum DishField {
///         Name => "nome",
///         Cuisine => "cozinha",
///         Price => "valor",
///     }
/// }
///
/// assert_eq!(DishField::Cuisine.name(), "cozinha");
/// assert_eq!(DishField::from_name("valor"), Some(DishField::Price));
/// assert_eq!(DishField::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! field_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant
            ),*
        }

        impl $name {
            /// Every field of the form, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl $crate::core::Field for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $wire),*
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($wire => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Field;

    field_enum! {
        enum OrderField {
            UserId => "usuarioId",
            Phone => "clienteTelefone",
            Total => "total",
        }
    }

    #[test]
    fn field_enum_macro_generates_trait() {
        assert_eq!(OrderField::UserId.name(), "usuarioId");
        assert_eq!(OrderField::Phone.name(), "clienteTelefone");
        assert_eq!(OrderField::from_name("total"), Some(OrderField::Total));
        assert_eq!(OrderField::from_name("status"), None);
    }

    #[test]
    fn all_lists_fields_in_order() {
        assert_eq!(
            OrderField::ALL,
            &[OrderField::UserId, OrderField::Phone, OrderField::Total]
        );
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&OrderField::Phone).unwrap();
        assert_eq!(json, "\"clienteTelefone\"");

        let field: OrderField = serde_json::from_str("\"usuarioId\"").unwrap();
        assert_eq!(field, OrderField::UserId);
    }

    #[test]
    fn field_enum_supports_visibility() {
        field_enum! {
            pub enum PublicField {
                A => "a",
            }
        }

        assert_eq!(PublicField::A.name(), "a");
    }
}
