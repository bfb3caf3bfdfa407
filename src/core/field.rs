//! Field trait for naming form fields.
//!
//! A field is the key under which a form stores one value and, after
//! validation, at most one error message.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for form field names.
///
/// Closed forms declare their fields as an enum (see [`field_enum!`]);
/// extensible forms can use `String` directly.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: fields are map keys
/// - `Debug`: fields show up in diagnostics
/// - `Serialize` + `Deserialize`: fields are persisted in snapshots
///
/// # Example
///
/// ```rust
/// use formstate::core::Field;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Login {
///     User,
///     Password,
/// }
///
/// impl Field for Login {
///     fn name(&self) -> &str {
///         match self {
///             Self::User => "user",
///             Self::Password => "password",
///         }
///     }
///
///     fn from_name(name: &str) -> Option<Self> {
///         match name {
///             "user" => Some(Self::User),
///             "password" => Some(Self::Password),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Login::User.name(), "user");
/// assert_eq!(Login::from_name("password"), Some(Login::Password));
/// ```
///
/// [`field_enum!`]: crate::field_enum
pub trait Field:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Wire name of the field, as used in API payloads.
    fn name(&self) -> &str;

    /// Resolve a wire name back into a field.
    ///
    /// Returns `None` for names the form does not declare.
    fn from_name(name: &str) -> Option<Self>;
}

impl Field for String {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn from_name(name: &str) -> Option<Self> {
        Some(name.to_owned())
    }
}
