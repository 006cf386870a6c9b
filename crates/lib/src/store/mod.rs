//! Typed object store on top of a [`Backend`](crate::backend::Backend).
//!
//! Records are plain serde structs implementing [`Record`]; a [`Table`]
//! gives typed save/load/delete/scan access to one collection.

use serde::{Serialize, de::DeserializeOwned};

mod errors;
pub use errors::StoreError;

mod table;
pub use table::Table;

/// A type that can be persisted in a [`Table`].
///
/// # Example
///
/// ```
/// use paperboard::store::Record;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Serialize, Deserialize)]
/// struct Note {
///     text: String,
/// }
///
/// impl Record for Note {
///     fn collection() -> &'static str {
///         "note"
///     }
/// }
///
/// assert_eq!(Note::collection(), "note");
/// ```
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Name of the collection records of this type are stored in.
    ///
    /// Must be lowercase ascii, digits or `_`, since it becomes part of every
    /// [`Oid`](crate::Oid) issued for the type.
    fn collection() -> &'static str;
}
