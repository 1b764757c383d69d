//! DotRs Collection Adapters
//!
//! Generic containers that are themselves objects. Each lives behind a
//! `Ptr`, mutates through `&self` (interior `RwLock`), and enumerates its
//! elements as object handles so generic code can walk it without knowing
//! the element type.
//!
//! ```ignore
//! use dotrs_collections::make_list;
//! use dotrs_core::{enumerate_object, unbox};
//!
//! let list = make_list::<i32>();
//! list.add(1);
//! list.add(2);
//!
//! let total: i32 = enumerate_object(&list.to_object())
//!     .into_iter()
//!     .flatten()
//!     .map(|item| unbox::<i32>(&item).unwrap())
//!     .sum();
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod dictionary;
pub mod error;
pub mod hash_set;
pub mod list;
pub mod pair;
pub mod queue;

pub use dictionary::{make_dictionary, Dictionary};
pub use error::{CollectionError, CollectionResult};
pub use hash_set::{make_hash_set, HashSet};
pub use list::{make_list, List};
pub use pair::KeyValuePair;
pub use queue::{make_queue, Queue};

use dotrs_core::ToObject;

/// Namespace of every collection descriptor
pub const NAMESPACE: &str = "System.Collections.Generic";

/// A value that can be stored in an object collection
pub trait Element: ToObject + Clone + Send + Sync + 'static {}

impl<T: ToObject + Clone + Send + Sync + 'static> Element for T {}
