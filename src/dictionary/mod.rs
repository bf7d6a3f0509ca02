// Dictionary module - CSV parsing, local/remote sources and the lookup snapshot

mod lookup;
mod source;
mod store;

pub use lookup::{Lookup, LookupService};
pub use source::{DictionarySource, SourceError};
pub use store::{normalize_term, parse, Dictionary, DictionaryEntry};
