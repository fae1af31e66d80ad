//! Domain layer: the journal entry type.

pub mod access_record;

pub use access_record::AccessRecord;
