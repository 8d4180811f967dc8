//! Payload model
//!
//! Wire shape of reference-deduplicated record and table payloads.

pub mod carrier;

pub use carrier::{
    Carrier, FORMAT_ID_KEY, FieldList, FormatId, NESTED_KEY, STRUCTURE_KEY, is_carrier,
};
