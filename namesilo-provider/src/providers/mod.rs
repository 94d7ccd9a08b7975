//! Registrar implementations

/// Shared utilities used by provider implementations.
pub mod common;

mod namesilo;

pub(crate) use namesilo::{
    OP_ADD_RECORD, OP_DELETE_RECORD, OP_LIST_RECORDS, OP_UPDATE_RECORD, ReplyDecoder,
};
pub use namesilo::{NamesiloClient, NamesiloClientBuilder};
