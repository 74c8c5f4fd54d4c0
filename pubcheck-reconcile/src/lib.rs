//! Reconciliation workflow: classify manifest records against the
//! publication store, gate on operator confirmation, and record the batch
//! as published.

pub mod classify;
pub mod confirm;
pub mod publish;

pub use classify::{
    classify, Category, Classification, ClassifyProgress, SilentClassifyProgress,
};
pub use confirm::{read_confirmation, Confirmation};
pub use publish::publish_records;
