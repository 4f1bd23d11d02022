//! Descriptor catalog, the flat per-molecule record and the aggregator that fills it.

pub mod aggregate;
pub mod catalog;
pub mod record;
pub mod value;

pub use aggregate::*;
pub use catalog::*;
pub use record::*;
pub use value::*;
