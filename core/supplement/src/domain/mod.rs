//! supplement 固有のドメイン型（型と不変条件）

pub mod record;
pub mod subject;

pub use record::SupplementResult;
pub use subject::{SubjectName, DEFAULT_SUBJECTS};
