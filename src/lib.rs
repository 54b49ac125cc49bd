pub mod codec;
pub mod keyspace;
pub mod model;
pub mod mutation;
pub mod repository;
pub mod statistics;
pub mod util;

pub use codec::{ColumnRecord, InnerKey, RowKey, SuperRecord};
pub use keyspace::{Keyspace, MemoryKeyspace, SlicePredicate};
pub use model::{Column, SuperColumn, SuperRow};
pub use mutation::{Mutation, MutationBatch};
pub use repository::{ColumnSelection, Lookup, RepositoryOptions, SuperColumnFamilyRepository};
pub use statistics::Statistics;
pub use util::{Result, Status};
