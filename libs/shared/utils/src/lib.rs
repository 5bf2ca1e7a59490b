pub mod dates;
pub mod storage;
pub mod test_utils;
pub mod validation;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use validation::ValidationError;
