mod conversion;
mod validation;

pub use conversion::{DefaultStorageConversion, StorageConversion};
pub use validation::{DefaultStorageValidation, StorageValidation};
