pub mod catalog;
pub mod contacts;
pub mod error;
pub mod session;
pub mod users;

pub use catalog::{apply, Catalog, Command, Outcome};
pub use contacts::{Contact, ContactFile};
pub use error::{RecordError, RecordResult};
pub use users::{UserFile, UserRecord};
