mod sqlite_store;

pub use sqlite_store::{ArticleStore, DEFAULT_DB_FILE};
