use std::ops::Deref;

pub mod definition;

mod dummy;

#[cfg(feature = "database-file")]
mod file;

pub use definition::AbstractDatabase;
pub use dummy::DummyDb;

#[cfg(feature = "database-file")]
pub use file::FileDb;

#[derive(Clone)]
pub enum Database {
    Dummy(DummyDb),
    #[cfg(feature = "database-file")]
    File(FileDb),
}

impl Default for Database {
    fn default() -> Self {
        Self::Dummy(DummyDb::default())
    }
}

impl Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match self {
            Database::Dummy(dummy) => dummy,
            #[cfg(feature = "database-file")]
            Database::File(file) => file,
        }
    }
}
