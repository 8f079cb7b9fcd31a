mod account;
mod patch;
mod profile;

pub use account::*;
pub use patch::*;
pub use profile::*;
