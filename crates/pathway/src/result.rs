#[derive(Serialize, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[serde(tag = "type")]
pub enum Error {
    DatabaseError {
        operation: &'static str,
        with: &'static str,
    },
    InternalError,

    EmailInUse,
    InvalidCredentials,

    InvalidSession,
    UnknownUser,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
pub type Success = Result<()>;
