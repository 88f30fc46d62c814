use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumeration column holds a value no variant matches
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse {kind} from stored value '{value}'")]
    ParseStoredEnum {
        /// Name of the enumeration, e.g. `SportType`
        kind: &'static str,
        /// The stored value that failed to parse
        value: String,
    },

    /// A row that was just written could not be read back
    #[error("{entity} {id} disappeared during the operation")]
    MissingAfterWrite { entity: &'static str, id: i32 },
}
