use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Two definitions map to the same constant name.
    #[error("constant `{name}` would be generated for both id {first} and id {second}")]
    DuplicateName { name: String, first: u32, second: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
