use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("SERVICE NOT FOUND: no '{service}' registered in the container")]
    ServiceNotFound { service: &'static str },

    #[error("TYPE NOT FOUND: '{type_name}' is not a bound constructible type")]
    TypeNotFound { type_name: String },

    #[error("CONSTRUCTION CYCLE: {chain}")]
    ConstructionCycle { chain: String },

    #[error("ROUTING ERROR: {message}")]
    InvalidRoute { message: String },

    #[error("PARSE ERROR: {message}")]
    Parse { message: String },

    #[error("DISPATCH ERROR: {message}")]
    Dispatch { message: String },
}
