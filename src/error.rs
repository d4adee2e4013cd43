use std::{
    error::Error as StdError,
    fmt::{self, Display},
};

/// The result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a training request.
///
/// No stage catches or translates: an error raised anywhere in the pipeline
/// propagates unchanged to the server boundary, which turns it into a
/// generic failure response.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The boolean expression could not be tokenized or parsed.
    ExprSyntax { position: usize, message: String },
    /// The expression references a variable outside `X1..XN`.
    UnknownVariable { name: String },
    /// A layer names an activation function the builder does not know.
    UnknownActivation { name: String },
    /// The request names an optimizer the backend does not know.
    UnknownOptimizer { name: String },
    /// The request names a loss function the backend does not know.
    UnknownLoss { name: String },
    /// The network structure contains no layers.
    EmptyNetwork,
    /// The request body was not valid JSON for a train request.
    BadRequest { message: String },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Error::ExprSyntax { position, message } => {
                format!("boolean expression is malformed at position {position}: {message}")
            }
            Error::UnknownVariable { name } => {
                format!("boolean expression references undefined variable {name}")
            }
            Error::UnknownActivation { name } => {
                format!("unsupported activation function {name:?}")
            }
            Error::UnknownOptimizer { name } => {
                format!("unsupported optimizer {name:?}")
            }
            Error::UnknownLoss { name } => {
                format!("unsupported loss function {name:?}")
            }
            Error::EmptyNetwork => {
                "network structure must contain at least one layer".to_owned()
            }
            Error::BadRequest { message } => {
                format!("malformed train request: {message}")
            }
        };

        write!(f, "{s}")
    }
}

impl StdError for Error {}
