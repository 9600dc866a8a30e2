use crate::types::parameter::Parameter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Climate payload has no 'properties.parameter' object")]
    MissingParameterBlock,

    #[error("Climate payload is missing the {0} series")]
    MissingParameter(Parameter),

    #[error("Climate payload series {0} is not a map of date to number")]
    Malformed(Parameter, #[source] serde_json::Error),

    #[error("no valid data")]
    NoValidData,
}
