//! Pipeline trait.
use crate::error::Error;

/// Implemented by each pipeline; generic over the return type so that
/// pipelines needing one can use the trait as well.
pub trait Pipeline<T> {
    fn version() -> &'static str;
    fn run(&self) -> Result<T, Error>;
}
