//! Pipeline trait.
use crate::error::Error;

/// This trait must be implemented for each Pipeline,
/// and is generic over the return type so that
/// a pipeline can hand a summary back to its caller
/// (the command line decides on the exit status with it).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
