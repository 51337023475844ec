use thiserror::Error;

#[derive(Error, Debug)]
#[error("error in communication with the weather database: {0}")]
pub struct StoreError(pub String);
impl From<postgres::Error> for StoreError {
    fn from(e: postgres::Error) -> StoreError {
        StoreError(e.to_string())
    }
}
