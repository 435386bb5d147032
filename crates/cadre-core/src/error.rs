//! Error types for `cadre-core`.

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  #[error("person not found: {0}")]
  PersonNotFound(Uuid),

  #[error("position not found: {0}")]
  PositionNotFound(Uuid),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
