use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::QuestionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
