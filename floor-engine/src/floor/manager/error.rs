use super::super::traits::FloorError;
use crate::layout::LayoutError;
use shared::error::{AppError, ErrorCode};
use shared::floor::{CommandError, CommandErrorCode};
use thiserror::Error;

/// Manager errors
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Floor(#[from] FloorError),

    #[error("Floor layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ManagerError {
    pub fn code(&self) -> CommandErrorCode {
        match self {
            ManagerError::Floor(e) => e.code(),
            ManagerError::Layout(_) | ManagerError::Internal(_) => CommandErrorCode::InternalError,
        }
    }
}

impl From<ManagerError> for CommandError {
    fn from(err: ManagerError) -> Self {
        let code = err.code();
        if code == CommandErrorCode::InternalError {
            tracing::error!(error = %err, "Internal floor error");
        }
        CommandError::new(code, err.to_string())
    }
}

impl From<ManagerError> for AppError {
    fn from(err: ManagerError) -> Self {
        let detail = match &err {
            ManagerError::Floor(FloorError::InvalidTableNumber(n)) => Some(("table_number", *n)),
            ManagerError::Floor(FloorError::InvalidServerCount(n)) => Some(("count", *n)),
            ManagerError::Floor(FloorError::InvalidPartySize(n)) => Some(("party_size", *n)),
            ManagerError::Floor(FloorError::SectionNotFound(n)) => Some(("section", *n)),
            ManagerError::Floor(FloorError::TableAlreadySeated(t))
            | ManagerError::Floor(FloorError::TableAlreadyOpen(t)) => {
                Some(("table_number", t.get() as i64))
            }
            _ => None,
        };
        let app = AppError::with_message(ErrorCode::from(err.code()), err.to_string());
        match detail {
            Some((key, value)) => app.with_detail(key, value),
            None => app,
        }
    }
}

pub type ManagerResult<T> = Result<T, ManagerError>;
