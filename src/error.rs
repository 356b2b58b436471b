//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::catalog::CatalogError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Cabin not found")]
    NotFound,

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Catalog(_) | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// What the visitor sees; server-side details stay in the log
    fn public_message(&self) -> &'static str {
        match self {
            AppError::NotFound => "Cabin not found",
            AppError::Catalog(_) => "The cabin catalog is unavailable",
            AppError::Template(_) => "This page could not be rendered",
        }
    }
}

/// Standalone error page, independent of the template engine so it still
/// renders when a template fails
fn error_page(status: StatusCode, message: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{code} - The Wild Oasis</title></head>
<body style="font-family: sans-serif; text-align: center; padding: 50px;">
    <h1>{code}</h1>
    <p>{message}</p>
    <a href="/cabins">Back to all cabins</a>
</body>
</html>"#,
        code = status.as_u16(),
    ))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, error_page(status, self.public_message())).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
