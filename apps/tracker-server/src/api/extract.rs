//! Request body extraction.

use axum::{
    Form, Json, async_trait,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;

use crate::error::ServerError;

/// Body extractor accepting either `application/json` or
/// `application/x-www-form-urlencoded`.
///
/// A request without a content type decodes to `T::default()`, so an empty
/// POST reaches field validation instead of failing as an unreadable body.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormOrJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase);

        match content_type {
            None => Ok(Self(T::default())),
            Some(ct) if ct.starts_with("application/json") => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ServerError::InvalidBody(e.body_text()))?;
                Ok(Self(value))
            }
            Some(_) => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| ServerError::InvalidBody(e.body_text()))?;
                Ok(Self(value))
            }
        }
    }
}
