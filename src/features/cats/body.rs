use crate::error::ApiError;
use crate::features::cats::model::JsonCatPayload;
use axum::Form;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;

/// Cat body extractor accepting either a urlencoded form or JSON.
///
/// Anything that is not a form is read as JSON whatever its content type, and
/// an empty body counts as an empty payload. Undecodable bodies are answered
/// with the JSON error shape instead of axum's plain-text rejections.
pub struct CatBody(pub JsonCatPayload);

impl<S> FromRequest<S> for CatBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(payload) = Form::<JsonCatPayload>::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            return Ok(CatBody(payload));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(CatBody(JsonCatPayload::default()));
        }

        let payload = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::BadRequest(format!("Invalid request body: {e}")))?;

        Ok(CatBody(payload))
    }
}
