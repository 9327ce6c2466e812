//! Field extractor for write endpoints
//!
//! Clients send book fields the ways browsers and `curl` do:
//!
//! - `application/json` body
//! - `application/x-www-form-urlencoded` body (`curl -d`, HTML forms)
//! - `multipart/form-data` body (`curl -F`)
//! - URL query string, e.g. `POST /books?title=Dune&author=Herbert`
//!
//! For the form encodings a field missing from the body is looked up in the
//! query string; the body wins when both carry it. Without a `Content-Type`
//! only the query string is read. Any rejection is reported as a validation
//! error so malformed input always maps to `400 Bad Request`.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Query, Request},
    http::{header, Uri},
    Form, Json,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::validation::ValidationError;
use crate::error::AppError;

type Pairs = Vec<(String, String)>;

/// Deserializes `T` from whichever request source carries the fields
///
/// Form-style sources yield string values only, so `T` should read its
/// fields as strings.
#[derive(Debug, Clone)]
pub struct FormValues<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for FormValues<T>
where
    T: DeserializeOwned + Send + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_ascii_lowercase);

        let Some(content_type) = content_type else {
            let query = query_pairs(req.uri())?;
            return Ok(Self(decode(Vec::new(), query)?));
        };

        if content_type.starts_with("application/json") || content_type.contains("+json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;
            return Ok(Self(value));
        }

        let query = query_pairs(req.uri())?;

        let body = if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;
            multipart_pairs(multipart).await?
        } else {
            let Form(pairs) = Form::<Pairs>::from_request(req, state)
                .await
                .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))?;
            pairs
        };

        Ok(Self(decode(body, query)?))
    }
}

fn query_pairs(uri: &Uri) -> Result<Pairs, ValidationError> {
    Query::<Pairs>::try_from_uri(uri)
        .map(|Query(pairs)| pairs)
        .map_err(|rejection| ValidationError::MalformedBody(rejection.body_text()))
}

/// Text parts of a multipart body; file uploads are ignored
async fn multipart_pairs(mut multipart: Multipart) -> Result<Pairs, ValidationError> {
    let mut pairs = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ValidationError::MalformedBody(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if field.file_name().is_some() {
            continue;
        }
        let value = field
            .text()
            .await
            .map_err(|e| ValidationError::MalformedBody(e.body_text()))?;
        pairs.push((name, value));
    }

    Ok(pairs)
}

// First occurrence of a key wins, body before query.
fn decode<T: DeserializeOwned>(body: Pairs, query: Pairs) -> Result<T, ValidationError> {
    let mut fields = Map::new();
    for (key, value) in body.into_iter().chain(query) {
        fields.entry(key).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| ValidationError::MalformedBody(e.to_string()))
}
