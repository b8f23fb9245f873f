use std::ops::Deref;

use crate::domain::error::AppError;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::{JsonBody, Payload};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Recipient lists travel in the body, so the limit is well above actix's 32 KiB default.
const PAYLOAD_LIMIT: usize = 256 * 1024;

/// JSON body extractor that runs `validator` rules before the handler sees the value.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Json<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

fn is_json(mime: mime::Mime) -> bool {
    mime.type_() == mime::APPLICATION
        && (mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON))
}

impl<T> FromRequest for Json<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        JsonBody::new(req, payload, Some(&is_json), true)
            .limit(PAYLOAD_LIMIT)
            .map(|res: Result<T, _>| match res {
                Ok(payload) => payload
                    .validate()
                    .map(|_| Json(payload))
                    .map_err(AppError::from),
                Err(err) => Err(AppError::from(err)),
            })
            .boxed_local()
    }
}
