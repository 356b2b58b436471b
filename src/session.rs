//! Reservation session cookie

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue},
    response::Response,
};
use uuid::Uuid;

/// Cookie carrying the session id
pub const SESSION_COOKIE: &str = "reservation_session";

/// Browser session identified by the reservation cookie.
///
/// A request without a valid cookie gets a fresh id; `attach` then sets the
/// cookie on the response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub is_new: bool,
}

impl Session {
    /// Find the session id in `Cookie` header values
    pub fn from_cookies<'a>(values: impl IntoIterator<Item = &'a str>) -> Option<Uuid> {
        values
            .into_iter()
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
    }

    /// Add the `Set-Cookie` header for a new session
    pub fn attach(&self, mut response: Response) -> Response {
        if !self.is_new {
            return response;
        }

        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, self.id
        );
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        response
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts
            .headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok());

        Ok(match Session::from_cookies(cookies) {
            Some(id) => Session { id, is_new: false },
            None => Session {
                id: Uuid::new_v4(),
                is_new: true,
            },
        })
    }
}
