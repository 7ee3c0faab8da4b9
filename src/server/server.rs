use bytes::Bytes;
use http_body_util::Full;
use hyper::{body::Incoming, service::Service, Method, Request, Response, StatusCode, Uri};
use url_escape::decode;

use std::{collections::HashMap, convert::Infallible, future::Future, pin::Pin, sync::Arc};

use crate::{
    page::{advice::AdviceSelector, theme::Theme},
    status::board::StatusBoard,
};

use super::myresponse::{AdviceResponse, ThemeResponse};

type ServerResult = Result<Response<Full<Bytes>>, Infallible>;

/// The Server
///
/// Serves the store status and the page helpers to the browser. Every
/// connection gets its own clone; the status board behind it is shared.
#[derive(Clone)]
pub struct Server {
    board: Arc<StatusBoard>,
    whatsapp_number: String,
}

impl Server {
    pub fn setup(board: Arc<StatusBoard>, whatsapp_number: String) -> Self {
        Self {
            board,
            whatsapp_number,
        }
    }

    /// Parses the query parameters and returns a `hashmap` of key pair values
    /// Returns `None` if the parameters are malformed
    fn parse_params(text: &str) -> Option<HashMap<String, String>> {
        let mut map: HashMap<String, String> = HashMap::new();
        for pairs in text.split('&') {
            if pairs.is_empty() {
                continue;
            }
            let mut iterator = pairs.splitn(2, '=');
            map.insert(
                iterator.next()?.to_string(),
                decode(iterator.next()?).to_string(),
            );
        }
        Some(map)
    }

    fn query_params(uri: &Uri) -> Option<HashMap<String, String>> {
        match uri.query() {
            None => Some(HashMap::new()),
            Some(query) => Self::parse_params(query),
        }
    }

    /// The /api/status API endpoint.
    ///
    /// Returns whatever the board rendered last; it never shows a loading state.
    fn status(&self) -> ServerResult {
        Self::ok_data(self.board.current())
    }

    /// The /api/advice API endpoint.
    ///
    /// Takes the selected `option` and returns the pre-filled WhatsApp link for it.
    fn advice(&self, uri: &Uri) -> ServerResult {
        let Some(map) = Self::query_params(uri) else {
            return Self::bad_request("Malformed Parameters.");
        };
        let Some(option) = map.get("option") else {
            return Self::bad_request("option not provided.");
        };

        let mut selector = AdviceSelector::new();
        selector.select(option);
        if !selector.can_submit() {
            return Self::bad_request("option is empty.");
        }
        let Some(url) = selector.submit_link(&self.whatsapp_number) else {
            return Self::server_error("Could not build the advice link.");
        };
        Self::ok_data(AdviceResponse::new(option.clone(), url))
    }

    /// The /api/theme API endpoint.
    ///
    /// `current` is the stored preference, if any. Returns the theme to switch to.
    fn theme(&self, uri: &Uri) -> ServerResult {
        let Some(map) = Self::query_params(uri) else {
            return Self::bad_request("Malformed Parameters.");
        };
        let current = map.get("current").and_then(|value| Theme::from_stored(value));
        Self::ok_data(ThemeResponse::new(Theme::toggle(current)))
    }

    pub fn route(&self, method: &Method, uri: &Uri) -> ServerResult {
        match *method {
            Method::GET => match uri.path() {
                "/api/status" => self.status(),
                "/api/advice" => self.advice(uri),
                "/api/theme" => self.theme(uri),
                _ => Self::not_found(""),
            },
            _ => Self::not_found(""),
        }
    }

    /// Return a 200 OK response with the data provided.
    fn ok_data<T: serde::Serialize>(body: T) -> ServerResult {
        match serde_json::to_string(&body) {
            Ok(data) => Ok(Self::respond(StatusCode::OK, Bytes::from(data))),
            Err(err) => Self::server_error(&err.to_string()),
        }
    }

    /// Return a 500 Internal Server Error response with the message provided.
    fn server_error(message: &str) -> ServerResult {
        tracing::error!("{}", message);
        Ok(Self::respond(
            StatusCode::INTERNAL_SERVER_ERROR,
            Self::error_body(message),
        ))
    }

    /// Return a 404 Not Found response with the message provided. The message here is optional.
    /// Leave it empty for no message.
    fn not_found(message: &str) -> ServerResult {
        let body = if message.is_empty() {
            Bytes::new()
        } else {
            Self::error_body(message)
        };
        Ok(Self::respond(StatusCode::NOT_FOUND, body))
    }

    /// Return a 400 Bad Request response with the message provided.
    fn bad_request(message: &str) -> ServerResult {
        tracing::debug!("Bad request: {}", message);
        Ok(Self::respond(StatusCode::BAD_REQUEST, Self::error_body(message)))
    }

    fn error_body(message: &str) -> Bytes {
        Bytes::from(serde_json::json!({ "error": message }).to_string())
    }

    fn respond(status: StatusCode, body: Bytes) -> Response<Full<Bytes>> {
        let mut res = Response::new(Full::new(body));
        *res.status_mut() = status;
        res
    }
}

impl Service<Request<Incoming>> for Server {
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let res = self.route(req.method(), req.uri());
        Box::pin(async { res })
    }
}
