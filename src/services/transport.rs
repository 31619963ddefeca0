// ============================================================================
// TRANSPORT - raw HTTP exchange with the backend
// ============================================================================
// No business logic here: build the request, send it, hand back status + body.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use wasm_bindgen::JsValue;

use crate::error::AppError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

/// One field of a multipart form.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file_name: String, mime: String, bytes: Vec<u8> },
}

impl FormPart {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        FormPart::Text { name: name.to_string(), value: value.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            FormPart::Text { name, .. } | FormPart::File { name, .. } => name,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Path relative to the API base URL, starting with `/`.
    pub path: String,
    pub bearer: Option<String>,
    pub body: RequestBody,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Get, path: path.into(), bearer: None, body: RequestBody::Empty }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Post, path: path.into(), bearer: None, body: RequestBody::Empty }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self { method: HttpMethod::Delete, path: path.into(), bearer: None, body: RequestBody::Empty }
    }

    pub fn bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    pub fn json<T: serde::Serialize>(mut self, body: &T) -> Result<Self, AppError> {
        self.body = RequestBody::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn multipart(mut self, parts: Vec<FormPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request. Only unreachable-backend failures are errors here;
/// non-2xx statuses come back as a normal [`RawResponse`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError>;
}

/// Browser transport on top of gloo-net's fetch wrapper.
#[derive(Clone, Debug, PartialEq)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, request.path);
        let builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        match &request.bearer {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
        let builder = self.builder(&request);
        let prepared = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(parts) => builder.body(to_form_data(parts)?),
        }
        .map_err(|e| AppError::Network(format!("request build error: {}", e)))?;

        let response = prepared
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body })
    }
}

fn to_form_data(parts: &[FormPart]) -> Result<web_sys::FormData, AppError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => form.append_with_str(name, value).map_err(js_error)?,
            FormPart::File { name, file_name, mime, bytes } => {
                let array = js_sys::Uint8Array::from(bytes.as_slice());
                let chunks = js_sys::Array::of1(&array);
                let options = web_sys::BlobPropertyBag::new();
                options.set_type(mime);
                let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&chunks, &options)
                    .map_err(js_error)?;
                form.append_with_blob_and_filename(name, &blob, file_name).map_err(js_error)?;
            }
        }
    }
    Ok(form)
}

fn js_error(e: JsValue) -> AppError {
    AppError::Network(format!("form data error: {:?}", e))
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted transport: replays queued responses and records every request.

    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    pub struct ScriptedTransport {
        replies: Rc<RefCell<VecDeque<Result<RawResponse, AppError>>>>,
        pub requests: Rc<RefCell<Vec<ApiRequest>>>,
    }

    impl ScriptedTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn reply(self, status: u16, body: serde_json::Value) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Ok(RawResponse { status, body: body.to_string() }));
            self
        }

        pub fn reply_raw(self, status: u16, body: &str) -> Self {
            self.replies
                .borrow_mut()
                .push_back(Ok(RawResponse { status, body: body.to_string() }));
            self
        }

        pub fn fail(self, error: AppError) -> Self {
            self.replies.borrow_mut().push_back(Err(error));
            self
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }

        pub fn last_request(&self) -> Option<ApiRequest> {
            self.requests.borrow().last().cloned()
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
            self.requests.borrow_mut().push(request);
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AppError::Network("no scripted reply".into())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_helpers_set_method_bearer_and_body() {
        let req = ApiRequest::post("/playlists")
            .bearer("tok")
            .json(&serde_json::json!({ "name": "Finals" }))
            .unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.bearer.as_deref(), Some("tok"));
        assert_eq!(req.body, RequestBody::Json(serde_json::json!({ "name": "Finals" })));
    }

    #[test]
    fn success_range_is_2xx() {
        assert!(RawResponse { status: 204, body: String::new() }.is_success());
        assert!(!RawResponse { status: 304, body: String::new() }.is_success());
    }

    #[test]
    fn gloo_transport_trims_trailing_slash() {
        assert_eq!(GlooTransport::new("http://localhost:3002/api/").base_url(), "http://localhost:3002/api");
    }
}
