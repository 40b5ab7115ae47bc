use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};
use crate::core::error::ClientError;

/// Whether a non-2xx response is an error or still has a body worth decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    RequireSuccess,
    AcceptAny,
}

impl StatusPolicy {
    pub fn check(self, status: u16) -> Result<(), ClientError> {
        match self {
            StatusPolicy::RequireSuccess if !(200..300).contains(&status) => Err(ClientError::Status(status)),
            _ => Ok(()),
        }
    }
}

// Generic fetch executor: sends the request and decodes a JSON body into T
async fn execute_request<T: DeserializeOwned>(request: Request, policy: StatusPolicy) -> Result<T, ClientError> {
    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ClientError::from_js)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| ClientError::Request("fetch did not return a Response".to_string()))?;

    policy.check(resp.status())?;

    let body = JsFuture::from(resp.json().map_err(ClientError::from_js)?)
        .await
        .map_err(|e| ClientError::Decode(format!("{:?}", e)))?;
    serde_wasm_bindgen::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(url: &str, policy: StatusPolicy) -> Result<T, ClientError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts).map_err(ClientError::from_js)?;
    execute_request(request, policy).await
}

// Chat sends always treat a non-2xx status as a failure
pub async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, ClientError> {
    let payload = serde_json::to_string(body).map_err(|e| ClientError::Request(e.to_string()))?;
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&wasm_bindgen::JsValue::from_str(&payload));
    let request = Request::new_with_str_and_init(url, &opts).map_err(ClientError::from_js)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(ClientError::from_js)?;
    execute_request(request, StatusPolicy::RequireSuccess).await
}
