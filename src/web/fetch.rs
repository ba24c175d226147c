//! Background login request via `gloo-net`.

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;

use crate::consts::{ASYNC_REQUEST_HEADER, ASYNC_REQUEST_VALUE, FORM_CONTENT_TYPE};
use crate::error::TransportError;
use crate::host::LoginTransport;

fn network(err: gloo_net::Error) -> TransportError {
    TransportError::Network(err.to_string())
}

pub struct FetchTransport;

impl LoginTransport for FetchTransport {
    fn post_form(&self, action: &str, body: String) -> LocalBoxFuture<'static, Result<String, TransportError>> {
        let action = action.to_owned();
        Box::pin(async move {
            let resp = Request::post(&action)
                .header("Content-Type", FORM_CONTENT_TYPE)
                .header(ASYNC_REQUEST_HEADER, ASYNC_REQUEST_VALUE)
                .body(body)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            if !resp.ok() {
                return Err(TransportError::Status(resp.status()));
            }
            resp.text().await.map_err(network)
        })
    }
}
