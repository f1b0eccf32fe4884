//! Backend request service contract and in-memory adapters.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    future::Future,
    pin::Pin,
    rc::Rc,
};

use super::endpoint::{ApiError, ApiRequest, ApiResponse, BackendEndpoint};

/// Object-safe boxed future used by [`BackendApi`].
pub type BackendApiFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service performing credentialed JSON calls against the backend.
///
/// Implementations return `Ok` for every HTTP response, including non-2xx statuses, and reserve
/// `Err` for transport and serialization failures.
pub trait BackendApi {
    /// Sends one request.
    fn send<'a>(&'a self, request: ApiRequest)
        -> BackendApiFuture<'a, Result<ApiResponse, ApiError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Backend adapter for targets without network access; every call fails as a network error.
pub struct NoopBackendApi;

impl BackendApi for NoopBackendApi {
    fn send<'a>(
        &'a self,
        request: ApiRequest,
    ) -> BackendApiFuture<'a, Result<ApiResponse, ApiError>> {
        Box::pin(async move {
            Err(ApiError::Network(format!(
                "backend unavailable for {}",
                request.endpoint.path()
            )))
        })
    }
}

type ScriptedResult = Result<ApiResponse, ApiError>;

#[derive(Debug, Clone, Default)]
/// Scripted in-memory backend that records requests and replays queued responses per endpoint.
pub struct MemoryBackendApi {
    responses: Rc<RefCell<HashMap<BackendEndpoint, VecDeque<ScriptedResult>>>>,
    requests: Rc<RefCell<Vec<ApiRequest>>>,
}

impl MemoryBackendApi {
    /// Queues a result for the next call to `endpoint`.
    pub fn respond(&self, endpoint: BackendEndpoint, result: ScriptedResult) {
        self.responses
            .borrow_mut()
            .entry(endpoint)
            .or_default()
            .push_back(result);
    }

    /// Returns every request sent so far, in order.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl BackendApi for MemoryBackendApi {
    fn send<'a>(
        &'a self,
        request: ApiRequest,
    ) -> BackendApiFuture<'a, Result<ApiResponse, ApiError>> {
        Box::pin(async move {
            let endpoint = request.endpoint;
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .get_mut(&endpoint)
                .and_then(VecDeque::pop_front)
                .unwrap_or_else(|| {
                    Err(ApiError::Network(format!(
                        "no scripted response for {}",
                        endpoint.path()
                    )))
                })
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn memory_backend_replays_in_order_and_records_requests() {
        let api = MemoryBackendApi::default();
        api.respond(
            BackendEndpoint::Transactions,
            Ok(ApiResponse::new(200, json!({ "transactions": [] }))),
        );
        api.respond(
            BackendEndpoint::Transactions,
            Err(ApiError::Network("offline".to_string())),
        );
        let api_obj: &dyn BackendApi = &api;

        let first = block_on(api_obj.send(ApiRequest::new(BackendEndpoint::Transactions)));
        assert_eq!(first.expect("first").status, 200);
        let second = block_on(api_obj.send(ApiRequest::new(BackendEndpoint::Transactions)));
        assert_eq!(second, Err(ApiError::Network("offline".to_string())));
        let third = block_on(api_obj.send(ApiRequest::new(BackendEndpoint::Transactions)));
        assert!(matches!(third, Err(ApiError::Network(_))));

        assert_eq!(api.requests().len(), 3);
    }

    #[test]
    fn noop_backend_reports_network_error() {
        let result = block_on(NoopBackendApi.send(ApiRequest::new(BackendEndpoint::Logout)));
        assert!(matches!(result, Err(ApiError::Network(message)) if message.contains("logout")));
    }
}
