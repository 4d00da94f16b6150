// File: ./src/server/middleware.rs
//! Tower middleware that logs one line per handled request.
use http::{Request, Response};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;
use tower_layer::Layer;
use tower_service::Service;

#[derive(Clone, Debug)]
pub struct RequestLogLayer {
    pub tag: Arc<str>,
}

impl RequestLogLayer {
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.into() }
    }
}

impl<S> Layer<S> for RequestLogLayer {
    type Service = RequestLogService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequestLogService {
            inner,
            tag: self.tag.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RequestLogService<S> {
    inner: S,
    tag: Arc<str>,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for RequestLogService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let method = req.method().clone();
        let path = req.uri().path().to_string();
        let tag = self.tag.clone();
        let started = Instant::now();
        let fut = self.inner.call(req);

        Box::pin(async move {
            let result = fut.await;
            match &result {
                Ok(response) => log::info!(
                    "[{}] {} {} -> {} ({} ms)",
                    tag,
                    method,
                    path,
                    response.status().as_u16(),
                    started.elapsed().as_millis()
                ),
                Err(_) => log::warn!("[{}] {} {} -> service error", tag, method, path),
            }
            result
        })
    }
}
