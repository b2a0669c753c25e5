//! Stub collaborators shared by the engine integration tests.

#![allow(dead_code)]

use aastest_contract::{HttpResponse, Request, Transport, TransportError, TransportResult};
use aastest_engine::{ExecConf, Orchestrator};
use aastest_profiles::ProfileRegistry;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

type Handler = dyn Fn(&Request) -> HttpResponse + Send + Sync;

/// In-process transport answering every request with a handler.
pub struct StubTransport {
    probe_status: Option<u16>,
    handler: Box<Handler>,
    probes: AtomicUsize,
    sent: Mutex<Vec<Request>>,
}

impl StubTransport {
    pub fn new(handler: impl Fn(&Request) -> HttpResponse + Send + Sync + 'static) -> Self {
        Self {
            probe_status: Some(200),
            handler: Box::new(handler),
            probes: AtomicUsize::new(0),
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Answer every request with `status` and an empty body.
    pub fn status(status: u16) -> Self {
        Self::new(move |_| HttpResponse::new(status, ""))
    }

    pub fn with_probe_status(mut self, status: u16) -> Self {
        self.probe_status = Some(status);
        self
    }

    /// Make the probe fail as if the connection was refused.
    pub fn unreachable(mut self) -> Self {
        self.probe_status = None;
        self
    }

    pub fn probes(&self) -> usize {
        self.probes.load(Ordering::SeqCst)
    }

    pub fn sent(&self) -> Vec<Request> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn probe(&self, _server: &str) -> TransportResult<HttpResponse> {
        self.probes.fetch_add(1, Ordering::SeqCst);
        match self.probe_status {
            Some(status) => Ok(HttpResponse::new(status, "")),
            None => Err(TransportError::Other("connection refused".into())),
        }
    }

    async fn send(&self, _server: &str, request: &Request) -> TransportResult<HttpResponse> {
        self.sent.lock().unwrap().push(request.clone());
        Ok((self.handler)(request))
    }
}

pub fn orchestrator(transport: Arc<StubTransport>, conf: ExecConf) -> Orchestrator {
    Orchestrator::new(Arc::new(ProfileRegistry::builtin()), transport, conf)
}
