use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tonic::metadata::MetadataMap;
use tonic::{Request, Response, Status};

use crate::proto::*;
use crate::transport::Transport;
use crate::Client;

/// A request as the mock saw it.
#[derive(Debug, Clone)]
pub struct Recorded<T> {
    pub authorization: Option<String>,
    pub message: T,
}

fn record<T>(log: &Mutex<Vec<Recorded<T>>>, request: Request<T>) {
    let authorization = bearer(request.metadata());
    log.lock().unwrap().push(Recorded {
        authorization,
        message: request.into_inner(),
    });
}

fn bearer(metadata: &MetadataMap) -> Option<String> {
    metadata
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

/// Recording [`Transport`] double with scriptable responses.
pub struct MockTransport {
    pub token: Mutex<String>,
    pub token_ttl_seconds: Mutex<Option<i64>>,
    pub token_failure: Mutex<Option<Status>>,
    pub token_fetches: AtomicUsize,

    pub send_response: Mutex<SendEmailResponse>,
    pub send_failure: Mutex<Option<Status>>,
    pub update_response: Mutex<UpdateResponse>,
    pub exists: AtomicBool,

    pub sent: Mutex<Vec<Recorded<SendMailRequest>>>,
    pub raw: Mutex<Vec<Recorded<EmlMailRequest>>>,
    pub group_mail: Mutex<Vec<Recorded<GroupMailData>>>,
    pub inserts: Mutex<Vec<Recorded<InsertEmailToGroupRequest>>>,
    pub removes: Mutex<Vec<Recorded<RemoveEmailFromGroupRequest>>>,
    pub checks: Mutex<Vec<Recorded<CheckEmailInGroupRequest>>>,
    pub auth_requests: Mutex<Vec<AuthRequest>>,
    pub closes: AtomicUsize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            token: Mutex::new("fixture-token".to_owned()),
            token_ttl_seconds: Mutex::new(Some(60)),
            token_failure: Mutex::new(None),
            token_fetches: AtomicUsize::new(0),
            send_response: Mutex::new(SendEmailResponse {
                message: vec!["msg-1".to_owned(), "msg-2".to_owned()],
                emails_left: 123,
            }),
            send_failure: Mutex::new(None),
            update_response: Mutex::new(UpdateResponse {
                success: Some(true),
                message: String::new(),
            }),
            exists: AtomicBool::new(true),
            sent: Mutex::new(Vec::new()),
            raw: Mutex::new(Vec::new()),
            group_mail: Mutex::new(Vec::new()),
            inserts: Mutex::new(Vec::new()),
            removes: Mutex::new(Vec::new()),
            checks: Mutex::new(Vec::new()),
            auth_requests: Mutex::new(Vec::new()),
            closes: AtomicUsize::new(0),
        }
    }

    pub fn with_token_ttl(self, ttl: Option<i64>) -> Self {
        *self.token_ttl_seconds.lock().unwrap() = ttl;
        self
    }

    pub fn with_token(self, token: &str) -> Self {
        *self.token.lock().unwrap() = token.to_owned();
        self
    }

    pub fn fetches(&self) -> usize {
        self.token_fetches.load(Ordering::SeqCst)
    }

    pub fn dispatched(&self) -> usize {
        self.sent.lock().unwrap().len()
            + self.raw.lock().unwrap().len()
            + self.group_mail.lock().unwrap().len()
            + self.inserts.lock().unwrap().len()
            + self.removes.lock().unwrap().len()
            + self.checks.lock().unwrap().len()
    }

    fn send_result(&self) -> Result<Response<SendEmailResponse>, Status> {
        match self.send_failure.lock().unwrap().clone() {
            Some(status) => Err(status),
            None => Ok(Response::new(self.send_response.lock().unwrap().clone())),
        }
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get_jwt_token(
        &self,
        request: Request<AuthRequest>,
    ) -> Result<Response<AuthResponse>, Status> {
        self.token_fetches.fetch_add(1, Ordering::SeqCst);
        self.auth_requests.lock().unwrap().push(request.into_inner());
        if let Some(status) = self.token_failure.lock().unwrap().clone() {
            return Err(status);
        }
        let expires = self
            .token_ttl_seconds
            .lock()
            .unwrap()
            .map(|seconds| prost_types::Timestamp { seconds, nanos: 0 });
        Ok(Response::new(AuthResponse {
            token: self.token.lock().unwrap().clone(),
            expires,
        }))
    }

    async fn send_email(
        &self,
        request: Request<SendMailRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        record(&self.sent, request);
        self.send_result()
    }

    async fn send_eml_email(
        &self,
        request: Request<EmlMailRequest>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        record(&self.raw, request);
        self.send_result()
    }

    async fn send_group_email(
        &self,
        request: Request<GroupMailData>,
    ) -> Result<Response<SendEmailResponse>, Status> {
        record(&self.group_mail, request);
        self.send_result()
    }

    async fn insert_email_to_group(
        &self,
        request: Request<InsertEmailToGroupRequest>,
    ) -> Result<Response<UpdateResponse>, Status> {
        record(&self.inserts, request);
        Ok(Response::new(self.update_response.lock().unwrap().clone()))
    }

    async fn remove_email_from_group(
        &self,
        request: Request<RemoveEmailFromGroupRequest>,
    ) -> Result<Response<UpdateResponse>, Status> {
        record(&self.removes, request);
        Ok(Response::new(self.update_response.lock().unwrap().clone()))
    }

    async fn check_email_in_group(
        &self,
        request: Request<CheckEmailInGroupRequest>,
    ) -> Result<Response<CheckEmailInGroupResponse>, Status> {
        record(&self.checks, request);
        Ok(Response::new(CheckEmailInGroupResponse {
            exists: self.exists.load(Ordering::SeqCst),
        }))
    }

    async fn close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}

/// Client wired to a fresh mock; the mock handle is returned for assertions.
pub fn mock_client(api_key: &str) -> (Client, Arc<MockTransport>) {
    mock_client_with(api_key, MockTransport::new())
}

pub fn mock_client_with(api_key: &str, mock: MockTransport) -> (Client, Arc<MockTransport>) {
    let mock = Arc::new(mock);
    let client = Client::with_transport(api_key, mock.clone()).expect("valid api key");
    (client, mock)
}
