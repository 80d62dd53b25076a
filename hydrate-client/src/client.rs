use async_trait::async_trait;
use hydrate_model::{form::FormInput, water::WaterIntakeResult};
use reqwest::StatusCode;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request")]
    RequestError,
    #[error("incorrect server response")]
    ResponseError,
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn estimate(&self, form: &FormInput) -> Result<WaterIntakeResult>;
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(base_url: &str) -> Self {
        Self {
            url: format!("{}/api/water-intake", base_url.trim_end_matches('/')),
            client: reqwest::Client::new(),
        }
    }
}

pub fn create(base_url: String) -> impl Client {
    ClientImpl::new(&base_url)
}

#[async_trait]
impl Client for ClientImpl {
    async fn estimate(&self, form: &FormInput) -> Result<WaterIntakeResult> {
        let resp = self
            .client
            .post(&self.url)
            .json(form)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)?;

        let status = resp.status();
        if status == StatusCode::BAD_REQUEST {
            let body: ErrorBody = resp.json().await.map_err(|_| Error::ResponseError)?;
            return Err(Error::InvalidInput(body.error));
        } else if status.is_client_error() {
            return Err(Error::RequestError);
        } else if status.is_server_error() {
            return Err(Error::InternalServerError);
        }

        resp.json().await.map_err(|_| Error::ResponseError)
    }
}
