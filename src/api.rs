//! Remote Collection Client
//!
//! REST bindings for the todo collection, organized like the backend routes:
//! `GET /todos`, `POST /todos`, `PUT /todos/{id}`, `DELETE /todos/{id}`.

use reqwest::Client;
use thiserror::Error;

use crate::models::{NewTodo, Todo};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(u16),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Remote operations on the todo collection.
///
/// The controller is generic over this so tests can swap in a mock.
#[allow(async_fn_in_trait)]
pub trait TodoApi {
    async fn fetch_all(&self) -> ApiResult<Vec<Todo>>;
    async fn create(&self, text: &str) -> ApiResult<Todo>;
    async fn update(&self, todo: &Todo) -> ApiResult<()>;
    async fn delete(&self, id: u32) -> ApiResult<()>;
}

/// `reqwest`-backed client; fetch-based on wasm32.
#[derive(Clone)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Non-2xx responses and transport failures are treated uniformly as
/// "operation failed" by the caller; the split here only feeds the log line.
fn check_status(res: reqwest::Response) -> ApiResult<reqwest::Response> {
    let status = res.status();
    if status.is_success() {
        Ok(res)
    } else {
        Err(ApiError::Status(status.as_u16()))
    }
}

impl TodoApi for HttpTodoApi {
    async fn fetch_all(&self) -> ApiResult<Vec<Todo>> {
        let res = self.client.get(&self.base_url).send().await?;
        Ok(check_status(res)?.json().await?)
    }

    async fn create(&self, text: &str) -> ApiResult<Todo> {
        let res = self
            .client
            .post(&self.base_url)
            .json(&NewTodo { text, is_editing: false })
            .send()
            .await?;
        Ok(check_status(res)?.json().await?)
    }

    async fn update(&self, todo: &Todo) -> ApiResult<()> {
        let res = self
            .client
            .put(self.item_url(todo.id))
            .json(todo)
            .send()
            .await?;
        check_status(res)?;
        Ok(())
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let res = self.client.delete(self.item_url(id)).send().await?;
        check_status(res)?;
        Ok(())
    }
}
