//! Board API Client
//!
//! [`BoardApi`] is the persistence seam used by the dispatcher and the
//! session: fetch a board's lists and cards, move one card, write batch
//! orders. [`HttpBoardApi`] implements it over `reqwest` and adds the
//! account and creation endpoints.

use std::future::Future;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::client::config::Config;
use crate::shared::config::ConfigError;
use crate::shared::kanban::{
    AuthResponse, Board, BoardView, Card, CreateBoardRequest, CreateCardRequest, CreateListRequest,
    InviteMemberRequest, InviteMemberResponse, List, ListBoardsResponse, LoginRequest,
    MoveCardRequest, Notification, OrderUpdate, RegisterRequest, ReorderCardsRequest,
    ReorderListsRequest, ReorderResponse, UpdateCardDetailsRequest, UserResponse,
};

/// Errors raised by the client
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// HTTP status of a rejected request
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Persistence calls a board view needs
pub trait BoardApi: Send + Sync {
    fn get_lists(&self, board_id: Uuid) -> impl Future<Output = Result<Vec<List>, ClientError>> + Send;

    fn get_cards(&self, list_id: Uuid) -> impl Future<Output = Result<Vec<Card>, ClientError>> + Send;

    fn move_card(
        &self,
        card_id: Uuid,
        request: MoveCardRequest,
    ) -> impl Future<Output = Result<Card, ClientError>> + Send;

    fn reorder_cards(
        &self,
        cards: Vec<OrderUpdate>,
    ) -> impl Future<Output = Result<ReorderResponse, ClientError>> + Send;

    fn reorder_lists(
        &self,
        lists: Vec<OrderUpdate>,
    ) -> impl Future<Output = Result<ReorderResponse, ClientError>> + Send;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP implementation of [`BoardApi`]
#[derive(Debug, Clone)]
pub struct HttpBoardApi {
    config: Config,
    client: Client,
}

impl HttpBoardApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Use an already issued token
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.config.set_token(Some(token.into()));
    }

    /// Create an account and keep the issued token
    pub async fn register(&mut self, request: &RegisterRequest) -> Result<(), ClientError> {
        let url = self.config.api_url("/api/auth/register");
        let response = self.client.post(&url).json(request).send().await?;
        let auth: AuthResponse = read_json(response).await?;
        self.config.set_token(Some(auth.token));
        Ok(())
    }

    /// Log in and keep the issued token
    pub async fn login(&mut self, request: &LoginRequest) -> Result<(), ClientError> {
        let url = self.config.api_url("/api/auth/login");
        let response = self.client.post(&url).json(request).send().await?;
        let auth: AuthResponse = read_json(response).await?;
        self.config.set_token(Some(auth.token));
        Ok(())
    }

    pub fn logout(&mut self) {
        self.config.clear_token();
    }

    pub async fn me(&self) -> Result<UserResponse, ClientError> {
        let request = self.authorized(self.client.get(self.config.api_url("/api/auth/me")))?;
        read_json(request.send().await?).await
    }

    pub async fn create_board(&self, title: &str) -> Result<Board, ClientError> {
        let body = CreateBoardRequest {
            title: title.to_string(),
        };
        let request = self.authorized(self.client.post(self.config.api_url("/api/boards")))?;
        read_json(request.json(&body).send().await?).await
    }

    pub async fn list_boards(&self) -> Result<ListBoardsResponse, ClientError> {
        let request = self.authorized(self.client.get(self.config.api_url("/api/boards")))?;
        read_json(request.send().await?).await
    }

    pub async fn get_board(&self, board_id: Uuid) -> Result<BoardView, ClientError> {
        let url = self.config.api_url(&format!("/api/boards/{}", board_id));
        let request = self.authorized(self.client.get(&url))?;
        read_json(request.send().await?).await
    }

    pub async fn invite_member(
        &self,
        board_id: Uuid,
        body: &InviteMemberRequest,
    ) -> Result<InviteMemberResponse, ClientError> {
        let url = self.config.api_url(&format!("/api/boards/{}/invite", board_id));
        let request = self.authorized(self.client.post(&url))?;
        read_json(request.json(body).send().await?).await
    }

    pub async fn create_list(&self, board_id: Uuid, title: &str) -> Result<List, ClientError> {
        let body = CreateListRequest {
            title: title.to_string(),
            board_id,
        };
        let request = self.authorized(self.client.post(self.config.api_url("/api/lists")))?;
        read_json(request.json(&body).send().await?).await
    }

    pub async fn create_card(&self, list_id: Uuid, title: &str) -> Result<Card, ClientError> {
        let body = CreateCardRequest {
            title: title.to_string(),
            list_id,
        };
        let request = self.authorized(self.client.post(self.config.api_url("/api/cards")))?;
        read_json(request.json(&body).send().await?).await
    }

    pub async fn update_card_details(
        &self,
        card_id: Uuid,
        body: &UpdateCardDetailsRequest,
    ) -> Result<Card, ClientError> {
        let url = self.config.api_url(&format!("/api/cards/{}/details", card_id));
        let request = self.authorized(self.client.put(&url))?;
        read_json(request.json(body).send().await?).await
    }

    pub async fn notifications(&self) -> Result<Vec<Notification>, ClientError> {
        let request = self.authorized(self.client.get(self.config.api_url("/api/notifications")))?;
        read_json(request.send().await?).await
    }

    fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder, ClientError> {
        let token = self.config.get_token().ok_or(ClientError::NotAuthenticated)?;
        Ok(builder.bearer_auth(token))
    }
}

impl BoardApi for HttpBoardApi {
    async fn get_lists(&self, board_id: Uuid) -> Result<Vec<List>, ClientError> {
        let url = self.config.api_url(&format!("/api/lists/{}", board_id));
        let request = self.authorized(self.client.get(&url))?;
        read_json(request.send().await?).await
    }

    async fn get_cards(&self, list_id: Uuid) -> Result<Vec<Card>, ClientError> {
        let url = self.config.api_url(&format!("/api/cards/{}", list_id));
        let request = self.authorized(self.client.get(&url))?;
        read_json(request.send().await?).await
    }

    async fn move_card(&self, card_id: Uuid, body: MoveCardRequest) -> Result<Card, ClientError> {
        let url = self.config.api_url(&format!("/api/cards/{}", card_id));
        let request = self.authorized(self.client.put(&url))?;
        read_json(request.json(&body).send().await?).await
    }

    async fn reorder_cards(&self, cards: Vec<OrderUpdate>) -> Result<ReorderResponse, ClientError> {
        let body = ReorderCardsRequest { cards };
        let request =
            self.authorized(self.client.patch(self.config.api_url("/api/cards/reorder")))?;
        read_json(request.json(&body).send().await?).await
    }

    async fn reorder_lists(&self, lists: Vec<OrderUpdate>) -> Result<ReorderResponse, ClientError> {
        let body = ReorderListsRequest { lists };
        let request =
            self.authorized(self.client.patch(self.config.api_url("/api/lists/reorder")))?;
        read_json(request.json(&body).send().await?).await
    }
}

/// Decode a success body, or turn the error body into [`ClientError::Status`]
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }
    Ok(response.json::<T>().await?)
}
