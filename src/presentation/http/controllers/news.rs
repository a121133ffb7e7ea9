// src/presentation/http/controllers/news.rs
use crate::application::{
    commands::news::{CreateNewsCommand, UpdateNewsCommand},
    dto::{NewsDto, PaginationMetadata},
    queries::news::{GetNewsByIdQuery, ListNewsQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::multipart::{NewsForm, read_news_form};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Raw paging parameters; malformed values fall back to defaults.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NewsListParams {
    /// 1-based page number.
    pub page: Option<String>,
    /// Page size, 1..=100.
    pub limit: Option<String>,
}

/// Multipart body accepted by create and update.
#[derive(Debug, ToSchema)]
pub struct NewsUploadForm {
    pub title: String,
    pub content: String,
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewsListResponse {
    pub status: u16,
    pub news: Vec<NewsDto>,
    pub metadata: PaginationMetadata,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewsResponse {
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub news: NewsDto,
}

// Identifiers that are not integers can never match a record.
fn parse_id(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or_default()
}

#[utoipa::path(
    get,
    path = "/news",
    params(NewsListParams),
    responses(
        (status = 200, description = "Page of news items.", body = NewsListResponse),
        (status = 500, description = "Unexpected failure.", body = ErrorResponse)
    ),
    tag = "News"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    Query(params): Query<NewsListParams>,
) -> HttpResult<Json<NewsListResponse>> {
    let page = state
        .services
        .news_queries
        .list_news(ListNewsQuery {
            page: params.page,
            limit: params.limit,
        })
        .await
        .into_http()?;

    Ok(Json(NewsListResponse {
        status: StatusCode::OK.as_u16(),
        news: page.items,
        metadata: page.metadata,
    }))
}

#[utoipa::path(
    post,
    path = "/news",
    request_body(content = NewsUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "News created.", body = NewsResponse),
        (status = 400, description = "Invalid fields or image.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 500, description = "Unexpected failure.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn create_news(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<(StatusCode, Json<NewsResponse>)> {
    let NewsForm {
        title,
        content,
        image,
    } = read_news_form(multipart).await?;

    let news = state
        .services
        .news_commands
        .create_news(
            &user,
            CreateNewsCommand {
                title,
                content,
                image,
            },
        )
        .await
        .into_http()?;

    Ok((
        StatusCode::CREATED,
        Json(NewsResponse {
            status: StatusCode::CREATED.as_u16(),
            message: Some("News entry created successfully.".into()),
            news,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/news/{id}",
    params(("id" = i64, Path, description = "News identifier")),
    responses(
        (status = 200, description = "News item.", body = NewsResponse),
        (status = 404, description = "No such news item.", body = ErrorResponse),
        (status = 500, description = "Unexpected failure.", body = ErrorResponse)
    ),
    tag = "News"
)]
pub async fn get_news(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<NewsResponse>> {
    let news = state
        .services
        .news_queries
        .get_news_by_id(GetNewsByIdQuery { id: parse_id(&id) })
        .await
        .into_http()?;

    Ok(Json(NewsResponse {
        status: StatusCode::OK.as_u16(),
        message: None,
        news,
    }))
}

#[utoipa::path(
    put,
    path = "/news/{id}",
    params(("id" = i64, Path, description = "News identifier")),
    request_body(content = NewsUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "News updated.", body = NewsResponse),
        (status = 400, description = "Invalid fields or image.", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token.", body = ErrorResponse),
        (status = 403, description = "Caller does not own the item.", body = ErrorResponse),
        (status = 404, description = "No such news item.", body = ErrorResponse),
        (status = 500, description = "Unexpected failure.", body = ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "News"
)]
pub async fn update_news(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    multipart: Multipart,
) -> HttpResult<Json<NewsResponse>> {
    let id = parse_id(&id);
    state
        .services
        .news_commands
        .authorize_update(&user, id)
        .await
        .into_http()?;

    let NewsForm {
        title,
        content,
        image,
    } = read_news_form(multipart).await?;

    let news = state
        .services
        .news_commands
        .update_news(
            &user,
            UpdateNewsCommand {
                id,
                title,
                content,
                image,
            },
        )
        .await
        .into_http()?;

    Ok(Json(NewsResponse {
        status: StatusCode::OK.as_u16(),
        message: Some("News updated successfully.".into()),
        news,
    }))
}
