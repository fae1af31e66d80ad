//! Form and query parameters of the journal route.

use std::convert::Infallible;

use axum::extract::{Form, FromRequest, Multipart, Query, Request};
use axum::http::{Method, header};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// The `name` field accepted by `/user`. Documents the route; extraction
/// goes through [`FormName`].
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct NameParams {
    /// Name to record or look up.
    #[serde(default)]
    pub name: Option<String>,
}

/// Value of the `name` form field, empty when absent.
///
/// Body fields come first, from a url-encoded or `multipart/form-data`
/// body, followed by the query string; the first `name` wins. GET and HEAD
/// bodies are ignored. Malformed input counts as "no name" rather than
/// rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormName(pub String);

impl<S> FromRequest<S> for FormName
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let query = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        let body = body_fields(req, state).await;
        Ok(Self(first_name(body.into_iter().chain(query))))
    }
}

/// Returns the first `name` value among `fields`, or an empty string.
fn first_name(fields: impl IntoIterator<Item = (String, String)>) -> String {
    fields
        .into_iter()
        .find_map(|(key, value)| (key == "name").then_some(value))
        .unwrap_or_default()
}

async fn body_fields<S>(req: Request, state: &S) -> Vec<(String, String)>
where
    S: Send + Sync,
{
    if req.method() == Method::GET || req.method() == Method::HEAD {
        return Vec::new();
    }
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();

    if content_type.starts_with("multipart/form-data") {
        let Ok(multipart) = Multipart::from_request(req, state).await else {
            return Vec::new();
        };
        multipart_fields(multipart).await
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map(|Form(pairs)| pairs)
            .unwrap_or_default()
    } else {
        Vec::new()
    }
}

/// Collects the text parts of a multipart body. File uploads are skipped.
async fn multipart_fields(mut multipart: Multipart) -> Vec<(String, String)> {
    let mut fields = Vec::new();
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.file_name().is_some() {
            continue;
        }
        let Some(key) = field.name().map(str::to_owned) else {
            continue;
        };
        match field.text().await {
            Ok(value) => fields.push((key, value)),
            Err(err) => {
                tracing::debug!(error = %err, "unreadable multipart field");
                break;
            }
        }
    }
    fields
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    async fn extract(req: Request) -> String {
        let Ok(FormName(name)) = FormName::from_request(req, &()).await;
        name
    }

    fn request(method: &str, uri: &str, content_type: &str, body: &str) -> Request {
        let Ok(req) = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
        else {
            panic!("request");
        };
        req
    }

    #[test]
    fn first_name_skips_other_keys() {
        let fields = vec![pair("other", "x"), pair("name", "a"), pair("name", "b")];
        assert_eq!(first_name(fields), "a");
        assert_eq!(first_name(vec![pair("other", "x")]), "");
    }

    #[tokio::test]
    async fn urlencoded_body_wins_over_query() {
        let req = request(
            "POST",
            "/user?name=query",
            "application/x-www-form-urlencoded",
            "name=body",
        );
        assert_eq!(extract(req).await, "body");
    }

    #[tokio::test]
    async fn duplicate_query_names_take_the_first() {
        let req = request("POST", "/user?name=a&name=b", "text/plain", "");
        assert_eq!(extract(req).await, "a");
    }

    #[tokio::test]
    async fn multipart_text_part_is_read() {
        let body = "--X\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nalice\r\n--X--\r\n";
        let req = request("POST", "/user", "multipart/form-data; boundary=X", body);
        assert_eq!(extract(req).await, "alice");
    }

    #[tokio::test]
    async fn multipart_file_part_is_ignored() {
        let body = "--X\r\nContent-Disposition: form-data; name=\"name\"; filename=\"n.txt\"\r\n\r\nalice\r\n--X--\r\n";
        let req = request("POST", "/user?name=bob", "multipart/form-data; boundary=X", body);
        assert_eq!(extract(req).await, "bob");
    }

    #[tokio::test]
    async fn get_reads_only_the_query() {
        let req = request(
            "GET",
            "/user?name=alice",
            "application/x-www-form-urlencoded",
            "name=body",
        );
        assert_eq!(extract(req).await, "alice");
    }

    #[tokio::test]
    async fn garbage_body_means_no_name() {
        let req = request("POST", "/user", "multipart/form-data; boundary=X", "not multipart");
        assert_eq!(extract(req).await, "");
    }
}
