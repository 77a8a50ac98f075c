use mockito::{Matcher, Server};
use rstest::rstest;

use super::{CassaClient, HttpConfig, SearchQuery, TransactionApi};
use crate::domain::{CassaError, TxnKind, TypeFilter};
use crate::test_utils::JsonMother;

fn client_for(server: &Server) -> CassaClient {
    CassaClient::new(server.url(), HttpConfig::default()).expect("test client should build")
}

#[rstest]
#[case::plain("http://127.0.0.1:8000", "http://127.0.0.1:8000")]
#[case::trailing_slash("https://bank.example/", "https://bank.example")]
fn test_base_url_normalization(#[case] input: &str, #[case] expected: &str) {
    let client = CassaClient::new(input, HttpConfig::default()).unwrap();
    assert_eq!(client.base_url(), expected);
}

#[test]
fn test_base_url_requires_http_scheme() {
    let err = CassaClient::new("bank.example", HttpConfig::default()).unwrap_err();
    assert!(matches!(err, CassaError::InvalidInput(_)));
}

#[tokio::test]
async fn test_recent_transactions_sends_limit_and_decodes_page() {
    let mut server = Server::new_async().await;
    let body = JsonMother::page(&[
        JsonMother::transaction(2, "Пополнение"),
        JsonMother::transfer(1, "Перевод ← 40817810000000000009"),
    ]);
    let mock = server
        .mock("GET", "/api/admin/recent-transactions/")
        .match_query(Matcher::UrlEncoded("limit".into(), "20".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let page = client_for(&server).recent_transactions(20).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.transactions.len(), 2);
    assert_eq!(page.transactions[0].id, 2);
    assert_eq!(page.transactions[0].kind, TxnKind::Deposit);
    assert_eq!(page.transactions[1].kind, TxnKind::Transfer);
    assert_eq!(page.total_count, Some(2));
}

#[tokio::test]
async fn test_search_omits_type_for_all_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/admin/search-transactions/")
        .match_query(Matcher::Regex("^q=ivan&limit=50$".into()))
        .with_status(200)
        .with_body(JsonMother::page(&[]).to_string())
        .create_async()
        .await;

    let query = SearchQuery {
        term: "ivan".into(),
        filter: TypeFilter::All,
        limit: 50,
    };
    let page = client_for(&server).search_transactions(&query).await.unwrap();

    mock.assert_async().await;
    assert!(page.transactions.is_empty());
}

#[tokio::test]
async fn test_search_sends_type_for_specific_filter() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/admin/search-transactions/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Иван Петров".into()),
            Matcher::UrlEncoded("limit".into(), "10".into()),
            Matcher::UrlEncoded("type".into(), "transfer".into()),
        ]))
        .with_status(200)
        .with_body(JsonMother::page(&[JsonMother::transfer(5, "Перевод → 1")]).to_string())
        .create_async()
        .await;

    let query = SearchQuery {
        term: "Иван Петров".into(),
        filter: TypeFilter::Transfer,
        limit: 10,
    };
    let page = client_for(&server).search_transactions(&query).await.unwrap();

    mock.assert_async().await;
    assert_eq!(page.transactions.len(), 1);
}

#[tokio::test]
async fn test_error_field_in_success_response_is_a_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/admin/search-transactions/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"error": "search backend unavailable"}"#)
        .create_async()
        .await;

    let query = SearchQuery {
        term: "x".into(),
        filter: TypeFilter::All,
        limit: 10,
    };
    let err = client_for(&server)
        .search_transactions(&query)
        .await
        .unwrap_err();

    match err {
        CassaError::ServerReported(message) => assert_eq!(message, "search backend unavailable"),
        other => panic!("Expected ServerReported, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_success_status_carries_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/admin/recent-transactions/")
        .match_query(Matcher::Any)
        .with_status(403)
        .with_body("forbidden")
        .create_async()
        .await;

    let err = client_for(&server).recent_transactions(10).await.unwrap_err();

    assert!(err.is_network_failure());
    match err {
        CassaError::HttpStatus { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_a_parse_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/admin/recent-transactions/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>login</html>")
        .create_async()
        .await;

    let err = client_for(&server).recent_transactions(10).await.unwrap_err();

    assert!(matches!(err, CassaError::Parse { .. }));
    assert!(err.is_network_failure());
}

#[tokio::test]
async fn test_admin_check_and_account_count() {
    let mut server = Server::new_async().await;
    let _check = server
        .mock("GET", "/api/admin/check/")
        .with_status(200)
        .with_body(r#"{"is_admin": true, "user": "operator", "message": "ok"}"#)
        .create_async()
        .await;
    let _accounts = server
        .mock("GET", "/api/admin/accounts/")
        .with_status(200)
        .with_body(r#"[{"id": 1, "balance": 10.0}, {"id": 2}, {"id": 3}]"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let check = client.admin_check().await.unwrap();
    assert_eq!(check.user, "operator");
    assert!(check.is_admin);
    assert_eq!(client.account_count().await.unwrap(), 3);
}
