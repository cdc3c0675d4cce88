//! ApiClient against the fake loan API

use chrono::NaiveDate;
use serde_json::json;

use loandesk::{
    api::ApiClient,
    config::ApiConfig,
    error::{AppError, ErrorKind},
    models::CreateLoanRequest,
};

use crate::support::{dead_url, spawn_backend};

fn client(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        timeout_secs: 5,
    })
    .expect("Failed to build client")
}

#[tokio::test]
async fn test_health_check() {
    let (url, _) = spawn_backend().await;
    assert!(client(&url).health().await.is_ok());
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_failure() {
    let url = dead_url().await;
    let err = client(&url).health().await.unwrap_err();
    assert!(matches!(err, AppError::Transport(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_empty_query_lists_whole_catalog() {
    let (url, _) = spawn_backend().await;
    let books = client(&url).search_books("").await.unwrap();
    assert_eq!(books.len(), 3);
}

#[tokio::test]
async fn test_search_query_is_url_encoded() {
    let (url, _) = spawn_backend().await;
    let books = client(&url).search_books("cien años").await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].code, "LIB-002");
    assert!(!books[0].available);
}

#[tokio::test]
async fn test_rejected_search_keeps_server_message() {
    let (url, _) = spawn_backend().await;
    let err = client(&url).search_books("reject").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Rejected);
    assert_eq!(err.user_message(), "Search unavailable");
}

#[tokio::test]
async fn test_server_error_without_envelope_is_http_status() {
    let (url, _) = spawn_backend().await;
    let err = client(&url).search_books("boom").await.unwrap_err();
    assert!(matches!(err, AppError::HttpStatus { status: 500 }));
}

#[tokio::test]
async fn test_non_json_success_is_malformed() {
    let (url, _) = spawn_backend().await;
    let err = client(&url).search_books("garbage").await.unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn test_create_loan_sends_camel_case_body() {
    let (url, backend) = spawn_backend().await;
    let request = CreateLoanRequest {
        book_id: 1,
        days_requested: 7,
        reader_first_name: "Ada".to_string(),
        reader_last_name: "Lovelace".to_string(),
    };

    let message = client(&url).create_loan(&request).await.unwrap();
    assert_eq!(message.as_deref(), Some("Préstamo registrado"));
    assert_eq!(
        backend.recorded_loans(),
        vec![json!({
            "bookId": 1,
            "daysRequested": 7,
            "readerFirstName": "Ada",
            "readerLastName": "Lovelace"
        })]
    );
}

#[tokio::test]
async fn test_create_loan_rejection_on_4xx_surfaces_message() {
    let (url, _) = spawn_backend().await;
    let request = CreateLoanRequest {
        book_id: 2,
        days_requested: 3,
        reader_first_name: "Ada".to_string(),
        reader_last_name: "Lovelace".to_string(),
    };

    let err = client(&url).create_loan(&request).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Rejected);
    assert_eq!(err.user_message(), "El libro ya está prestado");
}

#[tokio::test]
async fn test_active_loans() {
    let (url, _) = spawn_backend().await;
    let loans = client(&url).active_loans().await.unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].reader_name(), "Ada Lovelace");
    assert_eq!(
        loans[0].return_date,
        NaiveDate::from_ymd_opt(2024, 6, 17).unwrap()
    );
}

#[tokio::test]
async fn test_return_loan() {
    let (url, _) = spawn_backend().await;
    let api = client(&url);

    assert_eq!(api.return_loan(10).await.unwrap(), None);

    let err = api.return_loan(99).await.unwrap_err();
    assert_eq!(err.user_message(), "Loan not found");
}

#[tokio::test]
async fn test_statistics() {
    let (url, _) = spawn_backend().await;
    let stats = client(&url).statistics().await.unwrap();
    assert_eq!(stats.total_books, 3);
    assert_eq!(stats.availability_percent(), 67);
    assert_eq!(stats.on_time_loans(), 1);
}
