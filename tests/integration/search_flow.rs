//! Front-end flows wiring services, the search controller and the API

use std::sync::Arc;
use std::time::Duration;

use loandesk::{
    api::ApiClient,
    error::ErrorKind,
    services::{
        loans::LoanForm,
        search::{SearchController, SearchGate, SearchMode},
        Services,
    },
};

use crate::support::spawn_backend;

async fn services(url: &str) -> Services {
    let client = ApiClient::with_client(reqwest::Client::new(), url);
    Services::new(Arc::new(client))
}

#[tokio::test]
async fn test_typing_burst_sends_one_search() {
    let (url, backend) = spawn_backend().await;
    let services = services(&url).await;
    let (mut search, mut requests) = SearchController::new(Duration::from_millis(50));
    let mut gate = SearchGate::new();

    search.input("b");
    search.input("bo");
    search.input("borges");

    let request = requests.recv().await.unwrap();
    assert_eq!(request.query, "borges");
    assert_eq!(request.mode, SearchMode::Deferred);

    let books = services.catalog.search(&request.query).await.unwrap();
    assert!(gate.accept(request.generation));
    assert_eq!(books.len(), 1);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(requests.try_recv().is_err());
    assert_eq!(backend.searches(), 1);
}

#[tokio::test]
async fn test_probe_then_available_books() {
    let (url, _) = spawn_backend().await;
    let services = services(&url).await;

    services.probe().await.unwrap();
    let titles: Vec<String> = services
        .catalog
        .available_books()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.title)
        .collect();
    assert_eq!(titles, vec!["El túnel", "Ficciones"]);
}

#[tokio::test]
async fn test_invalid_loan_form_makes_no_request() {
    let (url, backend) = spawn_backend().await;
    let services = services(&url).await;

    let form = LoanForm {
        book_id: Some(1),
        days: "16".to_string(),
        reader_first_name: "Ada".to_string(),
        reader_last_name: String::new(),
    };
    let err = services.loans.register(&form).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(backend.recorded_loans().is_empty());
}

#[tokio::test]
async fn test_register_then_return() {
    let (url, backend) = spawn_backend().await;
    let services = services(&url).await;

    let form = LoanForm {
        book_id: Some(3),
        days: "4".to_string(),
        reader_first_name: " Ada ".to_string(),
        reader_last_name: "Lovelace".to_string(),
    };
    services.loans.register(&form).await.unwrap();
    assert_eq!(backend.recorded_loans()[0]["readerFirstName"], "Ada");

    assert!(services.loans.close(10).await.is_ok());
}
