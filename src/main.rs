//! Loan Desk - terminal front-end for the library loan API

use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use loandesk::{
    cli::{Command, HELP},
    config::{AppConfig, LoggingConfig},
    error::AppError,
    models::LoanDays,
    services::search::{SearchController, SearchGate, SearchRequest},
    ui, AppState,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let _log_guard = init_tracing(&config.logging);

    tracing::info!("Starting Loan Desk v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("API URL: {}", config.api.base_url);

    let debounce = config.search.debounce();
    let state = AppState::from_config(config)?;
    let (mut search, mut requests) = SearchController::new(debounce);
    let mut gate = SearchGate::new();

    println!("{}\n", HELP);

    match state.services.probe().await {
        Ok(()) => search.submit(""),
        Err(_) => println!(
            "Could not connect to the server at {}. Check that the backend is running.",
            state.config.api.base_url
        ),
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match Command::parse(&line) {
                    Ok(Command::Quit) => break,
                    Ok(command) => handle(&state, &mut search, command).await,
                    Err(msg) => println!("{}", msg),
                }
            }
            Some(request) = requests.recv() => {
                run_search(&state, &mut gate, request).await;
            }
        }
    }

    search.cancel();
    tracing::info!("Loan Desk stopped");
    Ok(())
}

fn init_tracing(config: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("loandesk={}", config.level).into());

    let (file_layer, guard) = match &config.file {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "loandesk.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_writer(writer).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    let registry = tracing_subscriber::registry().with(filter).with(file_layer);
    if config.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr)).init();
    }

    guard
}

async fn run_search(state: &AppState, gate: &mut SearchGate, request: SearchRequest) {
    match state.services.catalog.search(&request.query).await {
        Ok(books) => {
            if gate.accept(request.generation) {
                println!("{}\n", ui::render_books(&books, &request.query));
            }
        }
        Err(e) => report(&e),
    }
}

async fn handle(state: &AppState, search: &mut SearchController, command: Command) {
    let services = &state.services;
    let today = Local::now().date_naive();

    match command {
        Command::Search(text) => search.submit(&text),
        Command::Type(text) => search.input(&text),
        Command::Available => show_available(state).await,
        Command::Due(raw) => match LoanDays::parse(&raw) {
            Ok(days) => match services.loans.due_date(days) {
                Ok(due) => println!("{}", ui::render_due_date(&due)),
                Err(e) => report(&e),
            },
            Err(msg) => println!("{}", msg),
        },
        Command::Loan(form) => {
            if let Some(due) = form.due_date_preview(today) {
                println!("{}", ui::render_due_date(&due));
            }
            match services.loans.register(&form).await {
                Ok(message) => {
                    println!(
                        "{}",
                        message.unwrap_or_else(|| "Loan registered successfully".to_string())
                    );
                    show_available(state).await;
                    show_loans(state).await;
                }
                Err(e) => report(&e),
            }
        }
        Command::Loans => show_loans(state).await,
        Command::Return(loan_id) => match services.loans.close(loan_id).await {
            Ok(message) => {
                println!(
                    "{}",
                    message.unwrap_or_else(|| "Book returned successfully".to_string())
                );
                show_loans(state).await;
                search.submit("");
            }
            Err(e) => report(&e),
        },
        Command::Stats => match services.stats.snapshot().await {
            Ok(stats) => println!("{}", ui::render_stats(&stats)),
            Err(e) => report(&e),
        },
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
}

async fn show_available(state: &AppState) {
    match state.services.catalog.available_books().await {
        Ok(books) => println!("{}", ui::render_available(&books)),
        Err(e) => report(&e),
    }
}

async fn show_loans(state: &AppState) {
    match state.services.loans.active_loans().await {
        Ok(loans) => println!("{}", ui::render_loans(&loans, Local::now().date_naive())),
        Err(e) => report(&e),
    }
}

fn report(error: &AppError) {
    match error {
        AppError::InvalidForm(errors) => println!("{}", ui::render_form_errors(errors)),
        other => println!("Error: {}", other.user_message()),
    }
}
