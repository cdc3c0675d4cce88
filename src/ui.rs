//! Plain-text rendering of API data for the terminal front-end

use chrono::NaiveDate;

use crate::{
    error::FormErrors,
    models::{ActiveLoan, BookSummary, StatisticsSnapshot},
    services::due_date::DueDate,
};

pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

/// Render rows as left-aligned columns under a header
fn table(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(header.to_vec())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    for row in rows {
        out.push(line(row.iter().map(String::as_str).collect()));
    }
    out.join("\n")
}

/// Search results, with a message that tells an empty catalog from no match
pub fn render_books(books: &[BookSummary], query: &str) -> String {
    if books.is_empty() {
        let query = query.trim();
        return if query.is_empty() {
            "There are no books in the library".to_string()
        } else {
            format!("No books match \"{}\"\nTry other search terms", query)
        };
    }

    let rows: Vec<Vec<String>> = books
        .iter()
        .map(|b| {
            vec![
                b.code.clone(),
                b.title.clone(),
                b.author.clone(),
                b.status_label().to_string(),
            ]
        })
        .collect();

    format!(
        "{} found\n{}",
        plural(books.len(), "book", "books"),
        table(&["Code", "Title", "Author", "Status"], &rows)
    )
}

/// Books that can be picked for a new loan
pub fn render_available(books: &[BookSummary]) -> String {
    if books.is_empty() {
        return "No books available right now".to_string();
    }
    let rows: Vec<Vec<String>> = books
        .iter()
        .map(|b| vec![b.id.to_string(), b.label()])
        .collect();
    format!(
        "{} available\n{}",
        plural(books.len(), "book", "books"),
        table(&["Id", "Book"], &rows)
    )
}

pub fn render_loans(loans: &[ActiveLoan], today: NaiveDate) -> String {
    if loans.is_empty() {
        return "There are no active loans right now".to_string();
    }

    let rows: Vec<Vec<String>> = loans
        .iter()
        .map(|l| {
            vec![
                l.id.to_string(),
                l.code.clone(),
                l.title.clone(),
                l.author.clone(),
                l.reader_name(),
                format_date(l.loan_date),
                format_date(l.return_date),
                l.status(today).to_string(),
            ]
        })
        .collect();

    format!(
        "{}\n{}",
        plural(loans.len(), "active loan", "active loans"),
        table(
            &["Id", "Code", "Title", "Author", "Reader", "Loaned", "Due", "Status"],
            &rows
        )
    )
}

pub fn render_stats(stats: &StatisticsSnapshot) -> String {
    [
        format!("Total books:      {}", stats.total_books),
        format!(
            "Available:        {} ({}%)",
            stats.available_books,
            stats.availability_percent()
        ),
        format!("On loan:          {}", stats.loaned_books),
        format!("Active loans:     {}", stats.active_loans),
        format!("  on time:        {}", stats.on_time_loans()),
        format!("  overdue:        {}", stats.overdue_loans),
    ]
    .join("\n")
}

pub fn render_due_date(due: &DueDate) -> String {
    match due.hint() {
        Some(hint) => format!("Return by {} ({})", due, hint),
        None => format!("Return by {}", due),
    }
}

pub fn render_form_errors(errors: &FormErrors) -> String {
    let mut lines = vec!["Please complete all fields correctly:".to_string()];
    lines.extend(errors.iter().map(|(field, msg)| format!("  {}: {}", field, msg)));
    lines.join("\n")
}
