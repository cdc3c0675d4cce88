//! Command parsing for the interactive terminal front-end

use crate::services::loans::LoanForm;

pub const HELP: &str = "\
Commands:
  search [text]                     search the catalog now (empty lists everything)
  type <text>                       search as you type, sent once typing settles
  available                         list books that can be loaned
  due <days>                        show the return date for a loan of <days> days
  loan <book-id> <days> <first> <last>
                                    register a loan
  loans                             list active loans
  return <loan-id>                  record the return of a loan
  stats                             show library statistics
  help                              show this help
  quit                              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Type(String),
    Available,
    Due(String),
    Loan(LoanForm),
    Loans,
    Return(i32),
    Stats,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name.to_lowercase().as_str() {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "type" | "t" => Ok(Command::Type(rest.to_string())),
            "available" | "a" => Ok(Command::Available),
            "due" => Ok(Command::Due(rest.to_string())),
            "loan" => parse_loan(rest).map(Command::Loan),
            "loans" | "l" => Ok(Command::Loans),
            "return" | "r" => rest
                .parse::<i32>()
                .map(Command::Return)
                .map_err(|_| "Usage: return <loan-id>".to_string()),
            "stats" => Ok(Command::Stats),
            "help" | "?" | "" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{}', type 'help'", other)),
        }
    }
}

/// `loan <book-id> <days> <first> <last...>`; missing parts stay empty so
/// validation can report them per field
fn parse_loan(rest: &str) -> Result<LoanForm, String> {
    let mut parts = rest.split_whitespace();
    let book_id = match parts.next() {
        Some(raw) => Some(
            raw.parse::<i32>()
                .map_err(|_| format!("Invalid book id '{}'", raw))?,
        ),
        None => None,
    };
    let days = parts.next().unwrap_or_default().to_string();
    let reader_first_name = parts.next().unwrap_or_default().to_string();
    let reader_last_name = parts.collect::<Vec<_>>().join(" ");

    Ok(LoanForm {
        book_id,
        days,
        reader_first_name,
        reader_last_name,
    })
}
