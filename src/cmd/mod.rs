pub mod form;
pub mod schema;
pub mod summary;

use dpfo::UserInput;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("No input received. Provide a file or pipe data to stdin.")]
    Empty,
    #[error("invalid input document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read the user input document (or stdin with "-")
pub fn read_input(path: &Path) -> Result<UserInput, InputError> {
    let input = if path.as_os_str() == "-" {
        read_from_stdin()?
    } else {
        read_from_file(path)?
    };
    log::info!(
        "Read input: {} children, employed: {}",
        input.children.len(),
        input.employed
    );
    Ok(input)
}

fn read_from_file(path: &Path) -> Result<UserInput, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(dpfo::read_input_json(BufReader::new(file))?)
}

fn read_from_stdin() -> Result<UserInput, InputError> {
    let mut buffer = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buffer)
        .map_err(|source| InputError::Io {
            path: PathBuf::from("-"),
            source,
        })?;

    if buffer.iter().all(u8::is_ascii_whitespace) {
        return Err(InputError::Empty);
    }

    Ok(dpfo::read_input_json(io::Cursor::new(buffer))?)
}

/// Use `date` (or today) as the filing date when the input has none
pub fn with_filing_date(mut input: UserInput, date: Option<&str>) -> UserInput {
    if let Some(date) = date {
        input.date = date.to_string();
    } else if input.date.trim().is_empty() {
        input.date = chrono::Local::now().format("%d.%m.%Y").to_string();
    }
    input
}

pub fn format_eur(amount: rust_decimal::Decimal) -> String {
    format!("{:.2} €", amount)
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
