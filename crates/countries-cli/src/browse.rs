//! Line commands understood by `countries browse`.

use countries_core::SortKey;

pub const HELP: &str = "\
Commands:
  /TEXT        search by name (empty after / clears the search)
  :sort KEY    sort by name, population or surface (:sort none resets)
  :retry       fetch the list again
  :show CODE   open the country with this code
  :help        show this help
  :quit        leave";

#[derive(Debug, Clone, PartialEq)]
pub enum BrowseCommand {
    Search(String),
    Sort(Option<SortKey>),
    Retry,
    Show(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCommandError {
    #[error("unknown command: {0} (type :help)")]
    Unknown(String),
    #[error("{0}")]
    BadSort(#[from] countries_core::search::ParseSortKeyError),
    #[error(":show needs a country code")]
    MissingCode,
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Option<Result<BrowseCommand, ParseCommandError>> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }
    if let Some(text) = line.strip_prefix('/') {
        return Some(Ok(BrowseCommand::Search(text.to_string())));
    }

    let mut parts = line.trim().splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or_default();
    let rest = parts.next().map(str::trim).unwrap_or_default();

    let cmd = match head {
        ":sort" | ":s" => match rest {
            "" | "none" => Ok(BrowseCommand::Sort(None)),
            key => key
                .parse::<SortKey>()
                .map(|k| BrowseCommand::Sort(Some(k)))
                .map_err(ParseCommandError::from),
        },
        ":retry" | ":r" => Ok(BrowseCommand::Retry),
        ":show" => {
            if rest.is_empty() {
                Err(ParseCommandError::MissingCode)
            } else {
                Ok(BrowseCommand::Show(rest.to_string()))
            }
        }
        ":help" | ":h" | "?" => Ok(BrowseCommand::Help),
        ":quit" | ":q" => Ok(BrowseCommand::Quit),
        other => Err(ParseCommandError::Unknown(other.to_string())),
    };
    Some(cmd)
}
