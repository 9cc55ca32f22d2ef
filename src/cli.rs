//! Terminal commands and their dispatch onto the synchronizer

use std::str::FromStr;

use thiserror::Error;

use crate::{
    models::{DraftField, Tab},
    services::LibraryBackend,
    synchronizer::Synchronizer,
    view::{self, book_list, filter, user_list},
};

pub const HELP: &str = "\
commands:
  books | users                     switch tab
  filter <label>                    press a filter button of the active tab
                                    (books: Available, Not Available, All;
                                     users: With Loans, All)
  select <user-id> [<book-id>]      choose a book in a user's borrow control
  borrow <user-id> [<book-id>]      lend the selected (or given) book
  return <user-id> <book-id>        take a book back
  add                               open the add form for the active tab
  set <field> <value>               fill a form field (title, author, isbn, year, name)
  save | cancel                     submit or discard the form
  reload | show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tab(Tab),
    /// Filter button of the active tab, by label
    Filter(String),
    Select { user_id: String, book_id: String },
    Borrow { user_id: String, book_id: Option<String> },
    Return { user_id: String, book_id: String },
    Add,
    Set { field: DraftField, value: String },
    Save,
    Cancel,
    Reload,
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', type 'help'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Invalid(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
            ("books", []) => Command::Tab(Tab::Books),
            ("users", []) => Command::Tab(Tab::Users),
            ("filter", label) if !label.is_empty() => Command::Filter(label.join(" ")),
            ("filter", _) => return Err(CommandError::Usage("filter <label>")),
            ("select", [user_id]) => Command::Select {
                user_id: user_id.to_string(),
                book_id: String::new(),
            },
            ("select", [user_id, book_id]) => Command::Select {
                user_id: user_id.to_string(),
                book_id: book_id.to_string(),
            },
            ("select", _) => return Err(CommandError::Usage("select <user-id> [<book-id>]")),
            ("borrow", [user_id]) => Command::Borrow {
                user_id: user_id.to_string(),
                book_id: None,
            },
            ("borrow", [user_id, book_id]) => Command::Borrow {
                user_id: user_id.to_string(),
                book_id: Some(book_id.to_string()),
            },
            ("borrow", _) => return Err(CommandError::Usage("borrow <user-id> [<book-id>]")),
            ("return", [user_id, book_id]) => Command::Return {
                user_id: user_id.to_string(),
                book_id: book_id.to_string(),
            },
            ("return", _) => return Err(CommandError::Usage("return <user-id> <book-id>")),
            ("add", []) => Command::Add,
            ("set", [field, value @ ..]) if !value.is_empty() => Command::Set {
                field: field.parse().map_err(CommandError::Invalid)?,
                value: value.join(" "),
            },
            ("set", _) => return Err(CommandError::Usage("set <field> <value>")),
            ("save", []) => Command::Save,
            ("cancel", []) => Command::Cancel,
            ("reload", []) => Command::Reload,
            ("show", []) => Command::Show,
            ("help", []) => Command::Help,
            ("quit", []) | ("exit", []) => Command::Quit,
            (other, _) => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Apply one command; results surface as notifications
pub async fn dispatch<B: LibraryBackend>(desk: &mut Synchronizer<B>, command: Command) -> Flow {
    tracing::debug!("Dispatching {:?}", command);

    match command {
        Command::Tab(tab) => desk.set_tab(tab),
        Command::Filter(label) => {
            let tab = desk.active_tab();
            let found = match tab {
                Tab::Books => filter::choose(&book_list::availability_options(), &label, |v| {
                    desk.set_availability_filter(v)
                }),
                Tab::Users => filter::choose(&user_list::borrowed_options(), &label, |v| {
                    desk.set_borrowed_filter(v)
                }),
            };
            if !found {
                desk.notifier_mut()
                    .error(format!("No '{}' filter on the {} tab", label, tab));
            }
        }
        Command::Select { user_id, book_id } => desk.select_book(&user_id, &book_id),
        Command::Borrow { user_id, book_id } => {
            if let Some(book_id) = book_id {
                desk.select_book(&user_id, &book_id);
            }
            desk.handle_borrow(&user_id).await;
        }
        Command::Return { user_id, book_id } => {
            desk.handle_return(&user_id, &book_id).await;
        }
        Command::Add => desk.open_modal(),
        Command::Set { field, value } => {
            if !desk.is_modal_open() {
                desk.notifier_mut().error("Open the add form first");
            } else if let Err(e) = desk.draft_mut().set(field, &value) {
                desk.notifier_mut().error(e.to_string());
            }
        }
        Command::Save => {
            if desk.is_modal_open() {
                desk.handle_add().await;
            } else {
                desk.notifier_mut().error("Open the add form first");
            }
        }
        Command::Cancel => desk.close_modal(),
        Command::Reload => desk.load().await,
        Command::Show | Command::Help => {}
        Command::Quit => return Flow::Quit,
    }

    Flow::Continue
}

/// Drain pending notifications and render the page below them
pub fn render_frame<B>(desk: &mut Synchronizer<B>) -> String {
    let mut out = String::new();
    for notification in desk.take_notifications() {
        out.push_str(&notification.to_string());
        out.push('\n');
    }
    out.push_str(&view::page(desk));
    out
}
