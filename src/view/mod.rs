//! Text renderers driven by the synchronizer state
//!
//! Every function here is pure: it borrows state and returns something to
//! print. User intents go back through the synchronizer.

pub mod book_list;
pub mod filter;
pub mod modal;
pub mod table;
pub mod user_list;

use crate::{models::Tab, synchronizer::Synchronizer};

/// Title, tab bar and the add action for the active tab
pub fn header(active: Tab) -> String {
    let tabs = [Tab::Books, Tab::Users]
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab)
            } else {
                format!(" {} ", tab)
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    format!("Library Management\n{}    + Add {}\n", tabs, active.entity())
}

/// Whole screen: header, add modal when open, then the active list
pub fn page<B>(desk: &Synchronizer<B>) -> String {
    let mut out = header(desk.active_tab());

    let modal = match desk.active_tab() {
        Tab::Books => modal::book_modal(desk.is_modal_open(), desk.draft()),
        Tab::Users => modal::user_modal(desk.is_modal_open(), desk.draft()),
    };
    if let Some(modal) = modal {
        out.push('\n');
        out.push_str(&modal.to_string());
    }

    out.push('\n');
    let list = match desk.active_tab() {
        Tab::Books => book_list::book_list(desk.books(), desk.availability_filter()).to_string(),
        Tab::Users => {
            let users = user_list::user_list(
                desk.users(),
                desk.books(),
                desk.borrowed_only(),
                desk.selection(),
            );
            users.to_string()
        }
    };
    out.push_str(&list);
    out
}
