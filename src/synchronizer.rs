//! View state kept in step with the backend
//!
//! The synchronizer owns the fetched collections together with the local UI
//! state (tab, filters, borrow selections, add modal). Mutations are never
//! applied locally: every successful add, borrow or return is followed by a
//! full reload of both collections, so the view always shows what the last
//! reload returned.

use crate::{
    models::{AvailabilityFilter, Book, NewEntityDraft, SelectionMap, Tab, User},
    notify::{Notification, Notifier},
    services::LibraryBackend,
};

const FETCH_BOOKS_FAILED: &str = "Error fetching books";
const FETCH_USERS_FAILED: &str = "Error fetching users";
const ADD_FAILED: &str = "Error adding";
const NO_BOOK_SELECTED: &str = "Select a book to borrow";
const BORROWED: &str = "Book borrowed successfully";
const BORROW_FAILED: &str = "Error borrowing book";
const RETURNED: &str = "Book returned successfully";
const RETURN_FAILED: &str = "Error returning book";

/// Which path a mutating handler took
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Request accepted by the backend and both collections reloaded
    Applied,
    /// Refused locally, no request sent
    Rejected,
    /// Request failed, state left as it was
    Failed,
}

/// Books matching the availability filter, in collection order
pub fn filter_books(books: &[Book], filter: AvailabilityFilter) -> Vec<&Book> {
    books.iter().filter(|book| filter.matches(book)).collect()
}

/// Users to show, restricted to borrowers when `borrowed_only` is set
pub fn filter_users(users: &[User], borrowed_only: bool) -> Vec<&User> {
    users
        .iter()
        .filter(|user| !borrowed_only || user.has_loans())
        .collect()
}

pub struct Synchronizer<B> {
    backend: B,
    books: Vec<Book>,
    users: Vec<User>,
    active_tab: Tab,
    availability: AvailabilityFilter,
    borrowed_only: bool,
    selection: SelectionMap,
    draft: NewEntityDraft,
    modal_open: bool,
    notifier: Notifier,
}

impl<B: LibraryBackend> Synchronizer<B> {
    /// Empty view state; call [`Synchronizer::load`] to populate it
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            books: Vec::new(),
            users: Vec::new(),
            active_tab: Tab::default(),
            availability: AvailabilityFilter::default(),
            borrowed_only: false,
            selection: SelectionMap::new(),
            draft: NewEntityDraft::default(),
            modal_open: false,
            notifier: Notifier::new(),
        }
    }

    /// Fetch books and users concurrently
    ///
    /// A failed fetch leaves its collection untouched and queues an error
    /// notification; the other collection is still replaced.
    pub async fn load(&mut self) {
        let (books, users) = tokio::join!(self.backend.fetch_books(), self.backend.fetch_users());

        match books {
            Ok(books) => {
                tracing::debug!("Loaded {} books", books.len());
                self.books = books;
            }
            Err(e) => {
                tracing::warn!(status = ?e.status(), "Failed to fetch books: {}", e);
                self.notifier.error(FETCH_BOOKS_FAILED);
            }
        }

        match users {
            Ok(users) => {
                tracing::debug!("Loaded {} users", users.len());
                self.users = users;
            }
            Err(e) => {
                tracing::warn!(status = ?e.status(), "Failed to fetch users: {}", e);
                self.notifier.error(FETCH_USERS_FAILED);
            }
        }
    }

    /// Submit the draft as a book or a user depending on the active tab
    pub async fn handle_add(&mut self) -> Outcome {
        let tab = self.active_tab;
        let result = match tab {
            Tab::Books => {
                let book = self.draft.to_new_book();
                self.backend.add_book(&book).await
            }
            Tab::Users => {
                let user = self.draft.to_new_user();
                self.backend.add_user(&user).await
            }
        };

        match result {
            Ok(()) => {
                tracing::info!("{} added", tab.entity());
                self.notifier
                    .success(format!("{} added successfully", tab.entity()));
                self.load().await;
                self.close_modal();
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(
                    status = ?e.status(),
                    "Failed to add {}: {}",
                    tab.entity().to_lowercase(),
                    e
                );
                self.notifier.error(ADD_FAILED);
                Outcome::Failed
            }
        }
    }

    /// Lend the book selected in this user's borrow control
    pub async fn handle_borrow(&mut self, user_id: &str) -> Outcome {
        let Some(book_id) = self.selection.selected(user_id).map(str::to_owned) else {
            self.notifier.error(NO_BOOK_SELECTED);
            return Outcome::Rejected;
        };

        match self.backend.borrow_book(user_id, &book_id).await {
            Ok(()) => {
                tracing::info!("Book {} borrowed by user {}", book_id, user_id);
                self.notifier.success(BORROWED);
                self.load().await;
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(
                    status = ?e.status(),
                    "Failed to lend book {} to user {}: {}",
                    book_id,
                    user_id,
                    e
                );
                self.notifier.error(BORROW_FAILED);
                Outcome::Failed
            }
        }
    }

    pub async fn handle_return(&mut self, user_id: &str, book_id: &str) -> Outcome {
        match self.backend.return_book(user_id, book_id).await {
            Ok(()) => {
                tracing::info!("Book {} returned by user {}", book_id, user_id);
                self.notifier.success(RETURNED);
                self.load().await;
                Outcome::Applied
            }
            Err(e) => {
                tracing::warn!(
                    status = ?e.status(),
                    "Failed to return book {} from user {}: {}",
                    book_id,
                    user_id,
                    e
                );
                self.notifier.error(RETURN_FAILED);
                Outcome::Failed
            }
        }
    }
}

impl<B> Synchronizer<B> {
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn visible_books(&self) -> Vec<&Book> {
        filter_books(&self.books, self.availability)
    }

    pub fn visible_users(&self) -> Vec<&User> {
        filter_users(&self.users, self.borrowed_only)
    }

    /// Options of the per-user borrow control
    pub fn borrowable_books(&self) -> Vec<&Book> {
        filter_books(&self.books, AvailabilityFilter::Available)
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn availability_filter(&self) -> AvailabilityFilter {
        self.availability
    }

    pub fn set_availability_filter(&mut self, filter: AvailabilityFilter) {
        self.availability = filter;
    }

    pub fn borrowed_only(&self) -> bool {
        self.borrowed_only
    }

    pub fn set_borrowed_filter(&mut self, borrowed_only: bool) {
        self.borrowed_only = borrowed_only;
    }

    pub fn selection(&self) -> &SelectionMap {
        &self.selection
    }

    /// Remember the book chosen for a user; an empty id selects the placeholder
    pub fn select_book(&mut self, user_id: &str, book_id: &str) {
        self.selection.set(user_id, book_id);
    }

    pub fn draft(&self) -> &NewEntityDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut NewEntityDraft {
        &mut self.draft
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    /// Hide the add modal and discard whatever was typed
    pub fn close_modal(&mut self) {
        self.modal_open = false;
        self.draft = NewEntityDraft::default();
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifier.take()
    }
}
