//! Loading/data/error state of a single remote resource.
//!
//! Every fetch takes a [`Ticket`] from [`FetchState::begin`]. A result is only
//! applied when its ticket is still the latest one handed out, so a slow
//! response can never overwrite the outcome of a newer request.

use crate::domain::shared::errors::DomainError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct FetchState<T> {
    is_loading: bool,
    data: Option<T>,
    error: Option<DomainError>,
    generation: u64,
}

/// Wire form of a [`FetchState`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchView<T> {
    pub is_loading: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            is_loading: true,
            data: None,
            error: None,
            generation: 0,
        }
    }
}

impl<T> FetchState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&DomainError> {
        self.error.as_ref()
    }

    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.is_loading = true;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Applies `result` if `ticket` is current. Returns whether it was applied.
    pub fn settle(&mut self, ticket: Ticket, result: Result<T, DomainError>) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        self.is_loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(err) => {
                self.data = None;
                self.error = Some(err);
            }
        }
        true
    }

    pub fn view(&self) -> FetchView<T>
    where
        T: Clone,
    {
        FetchView {
            is_loading: self.is_loading,
            data: self.data.clone(),
            error: self.error.as_ref().map(ToString::to_string),
        }
    }
}
