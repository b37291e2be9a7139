use bistro_shared::internal_error;
use futures::channel::oneshot;
use tracing::{debug, error};

use crate::ui_helpers::ui_error_label;

#[derive(Debug)]
pub struct AwaitingType<T>(pub oneshot::Receiver<anyhow::Result<T>>);

/// Tracks one request made by a page
///
/// Dropping the state drops the receiver, a response that arrives after that
/// is discarded by the client instead of being applied.
#[derive(Debug, Default)]
pub enum DataState<T> {
    #[default]
    None,
    AwaitingResponse(AwaitingType<T>),
    Present(T),
    Failed(String),
}

/// Progress of a request that changes data on the server
#[must_use]
#[derive(Debug, PartialEq, Eq)]
pub enum SaveState {
    Completed,
    Ongoing,
    Failed(String),
}

impl<T> DataState<T> {
    /// Starts the request if none was made yet, otherwise shows its progress
    ///
    /// Nothing is shown once the data is present, the caller is expected to
    /// display it instead.
    pub fn get<F>(&mut self, ui: &mut egui::Ui, retry_msg: Option<&str>, fetch_fn: F)
    where
        F: FnOnce() -> AwaitingType<T>,
    {
        match self {
            DataState::None => {
                ui.spinner();
                *self = DataState::AwaitingResponse(fetch_fn());
            }
            DataState::AwaitingResponse(rx) => match Self::await_data(rx) {
                Some(new_state) => *self = new_state,
                None => {
                    ui.spinner();
                }
            },
            DataState::Present(_) => {
                debug!("data already present, nothing to fetch");
            }
            DataState::Failed(e) => {
                ui_error_label(ui, format!("Could not complete the request: {e}"));
                if ui.button(retry_msg.unwrap_or("Retry Request")).clicked() {
                    *self = DataState::default();
                }
            }
        }
    }

    /// Returns the new state once the response has arrived
    pub fn await_data(rx: &mut AwaitingType<T>) -> Option<Self> {
        Some(match rx.0.try_recv() {
            Ok(Some(Ok(data))) => DataState::Present(data),
            Ok(Some(Err(e))) => {
                let err_msg = format!("{e}");
                error!(err_msg, "Error response received instead of the data");
                DataState::Failed(err_msg)
            }
            Ok(None) => return None,
            Err(e) => DataState::Failed(internal_error!(format!("response channel closed: {e}"))),
        })
    }

    /// Polls a save request, `None` means no save was started
    pub fn save_outcome(&mut self) -> Option<SaveState> {
        if let DataState::AwaitingResponse(rx) = self {
            if let Some(new_state) = Self::await_data(rx) {
                *self = new_state;
            }
        }
        match self {
            DataState::None => None,
            DataState::AwaitingResponse(_) => Some(SaveState::Ongoing),
            DataState::Present(_) => Some(SaveState::Completed),
            DataState::Failed(e) => Some(SaveState::Failed(format!("Save failed. {e}"))),
        }
    }

    pub fn present(&self) -> Option<&T> {
        match self {
            DataState::Present(data) => Some(data),
            _ => None,
        }
    }

    pub fn present_mut(&mut self) -> Option<&mut T> {
        match self {
            DataState::Present(data) => Some(data),
            _ => None,
        }
    }
}
