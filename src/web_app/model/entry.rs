// web_app/model/entry.rs - Smart-entry submission state
//
// The page keeps one EntryState in a signal and drives it through
// begin_submit / finish_submit around the record_items call. Keeping the
// transitions here lets them be tested without a browser or a server.

use chrono::NaiveDateTime;

use super::{InventoryItem, RecordError, RecordRequest, RecordResponse};

/// Format of the `currentTime` field sent to the record service
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prefix shown in front of any failed request
pub const REQUEST_FAILED_PREFIX: &str = "处理请求时出错: ";

/// Render a local wall-clock time as `YYYY-MM-DD HH:MM:SS`
pub fn local_timestamp(now: NaiveDateTime) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Why a submission never reached the network
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Description was empty after trimming; the validation error is set
    Empty,
    /// A previous submission has not completed yet
    InFlight,
}

/// State owned by the smart-entry view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EntryState {
    /// Items from the latest successful response only
    pub items: Vec<InventoryItem>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EntryState {
    /// Validate the description and start a submission.
    ///
    /// On success the error is cleared, `loading` is set and the request to
    /// send is returned. Submissions are serialized: while one is in flight
    /// every further attempt is rejected without touching state.
    pub fn begin_submit(
        &mut self,
        description: &str,
        now: NaiveDateTime,
    ) -> Result<RecordRequest, SubmitRejected> {
        if self.loading {
            return Err(SubmitRejected::InFlight);
        }

        if description.trim().is_empty() {
            self.error = Some(RecordError::EmptyDescription.to_string());
            return Err(SubmitRejected::Empty);
        }

        self.error = None;
        self.loading = true;

        Ok(RecordRequest {
            description: description.to_string(),
            current_time: local_timestamp(now),
        })
    }

    /// Apply the outcome of a submission started by `begin_submit`.
    ///
    /// Success replaces the item list wholesale. Failure keeps the previous
    /// items and records the error. `loading` is cleared either way.
    pub fn finish_submit(&mut self, outcome: Result<RecordResponse, RecordError>) {
        self.loading = false;

        match outcome {
            Ok(response) => self.items = response.items,
            Err(err) => self.error = Some(format!("{REQUEST_FAILED_PREFIX}{err}")),
        }
    }

    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }
}
