/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Paginated query fetcher
//!
//! [`Pager`] walks a listing one page at a time, echoing the server's cursor
//! back until it reports the last page. Pages are produced lazily and the
//! sequence can be restarted with [`Pager::reset`].

use crate::application::interfaces::transport::Transport;
use crate::error::AppError;
use crate::model::cursor::{Continuation, Cursor, CursorKeys};
use crate::model::requests::RequestDescriptor;
use crate::model::responses::ResponseEnvelope;
use crate::model::table::ResultTable;
use tracing::{debug, info};

/// Performs one non-paged call and converts `section` to a table
///
/// A failing `rt_cd` is an error whatever the body holds; a "no data" message
/// gives an empty table.
pub async fn fetch_table<T: Transport + ?Sized>(
    transport: &T,
    request: &RequestDescriptor,
    section: &str,
) -> Result<ResultTable, AppError> {
    let envelope = fetch_envelope(transport, request).await?;
    if envelope.is_no_data() {
        debug!("TR: {} returned no data", request.tr_id);
        return Ok(ResultTable::default());
    }
    Ok(ResultTable::from_section(envelope.section(section)))
}

/// Performs one non-paged call and returns the checked envelope
pub async fn fetch_envelope<T: Transport + ?Sized>(
    transport: &T,
    request: &RequestDescriptor,
) -> Result<ResponseEnvelope, AppError> {
    let response = transport.execute(request, "").await?;
    ResponseEnvelope::from_value(response.body)?.check()
}

/// Lazy, restartable sequence of pages of one listing
pub struct Pager<'a, T: Transport + ?Sized> {
    transport: &'a T,
    request: RequestDescriptor,
    section: String,
    keys: CursorKeys,
    cursor: Cursor,
    state: Continuation,
    done: bool,
    pages: usize,
}

impl<'a, T: Transport + ?Sized> Pager<'a, T> {
    /// Pager over `request`, reading `section` of each page
    ///
    /// The cursor parameters named by `keys` are added to the request.
    pub fn new(
        transport: &'a T,
        request: RequestDescriptor,
        section: impl Into<String>,
        keys: CursorKeys,
    ) -> Self {
        let mut pager = Self {
            transport,
            request,
            section: section.into(),
            keys,
            cursor: Cursor::default(),
            state: Continuation::First,
            done: false,
            pages: 0,
        };
        pager.apply_cursor();
        pager
    }

    fn apply_cursor(&mut self) {
        let (fk, nk) = self.keys.request_names();
        self.request.set(fk, self.cursor.fk.clone());
        self.request.set(nk, self.cursor.nk.clone());
    }

    /// Request that the next call will send
    #[must_use]
    pub fn request(&self) -> &RequestDescriptor {
        &self.request
    }

    /// Pages received since the last reset
    #[must_use]
    pub fn pages_fetched(&self) -> usize {
        self.pages
    }

    /// True once the last page, an error or "no data" has been seen
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Restarts the sequence from the first page
    pub fn reset(&mut self) {
        self.cursor = Cursor::default();
        self.state = Continuation::First;
        self.done = false;
        self.pages = 0;
        self.apply_cursor();
    }

    /// Fetches the next page
    ///
    /// Returns `None` once the sequence is over. An error ends the sequence
    /// after being returned once.
    pub async fn next_page(&mut self) -> Option<Result<ResultTable, AppError>> {
        if self.done {
            return None;
        }
        if self.state == Continuation::More {
            tokio::time::sleep(self.transport.page_delay()).await;
        }

        match self.fetch_page().await {
            Ok(table) => Some(Ok(table)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    async fn fetch_page(&mut self) -> Result<ResultTable, AppError> {
        let response = self
            .transport
            .execute(&self.request, self.state.request_header())
            .await?;
        let envelope = ResponseEnvelope::from_value(response.body)?.check()?;
        self.pages += 1;

        if envelope.is_no_data() {
            debug!("TR: {} returned no data", self.request.tr_id);
            self.done = true;
            return Ok(ResultTable::default());
        }

        let table = ResultTable::from_section(envelope.section(&self.section));
        self.state = Continuation::from_header(response.tr_cont.as_deref());
        match self.state {
            Continuation::More => {
                self.cursor = envelope.cursor(self.keys);
                self.apply_cursor();
                debug!(
                    "TR: {} page {} has {} rows, calling next",
                    self.request.tr_id,
                    self.pages,
                    table.len()
                );
            }
            _ => {
                self.done = true;
                debug!(
                    "TR: {} last page {} has {} rows",
                    self.request.tr_id,
                    self.pages,
                    table.len()
                );
            }
        }
        Ok(table)
    }

    /// Fetches every remaining page and merges them
    ///
    /// Any failure discards what was gathered so far.
    pub async fn collect(mut self) -> Result<ResultTable, AppError> {
        let mut all = ResultTable::default();
        while let Some(page) = self.next_page().await {
            all.merge(page?);
        }
        info!(
            "TR: {} collected {} rows over {} pages",
            self.request.tr_id,
            all.len(),
            self.pages
        );
        Ok(all)
    }
}
