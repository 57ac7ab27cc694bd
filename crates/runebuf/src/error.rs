use thiserror::Error;

/// Returned by [`Reader::unread_rune`](crate::Reader::unread_rune).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnreadError {
    /// Nothing has been read since construction or the last
    /// [`forget`](crate::Reader::forget), or everything read has already been
    /// unread.
    #[error("no rune to unread")]
    NoRuneToUnread,
}
