/// Configuration for a [`Reader`](crate::Reader).
///
/// # Examples
///
/// ```rust
/// use runebuf::{Reader, ReaderOptions, Rune};
///
/// let options = ReaderOptions {
///     chunk_size: 64,
///     ..Default::default()
/// };
/// let mut rd = Reader::with_options(&b"tiny"[..], options);
/// assert_eq!(rd.read_rune(), Ok(Rune::from('t')));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReaderOptions {
    /// How many bytes to request from the source per fill.
    ///
    /// Values below four (the longest UTF-8 sequence) are raised to four.
    ///
    /// # Default
    ///
    /// `4096`
    pub chunk_size: usize,

    /// How many runes of history to allocate up front.
    ///
    /// The history grows on demand regardless; this only avoids early
    /// reallocations for callers that know how far they will rewind.
    ///
    /// # Default
    ///
    /// `0`
    pub history_capacity: usize,
}

impl ReaderOptions {
    /// The default fill size.
    pub const DEFAULT_CHUNK_SIZE: usize = 4096;
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            chunk_size: Self::DEFAULT_CHUNK_SIZE,
            history_capacity: 0,
        }
    }
}
