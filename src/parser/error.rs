use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedParseError {
    /// The document is not well-formed XML. Upstream evicts the stored copy
    /// for this error, since re-reading the same bytes cannot succeed.
    #[error("malformed XML in the feed for station {station_id}")]
    Xml {
        station_id: i32,
        #[source]
        source: quick_xml::Error,
    },

    /// The byte stream ended before the document element was closed, which
    /// happens when a download was cut off mid-transfer.
    #[error("feed for station {station_id} ended before the document was closed")]
    Truncated { station_id: i32 },
}
