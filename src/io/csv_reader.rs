use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::{Stream, StreamExt};
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::error::IoError;
use super::parse::{OperationRequest, RawOperationRecord};

/// Async stream of operation requests from CSV input.
///
/// Expected header: `op,account,owner,amount,payee,phone`; fields that do
/// not apply to an operation may be left empty.
pub struct CsvOperationStream {
    inner: Pin<Box<dyn Stream<Item = Result<OperationRequest, IoError>> + Send>>,
}

impl CsvOperationStream {
    /// Create a new operation stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .flexible(true)
            .create_deserializer(reader);

        let stream = csv_reader
            .into_deserialize::<RawOperationRecord>()
            .map(|result| result.map_err(IoError::from).and_then(RawOperationRecord::parse));

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Open a file and stream operations from it, bridging tokio's file IO
    /// into the futures-style reader csv-async expects
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }
}

impl Stream for CsvOperationStream {
    type Item = Result<OperationRequest, IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
