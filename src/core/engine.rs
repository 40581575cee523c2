use crate::domain::model::SortRequest;
use crate::domain::ports::NumberSorter;
use crate::utils::error::Result;
use crate::utils::validation::validate_finite_numbers;

/// Validating shell around a sorting strategy: one linear request/response
/// exchange with a pre-flight input gate.
pub struct SortEngine<S: NumberSorter> {
    sorter: S,
}

impl<S: NumberSorter> SortEngine<S> {
    pub fn new(sorter: S) -> Self {
        Self { sorter }
    }

    pub async fn sort(&self, numbers: &[f64]) -> Result<Vec<f64>> {
        validate_finite_numbers(numbers)?;

        tracing::info!("sending array for sorting: {:?}", numbers);

        let request = SortRequest::ascending(numbers.to_vec());
        let reply = self.sorter.sort(&request).await?;

        tracing::info!("sorted result received: {:?}", reply.sorted);

        Ok(reply.sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SortReply;
    use crate::utils::error::{RemoteStatus, SortError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct MockSorter {
        calls: Arc<AtomicUsize>,
        reply: std::result::Result<Vec<f64>, RemoteStatus>,
    }

    impl MockSorter {
        fn replying(reply: Vec<f64>) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                reply: Ok(reply),
            }
        }

        fn failing(status: RemoteStatus) -> Self {
            Self {
                calls: Arc::new(AtomicUsize::new(0)),
                reply: Err(status),
            }
        }
    }

    #[async_trait]
    impl NumberSorter for MockSorter {
        async fn sort(&self, _request: &SortRequest) -> Result<SortReply> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(sorted) => Ok(SortReply {
                    sorted: sorted.clone(),
                }),
                Err(status) => Err(SortError::remote(*status)),
            }
        }
    }

    #[tokio::test]
    async fn test_returns_reply_from_sorter() {
        let sorter = MockSorter::replying(vec![1.0, 2.0, 4.0, 6.0, 9.0]);
        let calls = sorter.calls.clone();
        let engine = SortEngine::new(sorter);

        let sorted = engine.sort(&[6.0, 2.0, 9.0, 1.0, 4.0]).await.unwrap();

        assert_eq!(sorted, vec![1.0, 2.0, 4.0, 6.0, 9.0]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_finite_input_never_reaches_sorter() {
        let sorter = MockSorter::replying(vec![]);
        let calls = sorter.calls.clone();
        let engine = SortEngine::new(sorter);

        let err = engine.sort(&[1.0, f64::NAN, 3.0]).await.unwrap_err();

        assert!(matches!(err, SortError::InvalidInput { .. }));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_sorter_failures_propagate_unchanged() {
        let engine = SortEngine::new(MockSorter::failing(RemoteStatus::RateLimited));

        let err = engine.sort(&[2.0, 1.0]).await.unwrap_err();

        assert!(matches!(
            err,
            SortError::Remote {
                status: RemoteStatus::RateLimited,
                ..
            }
        ));
    }
}
