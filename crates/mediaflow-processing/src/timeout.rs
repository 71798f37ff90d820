//! Timeout bounding for decode/encode suspension points.

use std::future::Future;
use std::time::Duration;

use mediaflow_core::PipelineError;

/// Run `fut` with an upper bound of `ms` milliseconds. On expiry the caller
/// gets a `Timeout` error naming the operation; the future is dropped, never
/// aborted out-of-band.
pub async fn bounded<F, T>(operation: &str, ms: u64, fut: F) -> Result<T, PipelineError>
where
    F: Future<Output = T>,
{
    tokio::time::timeout(Duration::from_millis(ms), fut)
        .await
        .map_err(|_| PipelineError::Timeout {
            operation: operation.to_string(),
            ms,
        })
}

/// Rescope a step timeout to the file whose extraction it interrupted, so
/// the failure names the file. Other errors pass through unchanged.
pub fn timeout_as_extraction(name: &str, err: PipelineError) -> PipelineError {
    match err {
        PipelineError::Timeout { operation, ms } => PipelineError::Extraction {
            name: name.to_string(),
            reason: format!("{} timed out after {} ms", operation, ms),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_before_deadline() {
        let value = bounded("Fast op", 1000, async { 42 }).await.unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test(start_paused = true)]
    async fn expires_with_named_operation() {
        let err = bounded("Video decode", 5000, async {
            tokio::time::sleep(Duration::from_secs(60)).await;
        })
        .await
        .unwrap_err();
        match err {
            PipelineError::Timeout { operation, ms } => {
                assert_eq!(operation, "Video decode");
                assert_eq!(ms, 5000);
            }
            other => panic!("expected timeout, got {:?}", other),
        }
    }

    #[test]
    fn timeout_is_rescoped_to_the_file() {
        let err = timeout_as_extraction(
            "clip.mp4",
            PipelineError::Timeout {
                operation: "Video decode".to_string(),
                ms: 5000,
            },
        );
        match err {
            PipelineError::Extraction { name, reason } => {
                assert_eq!(name, "clip.mp4");
                assert!(reason.contains("Video decode"));
                assert!(reason.contains("5000"));
            }
            other => panic!("expected extraction error, got {:?}", other),
        }
    }

    #[test]
    fn non_timeout_errors_pass_through_unchanged() {
        let err = timeout_as_extraction(
            "clip.mp4",
            PipelineError::Commit { status: 500 },
        );
        assert!(matches!(err, PipelineError::Commit { status: 500 }));
    }
}
