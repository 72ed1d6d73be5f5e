/// Classification for retry policy.
///
/// Used to determine whether a failed report request is worth repeating
/// later or whether the caller should fall back to another data source
/// immediately.
///
/// # Behavior Summary
///
/// | Class | Typical Cause | Worth Retrying Later? |
/// |-------|---------------|-----------------------|
/// | `Never` | bad credentials, contract change | No |
/// | `WithBackoff` | rate limit, timeout, network | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - the request is fundamentally invalid and repeating it
    /// won't help. Covers authentication failures, malformed responses,
    /// and non-transient API rejections.
    Never,

    /// Retry with exponential backoff.
    ///
    /// Used for transient errors like rate limiting (429), timeouts, and
    /// network failures. The partner is expected to serve the same request
    /// successfully once the transient condition clears.
    WithBackoff,
}
