pub const MAX_RESULT_LIMIT: usize = 100;

/// Number of articles a listing returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultLimit(usize);

impl ResultLimit {
    /// Missing or non-positive values fall back to `default`; oversized
    /// values are clamped to [`MAX_RESULT_LIMIT`].
    pub fn parse(value: Option<i64>, default: usize) -> Self {
        let limit = match value {
            Some(v) if v > 0 => usize::try_from(v).unwrap_or(MAX_RESULT_LIMIT),
            _ => default,
        };

        Self(limit.clamp(1, MAX_RESULT_LIMIT))
    }

    pub fn value(&self) -> usize {
        self.0
    }
}
