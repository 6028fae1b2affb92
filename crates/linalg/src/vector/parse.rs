use std::str::FromStr;

use super::Vector;
use crate::error::LinalgError;

/// Comma-separated coordinates, optionally wrapped in `()` or `[]`:
/// `"1, 2.5, -3"`, `"(8.462, 7.893, -8.187)"`, `"[1e-3, 2]"`.
impl FromStr for Vector {
    type Err = LinalgError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let t = t
            .strip_prefix('(')
            .and_then(|r| r.strip_suffix(')'))
            .or_else(|| t.strip_prefix('[').and_then(|r| r.strip_suffix(']')))
            .unwrap_or(t)
            .trim();
        if t.is_empty() {
            return Err(LinalgError::EmptyCoordinates);
        }
        Vector::new(t.split(','))
    }
}
