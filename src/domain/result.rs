//! Result type alias for regionsplit

use super::errors::RegionSplitError;

/// Result type alias for regionsplit operations
///
/// # Examples
///
/// ```
/// use regionsplit::domain::result::Result;
/// use regionsplit::domain::errors::RegionSplitError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(RegionSplitError::NoOutputDirectory)
/// }
/// ```
pub type Result<T> = std::result::Result<T, RegionSplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<i32> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }

    #[test]
    fn test_result_err() {
        let result: Result<i32> = Err(RegionSplitError::NoRegions);
        assert!(result.is_err());
    }
}
