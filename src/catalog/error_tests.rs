//! Unit tests for catalog error types

#[cfg(test)]
mod tests {
    use crate::catalog::error::CatalogError;
    use std::error::Error;
    use std::io;

    #[test]
    fn test_not_ready_error() {
        let error = CatalogError::NotReady;
        assert_eq!(error.to_string(), "Catalog is not ready yet");
    }

    #[test]
    fn test_failed_error() {
        let error = CatalogError::Failed("blueprints still indexing".to_string());
        assert_eq!(error.to_string(), "Catalog load failed: blueprints still indexing");
    }

    #[test]
    fn test_io_error_from() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "catalog.bin missing");
        let error: CatalogError = io_error.into();

        assert!(error.to_string().contains("IO error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_debug() {
        let error = CatalogError::NotReady;
        let debug = format!("{error:?}");
        assert!(debug.contains("NotReady"));
    }

    #[test]
    fn test_question_mark_conversion() {
        fn load() -> Result<Vec<u32>, CatalogError> {
            let bytes = std::fs::read("/definitely/not/a/catalog/path")?;
            Ok(bytes.into_iter().map(u32::from).collect())
        }

        assert!(matches!(load(), Err(CatalogError::Io(_))));
    }
}
