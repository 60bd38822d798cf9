use thiserror::Error;

#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("Source name list has {sources} entries but output name list has {outputs}")]
    OutputNameMismatch { sources: usize, outputs: usize },
    #[error("Source name list has {sources} entries but extension list has {extensions}")]
    SourceExtMismatch { sources: usize, extensions: usize },
}
