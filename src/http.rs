//! Trait for issuing HTTP GET requests on behalf of a download plan

pub trait HttpOps {
    /// Fetch the resource at `url` and return the full response body.
    /// A non-success status is an error.
    async fn get_bytes(self: &Self, url: &str) -> anyhow::Result<Vec<u8>>;
}
