use crate::http::HttpOps;
use reqwest::Client;

pub struct Provider {
    client: Client,
}

impl Provider {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpOps for Provider {
    async fn get_bytes(self: &Self, url: &str) -> anyhow::Result<Vec<u8>> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
