use crate::http::HttpOps;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Deserialize, Serialize, Debug)]
pub struct DownloadTask {
    url: String,
    output: String,
}
impl DownloadTask {
    pub fn new(url: &str, output: &str) -> Self {
        DownloadTask {
            url: url.to_string(),
            output: output.to_string(),
        }
    }

    pub fn url(self: &Self) -> &str {
        &self.url
    }

    pub fn output(self: &Self) -> &str {
        &self.output
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct DownloadPlan {
    tasks: Vec<DownloadTask>,
}

impl DownloadPlan {
    pub fn new(tasks: Vec<DownloadTask>) -> Self {
        Self { tasks }
    }

    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let plan: Self = serde_json::from_str(&content)?;
        Ok(plan)
    }

    pub fn write<P: AsRef<Path>>(self: &Self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn tasks(self: &Self) -> &[DownloadTask] {
        &self.tasks
    }

    pub async fn execute(self: &Self, provider: &impl HttpOps) -> Result<()> {
        for task in self.tasks.iter() {
            println!("Current task: {:?}", task);
            try_download(provider, &task.url, &task.output).await?;
        }
        Ok(())
    }
}

pub async fn try_download(provider: &impl HttpOps, url: &str, output: &str) -> Result<()> {
    let body = provider.get_bytes(url).await?;

    // The output directory must already exist; an existing file at the
    // output path is overwritten.
    fs::write(output, body)?;

    Ok(())
}
