use anyhow::Result;
use std::path::PathBuf;

extern crate sun_archive;
use sun_archive::archive_selection::ArchiveSelection;
use sun_archive::spaceweather::sun_images;
use sun_archive::spaceweather::Provider;

#[tokio::main]
async fn main() -> Result<()> {
    let output_dir = PathBuf::from("./outputs");

    let selection = ArchiveSelection::from_template(&sun_images::archive_selection_toml());

    let provider = Provider::new();

    let plan = sun_images::generate_download_plan(&selection, output_dir.clone())?;
    let _ = plan.write(output_dir.join("download_plan.json"))?;

    let _ = plan.execute(&provider).await?;

    Ok(())
}
