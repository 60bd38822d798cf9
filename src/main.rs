use anyhow::Result;
use std::path::PathBuf;

use sun_archive::archive_selection::ArchiveSelection;
use sun_archive::spaceweather::{sun_images, Provider};

#[tokio::main]
async fn main() -> Result<()> {
    let input_dir = PathBuf::from("./inputs");
    let output_dir = PathBuf::from("./outputs");

    let archive_selection_toml = input_dir.join("archive_selection.toml");
    let selection = ArchiveSelection::read(archive_selection_toml)?;

    let provider = Provider::new();

    let plan = sun_images::generate_download_plan(&selection, output_dir.clone())?;
    let _ = plan.write(output_dir.join("download_plan.json"))?;

    println!("\n**** Saving image files from input URLs ****\n");
    let _ = plan.execute(&provider).await?;

    Ok(())
}
