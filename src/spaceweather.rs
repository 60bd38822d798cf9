mod provider;
pub use provider::Provider;

pub mod sun_images {
    use crate::archive_selection::ArchiveSelection;
    use crate::download_plan::{DownloadPlan, DownloadTask};
    use anyhow::{anyhow, Result};
    use std::path::{Path, PathBuf};
    use toml;

    pub fn archive_selection_toml() -> toml::Table {
        toml::toml! {
            id = "spaceweather.sun_images"

            provider = "Spaceweather"

            name = "Daily sun imagery"

            description = "Daily coronal hole and sunspot images published by spaceweather.com.\n\
            Each day's images live in a folder named by a date token (e.g. 12aug16); the\n\
            coronal hole image is a SDO extreme-ultraviolet view and the sunspot image is a\n\
            HMI continuum view. Archived copies are renamed to date-prefixed files so that\n\
            one flat directory holds the full history."

            docs = "http://spaceweather.com"

            address = "http://spaceweather.com/images2016/"

            dates = ["12aug16", "13aug16"]

            output_ext = ".jpg"

            verbose = true

            [[images]]
            source_name = "coronalhole_sdo_blank"
            source_ext = ".jpg"
            output_name = "coronalhole"
            download = true

            [[images]]
            source_name = "hmi1898"
            source_ext = ".gif"
            output_name = "sunspot"
            download = true
        }
    }

    /// Compose the source URL for one image:
    /// `address + date + "/" + name + ext`, no validation.
    pub fn image_url(address: &str, date: &str, name: &str, ext: &str) -> String {
        format!("{}{}/{}{}", address, date, name, ext)
    }

    /// Compose the archive path for one image: the file `date + "_" + name + ext`
    /// inside `output_dir`. The directory is assumed to exist.
    pub fn image_file(output_dir: &Path, date: &str, name: &str, ext: &str) -> PathBuf {
        output_dir.join(format!("{}_{}{}", date, name, ext))
    }

    pub fn generate_download_plan(
        selection: &ArchiveSelection,
        output_dir: PathBuf,
    ) -> Result<DownloadPlan> {
        let dates = selection
            .dates_to_download()
            .ok_or(anyhow!("No dates to download"))?;
        let images = selection
            .images_to_download()
            .ok_or(anyhow!("No images selected for download"))?;

        let mut tasks: Vec<DownloadTask> = vec![];

        for date in &dates {
            for image in &images {
                let url = image_url(
                    selection.address(),
                    date,
                    &image.source_name,
                    &image.source_ext,
                );
                let output = image_file(&output_dir, date, &image.output_name, selection.output_ext());

                if selection.verbose() {
                    println!("Input image file URL: \n{}", url);
                    println!("Output image file path: \n{}\n", output.display());
                }

                let task = DownloadTask::new(&url, output.to_str().unwrap());
                tasks.push(task)
            }
        }
        Ok(DownloadPlan::new(tasks))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        const TEST_OUTPUT_DIR: &str = "/tmp/sun-archive-test";

        #[test]
        fn test_image_url() {
            let url = image_url("http://x.com/", "01jan17", "img1", ".jpg");
            assert_eq!(url, "http://x.com/01jan17/img1.jpg");
        }

        #[test]
        fn test_image_file() {
            let path = image_file(Path::new("/tmp/"), "01jan17", "out1", ".jpg");
            assert_eq!(path.to_str().unwrap(), "/tmp/01jan17_out1.jpg");
        }

        fn sparse_selection_toml(dates: toml::value::Array, download: bool) -> toml::Table {
            let mut table = archive_selection_toml();
            table.insert("dates".to_string(), toml::Value::Array(dates));
            let images = table.get_mut("images").unwrap().as_array_mut().unwrap();
            for image in images {
                image
                    .as_table_mut()
                    .unwrap()
                    .insert("download".to_string(), toml::Value::Boolean(download));
            }
            table
        }

        #[test]
        fn test_generate_download_plan_requires_dates() {
            let table = sparse_selection_toml(vec![], true);
            let selection = ArchiveSelection::from_template(&table);
            let plan = generate_download_plan(&selection, PathBuf::from(TEST_OUTPUT_DIR));
            assert_eq!(plan.is_err(), true);
        }

        #[test]
        fn test_generate_download_plan_requires_selected_images() {
            let table = sparse_selection_toml(vec!["12aug16".into()], false);
            let selection = ArchiveSelection::from_template(&table);
            let plan = generate_download_plan(&selection, PathBuf::from(TEST_OUTPUT_DIR));
            assert_eq!(plan.is_err(), true);
        }

        #[test]
        fn test_generate_download_plan() {
            let selection = ArchiveSelection::from_template(&archive_selection_toml());
            let output_dir = PathBuf::from(TEST_OUTPUT_DIR);
            let plan = generate_download_plan(&selection, output_dir).unwrap();

            // 2 dates x 2 image pairs, ordered outer date, inner pair
            let tasks = plan.tasks();
            assert_eq!(tasks.len(), 4);
            assert_eq!(
                tasks[0].url(),
                "http://spaceweather.com/images2016/12aug16/coronalhole_sdo_blank.jpg"
            );
            assert_eq!(
                tasks[0].output(),
                "/tmp/sun-archive-test/12aug16_coronalhole.jpg"
            );
            assert_eq!(
                tasks[1].url(),
                "http://spaceweather.com/images2016/12aug16/hmi1898.gif"
            );
            assert_eq!(
                tasks[3].output(),
                "/tmp/sun-archive-test/13aug16_sunspot.jpg"
            );
        }
    }
}
