#![allow(async_fn_in_trait)]
pub mod archive_selection;
pub mod download_plan;
pub mod error;
pub mod http;
pub mod spaceweather;
