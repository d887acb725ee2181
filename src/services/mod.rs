pub mod catalog;
pub mod profile;
pub mod winery_directory;
