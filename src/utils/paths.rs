//! Data/config directory resolution and version string

use std::path::PathBuf;

use directories::ProjectDirs;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
    pub static ref DATA_FOLDER: Option<PathBuf> =
        std::env::var(format!("{}_DATA", *PROJECT_NAME))
            .ok()
            .map(PathBuf::from);
    pub static ref CONFIG_FOLDER: Option<PathBuf> =
        std::env::var(format!("{}_CONFIG", *PROJECT_NAME))
            .ok()
            .map(PathBuf::from);
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", *PROJECT_NAME);
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("io.github", "nestui", env!("CARGO_PKG_NAME"))
}

pub fn get_data_dir() -> PathBuf {
    if let Some(dir) = DATA_FOLDER.clone() {
        dir
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

pub fn get_config_dir() -> PathBuf {
    if let Some(dir) = CONFIG_FOLDER.clone() {
        dir
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    }
}

/// Crate version, git description (from build.rs) and the directories in use
pub fn version() -> String {
    let author = clap::crate_authors!();
    let git_info = option_env!("_GIT_INFO").unwrap_or("unknown");

    format!(
        "{}-{git_info}\n\nAuthors: {author}\n\nConfig directory: {}\nData directory: {}",
        env!("CARGO_PKG_VERSION"),
        get_config_dir().display(),
        get_data_dir().display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_names_derive_from_crate_name() {
        assert_eq!(*PROJECT_NAME, "NESTUI");
        assert_eq!(*LOG_ENV, "NESTUI_LOGLEVEL");
        assert_eq!(*LOG_FILE, "nestui.log");
    }

    #[test]
    fn test_version_mentions_package_version() {
        assert!(version().starts_with(env!("CARGO_PKG_VERSION")));
    }
}
