use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "snake_settings.yaml";

pub fn get_settings_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return settings_path_in(exe_dir);
    }
    PathBuf::from(SETTINGS_FILE_NAME)
}

fn settings_path_in(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_file_sits_in_given_directory() {
        let path = settings_path_in(Path::new("games"));
        assert_eq!(path, Path::new("games").join("snake_settings.yaml"));
    }

    #[test]
    fn test_default_path_uses_settings_file_name() {
        let path = get_settings_path();
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(SETTINGS_FILE_NAME));
    }
}
