use std::path::{Path, PathBuf};

/// Environment variable that points at an explicit settings file.
pub const CONFIG_ENV_VAR: &str = "LESSON_PLAYER_CONFIG";
pub const CONFIG_FILE_NAME: &str = "lesson_player.json";

fn resource_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        if let Some(parent) = exe.parent() {
            roots.push(parent.to_path_buf());
        }
    }
    let manifest_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    if manifest_root.exists() {
        roots.push(manifest_root);
    }
    roots
}

/// Resolve a relative path against the executable directory, then the crate
/// root. Falls back to the first root even when nothing exists yet.
pub fn resolve_resource_path(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    let roots = resource_roots();
    for root in &roots {
        let candidate = root.join(path);
        if candidate.exists() {
            return candidate;
        }
    }
    roots
        .first()
        .map(|root| root.join(path))
        .unwrap_or_else(|| path.to_path_buf())
}

/// Where the player settings live: `$LESSON_PLAYER_CONFIG` if set, otherwise
/// `lesson_player.json` next to the executable or the crate root.
pub fn settings_path() -> PathBuf {
    match std::env::var(CONFIG_ENV_VAR) {
        Ok(value) if !value.trim().is_empty() => PathBuf::from(value.trim()),
        _ => resolve_resource_path(Path::new(CONFIG_FILE_NAME)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_paths_pass_through() {
        let path = std::env::temp_dir().join("elsewhere.json");
        assert_eq!(resolve_resource_path(&path), path);
    }

    #[test]
    fn test_relative_paths_land_under_a_root() {
        let resolved = resolve_resource_path(Path::new(CONFIG_FILE_NAME));
        assert!(resolved.ends_with(CONFIG_FILE_NAME));
        assert!(resolved.is_absolute());
    }
}
