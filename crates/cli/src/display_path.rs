use std::path::{Component, Path, PathBuf};

/// Strip a `tmp/<checkout>/` prefix so logs show the repository-relative path.
///
/// Paths without a `tmp` component are returned unchanged.
pub fn clean(path: &Path) -> String {
    let components: Vec<Component<'_>> = path.components().collect();
    let Some(tmp_index) = components
        .iter()
        .position(|component| component.as_os_str() == "tmp")
    else {
        return path.display().to_string();
    };

    let rest: PathBuf = components.iter().skip(tmp_index + 2).collect();
    rest.display().to_string()
}
