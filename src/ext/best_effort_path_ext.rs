use std::path::{Component, Path, PathBuf};

/// Absolute, normalized display of a path for diagnostics and error
/// messages, even when the path does not exist yet (canonicalization
/// fails for paths this tool is about to create).
pub trait BestEffortPathExt {
    fn best_effort_path_display(&self) -> String;
}

impl BestEffortPathExt for Path {
    fn best_effort_path_display(&self) -> String {
        if let Ok(canonical) = self.canonicalize() {
            return canonical.display().to_string();
        }

        let absolute = match (self.is_absolute(), std::env::current_dir()) {
            (true, _) => self.to_path_buf(),
            (false, Ok(current_dir)) => current_dir.join(self),
            (false, Err(_)) => self.to_path_buf(),
        };
        normalize(&absolute).display().to_string()
    }
}

impl BestEffortPathExt for PathBuf {
    fn best_effort_path_display(&self) -> String {
        self.as_path().best_effort_path_display()
    }
}

/// Resolves `.` and `..` components lexically.
fn normalize(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(components.last(), None | Some(Component::RootDir)) {
                    components.pop();
                }
            }
            other => components.push(other),
        }
    }
    components.iter().collect()
}
