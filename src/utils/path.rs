use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// 展开开头的`~`为home目录，仅处理`~`与`~/...`，`~user`等保持原样
pub fn expand_path<P: AsRef<Path>>(path: &str, home_dir: P) -> PathBuf {
    let home = home_dir.as_ref().to_string_lossy();
    let expanded = shellexpand::tilde_with_context(path, || Some(&*home));
    PathBuf::from(expanded.into_owned())
}

/// 路径规范化：相对路径以work_dir为基准转为绝对路径，并做词法清理
pub fn canonicalize_path<P: AsRef<Path>, W: AsRef<Path>>(path: P, work_dir: W) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        dunce::simplified(path).to_path_buf().clean()
    } else {
        work_dir.as_ref().join(path).clean()
    }
}

/// 展开并规范化，不会失败
pub fn resolve_path<H: AsRef<Path>, W: AsRef<Path>>(path: &str, home_dir: H, work_dir: W) -> PathBuf {
    canonicalize_path(expand_path(path, home_dir), work_dir)
}

/// 路径是否有目录倾向（以'/'结尾，windows下也包括'\'）
pub fn is_dir_intended(path: &str) -> bool {
    path.ends_with('/') || (cfg!(windows) && path.ends_with('\\'))
}

/// 不解引用符号链接的stat结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathType {
    pub is_dir: bool,
    pub is_symlink: bool,
}

#[inline]
/// 获取路径状态，不跟随符号链接；不存在（或无法读取元数据）时返回None
pub fn get_path_type<P: AsRef<Path>>(path: P) -> Option<PathType> {
    std::fs::symlink_metadata(path).ok().map(|meta| PathType {
        is_dir: meta.is_dir(),
        is_symlink: meta.file_type().is_symlink(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_expand_path() {
        let home = Path::new("/home/mk");
        assert_eq!(expand_path("~", home), PathBuf::from("/home/mk"));
        assert_eq!(expand_path("~/", home), PathBuf::from("/home/mk"));
        assert_eq!(expand_path("~/a/b.txt", home), PathBuf::from("/home/mk/a/b.txt"));
        assert_eq!(expand_path("~other/a", home), PathBuf::from("~other/a"));
        assert_eq!(expand_path("a/~/b", home), PathBuf::from("a/~/b"));
        assert_eq!(expand_path("rel/x", home), PathBuf::from("rel/x"));
    }

    #[cfg(unix)]
    #[test]
    fn test_canonicalize_path() {
        let work = Path::new("/work/dir");
        assert_eq!(canonicalize_path("a/./b/../c", work), PathBuf::from("/work/dir/a/c"));
        assert_eq!(canonicalize_path("../x", work), PathBuf::from("/work/x"));
        assert_eq!(canonicalize_path("/abs//y/", work), PathBuf::from("/abs/y"));
        assert_eq!(canonicalize_path("docs/", work), PathBuf::from("/work/dir/docs"));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolve_path() {
        let home = Path::new("/home/mk");
        let work = Path::new("/work");
        assert_eq!(resolve_path("~/notes/", home, work), PathBuf::from("/home/mk/notes"));
        assert_eq!(resolve_path("notes", home, work), PathBuf::from("/work/notes"));
    }

    #[test]
    fn test_is_dir_intended() {
        assert!(is_dir_intended("docs/"));
        assert!(is_dir_intended("a/b/"));
        assert!(!is_dir_intended("docs"));
        assert!(!is_dir_intended("a/b.txt"));
    }

    #[test]
    fn test_get_path_type() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, b"test").unwrap();

        assert_eq!(
            get_path_type(dir.path()),
            Some(PathType { is_dir: true, is_symlink: false })
        );
        assert_eq!(
            get_path_type(&file),
            Some(PathType { is_dir: false, is_symlink: false })
        );
        assert_eq!(get_path_type(dir.path().join("missing")), None);

        #[cfg(unix)]
        {
            // 损坏的符号链接同样视为存在
            let broken = dir.path().join("broken");
            std::os::unix::fs::symlink(dir.path().join("nowhere"), &broken).unwrap();
            assert_eq!(
                get_path_type(&broken),
                Some(PathType { is_dir: false, is_symlink: true })
            );
        }
    }
}
