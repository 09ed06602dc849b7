use crate::types::err::{ErrorCode, MyError, MyResult};
use std::path::Path;

/// 转换创建链接时的io错误
fn convert_mklink_res(
    res: std::io::Result<()>,
    kind: &str,
    link: &Path,
    target: &Path,
) -> MyResult<()> {
    if let Err(e) = res {
        match e.kind() {
            #[cfg(windows)]
            std::io::ErrorKind::PermissionDenied => Err(MyError::new(
                ErrorCode::PermissionDenied,
                format!(
                    "权限不足，无法创建{} {}，请尝试使用管理员权限，或开启开发者模式",
                    kind,
                    link.display()
                ),
            )),
            #[cfg(not(windows))]
            std::io::ErrorKind::PermissionDenied => Err(MyError::new(
                ErrorCode::PermissionDenied,
                format!("权限不足，无法创建{} {}", kind, link.display()),
            )),
            _ => Err(MyError::new(
                ErrorCode::FailAtMakeLink,
                format!(
                    "无法创建{} '{}' -> '{}': {}",
                    kind,
                    link.display(),
                    target.display(),
                    e
                ),
            )),
        }
    } else {
        Ok(())
    }
}

/// 在link创建指向target的符号链接
#[cfg(unix)]
pub fn create_symlink<P: AsRef<Path>, Q: AsRef<Path>>(target: P, link: Q) -> MyResult<()> {
    let target = target.as_ref();
    let link = link.as_ref();
    let res = std::os::unix::fs::symlink(target, link);
    convert_mklink_res(res, "符号链接", link, target)
}

/// 在link创建指向target的符号链接（自动判断文件/目录）
#[cfg(windows)]
pub fn create_symlink<P: AsRef<Path>, Q: AsRef<Path>>(target: P, link: Q) -> MyResult<()> {
    let target = target.as_ref();
    let link = link.as_ref();

    let res = if target.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    };
    convert_mklink_res(res, "符号链接", link, target)
}

/// 在link创建指向target的硬链接
///
/// target本身是符号链接时，链接的是符号链接本身而不是它指向的文件
pub fn create_hardlink<P: AsRef<Path>, Q: AsRef<Path>>(target: P, link: Q) -> MyResult<()> {
    let target = target.as_ref();
    let link = link.as_ref();
    let res = std::fs::hard_link(target, link);
    convert_mklink_res(res, "硬链接", link, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[cfg(unix)]
    #[test]
    fn test_create_symlink() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.txt");
        std::fs::write(&target, b"hi").unwrap();
        let link = dir.path().join("link");

        create_symlink(&target, &link).unwrap();
        assert_eq!(std::fs::read_link(&link).unwrap(), target);

        // 已存在时报错
        let e = create_symlink(&target, &link).unwrap_err();
        assert_eq!(e.code, ErrorCode::FailAtMakeLink);
    }

    #[test]
    fn test_create_hardlink() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target.txt");
        std::fs::write(&target, b"hi").unwrap();
        let link = dir.path().join("alias.txt");

        create_hardlink(&target, &link).unwrap();
        assert_eq!(std::fs::read(&link).unwrap(), b"hi");

        std::fs::write(&target, b"changed").unwrap();
        assert_eq!(std::fs::read(&link).unwrap(), b"changed");
    }

    #[test]
    fn test_create_hardlink_missing_target() {
        let dir = tempdir().unwrap();
        let e = create_hardlink(dir.path().join("nope"), dir.path().join("alias")).unwrap_err();
        assert_eq!(e.code, ErrorCode::FailAtMakeLink);
    }
}
