use crate::types::err::{ErrorCode, MyError, MyResult};
use std::fs;
use std::path::Path;

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// 创建目录（包括所有缺失的父目录），已存在时不报错
pub fn mkdirs(path: &Path) -> MyResult<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(path).map_err(|e| {
        MyError::new(
            ErrorCode::FailToMakeDir,
            format!("无法创建目录 {}: {}", path.display(), e),
        )
    })
}

/// 创建传入路径的父目录
pub fn mk_parents(path: &Path) -> MyResult<()> {
    let parent = path.parent().ok_or_else(|| {
        MyError::new(
            ErrorCode::FailToMakeDir,
            format!("无法获取父目录: {}", path.display()),
        )
    })?;
    if parent.exists() {
        Ok(())
    } else {
        mkdirs(parent)
    }
}

/// 创建空文件，已存在的文件不会被截断
pub fn touch(path: &Path) -> MyResult<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options.open(path).map(|_| ()).map_err(|e| {
        let code = match e.kind() {
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::FailToMakeFile,
        };
        MyError::new(code, format!("无法创建文件 {}: {}", path.display(), e))
    })
}
