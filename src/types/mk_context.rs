use crate::types::err::{ErrorCode, MyError, MyResult};
use crate::utils::editor::EnvEditor;
use crate::utils::path::resolve_path;
use std::path::{Path, PathBuf};

/// 一次调用的运行环境，启动时获取一次，执行期间只读
#[derive(Debug, Clone)]
pub struct MkContext {
    pub work_dir: PathBuf,     // 调用时的工作目录（绝对路径）
    pub home_dir: PathBuf,     // 用于展开`~`
    pub editor: EnvEditor,     // -o/--open 使用的编辑器
    pub command_line: String,  // 原始命令行，用于错误提示
}

impl MkContext {
    pub fn new<W: Into<PathBuf>, H: Into<PathBuf>>(work_dir: W, home_dir: H) -> Self {
        MkContext {
            work_dir: work_dir.into(),
            home_dir: home_dir.into(),
            editor: EnvEditor::default(),
            command_line: String::from("mk"),
        }
    }

    /// 从进程环境构建，无法获取工作目录或home目录时返回Err
    pub fn from_env() -> MyResult<Self> {
        let work_dir = std::env::current_dir().map_err(|e| {
            MyError::new(
                ErrorCode::FailToGetWorkDir,
                format!("无法获取当前工作目录: {}", e),
            )
        })?;
        let home_dir = dirs::home_dir().ok_or_else(|| {
            MyError::new(
                ErrorCode::FailToGetHomeDir,
                "无法获取当前用户的home目录".into(),
            )
        })?;
        let command_line = std::env::args().collect::<Vec<String>>().join(" ");
        log::debug!(
            "work_dir: {}, home_dir: {}",
            work_dir.display(),
            home_dir.display()
        );

        Ok(MkContext {
            work_dir,
            home_dir,
            editor: EnvEditor::from_env(),
            command_line,
        })
    }

    /// 展开`~`并转为绝对路径
    pub fn resolve(&self, path: &str) -> PathBuf {
        resolve_path(path, &self.home_dir, &self.work_dir)
    }

    /// 尽量以相对工作目录的形式展示路径
    pub fn display_relative(&self, path: &Path) -> String {
        match path.strip_prefix(&self.work_dir) {
            Ok(rel) if rel.as_os_str().is_empty() => String::from("."),
            Ok(rel) => format!("./{}", rel.display()),
            Err(_) => format!("{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_resolve() {
        let ctx = MkContext::new("/work", "/home/mk");
        assert_eq!(ctx.resolve("a/b"), PathBuf::from("/work/a/b"));
        assert_eq!(ctx.resolve("~/a"), PathBuf::from("/home/mk/a"));
        assert_eq!(ctx.resolve("/abs"), PathBuf::from("/abs"));
    }

    #[cfg(unix)]
    #[test]
    fn test_display_relative() {
        let ctx = MkContext::new("/work", "/home/mk");
        assert_eq!(ctx.display_relative(Path::new("/work/a/b")), "./a/b");
        assert_eq!(ctx.display_relative(Path::new("/work")), ".");
        assert_eq!(ctx.display_relative(Path::new("/elsewhere/x")), "/elsewhere/x");
    }

    #[test]
    fn test_from_env() {
        let ctx = MkContext::from_env().unwrap();
        assert!(ctx.work_dir.is_absolute());
        assert!(!ctx.command_line.is_empty());
    }
}
