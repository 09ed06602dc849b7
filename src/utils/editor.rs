use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub const MK_FILE_EDITOR: &str = "_MK_FILE_EDITOR";
pub const MK_DIR_EDITOR: &str = "_MK_DIR_EDITOR";

/// 用外部程序打开路径。失败只记录日志，不影响后续任务
pub trait Opener {
    fn open(&self, path: &Path, is_dir: bool);
}

/// 通过环境变量`_MK_FILE_EDITOR`与`_MK_DIR_EDITOR`选择编辑器
#[derive(Debug, Default, Clone)]
pub struct EnvEditor {
    pub file_editor: Option<String>,
    pub dir_editor: Option<String>,
}

impl EnvEditor {
    pub fn from_env() -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        EnvEditor {
            file_editor: read(MK_FILE_EDITOR),
            dir_editor: read(MK_DIR_EDITOR),
        }
    }

    /// 返回(环境变量名, 编辑器命令)
    fn editor_for(&self, is_dir: bool) -> (&'static str, Option<&str>) {
        if is_dir {
            (MK_DIR_EDITOR, self.dir_editor.as_deref())
        } else {
            (MK_FILE_EDITOR, self.file_editor.as_deref())
        }
    }
}

impl Opener for EnvEditor {
    fn open(&self, path: &Path, is_dir: bool) {
        let (var, editor) = self.editor_for(is_dir);
        let Some(editor) = editor else {
            log::warn!("不知道用哪个编辑器打开 {}，请设置${}", path.display(), var);
            return;
        };
        let exe: PathBuf = match which::which(editor) {
            Ok(exe) => exe,
            Err(e) => {
                log::warn!("-o: 找不到命令 '{}': {}", editor, e);
                return;
            }
        };
        log::debug!("-o: {} {}", exe.display(), path.display());

        // 不等待编辑器退出
        let res = Command::new(&exe)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn();
        if let Err(e) = res {
            log::warn!("-o: 无法启动编辑器 '{}': {}", exe.display(), e);
        }
    }
}
