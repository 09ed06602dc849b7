use crate::types::err::{ErrorCode, MyError, MyResult};
use crate::types::mk_context::MkContext;
use crate::utils::editor::Opener;
use crate::utils::fs::{mk_parents, mkdirs, touch};
use crate::utils::link::{create_hardlink, create_symlink};
use crate::utils::path::{get_path_type, is_dir_intended, PathType};
use std::path::Path;

/// 任务要创建的东西，路径均为用户输入的原始字符串
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MkTarget {
    /// 以'/'结尾为目录，否则为文件
    File(String),
    /// 在link创建指向target的符号链接
    Symlink { link: String, target: String },
    /// 在link创建指向target的硬链接
    Hardlink { link: String, target: String },
}

/// 由命令行参数解析出的单个任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MkTask {
    pub target: MkTarget,
    pub open_after: bool, // 完成后用编辑器打开第一个路径
}

impl MkTask {
    pub fn file(path: String) -> Self {
        MkTask {
            target: MkTarget::File(path),
            open_after: false,
        }
    }

    pub fn symlink(link: String, target: String) -> Self {
        MkTask {
            target: MkTarget::Symlink { link, target },
            open_after: false,
        }
    }

    pub fn hardlink(link: String, target: String) -> Self {
        MkTask {
            target: MkTarget::Hardlink { link, target },
            open_after: false,
        }
    }

    pub fn with_open(mut self) -> Self {
        self.open_after = true;
        self
    }

    /// 文件路径或链接路径，用于排序与打开
    pub fn first_path(&self) -> &str {
        match &self.target {
            MkTarget::File(path) => path,
            MkTarget::Symlink { link, .. } | MkTarget::Hardlink { link, .. } => link,
        }
    }

    pub fn paths(&self) -> Vec<&str> {
        match &self.target {
            MkTarget::File(path) => vec![path.as_str()],
            MkTarget::Symlink { link, target } | MkTarget::Hardlink { link, target } => {
                vec![link.as_str(), target.as_str()]
            }
        }
    }

    /// 执行任务，返回Err时应终止整个程序
    pub fn work(&self, ctx: &MkContext, opener: &dyn Opener) -> MyResult<()> {
        match &self.target {
            MkTarget::File(path) => mk_file(ctx, path)?,
            MkTarget::Symlink { link, target } => mk_symlink(ctx, link, target)?,
            MkTarget::Hardlink { link, target } => mk_hardlink(ctx, link, target)?,
        }
        if self.open_after {
            self.open(ctx, opener);
        }
        Ok(())
    }

    fn open(&self, ctx: &MkContext, opener: &dyn Opener) {
        let path = ctx.resolve(self.first_path());
        let is_dir = match get_path_type(&path) {
            Some(t) => t.is_dir || (t.is_symlink && path.is_dir()),
            None => {
                log::warn!("-o: 目标 {} 不存在", path.display());
                false
            }
        };
        opener.open(&path, is_dir);
    }
}

/// 创建文件或目录（目录倾向）；缺失的父目录会自动创建，已存在则什么都不做
fn mk_file(ctx: &MkContext, raw: &str) -> MyResult<()> {
    let path = ctx.resolve(raw);

    if is_dir_intended(raw) {
        mkdirs(&path)?;
        log::info!("目录: {}", path.display());
        return Ok(());
    }

    if get_path_type(&path).is_some() {
        log::debug!("已存在，跳过: {}", path.display());
        return Ok(());
    }
    mk_parents(&path)?;
    touch(&path)?;
    log::info!("文件: {}", path.display());
    Ok(())
}

/// 符号链接不会自动创建缺失的父目录
fn mk_symlink(ctx: &MkContext, raw_link: &str, raw_target: &str) -> MyResult<()> {
    let target = ctx.resolve(raw_target);
    if get_path_type(&target).is_none() {
        return Err(MyError::new(
            ErrorCode::FileNotExist,
            format!("符号链接目标 {} 不存在", target.display()),
        ));
    }

    let link = ctx.resolve(raw_link);
    check_link_parent(ctx, &link)?;

    log::debug!(
        "符号链接创建中\n\tlink: {}\n\ttarget: {}",
        link.display(),
        target.display()
    );
    create_symlink(&target, &link)?;
    log::info!("符号链接: {} -> {}", link.display(), target.display());
    Ok(())
}

fn check_link_parent(ctx: &MkContext, link: &Path) -> MyResult<()> {
    let Some(parent) = link.parent() else {
        return Ok(());
    };
    if get_path_type(parent).is_some() {
        return Ok(());
    }
    Err(MyError::new(
        ErrorCode::ParentNotExist,
        format!(
            "符号链接所在目录 {} 不存在，可先创建目录:\n\tmk {}/ && {}",
            parent.display(),
            ctx.display_relative(parent),
            ctx.command_line
        ),
    ))
}

fn mk_hardlink(ctx: &MkContext, raw_link: &str, raw_target: &str) -> MyResult<()> {
    let target = ctx.resolve(raw_target);
    let target_type = get_path_type(&target).ok_or_else(|| {
        MyError::new(
            ErrorCode::FileNotExist,
            format!("硬链接目标 {} 不存在", target.display()),
        )
    })?;
    if let Some(note) = hardlink_target_note(&target, target_type) {
        log::warn!("{}", note);
    }

    let link = ctx.resolve(raw_link);
    create_hardlink(&target, &link)?;
    log::info!("硬链接: {} -> {}", link.display(), target.display());
    Ok(())
}

/// 硬链接目标是符号链接时的提示
fn hardlink_target_note(target: &Path, target_type: PathType) -> Option<String> {
    target_type.is_symlink.then(|| {
        format!(
            "注意: 硬链接目标 {} 是符号链接，将链接符号链接本身",
            target.display()
        )
    })
}
