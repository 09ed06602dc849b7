use crate::types::err::{ErrorCode, MyError, MyResult};
use crate::types::mk_context::MkContext;
use crate::types::mk_task::MkTask;
use crate::utils::editor::Opener;

pub const SYMLINK_MARKER: &str = "-s-";
pub const HARDLINK_MARKER: &str = "-h-";
pub const OPEN_FLAGS: [&str; 2] = ["-o", "--open"];

/// 一次调用的全部任务
///
/// 解析规则：
/// 1. 先从左到右找链接标记`-s-`/`-h-`，与前后两个参数组成链接任务，三者都标记为已使用；
/// 2. 再从左到右处理未使用的参数：`-o`/`--open`为下一个任务加上打开标记，其余每个参数一个文件任务；
/// 3. 执行前按第一个路径排序。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MkTasks {
    pub tasks: Vec<MkTask>,
}

impl MkTasks {
    /// 按参数顺序解析，不排序。链接标记位于首尾时返回Err
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> MyResult<Self> {
        let tokens: Vec<&str> = tokens.iter().map(|t| t.as_ref()).collect();
        let n = tokens.len();
        let mut consumed = vec![false; n];
        // 链接路径所在位置 -> 链接任务下标，供-o使用
        let mut link_at: Vec<Option<usize>> = vec![None; n];
        let mut tasks: Vec<MkTask> = Vec::new();

        let mut i = 0;
        while i < n {
            let make: fn(String, String) -> MkTask = match tokens[i] {
                SYMLINK_MARKER => MkTask::symlink,
                HARDLINK_MARKER => MkTask::hardlink,
                _ => {
                    i += 1;
                    continue;
                }
            };
            if i == 0 {
                return Err(marker_misplaced(tokens[i], true));
            }
            if i == n - 1 {
                return Err(marker_misplaced(tokens[i], false));
            }

            link_at[i - 1] = Some(tasks.len());
            tasks.push(make(tokens[i - 1].into(), tokens[i + 1].into()));
            consumed[i - 1] = true;
            consumed[i] = true;
            consumed[i + 1] = true;
            log::debug!("链接: [{}] {} [{}]", tokens[i - 1], tokens[i], tokens[i + 1]);
            // 跳过后一个参数
            i += 2;
        }

        let mut i = 0;
        while i < n {
            if consumed[i] {
                i += 1;
                continue;
            }
            if OPEN_FLAGS.contains(&tokens[i]) && i + 1 < n {
                let next = i + 1;
                if !consumed[next] {
                    tasks.push(MkTask::file(tokens[next].into()).with_open());
                    i += 2;
                    continue;
                }
                // 未使用参数后紧跟的已使用参数只能是链接路径
                if let Some(idx) = link_at[next] {
                    tasks[idx].open_after = true;
                    i += 1;
                    continue;
                }
            }
            tasks.push(MkTask::file(tokens[i].into()));
            i += 1;
        }

        Ok(MkTasks { tasks })
    }

    /// 按第一个路径的字典序排序（稳定排序）
    pub fn sort(&mut self) {
        self.tasks.sort_by(|a, b| a.first_path().cmp(b.first_path()));
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 依次执行，遇到第一个错误立即返回，剩余任务不再执行
    pub fn work(&self, ctx: &MkContext, opener: &dyn Opener) -> MyResult<()> {
        for (i, task) in self.tasks.iter().enumerate() {
            log::debug!("Try mk [{}]: {:?}", i, task);
            task.work(ctx, opener)?;
        }
        Ok(())
    }
}

impl<S: AsRef<str>> TryFrom<&[S]> for MkTasks {
    type Error = MyError;

    /// 解析并排序，可直接执行
    fn try_from(tokens: &[S]) -> Result<Self, Self::Error> {
        let mut tasks = MkTasks::parse(tokens)?;
        tasks.sort();
        Ok(tasks)
    }
}

fn marker_misplaced(marker: &str, at_start: bool) -> MyError {
    let kind = if marker == SYMLINK_MARKER {
        "symlink"
    } else {
        "hardlink"
    };
    let usage = if at_start {
        format!("mk /specify/{kind}/path {marker} /target/path")
    } else {
        format!("mk /{kind}/path {marker} /specify/target/path")
    };
    let pos = if at_start { "前缺少链接路径" } else { "后缺少目标路径" };
    MyError::new(
        ErrorCode::InvalidInput,
        format!("'{marker}' {pos}，用法: {usage}"),
    )
}
