use crate::types::args_example_text::USAGE;
use crate::types::err::MyError;
use crate::types::mk_tasks::MkTasks;
use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(
    version,
    about = "Create files, directories, symlinks and hardlinks in one go\n一个合并了touch、mkdir与ln的创建工具",
    long_about = USAGE,
    disable_help_flag = true
)]
pub struct Args {
    /// 路径与标记: <path>、<link> -s- <target>、<link> -h- <target>、-o <path>
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
    pub tokens: Vec<String>,

    /// 只输出warn与error level的日志
    #[arg(short, long)]
    pub quiet: bool,

    /// 输出debug level的日志
    #[arg(long)]
    pub debug: bool,

    #[cfg(feature = "save-log")]
    /// 保存本次处理日志到指定文件，传入空字符串则保存到当前目录下的mk-%y-%m-%d-%H-%M-%S.log
    #[arg(long)]
    pub save_log: Option<String>,
}

impl Args {
    #[cfg(feature = "save-log")]
    pub fn save_log(&self) -> Option<String> {
        self.save_log.clone()
    }

    #[cfg(not(feature = "save-log"))]
    pub fn save_log(&self) -> Option<String> {
        None
    }
}

impl TryFrom<&Args> for MkTasks {
    type Error = MyError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let tasks = MkTasks::try_from(args.tokens.as_slice())?;
        log::debug!("已从Args构建{}个任务", tasks.len());
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::err::ErrorCode;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mk").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_hyphen_tokens_are_kept() {
        let args = parse(&["link", "-s-", "target", "-o", "a", "--open", "b", "--help"]);
        assert_eq!(
            args.tokens,
            vec!["link", "-s-", "target", "-o", "a", "--open", "b", "--help"]
        );
    }

    #[test]
    fn test_leading_hyphen_tokens() {
        assert_eq!(parse(&["-o", "notes.md"]).tokens, vec!["-o", "notes.md"]);
        assert_eq!(parse(&["--open", "d/"]).tokens, vec!["--open", "d/"]);
        assert_eq!(parse(&["-h-", "x"]).tokens, vec!["-h-", "x"]);
    }

    #[test]
    fn test_log_flags() {
        let args = parse(&["-q", "a"]);
        assert!(args.quiet);
        assert_eq!(args.tokens, vec!["a"]);

        let args = parse(&["--debug", "a", "-q"]);
        assert!(args.debug);
        assert!(!args.quiet);
        assert_eq!(args.tokens, vec!["a", "-q"]);
    }

    #[test]
    fn test_leading_separator_and_version() {
        assert_eq!(parse(&["--", "a", "-q"]).tokens, vec!["a", "-q"]);
        assert_eq!(parse(&["a", "-V"]).tokens, vec!["a", "-V"]);

        let e = Args::try_parse_from(["mk", "-V"]).unwrap_err();
        assert_eq!(e.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_tokens() {
        assert!(parse(&[]).tokens.is_empty());
    }

    #[test]
    fn test_mk_tasks_from_args() {
        let args = Args {
            tokens: vec!["b".into(), "a".into(), "-s-".into(), "c".into()],
            ..Default::default()
        };
        let tasks = MkTasks::try_from(&args).unwrap();
        let firsts: Vec<&str> = tasks.tasks.iter().map(|t| t.first_path()).collect();
        assert_eq!(firsts, vec!["a", "b"]);

        let args = Args {
            tokens: vec!["a".into(), "-s-".into()],
            ..Default::default()
        };
        assert_eq!(
            MkTasks::try_from(&args).unwrap_err().code,
            ErrorCode::InvalidInput
        );
    }
}
