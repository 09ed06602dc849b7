use clap::builder::styling::{Color, RgbColor, Style};
use std::io::Write;

#[cfg(feature = "save-log")]
use crate::types::err::{ErrorCode, MyError};
#[cfg(feature = "save-log")]
use std::fs::File;
#[cfg(feature = "save-log")]
use std::io;
#[cfg(feature = "save-log")]
use std::path::PathBuf;

#[cfg(feature = "save-log")]
// 同时输出到终端（stderr）和文件
struct MultiWriter<T: Write> {
    term: T,
    file: std::sync::Mutex<File>,
}

#[cfg(feature = "save-log")]
impl<T: Write> MultiWriter<T> {
    fn new(term: T, file: File) -> Self {
        MultiWriter {
            term,
            file: std::sync::Mutex::new(file),
        }
    }
}

#[cfg(feature = "save-log")]
impl<T: Write> Write for MultiWriter<T> {
    /// 每次都完整写入两端，避免部分写入后重试导致文件内容重复
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.term.write_all(buf)?;

        // 去除 ANSI 颜色代码后写入文件
        let plain_text = strip_ansi_escapes::strip(buf);
        match self.file.lock() {
            Ok(mut file) => file.write_all(&plain_text)?,
            Err(_) => return Err(io::Error::other("log file mutex poisoned")),
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.term.flush()?;
        if let Ok(mut file) = self.file.lock() {
            file.flush()?;
        }
        Ok(())
    }
}

pub struct LogIniter {
    quiet: bool,
    debug: bool,
    _save_log: Option<String>,
}

impl LogIniter {
    pub fn new(quiet: bool, debug: bool, _save_log: Option<String>) -> Self {
        LogIniter {
            quiet,
            debug,
            _save_log,
        }
    }

    /// quiet只保留warn与error，debug优先
    pub fn level(&self) -> log::LevelFilter {
        if self.debug {
            log::LevelFilter::Debug
        } else if self.quiet {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Info
        }
    }

    pub fn init(self) {
        let mut builder = env_logger::Builder::new();
        builder.target(env_logger::Target::Stderr);

        #[cfg(feature = "save-log")]
        let mut log_file_path: Option<PathBuf> = None;

        #[cfg(feature = "save-log")]
        if let Some(log_path) = self._save_log.as_deref() {
            let path = match parse_save_path(log_path) {
                Ok(path) => path,
                Err(e) => {
                    eprintln!("日志路径解析失败: {}, 将使用默认路径", e);
                    default_log_path()
                }
            };

            match File::create(&path) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(MultiWriter::new(
                        io::stderr(),
                        file,
                    ))));
                    log_file_path = Some(path);
                }
                Err(e) => {
                    eprintln!("无法创建日志文件 {}: {}, 日志仅输出到终端", path.display(), e);
                }
            }
        }

        let debug = self.debug;
        builder
            .format(move |buf, record| {
                let time = chrono::Local::now().format("%H:%M:%S");
                let level = record.level();
                let level_style = buf.default_level_style(level);

                // 时间颜色（灰色）
                let time_style = Style::new().fg_color(Some(Color::Rgb(RgbColor(150, 150, 150))));

                if debug {
                    let file = record.file().unwrap_or("unknown_file");
                    let file_line = record.line().unwrap_or(0);
                    writeln!(
                        buf,
                        "{time_style}{time} {file}:{file_line}{time_style:#} {level_style}{level}{level_style:#} {}",
                        record.args()
                    )
                } else {
                    writeln!(
                        buf,
                        "{time_style}{time}{time_style:#} {level_style}{level}{level_style:#} {}",
                        record.args()
                    )
                }
            })
            .filter_level(self.level())
            .init();
        log::debug!("log init.");

        #[cfg(feature = "save-log")]
        if let Some(path) = log_file_path {
            log::info!("日志将保存至: {}", path.display());
        }
    }
}

#[cfg(feature = "save-log")]
/// 空字符串使用默认路径，相对路径以当前工作目录为基准
fn parse_save_path(save_log: &str) -> Result<PathBuf, MyError> {
    if save_log.trim().is_empty() {
        return Ok(default_log_path());
    }
    let work_dir = std::env::current_dir().map_err(|e| {
        MyError::new(
            ErrorCode::FailToGetWorkDir,
            format!("无法获取当前工作目录: {}", e),
        )
    })?;
    let normalized_path = crate::utils::path::canonicalize_path(save_log, &work_dir);

    if let Some(parent) = normalized_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MyError::new(
                    ErrorCode::IoError,
                    format!("无法创建日志文件父目录 {}: {}", parent.display(), e),
                )
            })?;
        }
    }

    Ok(normalized_path)
}

#[cfg(feature = "save-log")]
fn default_log_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%y-%m-%d-%H-%M-%S");
    let name = format!("mk-{}.log", timestamp);
    std::env::current_dir()
        .map(|dir| dir.join(&name))
        .unwrap_or_else(|_| PathBuf::from(name))
}
