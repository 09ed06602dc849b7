use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ParentNotExist = 1,
    InvalidInput = 2,
    IoError = 3,
    FileNotExist = 4,
    PermissionDenied = 5,
    FailToMakeDir = 100,
    FailAtMakeLink = 101,
    FailToMakeFile = 102,
    FailToGetWorkDir = 103,
    FailToGetHomeDir = 104,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::ParentNotExist => write!(f, "ParentNotExist"),
            ErrorCode::InvalidInput => write!(f, "InvalidInput"),
            ErrorCode::IoError => write!(f, "IoError"),
            ErrorCode::FileNotExist => write!(f, "FileNotExist"),
            ErrorCode::PermissionDenied => write!(f, "PermissionDenied"),
            ErrorCode::FailToMakeDir => write!(f, "Fail To Make Dir"),
            ErrorCode::FailAtMakeLink => write!(f, "Fail At Make Link"),
            ErrorCode::FailToMakeFile => write!(f, "Fail To Make File"),
            ErrorCode::FailToGetWorkDir => write!(f, "Fail To Get Work Dir"),
            ErrorCode::FailToGetHomeDir => write!(f, "Fail To Get Home Dir"),
        }
    }
}

impl ErrorCode {
    /// 进程退出码，取错误码的值（均不为0）
    pub fn exit_status(self) -> i32 {
        self as i32
    }
}

#[derive(Debug)]
pub struct MyError {
    pub code: ErrorCode,
    pub msg: String,
}

pub type MyResult<T> = Result<T, MyError>;

impl fmt::Display for MyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.msg)
    }
}

impl MyError {
    pub fn new(code: ErrorCode, msg: String) -> Self {
        MyError { code, msg }
    }
    pub fn log(&self) {
        log::error!("{}", self);
    }
    /// 输出错误并终止进程，剩余任务不再执行
    pub fn exit(&self) -> ! {
        self.log();
        std::process::exit(self.code.exit_status())
    }
}
