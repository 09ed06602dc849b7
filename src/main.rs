use clap::Parser;

use mk::types::args::Args;
use mk::types::args_example_text::USAGE;
use mk::types::mk_context::MkContext;
use mk::types::mk_tasks::MkTasks;
use mk::utils::logs::LogIniter;

fn main() {
    let args: Args = Args::parse();

    if args.tokens.is_empty() {
        print!("{}", USAGE);
        return;
    }

    // 初始化日志系统
    LogIniter::new(args.quiet, args.debug, args.save_log()).init();
    log::debug!("{:?}", args);

    let ctx = MkContext::from_env().unwrap_or_else(|e| e.exit());
    let tasks = MkTasks::try_from(&args).unwrap_or_else(|e| e.exit());

    // 任何错误都直接终止，剩余任务不再执行
    if let Err(e) = tasks.work(&ctx, &ctx.editor) {
        e.exit();
    }
}
