pub mod args;
pub mod args_example_text;
pub mod err;
pub mod mk_context;
pub mod mk_task;
pub mod mk_tasks;
