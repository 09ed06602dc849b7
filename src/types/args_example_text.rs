pub const USAGE: &str = r#"Usage:
       mk <path> [-s- <target> | -h- <target>] ...
mk 用于创建文件、目录、符号链接与硬链接，合并了 touch、mkdir 与 ln。

以 / 结尾的路径表示目录，否则为文件:
    mk main.rs        # 创建文件 main.rs
    mk docs/          # 创建目录 docs

默认自动创建缺失的目录:
    mk non/existent/parent/and/file.txt

用 -s- 创建符号链接，-h- 创建硬链接，可以理解为带标签的边:
    mk symname -s- target/file    # symname -s-> target/file
    mk alias -h- target/file      # alias -h-> target/file

用 -o 或 --open 在创建后打开（编辑器由 $_MK_FILE_EDITOR / $_MK_DIR_EDITOR 指定）:
    mk -o notes.md
"#;
