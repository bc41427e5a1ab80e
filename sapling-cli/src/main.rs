//! Sapling CLI - dump syntax trees built from code snippets.
//! Sapling CLI - 转储由代码片段构建的语法树。

mod commands;
mod output;
mod printer;

use clap::{Parser, Subcommand, ValueEnum};
use sapling_syntax::Dialect;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "sapling")]
#[command(author, version, about = "Sapling - best-effort syntax trees for code snippets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// How a tree is written to stdout.
/// 语法树的输出格式。
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Indented text, one node per line. / 缩进文本，每行一个节点。
    Tree,
    /// JSON document. / JSON 文档。
    Json,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Parse a file and print its tree. / 解析文件并打印语法树。
    Parse {
        /// The file to parse. / 要解析的文件。
        file: String,

        /// Source dialect; guessed from the extension when omitted.
        /// 源码方言；省略时根据扩展名推断。
        #[arg(short, long)]
        dialect: Option<Dialect>,

        /// Output format. / 输出格式。
        #[arg(short, long, value_enum, default_value = "tree")]
        format: Format,

        /// Print node ids. / 打印节点 id。
        #[arg(long)]
        ids: bool,
    },

    /// Parse an expression given on the command line. / 解析命令行给出的表达式。
    Expr {
        /// The expression text. / 表达式文本。
        expr: String,

        /// Operator table to use. / 使用的运算符表。
        #[arg(short, long, default_value = "expression")]
        dialect: Dialect,

        /// Output format. / 输出格式。
        #[arg(short, long, value_enum, default_value = "tree")]
        format: Format,

        /// Print node ids. / 打印节点 id。
        #[arg(long)]
        ids: bool,
    },

    /// Report every place a file only parsed by guessing. / 报告文件中需要猜测才能解析的位置。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,

        /// Source dialect; guessed from the extension when omitted.
        /// 源码方言；省略时根据扩展名推断。
        #[arg(short, long)]
        dialect: Option<Dialect>,

        /// One line per warning instead of annotated source.
        /// 每条警告输出一行，而非带注释的源码。
        #[arg(short, long)]
        brief: bool,
    },
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            file,
            dialect,
            format,
            ids,
        } => commands::parse::run(&file, dialect, format, ids, cli.verbose),
        Commands::Expr {
            expr,
            dialect,
            format,
            ids,
        } => commands::expr::run(&expr, dialect, format, ids),
        Commands::Check {
            file,
            dialect,
            brief,
        } => commands::check::run(&file, dialect, brief, cli.quiet),
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}
