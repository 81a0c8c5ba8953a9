//! textpp 命令行入口

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use textpp_ptbr::{ConfigManager, DictionaryName, GlobalConfig, Rule, TextPreProcessor};

/// 葡萄牙语文本预处理命令行工具
#[derive(Debug, Parser)]
#[command(name = "textpp", version, about = "Portuguese (pt-BR) text preprocessing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// 词典目录（默认使用内置词典）
    #[arg(global = true, long = "dictionary-dir")]
    dictionary_dir: Option<PathBuf>,
    /// JSON 配置文件
    #[arg(global = true, long = "config")]
    config: Option<PathBuf>,
    /// 日志详细程度（-v, -vv）
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// 执行完整 clean 流水线
    Clean(CleanArgs),
    /// 执行单条规则
    Apply(ApplyArgs),
    /// 打印词典词条
    Dictionary(DictionaryArgs),
}

#[derive(Debug, Args)]
struct CleanArgs {
    /// 保留特殊字符
    #[arg(long)]
    keep_special_characters: bool,
    /// 输入文本，缺省时读取标准输入
    text: Option<String>,
}

#[derive(Debug, Args)]
struct ApplyArgs {
    /// 规则名称，例如 pronouns、stopwords、hour
    #[arg(long, short)]
    rule: Rule,
    /// 输入文本，缺省时读取标准输入
    text: Option<String>,
}

#[derive(Debug, Args)]
struct DictionaryArgs {
    /// 词典名称，例如 stopwords、contractions
    name: DictionaryName,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let tpp = TextPreProcessor::new(config);

    match cli.command {
        Commands::Clean(args) => {
            let input = read_input(args.text)?;
            let output = if args.keep_special_characters {
                tpp.clean_with(&input, false)?
            } else {
                tpp.clean(&input)?
            };
            println!("{}", output);
        }
        Commands::Apply(args) => {
            let input = read_input(args.text)?;
            println!("{}", tpp.apply(args.rule, &input)?);
        }
        Commands::Dictionary(args) => {
            for entry in tpp.get_dictionary(args.name)? {
                println!("{}", entry);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<GlobalConfig> {
    let mut config = match &cli.config {
        Some(path) => GlobalConfig::from_json_file(path)
            .with_context(|| format!("读取配置文件失败：{}", path.display()))?,
        None => ConfigManager::get_default(),
    };

    // 命令行参数优先于配置文件
    if let Some(dir) = &cli.dictionary_dir {
        config = ConfigManager::custom()
            .dictionary_dir(dir.clone())
            .strip_special_characters(config.strip_special_characters)
            .build();
    }

    Ok(config)
}

fn read_input(text: Option<String>) -> Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("读取标准输入失败")?;
            Ok(buffer)
        }
    }
}
