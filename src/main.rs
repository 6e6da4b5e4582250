//! categorize - 商品分类命令行工具
//!
//! ```bash
//! categorize classify "プレミアムコットンシャツ メンズ" --explain
//! categorize analyze products.json --output categorized_products.json
//! categorize --rules rules.json categories --add ヘアアクセ
//! categorize demo
//! categorize export-rules rules.mp
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use product_categorizer::{
    CatalogLoader, CategoryClassifier, CategoryReport, ConfigManager, GlobalConfig, RuleLoader,
    reference_fixture,
};
use product_categorizer::config::DEFAULT_PREVIEW_LIMIT;

/// 基于关键词优先级匹配的商品分类工具
#[derive(Parser)]
#[command(name = "categorize", version, about)]
struct Cli {
    /// 规则文件（.json 或 .mp），不指定时使用内置参考规则
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    /// 覆盖兜底分类名
    #[arg(long, global = true)]
    fallback: Option<String>,

    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 判定一个或多个商品名的分类
    Classify {
        /// 商品名
        #[arg(required = true)]
        names: Vec<String>,

        /// 同时输出命中的关键词
        #[arg(long)]
        explain: bool,
    },

    /// 分析商品 JSON 文件并按分类汇总
    Analyze {
        /// 商品 JSON 文件（productNumber / productName 数组）
        input: PathBuf,

        /// 保存带 category 字段的商品数据
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 每个分类展示的条数
        #[arg(long, default_value_t = DEFAULT_PREVIEW_LIMIT, conflicts_with = "all")]
        limit: usize,

        /// 展示全部条目
        #[arg(long)]
        all: bool,
    },

    /// 列出已知分类
    Categories {
        /// 额外登记的分类
        #[arg(long = "add")]
        add: Vec<String>,
    },

    /// 使用内置参考商品演示分类结果
    Demo,

    /// 导出当前规则库（扩展名决定格式）
    ExportRules {
        output: PathBuf,
    },
}

impl Cli {
    fn config(&self) -> GlobalConfig {
        let mut builder = ConfigManager::custom().verbose(self.verbose);
        if let Some(path) = &self.rules {
            builder = builder.rules_path(path.clone());
        }
        if let Some(fallback) = &self.fallback {
            builder = builder.fallback_category(fallback.clone());
        }
        if let Commands::Analyze { limit, all, .. } = &self.command {
            builder = builder.preview_limit(if *all { None } else { Some(*limit) });
        }
        builder.build()
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_logging(config.verbose);

    let classifier = CategoryClassifier::new(config.clone())
        .await
        .context("分类器初始化失败")?;

    match cli.command {
        Commands::Classify { names, explain } => {
            for name in &names {
                if !explain {
                    println!("{}\t{}", classifier.classify(name), name);
                    continue;
                }
                match classifier.explain(name) {
                    Some(hit) => println!("{}\t{}\t({})", hit.category, name, hit.keyword),
                    None => println!("{}\t{}\t(未命中)", classifier.fallback(), name),
                }
            }
        }
        Commands::Analyze { input, output, .. } => {
            let products = CatalogLoader::load_products(&input)
                .await
                .with_context(|| format!("读取商品文件失败：{}", input.display()))?;
            println!("读取商品 {} 件\n", products.len());

            let category_map = classifier.analyze(&products);
            print!("{}", CategoryReport::new(&category_map, config.preview_limit));

            if let Some(output) = output {
                let saved = CatalogLoader::save_categorized(&products, &classifier, &output)
                    .await
                    .with_context(|| format!("保存分类结果失败：{}", output.display()))?;
                println!("\n✅ 已保存 {} 件：{}", saved, output.display());
            }
        }
        Commands::Categories { add } => {
            for category in &add {
                classifier.add_category(category);
            }
            for category in classifier.get_categories() {
                println!("  • {}", category);
            }
        }
        Commands::Demo => {
            let products = reference_fixture();
            for product in &products {
                let name = product.product_name();
                println!("{}: {}", product.product_number(), name);
                println!("  → {}", classifier.classify(&name));
            }
            println!();
            print!("{}", CategoryReport::new(&classifier.analyze(&products), None));
        }
        Commands::ExportRules { output } => {
            RuleLoader::save(&output, &classifier.rules().to_library())
                .await
                .with_context(|| format!("导出规则失败：{}", output.display()))?;
            println!("✅ 规则已导出：{}", output.display());
        }
    }

    Ok(())
}
