use anyhow::Context;
use clap::Parser;
use privacy_fixtures::config::LogFormat;
use privacy_fixtures::core::Pipeline;
use privacy_fixtures::utils::{error::ErrorCategory, logger};
use privacy_fixtures::{CliConfig, FixtureEngine, LocalStorage, ScenarioPipeline};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    match args.log_format {
        LogFormat::Compact => logger::init_cli_logger(args.verbose),
        LogFormat::Json => logger::init_json_logger(args.verbose),
    }

    tracing::info!("Starting privacy-fixtures");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // 載入並驗證配置
    let config = match args.load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let storage = LocalStorage::new(config.generator.output_path.clone());
    let output_path = config.generator.output_path.clone();
    let pipeline = ScenarioPipeline::new(storage, config);

    if args.list {
        for name in pipeline.plan().context("cannot list scenarios")? {
            println!("{}", name);
        }
        return Ok(());
    }

    let engine = FixtureEngine::new(pipeline).with_dry_run(args.dry_run);
    let report = match engine.run() {
        Ok(report) => report,
        Err(e) if e.category() == ErrorCategory::Configuration => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e).context("fixture generation aborted"),
    };

    for path in &report.written {
        println!("📁 {}", path);
    }

    if !report.is_success() {
        for e in &report.failed {
            eprintln!("❌ {}", e);
        }
        eprintln!(
            "{} scenario(s) generated, {} failed",
            report.generated.len(),
            report.failed.len()
        );
        std::process::exit(2);
    }

    tracing::info!(
        "✅ {} scenario(s) generated under {}",
        report.generated.len(),
        output_path
    );
    Ok(())
}
