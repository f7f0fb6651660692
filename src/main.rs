use clap::Parser;
use photo_museum::core::{AssetExistenceProbe, AssetFetcher};
use photo_museum::utils::{logger, validation::Validate};
use photo_museum::{
    CliConfig, HttpAssets, JsonFileRenderer, LocalAssets, MuseumConfig, MuseumEngine,
    MuseumError, MuseumState, PhotoResolver,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting photo-museum");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        fail(&e);
    }

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            match MuseumConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => fail(&e),
            }
        }
        None => MuseumConfig::builtin(),
    };

    if let Some(layout) = &cli.layout {
        for theme in &mut config.themes {
            theme.layout = layout.clone();
        }
        tracing::info!("🔧 Layout overridden to: {}", layout);
    }

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let result = match cli.base_url.as_deref().or(config.base_url()) {
        Some(base_url) => {
            let options = config.resolver_options()?;
            let assets = HttpAssets::new(Some(base_url), options.probe_timeout)?;
            tracing::info!("🌐 Resolving assets from {}", base_url);
            run(assets, &config, &cli).await
        }
        None => {
            tracing::info!("📂 Resolving assets under {}", cli.root);
            run(LocalAssets::new(&cli.root), &config, &cli).await
        }
    };

    match result {
        Ok(location) => {
            tracing::info!("✅ Exhibit written to {}", location);
            Ok(())
        }
        Err(e) => fail(&e),
    }
}

async fn run<A>(assets: A, config: &MuseumConfig, cli: &CliConfig) -> photo_museum::Result<String>
where
    A: AssetExistenceProbe + AssetFetcher + Clone,
{
    let resolver = PhotoResolver::new(assets.clone(), assets)
        .with_options(config.resolver_options()?)
        .with_demo_catalog(config.demo_catalog()?);
    let engine = MuseumEngine::new(resolver).with_preload(cli.preload);

    let state = MuseumState::new(config.theme_descriptors()?);
    let index = match &cli.theme {
        Some(id) => state.index_of(id).ok_or_else(|| MuseumError::ConfigError {
            message: format!("Unknown theme '{}'", id),
        })?,
        None => 0,
    };

    let renderer = JsonFileRenderer::new(&cli.output);
    let (_, location) = engine.present(&state, index, &renderer).await?;
    Ok(location)
}

fn fail(e: &MuseumError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
