use clap::Parser;
use showtext::adapters::build_client;
use showtext::core::ConfigProvider;
use showtext::utils::{logger, validation::Validate};
use showtext::{
    CliConfig, Credentials, Engine, PublishTarget, ShowtextError, ShowtextPipeline, SpotifyCatalog,
    TwilioNotifier, VenuePage,
};

fn fail(e: ShowtextError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, exit code {})",
        e,
        e.category(),
        e.exit_code()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("   {}", e);
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

async fn run(config: CliConfig) -> Result<(), ShowtextError> {
    config.validate()?;

    let credentials = Credentials::from_file(&config.credentials)?;
    credentials.validate()?;
    tracing::info!("✅ Credentials loaded from {}", config.credentials.display());

    let client = build_client(config.request_timeout())?;
    let source = VenuePage::new(client.clone(), config.schedule_url());
    let catalog = SpotifyCatalog::new(
        client.clone(),
        config.catalog_base_url(),
        config.catalog_token.clone(),
        config.market(),
    );
    let notifier = TwilioNotifier::new(client, config.sms_base_url(), credentials);
    let target = PublishTarget::from_config(&config);

    let engine = Engine::new(ShowtextPipeline::new(source, catalog, notifier, target));

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be published or sent");
        let message = engine.dry_run().await?;
        println!("{}", message);
        return Ok(());
    }

    let delivery = engine.run().await?;
    tracing::info!(
        "✅ Sent {} tracks via playlist {} (sms {})",
        delivery.track_count,
        delivery.playlist.id,
        delivery.receipt.sid
    );
    println!("TEXT SENT");
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting showtext");
    tracing::debug!(
        "Schedule: {}, catalog: {}, sms: {}, playlist: {:?}",
        config.schedule_url(),
        config.catalog_base_url(),
        config.sms_base_url(),
        config.playlist_id()
    );

    if let Err(e) = run(config).await {
        fail(e);
    }
}
