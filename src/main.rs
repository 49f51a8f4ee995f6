use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use translation_demo::{
    availability::RegistryAvailability,
    config::Config,
    demo::TranslationDemo,
    detector::{DominantLanguageDetector, WhatlangDetector},
    i18n::{LanguageRegistry, LanguageTag, TranslationMetrics},
    openai::{OpenAiProvisioner, OpenAiSettings},
    resolver::LanguageResolver,
    session::LanguagePair,
    TranslationError,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when the variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("translation_demo=info".parse()?),
        )
        .init();

    info!("Starting translation demo");

    let config = Config::from_env()?;

    let detector: Arc<dyn DominantLanguageDetector> = Arc::new(WhatlangDetector::new());
    let availability = Arc::new(RegistryAvailability::new(Arc::clone(&detector)));

    let fallback_target = match config.preferred_languages.first() {
        Some(tag) => tag.clone(),
        None => LanguageTag::parse("en-US")?,
    };
    let provisioner = Arc::new(OpenAiProvisioner::new(
        reqwest::Client::new(),
        OpenAiSettings::from(&config),
        fallback_target,
    ));

    let mut demo = TranslationDemo::new(
        config.sample_texts.clone(),
        config.preferred_languages.clone(),
        LanguageResolver::new(detector),
        availability,
        provisioner,
    );
    demo.set_mode(config.translation_mode);
    demo.set_prepare_first(config.prepare_translation);

    // Step 1: Resolve defaults, then apply any explicit picker choice
    demo.load_default_languages().await;
    if config.source_language.is_some() || config.target_language.is_some() {
        let defaults = demo.configuration().clone();
        demo.set_configuration(LanguagePair::new(
            config.source_language.clone().or(defaults.source),
            config.target_language.clone().or(defaults.target),
        ));
    }

    // Step 2: Translate
    info!(
        "Translating {} texts ({} mode) with {}",
        demo.texts().len(),
        demo.mode(),
        demo.configuration()
    );
    demo.translate().await;
    if let Some(pair) = demo.session_pair() {
        info!("Translation session bound to {}", pair);
    }

    // Step 3: Render
    render(&demo);

    let report = TranslationMetrics::global().report();
    info!("Translation metrics: {}", serde_json::to_string(&report)?);

    Ok(())
}

fn render(demo: &TranslationDemo) {
    let registry = LanguageRegistry::get();
    let name = |tag: &Option<LanguageTag>| {
        tag.as_ref()
            .map(|t| registry.display_name(t))
            .unwrap_or_else(|| "Automatic".to_string())
    };
    let configuration = demo.configuration();

    println!(
        "{} → {} ({} mode)",
        name(&configuration.source),
        name(&configuration.target),
        demo.mode()
    );
    println!();

    if let Some(error) = demo.current_error() {
        for text in demo.texts() {
            println!("  {}", text);
        }
        println!();
        println!("Error: {}", error.user_message());
        if *error == TranslationError::UnsupportedLanguagePairing {
            render_languages(registry);
        }
        return;
    }

    for (original, translated) in demo.texts().iter().zip(demo.translations()) {
        println!("  {}", original);
        println!("  → {}", translated);
        println!();
    }
}

fn render_languages(registry: &LanguageRegistry) {
    println!();
    println!("Available languages:");
    for lang in registry.list_all() {
        let state = if lang.installed { "installed" } else { "downloadable" };
        println!(
            "  {:<12} {} [{}]",
            lang.tag.to_string(),
            registry.display_name(&lang.tag),
            state
        );
    }
}
