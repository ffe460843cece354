use cfn_datadog::{CloudFormationEvent, Config, Router};
use dotenvy::dotenv;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use std::env;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load environment variables
    dotenv().ok();

    // RUST_LOG wins, otherwise LOG_LEVEL (default "info")
    let level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // Credentials are read once per cold start
    let config = Config::from_env()?;
    let router = Arc::new(Router::new(&config)?);

    run(service_fn(move |event: LambdaEvent<CloudFormationEvent>| {
        let router = router.clone();
        async move {
            router.handle(event.payload).await?;
            Ok::<(), Error>(())
        }
    }))
    .await
}
