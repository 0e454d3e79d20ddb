use anyhow::Context;
use folio::domain::config::ApiConfig;
use folio::kernel::config::load_config;
use folio_logger::{FileOutput, LogFormat, Logger};
use folio_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("folio")).context("Critical: Configuration is malformed")?;

    let _log = logger(&cfg).init()?;

    Server::builder().config(cfg).build()?.run().await
}

fn logger(cfg: &ApiConfig) -> folio_logger::LoggerBuilder<folio_logger::WithName> {
    let mut builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .format(if cfg.log.json { LogFormat::Json } else { LogFormat::Compact });

    if let Some(filter) = &cfg.log.filter {
        builder = builder.env_filter(filter);
    }
    if let Some(dir) = &cfg.log.directory {
        builder = builder.file(FileOutput::new(dir));
    }
    builder
}
