// src/main.rs
mod config;
mod db;
mod generator;
mod models;
mod statement;

use anyhow::Result;
use chrono::Local;

use crate::config::Settings;
use crate::generator::RowGenerator;
use crate::statement::{write_signals, NoopExecutor};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let settings = Settings::load();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut generator = RowGenerator::new(rand::rng(), Local::now());
    log::debug!("基准时间: {}", generator.base());
    let mut out = std::io::stdout().lock();

    if settings.dry_run {
        let written = write_signals(&mut NoopExecutor, &mut generator, &mut out, settings.rows).await?;
        log::info!("dry-run 完成，共生成 {} 条语句", written);
        return Ok(());
    }

    let mut conn = db::open_connection(&settings.db).await?;

    // 无论成功与否都先关闭连接，再上抛错误
    let outcome = async {
        if settings.create_table {
            db::create_table(&mut conn).await?;
        }
        write_signals(&mut conn, &mut generator, &mut out, settings.rows).await
    }
    .await;
    db::close_connection(conn).await;

    let written = outcome?;
    log::info!("共写入 {} 行到 device_signal", written);

    Ok(())
}
