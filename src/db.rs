// src/db.rs
use anyhow::{Context, Result};
use sqlx::mysql::MySqlConnection;
use sqlx::Connection;

use crate::config::DbConfig;

/// 建表语句；默认不执行，需 --create-table 显式开启
pub const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS device_signal (
        ts TIMESTAMP,
        device_id VARCHAR(256),
        `signal` INT
    );
"#;

pub async fn open_connection(config: &DbConfig) -> Result<MySqlConnection> {
    let options = config.connect_options()?;

    // 单连接，按顺序执行
    let conn = MySqlConnection::connect_with(&options)
        .await
        .with_context(|| format!("连接数据库 {} 失败", config.target()))?;
    log::info!("已连接到数据库 {}", config.target());

    Ok(conn)
}

pub async fn create_table(conn: &mut MySqlConnection) -> Result<()> {
    sqlx::query(CREATE_TABLE_SQL)
        .execute(&mut *conn)
        .await
        .context("创建 device_signal 表失败")?;
    log::info!("device_signal 表已就绪");
    Ok(())
}

pub async fn close_connection(conn: MySqlConnection) {
    match conn.close().await {
        Ok(()) => log::info!("数据库连接已关闭"),
        Err(e) => log::warn!("关闭数据库连接时出错: {}", e),
    }
}
