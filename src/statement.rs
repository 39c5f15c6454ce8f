// src/statement.rs
use std::io::Write;

use anyhow::{Context, Result};
use rand::Rng;
use sqlx::mysql::MySqlConnection;

use crate::config::NOMINAL_ROWS;
use crate::generator::RowGenerator;
use crate::models::DeviceSignal;

const INSERT_SQL: &str = "INSERT INTO device_signal VALUES (?, ?, ?);";
const TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 执行单行插入的对象；返回受影响行数
pub trait SignalExecutor {
    async fn insert_row(&mut self, row: &DeviceSignal) -> Result<u64, sqlx::Error>;
}

impl SignalExecutor for MySqlConnection {
    async fn insert_row(&mut self, row: &DeviceSignal) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(INSERT_SQL)
            .bind(row.ts)
            .bind(&row.device_id)
            .bind(row.signal)
            .execute(&mut *self)
            .await?;
        Ok(result.rows_affected())
    }
}

/// --dry-run 时使用，不做任何事
pub struct NoopExecutor;

impl SignalExecutor for NoopExecutor {
    async fn insert_row(&mut self, _row: &DeviceSignal) -> Result<u64, sqlx::Error> {
        Ok(0)
    }
}

/// 渲染成可读的 INSERT 文本，仅用于打印；实际执行走参数绑定
pub fn render_insert(row: &DeviceSignal) -> String {
    format!(
        "INSERT INTO device_signal VALUES ('{}', '{}', {});",
        row.ts.format(TS_FORMAT),
        row.device_id.replace('\'', "''"),
        row.signal
    )
}

/// 生成、打印并执行 `rows` 行，返回实际执行的行数。
///
/// 循环名义上限为 [`NOMINAL_ROWS`]，写满 `rows` 行后立即退出；
/// 任一语句失败时立即返回错误。
pub async fn write_signals<E, R, W>(
    executor: &mut E,
    generator: &mut RowGenerator<R>,
    out: &mut W,
    rows: u64,
) -> Result<u64>
where
    E: SignalExecutor,
    R: Rng,
    W: Write,
{
    let mut written = 0;
    if rows == 0 {
        return Ok(written);
    }

    for i in 0..NOMINAL_ROWS {
        let row = generator.row(i);
        let sql = render_insert(&row);
        writeln!(out, "{}", sql)?;

        let affected = executor
            .insert_row(&row)
            .await
            .with_context(|| format!("执行语句失败: {}", sql))?;
        log::debug!("第 {} 行写入完成, 影响 {} 行", i, affected);
        written += 1;

        if written >= rows {
            break;
        }
    }
    Ok(written)
}
