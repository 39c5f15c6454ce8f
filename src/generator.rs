// src/generator.rs
use chrono::{DateTime, Local, SubsecRound, TimeDelta};
use rand::Rng;

use crate::models::DeviceSignal;

// 上界均为开区间
const DEVICE_ID_RANGE: std::ops::Range<u32> = 1..100_000;
const SIGNAL_RANGE: std::ops::Range<i32> = 1..100;

/// 按迭代序号生成合成的设备信号行
pub struct RowGenerator<R> {
    rng: R,
    base: DateTime<Local>,
}

impl<R: Rng> RowGenerator<R> {
    pub fn new(rng: R, base: DateTime<Local>) -> Self {
        Self { rng, base }
    }

    pub fn base(&self) -> DateTime<Local> {
        self.base
    }

    /// 第 `index` 行：时间戳为基准时间加 `index` 秒（本地时间，精确到秒）
    pub fn row(&mut self, index: u64) -> DeviceSignal {
        let ts = (self.base + TimeDelta::seconds(index as i64))
            .naive_local()
            .trunc_subsecs(0);
        let device_id = format!("d_{}", self.rng.random_range(DEVICE_ID_RANGE));
        let signal = self.rng.random_range(SIGNAL_RANGE);

        DeviceSignal {
            ts,
            device_id,
            signal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator(seed: u64) -> RowGenerator<StdRng> {
        let base = Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 15).unwrap()
            + TimeDelta::milliseconds(750);
        RowGenerator::new(StdRng::seed_from_u64(seed), base)
    }

    #[test]
    fn device_id_and_signal_stay_in_range() {
        let mut rows_gen = generator(7);
        for i in 0..5_000 {
            let row = rows_gen.row(i);
            let digits = row.device_id.strip_prefix("d_").unwrap();
            assert!(digits.chars().all(|c| c.is_ascii_digit()), "{}", row.device_id);
            let n: u32 = digits.parse().unwrap();
            assert!((1..=99_999).contains(&n), "device id out of range: {}", n);
            assert!((1..=99).contains(&row.signal), "signal out of range: {}", row.signal);
        }
    }

    #[test]
    fn first_row_uses_base_time_truncated_to_seconds() {
        let mut rows_gen = generator(1);
        let row = rows_gen.row(0);
        assert_eq!(row.ts.nanosecond(), 0);
        assert_eq!(row.ts.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-01 12:30:15");
    }

    #[test]
    fn timestamp_advances_one_second_per_index() {
        let mut rows_gen = generator(1);
        let first = rows_gen.row(0).ts;
        let later = rows_gen.row(59).ts;
        assert_eq!(later - first, TimeDelta::seconds(59));
        assert_eq!(later.format("%H:%M:%S").to_string(), "12:31:14");
    }

    #[test]
    fn same_seed_gives_same_rows() {
        let mut a = generator(42);
        let mut b = generator(42);
        for i in 0..10 {
            assert_eq!(a.row(i), b.row(i));
        }
    }
}
