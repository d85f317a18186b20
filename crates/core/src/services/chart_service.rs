use std::collections::HashMap;

use chrono::{DateTime, Datelike, Days, TimeZone, Utc};
use rust_decimal::Decimal;
use tracing::{debug, trace};

use crate::models::amount::{accumulate, fee_for, round2, to_number};
use crate::models::chart::{Bucket, BucketKey, PeriodSeries};
use crate::models::period::Period;
use crate::models::transaction::TransactionEvent;

/// Generates chart-ready series from a flat transaction list.
///
/// Pure business logic: no I/O, no clock reads. The reference instant is
/// always passed in, and its timezone is the "local clock" used to decide
/// which calendar day or month a transaction belongs to.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Bucket `events` into the fixed-length series for `period`, oldest first.
    ///
    /// 1. Build the zero-valued skeleton anchored at `now`
    /// 2. Window each event (whole days or months back from `now`)
    /// 3. Add its secondary amount to the matching bucket, count it
    /// 4. Round revenue to 2 dp and derive fees as 1% of the rounded revenue
    ///
    /// Events without a usable timestamp, outside the window, or whose
    /// calendar key has no skeleton bucket are skipped.
    pub fn build_series<Tz: TimeZone>(
        &self,
        events: &[TransactionEvent],
        period: Period,
        now: &DateTime<Tz>,
    ) -> Vec<Bucket> {
        let keys = skeleton_keys(period, now);
        let index: HashMap<BucketKey, usize> =
            keys.iter().enumerate().map(|(i, key)| (*key, i)).collect();
        let mut totals = vec![(Decimal::ZERO, 0_u64); keys.len()];
        let mut matched = 0_usize;

        for event in events {
            let Some(at) = event.occurred_at() else {
                trace!(hash = ?event.hash, "skipping transaction without a usable timestamp");
                continue;
            };
            let Some(key) = windowed_key(period, now, at) else {
                trace!(hash = ?event.hash, %at, %period, "transaction outside the window");
                continue;
            };
            let Some(&slot) = index.get(&key) else {
                trace!(hash = ?event.hash, ?key, %period, "no bucket for transaction key");
                continue;
            };

            let (revenue, count) = &mut totals[slot];
            *revenue = accumulate(*revenue, event.secondary_amount());
            *count += 1;
            matched += 1;
        }

        debug!(%period, matched, total = events.len(), "built chart series");

        keys.into_iter()
            .zip(totals)
            .map(|(key, (revenue, count))| {
                let revenue = round2(revenue);
                Bucket {
                    transaction_count: count,
                    revenue: to_number(revenue),
                    fees: to_number(fee_for(revenue)),
                    ..Bucket::empty(key)
                }
            })
            .collect()
    }

    /// The placeholder series for `period`: right shape, all zeros.
    pub fn empty_series<Tz: TimeZone>(&self, period: Period, now: &DateTime<Tz>) -> Vec<Bucket> {
        skeleton_keys(period, now)
            .into_iter()
            .map(Bucket::empty)
            .collect()
    }

    /// All three series for the same `now`.
    pub fn build_all<Tz: TimeZone>(
        &self,
        events: &[TransactionEvent],
        now: &DateTime<Tz>,
    ) -> PeriodSeries {
        PeriodSeries {
            week: self.build_series(events, Period::Week, now),
            month: self.build_series(events, Period::Month, now),
            year: self.build_series(events, Period::Year, now),
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for [`ChartService::build_series`].
pub fn build_series<Tz: TimeZone>(
    events: &[TransactionEvent],
    period: Period,
    now: &DateTime<Tz>,
) -> Vec<Bucket> {
    ChartService::new().build_series(events, period, now)
}

/// Ordered bucket keys for `period`, oldest first, ending at `now`'s day or month.
fn skeleton_keys<Tz: TimeZone>(period: Period, now: &DateTime<Tz>) -> Vec<BucketKey> {
    let today = now.date_naive();
    let count = period.bucket_count() as u32;

    if period.is_daily() {
        (0..count)
            .rev()
            .filter_map(|offset| today.checked_sub_days(Days::new(u64::from(offset))))
            .map(BucketKey::Day)
            .collect()
    } else {
        (0..count)
            .rev()
            .map(|offset| months_back(today.year(), today.month(), offset))
            .collect()
    }
}

fn months_back(year: i32, month: u32, offset: u32) -> BucketKey {
    let index = year * 12 + month as i32 - 1 - offset as i32;
    BucketKey::Month {
        year: index.div_euclid(12),
        month: index.rem_euclid(12) as u32 + 1,
    }
}

/// The key an event at `at` falls under, if it is inside `period`'s window.
///
/// Daily windows count local calendar days between `at` and `now`, so the
/// day difference and the bucket date always agree.
fn windowed_key<Tz: TimeZone>(
    period: Period,
    now: &DateTime<Tz>,
    at: DateTime<Utc>,
) -> Option<BucketKey> {
    let window = period.bucket_count() as i64;
    let local = at.with_timezone(&now.timezone());

    if period.is_daily() {
        let date = local.date_naive();
        let day_diff = now.date_naive().signed_duration_since(date).num_days();
        (0..window)
            .contains(&day_diff)
            .then_some(BucketKey::Day(date))
    } else {
        let month_diff = (now.year() - local.year()) as i64 * 12
            + (now.month() as i64 - local.month() as i64);
        (0..window).contains(&month_diff).then(|| BucketKey::Month {
            year: local.year(),
            month: local.month(),
        })
    }
}
