// ═══════════════════════════════════════════════════════════════════
// Model Tests: transactions, amounts, periods, buckets, settings
// ═══════════════════════════════════════════════════════════════════

use std::str::FromStr;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use tx_dashboard_core::errors::CoreError;
use tx_dashboard_core::models::amount::{
    accumulate, fee_for, parse_amount, round2, to_number, FEE_RATE,
};
use tx_dashboard_core::models::chart::{Bucket, BucketKey, PeriodSeries};
use tx_dashboard_core::models::period::Period;
use tx_dashboard_core::models::settings::DashboardSettings;
use tx_dashboard_core::models::transaction::{LooseNumber, TransactionEvent, TxStatus};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ── Amounts ─────────────────────────────────────────────────────────

mod amount {
    use super::*;

    #[test]
    fn accumulate_adds_in_range() {
        assert_eq!(accumulate(dec("10.005"), dec("5.00")), dec("15.005"));
    }

    #[test]
    fn accumulate_keeps_total_on_overflow() {
        assert_eq!(accumulate(Decimal::MAX, Decimal::ONE), Decimal::MAX);
        assert_eq!(accumulate(Decimal::MIN, Decimal::NEGATIVE_ONE), Decimal::MIN);
    }

    #[test]
    fn fee_rate_is_one_percent() {
        assert_eq!(FEE_RATE, dec("0.01"));
    }

    #[test]
    fn parses_plain_and_padded() {
        assert_eq!(parse_amount(Some("10.005")), dec("10.005"));
        assert_eq!(parse_amount(Some(" 2.5 ")), dec("2.5"));
        assert_eq!(parse_amount(Some("-3")), dec("-3"));
    }

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(parse_amount(Some("1e3")), Decimal::from(1000));
        assert_eq!(parse_amount(Some("2.5e-2")), dec("0.025"));
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(parse_amount(None), Decimal::ZERO);
        assert_eq!(parse_amount(Some("")), Decimal::ZERO);
        assert_eq!(parse_amount(Some("   ")), Decimal::ZERO);
        assert_eq!(parse_amount(Some("abc")), Decimal::ZERO);
        assert_eq!(parse_amount(Some("NaN")), Decimal::ZERO);
        assert_eq!(parse_amount(Some("inf")), Decimal::ZERO);
    }

    #[test]
    fn rounds_midpoint_away_from_zero() {
        assert_eq!(round2(dec("15.005")), dec("15.01"));
        assert_eq!(round2(dec("0.505")), dec("0.51"));
        assert_eq!(round2(dec("-0.505")), dec("-0.51"));
        assert_eq!(round2(dec("1.2345")), dec("1.23"));
    }

    #[test]
    fn fee_is_rounded_independently() {
        assert_eq!(fee_for(dec("15.01")), dec("0.15"));
        assert_eq!(fee_for(dec("50.50")), dec("0.51"));
        assert_eq!(fee_for(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn to_number_gives_nearest_float() {
        assert_eq!(to_number(dec("15.01")), 15.01);
        assert_eq!(to_number(dec("0.10")), 0.1);
        assert_eq!(to_number(Decimal::ZERO), 0.0);
    }
}

// ── Transactions ────────────────────────────────────────────────────

mod transaction {
    use super::*;

    #[test]
    fn deserializes_upstream_shape() {
        let json = r#"{
            "hash": "0xabc",
            "timestamp": 1710504000,
            "amountSC": "10.50",
            "amountBC": "0.004",
            "status": "success",
            "from": "0x1",
            "to": "0x2"
        }"#;
        let event: TransactionEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.hash.as_deref(), Some("0xabc"));
        assert_eq!(event.secondary_amount(), dec("10.50"));
        assert_eq!(event.base_amount(), dec("0.004"));
        assert_eq!(event.status(), TxStatus::Success);
        assert_eq!(
            event.occurred_at(),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn empty_object_is_a_valid_record() {
        let event: TransactionEvent = serde_json::from_str("{}").unwrap();
        assert_eq!(event, TransactionEvent::default());
        assert_eq!(event.occurred_at(), None);
        assert_eq!(event.secondary_amount(), Decimal::ZERO);
        assert_eq!(event.status(), TxStatus::Unknown);
    }

    #[test]
    fn string_timestamp_is_numeric() {
        let event = TransactionEvent::new(" 1710504000 ", "1");
        assert_eq!(
            event.occurred_at(),
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn fractional_timestamp_keeps_subseconds() {
        let event = TransactionEvent::new(1710504000.5, "1");
        let at = event.occurred_at().unwrap();
        assert_eq!(at.timestamp(), 1710504000);
        assert_eq!(at.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn unusable_timestamps() {
        assert_eq!(TransactionEvent::new("soon", "1").occurred_at(), None);
        assert_eq!(TransactionEvent::new("", "1").occurred_at(), None);
        assert_eq!(TransactionEvent::new(f64::INFINITY, "1").occurred_at(), None);
        assert_eq!(TransactionEvent::new(1e300, "1").occurred_at(), None);
    }

    #[test]
    fn numeric_amount_uses_exact_text() {
        let event: TransactionEvent =
            serde_json::from_str(r#"{"amountSC": 10.005, "amountBC": 3}"#).unwrap();
        assert_eq!(event.secondary_amount(), dec("10.005"));
        assert_eq!(event.base_amount(), Decimal::from(3));
    }

    #[test]
    fn serializes_back_with_upstream_names() {
        let event = TransactionEvent::new(1710504000_i64, "2.5").with_status("pending");
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["amountSC"], "2.5");
        assert_eq!(value["timestamp"], 1710504000);
        assert_eq!(value["status"], "pending");
        assert!(value.get("amountBC").is_none());
        assert!(value.get("hash").is_none());
    }

    #[test]
    fn loose_number_conversions() {
        assert_eq!(LooseNumber::from("7.5").as_f64(), Some(7.5));
        assert_eq!(LooseNumber::from(7_i64).as_text(), "7");
        assert_eq!(LooseNumber::from(0.25).as_f64(), Some(0.25));
        assert_eq!(LooseNumber::from("x").as_f64(), None);
    }

    #[test]
    fn status_aliases() {
        for raw in ["success", "SUCCESSFUL", "Confirmed", "completed"] {
            assert_eq!(TxStatus::parse(Some(raw)), TxStatus::Success, "{raw}");
        }
        for raw in ["failed", "Failure", "error", "reverted"] {
            assert_eq!(TxStatus::parse(Some(raw)), TxStatus::Failed, "{raw}");
        }
        for raw in ["pending", "processing", " submitted "] {
            assert_eq!(TxStatus::parse(Some(raw)), TxStatus::Pending, "{raw}");
        }
        assert_eq!(TxStatus::parse(Some("dropped")), TxStatus::Unknown);
        assert_eq!(TxStatus::parse(None), TxStatus::Unknown);
    }

    #[test]
    fn status_display() {
        assert_eq!(TxStatus::Success.to_string(), "Success");
        assert_eq!(TxStatus::Failed.to_string(), "Failed");
        assert_eq!(TxStatus::Pending.to_string(), "Pending");
        assert_eq!(TxStatus::Unknown.to_string(), "Unknown");
    }
}

// ── Periods ─────────────────────────────────────────────────────────

mod period {
    use super::*;

    #[test]
    fn bucket_counts() {
        assert_eq!(Period::Week.bucket_count(), 7);
        assert_eq!(Period::Month.bucket_count(), 30);
        assert_eq!(Period::Year.bucket_count(), 12);
    }

    #[test]
    fn daily_flag() {
        assert!(Period::Week.is_daily());
        assert!(Period::Month.is_daily());
        assert!(!Period::Year.is_daily());
    }

    #[test]
    fn default_is_week() {
        assert_eq!(Period::default(), Period::Week);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("week".parse::<Period>().unwrap(), Period::Week);
        assert_eq!(" Month ".parse::<Period>().unwrap(), Period::Month);
        assert_eq!("YEAR".parse::<Period>().unwrap(), Period::Year);
    }

    #[test]
    fn unknown_period_is_an_error() {
        let err = "quarter".parse::<Period>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidPeriod(ref s) if s == "quarter"));
    }

    #[test]
    fn serde_and_display_are_lowercase() {
        for period in Period::ALL {
            let json = serde_json::to_string(&period).unwrap();
            assert_eq!(json, format!("\"{period}\""));
            assert_eq!(serde_json::from_str::<Period>(&json).unwrap(), period);
        }
    }
}

// ── Buckets ─────────────────────────────────────────────────────────

mod bucket {
    use super::*;

    #[test]
    fn day_label_is_dd_mm() {
        let key = BucketKey::Day(NaiveDate::from_ymd_opt(2024, 2, 5).unwrap());
        assert_eq!(key.label(), "05/02");
    }

    #[test]
    fn month_label_is_short_name() {
        assert_eq!(BucketKey::Month { year: 2024, month: 1 }.label(), "Jan");
        assert_eq!(BucketKey::Month { year: 2023, month: 9 }.label(), "Sep");
        assert_eq!(BucketKey::Month { year: 2023, month: 12 }.label(), "Dec");
    }

    #[test]
    fn same_month_name_different_year_are_distinct_keys() {
        let a = BucketKey::Month { year: 2023, month: 3 };
        let b = BucketKey::Month { year: 2024, month: 3 };
        assert_eq!(a.label(), b.label());
        assert_ne!(a, b);
    }

    #[test]
    fn empty_bucket() {
        let bucket = Bucket::empty(BucketKey::Month { year: 2024, month: 6 });
        assert_eq!(bucket.label, "Jun");
        assert_eq!(bucket.transaction_count, 0);
        assert!(bucket.is_empty());
    }

    #[test]
    fn key_is_not_serialized() {
        let bucket = Bucket::empty(BucketKey::Month { year: 2024, month: 6 });
        let value = serde_json::to_value(&bucket).unwrap();
        assert!(value.get("key").is_none());
        assert_eq!(value["transactionCount"], 0);
    }

    #[test]
    fn period_series_lookup() {
        let series = PeriodSeries {
            week: vec![Bucket::empty(BucketKey::Month { year: 2024, month: 1 })],
            month: Vec::new(),
            year: vec![
                Bucket::empty(BucketKey::Month { year: 2024, month: 2 }),
                Bucket::empty(BucketKey::Month { year: 2024, month: 3 }),
            ],
        };
        assert_eq!(series.get(Period::Week).len(), 1);
        assert!(series.get(Period::Month).is_empty());
        assert_eq!(series.get(Period::Year)[1].label, "Mar");
    }
}

// ── Settings ────────────────────────────────────────────────────────

mod settings {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let settings = DashboardSettings::default();
        assert_eq!(settings.default_period, Period::Week);
        assert_eq!(settings.currency, "USD");
        assert_eq!(settings.base_currency, "ETH");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings = DashboardSettings::from_json(r#"{"default_period": "year"}"#).unwrap();
        assert_eq!(settings.default_period, Period::Year);
        assert_eq!(settings.currency, "USD");
    }

    #[test]
    fn currency_codes_are_normalized() {
        let settings =
            DashboardSettings::from_json(r#"{"currency": " usdc ", "base_currency": "sol"}"#)
                .unwrap();
        assert_eq!(settings.currency, "USDC");
        assert_eq!(settings.base_currency, "SOL");
    }

    #[test]
    fn invalid_currency_rejected() {
        let err = DashboardSettings::from_json(r#"{"currency": "US-D"}"#).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));

        let err = DashboardSettings::from_json(r#"{"base_currency": ""}"#).unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[test]
    fn invalid_period_rejected() {
        let err = DashboardSettings::from_json(r#"{"default_period": "decade"}"#).unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn json_roundtrip() {
        let settings = DashboardSettings {
            default_period: Period::Month,
            currency: "EUR".into(),
            base_currency: "BTC".into(),
        };
        let json = settings.to_json().unwrap();
        assert_eq!(DashboardSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"default_period": "month", "currency": "gbp"}}"#).unwrap();

        let settings = DashboardSettings::load_from_file(file.path()).unwrap();
        assert_eq!(settings.default_period, Period::Month);
        assert_eq!(settings.currency, "GBP");
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DashboardSettings::load_from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
    }
}
