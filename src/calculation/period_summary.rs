//! Period summary orchestration.
//!
//! This module ties the calendar, the record filter, the metrics aggregator
//! and the premium calculator together for one period selection and records
//! each stage in an audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::config::{PeriodCalendar, PremiumRules};
use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, DateRange, EditDraft, MetricsResult, PeriodDefinition,
    PeriodReport, WorkRecord,
};

use super::metrics::aggregate;
use super::premium::calculate_premiums_with_rules;
use super::record_filter::filter_records;
use super::record_merge::merge_records;

/// Computes the report for a period over a stored record collection.
///
/// 1. Looks up the period (fails with `InvalidPeriod` outside 1-12)
/// 2. Filters `records` to the primary range and aggregates them
/// 3. If the period has a premium range, filters the *full* `records` to it
///    and prices premiums against the primary range's pay-per-hour
///
/// # Example
///
/// ```
/// use hours_analyzer::calculation::summarize_period;
/// use hours_analyzer::config::{PeriodCalendar, PremiumRules};
/// use hours_analyzer::models::WorkRecord;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let calendar = PeriodCalendar::builtin();
/// let records = vec![
///     WorkRecord::new(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(), Decimal::from(8), Decimal::from(80)),
///     WorkRecord::new(NaiveDate::from_ymd_opt(2025, 4, 14).unwrap(), Decimal::from(12), Decimal::from(120)),
/// ];
///
/// let report = summarize_period(&calendar, &PremiumRules::default(), 5, &records, Decimal::from(5)).unwrap();
/// assert_eq!(report.metrics.total_hours, Decimal::from(8));
/// assert_eq!(report.premium.unwrap().per_record.len(), 1);
/// ```
pub fn summarize_period(
    calendar: &PeriodCalendar,
    rules: &PremiumRules,
    period_id: u32,
    records: &[WorkRecord],
    base_hourly_rate: Decimal,
) -> EngineResult<PeriodReport> {
    let started = Instant::now();
    let period = calendar.period(period_id)?;
    let mut trace = TraceBuilder::new();

    trace.push_period_lookup(period);

    let primary_records = filter_records(records, period.primary_range);
    trace.push_filter(
        "record_filter",
        "Primary Range Filter",
        period.primary_range,
        records.len(),
        primary_records.len(),
    );

    Ok(build_report(
        period,
        rules,
        &primary_records,
        records,
        base_hourly_rate,
        trace,
        started,
    ))
}

/// Computes the report for a period from an unsaved edit draft.
///
/// Metrics come from the draft's records exactly as edited, including any
/// record the user moved outside the primary range. Premiums are computed over
/// the collection as it would look once the draft is saved, i.e.
/// `merge_records(records, primary_range, draft.records)`.
pub fn summarize_draft(
    calendar: &PeriodCalendar,
    rules: &PremiumRules,
    draft: &EditDraft,
    records: &[WorkRecord],
    base_hourly_rate: Decimal,
) -> EngineResult<PeriodReport> {
    let started = Instant::now();
    let period = calendar.period(draft.period_id)?;
    let mut trace = TraceBuilder::new();

    trace.push_period_lookup(period);
    trace.push(
        "draft_records",
        "Unsaved Draft",
        serde_json::json!({
            "stored_record_count": records.len(),
            "draft_record_count": draft.records.len()
        }),
        serde_json::json!({ "selected_count": draft.records.len() }),
        format!(
            "Using {} edited records in place of the stored primary range",
            draft.records.len()
        ),
    );

    let as_saved = merge_records(records, period.primary_range, &draft.records);

    Ok(build_report(
        period,
        rules,
        &draft.records,
        &as_saved,
        base_hourly_rate,
        trace,
        started,
    ))
}

fn build_report(
    period: &PeriodDefinition,
    rules: &PremiumRules,
    primary_records: &[WorkRecord],
    premium_source: &[WorkRecord],
    base_hourly_rate: Decimal,
    mut trace: TraceBuilder,
    started: Instant,
) -> PeriodReport {
    if period.primary_range.is_inverted() {
        trace.warn(
            "INVERTED_PERIOD_RANGE",
            format!(
                "Period {} starts on {} after it ends on {}; no stored record can fall inside it",
                period.id, period.primary_range.start, period.primary_range.end
            ),
            "low",
        );
    }

    let metrics = aggregate(primary_records);
    trace.push_metrics(primary_records.len(), &metrics);
    trace.warn_overflow("Metrics", &metrics.overflowed);

    let premium = period.premium_range.map(|premium_range| {
        let premium_records = filter_records(premium_source, premium_range);
        trace.push_filter(
            "premium_filter",
            "Premium Range Filter",
            premium_range,
            premium_source.len(),
            premium_records.len(),
        );

        if metrics.pay_per_hour.is_zero() && !premium_records.is_empty() {
            trace.warn(
                "ZERO_PAY_PER_HOUR",
                "Pay-per-hour for the period is zero; overtime premiums are zero".to_string(),
                "medium",
            );
        }

        let result = calculate_premiums_with_rules(
            &premium_records,
            premium_range,
            metrics.pay_per_hour,
            base_hourly_rate,
            rules,
        );
        trace.warn_overflow("Premiums", &result.overflowed);
        trace.push(
            "premium_calculation",
            "Overtime and Night-Shift Premiums",
            serde_json::json!({
                "record_count": premium_records.len(),
                "pay_per_hour": metrics.pay_per_hour.normalize().to_string(),
                "base_hourly_rate": base_hourly_rate.normalize().to_string()
            }),
            serde_json::json!({
                "ns_premium_rate": result.ns_premium_rate.normalize().to_string(),
                "total_ot_premium": result.total_ot_premium.normalize().to_string(),
                "total_ns_premium": result.total_ns_premium.normalize().to_string()
            }),
            format!(
                "{} records priced at {} per hour; night-shift differential {}",
                premium_records.len(),
                metrics.pay_per_hour.normalize(),
                result.ns_premium_rate.normalize()
            ),
        );
        result
    });

    PeriodReport {
        report_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        period: period.clone(),
        base_hourly_rate,
        metrics,
        premium,
        audit_trace: trace.finish(started),
    }
}

/// Accumulates audit steps with sequential step numbers.
struct TraceBuilder {
    steps: Vec<AuditStep>,
    warnings: Vec<AuditWarning>,
}

impl TraceBuilder {
    fn new() -> Self {
        Self {
            steps: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn push(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        input: serde_json::Value,
        output: serde_json::Value,
        reasoning: String,
    ) {
        self.steps.push(AuditStep {
            step_number: self.steps.len() as u32 + 1,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            input,
            output,
            reasoning,
        });
    }

    fn push_period_lookup(&mut self, period: &PeriodDefinition) {
        self.push(
            "period_lookup",
            "Period Lookup",
            serde_json::json!({ "period_id": period.id }),
            serde_json::json!({
                "label": period.label,
                "primary_range": range_json(period.primary_range),
                "premium_range": period.premium_range.map(range_json)
            }),
            match period.premium_range {
                Some(premium) => format!(
                    "Period {} covers {} to {} with premiums over {} to {}",
                    period.id,
                    period.primary_range.start,
                    period.primary_range.end,
                    premium.start,
                    premium.end
                ),
                None => format!(
                    "Period {} covers {} to {} with no premium range",
                    period.id, period.primary_range.start, period.primary_range.end
                ),
            },
        );
    }

    fn push_filter(
        &mut self,
        rule_id: &str,
        rule_name: &str,
        range: DateRange,
        input_count: usize,
        selected_count: usize,
    ) {
        self.push(
            rule_id,
            rule_name,
            serde_json::json!({
                "range": range_json(range),
                "record_count": input_count
            }),
            serde_json::json!({ "selected_count": selected_count }),
            format!(
                "{} of {} records fall between {} and {} inclusive",
                selected_count, input_count, range.start, range.end
            ),
        );
    }

    fn push_metrics(&mut self, record_count: usize, metrics: &MetricsResult) {
        self.push(
            "metrics_aggregation",
            "Metrics Aggregation",
            serde_json::json!({ "record_count": record_count }),
            serde_json::json!({
                "total_hours": metrics.total_hours.normalize().to_string(),
                "total_pay": metrics.total_pay.normalize().to_string(),
                "working_days": metrics.working_days,
                "pay_per_hour": metrics.pay_per_hour.normalize().to_string()
            }),
            if metrics.working_days == 0 {
                "No working days; averages and pay-per-hour are zero".to_string()
            } else {
                format!(
                    "{} hours over {} working days",
                    metrics.total_hours.normalize(),
                    metrics.working_days
                )
            },
        );
    }

    fn warn(&mut self, code: &str, message: String, severity: &str) {
        self.warnings.push(AuditWarning {
            code: code.to_string(),
            message,
            severity: severity.to_string(),
        });
    }

    fn warn_overflow(&mut self, stage: &str, overflowed: &[String]) {
        if overflowed.is_empty() {
            return;
        }
        self.warn(
            "ARITHMETIC_OVERFLOW",
            format!(
                "{} outside the decimal range are reported as zero: {}",
                stage,
                overflowed.join(", ")
            ),
            "high",
        );
    }

    fn finish(self, started: Instant) -> AuditTrace {
        AuditTrace {
            steps: self.steps,
            warnings: self.warnings,
            duration_us: started.elapsed().as_micros() as u64,
        }
    }
}

fn range_json(range: DateRange) -> serde_json::Value {
    serde_json::json!({
        "start": range.start.to_string(),
        "end": range.end.to_string()
    })
}
