//! Period report models.
//!
//! This module contains the [`PeriodReport`] type that captures everything
//! computed for one period selection: the period definition, the metrics over
//! its primary range, the premiums over its premium range and an audit trace
//! of the steps taken.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MetricsResult, PeriodDefinition, PremiumResult};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for one stage of the
/// period computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings never stop a calculation; they flag data a reader should look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a period computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// Everything computed for one period selection.
///
/// `premium` is present only when the period defines a premium range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was computed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The selected period.
    pub period: PeriodDefinition,
    /// The base hourly rate used for the night-shift differential.
    pub base_hourly_rate: Decimal,
    /// Metrics over the primary range.
    pub metrics: MetricsResult,
    /// Premiums over the premium range, if the period has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium: Option<PremiumResult>,
    /// Audit trace of the computation.
    pub audit_trace: AuditTrace,
}

impl PeriodReport {
    /// Renders the report as plain text with two decimal places.
    ///
    /// # Example
    ///
    /// ```
    /// use hours_analyzer::calculation::summarize_period;
    /// use hours_analyzer::config::{PeriodCalendar, PremiumRules};
    /// use rust_decimal::Decimal;
    ///
    /// let calendar = PeriodCalendar::builtin();
    /// let report = summarize_period(&calendar, &PremiumRules::default(), 2, &[], Decimal::ZERO).unwrap();
    /// let text = report.render_text();
    /// assert!(text.contains("Total Hours: 0.00"));
    /// assert!(text.contains("Working Days: 0"));
    /// ```
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let metrics = &self.metrics;

        let _ = writeln!(out, "{}", self.period.label);
        let _ = writeln!(
            out,
            "{} to {}",
            self.period.primary_range.start, self.period.primary_range.end
        );
        let _ = writeln!(out, "Total Hours: {:.2}", two_dp(metrics.total_hours));
        let _ = writeln!(out, "Working Days: {}", metrics.working_days);
        let _ = writeln!(out, "Total Pay: {:.2}", two_dp(metrics.total_pay));
        let _ = writeln!(out, "Avg Hours/Day: {:.2}", two_dp(metrics.avg_hours_per_day));
        let _ = writeln!(out, "Avg Pay/Day: {:.2}", two_dp(metrics.avg_pay_per_day));
        let _ = writeln!(out, "Pay Rate per Hour: {:.2}", two_dp(metrics.pay_per_hour));

        if let Some(premium) = &self.premium {
            let _ = writeln!(
                out,
                "Premium window: {} to {}",
                premium.premium_range.start, premium.premium_range.end
            );
            for line in &premium.per_record {
                let _ = writeln!(
                    out,
                    "  {}  {:>6.2}h  OT {:>5.2}h {:>9.2}  NS {:>5.2}h {:>9.2}",
                    line.date,
                    two_dp(line.hours),
                    two_dp(line.ot_hours),
                    two_dp(line.ot_premium),
                    two_dp(line.ns_hours),
                    two_dp(line.ns_premium)
                );
            }
            let _ = writeln!(out, "Total OT Premium: {:.2}", two_dp(premium.total_ot_premium));
            let _ = writeln!(out, "Total NS Premium: {:.2}", two_dp(premium.total_ns_premium));
        }

        for warning in &self.audit_trace.warnings {
            let _ = writeln!(out, "warning [{}]: {}", warning.code, warning.message);
        }

        out
    }
}

fn two_dp(value: Decimal) -> Decimal {
    value.round_dp(2)
}
