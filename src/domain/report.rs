use serde::Serialize;

/// Inclusive date range applied to appointments and bills.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportRange {
    pub start: String,
    pub end: String,
}

impl ReportRange {
    /// Only a range with both bounds present constrains anything.
    pub fn new(start: Option<String>, end: Option<String>) -> Option<Self> {
        match (start, end) {
            (Some(start), Some(end)) if !start.is_empty() && !end.is_empty() => {
                Some(Self { start, end })
            }
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PatientTotals {
    pub total: usize,
    pub active: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AppointmentTotals {
    pub total: usize,
    /// Appointments in the `Confirmed` state.
    pub completed: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingTotals {
    pub total_bills: usize,
    pub paid_bills: usize,
    pub total_revenue: f64,
    pub pending_revenue: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SummaryReport {
    pub patients: PatientTotals,
    pub appointments: AppointmentTotals,
    pub billing: BillingTotals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_requires_both_bounds() {
        assert!(ReportRange::new(Some("2024-01-01".into()), None).is_none());
        assert!(ReportRange::new(Some("".into()), Some("2024-12-31".into())).is_none());
        assert_eq!(
            ReportRange::new(Some("2024-01-01".into()), Some("2024-12-31".into())),
            Some(ReportRange {
                start: "2024-01-01".into(),
                end: "2024-12-31".into()
            })
        );
    }

    #[test]
    fn summary_serializes_in_response_shape() {
        let json = serde_json::to_value(SummaryReport::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "patients": {"total": 0, "active": 0},
                "appointments": {"total": 0, "completed": 0},
                "billing": {"totalBills": 0, "paidBills": 0, "totalRevenue": 0.0, "pendingRevenue": 0.0}
            })
        );
    }
}
