use crate::data::Plan;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Monthly",
            BillingCycle::Yearly => "Yearly",
        }
    }

    pub fn period(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/year",
        }
    }
}

/// Price in whole dollars. Yearly is twelve months less the discount,
/// rounded down, saturating at `u32::MAX`.
pub fn price_for(plan: &Plan, cycle: BillingCycle, discount_pct: u32) -> u32 {
    match cycle {
        BillingCycle::Monthly => plan.monthly_price,
        BillingCycle::Yearly => {
            let full = u64::from(plan.monthly_price) * 12;
            let discounted = full * u64::from(100u32.saturating_sub(discount_pct)) / 100;
            u32::try_from(discounted).unwrap_or(u32::MAX)
        }
    }
}

pub fn price_label(plan: &Plan, cycle: BillingCycle, discount_pct: u32) -> String {
    format!("${}", price_for(plan, cycle, discount_pct))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(monthly_price: u32) -> Plan {
        Plan {
            id: "x".into(),
            name: "Basic".into(),
            monthly_price,
            features: vec![],
            popular: false,
            description: String::new(),
        }
    }

    #[test]
    fn test_monthly_is_list_price() {
        assert_eq!(price_for(&plan(29), BillingCycle::Monthly, 20), 29);
    }

    #[test]
    fn test_yearly_discount_rounds_down() {
        // 29 * 12 = 348, less 20% = 278.4
        assert_eq!(price_for(&plan(29), BillingCycle::Yearly, 20), 278);
        assert_eq!(price_for(&plan(99), BillingCycle::Yearly, 20), 950);
        assert_eq!(price_label(&plan(59), BillingCycle::Yearly, 20), "$566");
    }

    #[test]
    fn test_discount_over_100_is_free_not_negative() {
        assert_eq!(price_for(&plan(10), BillingCycle::Yearly, 150), 0);
    }

    #[test]
    fn test_yearly_large_price_does_not_overflow() {
        assert_eq!(price_for(&plan(5_000_000), BillingCycle::Yearly, 20), 48_000_000);
        assert_eq!(price_for(&plan(u32::MAX), BillingCycle::Yearly, 0), u32::MAX);
    }
}
