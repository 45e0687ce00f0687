use crate::domain::ports::InsightProvider;
use crate::domain::stats::DashboardStats;
use crate::error::Result;
use async_trait::async_trait;
use tracing::warn;

pub const DEFAULT_QUESTION: &str =
    "How is the gym performing and what do you recommend for pending payments?";
pub const EMPTY_ANSWER_FALLBACK: &str = "No insight could be generated right now.";
pub const UNREACHABLE_FALLBACK: &str = "Could not reach the insights assistant.";

/// The figures sent along with every question.
pub fn insight_context(stats: &DashboardStats) -> String {
    format!(
        "You are an expert gym-management assistant.\n\
         Current figures:\n\
         - Total members: {}\n\
         - Active members: {}\n\
         - Monthly revenue: {} XAF\n\
         - Daily revenue (today): {} XAF\n\
         - Overdue members: {}\n\
         - Expiring within the week: {}\n\
         Answer concisely and always quote amounts in XAF.",
        stats.total_members,
        stats.active_members,
        stats.monthly_revenue,
        stats.daily_revenue,
        stats.pending_payment_members.len(),
        stats.expiring_soon_members.len(),
    )
}

/// Asks `provider` about `stats`. Always yields display text: failures and
/// blank answers become fixed fallback strings.
pub async fn ask(provider: &dyn InsightProvider, stats: &DashboardStats, question: &str) -> String {
    match provider.summarize(stats, question).await {
        Ok(answer) if !answer.trim().is_empty() => answer,
        Ok(_) => EMPTY_ANSWER_FALLBACK.to_string(),
        Err(e) => {
            warn!(error = %e, "Insight provider failed");
            UNREACHABLE_FALLBACK.to_string()
        }
    }
}

/// Offline provider answering from the figures alone.
#[derive(Debug, Default, Clone)]
pub struct CannedInsightProvider;

#[async_trait]
impl InsightProvider for CannedInsightProvider {
    async fn summarize(&self, stats: &DashboardStats, _question: &str) -> Result<String> {
        let overdue = stats.pending_payment_members.len();
        let expiring = stats.expiring_soon_members.len();
        let mut answer = format!(
            "{} of {} members are active; monthly revenue stands at {} XAF.",
            stats.active_members, stats.total_members, stats.monthly_revenue
        );
        if overdue > 0 {
            answer.push_str(&format!(
                " Contact the {} overdue member(s) first.",
                overdue
            ));
        }
        if expiring > 0 {
            answer.push_str(&format!(
                " Send renewal reminders to the {} member(s) expiring this week.",
                expiring
            ));
        }
        if overdue == 0 && expiring == 0 {
            answer.push_str(" Consider promoting quarterly plans to lock in renewals.");
        }
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::Amount;
    use crate::error::GymError;
    use rust_decimal_macros::dec;

    struct Failing;

    #[async_trait]
    impl InsightProvider for Failing {
        async fn summarize(&self, _stats: &DashboardStats, _question: &str) -> Result<String> {
            Err(GymError::InternalError(Box::new(std::io::Error::other(
                "connection refused",
            ))))
        }
    }

    struct Blank;

    #[async_trait]
    impl InsightProvider for Blank {
        async fn summarize(&self, _stats: &DashboardStats, _question: &str) -> Result<String> {
            Ok("  ".to_string())
        }
    }

    fn stats() -> DashboardStats {
        DashboardStats {
            total_members: 3,
            active_members: 2,
            monthly_revenue: Amount::new(dec!(85000)).unwrap(),
            daily_revenue: Amount::new(dec!(10000)).unwrap(),
            recent_payments: Vec::new(),
            pending_payment_members: Vec::new(),
            expiring_soon_members: Vec::new(),
        }
    }

    #[test]
    fn test_context_lists_figures() {
        let context = insight_context(&stats());
        assert!(context.contains("Total members: 3"));
        assert!(context.contains("Monthly revenue: 85000 XAF"));
        assert!(context.contains("Daily revenue (today): 10000 XAF"));
    }

    #[tokio::test]
    async fn test_ask_falls_back_on_failure() {
        assert_eq!(ask(&Failing, &stats(), DEFAULT_QUESTION).await, UNREACHABLE_FALLBACK);
        assert_eq!(ask(&Blank, &stats(), DEFAULT_QUESTION).await, EMPTY_ANSWER_FALLBACK);
    }

    #[tokio::test]
    async fn test_canned_provider() {
        let answer = ask(&CannedInsightProvider, &stats(), DEFAULT_QUESTION).await;
        assert!(answer.starts_with("2 of 3 members are active"));
        assert!(answer.contains("quarterly plans"));
    }
}
