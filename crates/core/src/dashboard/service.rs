//! Dashboard assembly service.

use chrono::{DateTime, Utc};
use finboard_shared::{AnalyticsConfig, AppConfig};
use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::debug;

use super::source::DashboardDataSource;
use super::types::{
    CashFlowView, CategoryView, DashboardView, GoalView, MoneyView, SummaryView, TransactionView,
};
use crate::budget::{BudgetAggregator, BudgetCategory, ProgressCalculator};
use crate::currency::CurrencyFormatter;
use crate::goals::GoalTracker;
use crate::health::HealthScorer;
use crate::ranking::{RankingEngine, SortKey};
use crate::transactions::{Transaction, TransactionActivity};
use crate::trend::TrendEstimator;

/// Builds dashboard view-models from data sources.
///
/// Holds configuration only; every build works on its own snapshot.
#[derive(Debug, Clone)]
pub struct DashboardService {
    analytics: AnalyticsConfig,
    formatter: CurrencyFormatter,
    progress: ProgressCalculator,
    health: HealthScorer,
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl DashboardService {
    /// Creates a service from application configuration.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            analytics: config.analytics.clone(),
            formatter: CurrencyFormatter::from_config(&config.display),
            progress: ProgressCalculator::from_config(&config.analytics),
            health: HealthScorer::from_config(&config.analytics),
        }
    }

    /// Formatter used for every monetary field.
    #[must_use]
    pub const fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }

    /// Builds the dashboard for one data source.
    ///
    /// `now` drives goal deadlines; `sort` orders the category list.
    pub fn build<S>(&self, source: &S, now: DateTime<Utc>, sort: SortKey) -> DashboardView
    where
        S: DashboardDataSource + ?Sized,
    {
        let budgets = source.budgets();
        let goals = source.goals();
        let transactions = source.transactions();

        debug!(
            budgets = budgets.len(),
            goals = goals.len(),
            transactions = transactions.len(),
            %sort,
            "building dashboard"
        );

        let summary = BudgetAggregator::summarize(&budgets, &self.progress);
        let categories = RankingEngine::sort_budgets(&budgets, sort)
            .into_iter()
            .map(|b| self.category_view(b))
            .collect();
        let top_spending =
            RankingEngine::top_spending(&budgets, self.analytics.top_spending_count)
                .into_iter()
                .map(|b| self.category_view(b))
                .collect();
        let goals = GoalTracker::summarize(&goals, now)
            .into_iter()
            .map(|g| GoalView {
                id: g.id,
                title: g.title,
                priority: g.priority,
                target: self.money(g.target),
                current: self.money(g.current),
                remaining: self.money(g.remaining),
                percent: g.percent,
                deadline: g.deadline,
                days_remaining: g.days_remaining,
                status: g.status,
                monthly_contribution: g.monthly_contribution.map(|m| self.money(m)),
            })
            .collect();
        let recent_transactions = TransactionActivity::recent(
            &transactions,
            self.analytics.recent_transactions_limit,
        )
        .into_iter()
        .map(|t| self.transaction_view(t))
        .collect();
        let flow = TransactionActivity::cash_flow(&transactions);

        DashboardView {
            generated_at: now,
            locale: self.formatter.locale(),
            currency: self.formatter.currency(),
            summary: SummaryView {
                total_budget: self.money(summary.total_budget),
                total_spent: self.money(summary.total_spent),
                remaining: self.money(summary.remaining),
                progress_percent: summary.progress_percent,
                band: summary.band,
            },
            categories,
            health: self.health.score(&budgets),
            top_spending,
            goals,
            recent_transactions,
            cash_flow: CashFlowView {
                income: self.money(flow.income),
                expenses: self.money(flow.expenses),
                net: self.money(flow.net),
            },
            trend: TrendEstimator::monthly(source),
        }
    }

    /// Builds dashboards for many sources in parallel.
    ///
    /// Output order matches `sources`.
    pub fn build_batch<S>(&self, sources: &[S], now: DateTime<Utc>, sort: SortKey) -> Vec<DashboardView>
    where
        S: DashboardDataSource + Sync,
    {
        sources
            .par_iter()
            .map(|source| self.build(source, now, sort))
            .collect()
    }

    fn money(&self, amount: Decimal) -> MoneyView {
        MoneyView {
            amount,
            formatted: self.formatter.format(amount),
        }
    }

    fn category_view(&self, budget: &BudgetCategory) -> CategoryView {
        let progress = self.progress.category_progress(budget);

        CategoryView {
            id: progress.id,
            category: progress.category,
            icon: budget.icon.clone(),
            color: budget.color.clone(),
            allocated: self.money(progress.allocated),
            spent: self.money(progress.spent),
            remaining: self.money(progress.remaining),
            percent: progress.percent,
            band: progress.band,
        }
    }

    fn transaction_view(&self, transaction: &Transaction) -> TransactionView {
        TransactionView {
            id: transaction.id,
            kind: transaction.kind,
            description: transaction.description.clone(),
            category: transaction.category.clone(),
            amount: self.money(transaction.signed_amount()),
            timestamp: transaction.timestamp,
            status: transaction.status,
        }
    }
}
