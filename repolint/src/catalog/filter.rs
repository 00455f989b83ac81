//! Repository selection rules.

use super::RepositoryDescriptor;
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Why a repository was left out of the catalog.
///
/// Reasons are mutually exclusive; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Repository is a fork.
    Fork,

    /// Repository is archived.
    Archived,

    /// Repository has fewer stars than required.
    TooFewStars { stars: u32, min_stars: u32 },

    /// Repository has not been pushed to within the threshold.
    Inactive { months: u32 },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fork => f.write_str("fork"),
            Self::Archived => f.write_str("archived"),
            Self::TooFewStars { stars, min_stars } => {
                write!(f, "{stars} stars, need at least {min_stars}")
            }
            Self::Inactive { months } => write!(f, "no pushes in the last {months} months"),
        }
    }
}

/// Filters applied to every listed repository, in declaration order.
#[derive(Debug, Clone)]
pub struct CatalogFilter {
    /// Skip forked repositories.
    pub skip_forks: bool,

    /// Skip archived repositories.
    pub skip_archived: bool,

    /// Minimum stargazer count.
    pub min_stars: u32,

    /// Skip repositories without recent pushes.
    pub skip_inactive: bool,

    /// Inactivity threshold in calendar months.
    pub inactive_months: u32,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            skip_forks: true,
            skip_archived: true,
            min_stars: 0,
            skip_inactive: false,
            inactive_months: 6,
        }
    }
}

impl CatalogFilter {
    /// Returns the inactivity threshold.
    ///
    /// A month is counted as 32 days so the threshold never undershoots.
    #[must_use]
    pub fn inactivity_threshold(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.inactive_months) * 32 * 24)
    }

    /// Returns the reason to skip `repository`, or `None` to keep it.
    #[must_use]
    pub fn skip_reason(
        &self,
        repository: &RepositoryDescriptor,
        now: DateTime<Utc>,
    ) -> Option<SkipReason> {
        if self.skip_forks && repository.fork {
            return Some(SkipReason::Fork);
        }
        if self.skip_archived && repository.archived {
            return Some(SkipReason::Archived);
        }
        if repository.stars < self.min_stars {
            return Some(SkipReason::TooFewStars {
                stars: repository.stars,
                min_stars: self.min_stars,
            });
        }
        if self.skip_inactive {
            let inactive = match repository.pushed_at {
                Some(pushed_at) => now - pushed_at > self.inactivity_threshold(),
                None => true,
            };
            if inactive {
                return Some(SkipReason::Inactive {
                    months: self.inactive_months,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> RepositoryDescriptor {
        RepositoryDescriptor::new("octo", "hello")
    }

    #[test]
    fn keeps_regular_repository() {
        let filter = CatalogFilter::default();
        assert_eq!(filter.skip_reason(&repository(), Utc::now()), None);
    }

    #[test]
    fn first_matching_rule_wins() {
        let filter = CatalogFilter {
            min_stars: 10,
            skip_inactive: true,
            ..CatalogFilter::default()
        };
        let mut repo = repository();
        repo.fork = true;
        repo.archived = true;
        repo.pushed_at = None;

        assert_eq!(filter.skip_reason(&repo, Utc::now()), Some(SkipReason::Fork));

        repo.fork = false;
        assert_eq!(
            filter.skip_reason(&repo, Utc::now()),
            Some(SkipReason::Archived)
        );

        repo.archived = false;
        assert_eq!(
            filter.skip_reason(&repo, Utc::now()),
            Some(SkipReason::TooFewStars {
                stars: 0,
                min_stars: 10
            })
        );

        repo.stars = 10;
        assert_eq!(
            filter.skip_reason(&repo, Utc::now()),
            Some(SkipReason::Inactive { months: 6 })
        );
    }

    #[test]
    fn disabled_rules_do_not_skip() {
        let filter = CatalogFilter {
            skip_forks: false,
            skip_archived: false,
            ..CatalogFilter::default()
        };
        let mut repo = repository();
        repo.fork = true;
        repo.archived = true;
        repo.pushed_at = None;

        assert_eq!(filter.skip_reason(&repo, Utc::now()), None);
    }

    #[test]
    fn inactivity_uses_32_day_months() {
        let filter = CatalogFilter {
            skip_inactive: true,
            inactive_months: 6,
            ..CatalogFilter::default()
        };
        let now = Utc::now();
        let mut repo = repository();

        repo.pushed_at = Some(now - TimeDelta::days(190));
        assert_eq!(filter.skip_reason(&repo, now), None);

        repo.pushed_at = Some(now - TimeDelta::days(193));
        assert_eq!(
            filter.skip_reason(&repo, now),
            Some(SkipReason::Inactive { months: 6 })
        );
    }
}
