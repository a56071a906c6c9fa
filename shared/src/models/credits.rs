//! Per-session credit bookkeeping for weather lookups
//!
//! Every operation that depends on the clock takes `now` as a parameter, so
//! the whole module is a pure function of `(account, now)` and testable
//! without real time passing.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Maximum number of credits a session can hold.
pub const CREDIT_CAP: u32 = 3;

/// Hours between allowance resets.
const RESET_INTERVAL_HOURS: i64 = 24;

fn reset_interval() -> Duration {
    Duration::hours(RESET_INTERVAL_HOURS)
}

/// A session's lookup allowance.
///
/// Invariant: `balance` stays within `[0, CREDIT_CAP]` at every observation
/// point. Callers run [`maybe_reset`](Self::maybe_reset) before consuming or
/// querying so the account reflects the current reset window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreditAccount {
    balance: u32,
    last_reset_at: DateTime<Utc>,
}

impl CreditAccount {
    /// A fresh account with a full allowance, anchored at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            balance: CREDIT_CAP,
            last_reset_at: now,
        }
    }

    /// Remaining credits.
    pub fn balance(&self) -> u32 {
        self.balance
    }

    /// Start of the current reset window.
    pub fn last_reset_at(&self) -> DateTime<Utc> {
        self.last_reset_at
    }

    /// Refill the allowance if a full reset interval has elapsed.
    ///
    /// Idempotent within a window: the second call with the same `now` is a
    /// no-op. Returns whether a reset happened.
    pub fn maybe_reset(&mut self, now: DateTime<Utc>) -> bool {
        if now - self.last_reset_at >= reset_interval() {
            self.balance = CREDIT_CAP;
            self.last_reset_at = now;
            true
        } else {
            false
        }
    }

    /// Spend one credit if any remain.
    ///
    /// The single atomic gate for a lookup: returns `false` and leaves the
    /// balance untouched at zero, otherwise decrements and returns `true`.
    pub fn try_consume(&mut self) -> bool {
        if self.balance == 0 {
            false
        } else {
            self.balance -= 1;
            true
        }
    }

    /// Put one credit back, clamped at the cap.
    ///
    /// Used when a lookup passed the gate but the provider call failed, so
    /// only successful lookups spend allowance.
    pub fn restore(&mut self) {
        self.balance = (self.balance + 1).min(CREDIT_CAP);
    }

    /// Time remaining until the next allowance reset, clamped to zero.
    ///
    /// Display only; has no side effect.
    pub fn time_until_reset(&self, now: DateTime<Utc>) -> Duration {
        let remaining = self.last_reset_at + reset_interval() - now;
        remaining.max(Duration::zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn fresh_account_holds_full_allowance() {
        let account = CreditAccount::new(t0());
        assert_eq!(account.balance(), CREDIT_CAP);
        assert_eq!(account.last_reset_at(), t0());
    }

    #[test]
    fn consume_decrements_until_empty() {
        let mut account = CreditAccount::new(t0());
        assert!(account.try_consume());
        assert_eq!(account.balance(), 2);
        assert!(account.try_consume());
        assert!(account.try_consume());
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn consume_at_zero_is_denied_and_balance_stays_zero() {
        let mut account = CreditAccount::new(t0());
        for _ in 0..CREDIT_CAP {
            assert!(account.try_consume());
        }
        assert!(!account.try_consume());
        assert_eq!(account.balance(), 0);
    }

    #[test]
    fn restore_clamps_at_cap() {
        let mut account = CreditAccount::new(t0());
        account.restore();
        assert_eq!(account.balance(), CREDIT_CAP);

        account.try_consume();
        account.restore();
        assert_eq!(account.balance(), CREDIT_CAP);
    }

    #[test]
    fn reset_requires_a_full_interval() {
        let mut account = CreditAccount::new(t0());
        account.try_consume();

        let just_short = t0() + Duration::hours(23) + Duration::minutes(59);
        assert!(!account.maybe_reset(just_short));
        assert_eq!(account.balance(), 2);
        assert_eq!(account.last_reset_at(), t0());

        let on_time = t0() + Duration::hours(24);
        assert!(account.maybe_reset(on_time));
        assert_eq!(account.balance(), CREDIT_CAP);
        assert_eq!(account.last_reset_at(), on_time);
    }

    #[test]
    fn reset_is_idempotent_within_a_window() {
        let mut account = CreditAccount::new(t0());
        let later = t0() + Duration::hours(25);
        assert!(account.maybe_reset(later));
        account.try_consume();
        assert!(!account.maybe_reset(later));
        assert_eq!(account.balance(), 2);
    }

    #[test]
    fn time_until_reset_counts_down_and_clamps() {
        let account = CreditAccount::new(t0());
        assert_eq!(
            account.time_until_reset(t0() + Duration::hours(20)),
            Duration::hours(4)
        );
        assert_eq!(
            account.time_until_reset(t0() + Duration::hours(30)),
            Duration::zero()
        );
    }
}
