multiversx_sc::imports!();

use crate::calendar_proxy;
use crate::errors::{ERR_DAILY_LIMIT_EXCEEDED, ERR_INVALID_ADDRESS};
use crate::roles;

/// Day length used when no calendar oracle is configured.
pub const SECONDS_PER_DAY: u64 = 86_400;

// ============================================================
// Daily mint limit — cumulative minted amount per day window.
// The window rolls lazily on the next reservation.
// ============================================================

#[multiversx_sc::module]
pub trait DailyLimitModule: roles::RolesModule {
    #[endpoint(setMintLimit)]
    fn set_mint_limit(&self, mint_limit: BigUint) {
        self.require_owner();
        self.mint_limit().set(&mint_limit);
        self.mint_limit_set_event(&mint_limit);
    }

    /// Clears today's usage without waiting for the day boundary.
    #[endpoint(resetMintedToday)]
    fn reset_minted_today(&self) {
        self.require_owner();
        self.minted_today().clear();
        self.minted_today_reset_event(&self.blockchain().get_caller());
    }

    #[endpoint(setCalendar)]
    fn set_calendar(&self, calendar: ManagedAddress) {
        self.require_owner();
        require!(!calendar.is_zero(), ERR_INVALID_ADDRESS);
        self.calendar_address().set(&calendar);
        self.calendar_set_event(&calendar);
    }

    // ========================================================
    // INTERNAL: reservation
    // ========================================================

    fn check_and_reserve(&self, amount: &BigUint) {
        let (today, minted_today) = self.effective_minted_today();
        let new_total = minted_today + amount;
        require!(new_total <= self.mint_limit().get(), ERR_DAILY_LIMIT_EXCEEDED);

        self.last_reset_day().set(today);
        self.minted_today().set(&new_total);
    }

    /// Today's index and today's usage, treating a stale window as empty.
    fn effective_minted_today(&self) -> (u64, BigUint) {
        let today = self.current_day_index();
        if today != self.last_reset_day().get() {
            (today, BigUint::zero())
        } else {
            (today, self.minted_today().get())
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(currentDayIndex)]
    fn current_day_index(&self) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        if self.calendar_address().is_empty() {
            return now / SECONDS_PER_DAY;
        }

        let calendar = self.calendar_address().get();
        self.tx()
            .to(&calendar)
            .typed(calendar_proxy::CalendarProxy)
            .get_day_index(now)
            .returns(ReturnsResult)
            .sync_call()
    }

    #[view(getRemainingMintAllowance)]
    fn get_remaining_mint_allowance(&self) -> BigUint {
        let (_, minted_today) = self.effective_minted_today();
        let mint_limit = self.mint_limit().get();
        if minted_today >= mint_limit {
            BigUint::zero()
        } else {
            mint_limit - minted_today
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("mintLimitSet")]
    fn mint_limit_set_event(&self, mint_limit: &BigUint);

    #[event("mintedTodayReset")]
    fn minted_today_reset_event(&self, #[indexed] caller: &ManagedAddress);

    #[event("calendarSet")]
    fn calendar_set_event(&self, #[indexed] calendar: &ManagedAddress);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getMintLimit)]
    #[storage_mapper("mintLimit")]
    fn mint_limit(&self) -> SingleValueMapper<BigUint>;

    #[view(getMintedToday)]
    #[storage_mapper("mintedToday")]
    fn minted_today(&self) -> SingleValueMapper<BigUint>;

    #[view(getLastResetDay)]
    #[storage_mapper("lastResetDay")]
    fn last_reset_day(&self) -> SingleValueMapper<u64>;

    #[view(getCalendar)]
    #[storage_mapper("calendarAddress")]
    fn calendar_address(&self) -> SingleValueMapper<ManagedAddress>;
}
