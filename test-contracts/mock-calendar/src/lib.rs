#![no_std]

multiversx_sc::imports!();

const SECONDS_PER_DAY: u64 = 86_400;

/// Day-index oracle whose clock can be shifted forward by whole days.
#[multiversx_sc::contract]
pub trait MockCalendar {
    #[init]
    fn init(&self) {}

    #[endpoint(setDayOffset)]
    fn set_day_offset(&self, offset: u64) {
        self.day_offset().set(offset);
    }

    #[view(getDayIndex)]
    fn get_day_index(&self, timestamp: u64) -> u64 {
        timestamp / SECONDS_PER_DAY + self.day_offset().get()
    }

    #[storage_mapper("dayOffset")]
    fn day_offset(&self) -> SingleValueMapper<u64>;
}
