use anchor_lang::prelude::*;

use crate::{constants::MAX_PHASES, errors::SalePoolError};

/// Where a phase sits relative to a given timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhaseStatus {
    Unscheduled,
    Scheduled,
    Active,
    Ended,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Phase {
    /// Quote base units per whole sale token
    pub price: u64,

    /// Maximum sale base units sellable in this phase
    pub allocation: u64,

    /// Sale base units sold so far
    pub sold: u64,

    /// Window start (inclusive), 0 while unscheduled
    pub start_time: i64,

    /// Window end (exclusive), 0 while unscheduled
    pub end_time: i64,

    /// Unsold allocation has been returned to the owner
    pub recovered: bool,
}

impl Phase {
    pub const LEN: usize = 8 + // price
        8 + // allocation
        8 + // sold
        8 + // start_time
        8 + // end_time
        1; // recovered

    pub fn new(price: u64, allocation: u64) -> Self {
        Self {
            price,
            allocation,
            ..Default::default()
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.start_time < self.end_time
    }

    pub fn status(&self, now: i64) -> PhaseStatus {
        if !self.is_scheduled() {
            PhaseStatus::Unscheduled
        } else if now < self.start_time {
            PhaseStatus::Scheduled
        } else if now < self.end_time {
            PhaseStatus::Active
        } else {
            PhaseStatus::Ended
        }
    }

    pub fn has_started(&self, now: i64) -> bool {
        matches!(self.status(now), PhaseStatus::Active | PhaseStatus::Ended)
    }

    pub fn remaining(&self) -> u64 {
        self.allocation.saturating_sub(self.sold)
    }
}

#[account]
pub struct PhaseSchedule {
    /// Associated pool
    pub pool: Pubkey,

    /// Phases in sale order
    pub phases: Vec<Phase>,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl PhaseSchedule {
    pub const LEN: usize = 8 + // discriminator
        32 + // pool
        4 + (MAX_PHASES * Phase::LEN) + // phases
        1; // bump

    pub fn phase(&self, index: usize) -> Result<&Phase> {
        self.phases
            .get(index)
            .ok_or_else(|| error!(SalePoolError::InvalidPhaseIndex))
    }

    fn phase_mut(&mut self, index: usize) -> Result<&mut Phase> {
        self.phases
            .get_mut(index)
            .ok_or_else(|| error!(SalePoolError::InvalidPhaseIndex))
    }

    /// Populate the schedule from `(price, allocation)` pairs. All phases
    /// start unscheduled.
    pub fn init_phases(&mut self, configs: &[PhaseConfig]) -> Result<()> {
        require!(
            !configs.is_empty() && configs.len() <= MAX_PHASES,
            SalePoolError::InvalidPhaseCount
        );

        let mut phases = Vec::with_capacity(configs.len());
        for config in configs {
            require!(config.price > 0, SalePoolError::InvalidPrice);
            phases.push(Phase::new(config.price, config.allocation));
        }
        self.phases = phases;

        Ok(())
    }

    /// Overwrite the window of phase `index`. Every other scheduled phase
    /// must stay strictly ordered around it: earlier indices end at or
    /// before `start`, later indices begin at or after `end`.
    pub fn set_timing(&mut self, index: usize, start: i64, end: i64, now: i64) -> Result<()> {
        let phase = self.phase(index)?;
        require!(start < end, SalePoolError::InvalidPhaseWindow);
        require!(!phase.has_started(now), SalePoolError::PhaseAlreadyStarted);

        for (i, other) in self.phases.iter().enumerate() {
            if i == index || !other.is_scheduled() {
                continue;
            }
            if i < index {
                require!(other.end_time <= start, SalePoolError::PhaseOverlap);
            } else {
                require!(end <= other.start_time, SalePoolError::PhaseOverlap);
            }
        }

        let phase = self.phase_mut(index)?;
        phase.start_time = start;
        phase.end_time = end;

        Ok(())
    }

    /// Reprice or resize a phase that has not started yet.
    pub fn configure(&mut self, index: usize, price: u64, allocation: u64, now: i64) -> Result<()> {
        let phase = self.phase_mut(index)?;
        require!(!phase.has_started(now), SalePoolError::PhaseAlreadyStarted);
        require!(price > 0, SalePoolError::InvalidPrice);
        require!(allocation >= phase.sold, SalePoolError::AllocationBelowSold);

        phase.price = price;
        phase.allocation = allocation;

        Ok(())
    }

    /// The phase whose window contains `now`, if any.
    pub fn active_phase(&self, now: i64) -> Option<(usize, &Phase)> {
        self.phases
            .iter()
            .enumerate()
            .find(|(_, phase)| phase.status(now) == PhaseStatus::Active)
    }

    /// Count `sale_units` against the allocation of phase `index`.
    pub fn record_sale(&mut self, index: usize, sale_units: u64) -> Result<u64> {
        let phase = self.phase_mut(index)?;
        let sold = phase
            .sold
            .checked_add(sale_units)
            .ok_or(SalePoolError::MathOverflow)?;
        require!(sold <= phase.allocation, SalePoolError::AllocationExhausted);

        phase.sold = sold;
        Ok(sold)
    }

    /// Mark the unsold remainder of an ended phase as recovered and return
    /// how much is still owed to the owner. Zero once recovered.
    pub fn take_unsold(&mut self, index: usize, now: i64) -> Result<u64> {
        let phase = self.phase_mut(index)?;
        match phase.status(now) {
            PhaseStatus::Unscheduled => return err!(SalePoolError::PhaseNotScheduled),
            PhaseStatus::Scheduled | PhaseStatus::Active => {
                return err!(SalePoolError::PhaseActive)
            }
            PhaseStatus::Ended => {}
        }

        if phase.recovered {
            return Ok(0);
        }
        phase.recovered = true;

        Ok(phase.remaining())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseConfig {
    pub price: u64,
    pub allocation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_DAY;

    const TOKEN: u64 = 1_000_000_000;
    const NOW: i64 = 1_700_000_000;

    fn schedule(count: usize) -> PhaseSchedule {
        let configs: Vec<PhaseConfig> = (0..count)
            .map(|i| PhaseConfig {
                price: 1_000_000 + (i as u64) * 250_000,
                allocation: 60_000_000 * TOKEN,
            })
            .collect();

        let mut schedule = PhaseSchedule {
            pool: Pubkey::new_unique(),
            phases: Vec::new(),
            bump: 255,
        };
        schedule.init_phases(&configs).unwrap();
        schedule
    }

    fn assert_ordered(schedule: &PhaseSchedule) {
        let scheduled: Vec<&Phase> = schedule.phases.iter().filter(|p| p.is_scheduled()).collect();
        for (i, a) in scheduled.iter().enumerate() {
            for b in scheduled.iter().skip(i + 1) {
                assert!(a.end_time <= b.start_time);
            }
        }
    }

    #[test]
    fn test_init_phases_rejects_bad_counts() {
        let mut schedule = schedule(1);
        let result = schedule.init_phases(&[]);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidPhaseCount.into());

        let too_many = vec![PhaseConfig { price: 1, allocation: 1 }; MAX_PHASES + 1];
        let result = schedule.init_phases(&too_many);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidPhaseCount.into());

        let result = schedule.init_phases(&[PhaseConfig { price: 0, allocation: 1 }]);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidPrice.into());
    }

    #[test]
    fn test_set_timing_round_trip() {
        let mut schedule = schedule(4);
        let start = NOW + SECONDS_PER_DAY;
        let end = start + 30 * SECONDS_PER_DAY;

        schedule.set_timing(0, start, end, NOW).unwrap();

        let phase = schedule.phase(0).unwrap();
        assert_eq!(phase.start_time, start);
        assert_eq!(phase.end_time, end);
        assert_eq!(phase.price, 1_000_000);
        assert_eq!(phase.allocation, 60_000_000 * TOKEN);
        assert_eq!(phase.sold, 0);
    }

    #[test]
    fn test_overlap_with_previous_phase_rejected() {
        let mut schedule = schedule(4);
        let start = NOW + SECONDS_PER_DAY;
        let end = start + 30 * SECONDS_PER_DAY;
        schedule.set_timing(0, start, end, NOW).unwrap();

        let result = schedule.set_timing(1, start, start + 30 * SECONDS_PER_DAY, NOW);
        assert_eq!(result.unwrap_err(), SalePoolError::PhaseOverlap.into());
        assert!(!schedule.phase(1).unwrap().is_scheduled());

        // Back to back is allowed
        schedule.set_timing(1, end, end + 30 * SECONDS_PER_DAY, NOW).unwrap();
        assert_ordered(&schedule);
    }

    #[test]
    fn test_overlap_with_later_phase_rejected() {
        let mut schedule = schedule(4);
        schedule.set_timing(2, NOW + 100, NOW + 200, NOW).unwrap();

        let result = schedule.set_timing(0, NOW + 150, NOW + 300, NOW);
        assert_eq!(result.unwrap_err(), SalePoolError::PhaseOverlap.into());

        // Phase 1 is unscheduled, but phase 0 still cannot end after phase 2 starts
        let result = schedule.set_timing(0, NOW + 10, NOW + 101, NOW);
        assert_eq!(result.unwrap_err(), SalePoolError::PhaseOverlap.into());

        schedule.set_timing(0, NOW + 10, NOW + 100, NOW).unwrap();
        assert_ordered(&schedule);
    }

    #[test]
    fn test_invalid_window_and_index() {
        let mut schedule = schedule(2);
        let result = schedule.set_timing(0, NOW + 10, NOW + 10, NOW);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidPhaseWindow.into());

        let result = schedule.set_timing(2, NOW + 10, NOW + 20, NOW);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidPhaseIndex.into());
    }

    #[test]
    fn test_timing_frozen_once_started() {
        let mut schedule = schedule(2);
        schedule.set_timing(0, NOW + 2, NOW + 100, NOW).unwrap();

        // Still movable before the start
        schedule.set_timing(0, NOW + 5, NOW + 100, NOW + 1).unwrap();

        let result = schedule.set_timing(0, NOW + 500, NOW + 600, NOW + 5);
        assert_eq!(result.unwrap_err(), SalePoolError::PhaseAlreadyStarted.into());

        let result = schedule.configure(0, 2_000_000, TOKEN, NOW + 200);
        assert_eq!(result.unwrap_err(), SalePoolError::PhaseAlreadyStarted.into());
    }

    #[test]
    fn test_configure_round_trip() {
        let mut schedule = schedule(2);
        schedule.configure(1, 1_500_000, 10 * TOKEN, NOW).unwrap();

        let phase = schedule.phase(1).unwrap();
        assert_eq!(phase.price, 1_500_000);
        assert_eq!(phase.allocation, 10 * TOKEN);

        let result = schedule.configure(1, 0, 10 * TOKEN, NOW);
        assert_eq!(result.unwrap_err(), SalePoolError::InvalidPrice.into());
    }

    #[test]
    fn test_active_phase_follows_clock() {
        let mut schedule = schedule(3);
        schedule.set_timing(0, NOW, NOW + 100, NOW).unwrap();
        schedule.set_timing(1, NOW + 100, NOW + 200, NOW).unwrap();

        assert!(schedule.active_phase(NOW - 1).is_none());
        assert_eq!(schedule.active_phase(NOW).map(|(i, _)| i), Some(0));
        assert_eq!(schedule.active_phase(NOW + 99).map(|(i, _)| i), Some(0));
        assert_eq!(schedule.active_phase(NOW + 100).map(|(i, _)| i), Some(1));
        assert!(schedule.active_phase(NOW + 200).is_none());

        let phase = schedule.phase(2).unwrap();
        assert_eq!(phase.status(NOW), PhaseStatus::Unscheduled);
        assert_eq!(schedule.phase(1).unwrap().status(NOW), PhaseStatus::Scheduled);
        assert_eq!(schedule.phase(0).unwrap().status(NOW + 150), PhaseStatus::Ended);
    }

    #[test]
    fn test_record_sale_never_exceeds_allocation() {
        let mut schedule = schedule(1);
        schedule.configure(0, 1_000_000, 1_000 * TOKEN, NOW).unwrap();

        assert_eq!(schedule.record_sale(0, 600 * TOKEN).unwrap(), 600 * TOKEN);

        let result = schedule.record_sale(0, 401 * TOKEN);
        assert_eq!(result.unwrap_err(), SalePoolError::AllocationExhausted.into());
        assert_eq!(schedule.phase(0).unwrap().sold, 600 * TOKEN);

        assert_eq!(schedule.record_sale(0, 400 * TOKEN).unwrap(), 1_000 * TOKEN);
        assert_eq!(schedule.phase(0).unwrap().remaining(), 0);

        let result = schedule.configure(0, 1_000_000, 999 * TOKEN, NOW);
        assert_eq!(result.unwrap_err(), SalePoolError::AllocationBelowSold.into());
    }

    #[test]
    fn test_take_unsold_once() {
        let mut schedule = schedule(2);
        schedule.set_timing(0, NOW, NOW + 30 * SECONDS_PER_DAY, NOW).unwrap();
        schedule.record_sale(0, 1_000 * TOKEN).unwrap();

        let result = schedule.take_unsold(0, NOW + SECONDS_PER_DAY);
        assert_eq!(result.unwrap_err(), SalePoolError::PhaseActive.into());
        assert!(!schedule.phase(0).unwrap().recovered);

        let result = schedule.take_unsold(1, NOW + 31 * SECONDS_PER_DAY);
        assert_eq!(result.unwrap_err(), SalePoolError::PhaseNotScheduled.into());

        let after_end = NOW + 31 * SECONDS_PER_DAY;
        let unsold = schedule.take_unsold(0, after_end).unwrap();
        assert_eq!(unsold, 60_000_000 * TOKEN - 1_000 * TOKEN);
        assert!(schedule.phase(0).unwrap().recovered);

        assert_eq!(schedule.take_unsold(0, after_end).unwrap(), 0);
    }
}
