// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Monday-aligned week grid covering one calendar year.
//!
//! The grid runs from the Monday on or before January 1 through the Sunday
//! on or after December 31, one cell per day with no gaps, so it always
//! forms a rectangle of `weeks x 7` positions. Days belonging to adjacent
//! years are filler: present for alignment, rendered inert.

use chrono::{Datelike, Days, NaiveDate};

/// One day-position in a year's week grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Calendar date at this position
    pub date: NaiveDate,
    /// 0-based week column from the grid start
    pub week: u32,
    /// 0 = Monday ... 6 = Sunday (row)
    pub weekday: u32,
    /// False for filler days from adjacent years
    pub in_year: bool,
}

/// Rectangular Monday-aligned grid for one calendar year.
#[derive(Debug, Clone)]
pub struct YearGrid {
    pub year: i32,
    /// Monday on or before January 1
    pub start: NaiveDate,
    /// Sunday on or after December 31
    pub end: NaiveDate,
    /// Number of week columns; derived from the dates, never hard-coded
    pub weeks: u32,
    /// One cell per day from `start` through `end`, in date order
    pub cells: Vec<GridCell>,
    /// Week column of each month's first day, January first
    pub month_starts: [u32; 12],
}

impl YearGrid {
    /// Lay out the week grid for a year.
    ///
    /// Returns `None` only when the year is outside chrono's supported
    /// range; any representable year works, including years where January 1
    /// is itself a Monday (no leading filler) or December 31 a Sunday (no
    /// trailing filler).
    pub fn compute(year: i32) -> Option<YearGrid> {
        let jan_1 = NaiveDate::from_ymd_opt(year, 1, 1)?;
        let dec_31 = NaiveDate::from_ymd_opt(year, 12, 31)?;
        let start = monday_on_or_before(jan_1)?;
        let end = sunday_on_or_after(dec_31)?;

        let days = (end - start).num_days() + 1;
        let weeks = (days / 7) as u32;

        let mut cells = Vec::with_capacity(days as usize);
        let mut date = start;
        while date <= end {
            let offset = (date - start).num_days();
            cells.push(GridCell {
                date,
                week: (offset / 7) as u32,
                weekday: date.weekday().num_days_from_monday(),
                in_year: date.year() == year,
            });
            date = date.succ_opt()?;
        }

        // Month starts are always within the target year, so their columns
        // are well defined for label placement.
        let mut month_starts = [0u32; 12];
        for month in 1..=12u32 {
            let first = NaiveDate::from_ymd_opt(year, month, 1)?;
            month_starts[month as usize - 1] = ((first - start).num_days() / 7) as u32;
        }

        Some(YearGrid {
            year,
            start,
            end,
            weeks,
            cells,
            month_starts,
        })
    }
}

fn monday_on_or_before(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(date.weekday().num_days_from_monday() as u64))
}

fn sunday_on_or_after(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_add_days(Days::new(6 - date.weekday().num_days_from_monday() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::collections::HashSet;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_rectangle_shape() {
        for year in [2012, 2020, 2023, 2024, 2025] {
            let grid = YearGrid::compute(year).unwrap();
            assert_eq!(grid.cells.len() % 7, 0, "year {year}");
            assert_eq!(grid.cells.len(), grid.weeks as usize * 7, "year {year}");
            assert_eq!(grid.cells.first().unwrap().date.weekday(), Weekday::Mon);
            assert_eq!(grid.cells.last().unwrap().date.weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_every_date_exactly_once() {
        let grid = YearGrid::compute(2023).unwrap();
        let in_year: Vec<_> = grid.cells.iter().filter(|c| c.in_year).collect();
        assert_eq!(in_year.len(), 365);

        let distinct: HashSet<_> = in_year.iter().map(|c| c.date).collect();
        assert_eq!(distinct.len(), 365);
        assert!(in_year.iter().all(|c| c.date.year() == 2023));

        // Leap year
        let grid = YearGrid::compute(2024).unwrap();
        assert_eq!(grid.cells.iter().filter(|c| c.in_year).count(), 366);
    }

    #[test]
    fn test_no_gaps_and_consistent_indices() {
        let grid = YearGrid::compute(2025).unwrap();
        for (i, cell) in grid.cells.iter().enumerate() {
            assert_eq!(cell.week as usize, i / 7);
            assert_eq!(cell.weekday as usize, i % 7);
            if i > 0 {
                assert_eq!(cell.date, grid.cells[i - 1].date.succ_opt().unwrap());
            }
        }
    }

    #[test]
    fn test_year_starting_on_monday_has_no_leading_filler() {
        // January 1, 2024 is a Monday
        let grid = YearGrid::compute(2024).unwrap();
        assert_eq!(grid.start, date("2024-01-01"));
        assert!(grid.cells.first().unwrap().in_year);
    }

    #[test]
    fn test_year_ending_on_sunday_has_no_trailing_filler() {
        // December 31, 2023 is a Sunday
        let grid = YearGrid::compute(2023).unwrap();
        assert_eq!(grid.end, date("2023-12-31"));
        assert!(grid.cells.last().unwrap().in_year);
    }

    #[test]
    fn test_column_count_varies_with_alignment() {
        // 2023 spans Dec 26, 2022 - Dec 31, 2023: 53 columns
        assert_eq!(YearGrid::compute(2023).unwrap().weeks, 53);
        // A leap year starting on a Sunday needs an extra column
        assert_eq!(YearGrid::compute(2012).unwrap().weeks, 54);
    }

    #[test]
    fn test_mid_year_position() {
        // 2023-06-15 is a Thursday in the 25th column of the 2023 grid
        let grid = YearGrid::compute(2023).unwrap();
        let cell = grid
            .cells
            .iter()
            .find(|c| c.date == date("2023-06-15"))
            .unwrap();
        assert_eq!(cell.weekday, 3);
        assert_eq!(cell.week, 24);
        assert!(cell.in_year);
    }

    #[test]
    fn test_month_starts() {
        let grid = YearGrid::compute(2023).unwrap();
        // Jan 1, 2023 is the Sunday ending the first column
        assert_eq!(grid.month_starts[0], 0);
        // Feb 1, 2023: 37 days after the 2022-12-26 grid start
        assert_eq!(grid.month_starts[1], 5);
        // Month columns never decrease
        for pair in grid.month_starts.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        assert!(grid.month_starts[11] < grid.weeks);
    }

    #[test]
    fn test_out_of_range_year() {
        assert!(YearGrid::compute(i32::MAX).is_none());
    }
}
