use chrono::{Datelike, Months, NaiveDate};

/// Years chrono can represent in full; stepping stops only at these.
fn year_bounds() -> (i32, i32) {
    (NaiveDate::MIN.year(), NaiveDate::MAX.year())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day(u32),
}

/// Month shown by the calendar popover. `month0` is 0 for January.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCursor {
    year: i32,
    month0: u32,
}

impl CalendarCursor {
    /// Build a cursor, carrying month overflow into the year.
    pub fn new(year: i32, month0: u32) -> Self {
        let carry = i32::try_from(month0 / 12).unwrap_or(0);
        let (min_year, max_year) = year_bounds();
        Self {
            year: year.saturating_add(carry).clamp(min_year, max_year),
            month0: month0 % 12,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn next_month(&mut self) {
        if self.month0 == 11 {
            if self.year < year_bounds().1 {
                self.year += 1;
                self.month0 = 0;
            }
        } else {
            self.month0 += 1;
        }
    }

    pub fn prev_month(&mut self) {
        if self.month0 == 0 {
            if self.year > year_bounds().0 {
                self.year -= 1;
                self.month0 = 11;
            }
        } else {
            self.month0 -= 1;
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // Every month of a year inside `year_bounds` exists.
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        let first = self.first_day();
        first
            .checked_add_months(Months::new(1))
            .and_then(|next| u32::try_from(next.signed_duration_since(first).num_days()).ok())
            // Only December of the last representable year has no successor.
            .unwrap_or(31)
    }

    /// Weekday of the 1st, 0 = Sunday .. 6 = Saturday.
    pub fn first_weekday_offset(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Leading blanks followed by the day numbers.
    pub fn grid(&self) -> Vec<CalendarCell> {
        let offset = self.first_weekday_offset();
        (0..offset)
            .map(|_| CalendarCell::Blank)
            .chain((1..=self.days_in_month()).map(CalendarCell::Day))
            .collect()
    }

    /// The grid split into 7-column rows, last row padded with blanks.
    pub fn weeks(&self) -> Vec<[CalendarCell; 7]> {
        self.grid()
            .chunks(7)
            .map(|chunk| {
                let mut week = [CalendarCell::Blank; 7];
                week[..chunk.len()].copy_from_slice(chunk);
                week
            })
            .collect()
    }

    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    pub fn is_today(&self, day: u32, today: NaiveDate) -> bool {
        today.year() == self.year && today.month0() == self.month0 && today.day() == day
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn december_rolls_into_next_year() {
        let mut cursor = CalendarCursor::new(2024, 11);
        cursor.next_month();
        assert_eq!((cursor.year(), cursor.month0()), (2025, 0));
    }

    #[test]
    fn january_rolls_into_previous_year() {
        let mut cursor = CalendarCursor::new(2024, 0);
        cursor.prev_month();
        assert_eq!((cursor.year(), cursor.month0()), (2023, 11));
    }

    #[test]
    fn stepping_crosses_four_digit_years() {
        let mut cursor = CalendarCursor::new(9999, 11);
        cursor.next_month();
        assert_eq!((cursor.year(), cursor.month0()), (10000, 0));
        assert_eq!(cursor.first_day(), NaiveDate::from_ymd_opt(10000, 1, 1).unwrap());

        let mut cursor = CalendarCursor::new(1, 0);
        cursor.prev_month();
        assert_eq!((cursor.year(), cursor.month0()), (0, 11));
        assert_eq!(cursor.days_in_month(), 31);
    }

    #[test]
    fn last_representable_month_is_complete() {
        let mut cursor = CalendarCursor::from_date(NaiveDate::MAX);
        assert_eq!(cursor.days_in_month(), 31);
        assert_eq!(cursor.first_day().month0(), 11);

        cursor.next_month();
        assert_eq!(cursor, CalendarCursor::from_date(NaiveDate::MAX));
    }

    #[test]
    fn month_overflow_carries_into_year() {
        let cursor = CalendarCursor::new(2024, 13);
        assert_eq!((cursor.year(), cursor.month0()), (2025, 1));
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(CalendarCursor::new(2024, 1).days_in_month(), 29);
        assert_eq!(CalendarCursor::new(2023, 1).days_in_month(), 28);
        assert_eq!(CalendarCursor::new(1900, 1).days_in_month(), 28);
        assert_eq!(CalendarCursor::new(2000, 1).days_in_month(), 29);
        assert_eq!(CalendarCursor::new(2026, 8).days_in_month(), 30);
        assert_eq!(CalendarCursor::new(2026, 9).days_in_month(), 31);
    }

    #[test]
    fn sunday_start_has_no_leading_blanks() {
        // 1 September 2024 is a Sunday.
        let cursor = CalendarCursor::new(2024, 8);
        assert_eq!(cursor.first_weekday_offset(), 0);
        assert_eq!(cursor.grid()[0], CalendarCell::Day(1));
    }

    #[test]
    fn saturday_start_has_six_leading_blanks() {
        // 1 June 2024 is a Saturday.
        let grid = CalendarCursor::new(2024, 5).grid();
        assert!(grid[..6].iter().all(|cell| *cell == CalendarCell::Blank));
        assert_eq!(grid[6], CalendarCell::Day(1));
        assert_eq!(grid.len(), 6 + 30);
    }

    #[test]
    fn weeks_are_padded_to_seven_columns() {
        let weeks = CalendarCursor::new(2024, 5).weeks();
        assert_eq!(weeks.len(), 6);
        assert_eq!(weeks[5][0], CalendarCell::Day(30));
        assert_eq!(weeks[5][1], CalendarCell::Blank);
    }

    #[test]
    fn label_names_month_and_year() {
        assert_eq!(CalendarCursor::new(2026, 9).label(), "October 2026");
    }

    #[test]
    fn today_matches_only_its_month() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let cursor = CalendarCursor::from_date(today);
        assert!(cursor.is_today(17, today));
        assert!(!cursor.is_today(16, today));

        let mut next = cursor;
        next.next_month();
        assert!(!next.is_today(17, today));
    }
}
