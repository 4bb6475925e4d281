use std::time::Duration;

use super::*;
use crate::host::ClockSnapshot;

const CLOCK_REFRESH: Duration = Duration::from_secs(60);

/// `h:mm AM/PM` in the 12-hour en-US style.
pub(super) fn format_clock_time(snapshot: ClockSnapshot) -> String {
    let hour = match snapshot.hour % 12 {
        0 => 12,
        hour => hour,
    };
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, snapshot.minute, suffix)
}

/// `M/D/YYYY` without zero padding.
pub(super) fn format_clock_date(snapshot: ClockSnapshot) -> String {
    format!("{}/{}/{}", snapshot.month, snapshot.day, snapshot.year)
}

#[component]
pub(super) fn TaskbarClock() -> impl IntoView {
    let now = create_rw_signal(ClockSnapshot::now());

    match set_interval_with_handle(move || now.set(ClockSnapshot::now()), CLOCK_REFRESH) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("taskbar clock refresh unavailable: {err:?}"),
    }

    let time = move || format_clock_time(now.get());
    let date = move || format_clock_date(now.get());

    view! {
        <div
            class="taskbar-clock"
            role="timer"
            aria-label=move || format!("{}, {}", time(), date())
        >
            <span data-slot="time">{time}</span>
            <span data-slot="date">{date}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn at(hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            year: 2026,
            month: 2,
            day: 8,
            hour,
            minute,
        }
    }

    #[test]
    fn time_uses_twelve_hour_clock() {
        assert_eq!(format_clock_time(at(0, 5)), "12:05 AM");
        assert_eq!(format_clock_time(at(9, 41)), "9:41 AM");
        assert_eq!(format_clock_time(at(12, 0)), "12:00 PM");
        assert_eq!(format_clock_time(at(23, 59)), "11:59 PM");
    }

    #[test]
    fn date_is_unpadded_month_day_year() {
        assert_eq!(format_clock_date(at(10, 0)), "2/8/2026");
    }
}
