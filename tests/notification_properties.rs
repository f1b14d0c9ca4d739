// SPDX-License-Identifier: MPL-2.0
use proptest::prelude::*;
use silva_site::ui::notifications::{
    DefaultTitles, NotificationCenter, NotificationTiming, Phase, Severity,
};
use std::collections::HashSet;
use std::time::{Duration, Instant};

const TIMING: NotificationTiming = NotificationTiming {
    enter_delay: Duration::from_millis(100),
    exit_delay: Duration::from_millis(500),
    default_duration: Duration::from_millis(5000),
};

fn severity(index: u8) -> Severity {
    match index % 4 {
        0 => Severity::Success,
        1 => Severity::Error,
        2 => Severity::Warning,
        _ => Severity::Info,
    }
}

proptest! {
    #[test]
    fn timed_notifications_always_detach(
        shows in prop::collection::vec((0u64..3_000, 1u64..8_000, any::<u8>()), 1..20),
        tick_step in 1u64..400,
    ) {
        let start = Instant::now();
        let mut center = NotificationCenter::new(TIMING, DefaultTitles::default());
        let mut ids = HashSet::new();
        let mut last_deadline = start;

        for (offset, duration, kind) in &shows {
            let at = start + Duration::from_millis(*offset);
            center.tick(at);
            let duration = Duration::from_millis(*duration);
            let id = center
                .show(at, "mensagem", severity(*kind), None, Some(duration))
                .expect("attached center");
            prop_assert!(ids.insert(id));
            let gone = at + duration.max(TIMING.enter_delay) + TIMING.exit_delay;
            last_deadline = last_deadline.max(gone);
        }
        prop_assert!(center.len() <= shows.len());

        let mut now = start;
        while now < last_deadline {
            now += Duration::from_millis(tick_step);
            center.tick(now);
        }

        prop_assert!(center.is_empty());
        prop_assert!(!center.has_pending_timers());
    }

    #[test]
    fn dismissing_twice_only_starts_one_exit(delay in 0u64..1_000) {
        let start = Instant::now();
        let mut center = NotificationCenter::new(TIMING, DefaultTitles::default());
        let id = center.info(start, "olá", None).expect("attached center");

        let at = start + Duration::from_millis(delay);
        center.tick(at);
        prop_assert!(center.remove(at, id));
        prop_assert!(!center.remove(at, id));
        prop_assert_eq!(center.get(id).map(|n| n.phase()), Some(Phase::Exiting));

        center.tick(at + TIMING.exit_delay);
        prop_assert!(center.get(id).is_none());
    }
}

#[test]
fn persistent_notifications_stay_until_dismissed() {
    let start = Instant::now();
    let mut center = NotificationCenter::new(TIMING, DefaultTitles::default());
    let id = center
        .show(start, "fixa", Severity::Warning, None, Some(Duration::ZERO))
        .expect("attached center");

    center.tick(start + Duration::from_secs(3600));

    let notification = center.get(id).expect("still mounted");
    assert!(notification.is_persistent());
    assert_eq!(notification.phase(), Phase::Visible);
}
