use lumen_api::WearNotification;

pub const TITLE: &str = "Lumen Raspi";

/// Sensor levels on the 10-bit ADC scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// Minimum change that counts as a new reading
    pub variance: i32,
    /// Below this it is dark
    pub threshold0: i32,
    /// Above this the light is artificial
    pub threshold1: i32,
    pub d1: i32,
    pub d2: i32,
    pub d3: i32,
}

/// A lighting change worth notifying about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub groups: Vec<String>,
    pub description: String,
    pub icon: &'static str,
}

impl Condition {
    pub fn notification(&self, k0: i32, k1: i32) -> WearNotification {
        WearNotification::big_text(
            format!("{TITLE} {}", self.description),
            format!("Lighting conditions changed from {k0} to {k1}"),
        )
        .with_content(TITLE, &self.description)
        .with_summary(format!("Lighting changed from {k0} to {k1}"))
        .with_small_icon(lumen_api::notification::DEFAULT_SMALL_ICON)
        .with_background(self.icon)
    }
}

/// Classify the change from `k0` to `k1`, `None` if no group is concerned.
pub fn interpret(k0: i32, k1: i32, thresholds: &Thresholds) -> Option<Condition> {
    let Thresholds {
        threshold0,
        threshold1,
        d1,
        d2,
        d3,
        ..
    } = *thresholds;

    let d = (k1 - k0).abs();
    let mut groups = Vec::new();
    let mut description = "";
    let mut icon = "b";

    if d >= d1 {
        groups.push("d1");
        description = "Small Fluctuation";
        icon = "r";
    }
    if d >= d2 {
        groups.push("d2");
        description = "Medium Fluctuation";
    }
    if d >= d3 {
        groups.push("d3");
        description = "Large Fluctuation";
    }

    if k0 < threshold1 && threshold1 < k1 {
        // natural to artificial
        groups.push("artificial");
        icon = "y";
        description = "Artificial Lighting";
    } else if k0 > threshold1 && threshold1 > k1 {
        // artificial to natural
        groups.push("natural");
        icon = "g";
        description = "Natural Lighting";
    } else if k0 < threshold0 && threshold0 < k1 {
        // dark to natural or artificial
        if k1 < threshold1 {
            groups.push("natural");
            icon = "g";
            description = "Natural Lighting";
        } else {
            groups.push("artificial");
            icon = "y";
            description = "Artificial Lighting";
        }
    } else if k0 > threshold0 && threshold0 > k1 {
        groups.push("dark");
        description = "Absence of Light";
    }

    if groups.is_empty() {
        return None;
    }

    Some(Condition {
        groups: groups.into_iter().map(str::to_string).collect(),
        description: description.to_string(),
        icon,
    })
}

/// Tracks the last accepted reading.
#[derive(Debug, Clone)]
pub struct LightMonitor {
    thresholds: Thresholds,
    k0: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub k0: i32,
    pub k1: i32,
    pub condition: Option<Condition>,
}

impl LightMonitor {
    /// The baseline starts just below the first reading so the first tick
    /// reports the current lighting.
    pub fn new(thresholds: Thresholds, first_reading: i32) -> Self {
        Self {
            k0: first_reading - thresholds.threshold0,
            thresholds,
        }
    }

    pub fn baseline(&self) -> i32 {
        self.k0
    }

    /// Feed a reading; changes within `variance` are ignored and keep the baseline.
    pub fn observe(&mut self, k1: i32) -> Option<Change> {
        if (k1 - self.k0).abs() <= self.thresholds.variance {
            return None;
        }

        let k0 = self.k0;
        self.k0 = k1;

        Some(Change {
            k0,
            k1,
            condition: interpret(k0, k1, &self.thresholds),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLDS: Thresholds = Thresholds {
        variance: 5,
        threshold0: 10,
        threshold1: 250,
        d1: 50,
        d2: 100,
        d3: 150,
    };

    #[test]
    fn test_natural_to_artificial() {
        let condition = interpret(200, 300, &THRESHOLDS).unwrap();

        assert_eq!(condition.groups, vec!["d1", "d2", "artificial"]);
        assert_eq!(condition.description, "Artificial Lighting");
        assert_eq!(condition.icon, "y");
    }

    #[test]
    fn test_artificial_to_natural() {
        let condition = interpret(270, 240, &THRESHOLDS).unwrap();

        assert_eq!(condition.groups, vec!["natural"]);
        assert_eq!(condition.icon, "g");
    }

    #[test]
    fn test_dark_transitions() {
        let to_natural = interpret(5, 40, &THRESHOLDS).unwrap();
        assert_eq!(to_natural.groups, vec!["natural"]);
        assert_eq!(to_natural.description, "Natural Lighting");

        let to_artificial = interpret(5, 250, &THRESHOLDS).unwrap();
        assert_eq!(to_artificial.groups, vec!["d1", "d2", "d3", "artificial"]);

        let to_dark = interpret(40, 3, &THRESHOLDS).unwrap();
        assert_eq!(to_dark.groups, vec!["dark"]);
        assert_eq!(to_dark.description, "Absence of Light");
        assert_eq!(to_dark.icon, "b");
    }

    #[test]
    fn test_fluctuations_only() {
        let small = interpret(100, 160, &THRESHOLDS).unwrap();
        assert_eq!(small.groups, vec!["d1"]);
        assert_eq!(small.description, "Small Fluctuation");
        assert_eq!(small.icon, "r");

        let large = interpret(400, 240, &THRESHOLDS).unwrap();
        assert_eq!(large.groups, vec!["d1", "d2", "d3", "natural"]);

        assert!(interpret(100, 120, &THRESHOLDS).is_none());
    }

    #[test]
    fn test_monitor_variance_and_baseline() {
        let mut monitor = LightMonitor::new(THRESHOLDS, 100);
        assert_eq!(monitor.baseline(), 90);

        assert!(monitor.observe(94).is_none());
        assert_eq!(monitor.baseline(), 90);

        let change = monitor.observe(120).unwrap();
        assert_eq!((change.k0, change.k1), (90, 120));
        assert!(change.condition.is_none());
        assert_eq!(monitor.baseline(), 120);

        let change = monitor.observe(5).unwrap();
        let condition = change.condition.unwrap();
        assert_eq!(condition.groups, vec!["d1", "d2", "dark"]);
    }

    #[test]
    fn test_notification_text() {
        let condition = interpret(40, 3, &THRESHOLDS).unwrap();
        let notification = condition.notification(40, 3);

        assert_eq!(notification.content_title.as_deref(), Some("Lumen Raspi"));
        assert_eq!(notification.content_text.as_deref(), Some("Absence of Light"));

        let content = notification.content();
        assert_eq!(content.title, "Lumen Raspi Absence of Light");
        assert_eq!(content.body, "Lighting conditions changed from 40 to 3");
        assert_eq!(content.summary, "Lighting changed from 40 to 3");
        assert_eq!(notification.background.as_deref(), Some("ic_lightbulb_b"));
    }
}
