use super::state::Tick;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    Liftoff,
    Apex,
    Touchdown,
    Custom(String),
}

/// A discrete event between two consecutive ticks.
#[derive(Debug, Clone)]
pub struct FlightEvent {
    pub time: f64,
    pub kind: EventKind,
    pub tick: Tick,
}

/// Passive detector fed consecutive ticks.
pub trait EventDetector {
    fn check(&mut self, prev: &Tick, current: &Tick) -> Option<EventKind>;
}

/// Ground contact changes: liftoff and touchdown.
pub struct GroundDetector;

impl EventDetector for GroundDetector {
    fn check(&mut self, prev: &Tick, current: &Tick) -> Option<EventKind> {
        match (prev.altitude_m > 0.0, current.altitude_m > 0.0) {
            (false, true) => Some(EventKind::Liftoff),
            (true, false) => Some(EventKind::Touchdown),
            _ => None,
        }
    }
}

/// Vertical velocity turning from climb to descent while airborne.
pub struct ApexDetector;

impl EventDetector for ApexDetector {
    fn check(&mut self, prev: &Tick, current: &Tick) -> Option<EventKind> {
        if prev.velocity_m_s > 0.0 && current.velocity_m_s <= 0.0 && current.altitude_m > 0.0 {
            Some(EventKind::Apex)
        } else {
            None
        }
    }
}

/// Fires once when altitude crosses a threshold in the given direction.
pub struct AltitudeDetector {
    pub altitude: f64,
    pub ascending: bool,
    fired: bool,
}

impl AltitudeDetector {
    pub fn new(altitude: f64, ascending: bool) -> Self {
        Self { altitude, ascending, fired: false }
    }
}

impl EventDetector for AltitudeDetector {
    fn check(&mut self, prev: &Tick, current: &Tick) -> Option<EventKind> {
        if self.fired {
            return None;
        }
        let crossed = if self.ascending {
            prev.altitude_m < self.altitude && current.altitude_m >= self.altitude
        } else {
            prev.altitude_m > self.altitude && current.altitude_m <= self.altitude
        };
        if crossed {
            self.fired = true;
            Some(EventKind::Custom(format!(
                "Altitude {:.1}m ({})",
                self.altitude,
                if self.ascending { "ascending" } else { "descending" }
            )))
        } else {
            None
        }
    }
}

/// Run the standard detectors over a recorded flight.
pub fn detect_events(ticks: &[Tick]) -> Vec<FlightEvent> {
    detect_events_with(ticks, Vec::new())
}

/// Standard detectors plus `extra`, in that order for events on the same tick.
pub fn detect_events_with(ticks: &[Tick], extra: Vec<Box<dyn EventDetector>>) -> Vec<FlightEvent> {
    let mut detectors: Vec<Box<dyn EventDetector>> =
        vec![Box::new(GroundDetector), Box::new(ApexDetector)];
    detectors.extend(extra);
    let mut events = Vec::new();
    for pair in ticks.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(FlightEvent { time: pair[1].time, kind, tick: pair[1] });
            }
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tick(t: f64, alt: f64, vz: f64) -> Tick {
        Tick {
            time: t,
            throttle_pct: 30.0,
            acceleration_m_s2: 0.0,
            velocity_m_s: vz,
            altitude_m: alt,
            grounded: alt == 0.0,
        }
    }

    #[test]
    fn ground_transitions() {
        let mut det = GroundDetector;
        assert_eq!(det.check(&tick(0.0, 0.0, 0.0), &tick(0.016, 0.01, 0.5)), Some(EventKind::Liftoff));
        assert_eq!(det.check(&tick(1.0, 0.2, -3.0), &tick(1.016, 0.0, 0.0)), Some(EventKind::Touchdown));
        assert_eq!(det.check(&tick(1.0, 0.0, 0.0), &tick(1.016, 0.0, 0.0)), None);
    }

    #[test]
    fn apex_detected() {
        let mut det = ApexDetector;
        assert_eq!(det.check(&tick(2.0, 10.0, 0.1), &tick(2.016, 10.0, -0.05)), Some(EventKind::Apex));
    }

    #[test]
    fn altitude_detector_fires_once() {
        let mut det = AltitudeDetector::new(5.0, true);
        let prev = tick(0.0, 4.9, 1.0);
        let curr = tick(0.016, 5.1, 1.0);
        assert!(det.check(&prev, &curr).is_some());
        assert!(det.check(&prev, &curr).is_none());
    }

    #[test]
    fn hop_has_liftoff_apex_touchdown() {
        let ticks = vec![
            tick(0.0, 0.0, 0.0),
            tick(0.1, 0.5, 2.0),
            tick(0.2, 0.7, -0.5),
            tick(0.3, 0.0, 0.0),
        ];
        let kinds: Vec<EventKind> = detect_events(&ticks).into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![EventKind::Liftoff, EventKind::Apex, EventKind::Touchdown]);
    }

    #[test]
    fn threshold_crossing_reported_with_standard_events() {
        let ticks = vec![
            tick(0.0, 0.0, 0.0),
            tick(0.1, 0.5, 2.0),
            tick(0.2, 0.7, -0.5),
            tick(0.3, 0.0, 0.0),
        ];
        let events = detect_events_with(&ticks, vec![Box::new(AltitudeDetector::new(0.6, true))]);
        let kinds: Vec<EventKind> = events.iter().map(|e| e.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Liftoff,
                EventKind::Apex,
                EventKind::Custom("Altitude 0.6m (ascending)".into()),
                EventKind::Touchdown,
            ]
        );
        assert_eq!(events[2].time, 0.2);
    }
}
