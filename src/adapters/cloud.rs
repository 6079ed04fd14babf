//! Cloud property store adapter.
//!
//! Models the property-synchronization side of an IoT cloud "thing":
//! named float properties are registered once at boot with a publication
//! period, refreshed from each telemetry snapshot, and synced from the
//! main loop every iteration.  A sync publishes the dirty properties
//! whose period has elapsed as one JSON document.
//!
//! The network transport is an external collaborator — publication here
//! is fire-and-forget through the log boundary, mirroring the device's
//! serial trace of a real sync.

use heapless::Vec;
use log::{info, warn};
use serde_json::{Map, Number, Value};

use crate::app::events::TelemetryData;

/// Registered property capacity.  The thing schema has five; headroom
/// for a couple more without touching the type.
const MAX_PROPERTIES: usize = 8;

struct Property {
    name: &'static str,
    value: f32,
    period_ms: u32,
    last_published_ms: Option<u32>,
    dirty: bool,
}

pub struct PropertyStore {
    props: Vec<Property, MAX_PROPERTIES>,
}

impl PropertyStore {
    /// Register the thing's property schema.  `period_secs` applies to
    /// every readable property, matching the device's registration.
    pub fn new(period_secs: u32) -> Self {
        let mut store = Self { props: Vec::new() };
        for name in [
            "tank_distance_from_top_mm",
            "tank_level_gallons",
            "tank_level_percent",
            "tank_flow_rate_gpm",
            "water_sensor_drain",
        ] {
            store.register(name, period_secs);
        }
        store
    }

    fn register(&mut self, name: &'static str, period_secs: u32) {
        let prop = Property {
            name,
            value: 0.0,
            period_ms: period_secs.saturating_mul(1000),
            last_published_ms: None,
            dirty: false,
        };
        if self.props.push(prop).is_err() {
            warn!("cloud: property registry full, dropping '{}'", name);
        }
    }

    /// Fold a telemetry snapshot into the registered properties.
    /// Unchanged values stay clean and will not republish.
    pub fn refresh(&mut self, t: &TelemetryData) {
        self.set("tank_distance_from_top_mm", t.tank_distance_from_top_mm);
        self.set("tank_level_gallons", t.tank_level_gallons);
        self.set("tank_level_percent", t.tank_level_percent);
        self.set("tank_flow_rate_gpm", t.tank_flow_rate_gpm);
        self.set("water_sensor_drain", t.water_sensor_drain);
    }

    fn set(&mut self, name: &str, value: f32) {
        if let Some(p) = self.props.iter_mut().find(|p| p.name == name) {
            #[allow(clippy::float_cmp)] // same pipeline, exact compare intended
            if p.value != value {
                p.value = value;
                p.dirty = true;
            }
        }
    }

    /// Publish dirty properties whose period has elapsed.  Call every
    /// loop iteration; cheap when nothing is due.  Returns the number
    /// of properties published.
    pub fn sync(&mut self, now_ms: u32) -> usize {
        let mut doc = Map::new();
        for p in self.props.iter_mut() {
            if !p.dirty || !period_elapsed(p.last_published_ms, now_ms, p.period_ms) {
                continue;
            }
            if let Some(n) = Number::from_f64(f64::from(p.value)) {
                doc.insert(p.name.to_owned(), Value::Number(n));
                p.dirty = false;
                p.last_published_ms = Some(now_ms);
            }
        }

        let published = doc.len();
        if published > 0 {
            info!("CLOUD | sync {}", Value::Object(doc));
        }
        published
    }

    /// Current value of a registered property (tests / diagnostics).
    pub fn value(&self, name: &str) -> Option<f32> {
        self.props.iter().find(|p| p.name == name).map(|p| p.value)
    }
}

fn period_elapsed(last_ms: Option<u32>, now_ms: u32, period_ms: u32) -> bool {
    match last_ms {
        None => true,
        Some(last) => now_ms.wrapping_sub(last) >= period_ms,
    }
}
