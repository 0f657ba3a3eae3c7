use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;

use chrono::{SecondsFormat, Utc};
use devicegate_config::{MetricsConfig, SensorProfile, UptimeMode};
use rand::Rng;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

use super::model::MetricsSnapshot;

#[derive(Debug, Clone, Copy, PartialEq)]
struct SensorReading {
    temperature_c: f64,
    cpu_load_percent: f64,
    ram_load_percent: f64,
    supply_voltage_v: f64,
}

const BASELINE: SensorReading = SensorReading {
    temperature_c: 25.0,
    cpu_load_percent: 14.0,
    ram_load_percent: 54.0,
    supply_voltage_v: 12.2,
};

/// Radians the simulated waveform advances per snapshot.
const PHASE_STEP: f64 = 0.15;

/// Stub metrics source. Nothing here is measured.
#[derive(Debug)]
pub struct MetricsSource {
    config: MetricsConfig,
    uptime: AtomicU64,
    samples: AtomicU64,
}

impl MetricsSource {
    pub fn new(config: MetricsConfig) -> Self {
        Self {
            config,
            uptime: AtomicU64::new(0),
            samples: AtomicU64::new(0),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.uptime.load(Ordering::SeqCst)
    }

    /// Advances the uptime counter by one second and returns the new value.
    pub fn tick(&self) -> u64 {
        self.uptime.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[instrument(skip(self))]
    pub fn snapshot(&self) -> MetricsSnapshot {
        let uptime_seconds = match self.config.uptime_mode {
            UptimeMode::PerRequest => self.tick(),
            UptimeMode::WallClock => self.uptime_seconds(),
        };

        let reading = match self.config.sensor_profile {
            SensorProfile::Constant => BASELINE,
            SensorProfile::Simulated => {
                let sample = self.samples.fetch_add(1, Ordering::SeqCst) + 1;
                simulated_reading(sample, &mut rand::thread_rng())
            }
        };

        MetricsSnapshot {
            temperature_c: reading.temperature_c,
            cpu_load_percent: reading.cpu_load_percent,
            ram_load_percent: reading.ram_load_percent,
            uptime_seconds,
            supply_voltage_v: reading.supply_voltage_v,
            timestamp_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Starts the once-per-second uptime task when running in wall-clock
    /// mode. The task ends on its own once the source is dropped.
    pub fn spawn_uptime_ticker(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if self.config.uptime_mode != UptimeMode::WallClock {
            return None;
        }

        let source: Weak<Self> = Arc::downgrade(self);
        Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            // The first tick fires immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let Some(source) = source.upgrade() else {
                    debug!("Metrics source dropped, stopping uptime ticker");
                    break;
                };
                source.tick();
            }
        }))
    }
}

fn simulated_reading(sample: u64, rng: &mut impl Rng) -> SensorReading {
    let phase = sample as f64 * PHASE_STEP;

    SensorReading {
        temperature_c: round_to(42.0 + 8.0 * phase.sin() + rng.gen_range(-0.5..0.5), 2),
        cpu_load_percent: round_to(BASELINE.cpu_load_percent + rng.gen_range(-4.0..4.0), 2),
        ram_load_percent: round_to(BASELINE.ram_load_percent + rng.gen_range(-2.0..2.0), 2),
        supply_voltage_v: round_to(
            BASELINE.supply_voltage_v + 0.3 * (phase / 2.0).sin() + rng.gen_range(-0.03..0.03),
            3,
        ),
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(uptime_mode: UptimeMode, sensor_profile: SensorProfile) -> MetricsSource {
        MetricsSource::new(MetricsConfig {
            uptime_mode,
            sensor_profile,
        })
    }

    #[test]
    fn test_per_request_uptime_increments_each_snapshot() {
        let source = source(UptimeMode::PerRequest, SensorProfile::Constant);
        assert_eq!(source.snapshot().uptime_seconds, 1);
        assert_eq!(source.snapshot().uptime_seconds, 2);
        assert_eq!(source.uptime_seconds(), 2);
    }

    #[test]
    fn test_wall_clock_snapshot_only_reads() {
        let source = source(UptimeMode::WallClock, SensorProfile::Constant);
        assert_eq!(source.snapshot().uptime_seconds, 0);
        source.tick();
        assert_eq!(source.snapshot().uptime_seconds, 1);
        assert_eq!(source.snapshot().uptime_seconds, 1);
    }

    #[test]
    fn test_constant_profile_values() {
        let snapshot = source(UptimeMode::PerRequest, SensorProfile::Constant).snapshot();
        assert_eq!(snapshot.temperature_c, 25.0);
        assert_eq!(snapshot.cpu_load_percent, 14.0);
        assert_eq!(snapshot.ram_load_percent, 54.0);
        assert_eq!(snapshot.supply_voltage_v, 12.2);
        assert!(chrono::DateTime::parse_from_rfc3339(&snapshot.timestamp_utc).is_ok());
        assert!(snapshot.timestamp_utc.ends_with('Z'));
    }

    #[test]
    fn test_simulated_profile_stays_in_band() {
        let source = source(UptimeMode::PerRequest, SensorProfile::Simulated);
        for _ in 0..200 {
            let s = source.snapshot();
            assert!((33.5..=50.5).contains(&s.temperature_c), "{}", s.temperature_c);
            assert!((11.87..=12.53).contains(&s.supply_voltage_v), "{}", s.supply_voltage_v);
            assert!((10.0..=18.0).contains(&s.cpu_load_percent));
            assert!((52.0..=56.0).contains(&s.ram_load_percent));
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.34567, 2), 12.35);
        assert_eq!(round_to(12.34567, 3), 12.346);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let snapshot = source(UptimeMode::PerRequest, SensorProfile::Constant).snapshot();
        let value = serde_json::to_value(&snapshot).unwrap();
        for key in [
            "temperatureC",
            "cpuLoadPercent",
            "ramLoadPercent",
            "uptimeSeconds",
            "supplyVoltageV",
            "timestampUtc",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }

    #[tokio::test]
    async fn test_ticker_not_spawned_in_per_request_mode() {
        let source = Arc::new(source(UptimeMode::PerRequest, SensorProfile::Constant));
        assert!(source.spawn_uptime_ticker().is_none());
    }

    #[tokio::test]
    async fn test_ticker_advances_uptime() {
        let source = Arc::new(source(UptimeMode::WallClock, SensorProfile::Constant));
        let handle = source.spawn_uptime_ticker().unwrap();

        tokio::time::sleep(Duration::from_millis(2300)).await;
        handle.abort();

        assert!(source.uptime_seconds() >= 1);
    }
}
