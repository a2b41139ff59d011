use std::{fs::OpenOptions, mem};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::{flock::Flock, options::SaveOptions};

/// One sampled boid state, flat so it serializes straight to a CSV row.
#[derive(Serialize, Debug, Clone, Copy)]
pub struct BoidSample {
    pub boid: usize,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub tick: u64,
}

#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("could not open sample file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not write sample: {0}")]
    Csv(#[from] csv::Error),
}

const PREFIX: &str = "swarm-data";

/// Accumulates per-tick boid positions and optionally saves them as CSV
/// when popped.
///
/// Purely observational: nothing recorded here is ever read back into
/// the simulation.
pub struct FlockWatcher {
    samples: Vec<BoidSample>,
    ticker: u64,
    sample_rate: u64,
}

impl FlockWatcher {
    pub fn new(sample_rate: u64) -> Self {
        FlockWatcher {
            samples: Vec::new(),
            ticker: 0,
            sample_rate: sample_rate.max(1),
        }
    }

    /// Records the current flock state if this tick falls on the sample
    /// rate.
    pub fn watch(&mut self, flock: &Flock) {
        if !self.should_sample() {
            return;
        }

        let tick = self.ticker / self.sample_rate;
        self.samples
            .extend(flock.view().iter().enumerate().map(|(i, b)| BoidSample {
                boid: i,
                x: b.position.x,
                y: b.position.y,
                vx: b.velocity.x,
                vy: b.velocity.y,
                tick,
            }));
    }

    pub fn restart(&mut self) {
        self.samples.clear();
    }

    pub fn pop_data(&mut self) -> Vec<BoidSample> {
        mem::take(&mut self.samples)
    }

    /// Saves the collected samples in CSV format, then returns them while
    /// emptying the watcher.
    ///
    /// Depending on the save options this either overwrites the plain
    /// file or writes a new timestamped one.
    pub fn pop_data_save(
        &mut self,
        save_options: &SaveOptions,
    ) -> Result<Vec<BoidSample>, WatcherError> {
        let data = self.pop_data();

        if !save_options.save_locations {
            return Ok(data);
        }

        if let Some(path) = &save_options.save_locations_path {
            let file_path = format!(
                "{path}{file_name}",
                file_name = FlockWatcher::dataset_name(save_options, Utc::now())
            );

            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(file_path)?;
            let mut wtr = csv::Writer::from_writer(file);

            for sample in &data {
                wtr.serialize(sample)?;
            }
            wtr.flush()?;
        }

        Ok(data)
    }

    fn dataset_name(save_options: &SaveOptions, now: DateTime<Utc>) -> String {
        if save_options.save_locations_timestamp {
            format!("{PREFIX}_{}.csv", now.timestamp_millis())
        } else {
            format!("{PREFIX}.csv")
        }
    }

    fn should_sample(&mut self) -> bool {
        self.ticker += 1;
        self.ticker % self.sample_rate == 0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use super::FlockWatcher;
    use crate::{
        flock::Flock,
        options::{SaveOptions, SteeringWeights},
    };

    fn save_options(timestamp: bool) -> SaveOptions {
        SaveOptions {
            save_locations: true,
            save_locations_path: Some("".to_owned()),
            save_locations_timestamp: timestamp,
        }
    }

    #[test]
    fn dataset_name_timestamped() {
        let dt = Utc.with_ymd_and_hms(2022, 11, 9, 23, 54, 19).unwrap();
        let actual = FlockWatcher::dataset_name(&save_options(true), dt);

        assert_eq!(actual, "swarm-data_1668038059000.csv");
    }

    #[test]
    fn dataset_name_overwrite() {
        let dt = Utc.with_ymd_and_hms(2022, 11, 9, 23, 54, 19).unwrap();
        let actual = FlockWatcher::dataset_name(&save_options(false), dt);

        assert_eq!(actual, "swarm-data.csv");
    }

    #[test]
    fn watch_respects_the_sample_rate() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
        let mut flock = Flock::new(SteeringWeights::default());
        flock.add_boid(1., 2., &mut rng);
        flock.add_boid(3., 4., &mut rng);

        let mut watcher = FlockWatcher::new(4);
        for _ in 0..8 {
            watcher.watch(&flock);
        }

        // 8 ticks at a rate of 4 samples the flock twice
        let data = watcher.pop_data();
        assert_eq!(data.len(), 2 * 2);
        assert_eq!(data[0].tick, 1);
        assert_eq!(data[2].tick, 2);
    }

    #[test]
    fn pop_data_empties_the_watcher() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(9);
        let mut flock = Flock::new(SteeringWeights::default());
        flock.add_boid(1., 2., &mut rng);

        let mut watcher = FlockWatcher::new(1);
        watcher.watch(&flock);

        assert_eq!(watcher.pop_data().len(), 1);
        assert!(watcher.pop_data().is_empty());
    }
}
