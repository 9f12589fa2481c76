use std::f64::consts::{FRAC_PI_2, PI};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Full scale of the 10-bit ADC behind the photoresistor.
pub const ADC_MAX: i32 = 1023;

const MAX_DAYLIGHT: f64 = 200.0;
const MAX_MOONLIGHT: f64 = 5.0;
const LAMP_LEVEL: f64 = 320.0;

const SUNRISE_START: f64 = 0.23;
const SUNRISE_END: f64 = 0.25;
const SUNSET_START: f64 = 0.73;
const SUNSET_END: f64 = 0.75;
const LAMP_OFF: f64 = 0.92;

/// Sensor level over one day: a moonlit night, daylight, then a lamp in the evening.
pub fn simulated_level(day_fraction: f64) -> f64 {
    let day_fraction = day_fraction.rem_euclid(1.0);

    if (SUNRISE_START..=SUNRISE_END).contains(&day_fraction) {
        let progress = (day_fraction - SUNRISE_START) / (SUNRISE_END - SUNRISE_START);
        (progress * FRAC_PI_2).sin() * MAX_DAYLIGHT
    } else if day_fraction > SUNRISE_END && day_fraction < SUNSET_START {
        MAX_DAYLIGHT
    } else if (SUNSET_START..=SUNSET_END).contains(&day_fraction) {
        let progress = (day_fraction - SUNSET_START) / (SUNSET_END - SUNSET_START);
        (progress * FRAC_PI_2).cos() * MAX_DAYLIGHT
    } else if day_fraction > SUNSET_END && day_fraction < LAMP_OFF {
        LAMP_LEVEL
    } else {
        // moonlight peaks at midnight
        let radians = day_fraction * 2.0 * PI;
        (radians.cos().max(0.0) * MAX_MOONLIGHT).max(0.0)
    }
}

/// Source of raw light readings.
pub trait LightSensor: Send {
    fn read(&mut self) -> i32;
}

/// Replays an accelerated day, one reading per tick, with a little noise.
pub struct SimulatedSensor {
    tick: u32,
    day_length_ticks: u32,
    jitter: i32,
    rng: StdRng,
}

impl SimulatedSensor {
    pub fn new(day_length_ticks: u32) -> Self {
        Self::with_rng(day_length_ticks, StdRng::seed_from_u64(rand::random()))
    }

    pub fn with_rng(day_length_ticks: u32, rng: StdRng) -> Self {
        Self {
            tick: 0,
            day_length_ticks: day_length_ticks.max(1),
            jitter: 2,
            rng,
        }
    }

    pub fn with_jitter(mut self, jitter: i32) -> Self {
        self.jitter = jitter.max(0);
        self
    }

    pub fn day_fraction(&self) -> f64 {
        (self.tick % self.day_length_ticks) as f64 / self.day_length_ticks as f64
    }
}

impl LightSensor for SimulatedSensor {
    fn read(&mut self) -> i32 {
        let level = simulated_level(self.day_fraction()).round() as i32;
        let noise = if self.jitter > 0 {
            self.rng.random_range(-self.jitter..=self.jitter)
        } else {
            0
        };
        self.tick = self.tick.wrapping_add(1);

        (level + noise).clamp(0, ADC_MAX)
    }
}
