//! Synthetic departure boards.
//!
//! There is no live feed behind the board: departures are generated on
//! demand from the network topology, so every board is plausible for the
//! station it is shown at (right lines, right termini, right stops) while
//! times and statuses are random.

use chrono::{Local, NaiveDateTime};
use rand::Rng;
use tracing::debug;

use crate::domain::{
    DepartureEntry, DepartureStatus, Direction, EXPRESS_MARKER, LineCode, Station,
    clean_station_name, estimate_text, same_station,
};
use crate::network::{NetworkTopology, StopSequencer};

use super::config::BoardConfig;
use super::rng::BoardRng;

/// Generates departure boards for stations of a network.
///
/// Generation never fails. An unknown station is replaced by the hub, and
/// an empty network produces an empty board.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleSynthesizer<'a> {
    network: &'a NetworkTopology,
    config: &'a BoardConfig,
}

impl<'a> ScheduleSynthesizer<'a> {
    pub fn new(network: &'a NetworkTopology, config: &'a BoardConfig) -> Self {
        Self { network, config }
    }

    /// Board for `station` starting at the current local time.
    pub fn generate(&self, station: &str, count: usize) -> Vec<DepartureEntry> {
        let mut rng = BoardRng::from_entropy();
        self.generate_at(station, count, Local::now().naive_local(), &mut rng)
    }

    /// Board for `station` with the first departure at `now`.
    ///
    /// Up to `count` candidate trains are drawn, alternating outbound and
    /// inbound. Candidates whose destination would be the station itself are
    /// dropped, so the board may be shorter than `count`. Rows are ordered
    /// with trains at the platform first, then by departure time.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        station: &str,
        count: usize,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Vec<DepartureEntry> {
        let Some(origin) = self.resolve_station(station) else {
            debug!("no stations loaded; board for {station} is empty");
            return Vec::new();
        };

        let lines = if origin.lines.is_empty() {
            self.network.known_line_codes()
        } else {
            origin.lines.clone()
        };
        if lines.is_empty() {
            return Vec::new();
        }

        let at_hub = same_station(&origin.name, self.network.hub());
        let sequencer = StopSequencer::new(self.network.line_topology());

        let mut departure = now;
        let mut entries = Vec::with_capacity(count);
        for i in 0..count {
            if i > 0 {
                departure += self.config.interval_after(departure);
            }
            let code = &lines[rng.gen_range(0..lines.len())];
            let direction = Direction::for_index(i);

            let Some(destination) = self.destination(origin, at_hub, code, direction) else {
                debug!(line = %code, ?direction, "skipping departure from {}", origin.name);
                continue;
            };

            let stops = sequencer.upcoming_stops(&origin.name, &destination, code);
            let stops = StopSequencer::format_for_display(&stops, self.config.max_stops);
            entries.push(self.entry(
                origin,
                &destination,
                code,
                direction,
                departure,
                stops,
                rng,
            ));
        }

        entries.sort_by(DepartureEntry::board_order);
        debug!(
            station = %origin.name,
            requested = count,
            generated = entries.len(),
            "synthesized board"
        );
        entries
    }

    fn resolve_station(&self, name: &str) -> Option<&'a Station> {
        self.network.station_by_name(name).or_else(|| {
            let substitute = self.network.primary_station();
            if let Some(s) = substitute {
                debug!("unknown station {name:?}; showing {}", s.name);
            }
            substitute
        })
    }

    /// Where a train on `code` leaving `origin` in `direction` is headed.
    ///
    /// Outbound trains run to the far terminus, inbound trains to the hub.
    /// `None` when that is the origin itself or the line has no terminus.
    fn destination(
        &self,
        origin: &Station,
        at_hub: bool,
        code: &LineCode,
        direction: Direction,
    ) -> Option<String> {
        match direction {
            Direction::Outbound => {
                let far = self.network.terminals(code).far?;
                (!same_station(&origin.name, &far)).then_some(far)
            }
            Direction::Inbound => (!at_hub).then(|| self.network.hub().to_string()),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn entry<R: Rng + ?Sized>(
        &self,
        origin: &Station,
        destination: &str,
        code: &LineCode,
        direction: Direction,
        departure_time: NaiveDateTime,
        stops: String,
        rng: &mut R,
    ) -> DepartureEntry {
        let config = self.config;

        let mut status = config.status_for_roll(rng.r#gen::<f64>());
        let mut delay_minutes = (status == DepartureStatus::Delayed)
            .then(|| rng.gen_range(config.delay_mins.clone()));

        let at_platform = rng.gen_bool(config.at_platform_probability);
        if at_platform {
            status = DepartureStatus::AtPlatform;
            delay_minutes = None;
        }

        let platform = status
            .shows_platform()
            .then(|| rng.gen_range(config.platforms.clone()).to_string());
        let is_express = rng.gen_bool(config.express_probability);
        let train_number = format!("{code}{}", rng.gen_range(config.train_numbers.clone()));

        let mut label = clean_station_name(destination);
        if is_express {
            label.push_str(EXPRESS_MARKER);
        }

        DepartureEntry {
            departure_time,
            destination: label,
            status,
            estimated: estimate_text(status, delay_minutes),
            delay_minutes,
            platform,
            line_code: code.clone(),
            color: self.network.line_color(code),
            train_number,
            accessible: origin.accessible,
            direction,
            is_express,
            at_platform,
            stops,
        }
    }
}
