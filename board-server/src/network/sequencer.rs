//! Intermediate-stop sequencing along a line.

use crate::domain::{Direction, LineCode, clean_station_name};

use super::line_topology::LineTopology;

/// Shown instead of a stop list when no intermediate stops are known.
pub const EXPRESS_SERVICE: &str = "Express Service";

/// Separator between stops in the formatted list.
pub const STOP_SEPARATOR: &str = " • ";

/// Default number of stops shown on a board row.
pub const DEFAULT_MAX_STOPS: usize = 3;

/// Computes the ordered stops a train calls at between two stations.
///
/// Lookups never fail: a missing line or station yields an empty list,
/// which callers present as an express service.
#[derive(Debug, Clone, Copy)]
pub struct StopSequencer<'a> {
    lines: &'a LineTopology,
}

impl<'a> StopSequencer<'a> {
    pub fn new(lines: &'a LineTopology) -> Self {
        Self { lines }
    }

    /// Stations of a line in the given direction.
    ///
    /// Outbound runs from the hub to the far terminus; inbound is the reverse.
    /// An unknown line yields an empty list.
    pub fn stops_for_line(&self, code: &LineCode, direction: Direction) -> Vec<&'a str> {
        let Some(route) = self.lines.route(code) else {
            return Vec::new();
        };

        let mut stops: Vec<&str> = route.stations().iter().map(String::as_str).collect();
        if direction == Direction::Inbound {
            stops.reverse();
        }
        stops
    }

    /// Stops after `origin` up to and including `destination`.
    ///
    /// The origin is never included and the destination always is, in travel
    /// order: canonical order when the origin precedes the destination,
    /// reversed otherwise. The length is always the distance between the two
    /// positions. Names are matched after cleaning, in any case.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::domain::LineCode;
    /// use board_server::network::{LineTopology, StopSequencer};
    ///
    /// let lines = LineTopology::curated();
    /// let sequencer = StopSequencer::new(&lines);
    /// let st = LineCode::parse("ST").unwrap();
    ///
    /// assert_eq!(sequencer.upcoming_stops("Union", "Agincourt", &st), ["Kennedy", "Agincourt"]);
    /// assert_eq!(sequencer.upcoming_stops("Agincourt", "Union", &st), ["Kennedy", "Union Station"]);
    /// assert!(sequencer.upcoming_stops("Union", "Oshawa", &st).is_empty());
    /// ```
    pub fn upcoming_stops(
        &self,
        origin: &str,
        destination: &str,
        code: &LineCode,
    ) -> Vec<&'a str> {
        let Some(route) = self.lines.route(code) else {
            return Vec::new();
        };
        let (Some(from), Some(to)) = (route.position(origin), route.position(destination)) else {
            return Vec::new();
        };

        let stations = route.stations();
        if from < to {
            stations[from + 1..=to].iter().map(String::as_str).collect()
        } else {
            stations[to..from].iter().rev().map(String::as_str).collect()
        }
    }

    /// Join up to `max_stops` cleaned names for a board row.
    ///
    /// # Examples
    ///
    /// ```
    /// use board_server::network::StopSequencer;
    ///
    /// assert_eq!(
    ///     StopSequencer::format_for_display(&["Kennedy GO", "Agincourt", "Milliken", "Unionville"], 3),
    ///     "Kennedy • Agincourt • Milliken"
    /// );
    /// assert_eq!(StopSequencer::format_for_display::<&str>(&[], 3), "Express Service");
    /// ```
    pub fn format_for_display<S: AsRef<str>>(stops: &[S], max_stops: usize) -> String {
        if stops.is_empty() {
            return EXPRESS_SERVICE.to_string();
        }

        stops
            .iter()
            .take(max_stops)
            .map(|s| clean_station_name(s.as_ref()))
            .collect::<Vec<_>>()
            .join(STOP_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::line_topology::HUB_STATION;

    fn code(s: &str) -> LineCode {
        LineCode::parse(s).unwrap()
    }

    #[test]
    fn outbound_starts_at_hub() {
        let lines = LineTopology::curated();
        let seq = StopSequencer::new(&lines);
        let stops = seq.stops_for_line(&code("MI"), Direction::Outbound);
        assert_eq!(stops.first(), Some(&HUB_STATION));
        assert_eq!(stops.last(), Some(&"Milton"));
    }

    #[test]
    fn inbound_is_reversed() {
        let lines = LineTopology::curated();
        let seq = StopSequencer::new(&lines);
        let mut outbound = seq.stops_for_line(&code("RH"), Direction::Outbound);
        let inbound = seq.stops_for_line(&code("RH"), Direction::Inbound);
        outbound.reverse();
        assert_eq!(inbound, outbound);
        assert_eq!(inbound.last(), Some(&HUB_STATION));
    }

    #[test]
    fn unknown_line_is_empty() {
        let lines = LineTopology::curated();
        let seq = StopSequencer::new(&lines);
        assert!(seq.stops_for_line(&code("ZZ"), Direction::Outbound).is_empty());
        assert!(seq.upcoming_stops("Union", "Kennedy", &code("ZZ")).is_empty());
    }

    #[test]
    fn upcoming_outbound() {
        let lines = LineTopology::curated();
        let seq = StopSequencer::new(&lines);
        assert_eq!(
            seq.upcoming_stops("Union", "Agincourt", &code("ST")),
            ["Kennedy", "Agincourt"]
        );
        assert_eq!(
            seq.upcoming_stops("Union Station", "Oshawa GO", &code("LE")).len(),
            9
        );
    }

    #[test]
    fn upcoming_accepts_raw_and_cleaned_names() {
        let lines = LineTopology::curated();
        let seq = StopSequencer::new(&lines);
        let raw = seq.upcoming_stops("Kennedy GO", "Milliken GO", &code("ST"));
        let cleaned = seq.upcoming_stops("Kennedy", "Milliken", &code("ST"));
        assert_eq!(raw, cleaned);
        assert_eq!(raw, ["Agincourt", "Milliken"]);
    }

    #[test]
    fn upcoming_inbound_ends_at_destination() {
        let lines = LineTopology::curated();
        let seq = StopSequencer::new(&lines);
        assert_eq!(
            seq.upcoming_stops("Kennedy GO", "Union Station", &code("ST")),
            [HUB_STATION]
        );
        assert_eq!(
            seq.upcoming_stops("Aurora GO", "Union Station", &code("BR")),
            ["King City", "Maple", "Rutherford", "Downsview Park", HUB_STATION]
        );
    }

    #[test]
    fn upcoming_ignores_name_case() {
        let lines = LineTopology::curated();
        let seq = StopSequencer::new(&lines);
        let st = code("ST");
        assert_eq!(seq.upcoming_stops("Union", "Agincourt go", &st), ["Kennedy", "Agincourt"]);
        assert_eq!(seq.upcoming_stops("UNION STATION", "Agincourt", &st), ["Kennedy", "Agincourt"]);
        assert_eq!(seq.upcoming_stops("kennedy GO", "union station", &st), [HUB_STATION]);
    }

    #[test]
    fn upcoming_missing_station_is_empty() {
        let lines = LineTopology::curated();
        let seq = StopSequencer::new(&lines);
        assert!(seq.upcoming_stops("Union", "Nowhere", &code("LW")).is_empty());
        assert!(seq.upcoming_stops("Nowhere", "Union", &code("LW")).is_empty());
        // Kennedy is not on Lakeshore West
        assert!(seq.upcoming_stops("Kennedy", "Union", &code("LW")).is_empty());
    }

    #[test]
    fn upcoming_same_station_is_empty() {
        let lines = LineTopology::curated();
        let seq = StopSequencer::new(&lines);
        assert!(seq.upcoming_stops("Oakville", "Oakville GO", &code("LW")).is_empty());
    }

    #[test]
    fn format_limits_and_cleans() {
        let stops = ["Union Station", "Kennedy GO", "Agincourt", "Milliken"];
        assert_eq!(
            StopSequencer::format_for_display(&stops, 2),
            "Union • Kennedy"
        );
        assert_eq!(
            StopSequencer::format_for_display(&stops, 10),
            "Union • Kennedy • Agincourt • Milliken"
        );
    }

    #[test]
    fn format_empty_is_express() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(StopSequencer::format_for_display(&empty, 3), EXPRESS_SERVICE);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// A curated line code and two positions along it.
    fn line_and_positions() -> impl Strategy<Value = (LineCode, usize, usize)> {
        let lines = LineTopology::curated();
        let choices: Vec<(LineCode, usize)> = lines
            .routes()
            .map(|r| (r.code().clone(), r.stations().len()))
            .collect();
        proptest::sample::select(choices)
            .prop_flat_map(|(code, len)| (Just(code), 0..len, 0..len))
    }

    proptest! {
        /// Length equals the distance between the two stations
        #[test]
        fn length_is_index_distance((code, a, b) in line_and_positions()) {
            let lines = LineTopology::curated();
            let seq = StopSequencer::new(&lines);
            let route = lines.route(&code).unwrap();
            let origin = &route.stations()[a];
            let destination = &route.stations()[b];

            let stops = seq.upcoming_stops(origin, destination, &code);
            prop_assert_eq!(stops.len(), a.abs_diff(b));
        }

        /// Both directions pass the same stations in opposite order, and
        /// each ends at its own destination
        #[test]
        fn swap_visits_same_stations((code, a, b) in line_and_positions()) {
            let lines = LineTopology::curated();
            let seq = StopSequencer::new(&lines);
            let route = lines.route(&code).unwrap();
            let origin = route.stations()[a].as_str();
            let destination = route.stations()[b].as_str();

            let forward = seq.upcoming_stops(origin, destination, &code);
            let mut backward = seq.upcoming_stops(destination, origin, &code);
            prop_assert_eq!(forward.len(), backward.len());
            if !forward.is_empty() {
                prop_assert_eq!(forward.last(), Some(&destination));
                prop_assert_eq!(backward.last(), Some(&origin));
                prop_assert!(!forward.contains(&origin));

                let n = forward.len();
                backward.reverse();
                prop_assert_eq!(&forward[..n - 1], &backward[1..]);
            }
        }

        /// The formatted list never shows more than the limit
        #[test]
        fn format_respects_limit((code, a, b) in line_and_positions(), max in 1usize..6) {
            let lines = LineTopology::curated();
            let seq = StopSequencer::new(&lines);
            let route = lines.route(&code).unwrap();
            let stops = seq.upcoming_stops(&route.stations()[a], &route.stations()[b], &code);

            let formatted = StopSequencer::format_for_display(&stops, max);
            if stops.is_empty() {
                prop_assert_eq!(formatted, EXPRESS_SERVICE);
            } else {
                prop_assert_eq!(formatted.split(STOP_SEPARATOR).count(), stops.len().min(max));
            }
        }
    }
}
