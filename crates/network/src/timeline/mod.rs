//! Construction timelines for the two development plans.
//!
//! A plan is a list of phases ordered by year. The phase in effect for a
//! given year is the last one whose year is not after it; before the first
//! phase nothing is built. Everything the map shows (which segments, which
//! stations, whether a line is complete) is derived from that phase.

mod plans;
mod tests;

pub use plans::{AMBITIOUS, REALISTIC};

use bevy::prelude::*;

use crate::config::DEFAULT_YEAR;
use crate::data::{all_stations, LineKey};

/// Which development plan is being explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlanType {
    #[default]
    Realistic,
    Ambitious,
}

impl PlanType {
    pub const ALL: [PlanType; 2] = [PlanType::Realistic, PlanType::Ambitious];

    pub fn plan(self) -> &'static Plan {
        match self {
            PlanType::Realistic => &REALISTIC,
            PlanType::Ambitious => &AMBITIOUS,
        }
    }

    /// Parse the short name used on the command line / environment.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "realistic" => Some(PlanType::Realistic),
            "ambitious" => Some(PlanType::Ambitious),
            _ => None,
        }
    }
}

/// How much of an element exists in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementStatus {
    #[default]
    None,
    /// Under construction / partially open.
    Partial,
    Full,
}

impl ElementStatus {
    pub fn is_visible(self) -> bool {
        self != ElementStatus::None
    }
}

/// One step of a plan's timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    pub year: u32,
    pub label: &'static str,
    pub description: &'static str,
    /// Open segment ids per line. Lines not listed have nothing open.
    pub segments: &'static [(LineKey, &'static [&'static str])],
    pub development: ElementStatus,
}

impl Phase {
    pub fn segments_for(&self, line: LineKey) -> &'static [&'static str] {
        self.segments
            .iter()
            .find(|(key, _)| *key == line)
            .map(|(_, ids)| *ids)
            .unwrap_or(&[])
    }
}

/// A development plan and its construction phases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plan {
    pub plan_type: PlanType,
    pub name: &'static str,
    pub description: &'static str,
    pub cost: &'static str,
    /// Sorted by year.
    pub phases: &'static [Phase],
}

impl Plan {
    /// The phase in effect during `year`, if construction has started.
    pub fn phase_at(&self, year: u32) -> Option<&'static Phase> {
        self.phases.iter().rev().find(|p| p.year <= year)
    }
}

/// Status of every element of the network in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveElements {
    pub metro_a: ElementStatus,
    pub metro_b: ElementStatus,
    pub metro_c: ElementStatus,
    pub premetro: ElementStatus,
    pub gondola: ElementStatus,
    pub development: ElementStatus,
}

impl ActiveElements {
    pub fn line(&self, line: LineKey) -> ElementStatus {
        match line {
            LineKey::MetroA => self.metro_a,
            LineKey::MetroB => self.metro_b,
            LineKey::MetroC => self.metro_c,
            LineKey::Premetro => self.premetro,
            LineKey::Gondola => self.gondola,
        }
    }

    /// Metro station markers are shown once any metro line exists.
    pub fn stations_visible(&self) -> bool {
        self.metro_a.is_visible() || self.metro_b.is_visible() || self.metro_c.is_visible()
    }
}

/// Open segment ids of `line` in `year` under `plan`, in travel order.
///
/// Ids come back in the line's own segment order so splicing them yields a
/// continuous route whatever order the phase lists them in.
pub fn active_segments(year: u32, plan: PlanType, line: LineKey) -> Vec<&'static str> {
    let Some(phase) = plan.plan().phase_at(year) else {
        return Vec::new();
    };
    let open = phase.segments_for(line);
    line.segments()
        .ids()
        .filter_map(|id| open.iter().copied().find(|o| *o == id))
        .collect()
}

/// Status of every network element in `year` under `plan`.
pub fn active_elements(year: u32, plan: PlanType) -> ActiveElements {
    let Some(phase) = plan.plan().phase_at(year) else {
        return ActiveElements::default();
    };
    let status = |line: LineKey| {
        let open = active_segments(year, plan, line).len();
        let total = line.segments().len();
        match open {
            0 => ElementStatus::None,
            n if n >= total => ElementStatus::Full,
            _ => ElementStatus::Partial,
        }
    };
    ActiveElements {
        metro_a: status(LineKey::MetroA),
        metro_b: status(LineKey::MetroB),
        metro_c: status(LineKey::MetroC),
        premetro: status(LineKey::Premetro),
        gondola: status(LineKey::Gondola),
        development: phase.development,
    }
}

/// Names of stations that sit on an open segment of one of their lines in
/// `year` under `plan`.
pub fn active_station_names(year: u32, plan: PlanType) -> Vec<&'static str> {
    all_stations()
        .filter(|station| {
            station.lines.iter().any(|&line| {
                let segments = line.segments();
                active_segments(year, plan, line).iter().any(|id| {
                    segments
                        .get(id)
                        .is_some_and(|seg| seg.points.contains(&station.position))
                })
            })
        })
        .map(|station| station.name)
        .collect()
}

/// The plan and year currently selected on the timeline scrubber.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineSelection {
    pub plan: PlanType,
    pub year: u32,
}

impl Default for TimelineSelection {
    fn default() -> Self {
        Self {
            plan: PlanType::Realistic,
            year: DEFAULT_YEAR,
        }
    }
}

impl TimelineSelection {
    pub fn elements(&self) -> ActiveElements {
        active_elements(self.year, self.plan)
    }

    pub fn segments(&self, line: LineKey) -> Vec<&'static str> {
        active_segments(self.year, self.plan, line)
    }

    pub fn phase(&self) -> Option<&'static Phase> {
        self.plan.plan().phase_at(self.year)
    }
}
