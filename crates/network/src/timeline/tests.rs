//! Unit tests for timeline lookups.

#[cfg(test)]
mod tests {
    use crate::data::LineKey;
    use crate::timeline::*;

    #[test]
    fn test_nothing_before_first_phase() {
        let elements = active_elements(2020, PlanType::Realistic);
        assert_eq!(elements, ActiveElements::default());
        assert!(active_segments(2020, PlanType::Realistic, LineKey::Premetro).is_empty());
        assert!(active_station_names(2020, PlanType::Realistic).is_empty());
    }

    #[test]
    fn test_phase_lookup_uses_last_started_phase() {
        let plan = PlanType::Realistic.plan();
        assert_eq!(plan.phase_at(2030).unwrap().year, 2030);
        assert_eq!(plan.phase_at(2034).unwrap().year, 2030);
        assert_eq!(plan.phase_at(2035).unwrap().year, 2035);
        assert_eq!(plan.phase_at(2099).unwrap().year, 2050);
    }

    #[test]
    fn test_partial_and_full_status() {
        let e = active_elements(2030, PlanType::Realistic);
        assert_eq!(e.premetro, ElementStatus::Partial);
        assert_eq!(e.metro_a, ElementStatus::None);

        let e = active_elements(2035, PlanType::Realistic);
        assert_eq!(e.premetro, ElementStatus::Full);
        assert_eq!(e.metro_a, ElementStatus::Partial);
        assert!(e.stations_visible());
    }

    #[test]
    fn test_everything_built_by_2050_in_both_plans() {
        for plan in PlanType::ALL {
            let e = active_elements(2050, plan);
            for line in LineKey::ALL {
                assert_eq!(e.line(line), ElementStatus::Full, "{plan:?} {line:?}");
            }
        }
    }

    #[test]
    fn test_active_segments_in_travel_order() {
        let ids = active_segments(2045, PlanType::Realistic, LineKey::MetroA);
        assert_eq!(ids, vec!["a-east", "a-center", "a-south"]);
        let route = LineKey::MetroA.segments().splice(&ids).unwrap();
        assert_eq!(route.points().len(), 10);
    }

    #[test]
    fn test_every_phase_references_known_segments() {
        for plan in PlanType::ALL {
            for phase in plan.plan().phases {
                for (line, ids) in phase.segments {
                    let segments = line.segments();
                    for id in *ids {
                        assert!(segments.contains(id), "{plan:?} {}: {id}", phase.year);
                    }
                }
            }
        }
    }

    #[test]
    fn test_phases_sorted_by_year() {
        for plan in PlanType::ALL {
            let years: Vec<u32> = plan.plan().phases.iter().map(|p| p.year).collect();
            let mut sorted = years.clone();
            sorted.sort_unstable();
            assert_eq!(years, sorted, "{plan:?}");
        }
    }

    #[test]
    fn test_active_station_names_follow_segments() {
        let names = active_station_names(2030, PlanType::Realistic);
        assert!(names.contains(&"Britanski trg"), "got: {names:?}");
        assert!(!names.contains(&"Zrinjevac"), "got: {names:?}");
        assert!(!names.contains(&"Sesvete"), "got: {names:?}");

        let names = active_station_names(2050, PlanType::Realistic);
        assert!(names.contains(&"Sesvete"), "got: {names:?}");
        assert!(names.contains(&"Novi Zagreb Hub"), "got: {names:?}");
    }

    #[test]
    fn test_plan_from_name() {
        assert_eq!(PlanType::from_name("Ambitious"), Some(PlanType::Ambitious));
        assert_eq!(PlanType::from_name(" realistic "), Some(PlanType::Realistic));
        assert_eq!(PlanType::from_name("cheap"), None);
    }

    #[test]
    fn test_selection_defaults_to_full_network() {
        let selection = TimelineSelection::default();
        assert_eq!(selection.year, 2050);
        assert_eq!(selection.elements().gondola, ElementStatus::Full);
        assert_eq!(selection.phase().unwrap().label, "Network");
    }
}
