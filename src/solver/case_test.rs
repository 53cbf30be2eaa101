mod tests {
    use approx::assert_relative_eq;

    use crate::solver::{partitioned_cases, sweep_cases, Case, Parameter, MAX_CASES_PER_RUN};

    #[test]
    fn test_case_defaults_to_still_sea_level_air() {
        let case = Case::new("baseline");

        assert_eq!(case.name(), "baseline");
        assert_eq!(case.mach_number(), 0.0);
        assert_relative_eq!(case.air_density(), 1.225);
        assert_relative_eq!(case.freestream_velocity(), 1.0);
        assert!(case.parameters().is_empty());
        assert!(case.control_deflections().is_empty());
    }

    #[test]
    fn test_fixed_state_values() {
        let case = Case::new("cruise")
            .alpha(4.0)
            .beta(-1.0)
            .control_deflection("elevator", 2.5)
            .mach(0.7);

        let alpha = &case.parameters()["alpha"];
        assert_eq!(alpha.setting(), "alpha");
        assert_eq!(alpha.value(), 4.0);
        assert_eq!(case.parameters()["beta"].value(), -1.0);
        assert_eq!(case.control_deflections()["elevator"], 2.5);
        assert_eq!(case.mach_number(), 0.7);
    }

    #[test]
    fn test_trimmed_parameter() {
        // ISA values at h = 6000 m, trimmed to the design lift coefficient.
        let case = Case::new("flight_condition")
            .parameter(Parameter::trimmed("alpha", "CL", 0.6))
            .mach(0.7)
            .density(0.659697)
            .velocity(316.428 * 0.7);

        let trim = &case.parameters()["alpha"];
        assert_eq!(trim.variable(), "alpha");
        assert_eq!(trim.setting(), "CL");
        assert_eq!(trim.value(), 0.6);
    }

    #[test]
    fn test_sweep_cases_cartesian_product() {
        let base = Case::new("sweep").mach(0.3);
        let cases = sweep_cases(
            &base,
            &[
                ("alpha", vec![0.0, 5.0, 10.0]),
                ("beta", vec![-5.0, 5.0]),
            ],
        );

        assert_eq!(cases.len(), 6);
        for case in &cases {
            assert!(case.parameters().contains_key("alpha"));
            assert!(case.parameters().contains_key("beta"));
            assert_eq!(case.mach_number(), 0.3);
        }

        assert_eq!(cases[0].name(), "sweep-alpha=0-beta=-5");
        assert_eq!(cases[5].name(), "sweep-alpha=10-beta=5");

        let mut names: Vec<&str> = cases.iter().map(|case| case.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_sweep_cases_without_sweeps_is_base() {
        let base = Case::new("base").alpha(2.0);
        let cases = sweep_cases(&base, &[]);
        assert_eq!(cases, vec![base]);
    }

    #[test]
    fn test_partitioned_cases_respects_run_limit() {
        let cases: Vec<Case> = (0..60).map(|i| Case::new(&format!("case_{i}"))).collect();
        let partitions = partitioned_cases(&cases);

        assert_eq!(partitions.len(), 3);
        assert_eq!(partitions[0].len(), MAX_CASES_PER_RUN);
        assert_eq!(partitions[1].len(), MAX_CASES_PER_RUN);
        assert_eq!(partitions[2].len(), 10);
        assert_eq!(partitions[2][9].name(), "case_59");
    }

    #[test]
    fn test_partitioned_cases_small_batch() {
        let cases = vec![Case::new("only")];
        assert_eq!(partitioned_cases(&cases).len(), 1);
        assert!(partitioned_cases(&[]).is_empty());
    }
}
