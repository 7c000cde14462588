use canonical_pdb::{
    builder::TaskBuilder,
    canonical::CanonicalPatternDatabases,
    config::Config,
    db::pdb::PatternDatabase,
    structures::{pattern::Pattern, task::TnfTask},
};

use rand::{rngs::StdRng, Rng, SeedableRng};

/// A small random task in transition normal form.
fn random_task(rng: &mut StdRng) -> TnfTask {
    let mut builder = TaskBuilder::new();

    let num_variables = rng.random_range(2..5);
    let mut variables = Vec::new();
    for _ in 0..num_variables {
        let domain_size = rng.random_range(2..4);
        variables.push((builder.fresh_variable(domain_size).unwrap(), domain_size));
    }

    for _ in 0..rng.random_range(3..9) {
        let mut entries = Vec::new();
        for &(variable, domain_size) in &variables {
            if rng.random_bool(0.5) {
                entries.push((
                    variable,
                    rng.random_range(0..domain_size),
                    rng.random_range(0..domain_size),
                ));
            }
        }
        if entries.is_empty() {
            let &(variable, domain_size) = &variables[0];
            entries.push((
                variable,
                rng.random_range(0..domain_size),
                rng.random_range(0..domain_size),
            ));
        }

        builder.add_operator(entries, rng.random_range(0..5)).unwrap();
    }

    for &(variable, domain_size) in &variables {
        builder.set_goal(variable, rng.random_range(0..domain_size)).unwrap();
    }

    builder.finish().unwrap()
}

/// Singleton patterns for every variable, and one two-variable pattern.
fn some_patterns(task: &TnfTask) -> Vec<Pattern> {
    let mut patterns: Vec<Pattern> =
        (0..task.num_variables() as u32).map(|variable| vec![variable]).collect();
    patterns.push(vec![0, 1]);
    patterns
}

/// The pattern covering every variable --- its projection is the identity abstraction, so its
/// database holds the exact goal distances of the task itself.
fn full_pattern(task: &TnfTask) -> Pattern {
    (0..task.num_variables() as u32).collect()
}

#[test]
fn construction_and_queries_are_deterministic() {
    for seed in 0..32 {
        let task = random_task(&mut StdRng::seed_from_u64(seed));
        let patterns = some_patterns(&task);

        let first = CanonicalPatternDatabases::new(&task, &patterns, &Config::default()).unwrap();
        let second = CanonicalPatternDatabases::new(&task, &patterns, &Config::default()).unwrap();

        assert_eq!(first.cliques(), second.cliques());
        for (a, b) in first.pdbs().iter().zip(second.pdbs()) {
            assert_eq!(a.distances(), b.distances());
        }

        let ground = PatternDatabase::new(&task, &full_pattern(&task), &Config::default()).unwrap();
        for index in 0..ground.projection().num_states() {
            let state = ground.projection().unrank_state(index);
            assert_eq!(first.compute_heuristic(&state), second.compute_heuristic(&state));
        }
    }
}

#[test]
fn canonical_values_are_admissible_and_dominant() {
    for seed in 0..32 {
        let task = random_task(&mut StdRng::seed_from_u64(seed));
        let patterns = some_patterns(&task);

        let collection =
            CanonicalPatternDatabases::new(&task, &patterns, &Config::default()).unwrap();

        // The full projection is the identity abstraction, so its distances are exact.
        let ground = PatternDatabase::new(&task, &full_pattern(&task), &Config::default()).unwrap();

        for index in 0..ground.projection().num_states() {
            let state = ground.projection().unrank_state(index);

            let h = collection.compute_heuristic(&state);
            let exact = ground.lookup_distance(&state);

            assert!(h <= exact, "seed {seed}: {h} exceeds {exact} at {state:?}");

            for pdb in collection.pdbs() {
                assert!(h >= pdb.lookup_distance(&state));
            }
        }
    }
}

#[test]
fn elision_configuration_does_not_change_values() {
    for seed in 0..16 {
        let task = random_task(&mut StdRng::seed_from_u64(seed));
        let patterns = some_patterns(&task);

        let elide = CanonicalPatternDatabases::new(&task, &patterns, &Config::default()).unwrap();
        let retain = CanonicalPatternDatabases::new(
            &task,
            &patterns,
            &Config {
                retain_vacuous_operators: true,
            },
        )
        .unwrap();

        for (a, b) in elide.pdbs().iter().zip(retain.pdbs()) {
            assert_eq!(a.distances(), b.distances());
        }
    }
}
