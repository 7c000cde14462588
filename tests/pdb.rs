use canonical_pdb::{
    builder::TaskBuilder, config::Config, db::pdb::PatternDatabase,
    structures::distance::Distance,
};

mod distances {
    use super::*;

    #[test]
    fn chain() {
        let mut builder = TaskBuilder::new();
        let v = builder.fresh_variable(4).unwrap();

        builder.add_operator([(v, 0, 1)], 1).unwrap();
        builder.add_operator([(v, 1, 2)], 1).unwrap();
        builder.add_operator([(v, 2, 3)], 1).unwrap();
        builder.set_goal(v, 3).unwrap();
        let task = builder.finish().unwrap();

        let pdb = PatternDatabase::new(&task, &vec![v], &Config::default()).unwrap();

        assert_eq!(
            pdb.distances(),
            &[
                Distance::Finite(3),
                Distance::Finite(2),
                Distance::Finite(1),
                Distance::Finite(0),
            ]
        );
    }

    #[test]
    fn cheapest_path_wins() {
        let mut builder = TaskBuilder::new();
        let v = builder.fresh_variable(4).unwrap();

        builder.add_operator([(v, 0, 1)], 5).unwrap();
        builder.add_operator([(v, 0, 2)], 1).unwrap();
        builder.add_operator([(v, 1, 3)], 1).unwrap();
        builder.add_operator([(v, 2, 3)], 1).unwrap();
        builder.set_goal(v, 3).unwrap();
        let task = builder.finish().unwrap();

        let pdb = PatternDatabase::new(&task, &vec![v], &Config::default()).unwrap();

        assert_eq!(
            pdb.distances(),
            &[
                Distance::Finite(2),
                Distance::Finite(1),
                Distance::Finite(1),
                Distance::Finite(0),
            ]
        );
    }

    #[test]
    fn zero_cost_operators() {
        let mut builder = TaskBuilder::new();
        let v = builder.fresh_variable(3).unwrap();

        builder.add_operator([(v, 0, 1)], 0).unwrap();
        builder.add_operator([(v, 1, 2)], 2).unwrap();
        builder.set_goal(v, 2).unwrap();
        let task = builder.finish().unwrap();

        let pdb = PatternDatabase::new(&task, &vec![v], &Config::default()).unwrap();

        assert_eq!(
            pdb.distances(),
            &[
                Distance::Finite(2),
                Distance::Finite(2),
                Distance::Finite(0),
            ]
        );
    }

    #[test]
    fn states_without_a_path_are_unreachable() {
        let mut builder = TaskBuilder::new();
        let x = builder.fresh_variable(2).unwrap();
        let y = builder.fresh_variable(2).unwrap();

        builder.add_operator([(x, 0, 1)], 1).unwrap();
        builder.set_goal(x, 1).unwrap();
        builder.set_goal(y, 1).unwrap();
        let task = builder.finish().unwrap();

        let pdb = PatternDatabase::new(&task, &vec![y], &Config::default()).unwrap();

        assert_eq!(pdb.distances(), &[Distance::Unreachable, Distance::Finite(0)]);
    }
}

mod lookups {
    use super::*;

    #[test]
    fn lookup_projects_full_states() {
        let mut builder = TaskBuilder::new();
        let x = builder.fresh_variable(3).unwrap();
        let y = builder.fresh_variable(2).unwrap();

        builder.add_operator([(x, 0, 1)], 1).unwrap();
        builder.add_operator([(x, 1, 2)], 1).unwrap();
        builder.add_operator([(y, 0, 1)], 1).unwrap();
        builder.set_goal(x, 2).unwrap();
        builder.set_goal(y, 1).unwrap();
        let task = builder.finish().unwrap();

        let pdb = PatternDatabase::new(&task, &vec![x], &Config::default()).unwrap();

        // The value of y is forgotten by the projection.
        assert_eq!(pdb.lookup_distance(&[0, 0]), Distance::Finite(2));
        assert_eq!(pdb.lookup_distance(&[0, 1]), Distance::Finite(2));
        assert_eq!(pdb.lookup_distance(&[1, 0]), Distance::Finite(1));
        assert_eq!(pdb.lookup_distance(&[2, 1]), Distance::Finite(0));
        assert_eq!(pdb.lookup_distance(&task.goal), Distance::Finite(0));
    }

    #[test]
    fn elision_of_vacuous_operators_is_neutral() {
        let mut builder = TaskBuilder::new();
        let x = builder.fresh_variable(2).unwrap();
        let y = builder.fresh_variable(2).unwrap();

        builder.add_operator([(x, 0, 1)], 3).unwrap();
        builder.add_operator([(y, 0, 1)], 1).unwrap();
        builder.set_goal(x, 1).unwrap();
        builder.set_goal(y, 1).unwrap();
        let task = builder.finish().unwrap();

        let elide = Config::default();
        let retain = Config {
            retain_vacuous_operators: true,
        };

        let pdb_elide = PatternDatabase::new(&task, &vec![y], &elide).unwrap();
        let pdb_retain = PatternDatabase::new(&task, &vec![y], &retain).unwrap();

        assert_eq!(pdb_elide.distances(), pdb_retain.distances());
    }
}
