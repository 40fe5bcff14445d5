//! Property tests for the CSV layer and the persisted result.
//!
//! Any table the loader accepts must survive a write/load cycle unchanged,
//! and any analysis over it must export to JSON that imports back.

use proptest::prelude::*;

use streaklab_core::{CompanyColumn, ReturnTable};
use streaklab_runner::{
    export_json, import_json, load_table, run_analysis_on, write_table_csv, AnalysisConfig,
    DataSource, LoadedTable,
};

fn cell() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        8 => (-100.0f64..100.0).prop_map(Some),
        1 => (-100.0f64..=0.0).prop_map(Some),
    ]
}

fn table() -> impl Strategy<Value = ReturnTable> {
    (1usize..25, 1usize..6).prop_flat_map(|(rows, cols)| {
        proptest::collection::vec(proptest::collection::vec(cell(), rows), cols).prop_map(
            move |columns| {
                let dates = (0..rows).map(|i| format!("2024-02-{:02}", i + 1)).collect();
                let columns = columns
                    .into_iter()
                    .enumerate()
                    .map(|(i, returns)| CompanyColumn {
                        company: format!("{:06}", (i + 1) * 10),
                        returns,
                    })
                    .collect();
                ReturnTable::new(dates, columns).unwrap()
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn written_table_loads_back_identically(table in table()) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("returns.csv");

        write_table_csv(&table, &path).unwrap();
        let loaded = load_table(&path).unwrap();

        prop_assert_eq!(loaded.table, table);
    }

    #[test]
    fn analysis_of_any_loadable_table_round_trips_through_json(
        table in table(),
        n in 3usize..6,
    ) {
        let data = LoadedTable {
            dataset_hash: streaklab_runner::data_loader::compute_dataset_hash(&table),
            table,
            source: DataSource::Csv { path: "generated.csv".into() },
        };
        let mut config = AnalysisConfig::default();
        config.analysis.streak_length = n;

        let result = run_analysis_on(&config, &data).unwrap();
        for event in &result.ranked {
            prop_assert!(event.cumulative_return_pct.is_finite());
        }

        let loaded = import_json(&export_json(&result).unwrap()).unwrap();
        prop_assert_eq!(loaded.ranked.len(), result.ranked.len());
        prop_assert_eq!(loaded.summary.positive_count, result.summary.positive_count);
    }
}
