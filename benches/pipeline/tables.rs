use fake::Fake;
use perfprof::prelude::*;

/// Random running times in `[0.01, 1000)` for `instances` x `solvers`.
pub fn random_table(instances: usize, solvers: usize) -> Table {
    let rows = (0..instances)
        .map(|_| {
            (0..solvers)
                .map(|_| (0.01..1000.0).fake::<f64>())
                .collect()
        })
        .collect();

    Table::new(
        (0..instances).map(|i| format!("instance{}", i)).collect(),
        (0..solvers).map(|j| format!("solver{}", j)).collect(),
        Matrix::from_rows(rows).unwrap(),
    )
    .unwrap()
}
