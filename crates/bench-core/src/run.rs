use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::error::{BenchError, BenchResult};
use crate::resolver::{ConnectionResolver, ResolvedConnection};
use crate::target::DatabaseTarget;

/// Which targets a benchmark session covers, and how often.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunMatrix {
    #[serde(default = "default_targets")]
    pub targets: Vec<DatabaseTarget>,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default, with = "humantime_serde")]
    pub warmup: Duration,
    #[serde(default = "default_duration", with = "humantime_serde")]
    pub duration: Duration,
}

fn default_targets() -> Vec<DatabaseTarget> {
    DatabaseTarget::ALL.to_vec()
}

fn default_iterations() -> u32 {
    1
}

fn default_duration() -> Duration {
    Duration::from_secs(30)
}

impl Default for RunMatrix {
    fn default() -> Self {
        Self {
            targets: default_targets(),
            iterations: default_iterations(),
            warmup: Duration::ZERO,
            duration: default_duration(),
        }
    }
}

/// One concrete benchmark execution against a single target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkRun {
    pub id: Uuid,
    pub target: DatabaseTarget,
    /// 1-based.
    pub iteration: u32,
    #[serde(with = "humantime_serde")]
    pub warmup: Duration,
    #[serde(with = "humantime_serde")]
    pub duration: Duration,
}

impl RunMatrix {
    pub fn validate(&self) -> BenchResult<()> {
        if self.targets.is_empty() {
            return Err(BenchError::Config(
                "runs.targets must list at least one target".into(),
            ));
        }
        if self.iterations == 0 {
            return Err(BenchError::Config("runs.iterations must be at least 1".into()));
        }
        Ok(())
    }

    /// Targets in configured order with duplicates dropped.
    pub fn unique_targets(&self) -> Vec<DatabaseTarget> {
        let mut seen = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            if !seen.contains(target) {
                seen.push(*target);
            }
        }
        seen
    }

    /// Expand into runs, target-major.
    pub fn enumerate(&self) -> Vec<BenchmarkRun> {
        self.unique_targets()
            .into_iter()
            .flat_map(|target| {
                (1..=self.iterations).map(move |iteration| BenchmarkRun {
                    id: Uuid::new_v4(),
                    target,
                    iteration,
                    warmup: self.warmup,
                    duration: self.duration,
                })
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedRun {
    pub run: BenchmarkRun,
    pub connection: ResolvedConnection,
}

/// Every run of a matrix paired with the connection it will use.
#[derive(Debug, Clone, Serialize)]
pub struct RunPlan {
    pub runs: Vec<PlannedRun>,
}

impl RunPlan {
    pub fn build(matrix: &RunMatrix, resolver: &ConnectionResolver) -> Self {
        let runs: Vec<PlannedRun> = matrix
            .enumerate()
            .into_iter()
            .map(|run| PlannedRun {
                connection: resolver.resolve(run.target),
                run,
            })
            .collect();
        tracing::info!(
            runs = runs.len(),
            targets = matrix.unique_targets().len(),
            iterations = matrix.iterations,
            "Built run plan"
        );
        Self { runs }
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionConfig;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn enumerates_targets_times_iterations() {
        let matrix = RunMatrix {
            targets: vec![DatabaseTarget::MongoNative, DatabaseTarget::OracleJdbc],
            iterations: 3,
            ..RunMatrix::default()
        };
        let runs = matrix.enumerate();
        assert_eq!(runs.len(), 6);

        let order: Vec<_> = runs.iter().map(|r| (r.target, r.iteration)).collect();
        assert_eq!(
            order,
            vec![
                (DatabaseTarget::MongoNative, 1),
                (DatabaseTarget::MongoNative, 2),
                (DatabaseTarget::MongoNative, 3),
                (DatabaseTarget::OracleJdbc, 1),
                (DatabaseTarget::OracleJdbc, 2),
                (DatabaseTarget::OracleJdbc, 3),
            ]
        );

        let ids: HashSet<_> = runs.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), runs.len());
    }

    #[test]
    fn duplicate_targets_are_collapsed() {
        let matrix = RunMatrix {
            targets: vec![
                DatabaseTarget::OracleRelational,
                DatabaseTarget::MongoNative,
                DatabaseTarget::OracleRelational,
            ],
            ..RunMatrix::default()
        };
        assert_eq!(
            matrix.unique_targets(),
            vec![DatabaseTarget::OracleRelational, DatabaseTarget::MongoNative]
        );
        assert_eq!(matrix.enumerate().len(), 2);
    }

    #[test]
    fn validate_rejects_empty_matrix() {
        let no_targets = RunMatrix {
            targets: Vec::new(),
            ..RunMatrix::default()
        };
        assert!(matches!(no_targets.validate(), Err(BenchError::Config(_))));

        let no_iterations = RunMatrix {
            iterations: 0,
            ..RunMatrix::default()
        };
        assert!(matches!(no_iterations.validate(), Err(BenchError::Config(_))));
    }

    #[test]
    fn durations_parse_from_humantime() {
        let matrix: RunMatrix = serde_yaml::from_str(
            "targets: [ORACLE_DUALITY_VIEW]\nwarmup: 5s\nduration: 2m\n",
        )
        .unwrap();
        assert_eq!(matrix.targets, vec![DatabaseTarget::OracleDualityView]);
        assert_eq!(matrix.iterations, 1);
        assert_eq!(matrix.warmup, Duration::from_secs(5));
        assert_eq!(matrix.duration, Duration::from_secs(120));
    }

    #[test]
    fn plan_pairs_each_run_with_its_family_connection() {
        let resolver = ConnectionResolver::new(Arc::new(ConnectionConfig::default()));
        let plan = RunPlan::build(&RunMatrix::default(), &resolver);
        assert_eq!(plan.len(), DatabaseTarget::ALL.len());
        for planned in &plan.runs {
            assert_eq!(planned.connection.family(), planned.run.target.family());
        }
    }
}
