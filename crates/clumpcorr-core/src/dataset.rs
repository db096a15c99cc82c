//! The release history the analysis runs over.
//!
//! Counts were produced by the data clump detector on each tagged release;
//! BIC counts come from an SZZ pass over the same history.

use crate::types::{Dataset, Project, ReleaseRecord};

/// Label of the embedded project.
pub const EMBEDDED_PROJECT: &str = "tags";

/// (commit, tag, timestamp, field-field, parameter-parameter, parameter-field, BICs)
type RawRelease = (&'static str, &'static str, i64, u64, u64, u64, u64);

const RELEASES: &[RawRelease] = &[
    ("48d5c652044686720d8e17421980d179e9113c0b", "v1.7.0", 1358614875, 0, 34, 6, 620),
    ("181f32baf44f4faf9f3c5fb117b616dd22992735", "v1.7.1", 1359653828, 0, 34, 6, 904),
    ("e8e78e9ae78cc65af681316e478437686b288628", "v1.8.0", 1360449946, 0, 24, 6, 1207),
    ("2cc3f90a1995dd7f1b39b892a8279f424532ff09", "v1.8.1", 1362773433, 0, 24, 6, 1232),
    ("5e1f7d04b4f1549c14a861b9ae0a40f474637146", "v1.8.2", 1363120566, 0, 24, 8, 1283),
    ("20172fa7ce474e70c54798b4ba3743be56945ddc", "v1.8.3", 1364679985, 0, 14, 8, 1394),
    ("62fa1bde1d562472eca7d4a2d2117d94e6e36d3c", "v1.8.4", 1365844572, 0, 14, 8, 1402),
    ("d619c5f915e566df1af75b7bed95b90b5926a4aa", "v1.8.5", 1372548524, 0, 14, 7, 1475),
    ("dbb052cc4395c0130707fdcd182ef532ed3e2060", "v1.8.6", 1374692408, 0, 14, 5, 1505),
    ("d056482f7a9bf840a1bab0fef0be27ba05aa702c", "v1.9.0", 1385587060, 0, 28, 7, 1597),
    ("6a5a8260a1650bdc7584257d8d28bc91845f8db5", "v1.9.1", 1388096659, 0, 72, 14, 1602),
    ("74c53a807310decb44797677d41e964e288970ed", "v1.9.2", 1400884865, 0, 74, 16, 1697),
    ("7dd735871fec70d4a93837a26503470804b7d7e4", "v1.9.3", 1410019853, 0, 74, 16, 1703),
    ("6178836980e47d9813165051b4b8527fff8e1b58", "v1.9.4", 1432847965, 0, 74, 16, 1704),
    ("9da1b1ad1dd61b8df1571d7b6dc1308f19d5d40d", "v1.9.5", 1448662149, 0, 92, 17, 1704),
];

impl Dataset {
    /// The embedded release history: one project, fifteen releases.
    ///
    /// # Examples
    ///
    /// ```
    /// use clumpcorr_core::Dataset;
    ///
    /// let dataset = Dataset::embedded();
    /// assert_eq!(dataset.len(), 1);
    /// assert_eq!(dataset.record_count(), 15);
    /// ```
    pub fn embedded() -> Self {
        let project = RELEASES.iter().fold(
            Project::new(EMBEDDED_PROJECT),
            |project, &(commit, tag, timestamp, ff, pp, pf, bics)| {
                project.with_record(ReleaseRecord {
                    commit_hash: commit.to_string(),
                    tag: tag.to_string(),
                    timestamp,
                    field_field_data_clumps: ff,
                    parameter_parameter_data_clumps: pp,
                    parameter_field_data_clumps: pf,
                    bics_until_commit: bics,
                })
            },
        );
        Self::from_projects([project])
    }
}
