use std::fmt;

use gridsearch_core::{BeamParams, Grid, SearchResult};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

const RULE_WIDTH: usize = 50;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmReport {
    pub name: String,
    /// Path ends at the goal.
    pub found: bool,
    /// Cells in the returned path; `None` when the path is empty.
    pub path_length: Option<usize>,
    pub nodes_expanded: u64,
    pub explored: usize,
    /// Shortest goal path among the compared algorithms relative to this
    /// one, in percent. Only set when this algorithm reached the goal.
    pub path_efficiency: Option<f64>,
    /// Explored cells per path cell.
    pub exploration_rate: Option<f64>,
}

impl AlgorithmReport {
    pub fn from_result(name: &str, grid: &Grid, result: &SearchResult) -> Self {
        let path_length = (!result.path.is_empty()).then(|| result.path.len());
        let explored = result.explored.len();
        Self {
            name: name.to_string(),
            found: result.reaches(grid.goal()),
            path_length,
            nodes_expanded: result.expansions,
            explored,
            path_efficiency: None,
            exploration_rate: path_length.map(|len| explored as f64 / len as f64),
        }
    }

    /// Length of the path when it reaches the goal.
    fn goal_path_length(&self) -> Option<usize> {
        self.path_length.filter(|_| self.found)
    }

    fn path_label(&self) -> String {
        match (self.path_length, self.found) {
            (Some(len), true) => len.to_string(),
            (Some(len), false) => format!("{len} (partial)"),
            (None, _) => "no path".to_string(),
        }
    }
}

impl fmt::Display for AlgorithmReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        writeln!(f, "  Nodes Expanded: {}", self.nodes_expanded)?;
        writeln!(f, "  Path Length: {}", self.path_label())?;
        writeln!(f, "  Total Explored: {}", self.explored)?;
        match self.path_efficiency {
            Some(pct) => writeln!(f, "  Path Efficiency: {pct:.1}%")?,
            None => writeln!(f, "  Path Efficiency: n/a")?,
        }
        match self.exploration_rate {
            Some(rate) => write!(f, "  Exploration Rate: {rate:.2} nodes/step"),
            None => write!(f, "  Exploration Rate: n/a"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath {
    pub algorithm: String,
    pub path_length: usize,
}

/// Best value of each metric across the compared algorithms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// First algorithm with the shortest goal path, if any reached the goal.
    pub shortest_path: Option<ShortestPath>,
    pub least_explored: usize,
    pub fewest_expansions: u64,
}

impl Summary {
    fn from_reports(reports: &[AlgorithmReport]) -> Self {
        let shortest_path = reports
            .iter()
            .filter_map(|a| a.goal_path_length().map(|len| (a, len)))
            .min_by_key(|&(_, len)| len)
            .map(|(a, len)| ShortestPath { algorithm: a.name.clone(), path_length: len });
        Self {
            shortest_path,
            least_explored: reports.iter().map(|a| a.explored).min().unwrap_or_default(),
            fewest_expansions: reports.iter().map(|a| a.nodes_expanded).min().unwrap_or_default(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Best Performers:")?;
        match &self.shortest_path {
            Some(s) => writeln!(f, "  Shortest Path: {} ({} cells)", s.algorithm, s.path_length)?,
            None => writeln!(f, "  Shortest Path: none")?,
        }
        writeln!(f, "  Least Exploration: {} nodes", self.least_explored)?;
        write!(f, "  Fewest Expansions: {}", self.fewest_expansions)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub width: usize,
    pub height: usize,
    /// Measured on the generated grid, not the requested value.
    pub obstacle_density: f64,
    pub beam: BeamParams,
    pub algorithms: Vec<AlgorithmReport>,
    pub summary: Summary,
}

impl ComparisonReport {
    /// Collects per-algorithm reports, filling in path efficiency against the
    /// shortest goal path and the summary.
    pub fn new(grid: &Grid, beam: BeamParams, mut algorithms: Vec<AlgorithmReport>) -> Self {
        let summary = Summary::from_reports(&algorithms);
        if let Some(best) = &summary.shortest_path {
            for a in &mut algorithms {
                a.path_efficiency = a.goal_path_length().map(|len| best.path_length as f64 / len as f64 * 100.0);
            }
        }
        Self {
            width: grid.width(),
            height: grid.height(),
            obstacle_density: grid.obstacle_density(),
            beam,
            algorithms,
            summary,
        }
    }

    pub fn get(&self, name: &str) -> Option<&AlgorithmReport> {
        self.algorithms.iter().find(|a| a.name == name)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(
            f,
            "Algorithm Comparison ({}x{}, obstacle density {:.2}):",
            self.width, self.height, self.obstacle_density
        )?;
        writeln!(f, "{rule}")?;
        let body = self.algorithms.iter().map(|a| format!("{a}\n{rule}")).join("\n");
        writeln!(f, "{body}")?;
        writeln!(f, "{}", self.summary)
    }
}
