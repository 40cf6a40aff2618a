//! text rendering of candidate routes, cable plans and planning failures
//!
//! Nothing in the graph or spanning tree modules depends on this; callers
//! hand it finished results plus their own station labels.

use std::borrow::Cow;
use std::fmt;

use itertools::Itertools;

use crate::error::MstError;
use crate::graph::{CostT, IndexT, TotalCostT, WeightTable};
use crate::mst::SpanningTree;

const RULE: &str = "----------------------------------------------------";

/// display names for node indices
#[derive(Debug, Clone, Default)]
pub struct Labels {
    names: Vec<String>,
}

impl Labels {
    pub fn new<I, S>(names: I) -> Labels
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Labels {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// the name of node `i`, or `#i` when it has none
    pub fn get(&self, i: IndexT) -> Cow<'_, str> {
        match self.names.get(i as usize) {
            Some(name) => Cow::Borrowed(name.as_str()),
            None => Cow::Owned(format!("#{i}")),
        }
    }
}

/// formats an integer with comma thousands separators
pub fn format_thousands(value: TotalCostT) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .join(",");
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// a cost in thousands of dollars, e.g. `$1,250 K`
pub fn format_cost(value: TotalCostT) -> String {
    format!("${} K", format_thousands(value))
}

fn route_line(
    f: &mut fmt::Formatter<'_>,
    labels: &Labels,
    from: IndexT,
    to: IndexT,
    cost: CostT,
) -> fmt::Result {
    writeln!(
        f,
        "{:<20} <---> {:<20} Cost: {}",
        labels.get(from),
        labels.get(to),
        format_cost(cost as TotalCostT)
    )
}

/// every candidate route in the network
pub struct RoutesReport<'a> {
    pub table: &'a WeightTable,
    pub labels: &'a Labels,
}

impl fmt::Display for RoutesReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== CANDIDATE CABLE ROUTES ===")?;
        for (i, j, cost) in self.table.edges() {
            route_line(f, self.labels, i, j, cost)?;
        }
        Ok(())
    }
}

/// the chosen routes in the order stations joined the network, then the totals
pub struct PlanReport<'a> {
    pub tree: &'a SpanningTree,
    pub labels: &'a Labels,
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (tree, labels) = (self.tree, self.labels);
        writeln!(f, "=== OPTIMAL CABLE PLAN ===")?;
        writeln!(
            f,
            "Join order: {}",
            tree.join_order().map(|i| labels.get(i)).join(" -> ")
        )?;
        writeln!(f, "{RULE}")?;
        for edge in tree.edges() {
            route_line(f, labels, edge.from, edge.to, edge.cost)?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "Stations connected: {}", tree.n())?;
        writeln!(f, "Cables installed: {}", tree.len())?;
        writeln!(f, "TOTAL NETWORK COST: {}", format_cost(tree.total_cost()))
    }
}

/// a planning failure, naming the stations reached before a disconnection
pub struct ErrorReport<'a> {
    pub error: &'a MstError,
    pub labels: &'a Labels,
}

impl fmt::Display for ErrorReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "planning failed: {}", self.error)?;
        if let MstError::Disconnected { connected, n } = self.error {
            let labels = self.labels;
            let unreached = (0..*n as IndexT)
                .filter(|i| !connected.contains(i))
                .map(|i| labels.get(i))
                .join(", ");
            writeln!(
                f,
                "connected: {}",
                connected.iter().map(|&i| labels.get(i)).join(", ")
            )?;
            writeln!(f, "unreachable: {unreached}")?;
        }
        Ok(())
    }
}

pub fn render_routes(table: &WeightTable, labels: &Labels) -> String {
    RoutesReport { table, labels }.to_string()
}

pub fn render_plan(tree: &SpanningTree, labels: &Labels) -> String {
    PlanReport { tree, labels }.to_string()
}

pub fn render_error(error: &MstError, labels: &Labels) -> String {
    ErrorReport { error, labels }.to_string()
}
