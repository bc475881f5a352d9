// algoperf - Algorithm Performance Analysis
//
// Copyright (c) 2025 algoperf contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Assembly of chart datasets from aggregated results.

use crate::config::PresentationConfig;
use crate::types::{AxisSpec, ChartDataset, Point, Report, ReportAxis, Scale, Series};
use algoperf_core::{
    Aggregation, AlgorithmId, GroupSummary, InputCategory, OptimalTable, QualityReport,
};
use std::collections::BTreeMap;
use tracing::debug;

/// Count-weighted running mean for groups collapsed onto one x value.
#[derive(Debug, Default, Clone, Copy)]
struct WeightedMean {
    sum: f64,
    weight: f64,
}

impl WeightedMean {
    fn add(&mut self, value: f64, weight: usize) {
        self.sum += value * weight as f64;
        self.weight += weight as f64;
    }

    fn value(&self) -> Option<f64> {
        (self.weight > 0.0).then(|| self.sum / self.weight)
    }
}

/// Collapses `(x, value, weight)` samples onto ascending x.
fn collapse<I>(samples: I) -> Vec<Point>
where
    I: IntoIterator<Item = (u64, f64, usize)>,
{
    let mut by_x: BTreeMap<u64, WeightedMean> = BTreeMap::new();
    for (x, value, weight) in samples {
        by_x.entry(x).or_default().add(value, weight);
    }
    by_x.into_iter()
        .filter_map(|(x, mean)| mean.value().map(|y| Point::new(x as f64, y)))
        .collect()
}

/// Builds the named chart datasets of a report.
///
/// Points are never interpolated: a size with no measurement simply has no
/// point.
///
/// # Examples
///
/// ```
/// use algoperf_core::{Aggregation, Dataset, OptimalPolicy, OptimalTable, QualityReport};
/// use algoperf_report::{PresentationConfig, ReportAssembler, ReportAxis};
///
/// let dataset = Dataset::new();
/// let policy = OptimalPolicy::default();
/// let aggregation = Aggregation::from_dataset(&dataset);
/// let optimal = OptimalTable::from_aggregation(&aggregation, &policy);
/// let quality = QualityReport::compute(&aggregation, &optimal, &policy);
///
/// let report = ReportAssembler::new(PresentationConfig::default())
///     .assemble(&aggregation, &optimal, &quality);
/// assert_eq!(report.datasets.len(), 6);
/// assert!(report.dataset(ReportAxis::TimeVsSize).unwrap().series.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReportAssembler {
    config: PresentationConfig,
}

impl ReportAssembler {
    /// Creates an assembler with the given presentation hints.
    pub fn new(config: PresentationConfig) -> Self {
        Self { config }
    }

    /// The presentation hints in use.
    pub fn config(&self) -> &PresentationConfig {
        &self.config
    }

    /// Assembles every dataset.
    pub fn assemble(
        &self,
        aggregation: &Aggregation,
        optimal: &OptimalTable,
        quality: &QualityReport,
    ) -> Report {
        let mut datasets = vec![
            self.time_vs_size(aggregation),
            self.memory_vs_size(aggregation),
            self.optimal_vs_size(optimal),
            self.time_vs_category(aggregation),
            self.quality_vs_size(quality),
        ];
        if self.config.include_efficiency {
            datasets.push(self.efficiency(aggregation));
        }

        for dataset in &datasets {
            debug!(
                dataset = %dataset.name,
                series = dataset.series.len(),
                points = dataset.point_count(),
                "assembled dataset"
            );
        }
        Report { datasets }
    }

    fn dataset(&self, axis: ReportAxis, y_axis: AxisSpec, series: Vec<Series>) -> ChartDataset {
        ChartDataset {
            axis,
            name: axis.as_str().to_string(),
            title: self.config.title(axis),
            x_axis: AxisSpec::linear(axis.x_title()),
            y_axis,
            series,
        }
    }

    fn time_axis(&self, axis: ReportAxis) -> AxisSpec {
        let title = match self.config.time_scale {
            Scale::Linear => axis.y_title().to_string(),
            Scale::Log => format!("{} - log scale", axis.y_title()),
        };
        AxisSpec {
            title,
            scale: self.config.time_scale,
            floor: (self.config.time_scale == Scale::Log).then_some(self.config.log_floor),
        }
    }

    fn algorithm_series(&self, algorithm: &AlgorithmId, points: Vec<Point>) -> Series {
        Series {
            label: self.config.label(algorithm),
            algorithm: Some(algorithm.clone()),
            category: None,
            color: Some(self.config.color(algorithm)),
            points,
        }
    }

    fn time_vs_size(&self, aggregation: &Aggregation) -> ChartDataset {
        let series = aggregation
            .algorithms()
            .into_iter()
            .map(|algorithm| {
                let points = collapse(
                    aggregation
                        .for_algorithm(&algorithm)
                        .map(|s| (s.key.input_size, s.mean_time_ms, s.count)),
                );
                self.algorithm_series(&algorithm, points)
            })
            .collect();
        let axis = ReportAxis::TimeVsSize;
        self.dataset(axis, self.time_axis(axis), series)
    }

    fn memory_vs_size(&self, aggregation: &Aggregation) -> ChartDataset {
        let series = aggregation
            .algorithms()
            .into_iter()
            .filter_map(|algorithm| {
                let points = collapse(aggregation.for_algorithm(&algorithm).filter_map(|s| {
                    s.mean_memory_kb
                        .map(|kb| (s.key.input_size, kb, s.memory_samples))
                }));
                (!points.is_empty()).then(|| self.algorithm_series(&algorithm, points))
            })
            .collect();
        let axis = ReportAxis::MemoryVsSize;
        self.dataset(axis, AxisSpec::linear(axis.y_title()), series)
    }

    fn optimal_vs_size(&self, optimal: &OptimalTable) -> ChartDataset {
        let mut by_category: BTreeMap<&InputCategory, Vec<Point>> = BTreeMap::new();
        for (key, entry) in optimal.iter() {
            by_category
                .entry(&key.input_category)
                .or_default()
                .push(Point::new(key.input_size as f64, entry.value));
        }

        let series = by_category
            .into_iter()
            .map(|(category, points)| Series {
                label: category.to_string(),
                algorithm: None,
                category: Some(category.clone()),
                color: None,
                points,
            })
            .collect();
        let axis = ReportAxis::OptimalVsSize;
        self.dataset(axis, AxisSpec::linear(axis.y_title()), series)
    }

    fn time_vs_category(&self, aggregation: &Aggregation) -> ChartDataset {
        let selected = self.config.category_algorithm.as_ref();
        let mut by_category: BTreeMap<&InputCategory, Vec<&GroupSummary>> = BTreeMap::new();
        for summary in aggregation
            .iter()
            .filter(|s| selected.map_or(true, |a| &s.key.algorithm == a))
        {
            by_category
                .entry(&summary.key.input_category)
                .or_default()
                .push(summary);
        }

        let series = by_category
            .into_iter()
            .map(|(category, summaries)| Series {
                label: category.to_string(),
                algorithm: selected.cloned(),
                category: Some(category.clone()),
                color: None,
                points: collapse(
                    summaries
                        .into_iter()
                        .map(|s| (s.key.input_size, s.mean_time_ms, s.count)),
                ),
            })
            .collect();

        let axis = ReportAxis::TimeVsCategory;
        let mut dataset = self.dataset(axis, self.time_axis(axis), series);
        if let Some(algorithm) = selected {
            if !self.config.titles.contains_key(&axis) {
                dataset.title = format!("{}: {}", dataset.title, self.config.label(algorithm));
            }
        }
        dataset
    }

    fn quality_vs_size(&self, quality: &QualityReport) -> ChartDataset {
        let mut by_series: BTreeMap<(&AlgorithmId, &InputCategory), Vec<Point>> = BTreeMap::new();
        for record in &quality.records {
            by_series
                .entry((&record.algorithm, &record.input_category))
                .or_default()
                .push(Point::new(record.input_size as f64, record.quality_pct));
        }

        let mut categories: Vec<&InputCategory> = by_series.keys().map(|(_, c)| *c).collect();
        categories.sort();
        categories.dedup();
        let single_category = categories.len() <= 1;

        let series = by_series
            .into_iter()
            .map(|((algorithm, category), mut points)| {
                points.sort_by(|a, b| a.x.total_cmp(&b.x));
                let label = if single_category {
                    self.config.label(algorithm)
                } else {
                    format!("{} ({})", self.config.label(algorithm), category)
                };
                Series {
                    label,
                    algorithm: Some(algorithm.clone()),
                    category: Some(category.clone()),
                    color: Some(self.config.color(algorithm)),
                    points,
                }
            })
            .collect();
        let axis = ReportAxis::QualityVsSize;
        self.dataset(axis, AxisSpec::linear(axis.y_title()), series)
    }

    fn efficiency(&self, aggregation: &Aggregation) -> ChartDataset {
        let series = aggregation
            .algorithms()
            .into_iter()
            .map(|algorithm| {
                let mut points: Vec<Point> = aggregation
                    .for_algorithm(&algorithm)
                    .map(|s| Point::new(s.mean_time_ms, s.best_result))
                    .collect();
                points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
                self.algorithm_series(&algorithm, points)
            })
            .collect();
        let axis = ReportAxis::Efficiency;
        self.dataset(axis, AxisSpec::linear(axis.y_title()), series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weighted_mean() {
        let points = collapse([(10, 1.0, 1), (10, 4.0, 3), (5, 2.0, 2)]);
        assert_eq!(points, vec![Point::new(5.0, 2.0), Point::new(10.0, 3.25)]);
    }

    #[test]
    fn test_zero_weight_dropped() {
        assert!(collapse([(10, 1.0, 0)]).is_empty());
    }
}
